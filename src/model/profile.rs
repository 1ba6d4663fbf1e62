use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::model::{id::Id, null_as_default};

/// A per-role profile stored under `/api/{resource}/profile`.
pub trait Profile: Serialize + DeserializeOwned + Clone + PartialEq + 'static {
    /// Resource segment of the profile endpoints
    const RESOURCE: &'static str;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfileDto {
    #[serde(default)]
    pub user_id: Option<Id>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl Profile for StudentProfileDto {
    const RESOURCE: &'static str = "students";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfileDto {
    #[serde(default)]
    pub user_id: Option<Id>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl Profile for CompanyProfileDto {
    const RESOURCE: &'static str = "companies";
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UniversityProfileDto {
    #[serde(default)]
    pub user_id: Option<Id>,
    #[serde(default)]
    pub university_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

impl Profile for UniversityProfileDto {
    const RESOURCE: &'static str = "universities";
}
