use serde::{Deserialize, Serialize};

use crate::model::{id::Id, null_as_default, touch::UserRefDto};

/// Filters of the company candidate search
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateSearchDto {
    pub skills: String,
    pub university: String,
    pub major: String,
    pub grad_year_from: Option<i32>,
    pub grad_year_to: Option<i32>,
}

impl CandidateSearchDto {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        for (key, value) in [
            ("skills", &self.skills),
            ("university", &self.university),
            ("major", &self.major),
        ] {
            if !value.trim().is_empty() {
                query.push((key, value.trim().to_string()));
            }
        }
        if let Some(year) = self.grad_year_from {
            query.push(("grad_year_from", year.to_string()));
        }
        if let Some(year) = self.grad_year_to {
            query.push(("grad_year_to", year.to_string()));
        }
        query
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateDto {
    pub id: Id,
    #[serde(default)]
    pub users: Option<UserRefDto>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub my_company_responses: Vec<serde_json::Value>,
}

impl CandidateDto {
    pub fn full_name(&self) -> Option<&str> {
        self.users.as_ref().and_then(|user| user.full_name.as_deref())
    }

    pub fn has_responded(&self) -> bool {
        !self.my_company_responses.is_empty()
    }
}
