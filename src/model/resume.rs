use serde::{Deserialize, Serialize};

use crate::model::{id::Id, null_as_default};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeDto {
    pub id: Id,
    #[serde(default)]
    pub student_id: Option<Id>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub achievements: Option<String>,
    /// Rendered resume text, present on resumes nested in vacancy responses
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of both resume creation and resume update
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeBodyDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<Id>,
    pub title: String,
    pub education: Option<String>,
    pub experience: Option<String>,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub achievements: Option<String>,
}
