use serde::{Deserialize, Serialize};

use crate::model::{id::Id, null_as_default, touch::VacancyTouchDto};

/// Employment types offered by the vacancy forms and filters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Internship,
    Contract,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        Self::FullTime,
        Self::PartTime,
        Self::Internship,
        Self::Contract,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Internship => "internship",
            Self::Contract => "contract",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullTime => "Full time",
            Self::PartTime => "Part time",
            Self::Internship => "Internship",
            Self::Contract => "Contract",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Company name nested in vacancy listings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyRefDto {
    #[serde(default)]
    pub company_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VacancyDto {
    pub id: Id,
    #[serde(default)]
    pub company_id: Option<Id>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub is_internship: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub company_profiles: Option<CompanyRefDto>,
    #[serde(default, alias = "responses_count")]
    pub response_count: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl VacancyDto {
    pub fn company_name(&self) -> Option<&str> {
        self.company_profiles
            .as_ref()
            .and_then(|company| company.company_name.as_deref())
    }

    pub fn status_or_pending(&self) -> &str {
        self.status.as_deref().unwrap_or("pending")
    }
}

/// A vacancy together with every response submitted to it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VacancyWithResponsesDto {
    #[serde(flatten)]
    pub vacancy: VacancyDto,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vacancy_touch: Vec<VacancyTouchDto>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewVacancyDto {
    pub company_id: Id,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub salary_range: Option<String>,
    pub location: Option<String>,
    pub employment_type: String,
    pub is_internship: bool,
}

/// Server-side filters of the vacancy listing
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VacancyQuery {
    pub employment_type: Option<EmploymentType>,
    pub is_internship: Option<bool>,
    pub limit: Option<u32>,
}

impl VacancyQuery {
    pub fn internships() -> Self {
        Self {
            is_internship: Some(true),
            ..Default::default()
        }
    }

    pub fn limited(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(kind) = self.employment_type {
            query.push(("employment_type", kind.as_str().to_string()));
        }
        if let Some(is_internship) = self.is_internship {
            query.push(("is_internship", is_internship.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        query
    }
}
