use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Platform-wide counters shown on the analytics page
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewDto {
    #[serde(default)]
    pub total_students: u64,
    #[serde(default)]
    pub total_companies: u64,
    #[serde(default)]
    pub active_vacancies: u64,
    #[serde(default)]
    pub active_internships: u64,
}

/// Bucket width of the time-series endpoints
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Granularity {
    #[default]
    Day,
    Week,
    Month,
}

impl Granularity {
    pub const ALL: [Granularity; 3] = [Self::Day, Self::Week, Self::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeBucketDto {
    pub period: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyActivityDto {
    pub company_name: String,
    #[serde(default)]
    pub vacancy_count: u64,
    #[serde(default)]
    pub response_count: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordCloudTermDto {
    pub text: String,
    #[serde(default)]
    pub value: u64,
}

/// Moderator breakdown of users and vacancies
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedAnalyticsDto {
    #[serde(default)]
    pub users_by_type: HashMap<String, u64>,
    #[serde(default)]
    pub vacancies_by_status: HashMap<String, u64>,
    #[serde(default)]
    pub total_users: Option<u64>,
    #[serde(default)]
    pub total_vacancies: Option<u64>,
}

impl DetailedAnalyticsDto {
    pub fn users_of_type(&self, user_type: &str) -> u64 {
        self.users_by_type.get(user_type).copied().unwrap_or(0)
    }

    pub fn vacancies_with_status(&self, status: &str) -> u64 {
        self.vacancies_by_status.get(status).copied().unwrap_or(0)
    }
}
