//! Company dashboard: profile, own vacancies, candidate search, and the responses
//! submitted to the company's vacancies.

use dioxus_logger::tracing;

use crate::{
    client::{
        api::ApiClient,
        error::{ActionError, FormError},
        state::{
            forms::{optional, optional_year, required, save_profile},
            loaded,
        },
    },
    model::{
        api::CreatedDto,
        candidate::CandidateSearchDto,
        id::Id,
        profile::CompanyProfileDto,
        touch::VacancyTouchDto,
        vacancy::{EmploymentType, NewVacancyDto, VacancyDto},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompanyTab {
    #[default]
    Profile,
    Vacancies,
    Candidates,
    Responses,
}

impl CompanyTab {
    pub const ALL: [CompanyTab; 4] = [
        Self::Profile,
        Self::Vacancies,
        Self::Candidates,
        Self::Responses,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Vacancies => "Vacancies",
            Self::Candidates => "Candidates",
            Self::Responses => "Responses",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanyData {
    pub profile: Option<CompanyProfileDto>,
    pub vacancies: Vec<VacancyDto>,
}

impl CompanyData {
    pub async fn load(api: &ApiClient, company_id: &Id) -> Self {
        let (profile, vacancies) = futures::join!(
            api.get_profile::<CompanyProfileDto>(company_id),
            api.my_vacancies(),
        );

        Self {
            profile: loaded(profile, "company profile"),
            vacancies: loaded(vacancies, "company vacancies").unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompanyProfileForm {
    pub company_name: String,
    pub industry: String,
    pub description: String,
    pub website: String,
    pub size: String,
}

impl CompanyProfileForm {
    pub fn from_profile(profile: Option<&CompanyProfileDto>) -> Self {
        let Some(profile) = profile else {
            return Self::default();
        };

        Self {
            company_name: profile.company_name.clone(),
            industry: profile.industry.clone().unwrap_or_default(),
            description: profile.description.clone().unwrap_or_default(),
            website: profile.website.clone().unwrap_or_default(),
            size: profile.size.clone().unwrap_or_default(),
        }
    }

    pub fn to_profile(&self, user_id: &Id) -> Result<CompanyProfileDto, FormError> {
        Ok(CompanyProfileDto {
            user_id: Some(user_id.clone()),
            company_name: required(&self.company_name, "Company name")?,
            industry: optional(&self.industry),
            description: optional(&self.description),
            website: optional(&self.website),
            size: optional(&self.size),
        })
    }
}

pub async fn save_company_profile(
    api: &ApiClient,
    company_id: &Id,
    exists: bool,
    form: &CompanyProfileForm,
) -> Result<CompanyProfileDto, ActionError> {
    let profile = form.to_profile(company_id)?;

    Ok(save_profile(api, company_id, exists, &profile).await?)
}

#[derive(Clone, Debug, PartialEq)]
pub struct VacancyForm {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub salary_range: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub is_internship: bool,
}

impl Default for VacancyForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            requirements: String::new(),
            salary_range: String::new(),
            location: String::new(),
            employment_type: EmploymentType::FullTime,
            is_internship: false,
        }
    }
}

impl VacancyForm {
    pub fn to_dto(&self, company_id: &Id) -> Result<NewVacancyDto, FormError> {
        Ok(NewVacancyDto {
            company_id: company_id.clone(),
            title: required(&self.title, "Title")?,
            description: required(&self.description, "Description")?,
            requirements: optional(&self.requirements),
            salary_range: optional(&self.salary_range),
            location: optional(&self.location),
            employment_type: self.employment_type.as_str().to_string(),
            is_internship: self.is_internship,
        })
    }
}

pub async fn create_vacancy(
    api: &ApiClient,
    company_id: &Id,
    form: &VacancyForm,
) -> Result<CreatedDto<VacancyDto>, ActionError> {
    let vacancy = form.to_dto(company_id)?;

    Ok(api.create_vacancy(&vacancy).await?)
}

/// Minimum ratings a response must reach to stay listed.
///
/// A threshold of zero or none disables that filter. Responses without a rating count
/// as rated zero, and a response passes when its rating is at least the threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResponseFilter {
    pub min_motivation: Option<f64>,
    pub min_criteria: Option<f64>,
}

impl ResponseFilter {
    /// Reads thresholds from text inputs, blank or unreadable input meaning no filter
    pub fn from_inputs(min_motivation: &str, min_criteria: &str) -> Self {
        Self {
            min_motivation: min_motivation.trim().parse().ok(),
            min_criteria: min_criteria.trim().parse().ok(),
        }
    }

    pub fn passes(&self, touch: &VacancyTouchDto) -> bool {
        meets(touch.motivation(), self.min_motivation)
            && meets(touch.meets_criteria(), self.min_criteria)
    }

    pub fn apply<'a>(&self, touches: &'a [VacancyTouchDto]) -> Vec<&'a VacancyTouchDto> {
        touches.iter().filter(|touch| self.passes(touch)).collect()
    }
}

fn meets(rating: f64, threshold: Option<f64>) -> bool {
    match threshold {
        Some(threshold) if threshold > 0.0 => rating >= threshold,
        _ => true,
    }
}

/// Generates summaries one response at a time, stopping at the first failure.
///
/// Returns how many summaries were generated.
pub async fn generate_all_summaries(
    api: &ApiClient,
    touches: &[VacancyTouchDto],
) -> Result<usize, ActionError> {
    if touches.is_empty() {
        return Err(FormError::NoResponses.into());
    }

    for touch in touches {
        if let Err(e) = api.generate_summary(&touch.id).await {
            tracing::error!(touch_id = %touch.id, error = %e, "Failed to generate summary");
            return Err(e.into());
        }
    }

    Ok(touches.len())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandidateSearchForm {
    pub skills: String,
    pub university: String,
    pub major: String,
    pub grad_year_from: String,
    pub grad_year_to: String,
}

impl CandidateSearchForm {
    pub fn to_search(&self) -> Result<CandidateSearchDto, FormError> {
        Ok(CandidateSearchDto {
            skills: self.skills.clone(),
            university: self.university.clone(),
            major: self.major.clone(),
            grad_year_from: optional_year(&self.grad_year_from, "Graduation year from")?,
            grad_year_to: optional_year(&self.grad_year_to, "Graduation year to")?,
        })
    }
}
