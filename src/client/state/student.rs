use chrono::Datelike;

use crate::{
    client::{
        api::ApiClient,
        error::{ActionError, FormError},
        state::{
            forms::{join_list, optional, optional_year, parse_list, required, save_profile},
            loaded,
        },
    },
    model::{
        appointment::AppointmentDto,
        id::Id,
        profile::StudentProfileDto,
        resume::{ResumeBodyDto, ResumeDto},
        vacancy::{VacancyDto, VacancyQuery},
    },
};

/// Vacancies shown on the student dashboard
pub const DASHBOARD_VACANCY_LIMIT: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudentTab {
    #[default]
    Profile,
    Resumes,
    Appointments,
    Vacancies,
}

impl StudentTab {
    pub const ALL: [StudentTab; 4] = [
        Self::Profile,
        Self::Resumes,
        Self::Appointments,
        Self::Vacancies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Resumes => "Resumes",
            Self::Appointments => "Appointments",
            Self::Vacancies => "Vacancies",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentData {
    pub profile: Option<StudentProfileDto>,
    pub resumes: Vec<ResumeDto>,
    pub appointments: Vec<AppointmentDto>,
    pub vacancies: Vec<VacancyDto>,
}

impl StudentData {
    /// Loads the dashboard concurrently, each failed part falling back to empty.
    pub async fn load(api: &ApiClient, student_id: &Id) -> Self {
        let query = VacancyQuery::limited(DASHBOARD_VACANCY_LIMIT);
        let (profile, resumes, appointments, vacancies) = futures::join!(
            api.get_profile::<StudentProfileDto>(student_id),
            api.student_resumes(student_id),
            api.student_appointments(student_id),
            api.vacancies(&query),
        );

        Self {
            profile: loaded(profile, "student profile"),
            resumes: loaded(resumes, "resumes").unwrap_or_default(),
            appointments: loaded(appointments, "appointments").unwrap_or_default(),
            vacancies: loaded(vacancies, "vacancies").unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentProfileForm {
    pub university: String,
    pub major: String,
    pub graduation_year: String,
    pub skills: String,
    pub bio: String,
}

impl StudentProfileForm {
    /// Prefills from the saved profile, defaulting the graduation year to this year
    pub fn from_profile(profile: Option<&StudentProfileDto>) -> Self {
        let this_year = chrono::Utc::now().year();

        Self {
            university: profile
                .and_then(|p| p.university.clone())
                .unwrap_or_default(),
            major: profile.and_then(|p| p.major.clone()).unwrap_or_default(),
            graduation_year: profile
                .and_then(|p| p.graduation_year)
                .unwrap_or(this_year)
                .to_string(),
            skills: profile.map(|p| join_list(&p.skills)).unwrap_or_default(),
            bio: profile.and_then(|p| p.bio.clone()).unwrap_or_default(),
        }
    }

    pub fn to_profile(&self, user_id: &Id) -> Result<StudentProfileDto, FormError> {
        Ok(StudentProfileDto {
            user_id: Some(user_id.clone()),
            university: optional(&self.university),
            major: optional(&self.major),
            graduation_year: optional_year(&self.graduation_year, "Graduation year")?,
            skills: parse_list(&self.skills),
            bio: optional(&self.bio),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResumeForm {
    pub title: String,
    pub education: String,
    pub experience: String,
    pub skills: String,
    pub languages: String,
    pub achievements: String,
}

impl ResumeForm {
    pub fn from_resume(resume: &ResumeDto) -> Self {
        Self {
            title: resume.title.clone(),
            education: resume.education.clone().unwrap_or_default(),
            experience: resume.experience.clone().unwrap_or_default(),
            skills: join_list(&resume.skills),
            languages: join_list(&resume.languages),
            achievements: resume.achievements.clone().unwrap_or_default(),
        }
    }

    pub fn to_body(&self, student_id: Option<Id>) -> Result<ResumeBodyDto, FormError> {
        Ok(ResumeBodyDto {
            student_id,
            title: required(&self.title, "Title")?,
            education: optional(&self.education),
            experience: optional(&self.experience),
            skills: parse_list(&self.skills),
            languages: parse_list(&self.languages),
            achievements: optional(&self.achievements),
        })
    }
}

pub async fn save_student_profile(
    api: &ApiClient,
    student_id: &Id,
    exists: bool,
    form: &StudentProfileForm,
) -> Result<StudentProfileDto, ActionError> {
    let profile = form.to_profile(student_id)?;

    Ok(save_profile(api, student_id, exists, &profile).await?)
}

/// Creates a resume, or updates `editing` when set
pub async fn save_resume(
    api: &ApiClient,
    student_id: &Id,
    editing: Option<&Id>,
    form: &ResumeForm,
) -> Result<ResumeDto, ActionError> {
    let resume = match editing {
        Some(resume_id) => api.update_resume(resume_id, &form.to_body(None)?).await?,
        None => {
            api.create_resume(&form.to_body(Some(student_id.clone()))?)
                .await?
        }
    };

    Ok(resume)
}
