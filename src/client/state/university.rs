use crate::{
    client::{
        api::ApiClient,
        error::{ActionError, FormError},
        state::{
            forms::{optional, required, save_profile},
            loaded,
        },
    },
    model::{
        id::Id,
        profile::UniversityProfileDto,
        vacancy::{VacancyDto, VacancyQuery},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UniversityTab {
    #[default]
    Profile,
    Internships,
    Analytics,
}

impl UniversityTab {
    pub const ALL: [UniversityTab; 3] = [Self::Profile, Self::Internships, Self::Analytics];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Internships => "Internships",
            Self::Analytics => "Analytics",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UniversityData {
    pub profile: Option<UniversityProfileDto>,
    pub internships: Vec<VacancyDto>,
}

impl UniversityData {
    pub async fn load(api: &ApiClient, university_id: &Id) -> Self {
        let query = VacancyQuery::internships();
        let (profile, internships) = futures::join!(
            api.get_profile::<UniversityProfileDto>(university_id),
            api.vacancies(&query),
        );

        Self {
            profile: loaded(profile, "university profile"),
            internships: loaded(internships, "internships").unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UniversityProfileForm {
    pub university_name: String,
    pub description: String,
    pub website: String,
    pub contact_email: String,
}

impl UniversityProfileForm {
    pub fn from_profile(profile: Option<&UniversityProfileDto>) -> Self {
        let Some(profile) = profile else {
            return Self::default();
        };

        Self {
            university_name: profile.university_name.clone(),
            description: profile.description.clone().unwrap_or_default(),
            website: profile.website.clone().unwrap_or_default(),
            contact_email: profile.contact_email.clone().unwrap_or_default(),
        }
    }

    pub fn to_profile(&self, user_id: &Id) -> Result<UniversityProfileDto, FormError> {
        Ok(UniversityProfileDto {
            user_id: Some(user_id.clone()),
            university_name: required(&self.university_name, "University name")?,
            description: optional(&self.description),
            website: optional(&self.website),
            contact_email: optional(&self.contact_email),
        })
    }
}

pub async fn save_university_profile(
    api: &ApiClient,
    university_id: &Id,
    exists: bool,
    form: &UniversityProfileForm,
) -> Result<UniversityProfileDto, ActionError> {
    let profile = form.to_profile(university_id)?;

    Ok(save_profile(api, university_id, exists, &profile).await?)
}
