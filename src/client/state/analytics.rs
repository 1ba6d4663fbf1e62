use crate::{
    client::{api::ApiClient, state::loaded},
    model::analytics::{
        CompanyActivityDto, Granularity, OverviewDto, TimeBucketDto, WordCloudTermDto,
    },
};

pub const COMPANY_ACTIVITY_LIMIT: u32 = 10;
pub const WORD_CLOUD_LIMIT: u32 = 50;

/// A time series on the analytics page, each with its own granularity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Series {
    Vacancies,
    Registrations,
}

impl Series {
    pub const ALL: [Series; 2] = [Self::Vacancies, Self::Registrations];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Vacancies => "New vacancies",
            Self::Registrations => "Registrations",
        }
    }

    pub async fn load(&self, api: &ApiClient, granularity: Granularity) -> Vec<TimeBucketDto> {
        match self {
            Self::Vacancies => loaded(api.vacancy_stats(granularity).await, "vacancy stats"),
            Self::Registrations => loaded(
                api.registration_stats(granularity).await,
                "registration stats",
            ),
        }
        .unwrap_or_default()
    }
}

/// Everything on the analytics page that does not depend on the granularity
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalyticsData {
    pub overview: Option<OverviewDto>,
    pub company_activity: Vec<CompanyActivityDto>,
    pub word_cloud: Vec<WordCloudTermDto>,
}

impl AnalyticsData {
    pub async fn load(api: &ApiClient) -> Self {
        let (overview, company_activity, word_cloud) = futures::join!(
            api.overview(),
            api.company_activity(COMPANY_ACTIVITY_LIMIT),
            api.word_cloud(WORD_CLOUD_LIMIT),
        );

        Self {
            overview: loaded(overview, "analytics overview"),
            company_activity: loaded(company_activity, "company activity").unwrap_or_default(),
            word_cloud: loaded(word_cloud, "word cloud").unwrap_or_default(),
        }
    }
}
