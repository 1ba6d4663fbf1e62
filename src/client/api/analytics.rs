use crate::{
    client::{api::ApiClient, error::ApiError},
    model::analytics::{
        CompanyActivityDto, Granularity, OverviewDto, TimeBucketDto, WordCloudTermDto,
    },
};

impl ApiClient {
    pub async fn overview(&self) -> Result<OverviewDto, ApiError> {
        self.get("/api/analytics/overview", &[]).await
    }

    pub async fn vacancy_stats(
        &self,
        granularity: Granularity,
    ) -> Result<Vec<TimeBucketDto>, ApiError> {
        self.get(
            "/api/vacancies/stats/by-time",
            &[("granularity", granularity.as_str().to_string())],
        )
        .await
    }

    pub async fn registration_stats(
        &self,
        granularity: Granularity,
    ) -> Result<Vec<TimeBucketDto>, ApiError> {
        self.get(
            "/api/users/stats/by-time",
            &[("granularity", granularity.as_str().to_string())],
        )
        .await
    }

    pub async fn company_activity(&self, limit: u32) -> Result<Vec<CompanyActivityDto>, ApiError> {
        self.get(
            "/api/analytics/company-activity",
            &[("limit", limit.to_string())],
        )
        .await
    }

    pub async fn word_cloud(&self, limit: u32) -> Result<Vec<WordCloudTermDto>, ApiError> {
        self.get("/api/analytics/word-cloud", &[("limit", limit.to_string())])
            .await
    }
}
