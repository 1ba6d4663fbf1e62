use crate::{
    client::{
        api::{ApiClient, Method},
        error::ApiError,
    },
    model::{
        analytics::DetailedAnalyticsDto, id::Id, profile::UniversityProfileDto, user::UserDto,
        vacancy::VacancyDto,
    },
};

impl ApiClient {
    pub async fn moderator_users(&self) -> Result<Vec<UserDto>, ApiError> {
        self.get("/api/moderator/users", &[]).await
    }

    pub async fn moderator_vacancies(&self) -> Result<Vec<VacancyDto>, ApiError> {
        self.get("/api/moderator/vacancies", &[]).await
    }

    pub async fn moderator_universities(&self) -> Result<Vec<UniversityProfileDto>, ApiError> {
        self.get("/api/moderator/universities", &[]).await
    }

    pub async fn detailed_analytics(&self) -> Result<DetailedAnalyticsDto, ApiError> {
        self.get("/api/moderator/analytics/detailed", &[]).await
    }

    pub async fn approve_vacancy(&self, id: &Id) -> Result<(), ApiError> {
        self.send_unit(
            Method::Post,
            &format!("/api/moderator/vacancies/{}/approve", id),
            None,
        )
        .await
    }

    pub async fn reject_vacancy(&self, id: &Id) -> Result<(), ApiError> {
        self.send_unit(
            Method::Post,
            &format!("/api/moderator/vacancies/{}/reject", id),
            None,
        )
        .await
    }

    pub async fn delete_vacancy(&self, id: &Id) -> Result<(), ApiError> {
        self.send_unit(Method::Delete, &format!("/api/moderator/vacancies/{}", id), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        client::{api::Method, error::ApiError, util::test::MockTransport},
        model::id::Id,
    };

    #[tokio::test]
    /// Tests deleting a vacancy the server does not know.
    ///
    /// Verifies the 404 detail reaches the caller.
    ///
    /// Expected: Err(ApiError::Status) with status 404 and the server's detail
    async fn delete_missing_vacancy_fails() {
        let transport = MockTransport::new();
        transport.mock(
            Method::Delete,
            "/api/moderator/vacancies/v1",
            404,
            json!({ "detail": "Vacancy not found or already deleted" }),
        );

        let result = transport.client(Some("t1")).delete_vacancy(&Id::from("v1")).await;

        assert!(matches!(
            result,
            Err(ApiError::Status { status: 404, ref detail }) if detail.contains("already deleted")
        ));
    }
}
