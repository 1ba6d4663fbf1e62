use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{
        api::CreatedDto,
        id::Id,
        touch::{VacancyTouchCreateDto, VacancyTouchDto},
        vacancy::{NewVacancyDto, VacancyDto, VacancyQuery, VacancyWithResponsesDto},
    },
};

impl ApiClient {
    pub async fn vacancies(&self, query: &VacancyQuery) -> Result<Vec<VacancyDto>, ApiError> {
        self.get("/api/vacancies", &query.to_query()).await
    }

    /// Vacancy detail with every response submitted to it
    pub async fn vacancy_with_responses(
        &self,
        id: &Id,
    ) -> Result<VacancyWithResponsesDto, ApiError> {
        self.get(&format!("/api/vacancies/{}/responses", id), &[])
            .await
    }

    /// Vacancies owned by the signed-in company
    pub async fn my_vacancies(&self) -> Result<Vec<VacancyDto>, ApiError> {
        self.get("/api/companies/my-vacancies", &[]).await
    }

    pub async fn create_vacancy(
        &self,
        vacancy: &NewVacancyDto,
    ) -> Result<CreatedDto<VacancyDto>, ApiError> {
        self.post("/api/vacancies", vacancy).await
    }

    pub async fn respond_to_vacancy(
        &self,
        response: &VacancyTouchCreateDto,
    ) -> Result<CreatedDto<VacancyTouchDto>, ApiError> {
        self.post("/api/vacancy_touches", response).await
    }

    /// Asks the server to rate a response and write its AI summary.
    pub async fn generate_summary(&self, touch_id: &Id) -> Result<VacancyTouchDto, ApiError> {
        self.post(
            &format!("/api/vacancy_touch/{}/generate_summary", touch_id),
            &serde_json::json!({}),
        )
        .await
    }

    /// Every response to any vacancy of the signed-in company
    pub async fn company_responses(&self) -> Result<Vec<VacancyTouchDto>, ApiError> {
        self.get("/api/vacancy_responses/company", &[]).await
    }
}

#[cfg(test)]
mod tests {
    use career_center_test_utils::prelude::*;
    use serde_json::json;

    use crate::{
        client::{api::Method, util::test::{MockTransport, TEST_API_URL}},
        model::vacancy::{EmploymentType, VacancyQuery},
    };

    #[tokio::test]
    /// Tests listing vacancies with server-side filters.
    ///
    /// Verifies the employment type and internship filters are sent in the query string.
    ///
    /// Expected: `employment_type` and `is_internship` in the listing URL
    async fn listing_sends_filters() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(
            Method::Get,
            "/api/vacancies",
            200,
            json!([factory::vacancy("v1", "Backend intern")]),
        );

        let query = VacancyQuery {
            employment_type: Some(EmploymentType::Internship),
            is_internship: Some(true),
            limit: None,
        };
        let vacancies = transport.client(None).vacancies(&query).await?;

        assert_eq!(vacancies.len(), 1);
        assert_eq!(vacancies[0].company_name(), Some("Acme"));
        assert_eq!(
            transport.last_request().url,
            format!(
                "{}/api/vacancies?employment_type=internship&is_internship=true",
                TEST_API_URL
            )
        );

        Ok(())
    }

    #[tokio::test]
    /// Tests creating a vacancy whose reply carries a feedback message.
    ///
    /// Verifies the created row and the feedback popup are both kept.
    ///
    /// Expected: Ok with the vacancy and its feedback message
    async fn create_vacancy_reads_feedback() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(
            Method::Post,
            "/api/vacancies",
            200,
            json!({
                "data": factory::vacancy("v9", "Data analyst"),
                "feedback_message": { "type": "popup", "title": "Sent for review", "text": "Thanks" }
            }),
        );

        let vacancy = crate::model::vacancy::NewVacancyDto {
            company_id: "c1".into(),
            title: "Data analyst".to_string(),
            description: "SQL".to_string(),
            requirements: None,
            salary_range: None,
            location: None,
            employment_type: EmploymentType::FullTime.as_str().to_string(),
            is_internship: false,
        };
        let created = transport.client(Some("t1")).create_vacancy(&vacancy).await?;

        assert_eq!(created.data.title, "Data analyst");
        assert_eq!(
            created
                .feedback_message
                .and_then(|feedback| feedback.title)
                .as_deref(),
            Some("Sent for review")
        );

        Ok(())
    }
}
