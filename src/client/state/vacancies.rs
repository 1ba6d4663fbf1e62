use crate::{
    client::{
        api::ApiClient,
        error::{ActionError, FormError},
        state::{contains_ignore_case, forms::optional},
    },
    model::{
        api::CreatedDto,
        id::Id,
        resume::ResumeDto,
        touch::{VacancyTouchCreateDto, VacancyTouchDto},
        vacancy::{EmploymentType, VacancyDto, VacancyQuery},
    },
};

/// Server-side filters chosen on the catalogue
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VacancyFilters {
    pub employment_type: Option<EmploymentType>,
    pub is_internship: Option<bool>,
}

impl VacancyFilters {
    pub fn query(&self) -> VacancyQuery {
        VacancyQuery {
            employment_type: self.employment_type,
            is_internship: self.is_internship,
            limit: None,
        }
    }
}

/// Case-insensitive search over title and description
pub fn search<'a>(vacancies: &'a [VacancyDto], query: &str) -> Vec<&'a VacancyDto> {
    let query = query.trim();
    vacancies
        .iter()
        .filter(|vacancy| {
            contains_ignore_case(&vacancy.title, query)
                || contains_ignore_case(&vacancy.description, query)
        })
        .collect()
}

/// A student's response to one vacancy
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseForm {
    pub resume_id: Option<Id>,
    pub additional_info: String,
}

impl ResponseForm {
    /// Starts a response with the student's first resume selected
    pub fn new(resumes: &[ResumeDto]) -> Self {
        Self {
            resume_id: resumes.first().map(|resume| resume.id.clone()),
            additional_info: String::new(),
        }
    }

    pub fn to_dto(
        &self,
        vacancy_id: &Id,
        student_id: &Id,
    ) -> Result<VacancyTouchCreateDto, FormError> {
        let resume_id = match &self.resume_id {
            Some(resume_id) if !resume_id.is_blank() => resume_id.clone(),
            _ => return Err(FormError::MissingField("Resume")),
        };

        Ok(VacancyTouchCreateDto {
            vacancy_id: vacancy_id.clone(),
            student_id: student_id.clone(),
            resume_id,
            additional_info: optional(&self.additional_info),
        })
    }
}

/// Submits a response, rejecting it before any request when no resume is selected
pub async fn submit_response(
    api: &ApiClient,
    form: &ResponseForm,
    vacancy_id: &Id,
    student_id: &Id,
) -> Result<CreatedDto<VacancyTouchDto>, ActionError> {
    let response = form.to_dto(vacancy_id, student_id)?;

    Ok(api.respond_to_vacancy(&response).await?)
}

#[cfg(test)]
mod tests {
    use career_center_test_utils::prelude::*;
    use serde_json::json;

    use super::{search, submit_response, ResponseForm};
    use crate::{
        client::{
            api::Method,
            error::{ActionError, FormError},
            util::test::MockTransport,
        },
        model::{id::Id, resume::ResumeDto, vacancy::VacancyDto},
    };

    #[test]
    /// Tests searching the vacancy listing.
    ///
    /// Verifies the search matches titles or descriptions case-insensitively.
    ///
    /// Expected: one match per term and every vacancy for an empty search
    fn search_matches_title_or_description() -> Result<(), TestError> {
        let mut analyst = factory::vacancy("v2", "Analyst");
        analyst["description"] = json!("Dashboards in SQL");
        let vacancies: Vec<VacancyDto> =
            serde_json::from_value(json!([factory::vacancy("v1", "Backend Intern"), analyst]))?;

        assert_eq!(search(&vacancies, "backend").len(), 1);
        assert_eq!(search(&vacancies, "sql").len(), 1);
        assert_eq!(search(&vacancies, "").len(), 2);
        assert!(search(&vacancies, "designer").is_empty());

        Ok(())
    }

    #[test]
    /// Tests opening the response form.
    ///
    /// Verifies the first resume is preselected.
    ///
    /// Expected: Some(first resume id)
    fn first_resume_is_preselected() -> Result<(), TestError> {
        let resumes: Vec<ResumeDto> = serde_json::from_value(json!([
            factory::resume("r1", "7", "Backend"),
            factory::resume("r2", "7", "Data"),
        ]))?;

        assert_eq!(ResponseForm::new(&resumes).resume_id, Some(Id::from("r1")));
        assert_eq!(ResponseForm::new(&[]).resume_id, None);

        Ok(())
    }

    #[tokio::test]
    /// Tests responding without a resume.
    ///
    /// Verifies the response is rejected before any request.
    ///
    /// Expected: Err(ActionError::Form) and no request
    async fn response_without_resume_sends_nothing() {
        let transport = MockTransport::new();
        let client = transport.client(Some("t1"));

        for resume_id in [None, Some(Id::from("")), Some(Id::from("  "))] {
            let form = ResponseForm {
                resume_id,
                additional_info: "Keen".to_string(),
            };

            let result = submit_response(&client, &form, &Id::from("v1"), &Id::from(7)).await;

            assert!(matches!(
                result,
                Err(ActionError::Form(FormError::MissingField("Resume")))
            ));
        }
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    /// Tests responding with a selected resume.
    ///
    /// Verifies the vacancy, student and resume are posted with blank info as null.
    ///
    /// Expected: the exact response body
    async fn response_posts_selected_resume() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(
            Method::Post,
            "/api/vacancy_touches",
            200,
            json!({ "data": factory::touch("t1", None, None), "feedback_message": null }),
        );

        let form = ResponseForm {
            resume_id: Some(Id::from("r1")),
            additional_info: String::new(),
        };
        submit_response(&transport.client(Some("t1")), &form, &Id::from("v1"), &Id::from(7))
            .await?;

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().body.as_deref().unwrap_or("{}"))?;
        assert_eq!(
            body,
            json!({ "vacancy_id": "v1", "student_id": 7, "resume_id": "r1", "additional_info": null })
        );

        Ok(())
    }
}
