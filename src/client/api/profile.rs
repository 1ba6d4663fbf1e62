use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{id::Id, profile::Profile},
};

impl ApiClient {
    /// Profile of the given user; fails with a 404 status when none was created yet.
    pub async fn get_profile<P: Profile>(&self, user_id: &Id) -> Result<P, ApiError> {
        self.get(&format!("/api/{}/profile/{}", P::RESOURCE, user_id), &[])
            .await
    }

    pub async fn create_profile<P: Profile>(&self, profile: &P) -> Result<P, ApiError> {
        self.post(&format!("/api/{}/profile", P::RESOURCE), profile)
            .await
    }

    pub async fn update_profile<P: Profile>(&self, user_id: &Id, profile: &P) -> Result<P, ApiError> {
        self.put(&format!("/api/{}/profile/{}", P::RESOURCE, user_id), profile)
            .await
    }
}

#[cfg(test)]
mod tests {
    use career_center_test_utils::prelude::*;
    use serde_json::json;

    use crate::{
        client::{api::Method, util::test::MockTransport},
        model::{
            id::Id,
            profile::{CompanyProfileDto, UniversityProfileDto},
        },
    };

    #[tokio::test]
    /// Tests fetching each profile type.
    ///
    /// Verifies every profile type addresses its own resource path.
    ///
    /// Expected: the company profile read and the university profile written under their own paths
    async fn profile_paths_follow_resource() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(
            Method::Get,
            "/api/companies/profile/c1",
            200,
            json!({ "user_id": "c1", "company_name": "Acme" }),
        );
        transport.mock(Method::Put, "/api/universities/profile/u1", 200, json!({}));

        let client = transport.client(Some("t1"));
        let company: CompanyProfileDto = client.get_profile(&Id::from("c1")).await?;
        assert_eq!(company.company_name, "Acme");

        let university = UniversityProfileDto {
            university_name: "State University".to_string(),
            ..Default::default()
        };
        client.update_profile(&Id::from("u1"), &university).await?;

        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert!(request.url.ends_with("/api/universities/profile/u1"));

        Ok(())
    }
}
