use crate::{
    client::{
        api::ApiClient,
        error::ApiError,
        state::{contains_ignore_case, loaded},
    },
    model::{
        analytics::DetailedAnalyticsDto,
        id::Id,
        profile::UniversityProfileDto,
        user::{UserDto, UserType},
        vacancy::VacancyDto,
    },
};

/// Roles listed in the user breakdown and filter
pub const USER_ROLES: [UserType; 4] = [
    UserType::Student,
    UserType::Company,
    UserType::University,
    UserType::Moderator,
];

/// Statuses a vacancy moves through under moderation
pub const VACANCY_STATUSES: [&str; 4] = ["active", "pending", "rejected", "archived"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeratorTab {
    #[default]
    Analytics,
    Users,
    Vacancies,
}

impl ModeratorTab {
    pub const ALL: [ModeratorTab; 3] = [Self::Analytics, Self::Users, Self::Vacancies];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Users => "Users",
            Self::Vacancies => "Vacancies",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModeratorData {
    pub analytics: Option<DetailedAnalyticsDto>,
    pub users: Vec<UserDto>,
    pub vacancies: Vec<VacancyDto>,
    pub universities: Vec<UniversityProfileDto>,
}

impl ModeratorData {
    pub async fn load(api: &ApiClient) -> Self {
        let (analytics, users, vacancies, universities) = futures::join!(
            api.detailed_analytics(),
            api.moderator_users(),
            api.moderator_vacancies(),
            api.moderator_universities(),
        );

        Self {
            analytics: loaded(analytics, "detailed analytics"),
            users: loaded(users, "users").unwrap_or_default(),
            vacancies: loaded(vacancies, "moderated vacancies").unwrap_or_default(),
            universities: loaded(universities, "universities").unwrap_or_default(),
        }
    }
}

/// Search over name and email plus an optional role
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFilter {
    pub search: String,
    pub user_type: Option<UserType>,
}

impl UserFilter {
    pub fn passes(&self, user: &UserDto) -> bool {
        let search = self.search.trim();
        let matches_search = contains_ignore_case(&user.full_name, search)
            || contains_ignore_case(&user.email, search);
        let matches_type = self.user_type.is_none() || user.user_type == self.user_type;

        matches_search && matches_type
    }

    pub fn apply<'a>(&self, users: &'a [UserDto]) -> Vec<&'a UserDto> {
        users.iter().filter(|user| self.passes(user)).collect()
    }
}

/// Search over title and company name plus an optional status
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VacancyFilter {
    pub search: String,
    pub status: Option<String>,
}

impl VacancyFilter {
    /// Vacancies without a status are treated as pending
    pub fn passes(&self, vacancy: &VacancyDto) -> bool {
        let search = self.search.trim();
        let matches_search = contains_ignore_case(&vacancy.title, search)
            || vacancy
                .company_name()
                .is_some_and(|name| contains_ignore_case(name, search));
        let matches_status = self
            .status
            .as_deref()
            .map_or(true, |status| vacancy.status_or_pending() == status);

        matches_search && matches_status
    }

    pub fn apply<'a>(&self, vacancies: &'a [VacancyDto]) -> Vec<&'a VacancyDto> {
        vacancies
            .iter()
            .filter(|vacancy| self.passes(vacancy))
            .collect()
    }
}

/// A moderation decision on a vacancy
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeratorAction {
    Approve,
    Reject,
    Delete,
}

impl ModeratorAction {
    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            Self::Approve => "Approve this vacancy?",
            Self::Reject => "Reject this vacancy?",
            Self::Delete => "DELETE this vacancy? This cannot be undone.",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Approve => "Failed to approve the vacancy",
            Self::Reject => "Failed to reject the vacancy",
            Self::Delete => "Failed to delete the vacancy",
        }
    }

    pub async fn run(&self, api: &ApiClient, vacancy_id: &Id) -> Result<(), ApiError> {
        match self {
            Self::Approve => api.approve_vacancy(vacancy_id).await,
            Self::Reject => api.reject_vacancy(vacancy_id).await,
            Self::Delete => api.delete_vacancy(vacancy_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use career_center_test_utils::prelude::*;
    use serde_json::json;

    use super::{ModeratorAction, ModeratorData, UserFilter, VacancyFilter, VACANCY_STATUSES};
    use crate::{
        client::{api::Method, util::test::MockTransport},
        model::{
            id::Id,
            user::{UserDto, UserType},
            vacancy::VacancyDto,
        },
    };

    fn users() -> Result<Vec<UserDto>, TestError> {
        Ok(serde_json::from_value(json!([
            factory::user("1", "student"),
            factory::user("2", "company"),
            { "id": 3, "full_name": "Maria Petrova", "email": "maria@uni.edu", "user_type": "university" },
        ]))?)
    }

    #[test]
    /// Tests the moderator user filter.
    ///
    /// Verifies search over name or email combines with the role filter.
    ///
    /// Expected: only users matching both the search and the role
    fn user_filter_combines_search_and_role() -> Result<(), TestError> {
        let users = users()?;

        let by_email = UserFilter {
            search: "UNI.EDU".to_string(),
            user_type: None,
        };
        assert_eq!(by_email.apply(&users).len(), 1);

        let by_role = UserFilter {
            search: "test user".to_string(),
            user_type: Some(UserType::Company),
        };
        let kept = by_role.apply(&users);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, Id::from(2));

        assert_eq!(UserFilter::default().apply(&users).len(), 3);

        Ok(())
    }

    #[test]
    /// Tests the moderator vacancy filter on a vacancy without a status.
    ///
    /// Verifies a missing status matches the pending option and search covers company names.
    ///
    /// Expected: one pending vacancy and both vacancies for the company search
    fn vacancy_filter_treats_missing_status_as_pending() -> Result<(), TestError> {
        let mut pending = factory::vacancy("v1", "Backend intern");
        pending["status"] = serde_json::Value::Null;
        let vacancies: Vec<VacancyDto> =
            serde_json::from_value(json!([pending, factory::vacancy("v2", "Analyst")]))?;

        let filter = VacancyFilter {
            search: String::new(),
            status: Some("pending".to_string()),
        };
        assert_eq!(filter.apply(&vacancies).len(), 1);

        let by_company = VacancyFilter {
            search: "acme".to_string(),
            status: None,
        };
        assert_eq!(by_company.apply(&vacancies).len(), 2);

        Ok(())
    }

    #[test]
    /// Tests filtering a rejected vacancy by each offered status.
    ///
    /// Verifies the status options cover what the reject action leaves behind.
    ///
    /// Expected: exactly the "rejected" option keeps the vacancy
    fn rejected_vacancy_has_a_status_option() -> Result<(), TestError> {
        let mut rejected = factory::vacancy("v1", "Backend intern");
        rejected["status"] = json!("rejected");
        let vacancies: Vec<VacancyDto> = serde_json::from_value(json!([rejected]))?;

        let matching: Vec<&str> = VACANCY_STATUSES
            .into_iter()
            .filter(|status| {
                let filter = VacancyFilter {
                    search: String::new(),
                    status: Some(status.to_string()),
                };
                filter.apply(&vacancies).len() == 1
            })
            .collect();
        assert_eq!(matching, vec!["rejected"]);

        Ok(())
    }

    #[tokio::test]
    /// Tests running every moderation action.
    ///
    /// Verifies each action hits its own endpoint.
    ///
    /// Expected: three requests, the last a DELETE
    async fn actions_hit_their_endpoints() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(Method::Post, "/api/moderator/vacancies/v1/approve", 200, json!({}));
        transport.mock(Method::Post, "/api/moderator/vacancies/v1/reject", 200, json!({}));
        transport.mock(Method::Delete, "/api/moderator/vacancies/v1", 200, json!({}));

        let client = transport.client(Some("t1"));
        let id = Id::from("v1");
        for action in [
            ModeratorAction::Approve,
            ModeratorAction::Reject,
            ModeratorAction::Delete,
        ] {
            action.run(&client, &id).await?;
        }

        assert_eq!(transport.requests().len(), 3);
        assert_eq!(transport.last_request().method, Method::Delete);

        Ok(())
    }

    #[tokio::test]
    /// Tests loading the moderator dashboard with only analytics available.
    ///
    /// Verifies every part is requested and missing parts fall back to empty.
    ///
    /// Expected: four requests with analytics kept and empty lists
    async fn load_fetches_everything_concurrently() {
        let transport = MockTransport::new();
        transport.mock(
            Method::Get,
            "/api/moderator/analytics/detailed",
            200,
            json!({ "users_by_type": { "student": 4 }, "vacancies_by_status": {}, "total_users": 4 }),
        );

        let data = ModeratorData::load(&transport.client(Some("t1"))).await;

        assert_eq!(
            data.analytics.map(|analytics| analytics.users_of_type("student")),
            Some(4)
        );
        assert!(data.users.is_empty());
        assert_eq!(transport.requests().len(), 4);
    }
}
