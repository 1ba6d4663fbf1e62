use crate::{
    client::{
        api::ApiClient,
        error::{ActionError, FormError},
        state::forms::{optional, required},
        store::{SessionState, SessionStorage},
    },
    model::user::{AuthResponseDto, LoginDto, RegisterDto, UserType},
};

pub const LOGIN_FAILED: &str = "Login failed. Check your email and password.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_dto(&self) -> Result<LoginDto, FormError> {
        Ok(LoginDto {
            email: required(&self.email, "Email")?,
            password: required(&self.password, "Password")?,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: UserType,
    pub company_name: String,
    pub inn: String,
    pub company_website: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            full_name: String::new(),
            user_type: UserType::Student,
            company_name: String::new(),
            inn: String::new(),
            company_website: String::new(),
        }
    }
}

impl RegisterForm {
    pub fn is_company(&self) -> bool {
        self.user_type == UserType::Company
    }

    /// Builds the registration payload.
    ///
    /// Company details are only sent for company accounts, with a blank website sent
    /// as `null`.
    pub fn to_dto(&self) -> Result<RegisterDto, FormError> {
        let mut dto = RegisterDto {
            email: required(&self.email, "Email")?,
            password: required(&self.password, "Password")?,
            full_name: required(&self.full_name, "Full name")?,
            user_type: self.user_type,
            company_name: None,
            inn: None,
            company_website: None,
        };

        if self.is_company() {
            dto.company_name = Some(required(&self.company_name, "Company name")?);
            dto.inn = Some(required(&self.inn, "INN")?);
            dto.company_website = Some(optional(&self.company_website));
        }

        Ok(dto)
    }
}

fn start_session(
    storage: &dyn SessionStorage,
    auth: AuthResponseDto,
) -> Result<SessionState, ActionError> {
    let mut session = SessionState::default();
    session.login(storage, auth.user, auth.access_token)?;

    Ok(session)
}

/// Logs in and persists the resulting session
pub async fn sign_in(
    api: &ApiClient,
    storage: &dyn SessionStorage,
    form: &LoginForm,
) -> Result<SessionState, ActionError> {
    let credentials = form.to_dto()?;
    let auth = api.login(&credentials).await?;

    start_session(storage, auth)
}

/// Registers an account and signs straight into it
pub async fn sign_up(
    api: &ApiClient,
    storage: &dyn SessionStorage,
    form: &RegisterForm,
) -> Result<SessionState, ActionError> {
    let account = form.to_dto()?;
    let auth = api.register(&account).await?;

    start_session(storage, auth)
}

#[cfg(test)]
mod tests {
    use career_center_test_utils::prelude::*;
    use serde_json::json;

    use super::{sign_up, RegisterForm};
    use crate::{
        client::{
            api::Method,
            error::{ActionError, FormError},
            store::{storage::MemoryStorage, SessionStorage},
            util::test::MockTransport,
        },
        model::user::UserType,
    };

    fn company_form() -> RegisterForm {
        RegisterForm {
            email: "hr@acme.com".to_string(),
            password: "secret".to_string(),
            full_name: "Acme HR".to_string(),
            user_type: UserType::Company,
            company_name: "Acme".to_string(),
            inn: "7701234567".to_string(),
            company_website: "  ".to_string(),
        }
    }

    #[test]
    /// Tests registering a student.
    ///
    /// Verifies company details are left out of the request.
    ///
    /// Expected: no company fields in the body
    fn student_registration_omits_company_fields() -> Result<(), TestError> {
        let form = RegisterForm {
            user_type: UserType::Student,
            ..company_form()
        };

        let body = serde_json::to_value(form.to_dto()?)?;

        assert_eq!(body["user_type"], "student");
        assert!(body.get("company_name").is_none());
        assert!(body.get("inn").is_none());
        assert!(body.get("company_website").is_none());

        Ok(())
    }

    #[test]
    /// Tests registering a company with a blank website.
    ///
    /// Verifies the blank website is sent as null.
    ///
    /// Expected: `website: null` in the company details
    fn company_registration_sends_null_website() -> Result<(), TestError> {
        let body = serde_json::to_value(company_form().to_dto()?)?;

        assert_eq!(body["company_name"], "Acme");
        assert_eq!(body["inn"], "7701234567");
        assert_eq!(body["company_website"], serde_json::Value::Null);

        Ok(())
    }

    #[test]
    /// Tests registering a company without an INN.
    ///
    /// Verifies the form is rejected before any request.
    ///
    /// Expected: Err(FormError::MissingField("INN"))
    fn company_registration_requires_inn() {
        let form = RegisterForm {
            inn: String::new(),
            ..company_form()
        };

        assert_eq!(form.to_dto(), Err(FormError::MissingField("INN")));
    }

    #[tokio::test]
    /// Tests a registration the server rejects.
    ///
    /// Verifies nothing is written to session storage.
    ///
    /// Expected: Err with empty storage
    async fn rejected_registration_persists_nothing() {
        let transport = MockTransport::new();
        transport.mock(
            Method::Post,
            "/api/auth/register",
            400,
            json!({ "detail": "Account already exists" }),
        );
        let storage = MemoryStorage::new();

        let result = sign_up(&transport.client(None), &storage, &company_form()).await;

        match result {
            Err(e @ ActionError::Api(_)) => {
                assert_eq!(e.message(super::REGISTER_FAILED), "Account already exists")
            }
            other => panic!("expected API error, got {:?}", other.map(|_| ())),
        }
        assert!(storage.get("token").is_none());
        assert!(storage.is_empty());
    }
}
