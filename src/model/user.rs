use serde::{Deserialize, Serialize};

use crate::model::id::Id;

/// Role tag carried by every account.
///
/// Unrecognized tags deserialize into [`UserType::Other`] so the dashboard can send
/// the user home instead of failing to read the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Company,
    University,
    Moderator,
    #[serde(other)]
    Other,
}

impl UserType {
    /// Roles offered on the registration form
    pub const REGISTRABLE: [UserType; 3] = [Self::Student, Self::Company, Self::University];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Company => "company",
            Self::University => "university",
            Self::Moderator => "moderator",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Company => "Company",
            Self::University => "University",
            Self::Moderator => "Moderator",
            Self::Other => "Unknown",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "student" => Some(Self::Student),
            "company" => Some(Self::Company),
            "university" => Some(Self::University),
            "moderator" => Some(Self::Moderator),
            _ => None,
        }
    }
}

/// The authenticated identity held by the session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Id,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_type: Option<UserType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Registration payload.
///
/// Company fields are only sent for company accounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_website: Option<Option<String>>,
}

/// Response of both login and registration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::{UserDto, UserType};

    #[test]
    /// Tests decoding a user with an unknown role tag.
    ///
    /// Verifies it maps onto the explicit fallback variant.
    ///
    /// Expected: Some(UserType::Other)
    fn unknown_role_is_other() {
        let user: UserDto =
            serde_json::from_str(r#"{"id": 1, "user_type": "alumni"}"#).unwrap();

        assert_eq!(user.user_type, Some(UserType::Other));
    }

    #[test]
    /// Tests decoding a user without a role or email.
    ///
    /// Verifies the role is absent and the email defaults to empty.
    ///
    /// Expected: None and an empty email
    fn missing_role_is_none() {
        let user: UserDto = serde_json::from_str(r#"{"id": "u1", "full_name": "A"}"#).unwrap();

        assert_eq!(user.user_type, None);
        assert_eq!(user.email, "");
    }

    #[test]
    /// Tests parsing the roles offered at registration.
    ///
    /// Verifies each tag parses back and unknown tags do not.
    ///
    /// Expected: every registrable role, None for `other`
    fn parses_registrable_tags() {
        for role in UserType::REGISTRABLE {
            assert_eq!(UserType::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserType::parse("other"), None);
    }
}
