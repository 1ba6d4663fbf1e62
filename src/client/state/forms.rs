use crate::{
    client::{
        api::ApiClient,
        error::{ApiError, FormError},
    },
    model::{id::Id, profile::Profile},
};

/// Splits a comma-separated input into trimmed, non-empty entries
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(entries: &[String]) -> String {
    entries.join(", ")
}

/// Trimmed input, `None` when blank
pub fn optional(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

pub fn required(input: &str, field: &'static str) -> Result<String, FormError> {
    optional(input).ok_or(FormError::MissingField(field))
}

/// Parses an optional year input, a blank input meaning unset
pub fn optional_year(input: &str, field: &'static str) -> Result<Option<i32>, FormError> {
    match input.trim() {
        "" => Ok(None),
        year => year
            .parse::<i32>()
            .map(Some)
            .map_err(|e| FormError::Invalid {
                field,
                reason: e.to_string(),
            }),
    }
}

/// Creates the profile when the user has none yet, updates it otherwise.
pub async fn save_profile<P: Profile>(
    api: &ApiClient,
    user_id: &Id,
    exists: bool,
    profile: &P,
) -> Result<P, ApiError> {
    if exists {
        api.update_profile(user_id, profile).await
    } else {
        api.create_profile(profile).await
    }
}

#[cfg(test)]
mod tests {
    use career_center_test_utils::prelude::*;
    use serde_json::json;

    use super::{optional_year, parse_list, save_profile};
    use crate::{
        client::{api::Method, error::FormError, util::test::MockTransport},
        model::{id::Id, profile::StudentProfileDto},
    };

    #[test]
    /// Tests parsing a comma-separated list.
    ///
    /// Verifies entries are trimmed and empty ones dropped.
    ///
    /// Expected: only the non-empty entries
    fn parse_list_drops_empty_entries() {
        assert_eq!(parse_list(" Rust, ,SQL,, "), vec!["Rust", "SQL"]);
        assert!(parse_list("  ").is_empty());
    }

    #[test]
    /// Tests parsing an optional year field.
    ///
    /// Verifies blank input is absent, digits parse and text is rejected.
    ///
    /// Expected: Err(FormError::Invalid) naming the field for text
    fn optional_year_rejects_text() {
        assert_eq!(optional_year(" ", "Graduation year"), Ok(None));
        assert_eq!(optional_year("2027", "Graduation year"), Ok(Some(2027)));
        assert!(matches!(
            optional_year("next year", "Graduation year"),
            Err(FormError::Invalid { field: "Graduation year", .. })
        ));
    }

    #[tokio::test]
    /// Tests saving a profile before and after it exists.
    ///
    /// Verifies a missing profile is created and an existing one updated.
    ///
    /// Expected: a POST followed by a PUT
    async fn save_profile_creates_then_updates() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(Method::Post, "/api/students/profile", 200, json!({ "user_id": 7 }));
        transport.mock(Method::Put, "/api/students/profile/7", 200, json!({ "user_id": 7 }));

        let client = transport.client(Some("t1"));
        let user_id = Id::from(7);
        let profile = StudentProfileDto {
            user_id: Some(user_id.clone()),
            ..Default::default()
        };

        save_profile(&client, &user_id, false, &profile).await?;
        save_profile(&client, &user_id, true, &profile).await?;

        assert_eq!(transport.hits(Method::Post, "/api/students/profile"), 1);
        assert_eq!(transport.hits(Method::Put, "/api/students/profile/7"), 1);

        Ok(())
    }
}
