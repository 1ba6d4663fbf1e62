//! The AI help widget on the home page.

use dioxus_logger::tracing;

use crate::{
    client::api::ApiClient,
    model::{chat::AiQueryDto, user::UserDto},
};

pub const GREETING: &str =
    "Hello! I'm the career center's AI assistant. How can I help you?";
pub const APOLOGY: &str =
    "Sorry, something went wrong. Please try again or use the site navigation.";

/// Identifier sent for visitors who are not signed in
pub const GUEST_ID: &str = "guest";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    pub speaker: Speaker,
    pub content: String,
    /// Navigation the assistant suggests, if any
    pub action: Option<String>,
}

impl Turn {
    pub fn assistant(content: &str) -> Self {
        Self {
            speaker: Speaker::Assistant,
            content: content.to_string(),
            action: None,
        }
    }

    /// The user's turn for the given input, `None` when it is blank
    pub fn user(input: &str) -> Option<Self> {
        let content = input.trim();
        (!content.is_empty()).then(|| Self {
            speaker: Speaker::User,
            content: content.to_string(),
            action: None,
        })
    }
}

/// A fresh transcript opening with the assistant's greeting
pub fn transcript() -> Vec<Turn> {
    vec![Turn::assistant(GREETING)]
}

/// Asks the assistant and returns its turn, or an apology when the call fails.
pub async fn reply(api: &ApiClient, user: Option<&UserDto>, question: &str) -> Turn {
    let query = AiQueryDto {
        query: question.to_string(),
        user_id: user
            .map(|user| user.id.to_string())
            .unwrap_or_else(|| GUEST_ID.to_string()),
    };

    match api.ask_assistant(&query).await {
        Ok(answer) => Turn {
            speaker: Speaker::Assistant,
            content: answer.response,
            action: answer.action,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Assistant request failed");
            Turn::assistant(APOLOGY)
        }
    }
}

#[cfg(test)]
mod tests {
    use career_center_test_utils::prelude::*;
    use serde_json::json;

    use super::{reply, transcript, Speaker, Turn, APOLOGY, GREETING};
    use crate::{
        client::{api::Method, util::test::MockTransport},
        model::user::UserDto,
    };

    #[test]
    /// Tests a fresh assistant transcript.
    ///
    /// Verifies it opens with the greeting and blank user input makes no turn.
    ///
    /// Expected: a single assistant greeting
    fn transcript_opens_with_greeting() {
        assert_eq!(transcript(), vec![Turn::assistant(GREETING)]);
        assert_eq!(Turn::user("   "), None);
    }

    #[tokio::test]
    /// Tests asking the assistant while signed out.
    ///
    /// Verifies the query is sent as a guest and a suggested action is kept.
    ///
    /// Expected: `guest` user type in the request body
    async fn guest_query_and_action() -> Result<(), TestError> {
        let transport = MockTransport::new();
        transport.mock(
            Method::Post,
            "/api/ai/chat",
            200,
            json!({ "response": "See the vacancies page", "action": "/vacancies" }),
        );

        let turn = reply(&transport.client(None), None, "Where are internships?").await;

        assert_eq!(turn.speaker, Speaker::Assistant);
        assert_eq!(turn.action.as_deref(), Some("/vacancies"));

        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().body.as_deref().unwrap_or("{}"))?;
        assert_eq!(
            body,
            json!({ "query": "Where are internships?", "user_id": "guest" })
        );

        Ok(())
    }

    #[tokio::test]
    /// Tests asking the assistant when it cannot be reached.
    ///
    /// Verifies the failure becomes an apology turn instead of an error.
    ///
    /// Expected: an assistant turn with the apology text
    async fn failure_yields_apology() -> Result<(), TestError> {
        let transport = MockTransport::new();
        let user: UserDto = serde_json::from_value(factory::user("7", "student"))?;

        let turn = reply(&transport.client(Some("t1")), Some(&user), "Hi").await;

        assert_eq!(turn, Turn::assistant(APOLOGY));
        let body: serde_json::Value =
            serde_json::from_str(transport.last_request().body.as_deref().unwrap_or("{}"))?;
        assert_eq!(body["user_id"], "7");

        Ok(())
    }
}
