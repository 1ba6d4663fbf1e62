use serde::{Deserialize, Serialize};

/// The body the API returns when a request fails
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub detail: String,
}

/// Popup text some create endpoints attach to their response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackMessageDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl FeedbackMessageDto {
    /// Title and text joined for an alert, `None` when both are empty
    pub fn popup_text(&self) -> Option<String> {
        let parts: Vec<&str> = [self.title.as_deref(), self.text.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        (!parts.is_empty()).then(|| parts.join("\n\n"))
    }
}

/// Envelope returned by create endpoints that carry a feedback popup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedDto<T> {
    pub data: T,
    #[serde(default)]
    pub feedback_message: Option<FeedbackMessageDto>,
}

#[cfg(test)]
mod tests {
    use super::FeedbackMessageDto;

    #[test]
    /// Tests the feedback popup text.
    ///
    /// Verifies present parts are joined and blank ones skipped.
    ///
    /// Expected: title and text on separate paragraphs, None when both are missing
    fn popup_text_joins_present_parts() {
        let full = FeedbackMessageDto {
            title: Some("Thanks!".to_string()),
            text: Some("We will review it soon.".to_string()),
        };
        let text_only = FeedbackMessageDto {
            title: Some("  ".to_string()),
            text: Some("Sent".to_string()),
        };
        let empty = FeedbackMessageDto {
            title: None,
            text: None,
        };

        assert_eq!(
            full.popup_text().as_deref(),
            Some("Thanks!\n\nWe will review it soon.")
        );
        assert_eq!(text_only.popup_text().as_deref(), Some("Sent"));
        assert_eq!(empty.popup_text(), None);
    }
}
