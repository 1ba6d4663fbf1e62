use serde::{Deserialize, Serialize};

use crate::model::id::Id;

pub const GROUP_CHAT: &str = "group";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    #[serde(default)]
    pub id: Option<Id>,
    pub sender_id: Id,
    /// `None` for messages broadcast to the group
    #[serde(default)]
    pub receiver_id: Option<Id>,
    pub message: String,
    #[serde(default)]
    pub chat_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewChatMessageDto {
    pub sender_id: Id,
    pub receiver_id: Option<Id>,
    pub message: String,
    pub chat_type: String,
}

impl NewChatMessageDto {
    pub fn group(sender_id: Id, message: String) -> Self {
        Self {
            sender_id,
            receiver_id: None,
            message,
            chat_type: GROUP_CHAT.to_string(),
        }
    }
}

/// Question sent to the AI assistant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiQueryDto {
    pub query: String,
    pub user_id: String,
}

/// Assistant answer, optionally suggesting a navigation action
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiReplyDto {
    pub response: String,
    #[serde(default)]
    pub action: Option<String>,
}
