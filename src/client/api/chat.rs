use crate::{
    client::{
        api::{ApiClient, Method},
        error::ApiError,
    },
    model::{
        chat::{AiQueryDto, AiReplyDto, ChatMessageDto, NewChatMessageDto},
        id::Id,
    },
};

impl ApiClient {
    /// Latest messages sent or received by the user, newest first
    pub async fn chat_messages(
        &self,
        user_id: &Id,
        limit: u32,
    ) -> Result<Vec<ChatMessageDto>, ApiError> {
        self.get(
            &format!("/api/chat/messages/{}", user_id),
            &[("limit", limit.to_string())],
        )
        .await
    }

    /// Posts a message. The stored row is not read back; the server may answer `{}`.
    pub async fn send_chat_message(&self, message: &NewChatMessageDto) -> Result<(), ApiError> {
        let body = serde_json::to_string(message)?;
        self.send_unit(Method::Post, "/api/chat/messages", Some(body))
            .await
    }

    pub async fn ask_assistant(&self, query: &AiQueryDto) -> Result<AiReplyDto, ApiError> {
        self.post("/api/ai/chat", query).await
    }
}
