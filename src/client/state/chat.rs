use crate::{
    client::{
        api::ApiClient,
        error::{ActionError, ApiError, FormError},
    },
    model::{
        chat::{ChatMessageDto, NewChatMessageDto},
        id::Id,
    },
};

/// Builds a group message from the input box, rejecting blank input
pub fn compose(sender_id: &Id, input: &str) -> Result<NewChatMessageDto, FormError> {
    let message = input.trim();
    if message.is_empty() {
        return Err(FormError::EmptyMessage);
    }

    Ok(NewChatMessageDto::group(sender_id.clone(), message.to_string()))
}

/// Latest messages of the user, oldest first
pub async fn load_messages(
    api: &ApiClient,
    user_id: &Id,
    limit: u32,
) -> Result<Vec<ChatMessageDto>, ApiError> {
    let mut messages = api.chat_messages(user_id, limit).await?;
    messages.reverse();

    Ok(messages)
}

pub async fn send_message(api: &ApiClient, sender_id: &Id, input: &str) -> Result<(), ActionError> {
    let message = compose(sender_id, input)?;
    api.send_chat_message(&message).await?;

    Ok(())
}
