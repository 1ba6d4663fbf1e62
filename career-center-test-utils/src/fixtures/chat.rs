use serde_json::{json, Value};

use super::user::id_value;

pub fn chat_message(id: &str, sender_id: &str, message: &str, created_at: &str) -> Value {
    json!({
        "id": id_value(id),
        "sender_id": id_value(sender_id),
        "receiver_id": null,
        "message": message,
        "chat_type": "group",
        "created_at": created_at,
    })
}
