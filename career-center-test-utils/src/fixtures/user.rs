use serde_json::{json, Value};

/// An account record with the given id and role tag.
///
/// The id is emitted as a JSON number when it parses as one, matching both id shapes
/// the API produces.
pub fn user(id: &str, user_type: &str) -> Value {
    json!({
        "id": id_value(id),
        "full_name": format!("Test User {}", id),
        "email": format!("user{}@example.com", id),
        "user_type": user_type,
        "created_at": "2025-09-01T10:00:00Z",
    })
}

/// Body returned by `/api/auth/login` and `/api/auth/register`
pub fn auth_response(user: Value, access_token: &str) -> Value {
    json!({
        "user": user,
        "access_token": access_token,
    })
}

pub(crate) fn id_value(id: &str) -> Value {
    match id.parse::<i64>() {
        Ok(number) => json!(number),
        Err(_) => json!(id),
    }
}
