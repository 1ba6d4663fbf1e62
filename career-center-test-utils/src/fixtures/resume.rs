use serde_json::{json, Value};

use super::user::id_value;

pub fn resume(id: &str, student_id: &str, title: &str) -> Value {
    json!({
        "id": id_value(id),
        "student_id": id_value(student_id),
        "title": title,
        "education": "BSc Computer Science",
        "experience": null,
        "skills": ["Rust", "SQL"],
        "languages": ["English"],
        "achievements": null,
    })
}
