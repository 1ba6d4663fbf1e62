use serde_json::{json, Value};

use super::user::id_value;

pub fn vacancy(id: &str, title: &str) -> Value {
    json!({
        "id": id_value(id),
        "company_id": "c1",
        "title": title,
        "description": format!("{} at a growing team", title),
        "requirements": "Rust",
        "salary_range": null,
        "location": "Remote",
        "employment_type": "full-time",
        "is_internship": false,
        "status": "approved",
        "company_profiles": { "company_name": "Acme" },
        "created_at": "2025-09-01T10:00:00Z",
    })
}

/// A response with the given ratings, `None` leaving the rating out entirely
pub fn touch(id: &str, motivation: Option<f64>, meets_criteria: Option<f64>) -> Value {
    let mut touch = json!({
        "id": id_value(id),
        "vacancy_id": "v1",
        "student_id": "s1",
        "resume_id": "r1",
        "status": "pending",
        "additional_info": null,
        "student_profiles": {
            "users": { "full_name": format!("Student {}", id), "email": "student@example.com" }
        },
        "vacancies": { "title": "Backend intern" },
    });
    if let Some(motivation) = motivation {
        touch["motivation_rating"] = json!(motivation);
    }
    if let Some(meets_criteria) = meets_criteria {
        touch["meets_criteria_rating"] = json!(meets_criteria);
    }
    touch
}

/// Vacancy detail body with its responses nested under `vacancy_touch`
pub fn vacancy_with_responses(id: &str, title: &str, touches: Vec<Value>) -> Value {
    let mut detail = vacancy(id, title);
    detail["vacancy_touch"] = Value::Array(touches);
    detail
}
