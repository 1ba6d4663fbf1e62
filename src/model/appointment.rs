use serde::{Deserialize, Serialize};

use crate::model::id::Id;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDto {
    pub id: Id,
    #[serde(default)]
    pub appointment_type: String,
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AppointmentDto {
    pub fn type_label(&self) -> &'static str {
        if self.appointment_type == "consultation" {
            "Consultation"
        } else {
            "Interview"
        }
    }
}
