use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{appointment::AppointmentDto, id::Id},
};

impl ApiClient {
    pub async fn student_appointments(
        &self,
        student_id: &Id,
    ) -> Result<Vec<AppointmentDto>, ApiError> {
        self.get(&format!("/api/appointments/student/{}", student_id), &[])
            .await
    }
}
