use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{
        id::Id,
        resume::{ResumeBodyDto, ResumeDto},
    },
};

impl ApiClient {
    pub async fn student_resumes(&self, student_id: &Id) -> Result<Vec<ResumeDto>, ApiError> {
        self.get(&format!("/api/resumes/student/{}", student_id), &[])
            .await
    }

    pub async fn create_resume(&self, resume: &ResumeBodyDto) -> Result<ResumeDto, ApiError> {
        self.post("/api/resumes", resume).await
    }

    pub async fn update_resume(&self, id: &Id, resume: &ResumeBodyDto) -> Result<ResumeDto, ApiError> {
        self.put(&format!("/api/resumes/{}", id), resume).await
    }
}
