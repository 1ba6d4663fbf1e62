use crate::{
    client::{api::ApiClient, error::ApiError},
    model::candidate::{CandidateDto, CandidateSearchDto},
};

impl ApiClient {
    pub async fn search_candidates(
        &self,
        search: &CandidateSearchDto,
    ) -> Result<Vec<CandidateDto>, ApiError> {
        self.get("/api/candidates/search", &search.to_query()).await
    }
}
