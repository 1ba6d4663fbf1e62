//! Vacancy responses ("touches").
//!
//! Older rows carry rating and summary columns under legacy names. They are read only
//! when the canonical column is absent, and the DTO only ever serializes the canonical
//! names.

use serde::{Deserialize, Serialize};

use crate::model::{id::Id, resume::ResumeDto};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRefDto {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRefDto {
    #[serde(default)]
    pub users: Option<UserRefDto>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VacancyRefDto {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawVacancyTouch")]
pub struct VacancyTouchDto {
    pub id: Id,
    pub vacancy_id: Option<Id>,
    pub student_id: Option<Id>,
    pub resume_id: Option<Id>,
    pub status: Option<String>,
    pub additional_info: Option<String>,
    pub ai_summary: Option<String>,
    pub motivation_rating: Option<f64>,
    pub meets_criteria_rating: Option<f64>,
    pub student_profiles: Option<StudentRefDto>,
    pub resumes: Option<ResumeDto>,
    pub vacancies: Option<VacancyRefDto>,
}

impl VacancyTouchDto {
    /// Motivation rating with a missing value counted as zero
    pub fn motivation(&self) -> f64 {
        self.motivation_rating.unwrap_or(0.0)
    }

    /// Criteria rating with a missing value counted as zero
    pub fn meets_criteria(&self) -> f64 {
        self.meets_criteria_rating.unwrap_or(0.0)
    }

    pub fn student_name(&self) -> Option<&str> {
        self.student_user().and_then(|user| user.full_name.as_deref())
    }

    pub fn student_email(&self) -> Option<&str> {
        self.student_user().and_then(|user| user.email.as_deref())
    }

    pub fn vacancy_title(&self) -> Option<&str> {
        self.vacancies
            .as_ref()
            .and_then(|vacancy| vacancy.title.as_deref())
    }

    fn student_user(&self) -> Option<&UserRefDto> {
        self.student_profiles
            .as_ref()
            .and_then(|student| student.users.as_ref())
    }
}

#[derive(Deserialize)]
struct RawVacancyTouch {
    id: Id,
    #[serde(default)]
    vacancy_id: Option<Id>,
    #[serde(default)]
    student_id: Option<Id>,
    #[serde(default)]
    resume_id: Option<Id>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    additional_info: Option<String>,
    #[serde(default)]
    ai_summary: Option<String>,
    #[serde(default)]
    ai_summery: Option<String>,
    #[serde(default)]
    motivation_rating: Option<f64>,
    #[serde(default)]
    motivation_score: Option<f64>,
    #[serde(default)]
    meets_criteria_rating: Option<f64>,
    #[serde(default)]
    meets_creteria_rating: Option<f64>,
    #[serde(default)]
    student_profiles: Option<StudentRefDto>,
    #[serde(default)]
    resumes: Option<ResumeDto>,
    #[serde(default)]
    vacancies: Option<VacancyRefDto>,
}

impl From<RawVacancyTouch> for VacancyTouchDto {
    fn from(raw: RawVacancyTouch) -> Self {
        Self {
            id: raw.id,
            vacancy_id: raw.vacancy_id,
            student_id: raw.student_id,
            resume_id: raw.resume_id,
            status: raw.status,
            additional_info: raw.additional_info,
            ai_summary: raw.ai_summary.or(raw.ai_summery),
            motivation_rating: raw.motivation_rating.or(raw.motivation_score),
            meets_criteria_rating: raw.meets_criteria_rating.or(raw.meets_creteria_rating),
            student_profiles: raw.student_profiles,
            resumes: raw.resumes,
            vacancies: raw.vacancies,
        }
    }
}

/// Body of a new vacancy response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VacancyTouchCreateDto {
    pub vacancy_id: Id,
    pub student_id: Id,
    pub resume_id: Id,
    pub additional_info: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::VacancyTouchDto;

    #[test]
    /// Tests decoding a response stored under legacy rating names.
    ///
    /// Verifies the legacy names fill in the missing ratings.
    ///
    /// Expected: ratings read from the legacy fields
    fn reads_legacy_names_when_canonical_missing() {
        let touch: VacancyTouchDto = serde_json::from_str(
            r#"{"id": "t1", "motivation_score": 64, "meets_creteria_rating": 71, "ai_summery": "ok"}"#,
        )
        .unwrap();

        assert_eq!(touch.motivation_rating, Some(64.0));
        assert_eq!(touch.meets_criteria_rating, Some(71.0));
        assert_eq!(touch.ai_summary.as_deref(), Some("ok"));
    }

    #[test]
    /// Tests decoding a response carrying both rating spellings.
    ///
    /// Verifies the canonical name takes precedence.
    ///
    /// Expected: the canonical rating
    fn canonical_name_wins() {
        let touch: VacancyTouchDto = serde_json::from_str(
            r#"{"id": "t1", "motivation_rating": 80, "motivation_score": 10}"#,
        )
        .unwrap();

        assert_eq!(touch.motivation_rating, Some(80.0));
    }

    #[test]
    /// Tests encoding a response.
    ///
    /// Verifies only canonical rating names are written.
    ///
    /// Expected: no legacy field names in the output
    fn serializes_canonical_names_only() {
        let touch: VacancyTouchDto =
            serde_json::from_str(r#"{"id": "t1", "meets_creteria_rating": 55}"#).unwrap();
        let json = serde_json::to_value(&touch).unwrap();

        assert_eq!(json["meets_criteria_rating"], 55.0);
        assert!(json.get("meets_creteria_rating").is_none());
        assert!(json.get("motivation_score").is_none());
    }

    #[test]
    /// Tests reading ratings from an unrated response.
    ///
    /// Verifies missing ratings count as zero.
    ///
    /// Expected: 0.0 for both ratings
    fn missing_ratings_count_as_zero() {
        let touch: VacancyTouchDto = serde_json::from_str(r#"{"id": 3}"#).unwrap();

        assert_eq!(touch.motivation(), 0.0);
        assert_eq!(touch.meets_criteria(), 0.0);
    }
}
