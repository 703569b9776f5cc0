//! Request and response bodies exchanged with the advisory service.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        FieldCatalog, HealthStatus, MentorRecord, PlacementPrediction, PlacementProfile,
        SkillRecommendation,
    },
    error::ContractViolation,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldsResponse {
    pub fields: Vec<String>,
}

impl From<FieldsResponse> for FieldCatalog {
    fn from(value: FieldsResponse) -> Self {
        FieldCatalog::new(value.fields)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendSkillsRequest {
    pub field_of_interest: String,
    pub user_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendSkillsResponse {
    pub match_score: f64,
    pub skills_you_have: Vec<String>,
    pub skills_to_learn: Vec<String>,
}

impl TryFrom<RecommendSkillsResponse> for SkillRecommendation {
    type Error = ContractViolation;

    fn try_from(value: RecommendSkillsResponse) -> Result<Self, Self::Error> {
        check_range("match_score", value.match_score, 0.0, 100.0)?;
        Ok(Self {
            match_score: value.match_score,
            skills_have: value.skills_you_have,
            skills_to_learn: value.skills_to_learn,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchMentorsRequest {
    pub field_of_interest: String,
    pub top_n: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchMentorsResponse {
    pub mentors: Vec<MentorWire>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorWire {
    pub professor_name: String,
    pub professor_code: String,
    pub field_of_expertise: String,
    pub years_of_experience: f64,
    pub feedback_rating: f64,
    pub past_mentee_performance: f64,
    pub behavior_rating: f64,
    pub final_score: f64,
    pub contact_email: String,
}

impl TryFrom<MatchMentorsResponse> for Vec<MentorRecord> {
    type Error = ContractViolation;

    /// Keeps the service's ranking order untouched.
    fn try_from(value: MatchMentorsResponse) -> Result<Self, Self::Error> {
        value
            .mentors
            .into_iter()
            .map(|mentor| {
                check_range("final_score", mentor.final_score, 0.0, 1.0)?;
                Ok(MentorRecord {
                    professor_name: mentor.professor_name,
                    professor_code: mentor.professor_code,
                    field_of_expertise: mentor.field_of_expertise,
                    years_of_experience: mentor.years_of_experience,
                    feedback_rating: mentor.feedback_rating,
                    past_mentee_performance: mentor.past_mentee_performance,
                    behavior_rating: mentor.behavior_rating,
                    final_score: mentor.final_score,
                    contact_email: mentor.contact_email,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictPlacementRequest {
    pub coding_profile_rating: f64,
    pub grades: f64,
    pub major_projects: u32,
    pub mini_projects: u32,
    pub internship: u32,
    pub hackathon: u32,
    pub communication_skill_rating: f64,
    pub workshops_certifications: u32,
    pub attendance: f64,
    pub field: String,
    pub skills: Vec<String>,
}

impl From<PlacementProfile> for PredictPlacementRequest {
    fn from(profile: PlacementProfile) -> Self {
        Self {
            coding_profile_rating: profile.coding_profile_rating,
            grades: profile.grades,
            major_projects: profile.major_projects,
            mini_projects: profile.mini_projects,
            internship: profile.internship,
            hackathon: profile.hackathon,
            communication_skill_rating: profile.communication_skill_rating,
            workshops_certifications: profile.workshops_certifications,
            attendance: profile.attendance,
            field: profile.field,
            skills: profile.skills,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictPlacementResponse {
    pub predicted_tier: String,
    pub confidence_scores: IndexMap<String, f64>,
}

impl TryFrom<PredictPlacementResponse> for PlacementPrediction {
    type Error = ContractViolation;

    fn try_from(value: PredictPlacementResponse) -> Result<Self, Self::Error> {
        for (tier, score) in &value.confidence_scores {
            check_range(&format!("confidence_scores[{tier}]"), *score, 0.0, 1.0)?;
        }
        Ok(Self {
            predicted_tier: value.predicted_tier,
            confidence_scores: value.confidence_scores,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub models_loaded: bool,
    #[serde(default)]
    pub mentor_data_loaded: bool,
}

impl From<HealthResponse> for HealthStatus {
    fn from(value: HealthResponse) -> Self {
        Self {
            status: value.status,
            models_loaded: value.models_loaded,
            mentor_data_loaded: value.mentor_data_loaded,
        }
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ContractViolation> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ContractViolation::out_of_range(field, value, min, max))
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
