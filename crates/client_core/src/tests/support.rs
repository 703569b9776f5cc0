use std::sync::Mutex;

use async_trait::async_trait;
use indexmap::IndexMap;
use shared::domain::{
    CatalogKind, FieldCatalog, HealthStatus, MentorRecord, PlacementPrediction, PlacementProfile,
    SkillRecommendation,
};

use crate::{
    error::ServiceError,
    service::{AdvisoryService, ServiceCall},
};

/// In-memory advisory service that records every call it receives.
pub(crate) struct StubService {
    pub general_fields: Vec<String>,
    pub mentor_fields: Vec<String>,
    pub recommendation: SkillRecommendation,
    pub mentors: Vec<MentorRecord>,
    pub prediction: PlacementPrediction,
    pub failure: Option<ServiceError>,
    calls: Mutex<Vec<ServiceCall>>,
}

impl StubService {
    pub fn healthy() -> Self {
        Self {
            general_fields: vec!["Web Development".to_string(), "Data Science".to_string()],
            mentor_fields: vec!["Data Science".to_string(), "AI/ML".to_string()],
            recommendation: SkillRecommendation {
                match_score: 40.0,
                skills_have: Vec::new(),
                skills_to_learn: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
            },
            mentors: vec![
                mentor("Grace", 0.92),
                mentor("Alan", 0.81),
                mentor("Ada", 0.77),
            ],
            prediction: PlacementPrediction {
                predicted_tier: "Tier 1".to_string(),
                confidence_scores: IndexMap::from([
                    ("Tier 1".to_string(), 0.81),
                    ("Tier 2".to_string(), 0.15),
                    ("Tier 3".to_string(), 0.04),
                ]),
            },
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(failure: ServiceError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::healthy()
        }
    }

    pub fn calls(&self) -> Vec<ServiceCall> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: ServiceCall) -> Result<(), ServiceError> {
        self.calls.lock().expect("lock").push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub(crate) fn mentor(name: &str, final_score: f64) -> MentorRecord {
    MentorRecord {
        professor_name: name.to_string(),
        professor_code: format!("P-{name}"),
        field_of_expertise: "Data Science".to_string(),
        years_of_experience: 12.0,
        feedback_rating: 8.5,
        past_mentee_performance: 7.0,
        behavior_rating: 9.0,
        final_score,
        contact_email: format!("{}@uni.edu", name.to_lowercase()),
    }
}

pub(crate) fn network_failure() -> ServiceError {
    ServiceError::network("test", "connection refused")
}

#[async_trait]
impl AdvisoryService for StubService {
    async fn fetch_general_fields(&self) -> Result<FieldCatalog, ServiceError> {
        self.record(ServiceCall::FetchFields(CatalogKind::General))?;
        Ok(FieldCatalog::new(self.general_fields.clone()))
    }

    async fn fetch_mentor_fields(&self) -> Result<FieldCatalog, ServiceError> {
        self.record(ServiceCall::FetchFields(CatalogKind::Mentor))?;
        Ok(FieldCatalog::new(self.mentor_fields.clone()))
    }

    async fn recommend_skills(
        &self,
        field: &str,
        known_skills: &[String],
    ) -> Result<SkillRecommendation, ServiceError> {
        self.record(ServiceCall::RecommendSkills {
            field: field.to_string(),
            known_skills: known_skills.to_vec(),
        })?;
        Ok(self.recommendation.clone())
    }

    async fn match_mentors(
        &self,
        field: &str,
        top_n: u8,
    ) -> Result<Vec<MentorRecord>, ServiceError> {
        self.record(ServiceCall::MatchMentors {
            field: field.to_string(),
            top_n,
        })?;
        Ok(self.mentors.clone())
    }

    async fn predict_placement(
        &self,
        profile: &PlacementProfile,
    ) -> Result<PlacementPrediction, ServiceError> {
        self.record(ServiceCall::PredictPlacement(profile.clone()))?;
        Ok(self.prediction.clone())
    }

    async fn check_health(&self) -> Result<HealthStatus, ServiceError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            models_loaded: true,
            mentor_data_loaded: true,
        })
    }
}
