use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One of the three advisory workflows. Doubles as the tab selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowKind {
    PlacementPredict,
    MentorMatch,
    SkillGap,
}

impl WorkflowKind {
    /// Navigation order.
    pub const ALL: [WorkflowKind; 3] = [
        WorkflowKind::PlacementPredict,
        WorkflowKind::MentorMatch,
        WorkflowKind::SkillGap,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkflowKind::PlacementPredict => "Placement Predictor",
            WorkflowKind::MentorMatch => "Mentor Matching",
            WorkflowKind::SkillGap => "Skill Recommendations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    General,
    Mentor,
}

/// Ordered field-of-interest names. The first entry is the default selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCatalog {
    fields: Vec<String>,
}

impl FieldCatalog {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn default_selection(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub match_score: f64,
    pub skills_have: Vec<String>,
    pub skills_to_learn: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorRecord {
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

/// Student profile submitted for placement-tier prediction, already coerced to wire types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementProfile {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementPrediction {
    pub predicted_tier: String,
    /// Tiers in the order the service listed them.
    pub confidence_scores: IndexMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub models_loaded: bool,
    pub mentor_data_loaded: bool,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
