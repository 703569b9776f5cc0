use shared::domain::{CatalogKind, PlacementPrediction, PlacementProfile, WorkflowKind};

use super::{Workflow, WorkflowController};
use crate::{
    display::{format_percent, tier_band, ScoreBand, NEUTRAL_RGB},
    error::ServiceError,
    inputs::{parse_skills, NumericInput, NumericRange},
    service::{ServiceCall, ServiceReply},
};

pub const IMPROVEMENT_TIPS: [&str; 5] = [
    "Focus on building more projects to showcase your skills",
    "Participate in hackathons and coding competitions",
    "Improve your coding profile rating through consistent practice",
    "Gain relevant work experience through internships",
    "Enhance communication skills through practice and workshops",
];

pub struct PlacementPredict;

pub type PlacementController = WorkflowController<PlacementPredict>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementMetric {
    CodingProfileRating,
    Grades,
    MajorProjects,
    MiniProjects,
    Internships,
    Hackathons,
    Communication,
    Certifications,
    Attendance,
}

impl PlacementMetric {
    pub const ALL: [PlacementMetric; 9] = [
        PlacementMetric::CodingProfileRating,
        PlacementMetric::Grades,
        PlacementMetric::MajorProjects,
        PlacementMetric::MiniProjects,
        PlacementMetric::Internships,
        PlacementMetric::Hackathons,
        PlacementMetric::Communication,
        PlacementMetric::Certifications,
        PlacementMetric::Attendance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlacementMetric::CodingProfileRating => "Coding Profile Rating",
            PlacementMetric::Grades => "Grades (0-10)",
            PlacementMetric::MajorProjects => "Major Projects",
            PlacementMetric::MiniProjects => "Mini Projects",
            PlacementMetric::Internships => "Internships",
            PlacementMetric::Hackathons => "Hackathon Participation",
            PlacementMetric::Communication => "Communication Rating",
            PlacementMetric::Certifications => "Workshops/Certifications",
            PlacementMetric::Attendance => "Attendance (%)",
        }
    }

    pub fn range(self) -> NumericRange {
        match self {
            PlacementMetric::CodingProfileRating => NumericRange::new(1000.0, 2050.0, 1.0),
            PlacementMetric::Grades | PlacementMetric::Communication => {
                NumericRange::new(0.0, 10.0, 0.1)
            }
            PlacementMetric::MajorProjects | PlacementMetric::Hackathons => {
                NumericRange::new(0.0, 5.0, 1.0)
            }
            PlacementMetric::MiniProjects | PlacementMetric::Certifications => {
                NumericRange::new(0.0, 10.0, 1.0)
            }
            PlacementMetric::Internships => NumericRange::new(0.0, 3.0, 1.0),
            PlacementMetric::Attendance => NumericRange::new(0.0, 100.0, 1.0),
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            PlacementMetric::CodingProfileRating => 1500.0,
            PlacementMetric::Grades => 8.0,
            PlacementMetric::MajorProjects => 2.0,
            PlacementMetric::MiniProjects => 3.0,
            PlacementMetric::Internships => 1.0,
            PlacementMetric::Hackathons => 1.0,
            PlacementMetric::Communication => 7.5,
            PlacementMetric::Certifications => 2.0,
            PlacementMetric::Attendance => 85.0,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacementInputs {
    pub field: String,
    /// Raw comma-separated text as typed.
    pub skills: String,
    metrics: [NumericInput; 9],
}

impl Default for PlacementInputs {
    fn default() -> Self {
        Self {
            field: String::new(),
            skills: String::new(),
            metrics: PlacementMetric::ALL
                .map(|metric| NumericInput::new(metric.default_value(), metric.range())),
        }
    }
}

impl PlacementInputs {
    pub fn metric(&self, metric: PlacementMetric) -> NumericInput {
        self.metrics[metric.index()]
    }

    pub fn value(&self, metric: PlacementMetric) -> f64 {
        self.metric(metric).value()
    }

    /// Returns `false` when the value is rejected (not a number).
    pub fn set_metric(&mut self, metric: PlacementMetric, value: f64) -> bool {
        self.metrics[metric.index()].set(value)
    }

    /// Coerces the form into the wire profile: counts become integers.
    pub fn profile(&self) -> PlacementProfile {
        let count = |metric: PlacementMetric| self.metric(metric).as_count();
        PlacementProfile {
            coding_profile_rating: self.value(PlacementMetric::CodingProfileRating),
            grades: self.value(PlacementMetric::Grades),
            major_projects: count(PlacementMetric::MajorProjects),
            mini_projects: count(PlacementMetric::MiniProjects),
            internship: count(PlacementMetric::Internships),
            hackathon: count(PlacementMetric::Hackathons),
            communication_skill_rating: self.value(PlacementMetric::Communication),
            workshops_certifications: count(PlacementMetric::Certifications),
            attendance: self.value(PlacementMetric::Attendance),
            field: self.field.clone(),
            skills: parse_skills(&self.skills),
        }
    }
}

impl Workflow for PlacementPredict {
    type Inputs = PlacementInputs;
    type Output = PlacementPrediction;

    const KIND: WorkflowKind = WorkflowKind::PlacementPredict;
    const CATALOG: CatalogKind = CatalogKind::General;
    const LOAD_FAILURE_MESSAGE: &'static str = "Failed to load fields";
    const SUBMIT_FAILURE_MESSAGE: &'static str = "Failed to predict placement";

    fn selected_field(inputs: &Self::Inputs) -> &str {
        &inputs.field
    }

    fn select_field(inputs: &mut Self::Inputs, field: &str) {
        inputs.field = field.to_string();
    }

    fn prepare(inputs: &Self::Inputs) -> ServiceCall {
        ServiceCall::PredictPlacement(inputs.profile())
    }

    fn accept(reply: ServiceReply) -> Option<Result<Self::Output, ServiceError>> {
        match reply {
            ServiceReply::Placement(result) => Some(result),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceRow {
    pub tier: String,
    pub score: f64,
    pub percent: String,
    pub band: ScoreBand,
}

pub struct PlacementReport<'a> {
    prediction: &'a PlacementPrediction,
}

impl<'a> PlacementReport<'a> {
    pub fn new(prediction: &'a PlacementPrediction) -> Self {
        Self { prediction }
    }

    pub fn predicted_tier(&self) -> &'a str {
        &self.prediction.predicted_tier
    }

    /// `None` for tier labels outside Tier 1-3.
    pub fn tier_band(&self) -> Option<ScoreBand> {
        tier_band(&self.prediction.predicted_tier)
    }

    pub fn tier_rgb(&self) -> [u8; 3] {
        self.tier_band().map_or(NEUTRAL_RGB, ScoreBand::rgb)
    }

    pub fn confidence_rows(&self) -> Vec<ConfidenceRow> {
        self.prediction
            .confidence_scores
            .iter()
            .map(|(tier, score)| ConfidenceRow {
                tier: tier.clone(),
                score: *score,
                percent: format_percent(*score),
                band: ScoreBand::from_unit_score(*score),
            })
            .collect()
    }

    pub fn improvement_tips(&self) -> &'static [&'static str] {
        &IMPROVEMENT_TIPS
    }
}
