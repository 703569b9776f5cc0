use shared::domain::{CatalogKind, SkillRecommendation, WorkflowKind};

use super::{Workflow, WorkflowController};
use crate::{
    display::{format_points, ScoreBand},
    error::ServiceError,
    inputs::parse_skills,
    service::{ServiceCall, ServiceReply},
};

pub const NO_MATCHING_SKILLS: &str = "No matching skills found";
pub const ALL_SKILLS_PRESENT: &str = "You have all required skills!";
pub const LEARNING_TIPS: [&str; 4] = [
    "Start with the most fundamental skills first",
    "Practice with hands-on projects",
    "Join online communities and forums",
    "Consider taking structured courses or bootcamps",
];

pub struct SkillGap;

pub type SkillGapController = WorkflowController<SkillGap>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillGapInputs {
    pub field: String,
    /// Raw comma-separated text as typed.
    pub skills: String,
}

impl SkillGapInputs {
    pub fn known_skills(&self) -> Vec<String> {
        parse_skills(&self.skills)
    }
}

impl Workflow for SkillGap {
    type Inputs = SkillGapInputs;
    type Output = SkillRecommendation;

    const KIND: WorkflowKind = WorkflowKind::SkillGap;
    const CATALOG: CatalogKind = CatalogKind::General;
    const LOAD_FAILURE_MESSAGE: &'static str = "Failed to load fields";
    const SUBMIT_FAILURE_MESSAGE: &'static str = "Failed to get skill recommendations";

    fn selected_field(inputs: &Self::Inputs) -> &str {
        &inputs.field
    }

    fn select_field(inputs: &mut Self::Inputs, field: &str) {
        inputs.field = field.to_string();
    }

    fn prepare(inputs: &Self::Inputs) -> ServiceCall {
        ServiceCall::RecommendSkills {
            field: inputs.field.clone(),
            known_skills: inputs.known_skills(),
        }
    }

    fn accept(reply: ServiceReply) -> Option<Result<Self::Output, ServiceError>> {
        match reply {
            ServiceReply::Skills(result) => Some(result),
            _ => None,
        }
    }
}

/// Render-ready view over a skill recommendation.
pub struct SkillGapReport<'a> {
    recommendation: &'a SkillRecommendation,
}

impl<'a> SkillGapReport<'a> {
    pub fn new(recommendation: &'a SkillRecommendation) -> Self {
        Self { recommendation }
    }

    pub fn match_band(&self) -> ScoreBand {
        ScoreBand::from_percent_score(self.recommendation.match_score)
    }

    pub fn match_label(&self) -> String {
        format_points(self.recommendation.match_score)
    }

    pub fn skills_have(&self) -> &'a [String] {
        &self.recommendation.skills_have
    }

    pub fn skills_to_learn(&self) -> &'a [String] {
        &self.recommendation.skills_to_learn
    }

    /// Shown in place of the matched-skills list when it is empty.
    pub fn have_fallback(&self) -> Option<&'static str> {
        self.recommendation
            .skills_have
            .is_empty()
            .then_some(NO_MATCHING_SKILLS)
    }

    pub fn learn_fallback(&self) -> Option<&'static str> {
        self.recommendation
            .skills_to_learn
            .is_empty()
            .then_some(ALL_SKILLS_PRESENT)
    }

    pub fn learning_tips(&self) -> &'static [&'static str] {
        if self.recommendation.skills_to_learn.is_empty() {
            &[]
        } else {
            &LEARNING_TIPS
        }
    }
}
