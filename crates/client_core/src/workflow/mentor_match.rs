use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use shared::domain::{CatalogKind, MentorRecord, WorkflowKind};
use url::Url;

use super::{Workflow, WorkflowController, WorkflowStatus};
use crate::{
    display::{format_percent, ScoreBand},
    error::ServiceError,
    service::{ServiceCall, ServiceReply, MAX_TOP_N, MIN_TOP_N},
};

pub const DEFAULT_TOP_N: u8 = 3;

/// Characters that would end or corrupt a `key=value` pair in a mailto query.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');
pub const NO_MENTORS_FOUND: &str = "No mentors found for the selected field. Try a different field.";

pub struct MentorMatch;

pub type MentorMatchController = WorkflowController<MentorMatch>;

#[derive(Debug, Clone, PartialEq)]
pub struct MentorMatchInputs {
    pub field: String,
    top_n: u8,
}

impl Default for MentorMatchInputs {
    fn default() -> Self {
        Self {
            field: String::new(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl MentorMatchInputs {
    pub fn top_n(&self) -> u8 {
        self.top_n
    }

    /// Clamped to `[1, 10]`.
    pub fn set_top_n(&mut self, top_n: i64) {
        self.top_n = top_n.clamp(i64::from(MIN_TOP_N), i64::from(MAX_TOP_N)) as u8;
    }
}

impl Workflow for MentorMatch {
    type Inputs = MentorMatchInputs;
    type Output = Vec<MentorRecord>;

    const KIND: WorkflowKind = WorkflowKind::MentorMatch;
    const CATALOG: CatalogKind = CatalogKind::Mentor;
    const LOAD_FAILURE_MESSAGE: &'static str = "Failed to load mentor fields";
    const SUBMIT_FAILURE_MESSAGE: &'static str = "Failed to match mentors";

    fn selected_field(inputs: &Self::Inputs) -> &str {
        &inputs.field
    }

    fn select_field(inputs: &mut Self::Inputs, field: &str) {
        inputs.field = field.to_string();
    }

    fn prepare(inputs: &Self::Inputs) -> ServiceCall {
        ServiceCall::MatchMentors {
            field: inputs.field.clone(),
            top_n: inputs.top_n,
        }
    }

    fn accept(reply: ServiceReply) -> Option<Result<Self::Output, ServiceError>> {
        match reply {
            ServiceReply::Mentors(result) => Some(result),
            _ => None,
        }
    }
}

/// Fallback text for a search that succeeded with no mentors. Idle, loading and failed
/// states have no empty state.
pub fn empty_state(status: &WorkflowStatus<Vec<MentorRecord>>) -> Option<&'static str> {
    match status {
        WorkflowStatus::Success(mentors) if mentors.is_empty() => Some(NO_MENTORS_FOUND),
        _ => None,
    }
}

pub fn results_heading(count: usize) -> String {
    format!("Top {count} Mentor Matches")
}

/// Cards in the order the service ranked them.
pub fn mentor_cards(mentors: &[MentorRecord]) -> Vec<MentorCard<'_>> {
    mentors
        .iter()
        .enumerate()
        .map(|(index, record)| MentorCard {
            rank: index + 1,
            record,
        })
        .collect()
}

pub struct MentorCard<'a> {
    pub rank: usize,
    pub record: &'a MentorRecord,
}

impl MentorCard<'_> {
    pub fn score_label(&self) -> String {
        format_percent(self.record.final_score)
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_unit_score(self.record.final_score)
    }

    pub fn experience_label(&self) -> String {
        format!("{} years", self.record.years_of_experience)
    }

    pub fn feedback_label(&self) -> String {
        out_of_ten(self.record.feedback_rating)
    }

    pub fn mentee_performance_label(&self) -> String {
        out_of_ten(self.record.past_mentee_performance)
    }

    pub fn behavior_label(&self) -> String {
        out_of_ten(self.record.behavior_rating)
    }

    pub fn contact_link(&self) -> Result<Url, url::ParseError> {
        contact_link(self.record)
    }
}

fn out_of_ten(rating: f64) -> String {
    format!("{rating}/10")
}

/// `mailto:` link pre-filled with a mentorship inquiry.
pub fn contact_link(record: &MentorRecord) -> Result<Url, url::ParseError> {
    let mut link = Url::parse(&format!("mailto:{}", record.contact_email))?;
    let body = format!(
        "Hello {}, I am interested in mentorship in {}.",
        record.professor_name, record.field_of_expertise
    );
    link.set_query(Some(&format!(
        "subject={}&body={}",
        utf8_percent_encode("Mentorship Inquiry", QUERY_VALUE),
        utf8_percent_encode(&body, QUERY_VALUE)
    )));
    Ok(link)
}
