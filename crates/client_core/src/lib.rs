//! Client-side core of the career advisor: the advisory service gateway, the workflow
//! controllers driving skill-gap analysis, mentor matching and placement prediction,
//! and the session that owns them.

pub mod config;
pub mod display;
pub mod error;
pub mod inputs;
pub mod service;
pub mod session;
pub mod tabs;
pub mod workflow;

pub use error::{ServiceError, ServiceErrorKind};
pub use service::{AdvisoryService, HttpAdvisoryClient, ServiceCall, ServiceReply};
pub use session::{AdvisorSession, Dispatch, Purpose, Resolution};
pub use tabs::TabController;
pub use workflow::{
    mentor_match::{MentorMatch, MentorMatchController, MentorMatchInputs},
    placement::{PlacementController, PlacementInputs, PlacementMetric, PlacementPredict},
    skill_gap::{SkillGap, SkillGapController, SkillGapInputs},
    CatalogState, PendingCall, RequestTicket, Workflow, WorkflowController, WorkflowState,
    WorkflowStatus,
};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
