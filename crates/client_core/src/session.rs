//! Session-scoped owner of every workflow's state.
//!
//! Tab visibility is purely a rendering concern here: switching tabs never discards
//! inputs or results, and each catalog is fetched on the first visit only.
//! [`AdvisorSession::remount`] is the explicit way to start a workflow over.

use shared::domain::WorkflowKind;
use tracing::debug;

use crate::{
    error::ServiceError,
    service::{AdvisoryService, ServiceCall, ServiceReply},
    tabs::TabController,
    workflow::{
        mentor_match::MentorMatchController, placement::PlacementController,
        skill_gap::SkillGapController, CatalogState, PendingCall, RequestTicket, Workflow,
        WorkflowController,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    Catalog,
    Submission,
}

/// A call ready to run against the advisory service.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub kind: WorkflowKind,
    pub purpose: Purpose,
    pub ticket: RequestTicket,
    pub call: ServiceCall,
}

impl Dispatch {
    fn new(kind: WorkflowKind, purpose: Purpose, pending: PendingCall) -> Self {
        Self {
            kind,
            purpose,
            ticket: pending.ticket,
            call: pending.call,
        }
    }

    pub async fn resolve(self, service: &dyn AdvisoryService) -> Resolution {
        let reply = self.call.execute(service).await;
        Resolution {
            kind: self.kind,
            purpose: self.purpose,
            ticket: self.ticket,
            reply,
        }
    }

    /// Resolves a call that never reached the service as a network failure.
    pub fn undeliverable(self, reason: impl ToString) -> Resolution {
        let error = ServiceError::network(self.call.operation(), reason);
        Resolution {
            kind: self.kind,
            purpose: self.purpose,
            ticket: self.ticket,
            reply: self.call.failed(error),
        }
    }
}

#[derive(Debug)]
pub struct Resolution {
    pub kind: WorkflowKind,
    pub purpose: Purpose,
    pub ticket: RequestTicket,
    pub reply: ServiceReply,
}

macro_rules! with_controller {
    ($session:expr, $kind:expr, |$controller:ident| $body:expr) => {
        match $kind {
            WorkflowKind::SkillGap => {
                let $controller = &mut $session.skill_gap;
                $body
            }
            WorkflowKind::MentorMatch => {
                let $controller = &mut $session.mentor_match;
                $body
            }
            WorkflowKind::PlacementPredict => {
                let $controller = &mut $session.placement;
                $body
            }
        }
    };
}

#[derive(Default)]
pub struct AdvisorSession {
    tabs: TabController,
    skill_gap: SkillGapController,
    mentor_match: MentorMatchController,
    placement: PlacementController,
}

impl AdvisorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tabs(&self) -> &TabController {
        &self.tabs
    }

    pub fn active(&self) -> WorkflowKind {
        self.tabs.active()
    }

    pub fn skill_gap(&self) -> &SkillGapController {
        &self.skill_gap
    }

    pub fn skill_gap_mut(&mut self) -> &mut SkillGapController {
        &mut self.skill_gap
    }

    pub fn mentor_match(&self) -> &MentorMatchController {
        &self.mentor_match
    }

    pub fn mentor_match_mut(&mut self) -> &mut MentorMatchController {
        &mut self.mentor_match
    }

    pub fn placement(&self) -> &PlacementController {
        &self.placement
    }

    pub fn placement_mut(&mut self) -> &mut PlacementController {
        &mut self.placement
    }

    /// Mounts the default tab.
    pub fn open(&mut self) -> Option<Dispatch> {
        self.select_tab(self.tabs.active())
    }

    /// Shows `kind`; returns its catalog load on the first visit.
    pub fn select_tab(&mut self, kind: WorkflowKind) -> Option<Dispatch> {
        self.tabs.select(kind);
        with_controller!(self, kind, |controller| first_visit_load(controller))
    }

    pub fn submit(&mut self, kind: WorkflowKind) -> Option<Dispatch> {
        with_controller!(self, kind, |controller| controller
            .begin_submit()
            .map(|pending| Dispatch::new(kind, Purpose::Submission, pending)))
    }

    /// Discards the workflow's state and issues a fresh catalog load.
    pub fn remount(&mut self, kind: WorkflowKind) -> Option<Dispatch> {
        debug!(workflow = ?kind, "remounting workflow");
        with_controller!(self, kind, |controller| {
            controller.reset();
            first_visit_load(controller)
        })
    }

    /// Applies a reply; returns `false` when it was stale and dropped.
    pub fn apply(&mut self, resolution: Resolution) -> bool {
        let Resolution {
            kind,
            purpose,
            ticket,
            reply,
        } = resolution;
        with_controller!(self, kind, |controller| match purpose {
            Purpose::Catalog => controller.complete_initialize(ticket, reply),
            Purpose::Submission => controller.complete_submit(ticket, reply),
        })
    }

    /// Executes a dispatch in place and applies its reply.
    pub async fn run(&mut self, dispatch: Dispatch, service: &dyn AdvisoryService) -> bool {
        let resolution = dispatch.resolve(service).await;
        self.apply(resolution)
    }

    pub fn can_submit(&self, kind: WorkflowKind) -> bool {
        match kind {
            WorkflowKind::SkillGap => self.skill_gap.can_submit(),
            WorkflowKind::MentorMatch => self.mentor_match.can_submit(),
            WorkflowKind::PlacementPredict => self.placement.can_submit(),
        }
    }
}

fn first_visit_load<W: Workflow>(controller: &mut WorkflowController<W>) -> Option<Dispatch> {
    if *controller.catalog() != CatalogState::NotRequested {
        return None;
    }
    controller
        .begin_initialize()
        .map(|pending| Dispatch::new(W::KIND, Purpose::Catalog, pending))
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
