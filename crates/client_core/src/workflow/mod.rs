//! The shared lifecycle every advisory workflow follows:
//! catalog load -> input editing -> submission -> reconciliation of the reply.
//!
//! A controller never performs I/O on its own. `begin_*` hands out a [`PendingCall`]
//! tagged with a [`RequestTicket`]; whoever executes the call reports the reply back
//! through `complete_*`. Replies whose ticket is no longer pending are dropped, which is
//! how a reset (re-mount) discards requests that are still in flight.

use std::{fmt, marker::PhantomData};

use shared::domain::{CatalogKind, FieldCatalog, WorkflowKind};
use tracing::{debug, warn};

use crate::{
    error::ServiceError,
    service::{AdvisoryService, ServiceCall, ServiceReply},
};

pub mod mentor_match;
pub mod placement;
pub mod skill_gap;

/// Per-workflow specialisation plugged into [`WorkflowController`].
pub trait Workflow {
    type Inputs: Clone + Default + fmt::Debug;
    type Output: Clone + fmt::Debug;

    const KIND: WorkflowKind;
    const CATALOG: CatalogKind;
    const LOAD_FAILURE_MESSAGE: &'static str;
    const SUBMIT_FAILURE_MESSAGE: &'static str;

    fn selected_field(inputs: &Self::Inputs) -> &str;
    fn select_field(inputs: &mut Self::Inputs, field: &str);
    /// Only called once a field of interest is selected.
    fn prepare(inputs: &Self::Inputs) -> ServiceCall;
    /// `None` when the reply belongs to a different operation.
    fn accept(reply: ServiceReply) -> Option<Result<Self::Output, ServiceError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingCall {
    pub ticket: RequestTicket,
    pub call: ServiceCall,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowStatus<T> {
    Idle,
    Loading,
    Success(T),
    Failed(String),
}

impl<T> WorkflowStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, WorkflowStatus::Loading)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            WorkflowStatus::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            WorkflowStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    NotRequested,
    Loading,
    Ready(FieldCatalog),
    Unavailable(String),
}

impl CatalogState {
    pub fn fields(&self) -> &[String] {
        match self {
            CatalogState::Ready(catalog) => catalog.fields(),
            _ => &[],
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match self {
            CatalogState::Unavailable(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowState<I, T> {
    pub inputs: I,
    pub status: WorkflowStatus<T>,
    pub catalog: CatalogState,
}

impl<I: Default, T> Default for WorkflowState<I, T> {
    fn default() -> Self {
        Self {
            inputs: I::default(),
            status: WorkflowStatus::Idle,
            catalog: CatalogState::NotRequested,
        }
    }
}

pub struct WorkflowController<W: Workflow> {
    state: WorkflowState<W::Inputs, W::Output>,
    generation: u64,
    pending_load: Option<RequestTicket>,
    pending_submit: Option<RequestTicket>,
    _workflow: PhantomData<W>,
}

impl<W: Workflow> Default for WorkflowController<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Workflow> WorkflowController<W> {
    pub fn new() -> Self {
        Self {
            state: WorkflowState::default(),
            generation: 0,
            pending_load: None,
            pending_submit: None,
            _workflow: PhantomData,
        }
    }

    pub fn kind(&self) -> WorkflowKind {
        W::KIND
    }

    pub fn inputs(&self) -> &W::Inputs {
        &self.state.inputs
    }

    pub fn status(&self) -> &WorkflowStatus<W::Output> {
        &self.state.status
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.state.catalog
    }

    pub fn load_error(&self) -> Option<&str> {
        self.state.catalog.load_error()
    }

    /// Mirrors the enabled state of the submit control.
    pub fn can_submit(&self) -> bool {
        !self.state.status.is_loading() && !W::selected_field(&self.state.inputs).trim().is_empty()
    }

    /// Always permitted; a prior result stays visible until the next submission resolves.
    pub fn update_input(&mut self, edit: impl FnOnce(&mut W::Inputs)) {
        edit(&mut self.state.inputs);
    }

    pub fn begin_initialize(&mut self) -> Option<PendingCall> {
        if self.pending_load.is_some() {
            return None;
        }
        let ticket = self.issue_ticket();
        self.pending_load = Some(ticket);
        self.state.catalog = CatalogState::Loading;
        Some(PendingCall {
            ticket,
            call: ServiceCall::FetchFields(W::CATALOG),
        })
    }

    /// Returns whether the reply was applied.
    pub fn complete_initialize(&mut self, ticket: RequestTicket, reply: ServiceReply) -> bool {
        if self.pending_load != Some(ticket) {
            debug!(workflow = ?W::KIND, generation = ticket.generation, "dropping stale catalog reply");
            return false;
        }
        self.pending_load = None;

        let outcome = match reply {
            ServiceReply::Fields(result) => result,
            other => Err(mismatched_reply("fetch_fields", &other)),
        };
        match outcome {
            Ok(catalog) => {
                let default = catalog.default_selection().unwrap_or_default().to_string();
                W::select_field(&mut self.state.inputs, &default);
                self.state.catalog = CatalogState::Ready(catalog);
            }
            Err(err) => {
                warn!(workflow = ?W::KIND, kind = ?err.kind(), "field catalog load failed: {err}");
                self.state.catalog = CatalogState::Unavailable(W::LOAD_FAILURE_MESSAGE.to_string());
            }
        }
        true
    }

    pub async fn initialize(&mut self, service: &dyn AdvisoryService) -> bool {
        let Some(pending) = self.begin_initialize() else {
            return false;
        };
        let reply = pending.call.execute(service).await;
        self.complete_initialize(pending.ticket, reply)
    }

    /// Moves to `Loading` and hands out the single call for this submission, or `None`
    /// when no field is selected or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<PendingCall> {
        if self.state.status.is_loading() {
            debug!(workflow = ?W::KIND, "submission ignored: request already in flight");
            return None;
        }
        if W::selected_field(&self.state.inputs).trim().is_empty() {
            debug!(workflow = ?W::KIND, "submission withheld: no field of interest selected");
            return None;
        }

        let call = W::prepare(&self.state.inputs);
        let ticket = self.issue_ticket();
        self.pending_submit = Some(ticket);
        self.state.status = WorkflowStatus::Loading;
        Some(PendingCall { ticket, call })
    }

    /// Returns whether the reply was applied.
    pub fn complete_submit(&mut self, ticket: RequestTicket, reply: ServiceReply) -> bool {
        if self.pending_submit != Some(ticket) {
            debug!(workflow = ?W::KIND, generation = ticket.generation, "dropping stale submission reply");
            return false;
        }
        self.pending_submit = None;

        let outcome = W::accept(reply).unwrap_or_else(|| {
            Err(ServiceError::malformed(
                "submit",
                format!("reply does not belong to the {:?} workflow", W::KIND),
            ))
        });
        self.state.status = match outcome {
            Ok(result) => WorkflowStatus::Success(result),
            Err(err) => {
                warn!(workflow = ?W::KIND, kind = ?err.kind(), "submission failed: {err}");
                WorkflowStatus::Failed(W::SUBMIT_FAILURE_MESSAGE.to_string())
            }
        };
        true
    }

    pub async fn submit(&mut self, service: &dyn AdvisoryService) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        let reply = pending.call.execute(service).await;
        self.complete_submit(pending.ticket, reply)
    }

    /// Discards all state as a fresh mount would; outstanding replies become stale.
    pub fn reset(&mut self) {
        self.state = WorkflowState::default();
        self.pending_load = None;
        self.pending_submit = None;
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        self.generation += 1;
        RequestTicket {
            generation: self.generation,
        }
    }
}

fn mismatched_reply(expected: &'static str, reply: &ServiceReply) -> ServiceError {
    let got = match reply {
        ServiceReply::Fields(_) => "fields",
        ServiceReply::Skills(_) => "skills",
        ServiceReply::Mentors(_) => "mentors",
        ServiceReply::Placement(_) => "placement",
    };
    ServiceError::malformed(expected, format!("unexpected {got} reply"))
}

#[cfg(test)]
#[path = "../tests/workflow_tests.rs"]
mod tests;
