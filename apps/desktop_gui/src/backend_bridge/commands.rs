//! Backend commands queued from UI to backend worker.

use client_core::Dispatch;

#[derive(Debug)]
pub enum BackendCommand {
    /// Runs a workflow call; the reply comes back as [`crate::controller::events::UiEvent::Resolved`].
    Dispatch(Dispatch),
    CheckHealth,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Dispatch(dispatch) => dispatch.call.operation(),
            BackendCommand::CheckHealth => "check_health",
        }
    }
}
