//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. A command that could not be queued is handed
/// back, and `status` explains why.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Result<(), BackendCommand> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(err) => {
            *status = match &err {
                TrySendError::Full(_) => "UI command queue is full; please retry",
                TrySendError::Disconnected(_) => {
                    "Backend worker is not running; restart the advisor"
                }
            }
            .to_string();
            tracing::warn!(command = cmd_name, "{status}");
            Err(err.into_inner())
        }
    }
}
