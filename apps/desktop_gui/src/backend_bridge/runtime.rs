//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use anyhow::Context;
use client_core::{AdvisoryService, HttpAdvisoryClient};
use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Everything the worker needs, built before the window opens so that a bad service URL
/// or a runtime failure stops startup instead of stranding queued commands.
pub struct Backend {
    runtime: Runtime,
    service: Arc<dyn AdvisoryService>,
}

impl Backend {
    pub fn new(service_url: &str) -> anyhow::Result<Self> {
        let client = HttpAdvisoryClient::new(service_url)
            .context("failed to configure advisory service client")?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("failed to build backend runtime")?;
        Ok(Self {
            runtime,
            service: Arc::new(client),
        })
    }
}

pub fn spawn_backend_thread(
    backend: Backend,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let Backend { runtime, service } = backend;
    thread::spawn(move || {
        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let service = Arc::clone(&service);
                let ui_tx = ui_tx.clone();
                tracing::debug!(command = cmd.name(), "backend command received");
                match cmd {
                    BackendCommand::Dispatch(dispatch) => {
                        tokio::spawn(async move {
                            let resolution = dispatch.resolve(service.as_ref()).await;
                            let _ = ui_tx.send(UiEvent::Resolved(resolution));
                        });
                    }
                    BackendCommand::CheckHealth => {
                        tokio::spawn(async move {
                            let health = service.check_health().await;
                            let _ = ui_tx.send(UiEvent::Health(health));
                        });
                    }
                }
            }
            tracing::debug!("ui command queue closed; backend worker exiting");
        });
    });
}
