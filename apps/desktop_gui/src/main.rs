mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::config::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{
    commands::BackendCommand,
    runtime::{spawn_backend_thread, Backend},
};
use crate::controller::events::UiEvent;
use crate::ui::AdvisorApp;

#[derive(Parser, Debug)]
#[command(name = "advisor_gui", about = "Career advisor desktop client")]
struct Args {
    /// Overrides the configured advisory service URL.
    #[arg(long)]
    service_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(url) = args.service_url {
        settings.service_url = url;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let backend = Backend::new(&settings.service_url)?;
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    spawn_backend_thread(backend, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Career Advisor")
            .with_inner_size([1024.0, 760.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    let service_url = settings.service_url;
    eframe::run_native(
        "Career Advisor",
        options,
        Box::new(move |_cc| Ok(Box::new(AdvisorApp::new(service_url, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("advisor GUI exited with an error: {err}"))
}
