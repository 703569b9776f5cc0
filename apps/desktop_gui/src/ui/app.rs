use std::time::Duration;

use client_core::{AdvisorSession, Dispatch};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::WorkflowKind;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{describe_health, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::panels::{self, PanelAction};
use crate::ui::theme::{ERROR_COLOR, MUTED_COLOR};

pub struct AdvisorApp {
    session: AdvisorSession,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    service_url: String,
    status: String,
    health: Option<String>,
}

impl AdvisorApp {
    pub fn new(
        service_url: String,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let mut app = Self {
            session: AdvisorSession::new(),
            cmd_tx,
            ui_rx,
            service_url,
            status: String::new(),
            health: None,
        };
        let landing = app.session.open();
        app.queue(landing);
        app.check_health();
        app
    }

    /// A dispatch the worker cannot take is resolved here as a network failure, so the
    /// workflow leaves `Loading` with its usual failure message.
    fn queue(&mut self, dispatch: Option<Dispatch>) {
        let Some(dispatch) = dispatch else {
            return;
        };
        match dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Dispatch(dispatch),
            &mut self.status,
        ) {
            Ok(()) => self.status.clear(),
            Err(BackendCommand::Dispatch(dispatch)) => {
                let resolution = dispatch.undeliverable(self.status.as_str());
                self.session.apply(resolution);
            }
            Err(BackendCommand::CheckHealth) => {}
        }
    }

    fn check_health(&mut self) {
        if dispatch_backend_command(&self.cmd_tx, BackendCommand::CheckHealth, &mut self.status)
            .is_err()
        {
            self.health = None;
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Resolved(resolution) => {
                    let kind = resolution.kind;
                    if !self.session.apply(resolution) {
                        tracing::debug!(workflow = ?kind, "ignored reply for a discarded request");
                    }
                }
                UiEvent::Health(health) => {
                    self.health = Some(describe_health(&health));
                }
            }
        }
    }

    fn handle_action(&mut self, kind: WorkflowKind, action: Option<PanelAction>) {
        let dispatch = match action {
            Some(PanelAction::Submit) => self.session.submit(kind),
            Some(PanelAction::Remount) => self.session.remount(kind),
            None => return,
        };
        self.queue(dispatch);
    }

    fn show_tab_bar(&mut self, ctx: &egui::Context) {
        let mut selected = None;
        egui::TopBottomPanel::top("workflow_tabs").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("AI-Powered Career Advisor");
            ui.horizontal(|ui| {
                for kind in WorkflowKind::ALL {
                    let active = self.session.active() == kind;
                    if ui.selectable_label(active, kind.label()).clicked() && !active {
                        selected = Some(kind);
                    }
                }
            });
            ui.add_space(4.0);
        });
        if let Some(kind) = selected {
            let dispatch = self.session.select_tab(kind);
            self.queue(dispatch);
        }
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        let mut recheck = false;
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(MUTED_COLOR, self.service_url.as_str());
                if let Some(health) = &self.health {
                    ui.label(health.as_str());
                }
                recheck = ui.small_button("Check service").clicked();
                if !self.status.is_empty() {
                    ui.colored_label(ERROR_COLOR, self.status.as_str());
                }
            });
        });
        if recheck {
            self.check_health();
        }
    }

    fn show_active_workflow(&mut self, ctx: &egui::Context) {
        let kind = self.session.active();
        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                action = match kind {
                    WorkflowKind::PlacementPredict => {
                        panels::placement_panel(ui, self.session.placement_mut())
                    }
                    WorkflowKind::MentorMatch => {
                        panels::mentor_match_panel(ui, self.session.mentor_match_mut())
                    }
                    WorkflowKind::SkillGap => {
                        panels::skill_gap_panel(ui, self.session.skill_gap_mut())
                    }
                };
            });
        });
        self.handle_action(kind, action);
    }
}

impl eframe::App for AdvisorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_tab_bar(ctx);
        self.show_status_bar(ctx);
        self.show_active_workflow(ctx);
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
