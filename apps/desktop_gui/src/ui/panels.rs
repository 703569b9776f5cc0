//! The three workflow panels. Panels only read and edit controller state; anything
//! that needs the backend is reported back as a [`PanelAction`].

use client_core::{
    service::{MAX_TOP_N, MIN_TOP_N},
    workflow::{
        mentor_match::{empty_state, mentor_cards, results_heading, MentorCard},
        placement::PlacementReport,
        skill_gap::SkillGapReport,
    },
    CatalogState, MentorMatchController, PlacementController, PlacementMetric,
    SkillGapController, Workflow, WorkflowController,
};
use egui::RichText;
use shared::domain::{PlacementPrediction, SkillRecommendation};

use crate::ui::theme::{band_color, rgb, ERROR_COLOR, MUTED_COLOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Submit,
    Remount,
}

pub fn skill_gap_panel(ui: &mut egui::Ui, controller: &mut SkillGapController) -> Option<PanelAction> {
    let mut action = panel_header(ui, "Skill Gap Analysis & Recommendations");
    action = action.or(field_picker(ui, controller, "Select your Field of Interest:"));

    ui.label("Your Current Skills (comma-separated):");
    controller.update_input(|inputs| {
        ui.add(
            egui::TextEdit::singleline(&mut inputs.skills)
                .hint_text("e.g., Python, JavaScript, React, SQL, Machine Learning...")
                .desired_width(f32::INFINITY),
        );
    });

    action = action.or(submit_row(ui, controller, "Get Skill Recommendations", "Analyzing..."));
    if let Some(recommendation) = controller.status().result() {
        show_skill_report(ui, recommendation);
    }
    action
}

pub fn mentor_match_panel(
    ui: &mut egui::Ui,
    controller: &mut MentorMatchController,
) -> Option<PanelAction> {
    let mut action = panel_header(ui, "Find Your Perfect Mentor");
    action = action.or(field_picker(ui, controller, "Select your Field of Interest:"));

    let mut top_n = i64::from(controller.inputs().top_n());
    let slider = egui::Slider::new(&mut top_n, i64::from(MIN_TOP_N)..=i64::from(MAX_TOP_N))
        .text("Number of Mentors");
    if ui.add(slider).changed() {
        controller.update_input(|inputs| inputs.set_top_n(top_n));
    }

    action = action.or(submit_row(ui, controller, "Find Mentors", "Finding Mentors..."));
    if let Some(message) = empty_state(controller.status()) {
        ui.separator();
        ui.colored_label(MUTED_COLOR, message);
    } else if let Some(mentors) = controller.status().result() {
        ui.separator();
        ui.heading(results_heading(mentors.len()));
        for card in mentor_cards(mentors) {
            show_mentor_card(ui, &card);
        }
    }
    action
}

pub fn placement_panel(
    ui: &mut egui::Ui,
    controller: &mut PlacementController,
) -> Option<PanelAction> {
    let mut action = panel_header(ui, "Placement Tier Prediction");
    action = action.or(field_picker(ui, controller, "Field of Interest:"));

    ui.label("Your Skills (comma-separated):");
    controller.update_input(|inputs| {
        ui.add(
            egui::TextEdit::singleline(&mut inputs.skills)
                .hint_text("e.g., Python, JavaScript, React, SQL...")
                .desired_width(f32::INFINITY),
        );
    });

    egui::Grid::new("placement_metrics")
        .num_columns(2)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            for metric in PlacementMetric::ALL {
                let range = metric.range();
                let mut value = controller.inputs().value(metric);
                let mut slider =
                    egui::Slider::new(&mut value, range.min..=range.max).step_by(range.step);
                if range.step >= 1.0 {
                    slider = slider.fixed_decimals(0);
                }
                ui.label(metric.label());
                if ui.add(slider).changed() {
                    controller.update_input(|inputs| {
                        inputs.set_metric(metric, value);
                    });
                }
                ui.end_row();
            }
        });

    action = action.or(submit_row(ui, controller, "Predict My Placement Tier", "Predicting..."));
    if let Some(prediction) = controller.status().result() {
        show_placement_report(ui, prediction);
    }
    action
}

fn panel_header(ui: &mut egui::Ui, title: &str) -> Option<PanelAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Start over").clicked() {
                action = Some(PanelAction::Remount);
            }
        });
    });
    ui.add_space(6.0);
    action
}

fn field_picker<W: Workflow>(
    ui: &mut egui::Ui,
    controller: &mut WorkflowController<W>,
    label: &str,
) -> Option<PanelAction> {
    ui.label(label);
    let fields = match controller.catalog() {
        CatalogState::NotRequested | CatalogState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading fields...");
            });
            return None;
        }
        CatalogState::Unavailable(message) => {
            let message = message.clone();
            let mut retry = false;
            ui.horizontal(|ui| {
                ui.colored_label(ERROR_COLOR, message);
                retry = ui.button("Retry").clicked();
            });
            return retry.then_some(PanelAction::Remount);
        }
        CatalogState::Ready(catalog) => catalog.fields().to_vec(),
    };

    let current = W::selected_field(controller.inputs()).to_string();
    let mut selected = current.clone();
    let shown = if fields.is_empty() {
        "No fields available".to_string()
    } else {
        current.clone()
    };
    ui.add_enabled_ui(!fields.is_empty(), |ui| {
        egui::ComboBox::from_id_salt((W::KIND, "field_of_interest"))
            .selected_text(shown)
            .width(280.0)
            .show_ui(ui, |ui| {
                for field in &fields {
                    ui.selectable_value(&mut selected, field.clone(), field.as_str());
                }
            });
    });
    if selected != current {
        controller.update_input(|inputs| W::select_field(inputs, &selected));
    }
    None
}

fn submit_row<W: Workflow>(
    ui: &mut egui::Ui,
    controller: &WorkflowController<W>,
    label: &str,
    busy_label: &str,
) -> Option<PanelAction> {
    ui.add_space(8.0);
    let loading = controller.status().is_loading();
    let mut clicked = false;
    ui.horizontal(|ui| {
        let text = if loading { busy_label } else { label };
        clicked = ui
            .add_enabled(controller.can_submit(), egui::Button::new(text))
            .clicked();
        if loading {
            ui.spinner();
        }
    });
    if let Some(message) = controller.status().error_message() {
        ui.colored_label(ERROR_COLOR, message);
    }
    clicked.then_some(PanelAction::Submit)
}

fn show_skill_report(ui: &mut egui::Ui, recommendation: &SkillRecommendation) {
    let report = SkillGapReport::new(recommendation);
    ui.separator();
    ui.heading("Field Match Score");
    ui.label(
        RichText::new(report.match_label())
            .size(28.0)
            .strong()
            .color(band_color(report.match_band())),
    );

    ui.columns(2, |columns| {
        skill_list(
            &mut columns[0],
            format!("Skills You Have ({})", report.skills_have().len()),
            report.skills_have(),
            report.have_fallback(),
        );
        skill_list(
            &mut columns[1],
            format!("Skills to Learn ({})", report.skills_to_learn().len()),
            report.skills_to_learn(),
            report.learn_fallback(),
        );
    });
    tip_list(ui, "Learning Tips", report.learning_tips());
}

fn skill_list(ui: &mut egui::Ui, heading: String, skills: &[String], fallback: Option<&str>) {
    ui.label(RichText::new(heading).strong());
    match fallback {
        Some(message) => {
            ui.colored_label(MUTED_COLOR, message);
        }
        None => {
            for skill in skills {
                ui.label(format!("• {skill}"));
            }
        }
    }
}

fn show_mentor_card(ui: &mut egui::Ui, card: &MentorCard<'_>) {
    let record = card.record;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("#{}", card.rank)).strong());
            ui.label(RichText::new(record.professor_name.as_str()).strong().size(16.0));
            ui.label(
                RichText::new(card.score_label())
                    .strong()
                    .color(band_color(card.score_band())),
            );
        });
        egui::Grid::new(("mentor_card", card.rank))
            .num_columns(2)
            .show(ui, |ui| {
                let rows = [
                    ("Code", record.professor_code.clone()),
                    ("Expertise", record.field_of_expertise.clone()),
                    ("Experience", card.experience_label()),
                    ("Feedback", card.feedback_label()),
                    ("Mentee performance", card.mentee_performance_label()),
                    ("Behavior", card.behavior_label()),
                ];
                for (name, value) in rows {
                    ui.colored_label(MUTED_COLOR, name);
                    ui.label(value);
                    ui.end_row();
                }
            });
        match card.contact_link() {
            Ok(link) => {
                ui.hyperlink_to(format!("Contact {}", record.contact_email), link.as_str());
            }
            Err(err) => {
                tracing::debug!("no contact link for {}: {err}", record.professor_code);
                ui.label(record.contact_email.as_str());
            }
        }
    });
    ui.add_space(4.0);
}

fn show_placement_report(ui: &mut egui::Ui, prediction: &PlacementPrediction) {
    let report = PlacementReport::new(prediction);
    ui.separator();
    ui.heading("Prediction Result");
    ui.label(
        RichText::new(report.predicted_tier())
            .size(28.0)
            .strong()
            .color(rgb(report.tier_rgb())),
    );

    ui.label(RichText::new("Confidence Scores").strong());
    for row in report.confidence_rows() {
        ui.horizontal(|ui| {
            ui.add_sized([72.0, 18.0], egui::Label::new(row.tier.as_str()));
            ui.add(
                egui::ProgressBar::new(row.score as f32)
                    .desired_width(260.0)
                    .fill(band_color(row.band))
                    .text(row.percent.as_str()),
            );
        });
    }
    tip_list(ui, "Improvement Tips", report.improvement_tips());
}

fn tip_list(ui: &mut egui::Ui, heading: &str, tips: &[&str]) {
    if tips.is_empty() {
        return;
    }
    ui.add_space(8.0);
    ui.label(RichText::new(heading).strong());
    for tip in tips {
        ui.label(format!("• {tip}"));
    }
}
