use eframe::egui;

use crate::http_client::HttpClient;
use crate::intake::{IntakeAction, IntakeManager, WizardStep};
use crate::ui;
use crate::upload::ImageAcquisitionPanel;
use crate::wasm_utils;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x02, 0x5f, 0x46);

/// Main intake form application
#[allow(dead_code)] // Constructed in main.rs and lib.rs
pub struct IntakeApp {
    manager: IntakeManager,
    upload: ImageAcquisitionPanel,
}

#[allow(dead_code)] // Used by the entry points and the eframe::App impl
impl IntakeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        wasm_utils::set_panic_hook();
        log::info!("Starting roommate intake form");

        Self {
            manager: IntakeManager::new(),
            upload: ImageAcquisitionPanel::new(HttpClient::new()),
        }
    }
}

impl eframe::App for IntakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        let mut actions: Vec<IntakeAction> = Vec::new();

        // Settle async image work before reading state
        self.upload
            .poll_async(&mut |value| actions.push(IntakeAction::SetImage { value }));

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("Roommate Match Making").color(ACCENT).strong());
                ui.label("Connect with fellow students");
            });
            ui.add_space(8.0);
            progress_strip(ui, self.manager.state().current_step);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let state = self.manager.state();
                let step = state.current_step;

                ui.add_space(4.0);
                ui.heading(step.title());
                ui.add_space(8.0);

                match step {
                    WizardStep::PersonalInfo => {
                        ui::personal::show(ui, &state.record, &mut self.upload, &mut actions)
                    }
                    WizardStep::Housing => ui::housing::show(ui, &state.record, &mut actions),
                    WizardStep::Lifestyle => ui::lifestyle::show(ui, &state.record, &mut actions),
                    WizardStep::Extras => ui::extras::show(ui, &state.record, &mut actions),
                }

                // The warning never blocks editing, only the Continue button
                if !state.can_proceed && !step.is_last() {
                    ui.add_space(10.0);
                    ui.colored_label(
                        egui::Color32::RED,
                        "⚠️ Please fill in all required fields before proceeding to the next step.",
                    );
                }
                if let Some(error) = &state.error {
                    ui.add_space(4.0);
                    ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
                }

                ui.add_space(12.0);
                ui.separator();
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(state.can_go_back, egui::Button::new("← Previous"))
                        .clicked()
                    {
                        actions.push(IntakeAction::PreviousStep);
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if step.is_last() {
                            if ui
                                .button(egui::RichText::new("Find My Roommate 🎯").strong())
                                .clicked()
                            {
                                actions.push(IntakeAction::Submit);
                            }
                        } else if ui
                            .add_enabled(state.can_proceed, egui::Button::new("Continue"))
                            .clicked()
                        {
                            actions.push(IntakeAction::NextStep);
                        }
                    });
                });
            });
        });

        for action in actions {
            self.manager.dispatch(action);
        }
        self.manager.process_pending();
    }
}

fn progress_strip(ui: &mut egui::Ui, current: WizardStep) {
    const STEPS: [(WizardStep, &str, &str, &str); 4] = [
        (WizardStep::PersonalInfo, "👤", "Personal Info", "Tell us who you are"),
        (WizardStep::Housing, "🏠", "Preferences", "Your housing needs"),
        (WizardStep::Lifestyle, "📚", "Lifestyle", "Roommate habits"),
        (WizardStep::Extras, "📝", "Extras", "Additional notes"),
    ];

    ui.columns(STEPS.len(), |columns| {
        for (column, (step, icon, label, sub)) in columns.iter_mut().zip(STEPS) {
            column.vertical_centered(|ui| {
                let completed = current.number() > step.number();
                let active = current == step;
                let marker = if completed { "✓" } else { icon };
                let color = if active || completed {
                    ACCENT
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.label(egui::RichText::new(marker).size(18.0).color(color));
                ui.label(egui::RichText::new(label).strong().color(color));
                ui.label(egui::RichText::new(sub).small().weak());
            });
        }
    });
}
