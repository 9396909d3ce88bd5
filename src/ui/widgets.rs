//! Shared form controls. Each one reads the current value from the record
//! and emits a `SetField` action on change; nothing here mutates the record.

use eframe::egui;

use crate::intake::{select_token, AnswerRecord, Field, IntakeAction};

/// Label + single-line input as one grid row. All single-line fields on the
/// gated steps are required, hence the marker.
pub fn text_row(
    ui: &mut egui::Ui,
    actions: &mut Vec<IntakeAction>,
    record: &AnswerRecord,
    field: Field,
    label: &str,
    hint: &str,
) {
    ui.label(format!("{} *", label));
    let mut value = record.get(field).to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        actions.push(IntakeAction::SetField { field, value });
    }
    ui.end_row();
}

/// Label + dropdown as one grid row. The stored value is the normalized
/// token of the chosen label; the empty choice stores "".
pub fn select_row(
    ui: &mut egui::Ui,
    actions: &mut Vec<IntakeAction>,
    record: &AnswerRecord,
    field: Field,
    label: &str,
    options: &[&str],
) {
    ui.label(format!("{} *", label));

    let current = record.get(field).to_string();
    let display = if current.is_empty() {
        "Select an option...".to_string()
    } else {
        options
            .iter()
            .find(|option| select_token(option) == current)
            .map(|option| option.to_string())
            .unwrap_or_else(|| current.clone())
    };

    egui::ComboBox::new(field.key(), "")
        .selected_text(display)
        .show_ui(ui, |ui| {
            if ui
                .selectable_label(current.is_empty(), "Select an option...")
                .clicked()
            {
                actions.push(IntakeAction::SetField {
                    field,
                    value: String::new(),
                });
            }
            for option in options {
                let token = select_token(option);
                if ui.selectable_label(current == token, *option).clicked() {
                    actions.push(IntakeAction::SetField {
                        field,
                        value: token,
                    });
                }
            }
        });
    ui.end_row();
}

/// Full-width multiline input with its label above it.
pub fn text_area(
    ui: &mut egui::Ui,
    actions: &mut Vec<IntakeAction>,
    record: &AnswerRecord,
    field: Field,
    label: &str,
    required: bool,
    hint: &str,
) {
    if required {
        ui.label(format!("{} *", label));
    } else {
        ui.label(label);
    }
    let mut value = record.get(field).to_string();
    let response = ui.add(
        egui::TextEdit::multiline(&mut value)
            .desired_rows(3)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        actions.push(IntakeAction::SetField { field, value });
    }
}
