//! Step 4: optional free-text notes. Nothing here is required.

use eframe::egui;

use super::widgets;
use crate::intake::{AnswerRecord, Field, IntakeAction};

pub fn show(ui: &mut egui::Ui, record: &AnswerRecord, actions: &mut Vec<IntakeAction>) {
    ui.label("Tell us more about yourself and your preferences");
    ui.add_space(10.0);

    widgets::text_area(
        ui,
        actions,
        record,
        Field::Hobbies,
        "Hobbies & Interests",
        false,
        "Tell us about your hobbies, interests, and what you like to do in your free time...",
    );
    ui.add_space(8.0);
    widgets::text_area(
        ui,
        actions,
        record,
        Field::DealBreakers,
        "Deal Breakers",
        false,
        "What are your absolute deal breakers when it comes to roommates or living situations?",
    );
    ui.add_space(8.0);
    widgets::text_area(
        ui,
        actions,
        record,
        Field::AdditionalNotes,
        "Additional Notes",
        false,
        "Any additional information about yourself or specific requirements you'd like potential roommates to know...",
    );
}
