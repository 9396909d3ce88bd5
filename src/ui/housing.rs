//! Step 2: accommodation preferences and budget.

use eframe::egui;

use super::widgets;
use crate::intake::{AnswerRecord, Field, IntakeAction};

const DURATION_OPTIONS: [&str; 4] = [
    "One Semester",
    "One Academic Session",
    "Full Academic Year",
    "Flexible",
];

const ROOM_TYPE_OPTIONS: [&str; 5] = [
    "Single Room",
    "Shared Room (2 people)",
    "Shared Room (3-4 people)",
    "Self-Contained",
    "Apartment Share",
];

pub fn show(ui: &mut egui::Ui, record: &AnswerRecord, actions: &mut Vec<IntakeAction>) {
    ui.label("Let us know your housing preferences and budget");
    ui.add_space(10.0);

    widgets::text_area(ui, actions, record, Field::Budget, "Budget", true, "");
    ui.add_space(8.0);

    egui::Grid::new("housing_grid")
        .num_columns(2)
        .spacing([10.0, 8.0])
        .min_col_width(150.0)
        .show(ui, |ui| {
            widgets::text_row(
                ui,
                actions,
                record,
                Field::MoveInDate,
                "Preferred Move-in Date",
                "YYYY-MM-DD",
            );
            widgets::select_row(
                ui,
                actions,
                record,
                Field::LeaseDuration,
                "Accommodation Duration",
                &DURATION_OPTIONS,
            );
            widgets::select_row(
                ui,
                actions,
                record,
                Field::RoomType,
                "Room Type Preference",
                &ROOM_TYPE_OPTIONS,
            );
        });

    ui.add_space(8.0);
    widgets::text_area(
        ui,
        actions,
        record,
        Field::PreferredLocation,
        "Preferred Location",
        true,
        "",
    );
}
