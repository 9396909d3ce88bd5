//! Step 1: personal and academic information, plus the profile picture.

use eframe::egui;

use super::widgets;
use crate::intake::{AnswerRecord, Field, IntakeAction};
use crate::upload::ImageAcquisitionPanel;

const LEVEL_OPTIONS: [&str; 5] = [
    "100 Level",
    "200 Level",
    "300 Level",
    "400 Level",
    "500 Level",
];

const RELIGION_OPTIONS: [&str; 3] = ["Christianity", "Islam", "Traditional African Religion"];

const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Prefer not to say"];

pub fn show(
    ui: &mut egui::Ui,
    record: &AnswerRecord,
    upload: &mut ImageAcquisitionPanel,
    actions: &mut Vec<IntakeAction>,
) {
    ui.label("Tell us about yourself and your academic background");
    ui.add_space(10.0);

    egui::Grid::new("personal_info_grid")
        .num_columns(2)
        .spacing([10.0, 8.0])
        .min_col_width(150.0)
        .show(ui, |ui| {
            widgets::text_row(ui, actions, record, Field::Name, "Full Name", "");
            widgets::text_row(ui, actions, record, Field::Age, "Age", "e.g. 21");
            widgets::text_row(ui, actions, record, Field::Department, "Department", "");
            widgets::select_row(ui, actions, record, Field::Level, "Level", &LEVEL_OPTIONS);
            widgets::select_row(ui, actions, record, Field::Religion, "Religion", &RELIGION_OPTIONS);
            widgets::select_row(ui, actions, record, Field::Gender, "Gender", &GENDER_OPTIONS);
            widgets::text_row(ui, actions, record, Field::Phone, "Phone Number", "");
            widgets::text_row(ui, actions, record, Field::Email, "Email Address", "");
        });

    ui.add_space(12.0);
    upload.show(ui, record.get(Field::ProfileImage), &mut |value| {
        actions.push(IntakeAction::SetImage { value })
    });
}
