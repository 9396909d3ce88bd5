//! Step 3: lifestyle and study preferences.

use eframe::egui;

use super::widgets;
use crate::intake::{AnswerRecord, Field, IntakeAction};

const SLEEP_OPTIONS: [&str; 4] = [
    "Early Morning Person",
    "Regular Schedule",
    "Night Owl/Late Studier",
    "Irregular Schedule",
];

const CLEANLINESS_OPTIONS: [&str; 3] = [
    "Very Neat & Organized",
    "Moderately Clean",
    "Relaxed About Cleanliness",
];

const SOCIAL_OPTIONS: [&str; 4] = [
    "Very Social & Outgoing",
    "Moderately Social",
    "Prefer Quiet Environment",
    "Keep to Myself",
];

const SMOKING_OPTIONS: [&str; 3] = ["No Smoking", "Smoking Outside Only", "Smoking Allowed"];

const DRINKING_OPTIONS: [&str; 3] = [
    "No Drinking",
    "Occasional Social Drinking",
    "Drinking Allowed",
];

const GUEST_OPTIONS: [&str; 4] = [
    "No Visitors",
    "Occasional Visitors OK",
    "Frequent Visitors OK",
    "Overnight Visitors OK",
];

pub fn show(ui: &mut egui::Ui, record: &AnswerRecord, actions: &mut Vec<IntakeAction>) {
    ui.label("Help us match you with compatible roommates");
    ui.add_space(10.0);

    egui::Grid::new("lifestyle_grid")
        .num_columns(2)
        .spacing([10.0, 8.0])
        .min_col_width(150.0)
        .show(ui, |ui| {
            widgets::select_row(
                ui,
                actions,
                record,
                Field::SleepSchedule,
                "Study Schedule",
                &SLEEP_OPTIONS,
            );
            widgets::select_row(
                ui,
                actions,
                record,
                Field::Cleanliness,
                "Cleanliness Level",
                &CLEANLINESS_OPTIONS,
            );
            widgets::select_row(
                ui,
                actions,
                record,
                Field::SocialLevel,
                "Social Level",
                &SOCIAL_OPTIONS,
            );
            widgets::select_row(
                ui,
                actions,
                record,
                Field::SmokingPolicy,
                "Smoking Policy",
                &SMOKING_OPTIONS,
            );
            widgets::select_row(
                ui,
                actions,
                record,
                Field::DrinkingPolicy,
                "Drinking Policy",
                &DRINKING_OPTIONS,
            );
            widgets::select_row(
                ui,
                actions,
                record,
                Field::GuestPolicy,
                "Visitor Policy",
                &GUEST_OPTIONS,
            );
        });
}
