pub mod actions;
pub mod manager;
pub mod state;

#[cfg(test)]
mod tests;

pub use actions::IntakeAction;
pub use manager::{IntakeManager, SubmissionSink};
pub use state::{
    required_fields, select_token, AnswerRecord, Field, FormState, WizardStep,
};
