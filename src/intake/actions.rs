use super::state::Field;

#[derive(Debug, Clone)]
pub enum IntakeAction {
    // Step navigation
    NextStep,
    PreviousStep,

    // Answer updates
    SetField { field: Field, value: String },
    SetImage { value: String },

    // Final handoff
    Submit,

    // Error handling
    ClearErrors,
}

impl IntakeAction {
    pub fn description(&self) -> &'static str {
        match self {
            IntakeAction::NextStep => "Advancing to next step",
            IntakeAction::PreviousStep => "Going back to previous step",
            IntakeAction::SetField { .. } => "Updating answer field",
            IntakeAction::SetImage { .. } => "Updating profile image",
            IntakeAction::Submit => "Submitting completed form",
            IntakeAction::ClearErrors => "Clearing validation errors",
        }
    }
}
