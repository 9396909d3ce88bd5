use std::collections::VecDeque;

use super::state::{AnswerRecord, Field, FormState};
use super::IntakeAction;

/// Receives the completed record when the user submits the final step.
/// The matching backend is out of scope here; the desktop build falls back
/// to dumping the record to the log when no sink is configured.
pub trait SubmissionSink {
    fn submit(&mut self, record: &AnswerRecord);
}

pub struct IntakeManager {
    // Current state - single source of truth
    state: FormState,

    // External handoff for the finished record
    sink: Option<Box<dyn SubmissionSink>>,

    // Action queue, drained once per frame
    pending_actions: VecDeque<IntakeAction>,
}

impl IntakeManager {
    pub fn new() -> Self {
        let mut manager = Self {
            state: FormState::new(),
            sink: None,
            pending_actions: VecDeque::new(),
        };
        manager.update_workflow_state();
        manager
    }

    pub fn with_sink(sink: Box<dyn SubmissionSink>) -> Self {
        let mut manager = Self::new();
        manager.sink = Some(sink);
        manager
    }

    /// UI calls this - synchronous, just queues the action
    pub fn dispatch(&mut self, action: IntakeAction) {
        log::debug!("Dispatching action: {:?}", action.description());
        self.pending_actions.push_back(action);
    }

    /// Call this each frame - drains the queue in dispatch order
    pub fn process_pending(&mut self) {
        while let Some(action) = self.pending_actions.pop_front() {
            log::debug!("Processing action: {}", action.description());
            self.handle_action(action);
        }
    }

    /// UI reads this - immutable reference
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.pending_actions.is_empty()
    }

    fn handle_action(&mut self, action: IntakeAction) {
        // Clear the previous rejection message unless the action is itself
        // error handling
        if !matches!(action, IntakeAction::ClearErrors) {
            self.state.error = None;
        }

        match action {
            IntakeAction::NextStep => self.handle_next_step(),
            IntakeAction::PreviousStep => self.handle_previous_step(),
            IntakeAction::SetField { field, value } => {
                self.state.record.set(field, value);
            }
            IntakeAction::SetImage { value } => {
                self.state.record.set(Field::ProfileImage, value);
            }
            IntakeAction::Submit => self.handle_submit(),
            IntakeAction::ClearErrors => {
                self.state.error = None;
            }
        }

        // Update workflow state after each action
        self.update_workflow_state();
    }

    fn handle_next_step(&mut self) {
        if !self.state.can_advance_from_current_step() {
            self.state.error =
                Some("Cannot advance: current step requirements not met".to_string());
            return;
        }

        self.state.current_step = self.state.current_step.next();
        log::info!("Advanced to step: {:?}", self.state.current_step);
    }

    fn handle_previous_step(&mut self) {
        // Always allowed; saturates at the first step with no re-validation
        self.state.current_step = self.state.current_step.previous();
        log::info!("Went back to step: {:?}", self.state.current_step);
    }

    fn handle_submit(&mut self) {
        if !self.state.current_step.is_last() {
            self.state.error = Some("Submission is only available on the last step".to_string());
            return;
        }

        match &mut self.sink {
            Some(sink) => {
                sink.submit(&self.state.record);
                log::info!("Form handed to submission sink");
            }
            None => match serde_json::to_string_pretty(&self.state.record) {
                Ok(json) => log::info!("Form submitted:\n{}", json),
                Err(error) => log::error!("Failed to serialize submitted form: {}", error),
            },
        }
        // No reset and no confirmation screen; the wizard stays on the
        // final step
    }

    /// Update can_proceed and can_go_back flags based on current state
    fn update_workflow_state(&mut self) {
        self.state.can_proceed = self.state.can_advance_from_current_step();
        self.state.can_go_back = self.state.can_go_back_from_current_step();
    }
}

impl Default for IntakeManager {
    fn default() -> Self {
        Self::new()
    }
}
