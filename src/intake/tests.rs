use std::cell::RefCell;
use std::rc::Rc;

use crate::intake::{
    required_fields, select_token, AnswerRecord, Field, FormState, IntakeAction, IntakeManager,
    SubmissionSink, WizardStep,
};

/// Sink that records the submitted answers for assertions.
struct RecordingSink(Rc<RefCell<Option<AnswerRecord>>>);

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, record: &AnswerRecord) {
        *self.0.borrow_mut() = Some(record.clone());
    }
}

fn fill_required(manager: &mut IntakeManager, step: WizardStep) {
    for field in required_fields(step) {
        manager.dispatch(IntakeAction::SetField {
            field: *field,
            value: format!("answer for {}", field.key()),
        });
    }
    manager.process_pending();
}

#[test]
fn manager_initialization() {
    let manager = IntakeManager::new();
    let state = manager.state();

    assert_eq!(state.current_step, WizardStep::PersonalInfo);
    assert!(!state.can_proceed);
    assert!(!state.can_go_back);
    assert!(state.error.is_none());
    for field in Field::ALL {
        assert_eq!(state.record.get(field), "");
    }
}

#[test]
fn step_validity_requires_every_field() {
    for step in [
        WizardStep::PersonalInfo,
        WizardStep::Housing,
        WizardStep::Lifestyle,
    ] {
        let mut state = FormState::new();
        state.current_step = step;

        assert!(!state.is_step_valid(step), "{step:?} valid while empty");

        for field in required_fields(step) {
            state.record.set(*field, "filled".to_string());
        }
        assert!(state.is_step_valid(step), "{step:?} invalid while full");

        // Clearing any single required field must invalidate the step again
        for field in required_fields(step) {
            state.record.set(*field, String::new());
            assert!(
                !state.is_step_valid(step),
                "{step:?} still valid with {} empty",
                field.key()
            );
            state.record.set(*field, "filled".to_string());
        }
    }
}

#[test]
fn final_step_is_always_valid() {
    let state = FormState::new();
    assert!(state.is_step_valid(WizardStep::Extras));
}

#[test]
fn next_is_blocked_while_step_invalid() {
    let mut manager = IntakeManager::new();

    manager.dispatch(IntakeAction::NextStep);
    manager.process_pending();

    let state = manager.state();
    assert_eq!(state.current_step, WizardStep::PersonalInfo);
    assert!(state.error.is_some());

    manager.dispatch(IntakeAction::ClearErrors);
    manager.process_pending();
    assert!(manager.state().error.is_none());
}

#[test]
fn previous_saturates_at_first_step() {
    let mut manager = IntakeManager::new();

    manager.dispatch(IntakeAction::PreviousStep);
    manager.process_pending();

    assert_eq!(manager.state().current_step, WizardStep::PersonalInfo);
}

#[test]
fn next_saturates_at_last_step() {
    let mut manager = IntakeManager::new();
    fill_required(&mut manager, WizardStep::PersonalInfo);
    fill_required(&mut manager, WizardStep::Housing);
    fill_required(&mut manager, WizardStep::Lifestyle);

    for _ in 0..5 {
        manager.dispatch(IntakeAction::NextStep);
        manager.process_pending();
    }

    assert_eq!(manager.state().current_step, WizardStep::Extras);
}

#[test]
fn previous_never_revalidates() {
    let mut manager = IntakeManager::new();
    fill_required(&mut manager, WizardStep::PersonalInfo);
    manager.dispatch(IntakeAction::NextStep);
    manager.process_pending();
    assert_eq!(manager.state().current_step, WizardStep::Housing);

    // Invalidate step 1 behind our back, then walk back anyway
    manager.dispatch(IntakeAction::SetField {
        field: Field::Name,
        value: String::new(),
    });
    manager.dispatch(IntakeAction::PreviousStep);
    manager.process_pending();

    let state = manager.state();
    assert_eq!(state.current_step, WizardStep::PersonalInfo);
    assert!(state.error.is_none());
}

#[test]
fn set_field_preserves_every_other_key() {
    let mut record = AnswerRecord::default();
    record.set(Field::Budget, "150000".to_string());

    for field in Field::ALL {
        if field == Field::Budget {
            assert_eq!(record.get(field), "150000");
        } else {
            assert_eq!(record.get(field), "", "{} was clobbered", field.key());
        }
    }
}

#[test]
fn select_token_normalization() {
    assert_eq!(select_token("Shared Room (2 people)"), "shared-room-(2-people)");
    assert_eq!(select_token("No Smoking"), "no-smoking");
    assert_eq!(select_token("Night Owl/Late Studier"), "night-owl/late-studier");
    assert_eq!(select_token(""), "");
}

#[test]
fn submitted_record_keys_match_original_names() {
    let record = AnswerRecord::default();
    let json = serde_json::to_value(&record).expect("record serializes");
    let map = json.as_object().expect("record is a JSON object");

    assert_eq!(map.len(), Field::ALL.len());
    for field in Field::ALL {
        assert!(map.contains_key(field.key()), "missing key {}", field.key());
    }
}

#[test]
fn complete_walkthrough_hands_record_to_sink() {
    let submitted = Rc::new(RefCell::new(None));
    let mut manager = IntakeManager::with_sink(Box::new(RecordingSink(submitted.clone())));

    fill_required(&mut manager, WizardStep::PersonalInfo);
    manager.dispatch(IntakeAction::NextStep);
    manager.process_pending();
    assert_eq!(manager.state().current_step, WizardStep::Housing);

    fill_required(&mut manager, WizardStep::Housing);
    manager.dispatch(IntakeAction::NextStep);
    manager.process_pending();
    assert_eq!(manager.state().current_step, WizardStep::Lifestyle);

    fill_required(&mut manager, WizardStep::Lifestyle);
    manager.dispatch(IntakeAction::NextStep);
    manager.process_pending();
    assert_eq!(manager.state().current_step, WizardStep::Extras);

    // Leave the optional free-text fields empty and submit
    manager.dispatch(IntakeAction::Submit);
    manager.process_pending();

    let record = submitted.borrow().clone().expect("sink received the record");
    for step in [
        WizardStep::PersonalInfo,
        WizardStep::Housing,
        WizardStep::Lifestyle,
    ] {
        for field in required_fields(step) {
            assert_eq!(record.get(*field), format!("answer for {}", field.key()));
        }
    }
    for field in [
        Field::Hobbies,
        Field::DealBreakers,
        Field::AdditionalNotes,
        Field::ProfileImage,
        Field::Occupation,
        Field::StudentId,
        Field::Faculty,
        Field::PetPolicy,
    ] {
        assert_eq!(record.get(field), "", "{} should be empty", field.key());
    }

    // Submission leaves the wizard in place - no reset
    assert_eq!(manager.state().current_step, WizardStep::Extras);
}

#[test]
fn submit_is_rejected_before_last_step() {
    let submitted = Rc::new(RefCell::new(None));
    let mut manager = IntakeManager::with_sink(Box::new(RecordingSink(submitted.clone())));

    manager.dispatch(IntakeAction::Submit);
    manager.process_pending();

    assert!(submitted.borrow().is_none());
    assert!(manager.state().error.is_some());
}

#[test]
fn submit_without_sink_only_logs() {
    let mut manager = IntakeManager::new();
    fill_required(&mut manager, WizardStep::PersonalInfo);
    fill_required(&mut manager, WizardStep::Housing);
    fill_required(&mut manager, WizardStep::Lifestyle);
    for _ in 0..3 {
        manager.dispatch(IntakeAction::NextStep);
    }
    manager.dispatch(IntakeAction::Submit);
    manager.process_pending();

    assert_eq!(manager.state().current_step, WizardStep::Extras);
    assert!(manager.state().error.is_none());
}

#[test]
fn set_image_only_touches_profile_image() {
    let mut manager = IntakeManager::new();
    manager.dispatch(IntakeAction::SetField {
        field: Field::Name,
        value: "Ada".to_string(),
    });
    manager.dispatch(IntakeAction::SetImage {
        value: "data:image/png;base64,AAAA".to_string(),
    });
    manager.process_pending();

    let record = &manager.state().record;
    assert_eq!(record.get(Field::ProfileImage), "data:image/png;base64,AAAA");
    assert_eq!(record.get(Field::Name), "Ada");
}
