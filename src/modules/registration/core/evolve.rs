use crate::modules::registration::core::events::SubmissionEvent;
use crate::modules::registration::core::outcome::SubmissionOutcome;
use crate::modules::registration::core::state::SubmissionState;

/// Deterministic transition of the submission state machine. Events that do
/// not apply to the current state leave it unchanged.
pub fn evolve(state: SubmissionState, event: SubmissionEvent) -> SubmissionState {
    match (state, event) {
        (SubmissionState::Validating, SubmissionEvent::ValidationFailed { errors }) => {
            SubmissionState::Invalid { errors }
        }
        (SubmissionState::Validating, SubmissionEvent::ValidationPassed) => {
            SubmissionState::Submitting
        }
        (SubmissionState::Submitting, SubmissionEvent::Resolved(outcome)) => resolve(outcome),
        (SubmissionState::Invalid { .. }, SubmissionEvent::InputChanged) => SubmissionState::Idle,
        (state, SubmissionEvent::SubmitRequested)
            if state == SubmissionState::Idle || state.is_terminal() =>
        {
            SubmissionState::Validating
        }
        (state, _) => state,
    }
}

fn resolve(outcome: SubmissionOutcome) -> SubmissionState {
    match outcome {
        SubmissionOutcome::Success { display_name } => SubmissionState::Succeeded { display_name },
        SubmissionOutcome::Conflict { message } => SubmissionState::Rejected {
            field: None,
            message,
        },
        SubmissionOutcome::ValidationRejected { field, message } => SubmissionState::Rejected {
            field: Some(field),
            message,
        },
        SubmissionOutcome::NetworkFailure { message } => SubmissionState::Failed { message },
    }
}
