use crate::modules::registration::core::outcome::SubmissionOutcome;
use crate::modules::registration::core::validation::FieldError;

/// Steps of the submission flow that move `SubmissionState` forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    SubmitRequested,
    ValidationFailed { errors: Vec<FieldError> },
    ValidationPassed,
    Resolved(SubmissionOutcome),
    InputChanged,
}
