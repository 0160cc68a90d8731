// Purpose
// - Lifecycle of one submission as explicit variants.
//
// Notes
// - `Invalid`, `Succeeded`, `Rejected` and `Failed` are terminal for an
//   attempt; a new `SubmitRequested` starts the next one.
// - Only `Submitting` counts as loading.

use crate::modules::registration::core::fields::FormField;
use crate::modules::registration::core::validation::FieldError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Invalid {
        errors: Vec<FieldError>,
    },
    Submitting,
    Succeeded {
        display_name: String,
    },
    Rejected {
        field: Option<FormField>,
        message: String,
    },
    Failed {
        message: String,
    },
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Invalid { .. }
                | SubmissionState::Succeeded { .. }
                | SubmissionState::Rejected { .. }
                | SubmissionState::Failed { .. }
        )
    }
}
