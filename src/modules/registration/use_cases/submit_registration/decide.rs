// Pure interpretation of the gateway's answer.
//
// Purpose
// - Turn a gateway response (or the lack of one) into the outcome the form
//   renders.
//
// Responsibilities
// - Prefer the server's display name, fall back to the name typed locally.
// - Route a duplicate-email rejection to the email field.
// - Pick the banner text for every other rejection and for transport errors.
// - Never perform input or output.

use crate::modules::registration::core::fields::FormField;
use crate::modules::registration::core::input::RegistrationInput;
use crate::modules::registration::core::messages::{
    CONNECTION_FAILED, DUPLICATE_EMAIL, REGISTRATION_FAILED,
};
use crate::modules::registration::core::outcome::SubmissionOutcome;
use crate::modules::registration::ports::{GatewayError, GatewayResponse, RejectionBody};

pub fn decide_outcome(
    input: &RegistrationInput,
    response: Result<GatewayResponse, GatewayError>,
) -> SubmissionOutcome {
    match response {
        Ok(GatewayResponse::Accepted { display_name }) => SubmissionOutcome::Success {
            display_name: display_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| input.name.clone()),
        },
        Ok(GatewayResponse::Rejected { body, .. }) => decide_rejection(body),
        Err(GatewayError::Transport(_)) => SubmissionOutcome::NetworkFailure {
            message: CONNECTION_FAILED.to_string(),
        },
    }
}

fn decide_rejection(body: RejectionBody) -> SubmissionOutcome {
    let RejectionBody { error, message } = body;
    if let Some(error) = error.as_deref().filter(|error| is_duplicate_email(error)) {
        return SubmissionOutcome::ValidationRejected {
            field: FormField::Email,
            message: error.to_string(),
        };
    }
    let message = [message, error]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| REGISTRATION_FAILED.to_string());
    SubmissionOutcome::Conflict { message }
}

/// Matches the duplicate-email error regardless of surrounding whitespace or a
/// trailing period.
pub fn is_duplicate_email(error: &str) -> bool {
    error.trim().trim_end_matches('.') == DUPLICATE_EMAIL
}
