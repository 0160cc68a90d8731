use crate::modules::registration::core::messages::LIVE_PASSWORDS_DO_NOT_MATCH;
use crate::modules::registration::use_cases::live_feedback::email_check::FieldFeedback;

/// Live check of the confirmation field against the current password.
pub fn check_confirmation_live(password: &str, confirmation: &str) -> FieldFeedback {
    if confirmation.is_empty() {
        return FieldFeedback::Neutral;
    }
    if password != confirmation {
        return FieldFeedback::Invalid(LIVE_PASSWORDS_DO_NOT_MATCH);
    }
    FieldFeedback::Valid
}
