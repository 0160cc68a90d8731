// Real-time email check run on every keystroke. Purely visual: it reuses the
// submit-time rules but renders its own, shorter hints.

use crate::modules::registration::core::fields::FieldMark;
use crate::modules::registration::core::messages::{
    LIVE_EMAIL_INVALID_FORMAT, LIVE_EMAIL_OUTSIDE_DOMAIN,
};
use crate::modules::registration::core::validation::{
    belongs_to_required_domain, is_well_formed_email,
};

/// Live verdict for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFeedback {
    /// Nothing typed yet: clear the message and the mark.
    Neutral,
    Invalid(&'static str),
    Valid,
}

impl FieldFeedback {
    pub fn mark(self) -> FieldMark {
        match self {
            FieldFeedback::Neutral => FieldMark::Neutral,
            FieldFeedback::Invalid(_) => FieldMark::Error,
            FieldFeedback::Valid => FieldMark::Success,
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            FieldFeedback::Invalid(message) => Some(message),
            FieldFeedback::Neutral | FieldFeedback::Valid => None,
        }
    }
}

pub fn check_email_live(email: &str) -> FieldFeedback {
    let email = email.trim();
    if email.is_empty() {
        return FieldFeedback::Neutral;
    }
    if !is_well_formed_email(email) {
        tracing::debug!(email, "live email check: invalid format");
        return FieldFeedback::Invalid(LIVE_EMAIL_INVALID_FORMAT);
    }
    if !belongs_to_required_domain(email) {
        tracing::debug!(email, "live email check: outside domain");
        return FieldFeedback::Invalid(LIVE_EMAIL_OUTSIDE_DOMAIN);
    }
    FieldFeedback::Valid
}
