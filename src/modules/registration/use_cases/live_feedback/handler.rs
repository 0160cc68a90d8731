// Live feedback handler renders advisory checks while the user types.
//
// Responsibilities
// - Read the relevant field values from the view.
// - Run the pure checks and render their verdict.
// - Never touch submission state beyond what the view shows.

use crate::modules::registration::core::fields::FormField;
use crate::modules::registration::ports::{FormView, ViewError};
use crate::modules::registration::use_cases::live_feedback::confirmation_check::check_confirmation_live;
use crate::modules::registration::use_cases::live_feedback::email_check::{
    FieldFeedback, check_email_live,
};
use crate::modules::registration::use_cases::live_feedback::password_strength::{
    PasswordStrength, evaluate_password_strength,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct LiveFeedbackHandler;

impl LiveFeedbackHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn password_changed<V: FormView>(
        &self,
        view: &mut V,
    ) -> Result<PasswordStrength, ViewError> {
        let strength = evaluate_password_strength(&view.value(FormField::Password));
        tracing::debug!(?strength, "password strength evaluated");
        view.show_password_strength(strength)?;
        Ok(strength)
    }

    pub fn email_changed<V: FormView>(&self, view: &mut V) -> Result<FieldFeedback, ViewError> {
        let feedback = check_email_live(&view.value(FormField::Email));
        render(view, FormField::Email, feedback)?;
        Ok(feedback)
    }

    pub fn confirmation_changed<V: FormView>(
        &self,
        view: &mut V,
    ) -> Result<FieldFeedback, ViewError> {
        let feedback = check_confirmation_live(
            &view.value(FormField::Password),
            &view.value(FormField::Confirmation),
        );
        render(view, FormField::Confirmation, feedback)?;
        Ok(feedback)
    }
}

fn render<V: FormView>(
    view: &mut V,
    field: FormField,
    feedback: FieldFeedback,
) -> Result<(), ViewError> {
    match feedback.message() {
        Some(message) => view.set_field_error(field, message)?,
        None => view.clear_field_error(field)?,
    }
    view.mark_field(field, feedback.mark())
}
