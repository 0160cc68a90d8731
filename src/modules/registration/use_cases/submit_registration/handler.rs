// Submission handler orchestrates the submit flow.
//
// Responsibilities
// - Clear previous inline errors and the banner.
// - Read and validate every field, rendering all failures at once.
// - Submit through the gateway only when every field passes, with the view
//   in its loading state strictly for the duration of the request.
// - Render the outcome and always leave the loading state, even when
//   rendering fails.
//
// Errors never escape: each failed view update is logged on its own and the
// remaining updates still run. The returned state is this attempt's own.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;

use crate::modules::registration::core::events::SubmissionEvent;
use crate::modules::registration::core::evolve::evolve;
use crate::modules::registration::core::fields::{FieldMark, FormField};
use crate::modules::registration::core::input::RegistrationInput;
use crate::modules::registration::core::messages::welcome;
use crate::modules::registration::core::outcome::SubmissionOutcome;
use crate::modules::registration::core::state::SubmissionState;
use crate::modules::registration::core::validation::{FormValidation, validate_form};
use crate::modules::registration::ports::{
    Banner, FormView, GatewayResponse, RegistrationGateway, ViewError,
};
use crate::modules::registration::use_cases::submit_registration::decide::decide_outcome;

pub struct SubmitRegistrationHandler<TGateway>
where
    TGateway: RegistrationGateway + 'static,
{
    gateway: Arc<TGateway>,
}

impl<TGateway> SubmitRegistrationHandler<TGateway>
where
    TGateway: RegistrationGateway + 'static,
{
    pub fn new(gateway: Arc<TGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle<V: FormView>(
        &self,
        view: &mut V,
        state: &Mutex<SubmissionState>,
    ) -> SubmissionState {
        let submission_id = Uuid::now_v7();
        let span = tracing::info_span!("submit_registration", %submission_id);
        self.run(view, state).instrument(span).await
    }

    async fn run<V: FormView>(
        &self,
        view: &mut V,
        state: &Mutex<SubmissionState>,
    ) -> SubmissionState {
        let mut attempt = SubmissionState::Idle;
        advance(state, &mut attempt, SubmissionEvent::SubmitRequested).await;

        clear_feedback(view);

        let input = RegistrationInput::from_raw(|field| view.value(field));
        let validation = validate_form(&input);
        render_validation(view, &validation);
        if !validation.is_valid() {
            let errors = validation.errors();
            tracing::debug!(count = errors.len(), "submission blocked by validation");
            return advance(state, &mut attempt, SubmissionEvent::ValidationFailed { errors })
                .await;
        }

        advance(state, &mut attempt, SubmissionEvent::ValidationPassed).await;
        set_loading(view, true);

        let response = self.gateway.submit(&input).await;
        if let Ok(GatewayResponse::Rejected { status, .. }) = &response {
            tracing::warn!(status, "registration endpoint answered with an error status");
        }
        let outcome = decide_outcome(&input, response);
        log_outcome(&outcome);

        render_outcome(view, &outcome);
        set_loading(view, false);

        advance(state, &mut attempt, SubmissionEvent::Resolved(outcome)).await
    }
}

/// Moves this attempt forward and records it as the controller's latest state.
/// Attempts are not serialised, so the shared state holds whichever attempt
/// transitioned last while the return value always belongs to this one.
async fn advance(
    state: &Mutex<SubmissionState>,
    attempt: &mut SubmissionState,
    event: SubmissionEvent,
) -> SubmissionState {
    *attempt = evolve(std::mem::take(attempt), event);
    *state.lock().await = attempt.clone();
    attempt.clone()
}

fn set_loading<V: FormView>(view: &mut V, loading: bool) {
    tracing::debug!(loading, "loading state");
    if let Err(error) = view.set_loading(loading) {
        tracing::error!(%error, loading, "failed to toggle loading state");
    }
}

fn logged(step: &'static str, result: Result<(), ViewError>) {
    if let Err(error) = result {
        tracing::error!(step, %error, "failed to update the form");
    }
}

fn clear_feedback<V: FormView>(view: &mut V) {
    for field in FormField::ALL {
        logged("clear field error", view.clear_field_error(field));
        logged("clear field mark", view.mark_field(field, FieldMark::Neutral));
    }
    logged("hide banner", view.hide_banner());
}

fn render_validation<V: FormView>(view: &mut V, validation: &FormValidation) {
    for field in FormField::ALL {
        if let Some(error) = validation.error(field) {
            let message = error.to_string();
            logged("show field error", view.set_field_error(field, &message));
        }
        logged("mark field", view.mark_field(field, validation.mark(field)));
    }
}

fn render_outcome<V: FormView>(view: &mut V, outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Success { display_name } => {
            let banner = Banner::Success(welcome(display_name));
            logged("show banner", view.show_banner(&banner));
            logged("reset form", view.reset());
        }
        SubmissionOutcome::ValidationRejected { field, message } => {
            logged("show field error", view.set_field_error(*field, message));
            logged("mark field", view.mark_field(*field, FieldMark::Error));
        }
        SubmissionOutcome::Conflict { message } | SubmissionOutcome::NetworkFailure { message } => {
            let banner = Banner::Error(message.clone());
            logged("show banner", view.show_banner(&banner));
        }
    }
}

fn log_outcome(outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Success { display_name } => {
            tracing::info!(%display_name, "registration accepted");
        }
        SubmissionOutcome::ValidationRejected { field, message } => {
            tracing::warn!(%field, reason = %message, "registration rejected for a field");
        }
        SubmissionOutcome::Conflict { message } => {
            tracing::warn!(reason = %message, "registration rejected");
        }
        SubmissionOutcome::NetworkFailure { .. } => {
            tracing::error!("registration request failed without a response");
        }
    }
}
