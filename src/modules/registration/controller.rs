//! Entry points for the UI event dispatcher.
//!
//! `RegistrationFormController` exposes one handler per form event. The
//! dispatcher owns the event loop and calls these with the view the event
//! came from; nothing here listens for events itself.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::modules::registration::core::events::SubmissionEvent;
use crate::modules::registration::core::evolve::evolve;
use crate::modules::registration::core::state::SubmissionState;
use crate::modules::registration::ports::{FormView, RegistrationGateway, ViewError};
use crate::modules::registration::use_cases::live_feedback::handler::LiveFeedbackHandler;
use crate::modules::registration::use_cases::submit_registration::handler::SubmitRegistrationHandler;

pub struct RegistrationFormController<TGateway>
where
    TGateway: RegistrationGateway + 'static,
{
    live_feedback: LiveFeedbackHandler,
    submit: SubmitRegistrationHandler<TGateway>,
    state: Mutex<SubmissionState>,
}

impl<TGateway> RegistrationFormController<TGateway>
where
    TGateway: RegistrationGateway + 'static,
{
    pub fn new(gateway: Arc<TGateway>) -> Self {
        Self {
            live_feedback: LiveFeedbackHandler::new(),
            submit: SubmitRegistrationHandler::new(gateway),
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    pub async fn state(&self) -> SubmissionState {
        self.state.lock().await.clone()
    }

    /// Keystroke in the name field. No live check runs for it.
    pub async fn on_name_input(&self) {
        self.input_changed().await;
    }

    /// Keystroke in the age field. No live check runs for it.
    pub async fn on_age_input(&self) {
        self.input_changed().await;
    }

    /// Keystroke in the password field.
    pub async fn on_password_input<V: FormView>(&self, view: &mut V) {
        self.input_changed().await;
        swallow("password", self.live_feedback.password_changed(view).map(drop));
    }

    /// Keystroke in the email field.
    pub async fn on_email_input<V: FormView>(&self, view: &mut V) {
        self.input_changed().await;
        swallow("email", self.live_feedback.email_changed(view).map(drop));
    }

    /// Keystroke in the confirmation field.
    pub async fn on_confirmation_input<V: FormView>(&self, view: &mut V) {
        self.input_changed().await;
        swallow(
            "confirmation",
            self.live_feedback.confirmation_changed(view).map(drop),
        );
    }

    /// Form submission. Never fails: the returned state says how it ended.
    pub async fn on_submit<V: FormView>(&self, view: &mut V) -> SubmissionState {
        self.submit.handle(view, &self.state).await
    }

    async fn input_changed(&self) {
        let mut guard = self.state.lock().await;
        *guard = evolve(std::mem::take(&mut *guard), SubmissionEvent::InputChanged);
    }
}

fn swallow(check: &str, result: Result<(), ViewError>) {
    if let Err(error) = result {
        tracing::warn!(check, %error, "failed to render live feedback");
    }
}
