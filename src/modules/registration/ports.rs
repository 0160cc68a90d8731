// Ports define what the registration form needs from the outside world.
//
// Purpose
// - `FormView`: read field values and render feedback on whatever UI binding
//   hosts the form (DOM bridge, terminal, in-memory double).
// - `RegistrationGateway`: deliver a validated input to the registration
//   endpoint and report what came back.
//
// Boundaries
// - No concrete UI or transport here. Adapters implement these traits.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::modules::registration::core::fields::{FieldMark, FormField};
use crate::modules::registration::core::input::RegistrationInput;
use crate::modules::registration::use_cases::live_feedback::password_strength::PasswordStrength;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("element not found: {0}")]
    MissingElement(String),
}

/// The single shared message region of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Error(String),
}

impl Banner {
    pub fn text(&self) -> &str {
        match self {
            Banner::Success(text) | Banner::Error(text) => text,
        }
    }
}

pub trait FormView: Send {
    fn value(&self, field: FormField) -> String;

    fn set_field_error(&mut self, field: FormField, message: &str) -> Result<(), ViewError>;

    fn clear_field_error(&mut self, field: FormField) -> Result<(), ViewError>;

    fn mark_field(&mut self, field: FormField, mark: FieldMark) -> Result<(), ViewError>;

    fn show_banner(&mut self, banner: &Banner) -> Result<(), ViewError>;

    fn hide_banner(&mut self) -> Result<(), ViewError>;

    /// Disables the submit control and shows the busy indicator, or undoes it.
    fn set_loading(&mut self, loading: bool) -> Result<(), ViewError>;

    fn show_password_strength(&mut self, strength: PasswordStrength) -> Result<(), ViewError>;

    /// Empties every input and clears marks and the strength indicator.
    /// The banner is left as is.
    fn reset(&mut self) -> Result<(), ViewError>;
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),
}

/// Error payload of a non-2xx response. Both keys are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RejectionBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayResponse {
    Accepted { display_name: Option<String> },
    Rejected { status: u16, body: RejectionBody },
}

#[async_trait]
pub trait RegistrationGateway: Send + Sync {
    /// Sends one registration request. Resolves exactly once: with the
    /// server's answer, or with a transport error when none was obtained.
    async fn submit(&self, input: &RegistrationInput) -> Result<GatewayResponse, GatewayError>;
}
