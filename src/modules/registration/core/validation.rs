//! Submit-time field validators.
//!
//! Every validator is a pure function over the raw field value. Rules for one
//! field are checked in order and the first violation wins; fields are
//! validated independently so that several inline errors can be shown at
//! once.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::modules::registration::core::fields::{FieldMark, FormField};
use crate::modules::registration::core::input::RegistrationInput;
use crate::modules::registration::core::messages::REQUIRED_EMAIL_DOMAIN;

pub const NAME_MIN_CHARS: usize = 2;
pub const PASSWORD_MIN_CHARS: usize = 6;
pub const AGE_MIN: u8 = 18;
pub const AGE_MAX: u8 = 99;

/// A single failed rule. `Display` is the inline message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("El nombre es obligatorio")]
    NameRequired,
    #[error("El nombre debe tener al menos 2 caracteres")]
    NameTooShort,
    #[error("El email es obligatorio")]
    EmailRequired,
    #[error("Formato de email inválido")]
    EmailInvalidFormat,
    #[error("El email debe pertenecer al dominio {}", REQUIRED_EMAIL_DOMAIN)]
    EmailOutsideDomain,
    #[error("La edad debe ser un número entre {} y {} años", AGE_MIN, AGE_MAX)]
    AgeOutOfRange,
    #[error("La contraseña es obligatoria")]
    PasswordRequired,
    #[error("La contraseña debe tener al menos 6 caracteres")]
    PasswordTooShort,
    #[error("Debe confirmar la contraseña")]
    ConfirmationRequired,
    #[error("Las contraseñas no coinciden")]
    PasswordsDoNotMatch,
}

impl FieldError {
    pub fn field(self) -> FormField {
        match self {
            FieldError::NameRequired | FieldError::NameTooShort => FormField::Name,
            FieldError::EmailRequired
            | FieldError::EmailInvalidFormat
            | FieldError::EmailOutsideDomain => FormField::Email,
            FieldError::AgeOutOfRange => FormField::Age,
            FieldError::PasswordRequired | FieldError::PasswordTooShort => FormField::Password,
            FieldError::ConfirmationRequired | FieldError::PasswordsDoNotMatch => {
                FormField::Confirmation
            }
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// `local@domain.tld` shape: no whitespace, a single `@`, a dot after it.
pub fn is_well_formed_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn belongs_to_required_domain(email: &str) -> bool {
    email.ends_with(REQUIRED_EMAIL_DOMAIN)
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    tracing::debug!(name, "validating name");
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if name.chars().count() < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    tracing::debug!(email, "validating email");
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !is_well_formed_email(email) {
        return Err(FieldError::EmailInvalidFormat);
    }
    if !belongs_to_required_domain(email) {
        return Err(FieldError::EmailOutsideDomain);
    }
    Ok(())
}

/// Age is optional: a blank value passes with `None`.
pub fn validate_age(age: &str) -> Result<Option<u8>, FieldError> {
    tracing::debug!(age, "validating age");
    let age = age.trim();
    if age.is_empty() {
        return Ok(None);
    }
    let value: f64 = age.parse().map_err(|_| FieldError::AgeOutOfRange)?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(FieldError::AgeOutOfRange);
    }
    if value < f64::from(AGE_MIN) || value > f64::from(AGE_MAX) {
        return Err(FieldError::AgeOutOfRange);
    }
    u8::try_from(value as i64)
        .map(Some)
        .map_err(|_| FieldError::AgeOutOfRange)
}

pub fn validate_password(password: &str) -> Result<(), FieldError> {
    tracing::debug!("validating password");
    if password.is_empty() {
        return Err(FieldError::PasswordRequired);
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(FieldError::PasswordTooShort);
    }
    Ok(())
}

pub fn validate_confirmation(password: &str, confirmation: &str) -> Result<(), FieldError> {
    tracing::debug!("validating password confirmation");
    if confirmation.is_empty() {
        return Err(FieldError::ConfirmationRequired);
    }
    if password != confirmation {
        return Err(FieldError::PasswordsDoNotMatch);
    }
    Ok(())
}

/// Result of running every field validator over one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    pub name: Result<(), FieldError>,
    pub email: Result<(), FieldError>,
    pub age: Result<Option<u8>, FieldError>,
    pub password: Result<(), FieldError>,
    pub confirmation: Result<(), FieldError>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Failing rules in field order, at most one per field.
    pub fn errors(&self) -> Vec<FieldError> {
        [
            self.name.err(),
            self.email.err(),
            self.age.err(),
            self.password.err(),
            self.confirmation.err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn error(&self, field: FormField) -> Option<FieldError> {
        match field {
            FormField::Name => self.name.err(),
            FormField::Email => self.email.err(),
            FormField::Age => self.age.err(),
            FormField::Password => self.password.err(),
            FormField::Confirmation => self.confirmation.err(),
        }
    }

    /// Mark for each field: failures are `Error`, passes are `Success`, a
    /// skipped optional field stays `Neutral`.
    pub fn mark(&self, field: FormField) -> FieldMark {
        match self.error(field) {
            Some(_) => FieldMark::Error,
            None if field.is_optional() && self.is_blank(field) => FieldMark::Neutral,
            None => FieldMark::Success,
        }
    }

    fn is_blank(&self, field: FormField) -> bool {
        match field {
            FormField::Age => matches!(self.age, Ok(None)),
            _ => false,
        }
    }
}

/// Runs all validators without short-circuiting across fields.
pub fn validate_form(input: &RegistrationInput) -> FormValidation {
    FormValidation {
        name: validate_name(&input.name),
        email: validate_email(&input.email),
        age: validate_age(&input.age),
        password: validate_password(&input.password),
        confirmation: validate_confirmation(&input.password, &input.password_confirmation),
    }
}
