// Data captured from the form at submit time.
//
// Purpose
// - Carry the raw field values to the validators and, once they pass, to the
//   registration gateway as the request payload.
//
// Notes
// - Serialized with the keys the registration endpoint expects.
// - Transient: built fresh for every submission attempt, never stored.

use serde::{Deserialize, Serialize};

use crate::modules::registration::core::fields::FormField;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "edad", default)]
    pub age: String,
    pub password: String,
    #[serde(rename = "repetir")]
    pub password_confirmation: String,
}

impl RegistrationInput {
    /// Builds the input from raw field values, trimming the text fields the
    /// way the form does. Passwords are kept verbatim.
    pub fn from_raw(mut value_of: impl FnMut(FormField) -> String) -> Self {
        Self {
            name: value_of(FormField::Name).trim().to_string(),
            email: value_of(FormField::Email).trim().to_string(),
            age: value_of(FormField::Age).trim().to_string(),
            password: value_of(FormField::Password),
            password_confirmation: value_of(FormField::Confirmation),
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Age => &self.age,
            FormField::Password => &self.password,
            FormField::Confirmation => &self.password_confirmation,
        }
    }
}
