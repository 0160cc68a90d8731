// Form fields addressed by validators, live feedback and the view.
//
// Purpose
// - Name the five inputs of the registration form once, with the element ids
//   the page markup uses for the input and its inline error container.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Email,
    Age,
    Password,
    Confirmation,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Age,
        FormField::Password,
        FormField::Confirmation,
    ];

    /// Element id of the input in the page markup.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "nombre",
            FormField::Email => "email",
            FormField::Age => "edad",
            FormField::Password => "password",
            FormField::Confirmation => "repetir",
        }
    }

    /// Element id of the inline error container for this field.
    pub fn error_id(self) -> String {
        format!("error-{}", self.id())
    }

    pub fn is_optional(self) -> bool {
        matches!(self, FormField::Age)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Visual state of an input, the `error` / `success` classes in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMark {
    #[default]
    Neutral,
    Error,
    Success,
}
