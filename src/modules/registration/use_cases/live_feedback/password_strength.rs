// Advisory password strength indicator. Never gates submission.

use crate::modules::registration::core::messages::{
    STRENGTH_MEDIUM, STRENGTH_STRONG, STRENGTH_WEAK,
};

pub const STRONG_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordStrength {
    #[default]
    Empty,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Width of the strength bar, in percent.
    pub fn indicator_percent(self) -> u8 {
        match self {
            PasswordStrength::Empty => 0,
            PasswordStrength::Weak => 33,
            PasswordStrength::Medium => 66,
            PasswordStrength::Strong => 100,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            PasswordStrength::Empty => "strength-bar",
            PasswordStrength::Weak => "strength-bar strength-weak",
            PasswordStrength::Medium => "strength-bar strength-medium",
            PasswordStrength::Strong => "strength-bar strength-strong",
        }
    }

    pub fn feedback(self) -> &'static str {
        match self {
            PasswordStrength::Empty => "",
            PasswordStrength::Weak => STRENGTH_WEAK,
            PasswordStrength::Medium => STRENGTH_MEDIUM,
            PasswordStrength::Strong => STRENGTH_STRONG,
        }
    }
}

/// One point each for: length, lowercase, uppercase, digit, symbol.
pub fn score(password: &str) -> u8 {
    let criteria = [
        password.chars().count() >= STRONG_LENGTH,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    criteria.into_iter().filter(|met| *met).count() as u8
}

pub fn evaluate_password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::Empty;
    }
    match score(password) {
        0..=2 => PasswordStrength::Weak,
        3 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}
