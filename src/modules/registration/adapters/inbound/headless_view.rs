// In memory implementation of the FormView port.
//
// Purpose
// - Host the form without a browser: the command line binary renders from it
//   and tests assert on exactly what a page would show.
//
// Responsibilities
// - Keep input values, inline errors, marks, banner, loading state and the
//   strength indicator the way the page markup would.
// - Record every loading toggle so callers can check it was cleared.

use std::collections::HashMap;

use crate::modules::registration::core::fields::{FieldMark, FormField};
use crate::modules::registration::core::input::RegistrationInput;
use crate::modules::registration::core::messages::{SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
use crate::modules::registration::ports::{Banner, FormView, ViewError};
use crate::modules::registration::use_cases::live_feedback::password_strength::PasswordStrength;

#[derive(Debug, Default)]
pub struct HeadlessFormView {
    values: HashMap<FormField, String>,
    errors: HashMap<FormField, String>,
    marks: HashMap<FormField, FieldMark>,
    banner: Option<Banner>,
    loading: bool,
    loading_history: Vec<bool>,
    strength: PasswordStrength,
    broken_banner: bool,
    broken_field: Option<FormField>,
}

impl HeadlessFormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: &RegistrationInput) -> Self {
        let mut view = Self::new();
        for field in FormField::ALL {
            view.set_value(field, input.value(field));
        }
        view
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn field_error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn field_errors(&self) -> &HashMap<FormField, String> {
        &self.errors
    }

    pub fn mark(&self, field: FormField) -> FieldMark {
        self.marks.get(&field).copied().unwrap_or_default()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn loading_history(&self) -> &[bool] {
        &self.loading_history
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Makes every later banner render fail, to exercise error paths.
    pub fn toggle_broken_banner(&mut self) {
        self.broken_banner = !self.broken_banner;
    }

    /// Makes every later error or mark update on `field` fail, as if its
    /// element were missing from the page.
    pub fn break_field(&mut self, field: FormField) {
        self.broken_field = Some(field);
    }

    fn element(&self, field: FormField) -> Result<(), ViewError> {
        match self.broken_field {
            Some(broken) if broken == field => Err(ViewError::MissingElement(field.error_id())),
            _ => Ok(()),
        }
    }
}

impl FormView for HeadlessFormView {
    fn value(&self, field: FormField) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_field_error(&mut self, field: FormField, message: &str) -> Result<(), ViewError> {
        self.element(field)?;
        self.errors.insert(field, message.to_string());
        Ok(())
    }

    fn clear_field_error(&mut self, field: FormField) -> Result<(), ViewError> {
        self.element(field)?;
        self.errors.remove(&field);
        Ok(())
    }

    fn mark_field(&mut self, field: FormField, mark: FieldMark) -> Result<(), ViewError> {
        self.element(field)?;
        self.marks.insert(field, mark);
        Ok(())
    }

    fn show_banner(&mut self, banner: &Banner) -> Result<(), ViewError> {
        if self.broken_banner {
            return Err(ViewError::MissingElement("mensajeExito".into()));
        }
        self.banner = Some(banner.clone());
        Ok(())
    }

    fn hide_banner(&mut self) -> Result<(), ViewError> {
        self.banner = None;
        Ok(())
    }

    fn set_loading(&mut self, loading: bool) -> Result<(), ViewError> {
        self.loading = loading;
        self.loading_history.push(loading);
        Ok(())
    }

    fn show_password_strength(&mut self, strength: PasswordStrength) -> Result<(), ViewError> {
        self.strength = strength;
        Ok(())
    }

    fn reset(&mut self) -> Result<(), ViewError> {
        self.values.clear();
        self.errors.clear();
        self.marks.clear();
        self.strength = PasswordStrength::Empty;
        Ok(())
    }
}
