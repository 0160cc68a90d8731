// Shared test fixture for RegistrationInput. Defaults come from the JSON
// payload the form would send for a valid registration.

use crate::modules::registration::core::input::RegistrationInput;

const DEFAULT_INPUT_JSON: &str = include_str!("json/registration_input.json");

pub struct RegistrationInputBuilder {
    inner: RegistrationInput,
}

impl Default for RegistrationInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegistrationInputBuilder {
    pub fn new() -> Self {
        let inner: RegistrationInput = serde_json::from_str(DEFAULT_INPUT_JSON).unwrap();
        Self { inner }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn age(mut self, v: impl Into<String>) -> Self {
        self.inner.age = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn password_confirmation(mut self, v: impl Into<String>) -> Self {
        self.inner.password_confirmation = v.into();
        self
    }

    /// Sets password and confirmation to the same value.
    pub fn passwords(self, v: &str) -> Self {
        self.password(v).password_confirmation(v)
    }

    pub fn build(self) -> RegistrationInput {
        self.inner
    }
}

#[cfg(test)]
mod registration_input_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegistrationInputBuilder::default().build();
        assert_eq!(built.name, "Ana Pérez");
        assert_eq!(built.email, "ana@empresa.com.ar");
        assert_eq!(built.age, "28");
        assert_eq!(built.password, "Segura123!");
        assert_eq!(built.password_confirmation, "Segura123!");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegistrationInputBuilder::new()
            .name("Carla Ruiz")
            .email("carla@empresa.com.ar")
            .age("25")
            .password("Clave123!")
            .password_confirmation("Otra123!")
            .build();
        assert_eq!(custom.name, "Carla Ruiz");
        assert_eq!(custom.email, "carla@empresa.com.ar");
        assert_eq!(custom.age, "25");
        assert_eq!(custom.password, "Clave123!");
        assert_eq!(custom.password_confirmation, "Otra123!");

        let same = RegistrationInputBuilder::new().passwords("prueba123").build();
        assert_eq!(same.password, same.password_confirmation);
    }
}
