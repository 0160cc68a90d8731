// User-facing text rendered by the form outside of per-field validation
// errors (those live on `FieldError`).

pub const REQUIRED_EMAIL_DOMAIN: &str = "@empresa.com.ar";

pub const DUPLICATE_EMAIL: &str = "El email ya está registrado";
pub const REGISTRATION_FAILED: &str = "Error en el registro. Por favor, inténtalo nuevamente.";
pub const CONNECTION_FAILED: &str =
    "Error de conexión. Por favor, verifica tu conexión a internet e inténtalo nuevamente.";

pub const LIVE_EMAIL_INVALID_FORMAT: &str = "Formato de email inválido";
pub const LIVE_EMAIL_OUTSIDE_DOMAIN: &str = "Debe usar el dominio @empresa.com.ar";
pub const LIVE_PASSWORDS_DO_NOT_MATCH: &str = "Las contraseñas no coinciden";

pub const STRENGTH_WEAK: &str = "Débil - Agrega mayúsculas, números y símbolos";
pub const STRENGTH_MEDIUM: &str = "Media - Considera agregar más caracteres especiales";
pub const STRENGTH_STRONG: &str = "Fuerte - ¡Excelente contraseña!";

pub const SUBMIT_LABEL: &str = "Crear Cuenta";
pub const SUBMIT_BUSY_LABEL: &str = "Procesando...";

pub fn welcome(display_name: &str) -> String {
    format!("Registro exitoso. Bienvenido/a, {display_name}!")
}
