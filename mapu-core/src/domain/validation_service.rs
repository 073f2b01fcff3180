//! Form-field validation for the registration and profile screens.
//!
//! Every validator is synchronous, never panics and never performs I/O: it
//! takes the raw field text and returns a [`FieldValidation`] whose message
//! is shown to the user as-is. The cédula input mask lives here too because
//! the registration form applies it on every keystroke.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::FieldValidation;

/// Letters (including accented vowels and ñ) and spaces only.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zÁÉÍÓÚáéíóúÑñ ]+$").expect("invalid name pattern"));

/// `local@domain.tld`: a single `@`, at least one dot after it, no whitespace.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));

/// Optional leading `+`, then 8 to 15 digits/spaces/hyphens/parentheses.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-]{8,15}$").expect("invalid phone pattern"));

/// Nicaraguan cédula: `###-######-####X`.
static CEDULA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{6}-[0-9]{4}[A-Z]$").expect("invalid cedula pattern"));

/// Passport: 6 to 12 uppercase letters and digits.
static PASSPORT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]{6,12}$").expect("invalid passport pattern"));

/// Cédula digits before the trailing check letter.
const CEDULA_DIGITS: usize = 13;

/// Stateless validator for every form field in the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a first-name field.
    pub fn validate_name(&self, value: &str) -> FieldValidation {
        self.validate_person_name(value, "El nombre")
    }

    /// Validate a last-name field.
    pub fn validate_last_name(&self, value: &str) -> FieldValidation {
        self.validate_person_name(value, "El apellido")
    }

    pub fn validate_email(&self, value: &str) -> FieldValidation {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return FieldValidation::error("El correo electrónico es obligatorio");
        }
        if !EMAIL_PATTERN.is_match(trimmed) {
            return FieldValidation::error("Ingresa un correo electrónico válido");
        }
        FieldValidation::ok()
    }

    /// Minimum-length gate for the sign-in form. The registration screen
    /// uses the richer strength report from the password service instead.
    pub fn validate_password(&self, value: &str) -> FieldValidation {
        if value.is_empty() {
            return FieldValidation::error("La contraseña es obligatoria");
        }
        if value.chars().count() < 6 {
            return FieldValidation::error("La contraseña debe tener al menos 6 caracteres");
        }
        FieldValidation::ok()
    }

    pub fn validate_confirm_password(&self, password: &str, confirm: &str) -> FieldValidation {
        if confirm.is_empty() {
            return FieldValidation::error("Confirma tu contraseña");
        }
        if confirm != password {
            return FieldValidation::error("Las contraseñas no coinciden");
        }
        FieldValidation::ok()
    }

    pub fn validate_phone(&self, value: &str) -> FieldValidation {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return FieldValidation::error("El teléfono es obligatorio");
        }
        if !PHONE_PATTERN.is_match(trimmed) {
            return FieldValidation::error("Ingresa un número de teléfono válido");
        }
        FieldValidation::ok()
    }

    pub fn validate_nationality(&self, value: &str) -> FieldValidation {
        self.validate_short_text(value, "La nacionalidad es obligatoria", "La nacionalidad debe tener al menos 2 caracteres")
    }

    pub fn validate_residence(&self, value: &str) -> FieldValidation {
        self.validate_short_text(
            value,
            "El lugar de residencia es obligatorio",
            "El lugar de residencia debe tener al menos 2 caracteres",
        )
    }

    pub fn validate_document_type(&self, value: &str) -> FieldValidation {
        match value {
            "cedula" | "pasaporte" => FieldValidation::ok(),
            _ => FieldValidation::error("Selecciona un tipo de documento válido"),
        }
    }

    /// Validate a document number against the rules of its document type.
    ///
    /// Unknown document types only require a non-empty value; the type
    /// selector is validated separately by [`Self::validate_document_type`].
    pub fn validate_document_number(&self, number: &str, document_type: &str) -> FieldValidation {
        let trimmed = number.trim();
        if trimmed.is_empty() {
            return FieldValidation::error("El número de documento es obligatorio");
        }
        match document_type {
            "cedula" => {
                if CEDULA_PATTERN.is_match(trimmed) {
                    FieldValidation::ok()
                } else {
                    FieldValidation::error("La cédula debe tener el formato 000-000000-0000X")
                }
            }
            "pasaporte" => {
                if PASSPORT_PATTERN.is_match(trimmed) {
                    FieldValidation::ok()
                } else {
                    FieldValidation::error(
                        "El pasaporte debe tener entre 6 y 12 caracteres (letras mayúsculas y números)",
                    )
                }
            }
            _ => FieldValidation::ok(),
        }
    }

    /// Input mask for the cédula field, applied on every keystroke.
    ///
    /// Keeps at most 13 digits plus one trailing letter (uppercased),
    /// drops everything else and re-inserts the hyphens after the 3rd and
    /// 9th digit. Idempotent on already-formatted input.
    pub fn format_cedula(&self, raw: &str) -> String {
        let mut digits = String::new();
        let mut letter: Option<char> = None;

        for c in raw.chars() {
            if c.is_ascii_digit() {
                if digits.len() < CEDULA_DIGITS {
                    digits.push(c);
                }
            } else if c.is_ascii_alphabetic() && digits.len() == CEDULA_DIGITS && letter.is_none() {
                letter = Some(c.to_ascii_uppercase());
            }
        }

        let mut formatted = String::with_capacity(digits.len() + 3);
        for (index, digit) in digits.chars().enumerate() {
            if index == 3 || index == 9 {
                formatted.push('-');
            }
            formatted.push(digit);
        }
        if let Some(letter) = letter {
            formatted.push(letter);
        }
        formatted
    }

    fn validate_person_name(&self, value: &str, label: &str) -> FieldValidation {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return FieldValidation::error(format!("{} es obligatorio", label));
        }
        let length = trimmed.chars().count();
        if length < 2 {
            return FieldValidation::error(format!("{} debe tener al menos 2 caracteres", label));
        }
        if length > 50 {
            return FieldValidation::error(format!("{} no puede exceder 50 caracteres", label));
        }
        if !NAME_PATTERN.is_match(trimmed) {
            return FieldValidation::error(format!("{} solo puede contener letras y espacios", label));
        }
        FieldValidation::ok()
    }

    fn validate_short_text(&self, value: &str, empty_message: &str, short_message: &str) -> FieldValidation {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return FieldValidation::error(empty_message);
        }
        if trimmed.chars().count() < 2 {
            return FieldValidation::error(short_message);
        }
        FieldValidation::ok()
    }
}
