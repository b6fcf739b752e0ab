use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
    Terms,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
            Field::Terms => "accepted_terms",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Este campo es obligatorio")]
    MissingField,
    #[error("El formato no es válido")]
    InvalidFormat,
    #[error("Debes aceptar los términos y condiciones")]
    TermsNotAccepted,
}

/// Field-level problems found by `ContactSubmission::validate`. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    #[cfg(test)]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }

    /// Text shown under the offending input.
    pub fn message(&self, field: Field) -> Option<String> {
        let error = self.get(field)?;
        let text = match (field, error) {
            (Field::Name, FieldError::MissingField) => "El nombre es obligatorio".to_string(),
            (Field::Email, FieldError::MissingField) => "El correo es obligatorio".to_string(),
            (Field::Email, FieldError::InvalidFormat) => "El correo no es válido".to_string(),
            (Field::Message, FieldError::MissingField) => "El mensaje es obligatorio".to_string(),
            (_, other) => other.to_string(),
        };
        Some(text)
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

/// `local@domain.tld` shape: no whitespace, a single "@", and a "." inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Template parameters sent to EmailJS, one per submission field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub package: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub selected_package: String,
    pub accepted_terms: bool,
}

impl ContactSubmission {
    pub fn new(selected_package: impl Into<String>) -> Self {
        Self {
            selected_package: selected_package.into(),
            ..Self::default()
        }
    }

    /// Updates a text field. `Terms` is a checkbox and is ignored here; it goes
    /// through `accepted_terms`.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
            Field::Terms => {}
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
            Field::Terms => "",
        }
    }

    /// Every rule runs; all failures come back together.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, FieldError::MissingField);
        }
        if self.email.trim().is_empty() {
            errors.insert(Field::Email, FieldError::MissingField);
        } else if !is_valid_email(&self.email) {
            errors.insert(Field::Email, FieldError::InvalidFormat);
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, FieldError::MissingField);
        }
        if !self.accepted_terms {
            errors.insert(Field::Terms, FieldError::TermsNotAccepted);
        }
        errors
    }

    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            message: self.message.clone(),
            package: self.selected_package.clone(),
        }
    }
}
