// Widget form validation
use std::collections::BTreeMap;
use thiserror::Error;

pub const NAME_MIN_CHARS: usize = 3;
pub const TEXT_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Text,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Text => "text",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Widget name is required")]
    EmptyName,

    #[error("Widget name must be at least 3 characters")]
    NameTooShort,

    #[error("Widget text is required")]
    EmptyText,

    #[error("Widget text must be at least 10 characters")]
    TextTooShort,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::EmptyName | ValidationError::NameTooShort => Field::Name,
            ValidationError::EmptyText | ValidationError::TextTooShort => Field::Text,
        }
    }
}

/// At most one error per field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("widget form has {} invalid field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// A name/text pair that passed validation, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedWidget {
    pub name: String,
    pub text: String,
}

pub fn validate(name: &str, text: &str) -> Result<ValidatedWidget, ValidationErrors> {
    let name = name.trim();
    let text = text.trim();

    let mut errors = BTreeMap::new();
    if let Some(error) = check_name(name) {
        errors.insert(error.field(), error);
    }
    if let Some(error) = check_text(text) {
        errors.insert(error.field(), error);
    }

    if !errors.is_empty() {
        return Err(ValidationErrors { errors });
    }

    Ok(ValidatedWidget {
        name: name.to_string(),
        text: text.to_string(),
    })
}

fn check_name(name: &str) -> Option<ValidationError> {
    match name.chars().count() {
        0 => Some(ValidationError::EmptyName),
        n if n < NAME_MIN_CHARS => Some(ValidationError::NameTooShort),
        _ => None,
    }
}

fn check_text(text: &str) -> Option<ValidationError> {
    match text.chars().count() {
        0 => Some(ValidationError::EmptyText),
        n if n < TEXT_MIN_CHARS => Some(ValidationError::TextTooShort),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_fields_too_short() {
        let errors = validate("ab", "short").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Name), Some(ValidationError::NameTooShort));
        assert_eq!(errors.get(Field::Text), Some(ValidationError::TextTooShort));
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let widget = validate(
            "  Valid Name ",
            "This is a sufficiently long description.\n",
        )
        .unwrap();
        assert_eq!(widget.name, "Valid Name");
        assert_eq!(widget.text, "This is a sufficiently long description.");
    }

    #[test]
    fn test_blank_fields_are_empty_errors() {
        let errors = validate("   ", "\n\t").unwrap_err();
        assert_eq!(errors.get(Field::Name), Some(ValidationError::EmptyName));
        assert_eq!(errors.get(Field::Text), Some(ValidationError::EmptyText));
    }

    #[test]
    fn test_lengths_count_trimmed_characters() {
        // three characters once surrounding spaces are gone
        assert!(validate(" abc ", "0123456789").is_ok());
        // multi-byte characters count once each
        assert!(validate("äöü", "éééééééééé").is_ok());
        let errors = validate("ok", "0123456789").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Text), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::NameTooShort.to_string(),
            "Widget name must be at least 3 characters"
        );
        assert_eq!(ValidationError::EmptyText.to_string(), "Widget text is required");
    }
}
