use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Username,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Name => f.write_str("name"),
            RequiredField::Username => f.write_str("username"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field(s): {}", join_fields(.missing))]
    MissingRequired { missing: Vec<RequiredField> },
}

impl ValidationError {
    pub fn missing(&self) -> &[RequiredField] {
        match self {
            ValidationError::MissingRequired { missing } => missing,
        }
    }

    /// Text shown in the blocking alert.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingRequired { .. } => "Please enter Name and Username!",
        }
    }
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_missing_fields_in_display() {
        let err = ValidationError::MissingRequired {
            missing: vec![RequiredField::Name, RequiredField::Username],
        };
        assert_eq!(err.to_string(), "missing required field(s): name, username");
        assert_eq!(err.user_message(), "Please enter Name and Username!");
    }
}
