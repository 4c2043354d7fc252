use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactzError {
    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("{0}")]
    NotFound(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("File access error: {0}")]
    FileAccess(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl ContactzError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }

    pub fn contact_not_found(name: &str) -> Self {
        Self::NotFound(format!("Contact not found: {}", name))
    }
}

pub type Result<T> = std::result::Result<T, ContactzError>;
