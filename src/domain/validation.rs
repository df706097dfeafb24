use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidApiKey { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidApiKey { input } => {
                write!(f, "invalid API key: {input} (expected letters, digits or '-')")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
