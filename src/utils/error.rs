use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetError {
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Parse error: decoded set holds {found} elements, limit is {limit}")]
    ElementLimitExceeded { found: usize, limit: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SetError {
    /// True for failures raised while decoding a set from its serialized form.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            SetError::ParseError(_) | SetError::ElementLimitExceeded { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SetError>;
