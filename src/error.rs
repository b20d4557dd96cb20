use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlendError {
    #[error("{field} = {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Energy content is undefined when no fuel is dispensed")]
    UndefinedEnergyContent,

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, BlendError>;

impl BlendError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        tracing::debug!(field, value, reason, "rejected blend input");
        BlendError::InvalidInput {
            field,
            value,
            reason,
        }
    }
}
