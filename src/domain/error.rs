use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    #[error("configuration: {0}")]
    Configuration(String),

    #[error("format: {0}")]
    Format(String),

    #[error("payment method is not configured")]
    NotConfigured,

    #[error("precondition: {0}")]
    Precondition(String),

    #[error("unknown payment status: {0}")]
    UnknownStatus(String),
}
