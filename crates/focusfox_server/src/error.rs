//! Server error types

use focusfox_api::ApiError;
use miette::Diagnostic;

use crate::config::ConfigError;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ServerError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid address: {0}")]
    #[diagnostic(code(focusfox::server::invalid_address))]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Invalid CORS origin '{origin}'")]
    #[diagnostic(
        code(focusfox::server::invalid_origin),
        help("Origins must be valid header values, e.g. https://example.com")
    )]
    InvalidOrigin { origin: String },

    #[error("IO error: {0}")]
    #[diagnostic(code(focusfox::server::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    #[diagnostic(code(focusfox::server::encode))]
    Encode(#[from] serde_json::Error),
}
