use thiserror::Error;

use crate::api::ApiError;
use crate::cli::forms::FormError;
use crate::config::ConfigError;

/// Error type that aborts a run of the command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Invalid amount `{0}`: enter a number such as 42.50")]
    InvalidAmount(String),
    #[error("Missing answer for `{0}`")]
    MissingAnswer(&'static str),
    #[error("Unknown {field} `{value}`")]
    UnknownValue { field: &'static str, value: String },
}
