//! Error types for the translator
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The pretrained model could not be fetched or initialized
    #[snafu(display("Failed to load translation model: {source}"))]
    ModelLoad {
        source: rust_bert::RustBertError,
    },

    /// The model raised an error while generating
    #[snafu(display("{source}"))]
    Inference {
        source: rust_bert::RustBertError,
    },

    /// The model returned no output for the request
    #[snafu(display("model returned no output"))]
    EmptyOutput,

    /// The model is not available (it failed to load earlier)
    #[snafu(display("translation model unavailable: {message}"))]
    ModelUnavailable { message: String },

    /// Copy/cut was requested without a selection in the pane
    #[snafu(display("No text selected"))]
    NoSelection,

    /// The platform config/cache directories could not be determined
    #[snafu(display("Could not determine project directories"))]
    ConfigDir,

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// Channel send error
    #[snafu(display("Channel send error: {message}"))]
    ChannelSend { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
