use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mapinfo operations
#[derive(Error, Diagnostic, Debug)]
pub enum MapError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mapinfo::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mapinfo::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(mapinfo::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Geometry error: {message}")]
    #[diagnostic(
        code(mapinfo::geometry),
        help("Check the LocalSize and PreviewSize keys of the map")
    )]
    Geometry { message: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(mapinfo::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl MapError {
    /// Shorthand for a parse error without help text.
    pub fn parse(message: impl Into<String>) -> Self {
        MapError::Parse {
            message: message.into(),
            help: None,
        }
    }

    /// Shorthand for a configuration error without help text.
    pub fn config(message: impl Into<String>) -> Self {
        MapError::Config {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
