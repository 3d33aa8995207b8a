use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxl operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxlError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxl::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxl::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to decode image {path}: {message}")]
    #[diagnostic(code(pxl::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxl::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PxlError>;
