use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sixbox operations.
///
/// Every variant is fatal for the current run.
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("Missing asset file {file_name} (requested by {asset})")]
    #[diagnostic(code(sixbox::missing_asset))]
    MissingAsset {
        file_name: String,
        asset: String,
        path: std::path::PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Could not decode {file_name} (requested by {asset}): {message}")]
    #[diagnostic(code(sixbox::decode))]
    DecodeFailure {
        file_name: String,
        asset: String,
        message: String,
    },

    #[error("Icon set {icon_set} has no reference scale page")]
    #[diagnostic(
        code(sixbox::missing_reference),
        help("Include 6x in the scale list and provide a 6x image")
    )]
    MissingReferenceScale { icon_set: String },

    #[error("{page}: {edge} of {value} is not a multiple of {divisor}")]
    #[diagnostic(
        code(sixbox::grid),
        help("Reference images must be authored on the slicing grid")
    )]
    GridMisalignment {
        page: String,
        edge: &'static str,
        value: u32,
        divisor: u32,
    },

    #[error("{page} has no pixel at or above the alpha threshold")]
    #[diagnostic(
        code(sixbox::empty_reference),
        help("Reference images must contain the icon; check the artwork or lower the threshold")
    )]
    EmptyReference { page: String },

    #[error("{page}: {edge} is negative after snapping ({extent} minus {inset})")]
    #[diagnostic(code(sixbox::grid))]
    InvertedSlice {
        page: String,
        edge: &'static str,
        extent: u32,
        inset: u32,
    },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sixbox::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(sixbox::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(sixbox::usage))]
    Usage {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;
