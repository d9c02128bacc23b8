use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    // Message shape is part of the CLI contract.
    #[error("couldn't open {path}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, DocError>;
