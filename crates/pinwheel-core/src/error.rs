use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed shortcut list: {len} fields is not a multiple of 3")]
    MalformedInput { len: usize },

    #[error("Malformed shortcut entry {index}: expected 3 fields, found {len}")]
    MalformedTuple { index: usize, len: usize },

    #[error("Index {index} out of range for list of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown settings key: {0}")]
    UnknownKey(String),

    #[error("Settings key '{key}' expects {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Preset error: {0}")]
    Preset(String),

    #[error("Settings dump error: {0}")]
    Dump(String),

    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
