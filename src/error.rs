use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Note too short for analysis ({0} characters, minimum {1})")]
    NoteTooShort(usize, usize),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Tracker API error (status {status}): {message}")]
    Tracker { status: u16, message: String },

    #[error("{0} not set. Export it before running this command.")]
    MissingApiKey(&'static str),
}

pub type Result<T> = std::result::Result<T, PulseError>;
