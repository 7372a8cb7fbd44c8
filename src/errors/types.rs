use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitGradeError {
    #[error("Invalid repository URL: {0}")]
    InvalidUrl(String),

    #[error("Error fetching repo: {0}")]
    Fetch(String),

    #[error("Error contacting model API: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
