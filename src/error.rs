use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging error: {0}")]
    Logging(String),
}

impl From<octocrab::Error> for FolioError {
    fn from(e: octocrab::Error) -> Self {
        FolioError::GitHub(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
