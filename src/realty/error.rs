use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RealtyError {
    #[error("Listing not found: {0}")]
    ListingNotFound(Uuid),

    #[error("Listing #{0} not found")]
    IndexNotFound(usize),

    #[error("Invalid listing index: {0}")]
    InvalidIndex(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error(
        "No valid answer to \"{question}\" after {attempts} {}",
        attempt_noun(.attempts)
    )]
    TooManyAttempts { question: String, attempts: u32 },

    #[error("Config error: {0}")]
    Config(String),
}

fn attempt_noun(attempts: &u32) -> &'static str {
    if *attempts == 1 {
        "attempt"
    } else {
        "attempts"
    }
}

pub type Result<T> = std::result::Result<T, RealtyError>;
