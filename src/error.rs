use thiserror::Error;

/// Errors raised by the dartboard simulations and their configuration.
#[derive(Debug, Error)]
pub enum DartsError {
    /// The pi ratio is undefined without at least one dart.
    #[error("cannot estimate pi from zero darts")]
    NoDarts,

    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DartsError>;
