use thiserror::Error;

/// Coarse classification of a failure; decides how the router reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// AI or search service call failed.
    Gateway,
    /// Database write or read failed.
    Persistence,
    /// Attachment fetch, local file write or outbound send failed.
    Transport,
    /// Missing or invalid configuration.
    Config,
    /// Event routed to a handler that cannot read it.
    Internal,
}

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unexpected event content for {0}")]
    UnexpectedContent(&'static str),
}

impl BotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BotError::Gateway(_) => ErrorKind::Gateway,
            BotError::Persistence(_) => ErrorKind::Persistence,
            BotError::Transport(_) | BotError::Io(_) => ErrorKind::Transport,
            BotError::Config(_) => ErrorKind::Config,
            BotError::UnexpectedContent(_) => ErrorKind::Internal,
        }
    }

    /// Wraps any displayable gateway failure.
    pub fn gateway(e: impl std::fmt::Display) -> Self {
        BotError::Gateway(e.to_string())
    }

    /// Wraps any displayable persistence failure.
    pub fn persistence(e: impl std::fmt::Display) -> Self {
        BotError::Persistence(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
