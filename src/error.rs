//! Crate error type for the fallible edges of the interface. The model
//! arithmetic itself is total and never returns errors.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown note: {0}")]
    UnknownNote(String),

    #[error("Invalid register index: {0}")]
    InvalidRegister(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
