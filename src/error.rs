use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("engine closed the input stream")]
    EndOfInput,

    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    #[error("malformed number {0:?}")]
    BadNumber(String),

    #[error("expected {expected} fields in {line:?}")]
    ShortLine { expected: usize, line: String },

    #[error("missing or invalid game constant {0}")]
    MissingConstant(&'static str),

    #[error("bad json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("player id {0} is out of range")]
    UnknownPlayer(usize),

    #[error("could not start logging: {0}")]
    Logger(String),
}
