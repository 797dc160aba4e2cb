use std::io;

use thiserror::Error;

/// A room map lookup that should never fail on a well-formed map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no exit '{direction}' from this room")]
    UnknownExit { direction: String },
    #[error("exit '{direction}' leads to unknown room '{room_id}'")]
    UnknownRoom { direction: String, room_id: String },
    #[error("start room '{0}' is not in the room map")]
    UnknownStart(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
}
