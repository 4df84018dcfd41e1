use crate::types::Vertex;
use thiserror::Error;

/// Errors from the checked entry points. The hot path (`is_valid`, `place`,
/// `pattern`) never produces these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinates ({x}, {y}) are off the 19x19 board")]
    CoordsOutOfRange { x: usize, y: usize },

    #[error("cannot parse vertex {0:?}")]
    InvalidVertex(String),

    #[error("{0} is already occupied")]
    Occupied(Vertex),

    #[error("playing {0} would be suicide")]
    Suicide(Vertex),

    #[error("playing {0} repeats a recent position")]
    Ko(Vertex),
}
