//! Error types for the game core.

use crate::game::validate::{MAX_TILE_COUNT, MIN_TILE_COUNT};
use crate::messages::MessageKind;
use derive_more::{Display, Error};

/// Errors the game core can surface to a frontend.
///
/// Nothing here is fatal: an invalid count is recovered immediately by the
/// session controller, and a lost game is an outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Raw tile-count input was non-numeric or outside the allowed range.
    #[display(
        "tile count must be a whole number between {} and {}",
        MIN_TILE_COUNT,
        MAX_TILE_COUNT
    )]
    InvalidCount,
}

impl GameError {
    /// The message kind a frontend should display for this error.
    pub fn message(&self) -> MessageKind {
        match self {
            GameError::InvalidCount => MessageKind::InvalidCount,
        }
    }
}
