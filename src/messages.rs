//! Message catalog keys.
//!
//! The core only ever emits message *kinds*; the literal (localizable) text
//! lives with the frontend that displays it.

use serde::{Deserialize, Serialize};

/// A user-facing message kind emitted by the core.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum MessageKind {
    /// Tile-count input rejected by the validator.
    InvalidCount,
    /// Sequence reproduced correctly; the game is won.
    Completed,
    /// A tile was clicked out of sequence; the game is lost.
    WrongOrder,
    /// Label for the tile-count prompt.
    CountPrompt,
    /// Label for the start control.
    StartControl,
}

impl MessageKind {
    /// Returns true for kinds a frontend should style as errors.
    pub fn is_error(&self) -> bool {
        matches!(self, MessageKind::InvalidCount | MessageKind::WrongOrder)
    }
}
