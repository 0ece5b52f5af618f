//! Game phases and terminal outcomes.

use crate::messages::MessageKind;
use serde::{Deserialize, Serialize};

/// One state in the engine's linear lifecycle.
///
/// Phases progress strictly in declaration order and are never revisited:
/// `Setup` → `Memorize` → `Scrambling` → `AwaitingInput` → `Won` | `Lost`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Phase {
    /// Tiles are being created and placed.
    Setup,
    /// Numbers are visible and positions static.
    Memorize,
    /// Tiles are being repeatedly relocated.
    Scrambling,
    /// Numbers are hidden; clicks are accepted and validated.
    AwaitingInput,
    /// Terminal: the full sequence was reproduced.
    Won,
    /// Terminal: a tile was clicked out of sequence.
    Lost,
}

impl Phase {
    /// Returns true once the game can no longer change.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::Lost)
    }
}

/// Terminal result of a game session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum GameOutcome {
    /// Every tile was clicked in its original order.
    Completed,
    /// A tile was clicked out of sequence.
    WrongOrder,
}

impl GameOutcome {
    /// Whether this outcome is a win.
    pub fn is_win(&self) -> bool {
        matches!(self, GameOutcome::Completed)
    }

    /// The message kind a frontend should display for this outcome.
    pub fn message(&self) -> MessageKind {
        match self {
            GameOutcome::Completed => MessageKind::Completed,
            GameOutcome::WrongOrder => MessageKind::WrongOrder,
        }
    }
}
