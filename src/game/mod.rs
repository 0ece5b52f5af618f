//! Game core: domain types, layout, timers, and the engine state machine.

pub mod color;
pub mod engine;
pub mod layout;
pub mod phase;
pub mod surface;
pub mod tile;
pub mod timer;
pub mod validate;

pub use engine::{EngineEvent, GameEngine, Timing};
pub use layout::{LayoutPlanner, TileMetrics};
pub use phase::{GameOutcome, Phase};
pub use surface::{Bounds, HandleId, Surface};
pub use tile::{Color, Point, Tile};
