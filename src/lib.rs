//! Scramble — a short sequence-memory tile game.
//!
//! A board presents N numbered tiles, hides the numbers, repeatedly
//! relocates the tiles, then asks the user to click them back in their
//! original numeric order.
//!
//! # Architecture
//!
//! - **Engine**: the phase state machine (memorize → scramble → input),
//!   driven by cancellable timers and a single event channel
//! - **Session**: composition root owning the surface and at most one engine
//! - **Surface**: capability trait the engine renders through, keeping the
//!   core testable without a terminal
//! - **Tui**: the concrete ratatui/crossterm frontend
//!
//! # Example
//!
//! ```no_run
//! use scramble::tui::TerminalSurface;
//! use scramble::{Bounds, SessionController, TileMetrics, Timing};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let metrics = TileMetrics::default();
//! let surface = TerminalSurface::new(Bounds::new(60, 16), *metrics.width(), *metrics.height());
//! let mut controller = SessionController::new(surface, Timing::fast(), metrics);
//!
//! controller.start_session("5")?;
//! while let Some(event) = controller.next_event().await {
//!     println!("{event:?}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod error;
pub mod game;
pub mod messages;
pub mod session;
pub mod tui;

// Crate-level exports - errors and messages
pub use error::GameError;
pub use messages::MessageKind;

// Crate-level exports - game core
pub use game::{
    Bounds, Color, EngineEvent, GameEngine, GameOutcome, HandleId, LayoutPlanner, Phase, Point,
    Surface, Tile, TileMetrics, Timing,
};
pub use game::validate::{MAX_TILE_COUNT, MIN_TILE_COUNT, parse_tile_count};

// Crate-level exports - session management
pub use session::{SessionController, SessionEvent};
