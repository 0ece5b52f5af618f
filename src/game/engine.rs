//! The game engine state machine.
//!
//! The engine owns the tile set and advances through its phases by consuming
//! [`EngineEvent`]s — timer deliveries and clicks — one at a time from a
//! single channel. Events that arrive in the wrong phase are ignored, which
//! makes duplicate or stale deliveries harmless. Rendering goes through the
//! [`Surface`] capability trait, so the whole machine is testable with a stub
//! surface and hand-fed events.

use crate::game::color;
use crate::game::layout::{LayoutPlanner, TileMetrics};
use crate::game::phase::{GameOutcome, Phase};
use crate::game::surface::{HandleId, Surface};
use crate::game::tile::Tile;
use crate::game::timer::{self, CancelToken};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, instrument};

/// Timing model driving phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    /// Memorize time granted per tile; total delay is `count × this`.
    pub memorize_per_tile: Duration,
    /// Interval between scramble relocations.
    pub scramble_interval: Duration,
}

impl Timing {
    /// Creates the standard timing model: one second of memorize time per
    /// tile, one relocation every two seconds.
    pub fn standard() -> Self {
        Self {
            memorize_per_tile: Duration::from_millis(1000),
            scramble_interval: Duration::from_millis(2000),
        }
    }

    /// A sped-up model for quick play and tests.
    pub fn fast() -> Self {
        Self {
            memorize_per_tile: Duration::from_millis(20),
            scramble_interval: Duration::from_millis(10),
        }
    }

    /// Total memorize delay for a game of `tile_count` tiles.
    pub fn memorize_delay(&self, tile_count: usize) -> Duration {
        self.memorize_per_tile * tile_count as u32
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::standard()
    }
}

/// An event consumed by the engine's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The one-shot memorize delay elapsed.
    MemorizeElapsed,
    /// One scramble relocation is due.
    ScrambleTick,
    /// The user clicked the tile behind `HandleId`.
    TileClicked(HandleId),
}

/// The sequence-memory game state machine.
///
/// Constructed once per session; performs the `Setup` → `Memorize` transition
/// immediately and schedules its own timers into the supplied channel. The
/// session controller pumps events back in via [`GameEngine::handle_event`].
#[derive(Debug)]
pub struct GameEngine {
    tile_count: usize,
    tiles: Vec<Tile>,
    clicked: Vec<usize>,
    phase: Phase,
    scramble_ticks: usize,
    layout: LayoutPlanner,
    timing: Timing,
    events: UnboundedSender<EngineEvent>,
    timers: Vec<CancelToken>,
}

impl GameEngine {
    /// Creates the engine, populates the surface with `tile_count` tiles, and
    /// schedules the memorize delay.
    ///
    /// Tiles get sequential order numbers `1..=tile_count`, independent
    /// random colors, and deterministic single-row positions; all start with
    /// their numbers visible. `tile_count` must already be validated.
    #[instrument(skip(timing, metrics, events, surface))]
    pub fn new<S: Surface>(
        tile_count: usize,
        timing: Timing,
        metrics: TileMetrics,
        events: UnboundedSender<EngineEvent>,
        surface: &mut S,
    ) -> Self {
        info!(tile_count, "creating game engine");

        let layout = LayoutPlanner::new(surface.bounds(), metrics);
        let colors = color::random_colors(tile_count);
        let positions = layout.initial_positions(tile_count);

        let mut tiles = Vec::with_capacity(tile_count);
        for (index, (position, tile_color)) in positions.into_iter().zip(colors).enumerate() {
            let order = index + 1;
            let handle = surface.create_tile(&order.to_string(), tile_color);
            surface.set_position(handle, position);
            tiles.push(Tile::new(order, handle, position, tile_color));
        }

        let mut engine = Self {
            tile_count,
            tiles,
            clicked: Vec::new(),
            phase: Phase::Setup,
            scramble_ticks: 0,
            layout,
            timing,
            events,
            timers: Vec::new(),
        };
        engine.enter_memorize();
        engine
    }

    /// Consumes one event, mutating tiles and surface as the current phase
    /// dictates. Returns the outcome when the event ends the game.
    #[instrument(skip(self, surface), fields(phase = %self.phase))]
    pub fn handle_event<S: Surface>(
        &mut self,
        event: EngineEvent,
        surface: &mut S,
    ) -> Option<GameOutcome> {
        match (event, self.phase) {
            (EngineEvent::MemorizeElapsed, Phase::Memorize) => {
                self.enter_scrambling();
                None
            }
            (EngineEvent::ScrambleTick, Phase::Scrambling) => {
                self.on_scramble_tick(surface);
                None
            }
            (EngineEvent::TileClicked(handle), Phase::AwaitingInput) => {
                self.on_click(handle, surface)
            }
            _ => {
                debug!(?event, "ignoring event outside its phase");
                None
            }
        }
    }

    /// Cancels all pending timers and releases every tile from the surface.
    ///
    /// Must run before a replacement engine is constructed: a cancelled timer
    /// can no longer fire into tiles that are no longer attached.
    #[instrument(skip(self, surface))]
    pub fn teardown<S: Surface>(&mut self, surface: &mut S) {
        info!(phase = %self.phase, "tearing down engine");
        self.cancel_timers();
        for tile in self.tiles.drain(..) {
            surface.remove(tile.handle());
        }
    }

    fn enter_memorize(&mut self) {
        let delay = self.timing.memorize_delay(self.tile_count);
        info!(?delay, "entering memorize phase");
        self.timers.push(timer::schedule_once(
            delay,
            self.events.clone(),
            EngineEvent::MemorizeElapsed,
        ));
        self.phase = Phase::Memorize;
    }

    fn enter_scrambling(&mut self) {
        info!(interval = ?self.timing.scramble_interval, "entering scramble phase");
        self.timers.push(timer::schedule_repeating(
            self.timing.scramble_interval,
            self.events.clone(),
            || EngineEvent::ScrambleTick,
        ));
        self.phase = Phase::Scrambling;
    }

    fn on_scramble_tick<S: Surface>(&mut self, surface: &mut S) {
        for tile in &mut self.tiles {
            let position = self.layout.random_position();
            tile.relocate(position);
            surface.set_position(tile.handle(), position);
        }
        self.scramble_ticks += 1;
        debug!(
            ticks = self.scramble_ticks,
            target = self.tile_count,
            "scramble tick applied"
        );

        if self.scramble_ticks == self.tile_count {
            self.cancel_timers();
            for tile in &mut self.tiles {
                tile.hide();
                surface.set_label(tile.handle(), "");
            }
            self.phase = Phase::AwaitingInput;
            info!("numbers hidden, awaiting input");
        }
    }

    /// Click-sequence validation.
    ///
    /// Order numbers never change after creation, so "correct sequence"
    /// reduces to: the k-th click must land on the tile whose order is k.
    fn on_click<S: Surface>(&mut self, handle: HandleId, surface: &mut S) -> Option<GameOutcome> {
        let Some(index) = self.tiles.iter().position(|t| t.handle() == handle) else {
            debug!(?handle, "click on unknown handle ignored");
            return None;
        };
        if self.tiles[index].revealed() {
            debug!(?handle, "click on revealed tile ignored");
            return None;
        }

        let order = self.tiles[index].order();
        self.tiles[index].reveal();
        surface.set_label(handle, &order.to_string());
        self.clicked.push(order);

        let expected = self.clicked.len();
        if order != expected {
            info!(order, expected, "wrong tile clicked");
            self.finish(Phase::Lost, surface);
            return Some(GameOutcome::WrongOrder);
        }
        if self.clicked.len() == self.tile_count {
            info!("sequence completed");
            self.finish(Phase::Won, surface);
            return Some(GameOutcome::Completed);
        }
        None
    }

    fn finish<S: Surface>(&mut self, phase: Phase, surface: &mut S) {
        self.cancel_timers();
        for tile in &mut self.tiles {
            if !tile.revealed() {
                tile.reveal();
                surface.set_label(tile.handle(), &tile.order().to_string());
            }
        }
        self.phase = phase;
        info!(phase = %self.phase, "game finished");
    }

    fn cancel_timers(&mut self) {
        for token in &self.timers {
            token.cancel();
        }
        self.timers.clear();
    }

    /// Number of tiles in this game.
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// The tile set, in creation order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Order numbers of the tiles clicked so far, in click order.
    pub fn clicked(&self) -> &[usize] {
        &self.clicked
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed scramble relocations.
    pub fn scramble_ticks(&self) -> usize {
        self.scramble_ticks
    }
}
