//! Session management — the composition root.
//!
//! A [`SessionController`] owns the presentation surface and at most one
//! [`GameEngine`]. Starting a session tears the previous engine down first,
//! cancelling its pending timers, so a stale memorize delay or scramble tick
//! can never mutate tiles that are no longer attached to the surface.

use crate::error::GameError;
use crate::game::engine::{EngineEvent, GameEngine, Timing};
use crate::game::layout::TileMetrics;
use crate::game::phase::{GameOutcome, Phase};
use crate::game::surface::{HandleId, Surface};
use crate::game::validate;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, instrument, warn};

/// A state change surfaced to the frontend after an engine event.
///
/// Game end is an explicit notification delivered through the same channel
/// as every other event — frontends react to [`SessionEvent::Finished`]
/// instead of sampling engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The memorize delay elapsed; scrambling began.
    ScrambleStarted,
    /// A scramble tick relocated the tiles.
    TilesMoved,
    /// Numbers are hidden; clicks are now accepted.
    InputOpen,
    /// A correct (non-final) tile was revealed.
    TileRevealed,
    /// The session reached a terminal phase.
    Finished(GameOutcome),
}

/// Composition root holding the surface and at most one active engine.
#[derive(Debug)]
pub struct SessionController<S: Surface> {
    surface: S,
    timing: Timing,
    metrics: TileMetrics,
    engine: Option<GameEngine>,
    events_tx: Option<UnboundedSender<EngineEvent>>,
    events_rx: Option<UnboundedReceiver<EngineEvent>>,
}

impl<S: Surface> SessionController<S> {
    /// Creates a controller with no active session.
    pub fn new(surface: S, timing: Timing, metrics: TileMetrics) -> Self {
        Self {
            surface,
            timing,
            metrics,
            engine: None,
            events_tx: None,
            events_rx: None,
        }
    }

    /// Validates `raw` and starts a new session.
    ///
    /// On validation failure nothing changes: no engine is created and any
    /// running game keeps running. On success any previous engine is torn
    /// down — its timers cancelled, its tiles removed — before the
    /// replacement is constructed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCount`] for non-numeric or out-of-range
    /// input.
    #[instrument(skip(self))]
    pub fn start_session(&mut self, raw: &str) -> Result<usize, GameError> {
        let count = validate::parse_tile_count(raw).map_err(|error| {
            warn!(raw, %error, "rejected tile count");
            error
        })?;

        self.teardown_current();

        let (tx, rx) = mpsc::unbounded_channel();
        let engine =
            GameEngine::new(count, self.timing, self.metrics, tx.clone(), &mut self.surface);
        self.engine = Some(engine);
        self.events_tx = Some(tx);
        self.events_rx = Some(rx);

        info!(count, "session started");
        Ok(count)
    }

    /// Feeds a click on the tile behind `handle` into the active session.
    ///
    /// Clicks share the engine's event channel with the timers, so they are
    /// processed one at a time; clicks outside the input phase are ignored by
    /// the engine.
    pub fn click(&self, handle: HandleId) {
        if let Some(tx) = &self.events_tx {
            let _ = tx.send(EngineEvent::TileClicked(handle));
        }
    }

    /// Awaits the next meaningful state change of the active session.
    ///
    /// Returns `None` when no session is active or the session already
    /// reached a terminal phase.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        loop {
            match &self.engine {
                Some(engine) if !engine.phase().is_terminal() => {}
                _ => return None,
            }
            let event = self.events_rx.as_mut()?.recv().await?;
            if let Some(session_event) = self.apply(event) {
                return Some(session_event);
            }
        }
    }

    /// Applies already-delivered engine events without waiting.
    ///
    /// Frontends with their own frame cadence call this once per frame.
    pub fn try_next_event(&mut self) -> Option<SessionEvent> {
        loop {
            let event = self.events_rx.as_mut()?.try_recv().ok()?;
            if let Some(session_event) = self.apply(event) {
                return Some(session_event);
            }
        }
    }

    /// Runs one engine event and classifies the resulting transition.
    fn apply(&mut self, event: EngineEvent) -> Option<SessionEvent> {
        let engine = self.engine.as_mut()?;
        let phase_before = engine.phase();
        let clicks_before = engine.clicked().len();

        if let Some(outcome) = engine.handle_event(event, &mut self.surface) {
            return Some(SessionEvent::Finished(outcome));
        }

        match (phase_before, engine.phase()) {
            (Phase::Memorize, Phase::Scrambling) => Some(SessionEvent::ScrambleStarted),
            (Phase::Scrambling, Phase::AwaitingInput) => Some(SessionEvent::InputOpen),
            (Phase::Scrambling, Phase::Scrambling) => Some(SessionEvent::TilesMoved),
            (Phase::AwaitingInput, Phase::AwaitingInput)
                if engine.clicked().len() > clicks_before =>
            {
                Some(SessionEvent::TileRevealed)
            }
            _ => None,
        }
    }

    fn teardown_current(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            debug!("replacing previous session");
            engine.teardown(&mut self.surface);
        }
        self.events_tx = None;
        self.events_rx = None;
    }

    /// Whether a session is running and not yet finished.
    pub fn is_active(&self) -> bool {
        self.engine
            .as_ref()
            .is_some_and(|engine| !engine.phase().is_terminal())
    }

    /// The current engine, if a session was started.
    pub fn engine(&self) -> Option<&GameEngine> {
        self.engine.as_ref()
    }

    /// The owned surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the owned surface (resize handling).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
