//! Frontend application state.

use crate::game::engine::Timing;
use crate::game::layout::TileMetrics;
use crate::game::surface::Bounds;
use crate::messages::MessageKind;
use crate::session::{SessionController, SessionEvent};
use crate::tui::surface::TerminalSurface;
use crate::tui::ui::{self, AppAreas};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Margin, Position, Rect};
use tracing::debug;

/// State of the terminal frontend: the session controller, the tile-count
/// input buffer, and the message line.
#[derive(Debug)]
pub struct App {
    controller: SessionController<TerminalSurface>,
    input: String,
    message: Option<MessageKind>,
    areas: AppAreas,
    should_quit: bool,
}

impl App {
    /// Creates the frontend, optionally pre-filling the tile-count input.
    pub fn new(timing: Timing, prefill: Option<usize>) -> Self {
        let metrics = TileMetrics::default();
        let surface = TerminalSurface::new(Bounds::new(0, 0), *metrics.width(), *metrics.height());
        Self {
            controller: SessionController::new(surface, timing, metrics),
            input: prefill.map(|count| count.to_string()).unwrap_or_default(),
            message: None,
            areas: AppAreas::default(),
            should_quit: false,
        }
    }

    /// Recomputes screen regions and pushes the play-area bounds to the
    /// surface. Called once per frame, before rendering and hit-testing.
    pub fn sync_layout(&mut self, area: Rect) {
        self.areas = ui::layout_areas(area);
        let play = self.play_inner();
        self.controller
            .surface_mut()
            .set_bounds(Bounds::new(play.width, play.height));
    }

    /// Applies every engine event that is already waiting.
    pub fn drain_session(&mut self) {
        while let Some(event) = self.controller.try_next_event() {
            debug!(?event, "session event");
            if let SessionEvent::Finished(outcome) = event {
                self.message = Some(outcome.message());
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.start(),
            KeyCode::Backspace => {
                if self.input_enabled() {
                    self.input.pop();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.input_enabled() && self.input.len() < 2 {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Handles a mouse event: the start control or a tile click.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.areas.go.contains(position) {
            self.start();
            return;
        }

        let play = self.play_inner();
        if play.contains(position) {
            let left = mouse.column - play.x;
            let top = mouse.row - play.y;
            if let Some(handle) = self.controller.surface().tile_at(left, top) {
                self.controller.click(handle);
            }
        }
    }

    fn start(&mut self) {
        // New-session input stays disabled until the running game resolves.
        if self.controller.is_active() {
            return;
        }
        self.message = None;
        if let Err(error) = self.controller.start_session(&self.input) {
            self.message = Some(error.message());
        }
    }

    fn play_inner(&self) -> Rect {
        self.areas.play.inner(Margin::new(1, 1))
    }

    /// Current tile-count input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Message to display, if any.
    pub fn message(&self) -> Option<MessageKind> {
        self.message
    }

    /// Whether the count input accepts edits right now.
    pub fn input_enabled(&self) -> bool {
        !self.controller.is_active()
    }

    /// The session controller.
    pub fn controller(&self) -> &SessionController<TerminalSurface> {
        &self.controller
    }

    /// Last computed screen regions.
    pub fn areas(&self) -> AppAreas {
        self.areas
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
