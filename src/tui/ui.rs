//! Stateless rendering for the tile game frontend.

use crate::game::phase::Phase;
use crate::game::tile::Color as TileColor;
use crate::messages::MessageKind;
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Paragraph},
};

/// Screen regions of the frontend, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppAreas {
    /// Tile-count prompt label.
    pub prompt: Rect,
    /// Tile-count input box.
    pub input: Rect,
    /// Start control.
    pub go: Rect,
    /// Message line.
    pub message: Rect,
    /// Bordered play area the tiles live in.
    pub play: Rect,
}

/// Splits the terminal area into the frontend's regions.
pub fn layout_areas(area: Rect) -> AppAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt, input, start control
            Constraint::Length(1), // Message line
            Constraint::Min(8),    // Play area
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(24),
            Constraint::Length(7),
            Constraint::Length(8),
        ])
        .split(rows[0]);

    AppAreas {
        prompt: header[0],
        input: header[1],
        go: header[2],
        message: rows[1],
        play: rows[2],
    }
}

/// English text for the frontend's message catalog.
///
/// The core only emits [`MessageKind`] values; the literal strings live here.
pub fn message_text(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::InvalidCount => "Please enter a number between 3 and 7.",
        MessageKind::Completed => "Excellent memory!",
        MessageKind::WrongOrder => "Wrong order! Better luck next time.",
        MessageKind::CountPrompt => "How many tiles would you like to memorize?",
        MessageKind::StartControl => "Go",
    }
}

/// Renders one frame of the frontend.
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = app.areas();
    draw_prompt(frame, areas.prompt);
    draw_input(frame, areas.input, app);
    draw_go(frame, areas.go, app);
    draw_message(frame, areas.message, app);
    draw_play(frame, areas.play, app);
}

fn draw_prompt(frame: &mut Frame, area: Rect) {
    // Second line of the 3-row header, level with the bordered input box.
    let text = Text::from(vec![
        Line::raw(""),
        Line::from(message_text(MessageKind::CountPrompt)),
    ]);
    let prompt = Paragraph::new(text).style(Style::default().fg(Color::Cyan));
    frame.render_widget(prompt, area);
}

fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let style = if app.input_enabled() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(app.input())
        .style(style)
        .block(Block::bordered());
    frame.render_widget(input, area);
}

fn draw_go(frame: &mut Frame, area: Rect, app: &App) {
    let style = if app.input_enabled() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let go = Paragraph::new(message_text(MessageKind::StartControl))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(go, area);
}

fn draw_message(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match app.message() {
        Some(kind) if kind.is_error() => (
            message_text(kind).to_string(),
            Style::default().fg(Color::Red),
        ),
        Some(kind) => (
            message_text(kind).to_string(),
            Style::default().fg(Color::Green),
        ),
        None => (status_hint(app).to_string(), Style::default().fg(Color::Yellow)),
    };
    let message = Paragraph::new(text).style(style);
    frame.render_widget(message, area);
}

fn status_hint(app: &App) -> &'static str {
    match app.controller().engine().map(|engine| engine.phase()) {
        None => "Press Enter or click Go to start. 'q' quits.",
        Some(Phase::Setup) | Some(Phase::Memorize) => "Memorize the order of the numbers...",
        Some(Phase::Scrambling) => "Scrambling...",
        Some(Phase::AwaitingInput) => "Click the tiles in their original order.",
        Some(Phase::Won) | Some(Phase::Lost) => "Press Enter or click Go for a new game.",
    }
}

fn draw_play(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title("Board");
    let inner = area.inner(Margin::new(1, 1));
    frame.render_widget(block, area);

    let surface = app.controller().surface();
    let (tile_width, tile_height) = surface.tile_size();
    for element in surface.elements() {
        let position = element.position();
        let tile = Rect::new(
            inner.x + position.left,
            inner.y + position.top,
            tile_width,
            tile_height,
        )
        .intersection(inner);
        if tile.is_empty() {
            continue;
        }

        let mut lines = vec![Line::from(element.label().to_string())];
        if tile.height >= 2 {
            // Push the label to the tile's middle row.
            lines.insert(0, Line::raw(""));
        }
        let style = Style::default()
            .bg(to_terminal_color(element.color()))
            .fg(label_fg(element.color()))
            .add_modifier(Modifier::BOLD);
        let widget = Paragraph::new(Text::from(lines))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(widget, tile);
    }
}

fn to_terminal_color(color: TileColor) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Black on light backgrounds, white on dark ones.
fn label_fg(color: TileColor) -> Color {
    let luminance =
        0.299 * f32::from(color.r) + 0.587 * f32::from(color.g) + 0.114 * f32::from(color.b);
    if luminance > 150.0 {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_covers_terminal_without_overlap() {
        let areas = layout_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.prompt.y, 0);
        assert_eq!(areas.message.y, 3);
        assert_eq!(areas.play.y, 4);
        assert_eq!(areas.play.height, 20);
        // Header segments sit side by side.
        assert_eq!(areas.prompt.x + areas.prompt.width, areas.input.x);
        assert_eq!(areas.input.x + areas.input.width, areas.go.x);
    }

    #[test]
    fn label_contrast_flips_with_luminance() {
        assert_eq!(label_fg(TileColor::new(250, 250, 250)), Color::Black);
        assert_eq!(label_fg(TileColor::new(10, 10, 40)), Color::White);
    }
}
