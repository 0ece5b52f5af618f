//! Core domain types: tiles, colors, positions.

use crate::game::surface::HandleId;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// An RGB color assigned to a tile at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A position on the play surface, measured from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Point {
    /// Offset from the top edge.
    pub top: u16,
    /// Offset from the left edge.
    pub left: u16,
}

/// A single numbered, colored, positionable game element.
///
/// `order` is the tile's permanent identity, assigned sequentially at
/// creation and never changed afterwards. Everything else is mutated only by
/// the engine that owns the tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    order: usize,
    handle: HandleId,
    position: Point,
    color: Color,
    revealed: bool,
}

impl Tile {
    /// Creates a tile with its number visible.
    pub(crate) fn new(order: usize, handle: HandleId, position: Point, color: Color) -> Self {
        Self {
            order,
            handle,
            position,
            color,
            revealed: true,
        }
    }

    /// The tile's permanent order number (1-based).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Handle of the tile's visual element on the surface.
    pub fn handle(&self) -> HandleId {
        self.handle
    }

    /// Current position on the surface.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Color assigned at creation.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the tile's number is currently visible.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Moves the tile to a new position.
    pub(crate) fn relocate(&mut self, position: Point) {
        self.position = position;
    }

    /// Hides the tile's number.
    pub(crate) fn hide(&mut self) {
        self.revealed = false;
    }

    /// Shows the tile's number.
    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }
}
