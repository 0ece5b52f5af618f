//! Terminal implementation of the presentation surface.

use crate::game::surface::{Bounds, HandleId, Surface};
use crate::game::tile::{Color, Point};
use tracing::debug;

/// A tile's visual element on the terminal grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileElement {
    handle: HandleId,
    label: String,
    color: Color,
    position: Point,
}

impl TileElement {
    /// Handle the engine refers to this element by.
    pub fn handle(&self) -> HandleId {
        self.handle
    }

    /// Current label text (empty while the number is hidden).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Background color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Position within the play area, in cells.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// [`Surface`] backed by a rectangle of terminal cells.
///
/// Holds one element per live tile; the renderer draws whatever is here and
/// nothing else. Mouse hit-testing resolves play-area coordinates back to
/// handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSurface {
    bounds: Bounds,
    tile_width: u16,
    tile_height: u16,
    next_handle: u64,
    elements: Vec<TileElement>,
}

impl TerminalSurface {
    /// Creates an empty surface with the given bounds and tile extent.
    pub fn new(bounds: Bounds, tile_width: u16, tile_height: u16) -> Self {
        Self {
            bounds,
            tile_width,
            tile_height,
            next_handle: 0,
            elements: Vec::new(),
        }
    }

    /// Updates the bounds after a terminal resize.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Live elements, in creation order.
    pub fn elements(&self) -> &[TileElement] {
        &self.elements
    }

    /// Tile extent in cells, `(width, height)`.
    pub fn tile_size(&self) -> (u16, u16) {
        (self.tile_width, self.tile_height)
    }

    /// Resolves a play-area cell to the topmost element covering it.
    ///
    /// Later-created elements win, matching their paint order.
    pub fn tile_at(&self, left: u16, top: u16) -> Option<HandleId> {
        self.elements.iter().rev().find_map(|element| {
            let position = element.position;
            let hit = left >= position.left
                && left < position.left + self.tile_width
                && top >= position.top
                && top < position.top + self.tile_height;
            hit.then_some(element.handle)
        })
    }

    fn element_mut(&mut self, handle: HandleId) -> Option<&mut TileElement> {
        self.elements
            .iter_mut()
            .find(|element| element.handle == handle)
    }
}

impl Surface for TerminalSurface {
    fn create_tile(&mut self, label: &str, color: Color) -> HandleId {
        let handle = HandleId::new(self.next_handle);
        self.next_handle += 1;
        debug!(?handle, label, "creating tile element");
        self.elements.push(TileElement {
            handle,
            label: label.to_string(),
            color,
            position: Point::new(0, 0),
        });
        handle
    }

    fn set_position(&mut self, handle: HandleId, position: Point) {
        if let Some(element) = self.element_mut(handle) {
            element.position = position;
        }
    }

    fn set_label(&mut self, handle: HandleId, text: &str) {
        if let Some(element) = self.element_mut(handle) {
            element.label = text.to_string();
        }
    }

    fn remove(&mut self, handle: HandleId) {
        debug!(?handle, "removing tile element");
        self.elements.retain(|element| element.handle != handle);
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> TerminalSurface {
        TerminalSurface::new(Bounds::new(40, 12), 9, 3)
    }

    #[test]
    fn create_and_remove_round_trip() {
        let mut surface = surface();
        let a = surface.create_tile("1", Color::new(1, 2, 3));
        let b = surface.create_tile("2", Color::new(4, 5, 6));
        assert_ne!(a, b);
        assert_eq!(surface.elements().len(), 2);

        surface.remove(a);
        assert_eq!(surface.elements().len(), 1);
        assert_eq!(surface.elements()[0].handle(), b);
    }

    #[test]
    fn hit_test_respects_extent_and_paint_order() {
        let mut surface = surface();
        let a = surface.create_tile("1", Color::new(0, 0, 0));
        let b = surface.create_tile("2", Color::new(0, 0, 0));
        surface.set_position(a, Point::new(2, 4));
        surface.set_position(b, Point::new(2, 8));

        assert_eq!(surface.tile_at(4, 2), Some(a));
        assert_eq!(surface.tile_at(12, 4), Some(b));
        // Overlap region: b was created later, so it paints on top.
        assert_eq!(surface.tile_at(8, 2), Some(b));
        assert_eq!(surface.tile_at(0, 0), None);
    }

    #[test]
    fn labels_update_in_place() {
        let mut surface = surface();
        let a = surface.create_tile("1", Color::new(0, 0, 0));
        surface.set_label(a, "");
        assert_eq!(surface.elements()[0].label(), "");
        surface.set_label(a, "1");
        assert_eq!(surface.elements()[0].label(), "1");
    }
}
