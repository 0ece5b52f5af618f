//! Presentation surface boundary.
//!
//! The engine renders by commanding a [`Surface`]; it never touches a
//! concrete frontend. Clicks travel the other way: the frontend resolves a
//! click to a [`HandleId`] and feeds it back through the session controller.

use crate::game::tile::{Color, Point};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a tile's visual element on a surface.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new,
)]
pub struct HandleId(u64);

/// Dimensions of the play surface, in surface cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Bounds {
    /// Surface width.
    pub width: u16,
    /// Surface height.
    pub height: u16,
}

/// Capability set the engine calls to present tiles.
///
/// Implementations only render what the engine commands; they never mutate
/// tile state themselves.
pub trait Surface {
    /// Creates a visual element for a tile and returns its handle.
    fn create_tile(&mut self, label: &str, color: Color) -> HandleId;

    /// Moves a tile's element to `position`.
    fn set_position(&mut self, handle: HandleId, position: Point);

    /// Replaces a tile's label text (empty string hides the number).
    fn set_label(&mut self, handle: HandleId, text: &str);

    /// Detaches a tile's element from the surface.
    fn remove(&mut self, handle: HandleId);

    /// Current bounding rectangle of the play surface.
    fn bounds(&self) -> Bounds;
}
