//! Tile placement on the play surface.

use crate::game::surface::Bounds;
use crate::game::tile::Point;
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed tile dimensions and layout spacing, in surface cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new,
)]
pub struct TileMetrics {
    /// Tile width.
    width: u16,
    /// Tile height.
    height: u16,
    /// Clearance kept between a scrambled tile and the surface edge.
    margin: u16,
    /// Horizontal gap between tiles in the initial row.
    spacing: u16,
    /// Vertical offset of the initial row.
    row_top: u16,
    /// Left offset of the first tile in the initial row.
    row_left: u16,
}

impl Default for TileMetrics {
    fn default() -> Self {
        Self::new(9, 3, 1, 2, 1, 2)
    }
}

/// Computes initial and scrambled tile positions within a bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct LayoutPlanner {
    bounds: Bounds,
    metrics: TileMetrics,
}

impl LayoutPlanner {
    /// Creates a planner for the given surface bounds.
    pub fn new(bounds: Bounds, metrics: TileMetrics) -> Self {
        Self { bounds, metrics }
    }

    /// Lays `count` tiles left-to-right in a single row at a fixed vertical
    /// offset. Deterministic given `count`.
    pub fn initial_positions(&self, count: usize) -> Vec<Point> {
        let mut left = self.metrics.row_left;
        (0..count)
            .map(|_| {
                let position = Point::new(self.metrics.row_top, left);
                left += self.metrics.width + self.metrics.spacing;
                position
            })
            .collect()
    }

    /// Draws a uniformly random in-bounds position for one tile.
    ///
    /// When the surface is smaller than a tile plus margin the sampling range
    /// collapses to zero rather than failing, which degenerates to stacking
    /// tiles at the origin.
    pub fn random_position(&self) -> Point {
        let max_top = Self::axis_max(self.bounds.height, self.metrics.height, self.metrics.margin);
        let max_left = Self::axis_max(self.bounds.width, self.metrics.width, self.metrics.margin);
        let mut rng = rand::rng();
        Point::new(
            rng.random_range(0..=max_top),
            rng.random_range(0..=max_left),
        )
    }

    fn axis_max(bound: u16, tile: u16, margin: u16) -> u16 {
        (i32::from(bound) - i32::from(tile) - i32::from(margin)).max(0) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner(width: u16, height: u16) -> LayoutPlanner {
        LayoutPlanner::new(Bounds::new(width, height), TileMetrics::default())
    }

    #[test]
    fn initial_row_is_deterministic() {
        let planner = planner(80, 20);
        let first = planner.initial_positions(5);
        let second = planner.initial_positions(5);
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);

        // Single row: same top, left strictly increasing by width + spacing.
        let metrics = planner.metrics();
        let step = metrics.width() + metrics.spacing();
        for (i, position) in first.iter().enumerate() {
            assert_eq!(position.top, *metrics.row_top());
            assert_eq!(position.left, metrics.row_left() + i as u16 * step);
        }
    }

    #[test]
    fn random_positions_stay_in_bounds() {
        let planner = planner(80, 20);
        let metrics = planner.metrics();
        let max_top = 20 - metrics.height() - metrics.margin();
        let max_left = 80 - metrics.width() - metrics.margin();
        for _ in 0..200 {
            let position = planner.random_position();
            assert!(position.top <= max_top);
            assert!(position.left <= max_left);
        }
    }

    #[test]
    fn degenerate_surface_clamps_to_origin() {
        // Surface smaller than a single tile: both axes clamp to zero.
        let planner = planner(4, 2);
        for _ in 0..20 {
            assert_eq!(planner.random_position(), Point::new(0, 0));
        }
    }
}
