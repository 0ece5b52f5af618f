//! Random color generation for tiles.

use crate::game::tile::Color;
use rand::Rng;

/// Draws `count` colors, each channel uniform over the full RGB cube.
///
/// Colors are independent; two tiles may receive the same color.
pub fn random_colors(count: usize) -> Vec<Color> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Color::new(rng.random(), rng.random(), rng.random()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        for count in 0..8 {
            assert_eq!(random_colors(count).len(), count);
        }
    }
}
