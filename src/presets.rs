//! Built-in problem instances.

use crate::problem::{Border, ColoringProblem, Palette};

/// Postal codes of the south-eastern states, in genome order.
pub const SOUTHEAST_STATES: [&str; 10] =
    ["NC", "SC", "VA", "TN", "KY", "WV", "GA", "AL", "MS", "FL"];

/// Red, green, blue, white.
pub const FOUR_COLORS: [char; 4] = ['R', 'G', 'B', 'W'];

/// Shared land borders between the states in [`SOUTHEAST_STATES`].
pub const SOUTHEAST_BORDERS: [Border; 17] = [
    Border::new(0, 1),
    Border::new(0, 2),
    Border::new(0, 3),
    Border::new(0, 6),
    Border::new(1, 6),
    Border::new(2, 3),
    Border::new(2, 4),
    Border::new(2, 5),
    Border::new(3, 4),
    Border::new(3, 6),
    Border::new(3, 7),
    Border::new(3, 8),
    Border::new(4, 5),
    Border::new(6, 7),
    Border::new(6, 9),
    Border::new(7, 8),
    Border::new(7, 9),
];

/// Ten south-eastern US states, four colors, seventeen borders.
///
/// ```
/// let problem = u_graphcolor::presets::southeast_us();
/// assert_eq!(problem.node_count(), 10);
/// assert_eq!(problem.borders().len(), 17);
/// ```
pub fn southeast_us() -> ColoringProblem {
    let palette = Palette {
        symbols: FOUR_COLORS.to_vec(),
    };
    ColoringProblem::from_validated(
        SOUTHEAST_STATES.len(),
        palette,
        SOUTHEAST_BORDERS.to_vec(),
    )
}
