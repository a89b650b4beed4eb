//! Problem definition: nodes, colors and the borders between nodes.
//!
//! A [`ColoringProblem`] is static input to the engine. It fixes the genome
//! length (one gene per node), the color alphabet, and the set of borders
//! whose endpoints must receive different colors. All validation happens
//! in [`ColoringProblem::new`]; everything downstream trusts the indices.

use crate::error::{ConfigError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered set of distinct color symbols.
///
/// Genes store positions into the palette, so color `i` renders as
/// `symbols()[i]`.
///
/// ```
/// use u_graphcolor::Palette;
///
/// let palette = Palette::new(['R', 'G', 'B']).unwrap();
/// assert_eq!(palette.len(), 3);
/// assert_eq!(palette.symbol(1), Some('G'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<char>", into = "Vec<char>")
)]
pub struct Palette {
    pub(crate) symbols: Vec<char>,
}

impl Palette {
    /// Builds a palette, rejecting empty or repeated symbols.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Result<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        for (i, &s) in symbols.iter().enumerate() {
            if symbols[..i].contains(&s) {
                return Err(ConfigError::DuplicateColor(s));
            }
        }
        Ok(Self { symbols })
    }

    /// Number of colors (K).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false` for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol for color index `color`, if in range.
    pub fn symbol(&self, color: usize) -> Option<char> {
        self.symbols.get(color).copied()
    }

    /// Position of `symbol` in the palette.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }
}

impl TryFrom<Vec<char>> for Palette {
    type Error = ConfigError;

    fn try_from(symbols: Vec<char>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<Palette> for Vec<char> {
    fn from(palette: Palette) -> Self {
        palette.symbols
    }
}

/// An unordered adjacency between two nodes.
///
/// The endpoints must receive different colors for the border to be
/// satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Border {
    pub a: usize,
    pub b: usize,
}

impl Border {
    pub const fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// Whether the border touches `node`.
    pub fn touches(&self, node: usize) -> bool {
        self.a == node || self.b == node
    }
}

impl From<(usize, usize)> for Border {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

/// A validated graph-coloring instance.
///
/// # Examples
///
/// ```
/// use u_graphcolor::{ColoringProblem, Palette};
///
/// // A path 0 - 1 - 2 is two-colorable.
/// let problem = ColoringProblem::new(
///     3,
///     Palette::new(['R', 'G']).unwrap(),
///     [(0, 1), (1, 2)],
/// )
/// .unwrap();
/// assert_eq!(problem.node_count(), 3);
/// assert_eq!(problem.borders().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringProblem {
    node_count: usize,
    palette: Palette,
    borders: Vec<Border>,
}

impl ColoringProblem {
    /// Validates and builds a problem.
    ///
    /// Fails if the palette is empty, if `node_count < 2`, if any border references a node outside
    /// `[0, node_count)`, or if a border joins a node to itself. Duplicate
    /// borders are kept; each one counts towards the fitness denominator.
    pub fn new<B>(
        node_count: usize,
        palette: Palette,
        borders: impl IntoIterator<Item = B>,
    ) -> Result<Self>
    where
        B: Into<Border>,
    {
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if node_count < 2 {
            return Err(ConfigError::GenomeTooShort(node_count));
        }
        let borders: Vec<Border> = borders.into_iter().map(Into::into).collect();
        for (index, border) in borders.iter().enumerate() {
            for node in [border.a, border.b] {
                if node >= node_count {
                    return Err(ConfigError::BorderOutOfRange {
                        index,
                        node,
                        node_count,
                    });
                }
            }
            if border.a == border.b {
                return Err(ConfigError::SelfBorder {
                    index,
                    node: border.a,
                });
            }
        }
        Ok(Self {
            node_count,
            palette,
            borders,
        })
    }

    /// Builds a problem from data already known to be valid (built-in presets).
    pub(crate) fn from_validated(
        node_count: usize,
        palette: Palette,
        borders: Vec<Border>,
    ) -> Self {
        Self {
            node_count,
            palette,
            borders,
        }
    }

    /// Genome length (N).
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of colors (K).
    pub fn color_count(&self) -> usize {
        self.palette.len()
    }

    /// The border set (B = `borders().len()`).
    pub fn borders(&self) -> &[Border] {
        &self.borders
    }

    /// Number of borders incident to each node.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count];
        for border in &self.borders {
            degrees[border.a] += 1;
            degrees[border.b] += 1;
        }
        degrees
    }
}

/// Unvalidated problem description, as loaded from configuration.
///
/// ```
/// use u_graphcolor::problem::ProblemDef;
///
/// let def = ProblemDef {
///     node_count: 2,
///     colors: vec!['R', 'G'],
///     borders: vec![(0, 1)],
/// };
/// assert!(def.build().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProblemDef {
    pub node_count: usize,
    pub colors: Vec<char>,
    pub borders: Vec<(usize, usize)>,
}

impl ProblemDef {
    /// Validates the definition into a [`ColoringProblem`].
    pub fn build(self) -> Result<ColoringProblem> {
        let palette = Palette::new(self.colors)?;
        ColoringProblem::new(self.node_count, palette, self.borders)
    }
}

impl From<&ColoringProblem> for ProblemDef {
    fn from(problem: &ColoringProblem) -> Self {
        Self {
            node_count: problem.node_count,
            colors: problem.palette.symbols.clone(),
            borders: problem.borders.iter().map(|b| (b.a, b.b)).collect(),
        }
    }
}
