//! Alignment lines exposed by measured subtrees.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Axis an alignment line is measured along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlignmentLineOrientation {
    /// A horizontal line; its offset is a y position (for example a text baseline).
    Horizontal,
    /// A vertical line; its offset is an x position.
    Vertical,
}

/// A named line that a subtree reports so that parents can align across subtrees.
///
/// Lines are compared by name and orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlignmentLine {
    name: &'static str,
    orientation: AlignmentLineOrientation,
}

impl AlignmentLine {
    pub const fn horizontal(name: &'static str) -> Self {
        Self {
            name,
            orientation: AlignmentLineOrientation::Horizontal,
        }
    }

    pub const fn vertical(name: &'static str) -> Self {
        Self {
            name,
            orientation: AlignmentLineOrientation::Vertical,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation == AlignmentLineOrientation::Horizontal
    }
}

/// Baseline of the first line of text in a subtree.
pub const FIRST_BASELINE: AlignmentLine = AlignmentLine::horizontal("FirstBaseline");

/// Baseline of the last line of text in a subtree.
pub const LAST_BASELINE: AlignmentLine = AlignmentLine::horizontal("LastBaseline");

/// Offsets recorded by a measurement, in insertion order.
pub type AlignmentLines = IndexMap<AlignmentLine, f32, FxBuildHasher>;

/// Builds an [`AlignmentLines`] map from `(line, offset)` pairs. Later pairs win.
pub fn alignment_lines<I>(lines: I) -> AlignmentLines
where
    I: IntoIterator<Item = (AlignmentLine, f32)>,
{
    lines.into_iter().collect()
}
