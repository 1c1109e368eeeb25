//! Alignment utilities for positioning content

use crate::LayoutDirection;
use lumen_ui_graphics::{Point, Size};

/// Alignment across both axes used for positioning content within a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Horizontal alignment component.
    pub horizontal: HorizontalAlignment,
    /// Vertical alignment component.
    pub vertical: VerticalAlignment,
}

impl Alignment {
    /// Creates a new [`Alignment`] from explicit horizontal and vertical components.
    pub const fn new(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Align children to the top-start corner.
    pub const TOP_START: Self = Self::new(HorizontalAlignment::Start, VerticalAlignment::Top);

    /// Align children to the center of the parent.
    pub const CENTER: Self = Self::new(
        HorizontalAlignment::CenterHorizontally,
        VerticalAlignment::CenterVertically,
    );

    /// Align children to the bottom-end corner.
    pub const BOTTOM_END: Self = Self::new(HorizontalAlignment::End, VerticalAlignment::Bottom);

    /// Computes the offset of `child` inside `available`.
    ///
    /// The returned x is absolute: start and end are already resolved against
    /// `layout_direction`.
    pub fn align(&self, available: Size, child: Size, layout_direction: LayoutDirection) -> Point {
        Point::new(
            self.horizontal
                .align(available.width, child.width, layout_direction),
            self.vertical.align(available.height, child.height),
        )
    }
}

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Align children to the leading edge (left in LTR, right in RTL).
    Start,
    /// Align children to the horizontal center.
    CenterHorizontally,
    /// Align children to the trailing edge (right in LTR, left in RTL).
    End,
}

impl HorizontalAlignment {
    /// Computes the absolute horizontal offset for alignment.
    pub fn align(&self, available: f32, child: f32, layout_direction: LayoutDirection) -> f32 {
        let free = (available - child).max(0.0);
        match (self, layout_direction) {
            (HorizontalAlignment::CenterHorizontally, _) => free / 2.0,
            (HorizontalAlignment::Start, LayoutDirection::Ltr)
            | (HorizontalAlignment::End, LayoutDirection::Rtl) => 0.0,
            (HorizontalAlignment::Start, LayoutDirection::Rtl)
            | (HorizontalAlignment::End, LayoutDirection::Ltr) => free,
        }
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Align children to the top edge.
    Top,
    /// Align children to the vertical center.
    CenterVertically,
    /// Align children to the bottom edge.
    Bottom,
}

impl VerticalAlignment {
    /// Computes the vertical offset for alignment.
    pub fn align(&self, available: f32, child: f32) -> f32 {
        match self {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::CenterVertically => ((available - child) / 2.0).max(0.0),
            VerticalAlignment::Bottom => (available - child).max(0.0),
        }
    }
}

#[cfg(test)]
#[path = "tests/alignment_tests.rs"]
mod tests;
