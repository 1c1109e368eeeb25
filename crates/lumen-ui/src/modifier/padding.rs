//! Padding modifier, expressed as layout transforms.

use super::Modifier;
use lumen_ui_graphics::{EdgeInsets, Point, Size};
use lumen_ui_layout::{AlignmentLine, Constraints, LayoutDirection, TransformLayoutModifier};

/// Adds space around the wrapped content.
///
/// Relative padding uses start/end edges, which swap in RTL; absolute padding
/// always uses left/right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaddingModifier {
    start: f32,
    top: f32,
    end: f32,
    bottom: f32,
    rtl_aware: bool,
}

impl PaddingModifier {
    pub fn relative(start: f32, top: f32, end: f32, bottom: f32) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
            rtl_aware: true,
        }
    }

    pub fn absolute(insets: EdgeInsets) -> Self {
        Self {
            start: insets.left,
            top: insets.top,
            end: insets.right,
            bottom: insets.bottom,
            rtl_aware: false,
        }
    }

    /// Left/top/right/bottom insets for `layout_direction`.
    pub fn insets(&self, layout_direction: LayoutDirection) -> EdgeInsets {
        if self.rtl_aware && layout_direction.is_rtl() {
            EdgeInsets::from_components(self.end, self.top, self.start, self.bottom)
        } else {
            EdgeInsets::from_components(self.start, self.top, self.end, self.bottom)
        }
    }
}

impl TransformLayoutModifier for PaddingModifier {
    fn modify_constraints(
        &self,
        constraints: Constraints,
        layout_direction: LayoutDirection,
    ) -> Constraints {
        let insets = self.insets(layout_direction);
        constraints.deflate(insets.horizontal_sum(), insets.vertical_sum())
    }

    fn modify_size(
        &self,
        constraints: Constraints,
        layout_direction: LayoutDirection,
        child_size: Size,
    ) -> Size {
        let insets = self.insets(layout_direction);
        constraints.constrain_size(Size::new(
            child_size.width + insets.horizontal_sum(),
            child_size.height + insets.vertical_sum(),
        ))
    }

    fn modify_position(
        &self,
        _child_size: Size,
        _container_size: Size,
        layout_direction: LayoutDirection,
    ) -> Point {
        let insets = self.insets(layout_direction);
        Point::new(insets.left, insets.top)
    }

    fn modify_alignment_line(
        &self,
        line: AlignmentLine,
        value: Option<f32>,
        layout_direction: LayoutDirection,
    ) -> Option<f32> {
        let insets = self.insets(layout_direction);
        value.map(|offset| {
            if line.is_horizontal() {
                offset + insets.top
            } else {
                offset + insets.left
            }
        })
    }

    fn debug_name(&self) -> &str {
        "PaddingModifier"
    }
}

impl Modifier {
    /// Uniform padding on every edge.
    pub fn padding(self, all: f32) -> Self {
        self.padding_each(EdgeInsets::uniform(all))
    }

    /// Padding with explicit left/top/right/bottom values, independent of direction.
    pub fn padding_each(self, insets: EdgeInsets) -> Self {
        self.then(Modifier::with_transform(PaddingModifier::absolute(insets)))
    }

    /// Padding with start/end edges that follow the layout direction.
    pub fn padding_relative(self, start: f32, top: f32, end: f32, bottom: f32) -> Self {
        self.then(Modifier::with_transform(PaddingModifier::relative(
            start, top, end, bottom,
        )))
    }
}
