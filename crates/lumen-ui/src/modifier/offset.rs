//! Offset modifier.

use super::Modifier;
use lumen_ui_layout::{Constraints, LayoutModifier, Measurable, MeasureResult, MeasureScope};

/// Moves the wrapped content without changing its size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetModifier {
    x: f32,
    y: f32,
    rtl_aware: bool,
}

impl OffsetModifier {
    pub fn new(x: f32, y: f32, rtl_aware: bool) -> Self {
        Self { x, y, rtl_aware }
    }

    pub fn rtl_aware(&self) -> bool {
        self.rtl_aware
    }
}

impl LayoutModifier for OffsetModifier {
    fn measure(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> MeasureResult {
        let placeable = measurable.measure(constraints, scope.layout_direction());
        let (x, y, rtl_aware) = (self.x, self.y, self.rtl_aware);
        scope.layout(placeable.width(), placeable.height(), move |placement| {
            if rtl_aware {
                placement.place_relative(&placeable, x, y);
            } else {
                placement.place_absolute(&placeable, x, y);
            }
        })
    }

    fn min_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        measurable.min_intrinsic_width(height, scope.layout_direction())
    }

    fn max_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        measurable.max_intrinsic_width(height, scope.layout_direction())
    }

    fn min_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        measurable.min_intrinsic_height(width, scope.layout_direction())
    }

    fn max_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        measurable.max_intrinsic_height(width, scope.layout_direction())
    }

    fn debug_name(&self) -> &str {
        "OffsetModifier"
    }
}

impl Modifier {
    /// Offset the content by (x, y).
    ///
    /// This modifier is RTL-aware: positive x offsets move content right in LTR
    /// and left in RTL layouts.
    pub fn offset(self, x: f32, y: f32) -> Self {
        self.then(Modifier::with_layout(OffsetModifier::new(x, y, true)))
    }

    /// Offset the content by (x, y) without considering layout direction.
    pub fn absolute_offset(self, x: f32, y: f32) -> Self {
        self.then(Modifier::with_layout(OffsetModifier::new(x, y, false)))
    }
}
