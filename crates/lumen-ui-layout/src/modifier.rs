//! Layout modifier contracts.
//!
//! Two styles of layout modifier exist:
//!
//! - [`TransformLayoutModifier`] describes a decoration as a set of pure transforms
//!   (constraints, size, position, alignment lines, direction). The wrapper runs the
//!   measurement and calls the transforms in a fixed order.
//! - [`LayoutModifier`] owns the measurement: a single callback receives the wrapped
//!   measurable and returns a [`MeasureResult`] directly.
//!
//! Both styles may override the layout direction of the subtree they decorate.

use crate::alignment_line::AlignmentLine;
use crate::constraints::Constraints;
use crate::core::{Measurable, MeasureResult, MeasureScope};
use crate::direction::LayoutDirection;
use crate::intrinsics;
use lumen_ui_graphics::{Point, Size};

/// Layout modifier expressed as direction-aware transforms.
///
/// Every hook receives the direction resolved for this modifier's subtree.
pub trait TransformLayoutModifier {
    /// Direction for the decorated subtree, given the direction of the parent.
    fn modify_layout_direction(&self, layout_direction: LayoutDirection) -> LayoutDirection {
        layout_direction
    }

    /// Constraints forwarded to the wrapped content.
    fn modify_constraints(
        &self,
        constraints: Constraints,
        _layout_direction: LayoutDirection,
    ) -> Constraints {
        constraints
    }

    /// Size reported by the modifier, given the incoming constraints and the
    /// size the wrapped content measured at.
    fn modify_size(
        &self,
        _constraints: Constraints,
        _layout_direction: LayoutDirection,
        child_size: Size,
    ) -> Size {
        child_size
    }

    /// Absolute position of the wrapped content inside `container_size`.
    fn modify_position(
        &self,
        _child_size: Size,
        _container_size: Size,
        _layout_direction: LayoutDirection,
    ) -> Point {
        Point::ZERO
    }

    /// Adjusts an alignment line reported by the wrapped content.
    fn modify_alignment_line(
        &self,
        _line: AlignmentLine,
        value: Option<f32>,
        _layout_direction: LayoutDirection,
    ) -> Option<f32> {
        value
    }

    fn min_intrinsic_width_of(
        &self,
        measurable: &dyn Measurable,
        height: f32,
        layout_direction: LayoutDirection,
    ) -> f32 {
        let constraints = Constraints::with_max_height(height);
        let child_height = self
            .modify_constraints(constraints, layout_direction)
            .max_height;
        let width = measurable.min_intrinsic_width(child_height, layout_direction);
        self.modify_size(constraints, layout_direction, Size::new(width, height))
            .width
    }

    fn max_intrinsic_width_of(
        &self,
        measurable: &dyn Measurable,
        height: f32,
        layout_direction: LayoutDirection,
    ) -> f32 {
        let constraints = Constraints::with_max_height(height);
        let child_height = self
            .modify_constraints(constraints, layout_direction)
            .max_height;
        let width = measurable.max_intrinsic_width(child_height, layout_direction);
        self.modify_size(constraints, layout_direction, Size::new(width, height))
            .width
    }

    fn min_intrinsic_height_of(
        &self,
        measurable: &dyn Measurable,
        width: f32,
        layout_direction: LayoutDirection,
    ) -> f32 {
        let constraints = Constraints::with_max_width(width);
        let child_width = self
            .modify_constraints(constraints, layout_direction)
            .max_width;
        let height = measurable.min_intrinsic_height(child_width, layout_direction);
        self.modify_size(constraints, layout_direction, Size::new(width, height))
            .height
    }

    fn max_intrinsic_height_of(
        &self,
        measurable: &dyn Measurable,
        width: f32,
        layout_direction: LayoutDirection,
    ) -> f32 {
        let constraints = Constraints::with_max_width(width);
        let child_width = self
            .modify_constraints(constraints, layout_direction)
            .max_width;
        let height = measurable.max_intrinsic_height(child_width, layout_direction);
        self.modify_size(constraints, layout_direction, Size::new(width, height))
            .height
    }

    fn debug_name(&self) -> &str {
        "TransformLayoutModifier"
    }
}

/// Layout modifier that measures its wrapped content itself.
pub trait LayoutModifier {
    /// Measures `measurable` and produces this modifier's result.
    ///
    /// `scope.layout_direction()` is the direction resolved for this modifier; pass
    /// it on when measuring `measurable`.
    fn measure(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> MeasureResult;

    fn min_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        intrinsics::min_width(
            |placeholders, constraints| self.measure(scope, placeholders[0], constraints),
            &[measurable],
            height,
        )
    }

    fn max_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        intrinsics::max_width(
            |placeholders, constraints| self.measure(scope, placeholders[0], constraints),
            &[measurable],
            height,
        )
    }

    fn min_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        intrinsics::min_height(
            |placeholders, constraints| self.measure(scope, placeholders[0], constraints),
            &[measurable],
            width,
        )
    }

    fn max_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        intrinsics::max_height(
            |placeholders, constraints| self.measure(scope, placeholders[0], constraints),
            &[measurable],
            width,
        )
    }

    /// Direction for the decorated subtree, given the direction of the parent.
    fn layout_direction(&self, layout_direction: LayoutDirection) -> LayoutDirection {
        layout_direction
    }

    fn debug_name(&self) -> &str {
        "LayoutModifier"
    }
}

/// Direction-parameterized dispatch into [`LayoutModifier`] callbacks.
///
/// Each helper hands the callback a scope whose direction is exactly
/// `layout_direction`, so the measure pass and all four intrinsic queries observe the
/// same value for a given call site.
impl MeasureScope {
    /// Runs the transform pipeline of `modifier` around `measurable`.
    ///
    /// Constraints are transformed, the wrapped content is measured with them, and the
    /// size and position transforms produce the result. The content is placed at the
    /// computed position as is; the position is not mirrored again at placement time.
    /// The result carries no alignment lines.
    pub fn measure_transformed(
        &self,
        modifier: &dyn TransformLayoutModifier,
        measurable: &dyn Measurable,
        constraints: Constraints,
        layout_direction: LayoutDirection,
    ) -> MeasureResult {
        let child_constraints = modifier.modify_constraints(constraints, layout_direction);
        let placeable = measurable.measure(child_constraints, layout_direction);
        let child_size = placeable.size();
        let size = modifier.modify_size(constraints, layout_direction, child_size);
        let position = modifier.modify_position(child_size, size, layout_direction);
        self.with_layout_direction(layout_direction)
            .layout(size.width, size.height, move |placement| {
                placement.place_absolute(&placeable, position.x, position.y);
            })
    }

    pub fn measure_with(
        &self,
        modifier: &dyn LayoutModifier,
        measurable: &dyn Measurable,
        constraints: Constraints,
        layout_direction: LayoutDirection,
    ) -> MeasureResult {
        modifier.measure(
            &self.with_layout_direction(layout_direction),
            measurable,
            constraints,
        )
    }

    pub fn min_intrinsic_width_with(
        &self,
        modifier: &dyn LayoutModifier,
        measurable: &dyn Measurable,
        height: f32,
        layout_direction: LayoutDirection,
    ) -> f32 {
        modifier.min_intrinsic_width(
            &self.with_layout_direction(layout_direction),
            measurable,
            height,
        )
    }

    pub fn max_intrinsic_width_with(
        &self,
        modifier: &dyn LayoutModifier,
        measurable: &dyn Measurable,
        height: f32,
        layout_direction: LayoutDirection,
    ) -> f32 {
        modifier.max_intrinsic_width(
            &self.with_layout_direction(layout_direction),
            measurable,
            height,
        )
    }

    pub fn min_intrinsic_height_with(
        &self,
        modifier: &dyn LayoutModifier,
        measurable: &dyn Measurable,
        width: f32,
        layout_direction: LayoutDirection,
    ) -> f32 {
        modifier.min_intrinsic_height(
            &self.with_layout_direction(layout_direction),
            measurable,
            width,
        )
    }

    pub fn max_intrinsic_height_with(
        &self,
        modifier: &dyn LayoutModifier,
        measurable: &dyn Measurable,
        width: f32,
        layout_direction: LayoutDirection,
    ) -> f32 {
        modifier.max_intrinsic_height(
            &self.with_layout_direction(layout_direction),
            measurable,
            width,
        )
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
