use lumen_ui_graphics::{Point, Size};
use lumen_ui_layout::{
    Alignment, Constraints, Measurable, MeasurePolicy, MeasureResult, MeasureScope, Placeable,
};
use smallvec::SmallVec;

/// MeasurePolicy for Stack layout - overlays children according to alignment.
///
/// Start and end alignments follow the layout direction of the scope.
#[derive(Clone, Debug, PartialEq)]
pub struct StackMeasurePolicy {
    pub content_alignment: Alignment,
    pub propagate_min_constraints: bool,
}

impl StackMeasurePolicy {
    pub fn new(content_alignment: Alignment, propagate_min_constraints: bool) -> Self {
        Self {
            content_alignment,
            propagate_min_constraints,
        }
    }
}

impl Default for StackMeasurePolicy {
    fn default() -> Self {
        Self::new(Alignment::TOP_START, false)
    }
}

impl MeasurePolicy for StackMeasurePolicy {
    fn measure(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        constraints: Constraints,
    ) -> MeasureResult {
        let child_constraints = if self.propagate_min_constraints {
            constraints
        } else {
            constraints.loosen()
        };
        let layout_direction = scope.layout_direction();

        let mut max_width = 0.0_f32;
        let mut max_height = 0.0_f32;
        let mut placeables: SmallVec<[Placeable; 8]> = SmallVec::with_capacity(measurables.len());

        for measurable in measurables {
            let placeable = measurable.measure(child_constraints, layout_direction);
            max_width = max_width.max(placeable.width());
            max_height = max_height.max(placeable.height());
            placeables.push(placeable);
        }

        let width = max_width.clamp(constraints.min_width, constraints.max_width);
        let height = max_height.clamp(constraints.min_height, constraints.max_height);

        let available = Size::new(width, height);
        let positions: SmallVec<[(Placeable, Point); 8]> = placeables
            .into_iter()
            .map(|placeable| {
                let position =
                    self.content_alignment
                        .align(available, placeable.size(), layout_direction);
                (placeable, position)
            })
            .collect();

        scope.layout(width, height, move |placement| {
            for (placeable, position) in &positions {
                placement.place_absolute(placeable, position.x, position.y);
            }
        })
    }

    fn min_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        height: f32,
    ) -> f32 {
        measurables
            .iter()
            .map(|m| m.min_intrinsic_width(height, scope.layout_direction()))
            .fold(0.0, f32::max)
    }

    fn max_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        height: f32,
    ) -> f32 {
        measurables
            .iter()
            .map(|m| m.max_intrinsic_width(height, scope.layout_direction()))
            .fold(0.0, f32::max)
    }

    fn min_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        width: f32,
    ) -> f32 {
        measurables
            .iter()
            .map(|m| m.min_intrinsic_height(width, scope.layout_direction()))
            .fold(0.0, f32::max)
    }

    fn max_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        width: f32,
    ) -> f32 {
        measurables
            .iter()
            .map(|m| m.max_intrinsic_height(width, scope.layout_direction()))
            .fold(0.0, f32::max)
    }

    fn debug_name(&self) -> &str {
        "StackMeasurePolicy"
    }
}

/// Policy for nodes without children: reports the smallest allowed size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EmptyMeasurePolicy;

impl MeasurePolicy for EmptyMeasurePolicy {
    fn measure(
        &self,
        scope: &MeasureScope,
        _measurables: &[&dyn Measurable],
        constraints: Constraints,
    ) -> MeasureResult {
        scope.layout(constraints.min_width, constraints.min_height, |_| {})
    }

    fn min_intrinsic_width(&self, _: &MeasureScope, _: &[&dyn Measurable], _: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_width(&self, _: &MeasureScope, _: &[&dyn Measurable], _: f32) -> f32 {
        0.0
    }

    fn min_intrinsic_height(&self, _: &MeasureScope, _: &[&dyn Measurable], _: f32) -> f32 {
        0.0
    }

    fn max_intrinsic_height(&self, _: &MeasureScope, _: &[&dyn Measurable], _: f32) -> f32 {
        0.0
    }

    fn debug_name(&self) -> &str {
        "EmptyMeasurePolicy"
    }
}

#[cfg(test)]
#[path = "tests/policies_tests.rs"]
mod tests;
