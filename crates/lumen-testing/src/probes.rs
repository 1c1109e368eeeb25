//! Policies and modifiers that record what a layout pass showed them.
//!
//! Probes write into [`Captured`] slots that the test keeps a clone of, so the
//! values stay readable after the node has been moved into a tree.

use std::cell::Cell;
use std::rc::Rc;

use lumen_ui_graphics::Size;
use lumen_ui_layout::{
    AlignmentLines, Constraints, LayoutDirection, LayoutModifier, Measurable, MeasurePolicy,
    MeasureResult, MeasureScope, Placeable,
};
use smallvec::SmallVec;

/// Shared slot written from inside a layout callback.
#[derive(Debug)]
pub struct Captured<T: Copy> {
    value: Rc<Cell<Option<T>>>,
}

impl<T: Copy> Captured<T> {
    pub fn new() -> Self {
        Self {
            value: Rc::new(Cell::new(None)),
        }
    }

    pub fn set(&self, value: T) {
        self.value.set(Some(value));
    }

    pub fn get(&self) -> Option<T> {
        self.value.get()
    }

    pub fn is_set(&self) -> bool {
        self.value.get().is_some()
    }

    pub fn reset(&self) {
        self.value.set(None);
    }
}

impl<T: Copy> Clone for Captured<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
        }
    }
}

impl<T: Copy> Default for Captured<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Directions observed by each layout entry point of a probe.
#[derive(Clone, Debug, Default)]
pub struct DirectionProbe {
    pub measure: Captured<LayoutDirection>,
    pub min_intrinsic_width: Captured<LayoutDirection>,
    pub max_intrinsic_width: Captured<LayoutDirection>,
    pub min_intrinsic_height: Captured<LayoutDirection>,
    pub max_intrinsic_height: Captured<LayoutDirection>,
    pub placement: Captured<LayoutDirection>,
}

impl DirectionProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observations of measure and the four intrinsic queries, in that order.
    pub fn entry_points(&self) -> [Option<LayoutDirection>; 5] {
        [
            self.measure.get(),
            self.min_intrinsic_width.get(),
            self.max_intrinsic_width.get(),
            self.min_intrinsic_height.get(),
            self.max_intrinsic_height.get(),
        ]
    }

    pub fn reset(&self) {
        self.measure.reset();
        self.min_intrinsic_width.reset();
        self.max_intrinsic_width.reset();
        self.min_intrinsic_height.reset();
        self.max_intrinsic_height.reset();
        self.placement.reset();
    }
}

/// Content policy with a preferred size that records the directions it sees.
///
/// Children are measured with loosened constraints and placed at the start edge.
/// Every intrinsic query answers with the preferred size.
pub struct ProbePolicy {
    size: Size,
    probe: DirectionProbe,
    alignment_lines: AlignmentLines,
}

impl ProbePolicy {
    pub fn new(size: Size, probe: DirectionProbe) -> Self {
        Self {
            size,
            probe,
            alignment_lines: AlignmentLines::default(),
        }
    }

    pub fn with_alignment_lines(mut self, alignment_lines: AlignmentLines) -> Self {
        self.alignment_lines = alignment_lines;
        self
    }
}

impl MeasurePolicy for ProbePolicy {
    fn measure(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        constraints: Constraints,
    ) -> MeasureResult {
        let layout_direction = scope.layout_direction();
        self.probe.measure.set(layout_direction);
        let placeables: SmallVec<[Placeable; 4]> = measurables
            .iter()
            .map(|measurable| measurable.measure(constraints.loosen(), layout_direction))
            .collect();
        let size = constraints.constrain_size(self.size);
        let placement_probe = self.probe.placement.clone();
        scope.layout_with_lines(
            size.width,
            size.height,
            self.alignment_lines.clone(),
            move |placement| {
                placement_probe.set(placement.layout_direction());
                for placeable in &placeables {
                    placement.place_relative(placeable, 0.0, 0.0);
                }
            },
        )
    }

    fn min_intrinsic_width(&self, scope: &MeasureScope, _: &[&dyn Measurable], _: f32) -> f32 {
        self.probe.min_intrinsic_width.set(scope.layout_direction());
        self.size.width
    }

    fn max_intrinsic_width(&self, scope: &MeasureScope, _: &[&dyn Measurable], _: f32) -> f32 {
        self.probe.max_intrinsic_width.set(scope.layout_direction());
        self.size.width
    }

    fn min_intrinsic_height(&self, scope: &MeasureScope, _: &[&dyn Measurable], _: f32) -> f32 {
        self.probe.min_intrinsic_height.set(scope.layout_direction());
        self.size.height
    }

    fn max_intrinsic_height(&self, scope: &MeasureScope, _: &[&dyn Measurable], _: f32) -> f32 {
        self.probe.max_intrinsic_height.set(scope.layout_direction());
        self.size.height
    }

    fn debug_name(&self) -> &str {
        "ProbePolicy"
    }
}

/// Pass-through layout modifier that records the directions it sees.
///
/// Optionally reports extra alignment lines from its own measurement.
pub struct ProbeModifier {
    probe: DirectionProbe,
    alignment_lines: AlignmentLines,
}

impl ProbeModifier {
    pub fn new(probe: DirectionProbe) -> Self {
        Self {
            probe,
            alignment_lines: AlignmentLines::default(),
        }
    }

    pub fn with_alignment_lines(mut self, alignment_lines: AlignmentLines) -> Self {
        self.alignment_lines = alignment_lines;
        self
    }
}

impl LayoutModifier for ProbeModifier {
    fn measure(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> MeasureResult {
        let layout_direction = scope.layout_direction();
        self.probe.measure.set(layout_direction);
        let placeable = measurable.measure(constraints, layout_direction);
        let placement_probe = self.probe.placement.clone();
        scope.layout_with_lines(
            placeable.width(),
            placeable.height(),
            self.alignment_lines.clone(),
            move |placement| {
                placement_probe.set(placement.layout_direction());
                placement.place_relative(&placeable, 0.0, 0.0);
            },
        )
    }

    fn min_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        self.probe.min_intrinsic_width.set(scope.layout_direction());
        measurable.min_intrinsic_width(height, scope.layout_direction())
    }

    fn max_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        self.probe.max_intrinsic_width.set(scope.layout_direction());
        measurable.max_intrinsic_width(height, scope.layout_direction())
    }

    fn min_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        self.probe.min_intrinsic_height.set(scope.layout_direction());
        measurable.min_intrinsic_height(width, scope.layout_direction())
    }

    fn max_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        self.probe.max_intrinsic_height.set(scope.layout_direction());
        measurable.max_intrinsic_height(width, scope.layout_direction())
    }

    fn debug_name(&self) -> &str {
        "ProbeModifier"
    }
}

#[cfg(test)]
#[path = "tests/probes_tests.rs"]
mod tests;
