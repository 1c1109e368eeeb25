//! Core layout traits and types shared by Lumen wrappers and policies.

use crate::alignment_line::{AlignmentLine, AlignmentLines};
use crate::constraints::Constraints;
use crate::direction::LayoutDirection;
use crate::intrinsics;
use lumen_ui_graphics::Size;
use std::fmt;

/// Identifier of a layout node.
pub type NodeId = usize;

/// Object capable of measuring a layout child and exposing intrinsic sizes.
///
/// Every query takes the layout direction explicitly; implementations never read
/// it from anywhere else.
pub trait Measurable {
    /// Measures the child with the provided constraints, returning a [`Placeable`].
    fn measure(&self, constraints: Constraints, layout_direction: LayoutDirection) -> Placeable;

    /// Returns the minimum width achievable for the given height.
    fn min_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32;

    /// Returns the maximum width achievable for the given height.
    fn max_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32;

    /// Returns the minimum height achievable for the given width.
    fn min_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32;

    /// Returns the maximum height achievable for the given width.
    fn max_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32;

    /// Returns the offset of `line` reported by the last measurement, if any.
    fn get(&self, _line: AlignmentLine) -> Option<f32> {
        None
    }
}

/// Result of running a measurement pass for a single child.
///
/// Placing happens through a [`PlacementScope`] inside the parent's placement block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placeable {
    width: f32,
    height: f32,
    node_id: Option<NodeId>,
}

impl Placeable {
    pub fn new(width: f32, height: f32, node_id: NodeId) -> Self {
        Self {
            width,
            height,
            node_id: Some(node_id),
        }
    }

    /// Placeholder produced while answering an intrinsic query. It cannot be placed.
    pub fn intrinsic(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            node_id: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the identifier for the underlying layout node.
    pub fn node_id(&self) -> Option<NodeId> {
        self.node_id
    }
}

/// Scope handed to a placement block.
pub trait PlacementScope {
    /// Direction the placement runs in.
    fn layout_direction(&self) -> LayoutDirection;

    /// Width of the parent, used to mirror relative placements.
    fn parent_width(&self) -> f32;

    /// Places `placeable` at `(x, y)` regardless of the layout direction.
    fn place_absolute(&mut self, placeable: &Placeable, x: f32, y: f32);

    /// Places `placeable` at `(x, y)` measured from the start edge; mirrored in RTL.
    fn place_relative(&mut self, placeable: &Placeable, x: f32, y: f32) {
        let x = match self.layout_direction() {
            LayoutDirection::Ltr => x,
            LayoutDirection::Rtl => self.parent_width() - placeable.width() - x,
        };
        self.place_absolute(placeable, x, y);
    }
}

/// Deferred placement of the measured children.
pub type PlacementBlock = Box<dyn FnOnce(&mut dyn PlacementScope)>;

/// Result of a measurement operation.
pub struct MeasureResult {
    pub width: f32,
    pub height: f32,
    pub alignment_lines: AlignmentLines,
    placement: Option<PlacementBlock>,
}

impl MeasureResult {
    pub fn new(
        width: f32,
        height: f32,
        alignment_lines: AlignmentLines,
        place: impl FnOnce(&mut dyn PlacementScope) + 'static,
    ) -> Self {
        Self {
            width,
            height,
            alignment_lines,
            placement: Some(Box::new(place)),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Runs the placement block. Returns `false` if it already ran for this result.
    pub fn place_children(&mut self, scope: &mut dyn PlacementScope) -> bool {
        match self.placement.take() {
            Some(place) => {
                place(scope);
                true
            }
            None => false,
        }
    }

    /// True once [`MeasureResult::place_children`] has run.
    pub fn is_placed(&self) -> bool {
        self.placement.is_none()
    }
}

impl fmt::Debug for MeasureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasureResult")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("alignment_lines", &self.alignment_lines)
            .field("placed", &self.is_placed())
            .finish()
    }
}

/// Scope for measurement operations.
///
/// Carries the layout direction that was resolved for the current subtree. Modifier
/// callbacks and policies read the direction from here and pass it on explicitly when
/// they measure or query their children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeasureScope {
    layout_direction: LayoutDirection,
}

impl MeasureScope {
    pub fn new(layout_direction: LayoutDirection) -> Self {
        Self { layout_direction }
    }

    /// Returns a copy of this scope with `layout_direction` as its direction.
    pub fn with_layout_direction(self, layout_direction: LayoutDirection) -> Self {
        Self { layout_direction }
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    /// Builds a result without alignment lines.
    pub fn layout(
        &self,
        width: f32,
        height: f32,
        place: impl FnOnce(&mut dyn PlacementScope) + 'static,
    ) -> MeasureResult {
        MeasureResult::new(width, height, AlignmentLines::default(), place)
    }

    /// Builds a result that reports `alignment_lines`.
    pub fn layout_with_lines(
        &self,
        width: f32,
        height: f32,
        alignment_lines: AlignmentLines,
        place: impl FnOnce(&mut dyn PlacementScope) + 'static,
    ) -> MeasureResult {
        MeasureResult::new(width, height, alignment_lines, place)
    }
}

/// Policy responsible for measuring and placing the children of a layout node.
///
/// The intrinsic queries default to running [`MeasurePolicy::measure`] against
/// placeholders that report the children's intrinsic sizes.
pub trait MeasurePolicy {
    /// Runs the measurement pass with the provided children and constraints.
    fn measure(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        constraints: Constraints,
    ) -> MeasureResult;

    fn min_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        height: f32,
    ) -> f32 {
        intrinsics::min_width(
            |placeholders, constraints| self.measure(scope, placeholders, constraints),
            measurables,
            height,
        )
    }

    fn max_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        height: f32,
    ) -> f32 {
        intrinsics::max_width(
            |placeholders, constraints| self.measure(scope, placeholders, constraints),
            measurables,
            height,
        )
    }

    fn min_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        width: f32,
    ) -> f32 {
        intrinsics::min_height(
            |placeholders, constraints| self.measure(scope, placeholders, constraints),
            measurables,
            width,
        )
    }

    fn max_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        width: f32,
    ) -> f32 {
        intrinsics::max_height(
            |placeholders, constraints| self.measure(scope, placeholders, constraints),
            measurables,
            width,
        )
    }

    fn debug_name(&self) -> &str {
        "MeasurePolicy"
    }
}

/// [`MeasurePolicy`] backed by a measure closure.
pub struct MeasurePolicyFn<F> {
    measure: F,
}

impl<F> MeasurePolicyFn<F>
where
    F: Fn(&MeasureScope, &[&dyn Measurable], Constraints) -> MeasureResult,
{
    pub fn new(measure: F) -> Self {
        Self { measure }
    }
}

impl<F> MeasurePolicy for MeasurePolicyFn<F>
where
    F: Fn(&MeasureScope, &[&dyn Measurable], Constraints) -> MeasureResult,
{
    fn measure(
        &self,
        scope: &MeasureScope,
        measurables: &[&dyn Measurable],
        constraints: Constraints,
    ) -> MeasureResult {
        (self.measure)(scope, measurables, constraints)
    }

    fn debug_name(&self) -> &str {
        "MeasurePolicyFn"
    }
}

#[cfg(test)]
#[path = "tests/core_tests.rs"]
mod tests;
