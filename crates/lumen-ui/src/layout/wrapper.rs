//! Wrapper chain that drives measurement, placement and drawing of a layout node.
//!
//! Every node owns a singly-linked chain of wrappers. The outermost wrapper is the
//! node's [`Measurable`]; each [`ModifiedLayoutNodeWrapper`] owns the wrapper it
//! decorates and the chain always ends in an [`InnerNodeWrapper`] that runs the node's
//! measure policy.
//!
//! **Direction**: the layout direction is passed into every entry point as an argument.
//! A wrapper resolves it against its modifier, remembers the result and hands the
//! resolved value to everything it calls. Nothing below a wrapper can observe a
//! direction other than the one passed in or the wrapper's own override.

use std::cell::{Cell, RefCell};

use lumen_ui_graphics::{with_translation, Canvas, Color, Paint, Point, Rect, Size};
use lumen_ui_layout::{
    AlignmentLine, Constraints, LayoutDirection, Measurable, MeasureResult, MeasureScope, NodeId,
    Placeable,
};

use super::inner::InnerNodeWrapper;
use super::placement::WrappedPlacementScope;
use super::LayoutNode;
use crate::modifier::LayoutModifierStyle;
use crate::owner::Owner;

/// Color of the debug border drawn around modifier wrappers.
pub const MODIFIER_BOUNDS_COLOR: Color = Color::BLUE;
/// Color of the debug border drawn around a node's content.
pub const INNER_BOUNDS_COLOR: Color = Color::RED;
/// Stroke width of debug borders.
pub const LAYOUT_BOUNDS_STROKE_WIDTH: f32 = 1.0;

/// Element of a layout node's wrapper chain.
pub trait LayoutNodeWrapper: Measurable {
    /// Id of the node this wrapper belongs to.
    fn node_id(&self) -> NodeId;

    fn as_measurable(&self) -> &dyn Measurable;

    /// Size from the last measurement, or `None` before the first one.
    fn try_measured_size(&self) -> Option<Size>;

    /// Size from the last measurement.
    ///
    /// # Panics
    ///
    /// Panics if the wrapper has never been measured.
    fn measured_size(&self) -> Size {
        match self.try_measured_size() {
            Some(size) => size,
            None => panic!(
                "{} of node #{} was read before it was measured",
                self.debug_name(),
                self.node_id()
            ),
        }
    }

    /// Position relative to the wrapper (or parent content) that placed this one.
    fn position(&self) -> Point;

    /// Moves this wrapper to `position` and places whatever it wraps.
    ///
    /// The placement of the wrapped content runs once per measurement; placing again
    /// without remeasuring only moves this wrapper.
    ///
    /// # Panics
    ///
    /// Panics if the wrapper has never been measured.
    fn place_at(&self, position: Point);

    /// Direction resolved at the last entry point, `None` before any query.
    fn layout_direction(&self) -> Option<LayoutDirection>;

    /// Direction the current measurement ran with. Intrinsic queries do not change it.
    fn measured_layout_direction(&self) -> Option<LayoutDirection>;

    /// True once the placement block of the current measurement has run.
    fn is_placed(&self) -> bool;

    fn draw(&self, canvas: &mut dyn Canvas, owner: &Owner);

    /// The wrapper this one decorates. `None` for the inner wrapper.
    fn wrapped(&self) -> Option<&dyn LayoutNodeWrapper>;

    fn children(&self) -> &[LayoutNode];

    fn children_mut(&mut self) -> &mut [LayoutNode];

    /// Unlinks the chain and returns the inner wrapper, which keeps the children.
    fn into_inner(self: Box<Self>) -> Box<InnerNodeWrapper>;

    fn debug_name(&self) -> &str;
}

/// Decorates one wrapped wrapper with one layout modifier.
pub struct ModifiedLayoutNodeWrapper {
    node_id: NodeId,
    modifier: LayoutModifierStyle,
    wrapped: Box<dyn LayoutNodeWrapper>,
    layout_direction: Cell<Option<LayoutDirection>>,
    measured_direction: Cell<Option<LayoutDirection>>,
    measure_result: RefCell<Option<MeasureResult>>,
    position: Cell<Point>,
}

impl ModifiedLayoutNodeWrapper {
    pub fn new(
        node_id: NodeId,
        modifier: LayoutModifierStyle,
        wrapped: Box<dyn LayoutNodeWrapper>,
    ) -> Self {
        Self {
            node_id,
            modifier,
            wrapped,
            layout_direction: Cell::new(None),
            measured_direction: Cell::new(None),
            measure_result: RefCell::new(None),
            position: Cell::new(Point::ZERO),
        }
    }

    /// Resolves the direction for this wrapper's subtree from the ambient one,
    /// stores it and returns it.
    pub fn update_layout_direction(&self, ambient: LayoutDirection) -> LayoutDirection {
        let resolved = self.modifier.resolve_layout_direction(ambient);
        if resolved != ambient {
            log::debug!(
                "node #{} {}: overriding layout direction {:?} -> {:?}",
                self.node_id,
                self.modifier.debug_name(),
                ambient,
                resolved
            );
        }
        self.layout_direction.set(Some(resolved));
        resolved
    }

    fn scope(layout_direction: LayoutDirection) -> MeasureScope {
        MeasureScope::new(layout_direction)
    }

    fn perform_measure(
        &self,
        constraints: Constraints,
        layout_direction: LayoutDirection,
    ) -> MeasureResult {
        match &self.modifier {
            LayoutModifierStyle::Callback(modifier) => Self::scope(layout_direction).measure_with(
                modifier.as_ref(),
                self.wrapped.as_measurable(),
                constraints,
                layout_direction,
            ),
            LayoutModifierStyle::Transform(modifier) => Self::scope(layout_direction)
                .measure_transformed(
                    modifier.as_ref(),
                    self.wrapped.as_measurable(),
                    constraints,
                    layout_direction,
                ),
        }
    }
}

impl Measurable for ModifiedLayoutNodeWrapper {
    fn measure(&self, constraints: Constraints, layout_direction: LayoutDirection) -> Placeable {
        let resolved = self.update_layout_direction(layout_direction);
        log::trace!(
            "measure node #{} {}: ambient={:?} resolved={:?} {:?}",
            self.node_id,
            self.modifier.debug_name(),
            layout_direction,
            resolved,
            constraints
        );
        let result = self.perform_measure(constraints, resolved);
        let placeable = Placeable::new(result.width, result.height, self.node_id);
        *self.measure_result.borrow_mut() = Some(result);
        self.measured_direction.set(Some(resolved));
        placeable
    }

    fn min_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32 {
        let resolved = self.update_layout_direction(layout_direction);
        match &self.modifier {
            LayoutModifierStyle::Callback(modifier) => Self::scope(resolved)
                .min_intrinsic_width_with(
                    modifier.as_ref(),
                    self.wrapped.as_measurable(),
                    height,
                    resolved,
                ),
            LayoutModifierStyle::Transform(modifier) => {
                modifier.min_intrinsic_width_of(self.wrapped.as_measurable(), height, resolved)
            }
        }
    }

    fn max_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32 {
        let resolved = self.update_layout_direction(layout_direction);
        match &self.modifier {
            LayoutModifierStyle::Callback(modifier) => Self::scope(resolved)
                .max_intrinsic_width_with(
                    modifier.as_ref(),
                    self.wrapped.as_measurable(),
                    height,
                    resolved,
                ),
            LayoutModifierStyle::Transform(modifier) => {
                modifier.max_intrinsic_width_of(self.wrapped.as_measurable(), height, resolved)
            }
        }
    }

    fn min_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32 {
        let resolved = self.update_layout_direction(layout_direction);
        match &self.modifier {
            LayoutModifierStyle::Callback(modifier) => Self::scope(resolved)
                .min_intrinsic_height_with(
                    modifier.as_ref(),
                    self.wrapped.as_measurable(),
                    width,
                    resolved,
                ),
            LayoutModifierStyle::Transform(modifier) => {
                modifier.min_intrinsic_height_of(self.wrapped.as_measurable(), width, resolved)
            }
        }
    }

    fn max_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32 {
        let resolved = self.update_layout_direction(layout_direction);
        match &self.modifier {
            LayoutModifierStyle::Callback(modifier) => Self::scope(resolved)
                .max_intrinsic_height_with(
                    modifier.as_ref(),
                    self.wrapped.as_measurable(),
                    width,
                    resolved,
                ),
            LayoutModifierStyle::Transform(modifier) => {
                modifier.max_intrinsic_height_of(self.wrapped.as_measurable(), width, resolved)
            }
        }
    }

    fn get(&self, line: AlignmentLine) -> Option<f32> {
        match &self.modifier {
            LayoutModifierStyle::Callback(_) => {
                let own = self
                    .measure_result
                    .borrow()
                    .as_ref()
                    .and_then(|result| result.alignment_lines.get(&line).copied());
                own.or_else(|| self.wrapped.get(line))
            }
            LayoutModifierStyle::Transform(modifier) => {
                let layout_direction = self.measured_direction.get().unwrap_or_default();
                modifier.modify_alignment_line(line, self.wrapped.get(line), layout_direction)
            }
        }
    }
}

impl LayoutNodeWrapper for ModifiedLayoutNodeWrapper {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn as_measurable(&self) -> &dyn Measurable {
        self
    }

    fn try_measured_size(&self) -> Option<Size> {
        self.measure_result.borrow().as_ref().map(MeasureResult::size)
    }

    fn position(&self) -> Point {
        self.position.get()
    }

    fn place_at(&self, position: Point) {
        self.position.set(position);
        let mut slot = self.measure_result.borrow_mut();
        let Some(result) = slot.as_mut() else {
            panic!(
                "{} of node #{} was placed before it was measured",
                self.modifier.debug_name(),
                self.node_id
            );
        };
        let mut scope = WrappedPlacementScope {
            node_id: self.node_id,
            wrapped: self.wrapped.as_ref(),
            layout_direction: self.measured_direction.get().unwrap_or_default(),
            parent_width: result.width,
        };
        if result.place_children(&mut scope) && !self.wrapped.is_placed() {
            log::warn!(
                "node #{} {}: placement finished without placing the wrapped {}",
                self.node_id,
                self.modifier.debug_name(),
                self.wrapped.debug_name()
            );
        }
    }

    fn layout_direction(&self) -> Option<LayoutDirection> {
        self.layout_direction.get()
    }

    fn measured_layout_direction(&self) -> Option<LayoutDirection> {
        self.measured_direction.get()
    }

    fn is_placed(&self) -> bool {
        self.measure_result
            .borrow()
            .as_ref()
            .is_some_and(MeasureResult::is_placed)
    }

    fn draw(&self, canvas: &mut dyn Canvas, owner: &Owner) {
        with_translation(canvas, self.position.get(), |canvas| {
            self.wrapped.draw(canvas, owner);
            if owner.show_layout_bounds() {
                if let Some(size) = self.try_measured_size() {
                    draw_layout_bounds(canvas, size, MODIFIER_BOUNDS_COLOR);
                }
            }
        });
    }

    fn wrapped(&self) -> Option<&dyn LayoutNodeWrapper> {
        Some(self.wrapped.as_ref())
    }

    fn children(&self) -> &[LayoutNode] {
        self.wrapped.children()
    }

    fn children_mut(&mut self) -> &mut [LayoutNode] {
        self.wrapped.children_mut()
    }

    fn into_inner(self: Box<Self>) -> Box<InnerNodeWrapper> {
        self.wrapped.into_inner()
    }

    fn debug_name(&self) -> &str {
        self.modifier.debug_name()
    }
}

/// Strokes a border just inside `size`, in local coordinates.
pub(crate) fn draw_layout_bounds(canvas: &mut dyn Canvas, size: Size, color: Color) {
    let rect = Rect::from_size(size).inset(LAYOUT_BOUNDS_STROKE_WIDTH / 2.0);
    canvas.draw_rect(rect, &Paint::stroke(color, LAYOUT_BOUNDS_STROKE_WIDTH));
}
