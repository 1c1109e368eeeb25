//! Innermost wrapper of every chain: runs the node's measure policy.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use lumen_ui_graphics::{with_translation, Canvas, Point, Size};
use lumen_ui_layout::{
    AlignmentLine, Constraints, LayoutDirection, Measurable, MeasurePolicy, MeasureResult,
    MeasureScope, NodeId, Placeable,
};
use smallvec::SmallVec;

use super::placement::ChildrenPlacementScope;
use super::wrapper::{draw_layout_bounds, LayoutNodeWrapper, INNER_BOUNDS_COLOR};
use super::LayoutNode;
use crate::owner::Owner;

type ChildMeasurables<'a> = SmallVec<[&'a dyn Measurable; 8]>;

/// Wrapper around a node's own content. Owns the node's children.
pub struct InnerNodeWrapper {
    node_id: NodeId,
    measure_policy: Rc<dyn MeasurePolicy>,
    children: Vec<LayoutNode>,
    layout_direction: Cell<Option<LayoutDirection>>,
    measured_direction: Cell<Option<LayoutDirection>>,
    measure_result: RefCell<Option<MeasureResult>>,
    position: Cell<Point>,
}

impl InnerNodeWrapper {
    pub fn new(
        node_id: NodeId,
        measure_policy: Rc<dyn MeasurePolicy>,
        children: Vec<LayoutNode>,
    ) -> Self {
        Self {
            node_id,
            measure_policy,
            children,
            layout_direction: Cell::new(None),
            measured_direction: Cell::new(None),
            measure_result: RefCell::new(None),
            position: Cell::new(Point::ZERO),
        }
    }

    fn measurables(&self) -> ChildMeasurables<'_> {
        self.children
            .iter()
            .map(|child| child as &dyn Measurable)
            .collect()
    }

    fn scope(&self, layout_direction: LayoutDirection) -> MeasureScope {
        self.layout_direction.set(Some(layout_direction));
        MeasureScope::new(layout_direction)
    }
}

impl Measurable for InnerNodeWrapper {
    fn measure(&self, constraints: Constraints, layout_direction: LayoutDirection) -> Placeable {
        let scope = self.scope(layout_direction);
        log::trace!(
            "measure node #{} content {}: direction={:?} {:?}",
            self.node_id,
            self.measure_policy.debug_name(),
            layout_direction,
            constraints
        );
        let result = self
            .measure_policy
            .measure(&scope, &self.measurables(), constraints);
        let placeable = Placeable::new(result.width, result.height, self.node_id);
        *self.measure_result.borrow_mut() = Some(result);
        self.measured_direction.set(Some(layout_direction));
        placeable
    }

    fn min_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32 {
        let scope = self.scope(layout_direction);
        self.measure_policy
            .min_intrinsic_width(&scope, &self.measurables(), height)
    }

    fn max_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32 {
        let scope = self.scope(layout_direction);
        self.measure_policy
            .max_intrinsic_width(&scope, &self.measurables(), height)
    }

    fn min_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32 {
        let scope = self.scope(layout_direction);
        self.measure_policy
            .min_intrinsic_height(&scope, &self.measurables(), width)
    }

    fn max_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32 {
        let scope = self.scope(layout_direction);
        self.measure_policy
            .max_intrinsic_height(&scope, &self.measurables(), width)
    }

    fn get(&self, line: AlignmentLine) -> Option<f32> {
        self.measure_result
            .borrow()
            .as_ref()
            .and_then(|result| result.alignment_lines.get(&line).copied())
    }
}

impl LayoutNodeWrapper for InnerNodeWrapper {
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
                "content of node #{} was placed before it was measured",
                self.node_id
            );
        };
        let mut scope = ChildrenPlacementScope {
            node_id: self.node_id,
            children: &self.children,
            layout_direction: self.measured_direction.get().unwrap_or_default(),
            parent_width: result.width,
        };
        result.place_children(&mut scope);
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
            for child in &self.children {
                child.draw(canvas, owner);
            }
            if owner.show_layout_bounds() {
                if let Some(size) = self.try_measured_size() {
                    draw_layout_bounds(canvas, size, INNER_BOUNDS_COLOR);
                }
            }
        });
    }

    fn wrapped(&self) -> Option<&dyn LayoutNodeWrapper> {
        None
    }

    fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [LayoutNode] {
        &mut self.children
    }

    fn into_inner(self: Box<Self>) -> Box<InnerNodeWrapper> {
        self
    }

    fn debug_name(&self) -> &str {
        self.measure_policy.debug_name()
    }
}
