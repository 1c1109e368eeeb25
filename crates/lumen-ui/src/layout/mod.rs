//! Layout nodes and the tree that measures them.
//!
//! A [`LayoutNode`] owns its wrapper chain: one [`ModifiedLayoutNodeWrapper`] per
//! modifier element, ending in an [`InnerNodeWrapper`] that owns the node's children.
//! The [`LayoutTree`] feeds the locale direction into the root and remeasures when the
//! direction, a modifier or the root changes.

mod inner;
mod placement;
pub mod policies;
mod wrapper;

use std::iter;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lumen_ui_graphics::{Canvas, Point, Size};
use lumen_ui_layout::{
    AlignmentLine, Constraints, LayoutDirection, Measurable, MeasurePolicy, NodeId, Placeable,
};

use crate::error::LayoutError;
use crate::modifier::Modifier;
use crate::owner::Owner;

pub use inner::InnerNodeWrapper;
pub use policies::{EmptyMeasurePolicy, StackMeasurePolicy};
pub use wrapper::{
    LayoutNodeWrapper, ModifiedLayoutNodeWrapper, INNER_BOUNDS_COLOR,
    LAYOUT_BOUNDS_STROKE_WIDTH, MODIFIER_BOUNDS_COLOR,
};

static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(1);

fn next_node_id() -> NodeId {
    NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Builds the wrapper chain for `modifier` around `inner`, outermost element first.
fn build_chain(
    node_id: NodeId,
    modifier: &Modifier,
    inner: Box<InnerNodeWrapper>,
) -> Box<dyn LayoutNodeWrapper> {
    modifier.fold_out(inner as Box<dyn LayoutNodeWrapper>, |wrapped, element| {
        Box::new(ModifiedLayoutNodeWrapper::new(node_id, element.clone(), wrapped))
    })
}

/// A node in the layout tree.
pub struct LayoutNode {
    id: NodeId,
    modifier: Modifier,
    measure_policy: Rc<dyn MeasurePolicy>,
    outer: Box<dyn LayoutNodeWrapper>,
}

impl LayoutNode {
    pub fn new(
        modifier: Modifier,
        measure_policy: impl MeasurePolicy + 'static,
        children: Vec<LayoutNode>,
    ) -> Self {
        Self::with_policy(modifier, Rc::new(measure_policy), children)
    }

    pub fn with_policy(
        modifier: Modifier,
        measure_policy: Rc<dyn MeasurePolicy>,
        children: Vec<LayoutNode>,
    ) -> Self {
        let id = next_node_id();
        let inner = Box::new(InnerNodeWrapper::new(
            id,
            Rc::clone(&measure_policy),
            children,
        ));
        let outer = build_chain(id, &modifier, inner);
        Self {
            id,
            modifier,
            measure_policy,
            outer,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn modifier(&self) -> &Modifier {
        &self.modifier
    }

    /// Replaces the modifier and rebuilds the wrapper chain. Children are kept.
    ///
    /// The node has to be measured again before it can be placed.
    pub fn set_modifier(&mut self, modifier: Modifier) {
        let placeholder: Box<dyn LayoutNodeWrapper> = Box::new(InnerNodeWrapper::new(
            self.id,
            Rc::clone(&self.measure_policy),
            Vec::new(),
        ));
        let inner = std::mem::replace(&mut self.outer, placeholder).into_inner();
        self.outer = build_chain(self.id, &modifier, inner);
        self.modifier = modifier;
    }

    pub fn children(&self) -> &[LayoutNode] {
        self.outer.children()
    }

    pub fn children_mut(&mut self) -> &mut [LayoutNode] {
        self.outer.children_mut()
    }

    /// Outermost wrapper of the chain.
    pub fn outer(&self) -> &dyn LayoutNodeWrapper {
        self.outer.as_ref()
    }

    /// Wrappers from outermost to innermost.
    pub fn wrappers(&self) -> impl Iterator<Item = &dyn LayoutNodeWrapper> {
        iter::successors(Some(self.outer.as_ref()), |wrapper| wrapper.wrapped())
    }

    /// Direction the node's own measure policy last ran with.
    pub fn layout_direction(&self) -> Option<LayoutDirection> {
        self.wrappers()
            .last()
            .and_then(|inner| inner.layout_direction())
    }

    /// Measured size of the whole node.
    ///
    /// # Panics
    ///
    /// Panics if the node has not been measured.
    pub fn size(&self) -> Size {
        self.outer.measured_size()
    }

    pub fn try_size(&self) -> Result<Size, LayoutError> {
        self.outer
            .try_measured_size()
            .ok_or(LayoutError::NotMeasured { id: self.id })
    }

    /// Position relative to the parent's content.
    pub fn position(&self) -> Point {
        self.outer.position()
    }

    /// Position of the node's content relative to the node's own position.
    pub fn content_offset(&self) -> Point {
        self.wrappers()
            .skip(1)
            .fold(Point::ZERO, |offset, wrapper| offset + wrapper.position())
    }

    pub fn place_at(&self, position: Point) {
        self.outer.place_at(position);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, owner: &Owner) {
        self.outer.draw(canvas, owner);
    }

    /// Depth-first search for `id` in this subtree, this node included.
    pub fn find(&self, id: NodeId) -> Option<&LayoutNode> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut LayoutNode> {
        if self.id == id {
            return Some(self);
        }
        self.children_mut()
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }
}

impl Measurable for LayoutNode {
    fn measure(&self, constraints: Constraints, layout_direction: LayoutDirection) -> Placeable {
        self.outer.measure(constraints, layout_direction)
    }

    fn min_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32 {
        self.outer.min_intrinsic_width(height, layout_direction)
    }

    fn max_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32 {
        self.outer.max_intrinsic_width(height, layout_direction)
    }

    fn min_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32 {
        self.outer.min_intrinsic_height(width, layout_direction)
    }

    fn max_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32 {
        self.outer.max_intrinsic_height(width, layout_direction)
    }

    fn get(&self, line: AlignmentLine) -> Option<f32> {
        self.outer.get(line)
    }
}

impl std::fmt::Debug for LayoutNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutNode")
            .field("id", &self.id)
            .field("modifier", &self.modifier)
            .field("children", &self.children().len())
            .finish()
    }
}

/// Root of a layout hierarchy together with its configuration.
pub struct LayoutTree {
    root: Option<LayoutNode>,
    owner: Owner,
    layout_direction: LayoutDirection,
    last_constraints: Option<Constraints>,
    needs_remeasure: bool,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    /// Tree configured from the environment, laid out left-to-right.
    pub fn new() -> Self {
        Self::with_owner(Owner::from_env())
    }

    pub fn with_owner(owner: Owner) -> Self {
        Self {
            root: None,
            owner,
            layout_direction: LayoutDirection::Ltr,
            last_constraints: None,
            needs_remeasure: true,
        }
    }

    pub fn set_owner(&mut self, owner: Owner) {
        self.owner = owner;
    }

    /// Locale direction handed to the root.
    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    pub fn set_layout_direction(&mut self, layout_direction: LayoutDirection) {
        if self.layout_direction != layout_direction {
            log::debug!(
                "locale layout direction changed {:?} -> {:?}",
                self.layout_direction,
                layout_direction
            );
            self.layout_direction = layout_direction;
            self.needs_remeasure = true;
        }
    }

    pub fn set_root(&mut self, root: LayoutNode) {
        self.root = Some(root);
        self.needs_remeasure = true;
    }

    pub fn root(&self) -> Option<&LayoutNode> {
        self.root.as_ref()
    }

    pub fn find(&self, id: NodeId) -> Result<&LayoutNode, LayoutError> {
        self.root
            .as_ref()
            .and_then(|root| root.find(id))
            .ok_or(LayoutError::Missing { id })
    }

    /// Replaces the modifier of node `id` and schedules a remeasure.
    pub fn set_modifier(&mut self, id: NodeId, modifier: Modifier) -> Result<(), LayoutError> {
        let node = self
            .root
            .as_mut()
            .and_then(|root| root.find_mut(id))
            .ok_or(LayoutError::Missing { id })?;
        node.set_modifier(modifier);
        self.needs_remeasure = true;
        Ok(())
    }

    pub fn request_remeasure(&mut self) {
        self.needs_remeasure = true;
    }

    pub fn needs_remeasure(&self) -> bool {
        self.needs_remeasure
    }

    /// Measures the root with `constraints` and the locale direction, then places it at
    /// the origin. Skips the pass when nothing changed since the last one.
    pub fn measure_and_layout(&mut self, constraints: Constraints) -> Size {
        let Some(root) = self.root.as_ref() else {
            return Size::ZERO;
        };
        if !self.needs_remeasure && self.last_constraints == Some(constraints) {
            if let Some(size) = root.outer().try_measured_size() {
                return size;
            }
        }
        log::debug!(
            "measuring layout tree from node #{} ({:?}, {:?})",
            root.id(),
            self.layout_direction,
            constraints
        );
        let placeable = root.measure(constraints, self.layout_direction);
        root.place_at(Point::ZERO);
        self.last_constraints = Some(constraints);
        self.needs_remeasure = false;
        placeable.size()
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        if let Some(root) = &self.root {
            root.draw(canvas, &self.owner);
        }
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
