//! Placement scopes handed to measure results when a wrapper is placed.

use lumen_ui_graphics::Point;
use lumen_ui_layout::{LayoutDirection, NodeId, Placeable, PlacementScope};

use super::wrapper::LayoutNodeWrapper;
use super::LayoutNode;

/// Places the single wrapped wrapper of a modified wrapper.
pub(crate) struct WrappedPlacementScope<'a> {
    pub(crate) node_id: NodeId,
    pub(crate) wrapped: &'a dyn LayoutNodeWrapper,
    pub(crate) layout_direction: LayoutDirection,
    pub(crate) parent_width: f32,
}

impl PlacementScope for WrappedPlacementScope<'_> {
    fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    fn parent_width(&self) -> f32 {
        self.parent_width
    }

    fn place_absolute(&mut self, placeable: &Placeable, x: f32, y: f32) {
        if placeable.node_id() == Some(self.node_id) {
            self.wrapped.place_at(Point::new(x, y));
        } else {
            log::warn!(
                "node #{}: ignoring placement of {:?}, it was not measured through this wrapper",
                self.node_id,
                placeable.node_id()
            );
        }
    }
}

/// Places the children of a node from inside its measure policy.
pub(crate) struct ChildrenPlacementScope<'a> {
    pub(crate) node_id: NodeId,
    pub(crate) children: &'a [LayoutNode],
    pub(crate) layout_direction: LayoutDirection,
    pub(crate) parent_width: f32,
}

impl PlacementScope for ChildrenPlacementScope<'_> {
    fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    fn parent_width(&self) -> f32 {
        self.parent_width
    }

    fn place_absolute(&mut self, placeable: &Placeable, x: f32, y: f32) {
        let child = placeable
            .node_id()
            .and_then(|id| self.children.iter().find(|child| child.id() == id));
        match child {
            Some(child) => child.place_at(Point::new(x, y)),
            None => log::warn!(
                "node #{}: ignoring placement of {:?}, it is not a child",
                self.node_id,
                placeable.node_id()
            ),
        }
    }
}
