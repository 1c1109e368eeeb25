use lumen_ui::{LayoutError, LayoutNode, LayoutTree, Owner};
use lumen_ui_graphics::{DrawPrimitive, RecordingCanvas, Size};
use lumen_ui_layout::{Constraints, LayoutDirection, NodeId};

/// Constraints used by [`LayoutTestRule`] unless told otherwise.
pub const DEFAULT_TEST_CONSTRAINTS: Constraints = Constraints {
    min_width: 0.0,
    max_width: 1000.0,
    min_height: 0.0,
    max_height: 1000.0,
};

/// Headless harness for measuring, placing and drawing layout trees in tests.
///
/// The rule owns a [`LayoutTree`] with a fixed locale direction and a fixed
/// configuration, so tests never depend on the process environment.
pub struct LayoutTestRule {
    tree: LayoutTree,
    constraints: Constraints,
}

impl LayoutTestRule {
    /// Create a rule with a left-to-right locale and debug bounds disabled.
    pub fn new() -> Self {
        Self {
            tree: LayoutTree::with_owner(Owner::new()),
            constraints: DEFAULT_TEST_CONSTRAINTS,
        }
    }

    /// Create a rule whose locale direction is `layout_direction`.
    pub fn with_locale_direction(layout_direction: LayoutDirection) -> Self {
        let mut rule = Self::new();
        rule.set_locale_direction(layout_direction);
        rule
    }

    pub fn with_show_layout_bounds(mut self, show_layout_bounds: bool) -> Self {
        self.tree
            .set_owner(Owner::new().with_show_layout_bounds(show_layout_bounds));
        self
    }

    pub fn set_locale_direction(&mut self, layout_direction: LayoutDirection) {
        self.tree.set_layout_direction(layout_direction);
    }

    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.constraints = constraints;
    }

    /// Install `root` and run an initial measure and layout pass.
    pub fn set_content(&mut self, root: LayoutNode) -> Size {
        self.tree.set_root(root);
        self.layout()
    }

    /// Run a measure and layout pass if anything changed since the last one.
    pub fn layout(&mut self) -> Size {
        self.tree.measure_and_layout(self.constraints)
    }

    /// Force a full measure and layout pass.
    pub fn relayout(&mut self) -> Size {
        self.tree.request_remeasure();
        self.layout()
    }

    pub fn set_modifier(
        &mut self,
        id: NodeId,
        modifier: lumen_ui::Modifier,
    ) -> Result<(), LayoutError> {
        self.tree.set_modifier(id, modifier)
    }

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    /// Look up a node of the installed content.
    ///
    /// # Panics
    ///
    /// Panics if no node with `id` is installed.
    pub fn node(&self, id: NodeId) -> &LayoutNode {
        match self.tree.find(id) {
            Ok(node) => node,
            Err(err) => panic!("{err}"),
        }
    }

    /// Draw the installed content and return what was recorded.
    pub fn draw(&self) -> Vec<DrawPrimitive> {
        let mut canvas = RecordingCanvas::new();
        self.tree.draw(&mut canvas);
        canvas.into_primitives()
    }

    /// Dump the current layout tree as text for debugging
    pub fn dump_tree(&self) -> String {
        lumen_ui::format_layout_tree(&self.tree)
    }
}

impl Default for LayoutTestRule {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for tests that only need temporary access to a
/// `LayoutTestRule`.
pub fn run_layout_test<R>(f: impl FnOnce(&mut LayoutTestRule) -> R) -> R {
    let mut rule = LayoutTestRule::new();
    f(&mut rule)
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
