//! Stack widget implementation

#![allow(non_snake_case)]

use super::layout::LayoutWith;
use crate::layout::policies::StackMeasurePolicy;
use crate::layout::LayoutNode;
use crate::modifier::Modifier;
use lumen_ui_layout::Alignment;

/// Configuration for Stack layout behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackSpec {
    pub content_alignment: Alignment,
    pub propagate_min_constraints: bool,
}

impl StackSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_alignment(mut self, alignment: Alignment) -> Self {
        self.content_alignment = alignment;
        self
    }

    pub fn propagate_min_constraints(mut self, propagate: bool) -> Self {
        self.propagate_min_constraints = propagate;
        self
    }
}

impl Default for StackSpec {
    fn default() -> Self {
        Self {
            content_alignment: Alignment::TOP_START,
            propagate_min_constraints: false,
        }
    }
}

/// Overlays `children`, aligning each one inside the stack.
pub fn Stack(modifier: Modifier, spec: StackSpec, children: Vec<LayoutNode>) -> LayoutNode {
    let policy = StackMeasurePolicy::new(spec.content_alignment, spec.propagate_min_constraints);
    LayoutWith(modifier, policy, children)
}
