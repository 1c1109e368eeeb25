//! Generic layout node builders

#![allow(non_snake_case)]

use crate::layout::LayoutNode;
use crate::modifier::Modifier;
use lumen_ui_layout::{
    Constraints, Measurable, MeasurePolicy, MeasurePolicyFn, MeasureResult, MeasureScope,
};

/// Node whose children are measured and placed by `measure`.
pub fn Layout<F>(modifier: Modifier, children: Vec<LayoutNode>, measure: F) -> LayoutNode
where
    F: Fn(&MeasureScope, &[&dyn Measurable], Constraints) -> MeasureResult + 'static,
{
    LayoutNode::new(modifier, MeasurePolicyFn::new(measure), children)
}

/// Node laid out by an arbitrary [`MeasurePolicy`].
pub fn LayoutWith<P>(modifier: Modifier, policy: P, children: Vec<LayoutNode>) -> LayoutNode
where
    P: MeasurePolicy + 'static,
{
    LayoutNode::new(modifier, policy, children)
}
