//! Direction-aware layout nodes for Lumen.
//!
//! A [`LayoutNode`] is decorated by a [`Modifier`]; every modifier element becomes a
//! [`ModifiedLayoutNodeWrapper`] that can alter measurement, intrinsic sizes,
//! placement and alignment lines of what it wraps, and that can override the layout
//! direction for its whole subtree.
//!
//! ```rust,ignore
//! use lumen_ui::{Constraints, LayoutTree, Modifier, Stack, StackSpec};
//!
//! let mut tree = LayoutTree::new();
//! tree.set_root(Stack(Modifier::empty().rtl().padding(8.0), StackSpec::new(), children));
//! tree.measure_and_layout(Constraints::loose(320.0, 240.0));
//! ```

mod debug;
mod error;
pub mod layout;
mod modifier;
mod owner;
pub mod widgets;

pub use debug::{format_layout_tree, log_layout_tree};
pub use error::LayoutError;
pub use layout::{
    EmptyMeasurePolicy, InnerNodeWrapper, LayoutNode, LayoutNodeWrapper, LayoutTree,
    ModifiedLayoutNodeWrapper, StackMeasurePolicy, INNER_BOUNDS_COLOR,
    LAYOUT_BOUNDS_STROKE_WIDTH, MODIFIER_BOUNDS_COLOR,
};
pub use modifier::{
    IntrinsicSizeModifier, LayoutDirectionModifier, LayoutModifierStyle, Modifier,
    OffsetModifier, PaddingModifier, SizeModifier,
};
pub use owner::{Owner, SHOW_LAYOUT_BOUNDS_ENV};
pub use widgets::{Layout, LayoutWith, Stack, StackSpec};

pub use lumen_ui_graphics::{
    Canvas, Color, DrawPrimitive, EdgeInsets, Paint, Point, RecordingCanvas, Rect, Size,
};
pub use lumen_ui_layout::{
    alignment_lines, Alignment, AlignmentLine, AlignmentLines, Constraints, HorizontalAlignment,
    IntrinsicSize, LayoutDirection, LayoutModifier, Measurable, MeasurePolicy, MeasurePolicyFn,
    MeasureResult, MeasureScope, NodeId, Placeable, PlacementScope, TransformLayoutModifier,
    VerticalAlignment, FIRST_BASELINE, LAST_BASELINE,
};

pub mod prelude {
    pub use crate::layout::{LayoutNode, LayoutTree};
    pub use crate::modifier::Modifier;
    pub use crate::widgets::{Layout, Stack, StackSpec};
    pub use lumen_ui_layout::prelude::*;
}
