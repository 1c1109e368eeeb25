//! Layout contracts & policies for Lumen
//!
//! Everything a layout wrapper, a layout modifier or a content policy needs to
//! agree on: the [`LayoutDirection`] value, [`Constraints`], alignment lines, the
//! [`Measurable`] protocol and the [`MeasureScope`] that carries the resolved
//! direction into measurement callbacks.

mod alignment;
mod alignment_line;
mod constraints;
mod core;
mod direction;
mod intrinsics;
mod modifier;

pub use alignment::*;
pub use alignment_line::*;
pub use constraints::*;
pub use core::*;
pub use direction::*;
pub use intrinsics::*;
pub use modifier::*;

pub mod prelude {
    pub use crate::alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
    pub use crate::alignment_line::{AlignmentLine, AlignmentLines};
    pub use crate::constraints::Constraints;
    pub use crate::core::{
        Measurable, MeasurePolicy, MeasureResult, MeasureScope, Placeable, PlacementScope,
    };
    pub use crate::direction::LayoutDirection;
    pub use crate::modifier::{LayoutModifier, TransformLayoutModifier};
}
