//! Pure math/data for drawing in Lumen
//!
//! This crate contains geometry primitives, color definitions and the canvas
//! abstraction that layout wrappers draw into.

mod canvas;
mod color;
mod geometry;

pub use canvas::*;
pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::canvas::{Canvas, Paint, RecordingCanvas};
    pub use crate::color::Color;
    pub use crate::geometry::{DrawPrimitive, EdgeInsets, Point, Rect, Size};
}
