//! Canvas abstraction used by layout wrappers when drawing.

use crate::{Color, DrawPrimitive, Point, Rect};

/// How a shape is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintingStyle {
    Fill,
    Stroke,
}

/// Paint configuration for a single draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub stroke_width: f32,
    pub style: PaintingStyle,
}

impl Paint {
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            stroke_width: 0.0,
            style: PaintingStyle::Fill,
        }
    }

    pub const fn stroke(color: Color, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
            style: PaintingStyle::Stroke,
        }
    }
}

/// Drawing target. Coordinates are local to the current translation.
pub trait Canvas {
    /// Moves the origin by `(dx, dy)` until the matching [`Canvas::restore`].
    fn translate(&mut self, dx: f32, dy: f32);

    fn save(&mut self);

    fn restore(&mut self);

    fn draw_rect(&mut self, rect: Rect, paint: &Paint);
}

/// Runs `block` with the canvas translated by `offset`, restoring afterwards.
pub fn with_translation<C: Canvas + ?Sized>(
    canvas: &mut C,
    offset: Point,
    block: impl FnOnce(&mut C),
) {
    canvas.save();
    canvas.translate(offset.x, offset.y);
    block(canvas);
    canvas.restore();
}

/// Canvas that records primitives in absolute coordinates.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    origin: Point,
    saved: Vec<Point>,
    primitives: Vec<DrawPrimitive>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded primitives in submission order.
    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl Canvas for RecordingCanvas {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.x += dx;
        self.origin.y += dy;
    }

    fn save(&mut self) {
        self.saved.push(self.origin);
    }

    fn restore(&mut self) {
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        let rect = rect.translate(self.origin.x, self.origin.y);
        let primitive = match paint.style {
            PaintingStyle::Fill => DrawPrimitive::Rect {
                rect,
                color: paint.color,
            },
            PaintingStyle::Stroke => DrawPrimitive::StrokeRect {
                rect,
                color: paint.color,
                stroke_width: paint.stroke_width,
            },
        };
        self.primitives.push(primitive);
    }
}
