//! Intrinsic measurement APIs
//!
//! Policies and modifiers that only know how to `measure` get their intrinsic sizes
//! by running that measure block against placeholders: each placeholder answers
//! `measure` with the wrapped child's intrinsic size in the queried dimension.

use crate::alignment_line::AlignmentLine;
use crate::constraints::Constraints;
use crate::core::{Measurable, MeasureResult, Placeable};
use crate::direction::LayoutDirection;

/// Specifies how to size a component based on its intrinsic measurements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntrinsicSize {
    /// Use the minimum intrinsic size of the content.
    Min,
    /// Use the maximum intrinsic size of the content.
    Max,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IntrinsicDimension {
    Width,
    Height,
}

struct IntrinsicPlaceholder<'a> {
    measurable: &'a dyn Measurable,
    size: IntrinsicSize,
    dimension: IntrinsicDimension,
}

impl Measurable for IntrinsicPlaceholder<'_> {
    fn measure(&self, constraints: Constraints, layout_direction: LayoutDirection) -> Placeable {
        match self.dimension {
            IntrinsicDimension::Width => {
                let width = match self.size {
                    IntrinsicSize::Min => self
                        .measurable
                        .min_intrinsic_width(constraints.max_height, layout_direction),
                    IntrinsicSize::Max => self
                        .measurable
                        .max_intrinsic_width(constraints.max_height, layout_direction),
                };
                Placeable::intrinsic(width, constraints.max_height)
            }
            IntrinsicDimension::Height => {
                let height = match self.size {
                    IntrinsicSize::Min => self
                        .measurable
                        .min_intrinsic_height(constraints.max_width, layout_direction),
                    IntrinsicSize::Max => self
                        .measurable
                        .max_intrinsic_height(constraints.max_width, layout_direction),
                };
                Placeable::intrinsic(constraints.max_width, height)
            }
        }
    }

    fn min_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32 {
        self.measurable.min_intrinsic_width(height, layout_direction)
    }

    fn max_intrinsic_width(&self, height: f32, layout_direction: LayoutDirection) -> f32 {
        self.measurable.max_intrinsic_width(height, layout_direction)
    }

    fn min_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32 {
        self.measurable.min_intrinsic_height(width, layout_direction)
    }

    fn max_intrinsic_height(&self, width: f32, layout_direction: LayoutDirection) -> f32 {
        self.measurable.max_intrinsic_height(width, layout_direction)
    }

    fn get(&self, line: AlignmentLine) -> Option<f32> {
        self.measurable.get(line)
    }
}

fn measure_with_placeholders<F>(
    measure_block: F,
    measurables: &[&dyn Measurable],
    size: IntrinsicSize,
    dimension: IntrinsicDimension,
    constraints: Constraints,
) -> MeasureResult
where
    F: FnOnce(&[&dyn Measurable], Constraints) -> MeasureResult,
{
    let placeholders: Vec<IntrinsicPlaceholder<'_>> = measurables
        .iter()
        .map(|measurable| IntrinsicPlaceholder {
            measurable: *measurable,
            size,
            dimension,
        })
        .collect();
    let placeholder_refs: Vec<&dyn Measurable> = placeholders
        .iter()
        .map(|placeholder| placeholder as &dyn Measurable)
        .collect();
    measure_block(&placeholder_refs, constraints)
}

/// Minimum intrinsic width of `measure_block` at `height`.
pub fn min_width<F>(measure_block: F, measurables: &[&dyn Measurable], height: f32) -> f32
where
    F: FnOnce(&[&dyn Measurable], Constraints) -> MeasureResult,
{
    measure_with_placeholders(
        measure_block,
        measurables,
        IntrinsicSize::Min,
        IntrinsicDimension::Width,
        Constraints::with_max_height(height),
    )
    .width
}

/// Maximum intrinsic width of `measure_block` at `height`.
pub fn max_width<F>(measure_block: F, measurables: &[&dyn Measurable], height: f32) -> f32
where
    F: FnOnce(&[&dyn Measurable], Constraints) -> MeasureResult,
{
    measure_with_placeholders(
        measure_block,
        measurables,
        IntrinsicSize::Max,
        IntrinsicDimension::Width,
        Constraints::with_max_height(height),
    )
    .width
}

/// Minimum intrinsic height of `measure_block` at `width`.
pub fn min_height<F>(measure_block: F, measurables: &[&dyn Measurable], width: f32) -> f32
where
    F: FnOnce(&[&dyn Measurable], Constraints) -> MeasureResult,
{
    measure_with_placeholders(
        measure_block,
        measurables,
        IntrinsicSize::Min,
        IntrinsicDimension::Height,
        Constraints::with_max_width(width),
    )
    .height
}

/// Maximum intrinsic height of `measure_block` at `width`.
pub fn max_height<F>(measure_block: F, measurables: &[&dyn Measurable], width: f32) -> f32
where
    F: FnOnce(&[&dyn Measurable], Constraints) -> MeasureResult,
{
    measure_with_placeholders(
        measure_block,
        measurables,
        IntrinsicSize::Max,
        IntrinsicDimension::Height,
        Constraints::with_max_width(width),
    )
    .height
}

#[cfg(test)]
#[path = "tests/intrinsics_tests.rs"]
mod tests;
