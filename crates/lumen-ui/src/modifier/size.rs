//! Fixed and intrinsic sizing modifiers.

use super::Modifier;
use lumen_ui_layout::{
    Constraints, IntrinsicSize, LayoutModifier, Measurable, MeasureResult, MeasureScope,
};

/// Requests a fixed width and/or height, within the incoming constraints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeModifier {
    width: Option<f32>,
    height: Option<f32>,
}

impl SizeModifier {
    pub fn new(width: Option<f32>, height: Option<f32>) -> Self {
        Self { width, height }
    }

    fn child_constraints(&self, constraints: Constraints) -> Constraints {
        let mut child = constraints;
        if let Some(width) = self.width {
            child = child.tighten_width(width.clamp(constraints.min_width, constraints.max_width));
        }
        if let Some(height) = self.height {
            child = child
                .tighten_height(height.clamp(constraints.min_height, constraints.max_height));
        }
        child
    }
}

impl LayoutModifier for SizeModifier {
    fn measure(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> MeasureResult {
        let child_constraints = self.child_constraints(constraints);
        let placeable = measurable.measure(child_constraints, scope.layout_direction());
        let (width, height) = child_constraints.constrain(placeable.width(), placeable.height());
        scope.layout(width, height, move |placement| {
            placement.place_relative(&placeable, 0.0, 0.0);
        })
    }

    fn min_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        match self.width {
            Some(width) => width,
            None => measurable.min_intrinsic_width(height, scope.layout_direction()),
        }
    }

    fn max_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        match self.width {
            Some(width) => width,
            None => measurable.max_intrinsic_width(height, scope.layout_direction()),
        }
    }

    fn min_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        match self.height {
            Some(height) => height,
            None => measurable.min_intrinsic_height(width, scope.layout_direction()),
        }
    }

    fn max_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        match self.height {
            Some(height) => height,
            None => measurable.max_intrinsic_height(width, scope.layout_direction()),
        }
    }

    fn debug_name(&self) -> &str {
        "SizeModifier"
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Width,
    Height,
}

/// Sizes one axis of the content to its min or max intrinsic size.
///
/// The intrinsic is queried with the direction resolved for this modifier, so an
/// overriding modifier further in the chain sees its own direction during the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntrinsicSizeModifier {
    axis: Axis,
    size: IntrinsicSize,
}

impl IntrinsicSizeModifier {
    pub fn width(size: IntrinsicSize) -> Self {
        Self {
            axis: Axis::Width,
            size,
        }
    }

    pub fn height(size: IntrinsicSize) -> Self {
        Self {
            axis: Axis::Height,
            size,
        }
    }

    fn intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        match self.size {
            IntrinsicSize::Min => measurable.min_intrinsic_width(height, scope.layout_direction()),
            IntrinsicSize::Max => measurable.max_intrinsic_width(height, scope.layout_direction()),
        }
    }

    fn intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        match self.size {
            IntrinsicSize::Min => measurable.min_intrinsic_height(width, scope.layout_direction()),
            IntrinsicSize::Max => measurable.max_intrinsic_height(width, scope.layout_direction()),
        }
    }
}

impl LayoutModifier for IntrinsicSizeModifier {
    fn measure(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> MeasureResult {
        let child_constraints = match self.axis {
            Axis::Width => {
                let width = self.intrinsic_width(scope, measurable, constraints.max_height);
                constraints.tighten_width(width.clamp(constraints.min_width, constraints.max_width))
            }
            Axis::Height => {
                let height = self.intrinsic_height(scope, measurable, constraints.max_width);
                constraints
                    .tighten_height(height.clamp(constraints.min_height, constraints.max_height))
            }
        };
        let placeable = measurable.measure(child_constraints, scope.layout_direction());
        scope.layout(placeable.width(), placeable.height(), move |placement| {
            placement.place_relative(&placeable, 0.0, 0.0);
        })
    }

    fn min_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        match self.axis {
            Axis::Width => self.intrinsic_width(scope, measurable, height),
            Axis::Height => measurable.min_intrinsic_width(height, scope.layout_direction()),
        }
    }

    fn max_intrinsic_width(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        height: f32,
    ) -> f32 {
        match self.axis {
            Axis::Width => self.intrinsic_width(scope, measurable, height),
            Axis::Height => measurable.max_intrinsic_width(height, scope.layout_direction()),
        }
    }

    fn min_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        match self.axis {
            Axis::Height => self.intrinsic_height(scope, measurable, width),
            Axis::Width => measurable.min_intrinsic_height(width, scope.layout_direction()),
        }
    }

    fn max_intrinsic_height(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        width: f32,
    ) -> f32 {
        match self.axis {
            Axis::Height => self.intrinsic_height(scope, measurable, width),
            Axis::Width => measurable.max_intrinsic_height(width, scope.layout_direction()),
        }
    }

    fn debug_name(&self) -> &str {
        match self.axis {
            Axis::Width => "IntrinsicWidthModifier",
            Axis::Height => "IntrinsicHeightModifier",
        }
    }
}

impl Modifier {
    /// Fixed size for both axes.
    pub fn size(self, width: f32, height: f32) -> Self {
        self.then(Modifier::with_layout(SizeModifier::new(
            Some(width),
            Some(height),
        )))
    }

    pub fn width(self, width: f32) -> Self {
        self.then(Modifier::with_layout(SizeModifier::new(Some(width), None)))
    }

    pub fn height(self, height: f32) -> Self {
        self.then(Modifier::with_layout(SizeModifier::new(None, Some(height))))
    }

    /// Width equal to the content's min or max intrinsic width.
    pub fn width_intrinsic(self, size: IntrinsicSize) -> Self {
        self.then(Modifier::with_layout(IntrinsicSizeModifier::width(size)))
    }

    /// Height equal to the content's min or max intrinsic height.
    pub fn height_intrinsic(self, size: IntrinsicSize) -> Self {
        self.then(Modifier::with_layout(IntrinsicSizeModifier::height(size)))
    }
}
