use super::*;
use crate::alignment_line::FIRST_BASELINE;
use crate::core::{Placeable, PlacementScope};
use std::cell::RefCell;

struct FixedMeasurable {
    size: Size,
    baseline: Option<f32>,
    seen: RefCell<Vec<LayoutDirection>>,
}

impl FixedMeasurable {
    fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            baseline: None,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Measurable for FixedMeasurable {
    fn measure(&self, constraints: Constraints, layout_direction: LayoutDirection) -> Placeable {
        self.seen.borrow_mut().push(layout_direction);
        let size = constraints.constrain_size(self.size);
        Placeable::new(size.width, size.height, 3)
    }

    fn min_intrinsic_width(&self, _height: f32, layout_direction: LayoutDirection) -> f32 {
        self.seen.borrow_mut().push(layout_direction);
        self.size.width
    }

    fn max_intrinsic_width(&self, _height: f32, layout_direction: LayoutDirection) -> f32 {
        self.seen.borrow_mut().push(layout_direction);
        self.size.width
    }

    fn min_intrinsic_height(&self, _width: f32, layout_direction: LayoutDirection) -> f32 {
        self.seen.borrow_mut().push(layout_direction);
        self.size.height
    }

    fn max_intrinsic_height(&self, _width: f32, layout_direction: LayoutDirection) -> f32 {
        self.seen.borrow_mut().push(layout_direction);
        self.size.height
    }

    fn get(&self, line: AlignmentLine) -> Option<f32> {
        (line == FIRST_BASELINE).then_some(self.baseline).flatten()
    }
}

/// Adds `amount` on every side.
struct Inset {
    amount: f32,
}

impl TransformLayoutModifier for Inset {
    fn modify_constraints(
        &self,
        constraints: Constraints,
        _layout_direction: LayoutDirection,
    ) -> Constraints {
        constraints.deflate(self.amount * 2.0, self.amount * 2.0)
    }

    fn modify_size(
        &self,
        constraints: Constraints,
        _layout_direction: LayoutDirection,
        child_size: Size,
    ) -> Size {
        constraints.constrain_size(Size::new(
            child_size.width + self.amount * 2.0,
            child_size.height + self.amount * 2.0,
        ))
    }

    fn modify_position(
        &self,
        _child_size: Size,
        _container_size: Size,
        _layout_direction: LayoutDirection,
    ) -> Point {
        Point::new(self.amount, self.amount)
    }
}

struct RecordingPlacement {
    layout_direction: LayoutDirection,
    parent_width: f32,
    placed: Vec<(Option<usize>, Point)>,
}

impl PlacementScope for RecordingPlacement {
    fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    fn parent_width(&self) -> f32 {
        self.parent_width
    }

    fn place_absolute(&mut self, placeable: &Placeable, x: f32, y: f32) {
        self.placed.push((placeable.node_id(), Point::new(x, y)));
    }
}

#[test]
fn transform_pipeline_measures_and_places_absolutely() {
    let child = FixedMeasurable::new(30.0, 10.0);
    let inset = Inset { amount: 5.0 };

    let mut result = MeasureScope::default().measure_transformed(
        &inset,
        &child,
        Constraints::loose(100.0, 100.0),
        LayoutDirection::Rtl,
    );
    assert_eq!(result.size(), Size::new(40.0, 20.0));
    assert!(result.alignment_lines.is_empty());
    assert_eq!(*child.seen.borrow(), vec![LayoutDirection::Rtl]);

    let mut placement = RecordingPlacement {
        layout_direction: LayoutDirection::Rtl,
        parent_width: result.width,
        placed: Vec::new(),
    };
    assert!(result.place_children(&mut placement));
    assert_eq!(placement.placed, vec![(Some(3), Point::new(5.0, 5.0))]);
    assert!(!result.place_children(&mut placement));
}

#[test]
fn transform_intrinsics_wrap_child_intrinsics() {
    let child = FixedMeasurable::new(30.0, 10.0);
    let inset = Inset { amount: 5.0 };

    assert_eq!(inset.min_intrinsic_width_of(&child, 50.0, LayoutDirection::Ltr), 40.0);
    assert_eq!(inset.max_intrinsic_width_of(&child, 50.0, LayoutDirection::Ltr), 40.0);
    assert_eq!(inset.min_intrinsic_height_of(&child, 50.0, LayoutDirection::Ltr), 20.0);
    assert_eq!(inset.max_intrinsic_height_of(&child, 50.0, LayoutDirection::Rtl), 20.0);
    assert_eq!(
        *child.seen.borrow(),
        vec![
            LayoutDirection::Ltr,
            LayoutDirection::Ltr,
            LayoutDirection::Ltr,
            LayoutDirection::Rtl
        ]
    );
}

#[test]
fn transform_defaults_are_identity() {
    struct Identity;
    impl TransformLayoutModifier for Identity {}

    let identity = Identity;
    let constraints = Constraints::loose(10.0, 10.0);
    assert_eq!(
        identity.modify_layout_direction(LayoutDirection::Rtl),
        LayoutDirection::Rtl
    );
    assert_eq!(
        identity.modify_constraints(constraints, LayoutDirection::Ltr),
        constraints
    );
    assert_eq!(
        identity.modify_position(Size::ZERO, Size::ZERO, LayoutDirection::Rtl),
        Point::ZERO
    );
    assert_eq!(
        identity.modify_alignment_line(FIRST_BASELINE, Some(4.0), LayoutDirection::Ltr),
        Some(4.0)
    );
}

/// Doubles the wrapped content's width.
struct DoubleWidth;

impl LayoutModifier for DoubleWidth {
    fn measure(
        &self,
        scope: &MeasureScope,
        measurable: &dyn Measurable,
        constraints: Constraints,
    ) -> MeasureResult {
        let placeable = measurable.measure(constraints, scope.layout_direction());
        scope.layout(placeable.width() * 2.0, placeable.height(), move |placement| {
            placement.place_relative(&placeable, 0.0, 0.0)
        })
    }
}

#[test]
fn callback_default_intrinsics_run_the_measure_block() {
    let child = FixedMeasurable::new(30.0, 10.0);
    let scope = MeasureScope::default();

    assert_eq!(
        scope.min_intrinsic_width_with(&DoubleWidth, &child, 10.0, LayoutDirection::Ltr),
        60.0
    );
    assert_eq!(
        scope.max_intrinsic_width_with(&DoubleWidth, &child, 10.0, LayoutDirection::Ltr),
        60.0
    );
    assert_eq!(
        scope.min_intrinsic_height_with(&DoubleWidth, &child, 10.0, LayoutDirection::Ltr),
        10.0
    );
}

#[test]
fn scope_helpers_hand_the_requested_direction_to_the_callback() {
    let child = FixedMeasurable::new(30.0, 10.0);
    let scope = MeasureScope::new(LayoutDirection::Ltr);

    scope.measure_with(
        &DoubleWidth,
        &child,
        Constraints::unbounded(),
        LayoutDirection::Rtl,
    );
    scope.max_intrinsic_height_with(&DoubleWidth, &child, 10.0, LayoutDirection::Rtl);

    assert_eq!(
        *child.seen.borrow(),
        vec![LayoutDirection::Rtl, LayoutDirection::Rtl]
    );
}

#[test]
fn callback_direction_hook_defaults_to_inherited() {
    assert_eq!(
        DoubleWidth.layout_direction(LayoutDirection::Rtl),
        LayoutDirection::Rtl
    );
    assert_eq!(DoubleWidth.debug_name(), "LayoutModifier");
}
