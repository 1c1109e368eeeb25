use super::*;
use lumen_ui_graphics::{EdgeInsets, Point, Size};
use lumen_ui_layout::{
    AlignmentLine, Constraints, IntrinsicSize, LayoutDirection, Measurable, MeasureScope,
    Placeable, PlacementScope, FIRST_BASELINE,
};
use std::cell::Cell;

const START_LINE: AlignmentLine = AlignmentLine::vertical("start");

/// Fixed-size content with intrinsics equal to its size.
struct FixedContent {
    size: Size,
    last_direction: Cell<Option<LayoutDirection>>,
}

impl FixedContent {
    fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            last_direction: Cell::new(None),
        }
    }
}

impl Measurable for FixedContent {
    fn measure(&self, constraints: Constraints, layout_direction: LayoutDirection) -> Placeable {
        self.last_direction.set(Some(layout_direction));
        let (width, height) = constraints.constrain(self.size.width, self.size.height);
        Placeable::new(width, height, 7)
    }

    fn min_intrinsic_width(&self, _height: f32, layout_direction: LayoutDirection) -> f32 {
        self.last_direction.set(Some(layout_direction));
        self.size.width / 2.0
    }

    fn max_intrinsic_width(&self, _height: f32, layout_direction: LayoutDirection) -> f32 {
        self.last_direction.set(Some(layout_direction));
        self.size.width
    }

    fn min_intrinsic_height(&self, _width: f32, _layout_direction: LayoutDirection) -> f32 {
        self.size.height / 2.0
    }

    fn max_intrinsic_height(&self, _width: f32, _layout_direction: LayoutDirection) -> f32 {
        self.size.height
    }
}

struct RecordingPlacement {
    layout_direction: LayoutDirection,
    parent_width: f32,
    placed: Vec<Point>,
}

impl RecordingPlacement {
    fn new(layout_direction: LayoutDirection, parent_width: f32) -> Self {
        Self {
            layout_direction,
            parent_width,
            placed: Vec::new(),
        }
    }
}

impl PlacementScope for RecordingPlacement {
    fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }

    fn parent_width(&self) -> f32 {
        self.parent_width
    }

    fn place_absolute(&mut self, _placeable: &Placeable, x: f32, y: f32) {
        self.placed.push(Point::new(x, y));
    }
}

#[test]
fn then_keeps_outer_elements_first() {
    let modifier = Modifier::empty().rtl().padding(4.0).offset(1.0, 2.0);
    let names: Vec<&str> = modifier
        .elements()
        .iter()
        .map(|element| element.debug_name())
        .collect();
    assert_eq!(
        names,
        vec!["LayoutDirection(Rtl)", "PaddingModifier", "OffsetModifier"]
    );
}

#[test]
fn then_with_empty_is_identity() {
    let modifier = Modifier::empty().ltr();
    assert_eq!(modifier.then(Modifier::empty()).len(), 1);
    assert_eq!(Modifier::empty().then(modifier.clone()).len(), 1);
    assert!(Modifier::empty().is_empty());
}

#[test]
fn fold_in_and_fold_out_visit_in_opposite_orders() {
    let modifier = Modifier::empty().rtl().ltr();
    let outer_first = modifier.fold_in(Vec::new(), |mut acc, element| {
        acc.push(element.resolve_layout_direction(LayoutDirection::Ltr));
        acc
    });
    let inner_first = modifier.fold_out(Vec::new(), |mut acc, element| {
        acc.push(element.resolve_layout_direction(LayoutDirection::Ltr));
        acc
    });
    assert_eq!(outer_first, vec![LayoutDirection::Rtl, LayoutDirection::Ltr]);
    assert_eq!(inner_first, vec![LayoutDirection::Ltr, LayoutDirection::Rtl]);
}

#[test]
fn direction_modifier_ignores_parent_direction() {
    let rtl = LayoutDirectionModifier::new(LayoutDirection::Rtl);
    assert_eq!(
        rtl.modify_layout_direction(LayoutDirection::Ltr),
        LayoutDirection::Rtl
    );
    assert_eq!(
        rtl.modify_layout_direction(LayoutDirection::Rtl),
        LayoutDirection::Rtl
    );
}

#[test]
fn non_direction_modifiers_pass_direction_through() {
    for element in Modifier::empty().padding(2.0).offset(1.0, 1.0).size(3.0, 3.0).elements() {
        assert_eq!(
            element.resolve_layout_direction(LayoutDirection::Rtl),
            LayoutDirection::Rtl
        );
        assert_eq!(
            element.resolve_layout_direction(LayoutDirection::Ltr),
            LayoutDirection::Ltr
        );
    }
}

#[test]
fn relative_padding_swaps_edges_in_rtl() {
    let padding = PaddingModifier::relative(10.0, 1.0, 2.0, 3.0);
    assert_eq!(
        padding.insets(LayoutDirection::Ltr),
        EdgeInsets::from_components(10.0, 1.0, 2.0, 3.0)
    );
    assert_eq!(
        padding.insets(LayoutDirection::Rtl),
        EdgeInsets::from_components(2.0, 1.0, 10.0, 3.0)
    );
    assert_eq!(
        padding.modify_position(Size::ZERO, Size::ZERO, LayoutDirection::Rtl),
        Point::new(2.0, 1.0)
    );
}

#[test]
fn absolute_padding_ignores_direction() {
    let padding = PaddingModifier::absolute(EdgeInsets::from_components(10.0, 0.0, 2.0, 0.0));
    assert_eq!(
        padding.modify_position(Size::ZERO, Size::ZERO, LayoutDirection::Rtl),
        Point::new(10.0, 0.0)
    );
}

#[test]
fn padding_deflates_constraints_and_inflates_size() {
    let padding = PaddingModifier::absolute(EdgeInsets::uniform(5.0));
    let constraints = Constraints::loose(100.0, 50.0);
    let child = padding.modify_constraints(constraints, LayoutDirection::Ltr);
    assert_eq!(child.max_width, 90.0);
    assert_eq!(child.max_height, 40.0);
    let size = padding.modify_size(constraints, LayoutDirection::Ltr, Size::new(20.0, 10.0));
    assert_eq!(size, Size::new(30.0, 20.0));
}

#[test]
fn padding_shifts_alignment_lines_by_orientation() {
    let padding = PaddingModifier::relative(8.0, 3.0, 1.0, 0.0);
    assert_eq!(
        padding.modify_alignment_line(FIRST_BASELINE, Some(12.0), LayoutDirection::Ltr),
        Some(15.0)
    );
    assert_eq!(
        padding.modify_alignment_line(START_LINE, Some(4.0), LayoutDirection::Ltr),
        Some(12.0)
    );
    assert_eq!(
        padding.modify_alignment_line(START_LINE, Some(4.0), LayoutDirection::Rtl),
        Some(5.0)
    );
    assert_eq!(
        padding.modify_alignment_line(FIRST_BASELINE, None, LayoutDirection::Ltr),
        None
    );
}

#[test]
fn padding_intrinsics_add_horizontal_insets() {
    let padding = PaddingModifier::relative(4.0, 0.0, 6.0, 0.0);
    let content = FixedContent::new(20.0, 10.0);
    let width = padding.max_intrinsic_width_of(&content, 10.0, LayoutDirection::Rtl);
    assert_eq!(width, 30.0);
    assert_eq!(content.last_direction.get(), Some(LayoutDirection::Rtl));
}

#[test]
fn relative_offset_mirrors_in_rtl() {
    let offset = OffsetModifier::new(5.0, 2.0, true);
    let content = FixedContent::new(20.0, 10.0);
    let scope = MeasureScope::default();

    let mut result = scope.measure_with(
        &offset,
        &content,
        Constraints::loose(100.0, 100.0),
        LayoutDirection::Rtl,
    );
    assert_eq!(result.size(), Size::new(20.0, 10.0));
    assert_eq!(content.last_direction.get(), Some(LayoutDirection::Rtl));

    let mut placement = RecordingPlacement::new(LayoutDirection::Rtl, result.width);
    assert!(result.place_children(&mut placement));
    assert_eq!(placement.placed, vec![Point::new(-5.0, 2.0)]);
}

#[test]
fn absolute_offset_is_not_mirrored() {
    let offset = OffsetModifier::new(5.0, 2.0, false);
    let content = FixedContent::new(20.0, 10.0);
    let mut result = MeasureScope::default().measure_with(
        &offset,
        &content,
        Constraints::loose(100.0, 100.0),
        LayoutDirection::Rtl,
    );
    let mut placement = RecordingPlacement::new(LayoutDirection::Rtl, result.width);
    result.place_children(&mut placement);
    assert_eq!(placement.placed, vec![Point::new(5.0, 2.0)]);
}

#[test]
fn size_modifier_tightens_within_incoming_constraints() {
    let size = SizeModifier::new(Some(40.0), Some(500.0));
    let content = FixedContent::new(10.0, 10.0);
    let result = MeasureScope::default().measure_with(
        &size,
        &content,
        Constraints::loose(100.0, 100.0),
        LayoutDirection::Ltr,
    );
    assert_eq!(result.size(), Size::new(40.0, 100.0));
}

#[test]
fn size_modifier_reports_fixed_intrinsics() {
    let size = SizeModifier::new(Some(40.0), None);
    let content = FixedContent::new(10.0, 16.0);
    let scope = MeasureScope::default();
    assert_eq!(size.min_intrinsic_width(&scope, &content, 0.0), 40.0);
    assert_eq!(size.max_intrinsic_height(&scope, &content, 0.0), 16.0);
}

#[test]
fn intrinsic_width_modifier_measures_at_max_intrinsic_width() {
    let modifier = IntrinsicSizeModifier::width(IntrinsicSize::Max);
    let content = FixedContent::new(30.0, 10.0);
    let result = MeasureScope::default().measure_with(
        &modifier,
        &content,
        Constraints::loose(100.0, 100.0),
        LayoutDirection::Rtl,
    );
    assert_eq!(result.width, 30.0);
    assert_eq!(content.last_direction.get(), Some(LayoutDirection::Rtl));
}

#[test]
fn intrinsic_width_modifier_answers_with_selected_intrinsic() {
    let content = FixedContent::new(30.0, 10.0);
    let scope = MeasureScope::default();
    let min = IntrinsicSizeModifier::width(IntrinsicSize::Min);
    let max = IntrinsicSizeModifier::width(IntrinsicSize::Max);
    assert_eq!(min.max_intrinsic_width(&scope, &content, 10.0), 15.0);
    assert_eq!(max.min_intrinsic_width(&scope, &content, 10.0), 30.0);
    assert_eq!(max.max_intrinsic_height(&scope, &content, 30.0), 10.0);
}
