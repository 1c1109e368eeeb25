use lumen_testing::{DirectionProbe, LayoutTestRule, ProbePolicy};
use lumen_ui::{
    Color, Constraints, DrawPrimitive, LayoutDirection, LayoutNode, LayoutWith, Measurable,
    Modifier, Point, Rect, Size, TransformLayoutModifier, INNER_BOUNDS_COLOR,
    LAYOUT_BOUNDS_STROKE_WIDTH, MODIFIER_BOUNDS_COLOR,
};

/// Fixed-size box that puts its content at the start edge, computed by hand.
struct StartAlignedBox {
    size: Size,
}

impl TransformLayoutModifier for StartAlignedBox {
    fn modify_constraints(
        &self,
        constraints: Constraints,
        _layout_direction: LayoutDirection,
    ) -> Constraints {
        constraints.loosen()
    }

    fn modify_size(
        &self,
        constraints: Constraints,
        _layout_direction: LayoutDirection,
        _child_size: Size,
    ) -> Size {
        constraints.constrain_size(self.size)
    }

    fn modify_position(
        &self,
        child_size: Size,
        container_size: Size,
        layout_direction: LayoutDirection,
    ) -> Point {
        match layout_direction {
            LayoutDirection::Ltr => Point::ZERO,
            LayoutDirection::Rtl => Point::new(container_size.width - child_size.width, 0.0),
        }
    }
}

fn probe_content(modifier: Modifier) -> LayoutNode {
    LayoutWith(
        modifier,
        ProbePolicy::new(Size::new(20.0, 10.0), DirectionProbe::new()),
        Vec::new(),
    )
}

fn stroke(rect: Rect, color: Color) -> DrawPrimitive {
    DrawPrimitive::StrokeRect {
        rect,
        color,
        stroke_width: LAYOUT_BOUNDS_STROKE_WIDTH,
    }
}

#[test]
fn transform_wrapper_places_content_at_computed_position() {
    let modifier = Modifier::with_transform(StartAlignedBox {
        size: Size::new(50.0, 30.0),
    });
    for (ambient, expected_x) in [(LayoutDirection::Ltr, 0.0), (LayoutDirection::Rtl, 30.0)] {
        let node = probe_content(modifier.clone());
        let placeable = node.measure(Constraints::loose(100.0, 100.0), ambient);
        node.place_at(Point::ZERO);

        assert_eq!(placeable.size(), Size::new(50.0, 30.0));
        assert_eq!(node.content_offset(), Point::new(expected_x, 0.0));
    }
}

#[test]
fn transform_wrapper_intrinsics_follow_transforms() {
    let node = probe_content(Modifier::empty().padding_relative(3.0, 1.0, 2.0, 4.0));
    assert_eq!(node.min_intrinsic_width(100.0, LayoutDirection::Rtl), 25.0);
    assert_eq!(node.max_intrinsic_height(100.0, LayoutDirection::Ltr), 15.0);
}

#[test]
fn debug_bounds_are_not_drawn_by_default() {
    let mut rule = LayoutTestRule::new();
    rule.set_content(probe_content(Modifier::empty().padding(5.0)));
    assert!(rule.draw().is_empty());
}

#[test]
fn debug_bounds_outline_every_wrapper() {
    let mut rule = LayoutTestRule::new().with_show_layout_bounds(true);
    let size = rule.set_content(probe_content(Modifier::empty().padding(5.0)));

    assert_eq!(size, Size::new(30.0, 20.0));
    assert_eq!(
        rule.draw(),
        vec![
            stroke(Rect::new(5.5, 5.5, 19.0, 9.0), INNER_BOUNDS_COLOR),
            stroke(Rect::new(0.5, 0.5, 29.0, 19.0), MODIFIER_BOUNDS_COLOR),
        ]
    );
}

#[test]
fn debug_bounds_do_not_change_layout() {
    let mut plain = LayoutTestRule::new();
    let mut outlined = LayoutTestRule::new().with_show_layout_bounds(true);
    let plain_size = plain.set_content(probe_content(Modifier::empty().rtl().offset(4.0, 0.0)));
    let outlined_size =
        outlined.set_content(probe_content(Modifier::empty().rtl().offset(4.0, 0.0)));
    outlined.draw();

    assert_eq!(plain_size, outlined_size);
    assert_eq!(
        plain.tree().root().map(LayoutNode::content_offset),
        outlined.tree().root().map(LayoutNode::content_offset)
    );
}

#[test]
#[should_panic(expected = "before it was measured")]
fn size_is_unavailable_before_measurement() {
    probe_content(Modifier::empty().rtl()).size();
}
