use super::*;

#[test]
fn start_is_left_in_ltr_and_right_in_rtl() {
    let start = HorizontalAlignment::Start;
    assert_eq!(start.align(100.0, 30.0, LayoutDirection::Ltr), 0.0);
    assert_eq!(start.align(100.0, 30.0, LayoutDirection::Rtl), 70.0);
}

#[test]
fn end_mirrors_start() {
    let end = HorizontalAlignment::End;
    assert_eq!(end.align(100.0, 30.0, LayoutDirection::Ltr), 70.0);
    assert_eq!(end.align(100.0, 30.0, LayoutDirection::Rtl), 0.0);
}

#[test]
fn center_ignores_direction() {
    let center = HorizontalAlignment::CenterHorizontally;
    assert_eq!(
        center.align(100.0, 30.0, LayoutDirection::Ltr),
        center.align(100.0, 30.0, LayoutDirection::Rtl)
    );
}

#[test]
fn oversized_child_is_pinned_to_origin() {
    assert_eq!(
        HorizontalAlignment::End.align(10.0, 30.0, LayoutDirection::Ltr),
        0.0
    );
    assert_eq!(VerticalAlignment::Bottom.align(10.0, 30.0), 0.0);
}

#[test]
fn bottom_end_in_rtl_lands_bottom_left() {
    let offset = Alignment::BOTTOM_END.align(
        Size::new(50.0, 40.0),
        Size::new(10.0, 10.0),
        LayoutDirection::Rtl,
    );
    assert_eq!(offset, Point::new(0.0, 30.0));
}
