use super::*;
use crate::layout::{EmptyMeasurePolicy, StackMeasurePolicy};
use crate::modifier::Modifier;
use crate::owner::Owner;
use lumen_ui_layout::{Constraints, LayoutDirection};

#[test]
fn empty_tree_is_reported() {
    let tree = LayoutTree::with_owner(Owner::new());
    let dump = format_layout_tree(&tree);
    assert!(dump.contains("<empty>"));
}

#[test]
fn dump_lists_wrappers_with_resolved_directions() {
    let child = LayoutNode::new(
        Modifier::empty().ltr().size(10.0, 10.0),
        EmptyMeasurePolicy,
        Vec::new(),
    );
    let child_id = child.id();
    let root = LayoutNode::new(
        Modifier::empty().rtl(),
        StackMeasurePolicy::default(),
        vec![child],
    );
    let root_id = root.id();

    let mut tree = LayoutTree::with_owner(Owner::new());
    tree.set_root(root);
    tree.measure_and_layout(Constraints::loose(100.0, 100.0));
    log_layout_tree(&tree);

    let dump = format_layout_tree(&tree);
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[0], "=== LAYOUT TREE (Ltr) ===");
    assert_eq!(
        lines[1],
        format!("[Node #{root_id}] pos: (0.0, 0.0), size: (10.0x10.0)")
    );
    assert_eq!(
        lines[2],
        "  - LayoutDirection(Rtl) dir: Rtl, offset: (0.0, 0.0), size: (10.0x10.0)"
    );
    assert_eq!(
        lines[3],
        "  - StackMeasurePolicy dir: Rtl, offset: (0.0, 0.0), size: (10.0x10.0)"
    );
    assert!(lines[4].starts_with(&format!("  [Node #{child_id}]")));
    assert!(dump.contains("    - LayoutDirection(Ltr) dir: Ltr"));
    assert!(dump.contains("    - SizeModifier dir: Ltr"));
    assert_eq!(lines.last().copied(), Some("=== END LAYOUT TREE ==="));

    tree.set_layout_direction(LayoutDirection::Rtl);
    assert!(format_layout_tree(&tree).starts_with("=== LAYOUT TREE (Rtl) ==="));
}
