//! Debug utilities for inspecting a measured layout tree
//!
//! Each node is printed with its wrapper chain, outermost wrapper first, so the
//! direction every wrapper resolved can be compared against the locale direction.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lumen_ui::{log_layout_tree, LayoutTree};
//!
//! tree.measure_and_layout(constraints);
//! log_layout_tree(&tree);
//! ```

use crate::layout::{LayoutNode, LayoutNodeWrapper, LayoutTree};
use std::fmt::Write;

/// Logs the layout tree at debug level.
pub fn log_layout_tree(tree: &LayoutTree) {
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("\n{}", format_layout_tree(tree));
    }
}

/// Returns a formatted string representation of the layout tree
pub fn format_layout_tree(tree: &LayoutTree) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "=== LAYOUT TREE ({:?}) ===",
        tree.layout_direction()
    )
    .ok();
    match tree.root() {
        Some(root) => format_layout_node(&mut output, root, 0),
        None => {
            writeln!(output, "<empty>").ok();
        }
    }
    writeln!(output, "=== END LAYOUT TREE ===").ok();
    output
}

fn format_layout_node(output: &mut String, node: &LayoutNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let position = node.position();
    writeln!(
        output,
        "{}[Node #{}] pos: ({:.1}, {:.1}), size: {}",
        indent,
        node.id(),
        position.x,
        position.y,
        format_size(node.outer())
    )
    .ok();

    for wrapper in node.wrappers() {
        let position = wrapper.position();
        writeln!(
            output,
            "{}  - {} dir: {}, offset: ({:.1}, {:.1}), size: {}",
            indent,
            wrapper.debug_name(),
            wrapper
                .layout_direction()
                .map_or_else(|| "-".to_string(), |dir| format!("{dir:?}")),
            position.x,
            position.y,
            format_size(wrapper)
        )
        .ok();
    }

    for child in node.children() {
        format_layout_node(output, child, depth + 1);
    }
}

fn format_size(wrapper: &dyn LayoutNodeWrapper) -> String {
    match wrapper.try_measured_size() {
        Some(size) => format!("({:.1}x{:.1})", size.width, size.height),
        None => "unmeasured".to_string(),
    }
}

#[cfg(test)]
#[path = "tests/debug_tests.rs"]
mod tests;
