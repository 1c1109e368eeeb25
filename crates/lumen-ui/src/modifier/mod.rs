//! Modifier system for Lumen
//!
//! A [`Modifier`] is an ordered list of shared layout modifiers. When a node is
//! built, every element becomes one [`crate::ModifiedLayoutNodeWrapper`]; the first
//! element is the outermost wrapper, so it sees the result of every element after it.

use std::fmt;
use std::rc::Rc;

use lumen_ui_layout::{LayoutDirection, LayoutModifier, TransformLayoutModifier};
use smallvec::SmallVec;

mod direction;
mod offset;
mod padding;
mod size;

pub use direction::LayoutDirectionModifier;
pub use offset::OffsetModifier;
pub use padding::PaddingModifier;
pub use size::{IntrinsicSizeModifier, SizeModifier};

/// One decoration step, in either modifier style.
///
/// Modifiers are immutable and shared: the same instance can decorate any number of
/// nodes.
#[derive(Clone)]
pub enum LayoutModifierStyle {
    /// Transform-style modifier; the wrapper drives measurement.
    Transform(Rc<dyn TransformLayoutModifier>),
    /// Callback-style modifier; the modifier drives measurement.
    Callback(Rc<dyn LayoutModifier>),
}

impl LayoutModifierStyle {
    /// Direction this modifier gives its subtree when the parent uses `layout_direction`.
    pub fn resolve_layout_direction(&self, layout_direction: LayoutDirection) -> LayoutDirection {
        match self {
            LayoutModifierStyle::Transform(modifier) => {
                modifier.modify_layout_direction(layout_direction)
            }
            LayoutModifierStyle::Callback(modifier) => modifier.layout_direction(layout_direction),
        }
    }

    pub fn debug_name(&self) -> &str {
        match self {
            LayoutModifierStyle::Transform(modifier) => modifier.debug_name(),
            LayoutModifierStyle::Callback(modifier) => modifier.debug_name(),
        }
    }
}

impl fmt::Debug for LayoutModifierStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutModifierStyle::Transform(_) => write!(f, "Transform({})", self.debug_name()),
            LayoutModifierStyle::Callback(_) => write!(f, "Callback({})", self.debug_name()),
        }
    }
}

/// Ordered chain of layout modifiers applied to a node.
#[derive(Clone, Default)]
pub struct Modifier {
    elements: SmallVec<[LayoutModifierStyle; 4]>,
}

impl Modifier {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Single-element modifier backed by a transform-style modifier.
    pub fn with_transform(modifier: impl TransformLayoutModifier + 'static) -> Self {
        Self::with_element(LayoutModifierStyle::Transform(Rc::new(modifier)))
    }

    /// Single-element modifier backed by a callback-style modifier.
    pub fn with_layout(modifier: impl LayoutModifier + 'static) -> Self {
        Self::with_element(LayoutModifierStyle::Callback(Rc::new(modifier)))
    }

    pub fn with_element(element: LayoutModifierStyle) -> Self {
        let mut elements = SmallVec::new();
        elements.push(element);
        Self { elements }
    }

    /// Appends `next` after this modifier; `next` ends up closer to the content.
    pub fn then(&self, next: Modifier) -> Modifier {
        if self.is_empty() {
            return next;
        }
        if next.is_empty() {
            return self.clone();
        }
        let mut elements = self.elements.clone();
        elements.extend(next.elements);
        Modifier { elements }
    }

    /// Elements from outermost to innermost.
    pub fn elements(&self) -> &[LayoutModifierStyle] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Accumulates a value by visiting elements from outermost to innermost.
    pub fn fold_in<R, F>(&self, initial: R, operation: F) -> R
    where
        F: FnMut(R, &LayoutModifierStyle) -> R,
    {
        self.elements.iter().fold(initial, operation)
    }

    /// Accumulates a value by visiting elements from innermost to outermost.
    pub fn fold_out<R, F>(&self, initial: R, operation: F) -> R
    where
        F: FnMut(R, &LayoutModifierStyle) -> R,
    {
        self.elements.iter().rev().fold(initial, operation)
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

#[cfg(test)]
#[path = "tests/modifier_tests.rs"]
mod tests;
