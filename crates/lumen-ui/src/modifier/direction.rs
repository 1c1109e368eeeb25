//! Layout direction overrides.

use super::Modifier;
use lumen_ui_layout::{LayoutDirection, TransformLayoutModifier};

/// Replaces the inherited layout direction for everything it decorates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutDirectionModifier {
    layout_direction: LayoutDirection,
}

impl LayoutDirectionModifier {
    pub const fn new(layout_direction: LayoutDirection) -> Self {
        Self { layout_direction }
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.layout_direction
    }
}

impl TransformLayoutModifier for LayoutDirectionModifier {
    fn modify_layout_direction(&self, _layout_direction: LayoutDirection) -> LayoutDirection {
        self.layout_direction
    }

    fn debug_name(&self) -> &str {
        match self.layout_direction {
            LayoutDirection::Ltr => "LayoutDirection(Ltr)",
            LayoutDirection::Rtl => "LayoutDirection(Rtl)",
        }
    }
}

impl Modifier {
    /// Lays the decorated content out right-to-left.
    ///
    /// Example: `Modifier::empty().rtl()`
    pub fn rtl(self) -> Self {
        self.layout_direction(LayoutDirection::Rtl)
    }

    /// Lays the decorated content out left-to-right.
    pub fn ltr(self) -> Self {
        self.layout_direction(LayoutDirection::Ltr)
    }

    /// Forces `layout_direction` on the decorated content. Nested overrides win.
    pub fn layout_direction(self, layout_direction: LayoutDirection) -> Self {
        self.then(Modifier::with_transform(LayoutDirectionModifier::new(
            layout_direction,
        )))
    }
}
