//! Layout direction

/// Horizontal direction in which a subtree lays out its content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl LayoutDirection {
    pub fn is_ltr(self) -> bool {
        matches!(self, Self::Ltr)
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}
