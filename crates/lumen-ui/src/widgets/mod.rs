//! Node builders for common layouts.

mod layout;
mod stack;

pub use layout::{Layout, LayoutWith};
pub use stack::{Stack, StackSpec};
