//! Owner configuration shared by every node of a layout tree.

/// Environment variable that turns on layout bounds drawing.
pub const SHOW_LAYOUT_BOUNDS_ENV: &str = "LUMEN_SHOW_LAYOUT_BOUNDS";

/// Configuration owned by the tree and handed to every draw call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Owner {
    show_layout_bounds: bool,
}

impl Owner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration from the process environment.
    ///
    /// `LUMEN_SHOW_LAYOUT_BOUNDS` accepts `1`, `true` or `yes` (any case).
    pub fn from_env() -> Self {
        let show_layout_bounds = std::env::var(SHOW_LAYOUT_BOUNDS_ENV)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);
        Self { show_layout_bounds }
    }

    pub fn with_show_layout_bounds(mut self, show_layout_bounds: bool) -> Self {
        self.show_layout_bounds = show_layout_bounds;
        self
    }

    /// Whether wrappers stroke their bounds after drawing.
    pub fn show_layout_bounds(&self) -> bool {
        self.show_layout_bounds
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
