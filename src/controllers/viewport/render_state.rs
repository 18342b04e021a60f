/// Whether the frame buffer reflects the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// The viewport changed since the last refresh; the frame is stale.
    #[default]
    Calculating,
    /// Every cell was computed for the current viewport.
    Displaying,
}

/// How a refresh spreads the per-pixel work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Serial,
    /// Rows are computed on the rayon pool; the frame is only updated once all rows are done.
    Parallel,
}

impl RenderMode {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Parallel => "parallel",
        }
    }
}

impl std::fmt::Display for RenderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
