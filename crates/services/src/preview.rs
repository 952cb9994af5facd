//
// ─── PREVIEW PANE ──────────────────────────────────────────────────────────────
//

/// Which face of a live example is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// The markup rendered as styled output.
    #[default]
    Preview,
    /// The raw source text.
    Code,
}

/// Display state for one live example: rendered preview versus raw code,
/// and the optional before/after comparison.
///
/// The before toggle is only meaningful when a before variant exists; the
/// UI hides the control otherwise and the operation is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPane {
    mode: PreviewMode,
    show_before: bool,
    has_before: bool,
}

impl PreviewPane {
    #[must_use]
    pub fn new(has_before: bool) -> Self {
        Self {
            mode: PreviewMode::Preview,
            show_before: false,
            has_before,
        }
    }

    #[must_use]
    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    /// Sets the view mode directly. Two explicit targets, not a toggle.
    pub fn set_mode(&mut self, mode: PreviewMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn has_before(&self) -> bool {
        self.has_before
    }

    #[must_use]
    pub fn show_before(&self) -> bool {
        self.show_before
    }

    /// Flips between the before and after markup. No-op when the example
    /// has no before variant.
    pub fn toggle_before_after(&mut self) {
        if self.has_before {
            self.show_before = !self.show_before;
        }
    }
}
