//
// ─── PLAYGROUND BUFFER ─────────────────────────────────────────────────────────
//

/// An editable code buffer seeded from starter text, with reset back to
/// the seed. Used for challenge editors and the free-form playground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundBuffer {
    initial: String,
    code: String,
}

impl PlaygroundBuffer {
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            code: initial.clone(),
            initial,
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn initial(&self) -> &str {
        &self.initial
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Restores the buffer to its starter text.
    pub fn reset(&mut self) {
        self.code.clone_from(&self.initial);
    }

    /// True once the buffer diverges from its starter text.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.code != self.initial
    }
}
