use std::collections::BTreeSet;

//
// ─── CHALLENGE TRACKER ─────────────────────────────────────────────────────────
//

/// Tracks per-lesson challenge progress: which challenges are marked done
/// and which solution, if any, is currently revealed.
///
/// Completion is one-way for the life of the session. Revealing a solution
/// is single-selection: opening one closes any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeTracker {
    total: usize,
    completed: BTreeSet<usize>,
    open_solution: Option<usize>,
}

impl ChallengeTracker {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: BTreeSet::new(),
            open_solution: None,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Marks a challenge as completed. Repeat calls and out-of-range
    /// indices are ignored.
    pub fn mark_completed(&mut self, index: usize) {
        if index < self.total {
            self.completed.insert(index);
        }
    }

    #[must_use]
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.total > 0 && self.completed.len() == self.total
    }

    /// Toggles the revealed solution for a challenge.
    ///
    /// Toggling the already-open index hides it; toggling another index
    /// moves the reveal there. Out-of-range indices are ignored.
    pub fn toggle_solution(&mut self, index: usize) {
        if index >= self.total {
            return;
        }
        if self.open_solution == Some(index) {
            self.open_solution = None;
        } else {
            self.open_solution = Some(index);
        }
    }

    #[must_use]
    pub fn is_solution_open(&self, index: usize) -> bool {
        self.open_solution == Some(index)
    }

    #[must_use]
    pub fn open_solution(&self) -> Option<usize> {
        self.open_solution
    }
}
