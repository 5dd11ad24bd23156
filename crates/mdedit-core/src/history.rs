//! Snapshot-based linear undo/redo history.
//!
//! The history stores whole-buffer pre-images: one snapshot is captured
//! immediately before each user-initiated edit. Undo pops the most recent
//! pre-image and parks the current buffer on the redo stack; redo is the
//! mirror operation. Any new edit invalidates the redo stack.
//!
//! Snapshots are owned `String`s, so later buffer mutation can never
//! retroactively alter a stored entry.

/// Default bound for the undo stack.
pub const DEFAULT_MAX_UNDO: usize = 100;

/// Linear undo/redo history over whole-buffer snapshots.
///
/// The undo stack is bounded: once full, capturing another snapshot evicts
/// the oldest entry. The redo stack is unbounded but is cleared by every
/// capture, so it can never outgrow the number of undos performed.
#[derive(Debug)]
pub struct EditHistory {
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    max_undo: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UNDO)
    }
}

impl EditHistory {
    /// Create a history with the given undo-stack bound.
    pub fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo,
        }
    }

    /// Capture the pre-edit buffer.
    ///
    /// Must be called exactly once per user-initiated edit, before the
    /// buffer is mutated, and never for non-edit changes such as selection
    /// moves. Clears the redo stack: the edit starts a new branch.
    pub fn capture_before_edit(&mut self, current: &str) {
        self.redo_stack.clear();
        self.undo_stack.push(current.to_string());
        if self.undo_stack.len() > self.max_undo {
            self.undo_stack.remove(0);
            tracing::debug!(target: "mdedit.history", max_undo = self.max_undo, "evicted oldest snapshot");
        }
    }

    /// Pop the most recent pre-image, parking `current` for redo.
    ///
    /// Returns `None` without touching either stack when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_string());
        Some(previous)
    }

    /// Pop the most recently undone buffer, parking `current` for undo.
    ///
    /// Returns `None` without touching either stack when there is nothing
    /// to redo. Does not count as an edit: the undo stack is pushed to
    /// directly, bypassing [`capture_before_edit`](Self::capture_before_edit).
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.to_string());
        Some(next)
    }

    /// Whether an undo would succeed.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo would succeed.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop all snapshots.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_then_redo_round_trips() {
        let mut history = EditHistory::default();
        history.capture_before_edit("v0");

        let previous = history.undo("v1").expect("one snapshot");
        assert_eq!(previous, "v0");

        let next = history.redo(&previous).expect("one redo entry");
        assert_eq!(next, "v1");
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_empty_stacks_are_silent_no_ops() {
        let mut history = EditHistory::default();
        assert_eq!(history.undo("current"), None);
        assert_eq!(history.redo("current"), None);
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_capture_clears_redo() {
        let mut history = EditHistory::default();
        history.capture_before_edit("v0");
        history.undo("v1");
        assert!(history.can_redo());

        history.capture_before_edit("v2");
        assert!(!history.can_redo());
        assert_eq!(history.redo("v2"), None);
    }

    #[test]
    fn test_bound_evicts_oldest() {
        let mut history = EditHistory::new(3);
        for i in 0..5 {
            history.capture_before_edit(&format!("v{i}"));
        }
        assert_eq!(history.undo_depth(), 3);

        // "v0" and "v1" were evicted; the deepest reachable pre-image is "v2".
        assert_eq!(history.undo("v5").as_deref(), Some("v4"));
        assert_eq!(history.undo("v4").as_deref(), Some("v3"));
        assert_eq!(history.undo("v3").as_deref(), Some("v2"));
        assert_eq!(history.undo("v2"), None);
    }

    #[test]
    fn test_undo_redo_do_not_capture() {
        let mut history = EditHistory::default();
        history.capture_before_edit("v0");
        history.capture_before_edit("v1");

        history.undo("v2");
        history.redo("v1");
        // Depths are unchanged after the round trip.
        assert_eq!(history.undo_depth(), 2);
        assert_eq!(history.redo_depth(), 0);
    }
}
