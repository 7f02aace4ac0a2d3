// Undo/redo for the single live document. Every content-modifying step
// records the prior markup; undo and redo swap snapshots between the two
// stacks.

#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the markup as it was before a modification. Any redo
    /// states are dropped; the timeline has branched.
    pub fn record(&mut self, previous: String) {
        self.redo_stack.clear();
        self.undo_stack.push(previous);
    }

    /// Steps back one snapshot, keeping the current markup for redo.
    /// Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &str) -> Option<String> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_string());
        Some(previous)
    }

    /// Re-applies the most recently undone snapshot.
    pub fn redo(&mut self, current: &str) -> Option<String> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current.to_string());
        Some(next)
    }
}
