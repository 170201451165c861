// Defines the actions a key press can request from the TUI state.
use crate::model::{EntryId, ListKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace a list's pending input with the full new text and place the cursor.
    EditBuffer {
        kind: ListKind,
        text: String,
        cursor: usize,
    },
    Submit(ListKind),
    /// Delete by stable id, resolved from the selection at key-press time.
    Remove(ListKind, EntryId),
    AutomateWorkflows,
    SuggestReminders,
    ToggleHelp,
    Quit,
}
