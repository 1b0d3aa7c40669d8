//! Raw recall history: the ↑/↓ command ring.
//!
//! This is a separate sequence from the displayed output log — clearing
//! the screen never touches it. The cursor is `None` while the visitor
//! is not browsing. On the first ↑ the uncommitted buffer is stashed as
//! a draft and restored when ↓ steps past the newest entry, so a full
//! ↑×n / ↓×n round trip leaves the prompt exactly as it was.

/// Append-only recall history with a browse cursor.
#[derive(Debug, Default)]
pub struct HistoryTracker {
    entries: Vec<String>,
    cursor: Option<usize>,
    draft: Option<String>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one executed command and leave browse mode.
    ///
    /// The caller enforces the `clear` guard; every other submitted
    /// command — including ones that produced "command not found" — is
    /// recorded so it can be recalled and edited.
    pub fn record(&mut self, raw: &str) {
        self.entries.push(raw.to_string());
        self.reset();
    }

    /// All recorded commands, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current browse cursor, `None` when not browsing.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    /// ↑: step to the previous (older) entry.
    ///
    /// Entering browse mode stashes `current_buffer` as the draft and
    /// starts at the newest entry. At the oldest entry the cursor stays
    /// pinned. Returns the entry the buffer should show, or `None` when
    /// history is empty.
    pub fn recall_previous(&mut self, current_buffer: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        match self.cursor {
            None => {
                self.draft = Some(current_buffer.to_string());
                self.cursor = Some(self.entries.len() - 1);
            }
            Some(0) => {}
            Some(index) => self.cursor = Some(index - 1),
        }
        self.cursor.map(|index| self.entries[index].as_str())
    }

    /// ↓: step to the next (newer) entry.
    ///
    /// Stepping past the newest entry leaves browse mode and returns the
    /// stashed draft (empty if recall started from an empty prompt).
    /// Returns `None` when not browsing.
    pub fn recall_next(&mut self) -> Option<String> {
        match self.cursor {
            None => None,
            Some(index) if index + 1 >= self.entries.len() => {
                self.cursor = None;
                Some(self.draft.take().unwrap_or_default())
            }
            Some(index) => {
                self.cursor = Some(index + 1);
                Some(self.entries[index + 1].clone())
            }
        }
    }

    /// Leave browse mode and drop any stashed draft.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.draft = None;
    }
}
