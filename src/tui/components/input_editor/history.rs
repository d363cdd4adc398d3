//! Committed-line history for the InputEditor.
//!
//! Entries are append-only and in-memory. `browsing` is the index of the
//! entry currently recalled into the input line, or `None` while the user
//! is composing a fresh line.

pub(super) struct History {
    entries: Vec<String>,
    browsing: Option<usize>,
}

/// Result of stepping toward newer entries.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Recall<'a> {
    /// A newer entry to show.
    Entry(&'a str),
    /// Stepped past the newest entry; browsing is over.
    Live,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            browsing: None,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn browsing(&self) -> Option<usize> {
        self.browsing
    }

    /// Record a committed line and stop browsing.
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
        self.browsing = None;
    }

    /// Step toward older entries, starting from the newest.
    ///
    /// Returns `None` when there is no history at all.
    pub fn prev(&mut self) -> Option<&str> {
        let newest = self.entries.len().checked_sub(1)?;
        let idx = match self.browsing {
            None => newest,
            Some(i) => i.saturating_sub(1),
        };
        self.browsing = Some(idx);
        Some(&self.entries[idx])
    }

    /// Step toward newer entries.
    ///
    /// Not browsing counts as sitting on the newest entry, so the step
    /// lands on `Live`. Returns `None` only when there is no history.
    pub fn next(&mut self) -> Option<Recall<'_>> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = self.browsing.unwrap_or(self.entries.len() - 1);
        if idx + 1 >= self.entries.len() {
            self.browsing = None;
            return Some(Recall::Live);
        }
        self.browsing = Some(idx + 1);
        Some(Recall::Entry(&self.entries[idx + 1]))
    }
}
