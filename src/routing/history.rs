//! Browser-style navigation history.
//!
//! Models the non-hash history API: an ordered list of visited paths plus a
//! cursor. Pushing while the cursor sits before the newest entry drops the
//! forward entries, exactly as a browser does after back-then-navigate.

/// Ordered list of visited paths with a movable cursor.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    /// Index of the current entry; `None` while nothing has been visited.
    index: Option<usize>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the current entry, if any navigation has happened.
    pub fn current(&self) -> Option<&str> {
        self.index.map(|i| self.entries[i].as_str())
    }

    /// Push a new entry, dropping any forward entries past the cursor.
    pub fn push(&mut self, path: impl Into<String>) {
        if let Some(i) = self.index {
            self.entries.truncate(i + 1);
        }
        self.entries.push(path.into());
        self.index = Some(self.entries.len() - 1);
    }

    /// Replace the current entry in place; pushes if the history is empty.
    pub fn replace(&mut self, path: impl Into<String>) {
        match self.index {
            Some(i) => self.entries[i] = path.into(),
            None => self.push(path),
        }
    }

    /// Move the cursor one entry back. Returns the new current path, or
    /// `None` (without moving) when already at the oldest entry.
    pub fn back(&mut self) -> Option<&str> {
        self.go(-1)
    }

    /// Move the cursor one entry forward. Returns the new current path, or
    /// `None` (without moving) when already at the newest entry.
    pub fn forward(&mut self) -> Option<&str> {
        self.go(1)
    }

    /// Move the cursor by `delta` entries. Out-of-range moves do nothing
    /// and return `None`, like the browser history API.
    pub fn go(&mut self, delta: isize) -> Option<&str> {
        let current = self.index?;
        let target = current.checked_add_signed(delta)?;
        if target >= self.entries.len() {
            return None;
        }
        self.index = Some(target);
        Some(self.entries[target].as_str())
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any navigation has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded paths from oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
