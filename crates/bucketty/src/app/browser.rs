use std::collections::HashSet;

use ratatui::widgets::ListState;

use crate::domain::tree::{self, Folder, TreeRow};

/// Lifecycle of the bucket listing shown in the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingPhase {
    /// No listing has been requested yet.
    Idle,
    /// A listing request is in flight.
    Loading,
    /// The most recent listing response has been applied.
    Rendered,
}

/// Holds all in-memory state for the file tree browser.
pub struct BrowserState {
    /// Empty-state or failure message to show instead of rows.
    pub error: Option<String>,
    /// Folders the user has opened; everything else renders collapsed.
    pub expanded: HashSet<String>,
    /// Row selection shared with the list widget.
    pub list_state: ListState,
    pub phase: ListingPhase,
    /// Visible rows derived from the tree and the expansion set.
    pub rows: Vec<TreeRow>,
    tree: Folder,
}

impl BrowserState {
    pub fn new() -> Self {
        Self {
            error: None,
            expanded: HashSet::new(),
            list_state: ListState::default(),
            phase: ListingPhase::Idle,
            rows: Vec::new(),
            tree: Folder::new(),
        }
    }

    /// Marks a listing request as in flight.
    pub fn mark_loading(&mut self) {
        self.phase = ListingPhase::Loading;
    }

    /// Replaces the tree with a fresh listing, keeping expansion state and
    /// clamping the selection to the new row count.
    pub fn apply_listing(&mut self, files: &[String]) {
        self.error = None;
        self.phase = ListingPhase::Rendered;
        self.tree = tree::build_tree(files);
        self.rebuild_rows();
    }

    /// Replaces the listing with a failure message.
    pub fn apply_listing_error(&mut self, message: String) {
        self.error = Some(message);
        self.phase = ListingPhase::Rendered;
        self.tree = Folder::new();
        self.rows.clear();
        self.list_state.select(None);
    }

    /// Returns the row under the cursor.
    pub fn selected_row(&self) -> Option<&TreeRow> {
        self.list_state
            .selected()
            .and_then(|index| self.rows.get(index))
    }

    /// Moves the selection down, wrapping at the end.
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let next = match self.list_state.selected() {
            Some(index) if index + 1 < self.rows.len() => index + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Moves the selection up, wrapping at the start.
    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }

        let previous = match self.list_state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(index) => index - 1,
        };
        self.list_state.select(Some(previous));
    }

    /// Toggles the selected folder between expanded and collapsed.
    pub fn toggle_selected_folder(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if !row.is_folder {
            return;
        }

        let key = row.key.clone();
        if !self.expanded.remove(&key) {
            self.expanded.insert(key);
        }
        self.rebuild_rows();
    }

    /// Expands the selected folder; a no-op on files and open folders.
    pub fn expand_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if row.is_folder && !self.expanded.contains(&row.key) {
            self.expanded.insert(row.key.clone());
            self.rebuild_rows();
        }
    }

    /// Collapses the selected folder; a no-op on files and closed folders.
    pub fn collapse_selected(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };
        if row.is_folder && self.expanded.contains(&row.key) {
            let key = row.key.clone();
            self.expanded.remove(&key);
            self.rebuild_rows();
        }
    }

    fn rebuild_rows(&mut self) {
        self.rows = tree::flatten_visible(&self.tree, &self.expanded);

        if self.rows.is_empty() {
            self.list_state.select(None);
        } else {
            let selected = self
                .list_state
                .selected()
                .unwrap_or(0)
                .min(self.rows.len() - 1);
            self.list_state.select(Some(selected));
        }
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}
