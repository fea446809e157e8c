//! Session-scoped view state.

use crate::model::{SortKey, SortOrder};

/// Default number of todos per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Ephemeral UI state for one interactive session.
///
/// Created once with defaults at session start, mutated in place by command
/// handlers, and discarded at exit; it is never persisted. The derivation in
/// [`crate::view::query`] reads it together with the full dataset to compute
/// the visible page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Current page, 1-based. Kept within `[1, max_page]` by only offering
    /// navigation commands that stay in range; handlers do not clamp.
    pub page: usize,
    /// Todos per page, at least 1.
    pub page_size: usize,
    /// Whitespace-separated search terms; empty means no filter.
    pub search_text: String,
    /// Field the visible list is ordered by.
    pub sort_key: SortKey,
    /// Direction of the ordering.
    pub sort_order: SortOrder,
    /// Drop completed todos from the visible set.
    pub hide_completed: bool,
    /// Id of the selected todo, if any. Resolves only while the record is on
    /// the currently visible page.
    pub selected_id: Option<u64>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_text: String::new(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            hide_completed: false,
            selected_id: None,
        }
    }
}

impl ViewState {
    /// Create a fresh state with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a search filter is active.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.search_text.is_empty()
    }

    /// Whether the sort differs from the default (creation order, ascending).
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.sort_key != SortKey::CreatedAt || self.sort_order != SortOrder::Asc
    }

    /// Reset the sort to the default.
    pub fn reset_sort(&mut self) {
        self.sort_key = SortKey::CreatedAt;
        self.sort_order = SortOrder::Asc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ViewState::new();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert!(!state.is_searching());
        assert!(!state.is_sorted());
        assert!(!state.hide_completed);
        assert_eq!(state.selected_id, None);
    }

    #[test]
    fn test_is_sorted_tracks_both_key_and_order() {
        let mut state = ViewState::new();

        state.sort_order = SortOrder::Desc;
        assert!(state.is_sorted());

        state.reset_sort();
        assert!(!state.is_sorted());

        state.sort_key = SortKey::Title;
        assert!(state.is_sorted());
    }
}
