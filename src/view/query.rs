//! Derivation of the visible page.
//!
//! `visible_page` is a pure function of the full dataset and the view state:
//! filter, then sort, then paginate, then resolve the selection against the
//! paginated slice. It is recomputed on every render; nothing is memoized.

use crate::model::{SortKey, SortOrder, Todo};
use crate::view::state::ViewState;

/// Resolved selection within the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected {
    /// Stable id of the selected todo.
    pub id: u64,
    /// 0-based position within the visible page, recomputed each render.
    pub index: usize,
}

/// One coherent snapshot of the derived view.
///
/// Rendering and command availability both read this, so a single derivation
/// decides what is shown and which keys are accepted next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// The visible slice, in display order.
    pub items: Vec<Todo>,
    /// Number of todos surviving the filter (before pagination).
    pub filtered_count: usize,
    /// Highest valid page for the current filter and page size; at least 1.
    pub max_page: usize,
    /// Selection, if `selected_id` resolves within this page.
    pub selected: Option<Selected>,
}

impl PageView {
    /// The selected todo, if the selection resolves on this page.
    #[must_use]
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.selected.map(|s| &self.items[s.index])
    }
}

/// Highest valid page index for a filtered count and page size; never below 1.
#[must_use]
pub fn max_page(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size).max(1)
}

/// Compute the visible page for the given dataset and view state.
#[must_use]
pub fn visible_page(todos: &[Todo], state: &ViewState) -> PageView {
    let mut filtered: Vec<&Todo> = todos
        .iter()
        .filter(|t| !state.hide_completed || !t.done)
        .filter(|t| matches_search(&t.title, &state.search_text))
        .collect();

    match state.sort_key {
        SortKey::Title => {
            filtered.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::Status => {
            // Stable sort: equal-status todos keep creation order.
            filtered.sort_by_key(|t| (t.done, t.created_at));
        }
        SortKey::CreatedAt => {
            // Storage order is creation order; no sort step.
        }
    }

    if state.sort_order == SortOrder::Desc {
        filtered.reverse();
    }

    let filtered_count = filtered.len();
    let max_page = max_page(filtered_count, state.page_size);

    let start = (state.page - 1) * state.page_size;
    let end = (start + state.page_size).min(filtered_count);
    let items: Vec<Todo> = if start < filtered_count {
        filtered[start..end].iter().map(|t| (*t).clone()).collect()
    } else {
        Vec::new()
    };

    let selected = state.selected_id.and_then(|id| {
        items
            .iter()
            .position(|t| t.id == id)
            .map(|index| Selected { id, index })
    });

    PageView {
        items,
        filtered_count,
        max_page,
        selected,
    }
}

/// Conjunctive, case-insensitive, literal substring match.
///
/// The search text is split on whitespace; a title matches only if every
/// term occurs in it. Terms are matched literally, so characters that would
/// be pattern syntax elsewhere (`.`, `*`, `(`, ...) have no special meaning.
#[must_use]
pub fn matches_search(title: &str, search_text: &str) -> bool {
    let title = title.to_lowercase();
    search_text
        .split_whitespace()
        .all(|term| title.contains(&term.to_lowercase()))
}
