//! Property-based tests for the view derivation pipeline.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use taskpad::model::{SortKey, SortOrder, Todo};
use taskpad::view::{visible_page, ViewState};

fn arb_todo() -> impl Strategy<Value = Todo> {
    (1..200u64, "[a-z .*]{0,12}", any::<bool>(), 0..1_000_000i64).prop_map(
        |(id, title, done, secs)| Todo {
            id,
            title,
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
            done,
        },
    )
}

fn arb_state() -> impl Strategy<Value = ViewState> {
    (
        1..5usize,
        1..20usize,
        "[a-z ]{0,6}",
        prop_oneof![
            Just(SortKey::Title),
            Just(SortKey::Status),
            Just(SortKey::CreatedAt)
        ],
        prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)],
        any::<bool>(),
        proptest::option::of(1..200u64),
    )
        .prop_map(
            |(page, page_size, search_text, sort_key, sort_order, hide_completed, selected_id)| {
                ViewState {
                    page,
                    page_size,
                    search_text,
                    sort_key,
                    sort_order,
                    hide_completed,
                    selected_id,
                }
            },
        )
}

proptest! {
    #[test]
    fn derivation_is_pure(
        todos in proptest::collection::vec(arb_todo(), 0..40),
        state in arb_state(),
    ) {
        prop_assert_eq!(visible_page(&todos, &state), visible_page(&todos, &state));
    }

    #[test]
    fn pagination_bounds_hold(
        todos in proptest::collection::vec(arb_todo(), 0..40),
        state in arb_state(),
    ) {
        let view = visible_page(&todos, &state);

        prop_assert!(view.max_page >= 1);
        prop_assert!(view.items.len() <= state.page_size);
        prop_assert!(view.filtered_count <= todos.len());
    }

    #[test]
    fn filtering_is_conjunctive(
        todos in proptest::collection::vec(arb_todo(), 0..40),
        search in "[a-z ]{0,6}",
    ) {
        let state = ViewState {
            search_text: search.clone(),
            page_size: 100,
            ..ViewState::new()
        };
        let view = visible_page(&todos, &state);

        for todo in &view.items {
            let title = todo.title.to_lowercase();
            for term in search.split_whitespace() {
                prop_assert!(title.contains(term));
            }
        }
    }

    #[test]
    fn empty_search_keeps_the_unfiltered_set(
        todos in proptest::collection::vec(arb_todo(), 0..40),
    ) {
        let state = ViewState {
            page_size: 100,
            ..ViewState::new()
        };
        let view = visible_page(&todos, &state);

        prop_assert_eq!(view.filtered_count, todos.len());
    }

    #[test]
    fn status_sort_is_stable_by_creation_time(
        todos in proptest::collection::vec(arb_todo(), 0..40),
    ) {
        let state = ViewState {
            sort_key: SortKey::Status,
            page_size: 100,
            ..ViewState::new()
        };
        let view = visible_page(&todos, &state);

        for pair in view.items.windows(2) {
            prop_assert!(
                (pair[0].done, pair[0].created_at) <= (pair[1].done, pair[1].created_at)
            );
        }
    }

    #[test]
    fn selection_resolves_only_within_the_page(
        todos in proptest::collection::vec(arb_todo(), 0..40),
        state in arb_state(),
    ) {
        let view = visible_page(&todos, &state);

        if let Some(selected) = view.selected {
            prop_assert_eq!(Some(selected.id), state.selected_id);
            prop_assert_eq!(view.items[selected.index].id, selected.id);
        }
    }
}
