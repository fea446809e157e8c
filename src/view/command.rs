//! Single-key commands and their per-state availability.
//!
//! The set of valid commands is computed from the derived view, not fixed:
//! the same set drives the rendered command bar and validates the next key
//! read, so a key that is not currently offered is rejected even when it is
//! a globally valid command letter.

use crate::view::query::PageView;
use crate::view::state::ViewState;

/// A single-key session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the session.
    Quit,
    /// Re-render the list.
    List,
    /// Add a new todo.
    Add,
    /// Toggle between the default sort and an interactively chosen one.
    ToggleSort,
    /// Toggle hiding of completed todos.
    ToggleHide,
    /// Change the page size.
    PageSize,
    /// Go to the previous page.
    PrevPage,
    /// Go to the next page.
    NextPage,
    /// Set or clear the search filter.
    ToggleSearch,
    /// Select a todo by its page-relative number.
    Select,
    /// Clear the selection.
    Deselect,
    /// Flip the selected todo's done flag.
    ToggleDone,
    /// Delete the selected todo.
    Delete,
    /// Edit the selected todo's title.
    Edit,
}

impl Command {
    /// The keystroke bound to this command.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Quit => 'q',
            Self::List => 'l',
            Self::Add => 'a',
            Self::ToggleSort => 'o',
            Self::ToggleHide => 'h',
            Self::PageSize => 'c',
            Self::PrevPage => 'p',
            Self::NextPage => 'n',
            Self::ToggleSearch => 'f',
            Self::Select => 's',
            Self::Deselect => 'u',
            Self::ToggleDone => 't',
            Self::Delete => 'd',
            Self::Edit => 'e',
        }
    }

    /// Short label shown in the command bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::List => "list",
            Self::Add => "add",
            Self::ToggleSort => "order",
            Self::ToggleHide => "hide done",
            Self::PageSize => "page size",
            Self::PrevPage => "prev page",
            Self::NextPage => "next page",
            Self::ToggleSearch => "find",
            Self::Select => "select",
            Self::Deselect => "unselect",
            Self::ToggleDone => "toggle done",
            Self::Delete => "delete",
            Self::Edit => "edit",
        }
    }
}

/// Compute the commands valid for the current derived view.
///
/// `total` is the size of the unfiltered dataset; search is only offered
/// when there is something to search.
#[must_use]
pub fn allowed_commands(view: &PageView, state: &ViewState, total: usize) -> Vec<Command> {
    // A resolved selection narrows the session to selection commands only.
    if view.selected.is_some() {
        return vec![
            Command::Deselect,
            Command::ToggleDone,
            Command::Delete,
            Command::Edit,
        ];
    }

    let mut commands = vec![
        Command::Quit,
        Command::List,
        Command::Add,
        Command::ToggleSort,
        Command::ToggleHide,
        Command::PageSize,
    ];
    if state.page > 1 {
        commands.push(Command::PrevPage);
    }
    if state.page < view.max_page {
        commands.push(Command::NextPage);
    }
    if total > 0 {
        commands.push(Command::ToggleSearch);
    }
    if !view.items.is_empty() {
        commands.push(Command::Select);
    }
    commands
}

/// Look up a pressed key in the currently offered set.
#[must_use]
pub fn command_for_key(allowed: &[Command], key: char) -> Option<Command> {
    allowed.iter().copied().find(|c| c.key() == key)
}
