//! View state and the query engine deriving the visible todo page.
//!
//! [`state`] holds the session-scoped UI state, [`query`] computes the
//! filtered/sorted/paginated slice from it, and [`command`] maps that
//! derived snapshot to the set of single-key commands valid right now.

pub mod command;
pub mod query;
pub mod state;

pub use command::{allowed_commands, Command};
pub use query::{visible_page, PageView, Selected};
pub use state::ViewState;
