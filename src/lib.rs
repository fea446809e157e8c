//! taskpad: interactive keystroke-driven terminal todo manager.
//!
//! Todos live in a single JSON file and are managed through a blocking
//! read/prompt/validate loop: single-letter commands, free-text answers,
//! immediate re-render. The session keeps ephemeral view state (page,
//! search, sort, hide-completed, selection) and derives the visible slice
//! from it on every render; every mutation rewrites the whole file.
//!
//! # Architecture
//!
//! - [`model`]: the persisted `Todo` record and sort enums
//! - [`store`]: whole-file JSON persistence with atomic writes
//! - [`view`]: view state, the filter/sort/paginate/select query engine,
//!   and state-derived command availability
//! - [`session`]: the blocking terminal loop, input readers, rendering
//! - [`error`]: error types and handling
//!
//! # Example
//!
//! ```rust,no_run
//! use taskpad::session::{input::TerminalInput, Session};
//! use taskpad::store::JsonStore;
//!
//! fn main() -> taskpad::Result<()> {
//!     let store = JsonStore::default_location();
//!     let mut session = Session::new(store, TerminalInput::new(), std::io::stdout());
//!     session.run()
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod util;
pub mod view;

// Re-export commonly used types at the crate root
pub use error::{Result, TaskpadError};
pub use model::{SortKey, SortOrder, Todo};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
