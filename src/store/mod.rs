//! JSON file persistence for todos.
//!
//! The store owns durability and nothing else: the whole collection is read
//! before every derived view and rewritten after every mutation. There is no
//! caching layer and no incremental update API; within the single session
//! thread every read observes the immediately preceding write.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TaskpadError};
use crate::model::Todo;
use crate::util::atomic_write;

/// Default backing file, relative to the working directory.
pub const DEFAULT_TODO_FILE: &str = "todos.json";

/// Whole-file JSON store for todo records.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store backed by `todos.json` in the working directory.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(DEFAULT_TODO_FILE)
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full todo collection.
    ///
    /// Seeds the file with an empty array on first run. Unreadable or
    /// unparsable files are fatal and propagate to the caller.
    pub fn load_all(&self) -> Result<Vec<Todo>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "seeding empty todo file");
            atomic_write(&self.path, b"[]")?;
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            TaskpadError::io(format!("Failed to read: {}", self.path.display()), e)
        })?;

        serde_json::from_str(&content).map_err(|e| TaskpadError::SerializationError {
            context: format!("Failed to parse: {}", self.path.display()),
            source: e,
        })
    }

    /// Overwrite the full todo collection.
    pub fn save_all(&self, todos: &[Todo]) -> Result<()> {
        let content = serde_json::to_string_pretty(todos).map_err(|e| {
            TaskpadError::SerializationError {
                context: format!("Failed to serialize: {}", self.path.display()),
                source: e,
            }
        })?;
        atomic_write(&self.path, content.as_bytes())?;
        debug!(count = todos.len(), path = %self.path.display(), "saved todos");
        Ok(())
    }

    /// Create a new todo with the given title and persist the collection.
    ///
    /// Ids are assigned as `count + 1`, not `max(id) + 1`; after deleting the
    /// highest-id record this can hand out an id that is already in use.
    pub fn create(&self, title: impl Into<String>) -> Result<Todo> {
        let mut todos = self.load_all()?;
        let todo = Todo::new(todos.len() as u64 + 1, title);
        debug!(id = todo.id, "creating todo");
        todos.push(todo.clone());
        self.save_all(&todos)?;
        Ok(todo)
    }

    /// Flip the `done` flag of the todo with the given id.
    pub fn toggle_done(&self, id: u64) -> Result<Todo> {
        self.update(id, |todo| todo.done = !todo.done)
    }

    /// Replace the title of the todo with the given id. Empty titles are
    /// allowed; blanking a title is a supported edit.
    pub fn rename(&self, id: u64, title: impl Into<String>) -> Result<Todo> {
        let title = title.into();
        self.update(id, move |todo| todo.title = title)
    }

    /// Remove the todo with the given id.
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut todos = self.load_all()?;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(TaskpadError::TodoNotFound { id });
        }
        debug!(id, "deleted todo");
        self.save_all(&todos)
    }

    fn update(&self, id: u64, mutate: impl FnOnce(&mut Todo)) -> Result<Todo> {
        let mut todos = self.load_all()?;
        let todo = todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskpadError::TodoNotFound { id })?;
        mutate(todo);
        let updated = todo.clone();
        debug!(id, "updated todo");
        self.save_all(&todos)?;
        Ok(updated)
    }
}
