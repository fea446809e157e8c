//! The interactive session loop.
//!
//! Single-threaded and strictly sequential: load the dataset, derive the
//! visible page, render it, read one validated command, dispatch, repeat.
//! Every handler runs to completion (including nested prompts) before the
//! next render. The only suspension points are the blocking reads.

pub mod input;
pub mod render;

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::model::{SortKey, SortOrder};
use crate::store::JsonStore;
use crate::view::{allowed_commands, visible_page, Command, PageView, ViewState};

use crate::view::command::command_for_key;
use input::UserInput;

/// One interactive session over a store, an input source, and an output sink.
pub struct Session<I: UserInput, W: Write> {
    store: JsonStore,
    state: ViewState,
    input: I,
    out: W,
}

impl<I: UserInput, W: Write> Session<I, W> {
    /// Create a session with default view state.
    pub fn new(store: JsonStore, input: I, out: W) -> Self {
        Self {
            store,
            state: ViewState::new(),
            input,
            out,
        }
    }

    /// Current view state (page, filters, selection).
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Run the loop until the quit command. Store failures propagate.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let todos = self.store.load_all()?;
            let view = visible_page(&todos, &self.state);
            render::list(&mut self.out, &view, &self.state)?;

            let allowed = allowed_commands(&view, &self.state, todos.len());
            render::command_bar(&mut self.out, &allowed)?;

            let command = self.prompt_command(&allowed)?;
            debug!(?command, "dispatching");
            match command {
                Command::Quit => return Ok(()),
                Command::List => {}
                Command::Add => self.add()?,
                Command::ToggleSort => self.toggle_sort()?,
                Command::ToggleHide => {
                    self.state.hide_completed = !self.state.hide_completed;
                    self.state.page = 1;
                }
                Command::PageSize => self.change_page_size()?,
                Command::PrevPage => self.state.page -= 1,
                Command::NextPage => self.state.page += 1,
                Command::ToggleSearch => self.toggle_search()?,
                Command::Select => self.select(&view)?,
                Command::Deselect => self.state.selected_id = None,
                Command::ToggleDone => self.toggle_done(&view)?,
                Command::Delete => self.delete(&view)?,
                Command::Edit => self.edit(&view)?,
            }
        }
    }

    /// Read keys until one maps to a currently offered command.
    fn prompt_command(&mut self, allowed: &[Command]) -> Result<Command> {
        loop {
            render::prompt(&mut self.out, "command> ")?;
            let key = self.input.read_key()?;
            render::message(&mut self.out, &key.to_string())?;
            if let Some(command) = command_for_key(allowed, key) {
                return Ok(command);
            }
            render::error(&mut self.out, "invalid input")?;
        }
    }

    /// Read lines until one satisfies the acceptance predicate.
    fn prompt_line(&mut self, prompt: &str, accept: impl Fn(&str) -> bool) -> Result<String> {
        loop {
            render::prompt(&mut self.out, prompt)?;
            let line = self.input.read_line()?;
            if accept(&line) {
                return Ok(line);
            }
            render::error(&mut self.out, "invalid input")?;
        }
    }

    fn add(&mut self) -> Result<()> {
        let title = self.prompt_line("title> ", |line| !line.trim().is_empty())?;
        let todo = self.store.create(title)?;
        render::message(&mut self.out, &format!("Added \"{}\"", todo.title))
    }

    fn toggle_done(&mut self, view: &PageView) -> Result<()> {
        let Some(selected) = view.selected else {
            return render::error(&mut self.out, "nothing selected");
        };
        let todo = self.store.toggle_done(selected.id)?;
        let status = if todo.done { "done" } else { "open" };
        render::message(&mut self.out, &format!("\"{}\" is now {status}", todo.title))
    }

    fn delete(&mut self, view: &PageView) -> Result<()> {
        let Some(selected) = view.selected else {
            return render::error(&mut self.out, "nothing selected");
        };
        self.store.delete(selected.id)?;
        // Selection always clears, even though the id may be reassigned later.
        self.state.selected_id = None;
        render::message(&mut self.out, "Deleted")
    }

    fn edit(&mut self, view: &PageView) -> Result<()> {
        let Some(selected) = view.selected else {
            return render::error(&mut self.out, "nothing selected");
        };
        // Empty input is a valid edit: it blanks the title.
        let title = self.prompt_line("new title> ", |_| true)?;
        self.store.rename(selected.id, title)?;
        render::message(&mut self.out, "Title updated")
    }

    fn select(&mut self, view: &PageView) -> Result<()> {
        let prompt = format!("number (1-{})> ", view.items.len());
        let line = self.prompt_line(&prompt, |line| {
            line.trim()
                .parse::<usize>()
                .is_ok_and(|n| n >= 1 && n <= view.items.len())
        })?;
        let index = line.trim().parse::<usize>().unwrap_or(1) - 1;
        self.state.selected_id = Some(view.items[index].id);
        Ok(())
    }

    fn toggle_search(&mut self) -> Result<()> {
        if self.state.is_searching() {
            self.state.search_text.clear();
            render::message(&mut self.out, "Search cleared")?;
        } else {
            // Any content is accepted, including an empty line.
            self.state.search_text = self.prompt_line("find> ", |_| true)?;
        }
        self.state.page = 1;
        Ok(())
    }

    fn toggle_sort(&mut self) -> Result<()> {
        if self.state.is_sorted() {
            self.state.reset_sort();
            return render::message(&mut self.out, "Order reset");
        }

        let key = loop {
            render::prompt(&mut self.out, "order by (t)itle (s)tatus (c)reated> ")?;
            match self.input.read_key()? {
                't' => break SortKey::Title,
                's' => break SortKey::Status,
                'c' => break SortKey::CreatedAt,
                _ => render::error(&mut self.out, "invalid input")?,
            }
        };
        render::message(&mut self.out, key.label())?;

        let order = loop {
            render::prompt(&mut self.out, "(a)scending or (d)escending> ")?;
            match self.input.read_key()? {
                'a' => break SortOrder::Asc,
                'd' => break SortOrder::Desc,
                _ => render::error(&mut self.out, "invalid input")?,
            }
        };
        render::message(&mut self.out, order.label())?;

        self.state.sort_key = key;
        self.state.sort_order = order;
        Ok(())
    }

    fn change_page_size(&mut self) -> Result<()> {
        let line = self.prompt_line("page size> ", |line| {
            line.trim().parse::<usize>().is_ok_and(|n| n >= 1)
        })?;
        self.state.page_size = line.trim().parse().unwrap_or(1);
        self.state.page = 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskpadError;

    /// Scripted input source for driving the loop in tests.
    pub struct ScriptedInput {
        keys: Vec<char>,
        lines: Vec<String>,
    }

    impl ScriptedInput {
        pub fn new(keys: &str, lines: &[&str]) -> Self {
            Self {
                keys: keys.chars().rev().collect(),
                lines: lines.iter().rev().map(|s| (*s).to_string()).collect(),
            }
        }
    }

    impl UserInput for ScriptedInput {
        fn read_line(&mut self) -> crate::error::Result<String> {
            self.lines.pop().ok_or(TaskpadError::InputClosed)
        }

        fn read_key(&mut self) -> crate::error::Result<char> {
            self.keys.pop().ok_or(TaskpadError::InputClosed)
        }
    }

    fn session(
        dir: &tempfile::TempDir,
        keys: &str,
        lines: &[&str],
    ) -> Session<ScriptedInput, Vec<u8>> {
        let store = JsonStore::new(dir.path().join("todos.json"));
        Session::new(store, ScriptedInput::new(keys, lines), Vec::new())
    }

    #[test]
    fn test_quit_ends_the_loop() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir, "q", &[]);
        session.run().unwrap();
    }

    #[test]
    fn test_invalid_key_is_reprompted() {
        let dir = tempfile::tempdir().unwrap();
        // 'x' is never a command; the loop must re-prompt and accept 'q'.
        let mut session = session(&dir, "xq", &[]);
        session.run().unwrap();

        let output = String::from_utf8(session.out.clone()).unwrap();
        assert!(output.contains("invalid input"));
    }

    #[test]
    fn test_add_requires_non_empty_title() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir, "aq", &["", "  ", "Buy milk"]);
        session.run().unwrap();

        let todos = session.store.load_all().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Buy milk");
    }

    #[test]
    fn test_select_out_of_range_reprompts_without_state_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir, "asuq", &["Buy milk", "9", "0", "1"]);
        session.run().unwrap();

        // '9' and '0' were rejected; '1' selected, 'u' deselected, 'q' quit.
        assert_eq!(session.state.selected_id, None);
        let output = String::from_utf8(session.out.clone()).unwrap();
        assert!(output.contains("invalid input"));
    }

    #[test]
    fn test_sort_prompts_key_then_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir, "aotdq", &["Buy milk"]);
        session.run().unwrap();

        assert_eq!(session.state.sort_key, SortKey::Title);
        assert_eq!(session.state.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_sort_toggle_resets_when_non_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir, "aotdoq", &["Buy milk"]);
        session.run().unwrap();

        assert!(!session.state.is_sorted());
    }

    #[test]
    fn test_search_not_offered_on_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        // 'f' must be rejected while the dataset is empty.
        let mut session = session(&dir, "fq", &[]);
        session.run().unwrap();

        let output = String::from_utf8(session.out.clone()).unwrap();
        assert!(output.contains("invalid input"));
        assert!(!session.state.is_searching());
    }
}
