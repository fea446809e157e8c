//! Rendering of the todo list, command bar, and status messages.
//!
//! All output goes through a generic writer so tests can capture it; color
//! is applied with `console`, which degrades to plain text off a terminal.

use std::io::Write;

use console::style;

use crate::error::{Result, TaskpadError};
use crate::view::{Command, PageView, ViewState};

fn io_err(e: std::io::Error) -> TaskpadError {
    TaskpadError::io("writing to output", e)
}

/// Render the visible page: header, one line per todo, active filters.
pub fn list(out: &mut impl Write, view: &PageView, state: &ViewState) -> Result<()> {
    writeln!(out).map_err(io_err)?;
    writeln!(
        out,
        "{} page {}/{} ({} matching)",
        style("Todos").bold(),
        state.page,
        view.max_page,
        view.filtered_count
    )
    .map_err(io_err)?;

    if view.items.is_empty() {
        writeln!(out, "  {}", style("(nothing to show)").dim()).map_err(io_err)?;
    }

    for (i, todo) in view.items.iter().enumerate() {
        let marker = if view.selected.is_some_and(|s| s.index == i) {
            ">"
        } else {
            " "
        };
        let glyph = if todo.done {
            style("[x]").green()
        } else {
            style("[ ]").white()
        };
        writeln!(out, "{marker} {:>2} {glyph} {}", i + 1, todo.title).map_err(io_err)?;
    }

    let mut filters = Vec::new();
    if state.is_searching() {
        filters.push(format!("find \"{}\"", state.search_text));
    }
    if state.hide_completed {
        filters.push("hiding done".to_string());
    }
    if state.is_sorted() {
        filters.push(format!(
            "order: {} {}",
            state.sort_key.label(),
            state.sort_order.label()
        ));
    }
    if !filters.is_empty() {
        writeln!(out, "{}", style(filters.join(" | ")).dim()).map_err(io_err)?;
    }

    Ok(())
}

/// Render the command bar for the currently offered commands.
pub fn command_bar(out: &mut impl Write, allowed: &[Command]) -> Result<()> {
    let parts: Vec<String> = allowed
        .iter()
        .map(|c| format!("({}) {}", style(c.key()).cyan().bold(), c.label()))
        .collect();
    writeln!(out, "{}", parts.join("  ")).map_err(io_err)
}

/// Render a one-line status message.
pub fn message(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{text}").map_err(io_err)
}

/// Render a one-line recoverable error message.
pub fn error(out: &mut impl Write, text: &str) -> Result<()> {
    writeln!(out, "{}", style(text).red()).map_err(io_err)
}

/// Render an inline prompt (no trailing newline).
pub fn prompt(out: &mut impl Write, text: &str) -> Result<()> {
    write!(out, "{text}").map_err(io_err)?;
    out.flush().map_err(io_err)
}
