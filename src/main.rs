//! taskpad: interactive keystroke-driven terminal todo manager.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use taskpad::session::input::TerminalInput;
use taskpad::session::Session;
use taskpad::store::JsonStore;

fn main() -> ExitCode {
    // Keep the interactive screen clean: warnings and up, stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("taskpad v{} - your todos, one keystroke away", taskpad::VERSION);

    let store = JsonStore::default_location();
    let mut session = Session::new(store, TerminalInput::new(), std::io::stdout());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");

            if std::env::var("RUST_BACKTRACE").is_ok() {
                if let Some(source) = std::error::Error::source(&e) {
                    eprintln!("Caused by: {source}");
                }
            }

            ExitCode::from(e.exit_code() as u8)
        }
    }
}
