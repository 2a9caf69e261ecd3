use crate::{Message, Verbosity};
use std::io::{IsTerminal, Write};
use std::sync::OnceLock;

/// Whether ANSI escape codes should be written to the standard error stream.
fn use_colors() -> bool {
    static COLORS: OnceLock<bool> = OnceLock::new();
    *COLORS.get_or_init(|| {
        let disabled = std::env::var_os("NO_COLOR").is_some();
        !disabled && std::io::stderr().is_terminal()
    })
}

/// Logs a message to the standard error stream.
pub fn log(
    Message {
        file,
        line,
        column,
        verbosity,
        module,
        message,
    }: Message,
) {
    let mut stderr = std::io::stderr().lock();

    let _ = if use_colors() {
        let color = match verbosity {
            Verbosity::Error => "1;31",
            Verbosity::Warning => "1;33",
            Verbosity::Info => "1;34",
            Verbosity::Trace => "1;30",
        };
        let name = verbosity.name().to_ascii_uppercase();
        let _ = write!(stderr, "\x1B[{color}m{name:<7}\x1B[0m ");
        let _ = write!(stderr, "\x1B[2m{module}\x1B[0m {message} ");
        writeln!(stderr, "\x1B[2;90m(at {file}:{line}:{column})\x1B[0m")
    } else {
        let _ = write!(stderr, "[{verbosity}] {module}: {message} ");
        writeln!(stderr, "(at {file}:{line}:{column})")
    };
}
