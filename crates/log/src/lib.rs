//! A small logging library shared by the `noisekit` crates.
//!
//! Messages carry the location at which they were emitted and a [`Verbosity`] level. Messages
//! more verbose than the process-wide maximum (see [`set_max_verbosity`]) are discarded before
//! they are formatted.

use std::fmt::{self, Arguments};
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg_attr(target_arch = "wasm32", path = "wasm.rs")]
#[cfg_attr(not(target_arch = "wasm32"), path = "std.rs")]
mod imp;

/// A verbosity level for a [`Message`].
///
/// # Remarks
///
/// The ordering of the verbosity levels is in *increasing verbosity*, meaning that
/// [`Error`] is the *least verbose*, and [`Trace`] is the *most verbose*.
///
/// This is useful for filtering messages based on their verbosity level.
///
/// [`Error`]: Verbosity::Error
/// [`Trace`]: Verbosity::Trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Verbosity {
    /// The minimum verbosity level possible.
    ///
    /// Used when something prevents at least part of the program from working correctly.
    Error,
    /// A recoverable problem that may still indicate that something is wrong.
    Warning,
    /// Information that is useful most of the time, but which does not indicate any problem.
    Info,
    /// Debugging information, not useful to the end-user.
    Trace,
}

impl Verbosity {
    /// All verbosity levels, from the least verbose to the most verbose.
    pub const ALL: [Self; 4] = [Self::Error, Self::Warning, Self::Info, Self::Trace];

    /// Returns the lowercase name of this verbosity level.
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Trace => "trace",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Self::Error,
            1 => Self::Warning,
            2 => Self::Info,
            _ => Self::Trace,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when parsing a [`Verbosity`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVerbosityError {
    input: String,
}

impl fmt::Display for ParseVerbosityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown verbosity level `{}` (expected `error`, `warning`, `info` or `trace`)",
            self.input
        )
    }
}

impl std::error::Error for ParseVerbosityError {}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseVerbosityError {
                input: s.to_owned(),
            }),
        }
    }
}

static MAX_VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Info as u8);

/// Sets the most verbose level that will still be emitted.
pub fn set_max_verbosity(verbosity: Verbosity) {
    MAX_VERBOSITY.store(verbosity as u8, Ordering::Relaxed);
}

/// Returns the most verbose level that is currently emitted.
pub fn max_verbosity() -> Verbosity {
    Verbosity::from_u8(MAX_VERBOSITY.load(Ordering::Relaxed))
}

/// Returns whether messages of the provided verbosity are currently emitted.
#[inline]
pub fn enabled(verbosity: Verbosity) -> bool {
    verbosity as u8 <= MAX_VERBOSITY.load(Ordering::Relaxed)
}

/// A message that can be logged.
pub struct Message<'a> {
    /// The name of the file in which the message was logged.
    pub file: &'static str,
    /// The line at which the message was logged.
    pub line: u32,
    /// The column at which the message was logged.
    pub column: u32,
    /// The verbosity level of the message.
    pub verbosity: Verbosity,
    /// The module in which the message was logged.
    pub module: &'static str,
    /// The message itself.
    pub message: Arguments<'a>,
}

impl<'a> Message<'a> {
    /// Logs this message, unless its verbosity is filtered out.
    pub fn log(self) {
        if enabled(self.verbosity) {
            imp::log(self);
        }
    }
}

/// Creates a [`Message`] instance with the current invoking location.
#[macro_export]
macro_rules! message {
    ($verbosity:expr, $($args:tt)*) => {
        $crate::Message {
            file: ::core::file!(),
            line: ::core::line!(),
            column: ::core::column!(),
            verbosity: $verbosity,
            module: ::core::module_path!(),
            message: ::core::format_args!($($args)*),
        }
    };
}

/// Logs a message with the current invoking location.
///
/// # Remarks
///
/// This macro is basically equivalent to calling [`Message::log`] on the result of
/// [`message!`].
#[macro_export]
macro_rules! log {
    ($verbosity:expr, $($args:tt)*) => {
        $crate::Message::log($crate::message!($verbosity, $($args)*))
    };
}

/// Logs a message with the current invoking location, with a verbosity level of
/// [`Verbosity::Error`].
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Error, $($args)*)
    };
}

/// Logs a message with the current invoking location, with a verbosity level of
/// [`Verbosity::Warning`].
#[macro_export]
macro_rules! warning {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Warning, $($args)*)
    };
}

/// Logs a message with the current invoking location, with a verbosity level of
/// [`Verbosity::Info`].
#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Info, $($args)*)
    };
}

/// Logs a message with the current invoking location, with a verbosity level of
/// [`Verbosity::Trace`].
#[macro_export]
macro_rules! trace {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Trace, $($args)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_ordered_by_increasing_verbosity() {
        assert!(Verbosity::Error < Verbosity::Warning);
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Trace);
    }

    #[test]
    fn parse_verbosity() {
        assert_eq!("error".parse(), Ok(Verbosity::Error));
        assert_eq!("WARN".parse(), Ok(Verbosity::Warning));
        assert_eq!(" warning ".parse(), Ok(Verbosity::Warning));
        assert_eq!("Info".parse(), Ok(Verbosity::Info));
        assert_eq!("trace".parse(), Ok(Verbosity::Trace));

        let err = "loud".parse::<Verbosity>().unwrap_err();
        assert!(err.to_string().contains("`loud`"));
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for v in Verbosity::ALL {
            assert_eq!(v.name().parse(), Ok(v));
        }
    }

    #[test]
    fn filter_discards_more_verbose_messages() {
        let previous = max_verbosity();

        set_max_verbosity(Verbosity::Warning);
        assert!(enabled(Verbosity::Error));
        assert!(enabled(Verbosity::Warning));
        assert!(!enabled(Verbosity::Info));
        assert!(!enabled(Verbosity::Trace));
        trace!("filtered out");

        set_max_verbosity(Verbosity::Trace);
        assert!(enabled(Verbosity::Trace));
        assert_eq!(max_verbosity(), Verbosity::Trace);

        set_max_verbosity(previous);
    }
}
