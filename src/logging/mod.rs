//! # Logging Module
//!
//! Console logging for headerstamp:
//! - Verbose logging that can be enabled/disabled
//! - Info logging with color support, silenced by quiet mode
//! - Structured diagnostics through `tracing`
//!
//! Verbose logs go to stderr and info logs go to stdout, so progress output
//! can be piped without diagnostics mixed in.
//!
//! ## Example
//!
//! ```rust
//! use headerstamp::logging::{ColorMode, set_verbose};
//! use headerstamp::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Scanning: {}", "packages/api");
//! info_log!("Added header to: {}", "packages/api/index.ts");
//! ```

mod modes;

pub use modes::{ColorMode, LOG_ENV_VAR, init_tracing, is_quiet, is_verbose, level_for, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
///
/// Same format string syntax as [`eprintln!`].
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// Same format string syntax as [`println!`].
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an info message to stdout, highlighted when colors are enabled.
///
/// This is the backing function for the [`info_log!`] macro, which also
/// checks quiet mode first. Call the macro instead of this function.
///
/// # Parameters
///
/// * `message` - The already formatted message to print
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
