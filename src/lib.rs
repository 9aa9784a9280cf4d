/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("plan", "{} rename(s) planned", plan.len());
/// log_status!("rename", "'{}' -> '{}'", source, target);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod core;
pub mod utils;

// Re-export everything from core for ergonomic library use
// Users can write `trim_spaces_in_paths::plan` instead of `trim_spaces_in_paths::core::plan`
pub use self::core::*;
pub use utils::*;
