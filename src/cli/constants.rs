// cli/constants.rs: program identity and the display-level machinery shared
// by the binary and the library's configuration layer.

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROGRAM_NAME: &str = "snapmatch";
pub const AUTHOR: &str = "the snapmatch developers";

// ── Display level ─────────────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal (default, downgradable);
// 3 = informational; 4 = debug.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Display level after applying `verbose` increments and `quiet` decrements
/// to the default of 2, clamped to `0..=4`.
pub fn level_from_flags(verbose: u8, quiet: u8) -> u32 {
    (2i32 + verbose as i32 - quiet as i32).clamp(0, 4) as u32
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
//   displayout!(...)       → stdout (reports)
//   display!(...)          → stderr
//   displaylevel!(l, ...)  → stderr when display_level() >= l

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
