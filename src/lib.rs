// snapmatch: snappy-style LZ77 match finders for a DEFLATE encoder

pub mod analyze;
pub mod block;
pub mod cli;
pub mod config;
pub mod digest;
pub mod inputs;

// ── Version constants ─────────────────────────────────────────────────────────
pub const SNAPMATCH_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version_string() -> &'static str {
    SNAPMATCH_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use analyze::{scan, ScanOptions, ScanReport};
pub use block::{Encoder, Level, MatchFinder, SnapError, Token, TokenKind, Tokens};
