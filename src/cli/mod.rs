//! Command-line interface for the `snapmatch` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|----------------|
//! | [`constants`] | Program identity and the shared `DISPLAY_LEVEL` atomic with its macros. |
//! | [`args`]      | `clap` grammar plus environment defaults, producing [`args::ParsedArgs`]. |
//! | [`report`]    | Aligned report and totals lines. |

pub mod args;
pub mod constants;
pub mod report;
