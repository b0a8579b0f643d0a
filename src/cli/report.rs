//! Report lines printed by the binary.

use crate::analyze::ScanReport;
use crate::block::Level;

/// Column header matching [`format_report`].
pub fn header() -> String {
    format!(
        "{:>5} {:>12} {:>7} {:>12} {:>10} {:>12} {:>7} {:>6}  {:<16}  {}",
        "level", "bytes", "blocks", "literals", "matches", "matched", "longest", "ratio", "digest",
        "name"
    )
}

/// One aligned line for `name`.
pub fn format_report(name: &str, level: Level, r: &ScanReport) -> String {
    format!(
        "{:>5} {:>12} {:>7} {:>12} {:>10} {:>12} {:>7} {:>6.3}  {:016x}  {}",
        level.as_i32(),
        r.bytes,
        r.blocks,
        r.literals,
        r.matches,
        r.matched_bytes,
        r.longest_match,
        r.ratio(),
        r.digest,
        name
    )
}

/// Totals line for several files; the digest column is left blank.
pub fn format_totals(files: usize, level: Level, r: &ScanReport) -> String {
    format!(
        "{:>5} {:>12} {:>7} {:>12} {:>10} {:>12} {:>7} {:>6.3}  {:<16}  {} files",
        level.as_i32(),
        r.bytes,
        r.blocks,
        r.literals,
        r.matches,
        r.matched_bytes,
        r.longest_match,
        r.ratio(),
        "",
        files
    )
}
