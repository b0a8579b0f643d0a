//! Argument parsing for the `snapmatch` binary.
//!
//! `clap` handles the flag grammar; [`CliArgs::resolve`] then layers the
//! environment defaults from [`crate::config`] underneath the explicit flags
//! and range-checks the result.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use crate::analyze::ScanOptions;
use crate::block::{Level, MAX_STORE_BLOCK_SIZE};
use crate::cli::constants::level_from_flags;
use crate::config::{init_level, init_nb_workers, BLOCK_SIZE_DEFAULT, NB_WORKERS_MAX};

/// Raw command line.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "snapmatch",
    version,
    about = "Run the snappy-style DEFLATE match finders over files and report token statistics"
)]
pub struct CliArgs {
    /// Match-finder level (1-3) [default: $SNAPMATCH_LEVEL or 1]
    #[arg(short = 'l', long = "level")]
    pub level: Option<i32>,

    /// Block size in bytes (1-65535)
    #[arg(short = 'B', long = "block-size", default_value_t = BLOCK_SIZE_DEFAULT)]
    pub block_size: usize,

    /// Worker threads, 0 = one per CPU [default: $SNAPMATCH_NBWORKERS or 0]
    #[arg(short = 'T', long = "threads")]
    pub threads: Option<usize>,

    /// Recurse into directories
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Replay the tokens and check they reproduce each input
    #[arg(long = "verify")]
    pub verify: bool,

    /// More output (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Less output (repeatable)
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Files (or directories with -r) to scan
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub options: ScanOptions,
    pub workers: usize,
    pub recursive: bool,
    pub display_level: u32,
    pub inputs: Vec<PathBuf>,
}

impl CliArgs {
    /// Apply environment defaults and validate.
    pub fn resolve(self) -> anyhow::Result<ParsedArgs> {
        self.resolve_with(init_level, init_nb_workers)
    }

    /// [`resolve`](Self::resolve) with the environment lookups injected.
    pub fn resolve_with(
        self,
        default_level: impl FnOnce() -> i32,
        default_workers: impl FnOnce() -> usize,
    ) -> anyhow::Result<ParsedArgs> {
        let level_num = self.level.unwrap_or_else(default_level);
        let level = Level::try_from(level_num).map_err(|e| anyhow!("bad usage: {}", e))?;

        if self.block_size == 0 || self.block_size > MAX_STORE_BLOCK_SIZE {
            return Err(anyhow!(
                "bad usage: -B: block size must be between 1 and {} (got {})",
                MAX_STORE_BLOCK_SIZE,
                self.block_size
            ));
        }

        let workers = self.threads.unwrap_or_else(default_workers);
        if workers > NB_WORKERS_MAX {
            return Err(anyhow!(
                "bad usage: -T: at most {} workers (got {})",
                NB_WORKERS_MAX,
                workers
            ));
        }

        Ok(ParsedArgs {
            options: ScanOptions {
                level,
                block_size: self.block_size,
                verify: self.verify,
            },
            workers,
            recursive: self.recursive,
            display_level: level_from_flags(self.verbose, self.quiet),
            inputs: self.inputs,
        })
    }
}

/// Parse an argument vector (including the program name).
pub fn parse_args<I, T>(argv: I) -> anyhow::Result<ParsedArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::try_parse_from(argv)?.resolve()
}
