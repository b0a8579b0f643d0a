//! Whole-buffer scans: drive one encoder across a buffer cut into blocks and
//! summarise the tokens it produces.
//!
//! This plays the part of the surrounding compressor: it owns the block
//! split, interprets the unsearched-block signal, and optionally replays the
//! tokens to prove they reproduce the input.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;

use crate::block::{
    replay_block, Encoder, Level, MatchFinder, SnapError, Tokens, MAX_MATCH_OFFSET,
    MAX_STORE_BLOCK_SIZE,
};
use crate::config::{effective_workers, BLOCK_SIZE_DEFAULT};
use crate::digest::{xxh64_oneshot, TokenDigest};
use xxhash_rust::xxh64::Xxh64;

/// How a buffer is scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub level: Level,
    /// Bytes per block, `1..=MAX_STORE_BLOCK_SIZE`.
    pub block_size: usize,
    /// Replay every block and compare against the input.
    pub verify: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            level: Level::One,
            block_size: BLOCK_SIZE_DEFAULT,
            verify: false,
        }
    }
}

impl ScanOptions {
    pub fn validate(&self) -> Result<(), SnapError> {
        if self.block_size == 0 || self.block_size > MAX_STORE_BLOCK_SIZE {
            return Err(SnapError::InvalidBlockSize(self.block_size));
        }
        Ok(())
    }
}

/// Token statistics for one scanned buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Input bytes.
    pub bytes: u64,
    pub blocks: u64,
    /// Blocks too short to search, emitted as literals.
    pub verbatim_blocks: u64,
    /// Literal tokens, including those of verbatim blocks.
    pub literals: u64,
    pub matches: u64,
    /// Input bytes covered by matches.
    pub matched_bytes: u64,
    pub longest_match: usize,
    /// XXH64 of the token stream.
    pub digest: u64,
}

impl ScanReport {
    /// Tokens emitted per input byte; 1.0 means nothing was matched.
    pub fn ratio(&self) -> f64 {
        if self.bytes == 0 {
            return 1.0;
        }
        (self.literals + self.matches) as f64 / self.bytes as f64
    }

    /// Fold another report's counters into this one.  The digest is left
    /// untouched; it only describes a single stream.
    pub fn accumulate(&mut self, other: &ScanReport) {
        self.bytes += other.bytes;
        self.blocks += other.blocks;
        self.verbatim_blocks += other.verbatim_blocks;
        self.literals += other.literals;
        self.matches += other.matches;
        self.matched_bytes += other.matched_bytes;
        self.longest_match = self.longest_match.max(other.longest_match);
    }
}

/// Replays blocks against a window of the most recent output and hashes what
/// falls out of it.
struct Verifier {
    window: Vec<u8>,
    hasher: Xxh64,
    hashed: usize,
}

impl Verifier {
    fn new() -> Self {
        Self {
            window: Vec::with_capacity(MAX_MATCH_OFFSET + MAX_STORE_BLOCK_SIZE),
            hasher: Xxh64::new(crate::digest::DIGEST_SEED),
            hashed: 0,
        }
    }

    fn block(&mut self, dst: &Tokens, block: &[u8]) -> Result<(), SnapError> {
        replay_block(dst, block, &mut self.window)?;
        self.hasher.update(&self.window[self.hashed..]);
        if self.window.len() > MAX_MATCH_OFFSET {
            let drop = self.window.len() - MAX_MATCH_OFFSET;
            self.window.drain(..drop);
        }
        self.hashed = self.window.len();
        Ok(())
    }

    fn finish(self, data: &[u8]) -> Result<(), SnapError> {
        let expected = xxh64_oneshot(data);
        let actual = self.hasher.digest();
        if expected != actual {
            return Err(SnapError::VerifyFailed { expected, actual });
        }
        Ok(())
    }
}

/// Scan `data` with a fresh encoder.
pub fn scan(data: &[u8], options: &ScanOptions) -> Result<ScanReport, SnapError> {
    options.validate()?;

    let mut encoder = Encoder::new(options.level);
    let mut dst = Tokens::new();
    let mut digest = TokenDigest::new();
    let mut verifier = options.verify.then(Verifier::new);
    let mut report = ScanReport {
        bytes: data.len() as u64,
        ..ScanReport::default()
    };

    for block in data.chunks(options.block_size) {
        encoder.encode(&mut dst, block);
        report.blocks += 1;

        if dst.is_verbatim(block) {
            report.verbatim_blocks += 1;
            report.literals += block.len() as u64;
        } else {
            for t in dst.iter() {
                if t.is_match() {
                    report.matches += 1;
                    report.matched_bytes += t.length() as u64;
                    report.longest_match = report.longest_match.max(t.length());
                } else {
                    report.literals += 1;
                }
            }
        }
        digest.update_block(&dst, block);

        if let Some(v) = verifier.as_mut() {
            v.block(&dst, block)?;
        }
    }

    if let Some(v) = verifier {
        v.finish(data)?;
    }
    report.digest = digest.digest();
    Ok(report)
}

/// Result of scanning one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: anyhow::Result<ScanReport>,
}

/// Read and scan one file.
pub fn scan_file(path: &Path, options: &ScanOptions) -> anyhow::Result<ScanReport> {
    let data = fs::read(path).with_context(|| format!("{}: cannot read", path.display()))?;
    let report = scan(&data, options).with_context(|| format!("{}", path.display()))?;
    Ok(report)
}

/// Scan every file on its own encoder, `workers` files at a time (0 = one per
/// CPU).  Reports come back in input order.
pub fn scan_files(
    paths: &[PathBuf],
    options: &ScanOptions,
    workers: usize,
) -> anyhow::Result<Vec<FileReport>> {
    options.validate()?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(effective_workers(workers))
        .build()
        .context("cannot start worker pool")?;

    Ok(pool.install(|| {
        paths
            .par_iter()
            .map(|path| FileReport {
                path: path.clone(),
                result: scan_file(path, options),
            })
            .collect()
    }))
}
