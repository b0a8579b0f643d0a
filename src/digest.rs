//! XXH64 digests of input bytes and token streams, backed by `xxhash-rust`.
//!
//! A token digest hashes each token's packed `u32` in little-endian order, so
//! two runs agree on the digest exactly when they emitted the same tokens.

use xxhash_rust::xxh64::Xxh64;

use crate::block::{Token, Tokens};

/// Seed used for every digest in this crate.
pub const DIGEST_SEED: u64 = 0;

/// One-shot XXH64 of `data`.
#[inline]
pub fn xxh64_oneshot(data: &[u8]) -> u64 {
    xxhash_rust::xxh64::xxh64(data, DIGEST_SEED)
}

/// Streaming XXH64 over a sequence of token blocks.
#[derive(Clone)]
pub struct TokenDigest {
    state: Xxh64,
    buf: Vec<u8>,
}

impl Default for TokenDigest {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenDigest {
    pub fn new() -> Self {
        Self {
            state: Xxh64::new(DIGEST_SEED),
            buf: Vec::new(),
        }
    }

    /// Feed a run of tokens.
    pub fn update(&mut self, tokens: &[Token]) {
        self.buf.clear();
        self.buf.reserve(tokens.len() * 4);
        for t in tokens {
            self.buf.extend_from_slice(&t.raw().to_le_bytes());
        }
        self.state.update(&self.buf);
    }

    /// Feed one encoded block, reading an unsearched block as literals of
    /// `block`.
    pub fn update_block(&mut self, dst: &Tokens, block: &[u8]) {
        if dst.is_verbatim(block) {
            self.buf.clear();
            for &b in block {
                self.buf
                    .extend_from_slice(&Token::literal(b).raw().to_le_bytes());
            }
            self.state.update(&self.buf);
        } else {
            self.update(dst.as_slice());
        }
    }

    pub fn digest(&self) -> u64 {
        self.state.digest()
    }
}
