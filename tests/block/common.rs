// Shared fixtures for the block tests: seeded pseudo-random data, periodic
// text, and helpers that walk a token stream alongside the bytes it covers.

use snapmatch::block::{replay_block, MatchFinder, Tokens};

/// xorshift64* stream; deterministic across runs and platforms.
pub struct Rng(u64);

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng(seed | 1)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        self.0.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    pub fn bytes(&mut self, n: usize) -> Vec<u8> {
        (0..n).map(|_| (self.next_u64() >> 56) as u8).collect()
    }
}

/// 50 distinct bytes repeated out to `n`.
pub fn periodic(n: usize) -> Vec<u8> {
    (0..n).map(|i| ((i % 50) * 7 + 3) as u8).collect()
}

/// English-ish text with plenty of short and long repeats.
pub fn prose(n: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "the ", "match ", "finder ", "hashes ", "four ", "bytes ", "and ", "looks ",
        "back ", "into ", "the ", "window ", "for ", "a ", "longer ", "copy. ",
    ];
    let mut rng = Rng::new(0x5eed);
    let mut out = Vec::with_capacity(n + 16);
    while out.len() < n {
        let w = WORDS[(rng.next_u64() % WORDS.len() as u64) as usize];
        out.extend_from_slice(w.as_bytes());
    }
    out.truncate(n);
    out
}

/// A match together with the block position it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub pos: usize,
    pub length: usize,
    pub offset: usize,
}

/// Every match in `dst`, with its starting position in the block.
pub fn placed_matches(dst: &Tokens) -> Vec<Placed> {
    let mut pos = 0;
    let mut out = Vec::new();
    for t in dst.iter() {
        if t.is_match() {
            out.push(Placed {
                pos,
                length: t.length(),
                offset: t.offset(),
            });
            pos += t.length();
        } else {
            pos += 1;
        }
    }
    out
}

/// Encode `blocks` in order on `enc`, replaying each into one buffer, and
/// return that buffer.  Panics if a block's tokens don't cover it exactly.
pub fn encode_and_replay<M: MatchFinder + ?Sized>(enc: &mut M, blocks: &[&[u8]]) -> Vec<u8> {
    let mut dst = Tokens::new();
    let mut out = Vec::new();
    for block in blocks {
        enc.encode(&mut dst, block);
        if !dst.is_verbatim(block) {
            assert_eq!(dst.covered_len(), block.len());
        }
        replay_block(&dst, block, &mut out).expect("replay");
    }
    out
}
