//! Level 1: single-candidate, intra-block match finder.
//!
//! The cheapest strategy.  The table is rebuilt on the stack for every block
//! and holds block-relative `u16` positions (blocks never exceed
//! [`MAX_STORE_BLOCK_SIZE`]), so no state survives between calls.

use super::encoder::MatchFinder;
use super::token::Tokens;
use super::types::{
    hash, load32, load64, match_len, slot, INPUT_MARGIN, MAX_MATCH_LENGTH, MAX_MATCH_OFFSET,
    MAX_STORE_BLOCK_SIZE, MIN_NON_LITERAL_BLOCK_SIZE, TABLE_SIZE,
};

/// Stateless level-1 encoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Level1Encoder;

impl Level1Encoder {
    pub fn new() -> Self {
        Level1Encoder
    }
}

impl MatchFinder for Level1Encoder {
    fn encode(&mut self, dst: &mut Tokens, src: &[u8]) {
        dst.reset();
        if src.len() < MIN_NON_LITERAL_BLOCK_SIZE {
            dst.mark_unsearched(src.len());
            return;
        }
        debug_assert!(src.len() <= MAX_STORE_BLOCK_SIZE);

        let mut table = [0u16; TABLE_SIZE];

        // Last position a probe may start at; the margin keeps every load
        // below in bounds.
        let s_limit = src.len() - INPUT_MARGIN;

        let mut next_emit = 0usize;

        // Position 0 has nothing behind it, so probing starts at 1.
        let mut s = 1usize;
        let mut next_hash = hash(load32(src, s));

        'outer: loop {
            // Probe every byte for the first 32, then every second byte for
            // the next 32, and so on.  Any match restores full density.
            let mut skip = 32usize;

            let mut next_s = s;
            let mut candidate: usize;
            loop {
                s = next_s;
                let bytes_between_hash_lookups = skip >> 5;
                next_s = s + bytes_between_hash_lookups;
                skip += bytes_between_hash_lookups;
                if next_s > s_limit {
                    break 'outer;
                }
                let h = slot(next_hash);
                candidate = table[h] as usize;
                table[h] = s as u16;
                next_hash = hash(load32(src, next_s));
                if s - candidate <= MAX_MATCH_OFFSET && load32(src, s) == load32(src, candidate) {
                    break;
                }
            }

            dst.append_literals(&src[next_emit..s]);

            // Emit the match, then keep emitting while the byte right after
            // it starts another one.
            loop {
                let base = s;
                s += 4;
                let s1 = (base + MAX_MATCH_LENGTH).min(src.len());
                s += match_len(&src[s..s1], &src[candidate + 4..]);

                dst.append_match(s - base, base - candidate);
                next_emit = s;
                if s >= s_limit {
                    break 'outer;
                }

                // One 8-byte load covers the fingerprints at s-1, s and s+1.
                let x = load64(src, s - 1);
                table[slot(hash(x as u32))] = (s - 1) as u16;
                let cv = (x >> 8) as u32;
                let h = slot(hash(cv));
                candidate = table[h] as usize;
                table[h] = s as u16;
                if s - candidate > MAX_MATCH_OFFSET || cv != load32(src, candidate) {
                    next_hash = hash((x >> 16) as u32);
                    s += 1;
                    break;
                }
            }
        }

        if next_emit < src.len() {
            dst.append_literals(&src[next_emit..]);
        }
    }

    fn reset(&mut self) {}
}
