//! Level 3: two-candidate match finder with cross-block reach.
//!
//! Each slot remembers its two most recent insertions.  A probe tries the
//! newer one first, then the older one, which recovers matches that level 2
//! loses to bucket contention at roughly twice the per-probe cost.

use super::encoder::MatchFinder;
use super::history::BlockHistory;
use super::token::Tokens;
use super::types::{
    hash, load32, load64, slot, TableEntry, TableEntryPrev, INPUT_MARGIN, MAX_STORE_BLOCK_SIZE,
    MIN_NON_LITERAL_BLOCK_SIZE,
};

/// Stateful level-3 encoder.  One instance per stream.
pub struct Level3Encoder {
    state: BlockHistory<TableEntryPrev>,
}

impl Default for Level3Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Level3Encoder {
    pub fn new() -> Self {
        Self {
            state: BlockHistory::new(),
        }
    }

    /// Virtual start of the next block.
    pub fn cursor(&self) -> i32 {
        self.state.cursor()
    }

    /// Bytes of the previous block still reachable by matches.
    pub fn history(&self) -> &[u8] {
        self.state.history()
    }

    /// Offset to the first of the slot's two entries whose fingerprint is
    /// `cv` and which is within reach of `s`.
    #[inline(always)]
    fn accept(&self, s: usize, cv: u32, candidates: TableEntryPrev) -> Option<usize> {
        [candidates.cur, candidates.prev]
            .into_iter()
            .find_map(|e| if e.val == cv { self.state.distance(s, e) } else { None })
    }

    /// Insert `(val, s)` at slot `h` and return the slot as it was before.
    #[inline(always)]
    fn insert(&mut self, h: usize, s: usize, val: u32) -> TableEntryPrev {
        let entry = TableEntry {
            val,
            offset: self.state.virtual_pos(s),
        };
        let before = self.state.table[h];
        self.state.table[h].push(entry);
        before
    }
}

impl MatchFinder for Level3Encoder {
    fn encode(&mut self, dst: &mut Tokens, src: &[u8]) {
        dst.reset();
        self.state.begin_block();

        if src.len() < MIN_NON_LITERAL_BLOCK_SIZE {
            dst.mark_unsearched(src.len());
            self.state.skip_block();
            return;
        }
        debug_assert!(src.len() <= MAX_STORE_BLOCK_SIZE);

        let s_limit = src.len() - INPUT_MARGIN;
        let mut next_emit = 0usize;
        let mut s = 1usize;
        let mut cv = load32(src, s);
        let mut next_hash = hash(cv);

        'outer: loop {
            let mut skip = 32usize;

            let mut next_s = s;
            let mut offset: usize;
            loop {
                s = next_s;
                let bytes_between_hash_lookups = skip >> 5;
                next_s = s + bytes_between_hash_lookups;
                skip += bytes_between_hash_lookups;
                if next_s > s_limit {
                    break 'outer;
                }
                let now = load32(src, next_s);
                let candidates = self.insert(slot(next_hash), s, cv);
                next_hash = hash(now);
                if let Some(o) = self.accept(s, cv, candidates) {
                    offset = o;
                    break;
                }
                cv = now;
            }

            dst.append_literals(&src[next_emit..s]);

            loop {
                s += 4;
                let t = s as i32 - offset as i32;
                let l = self.state.match_len(s, t, src);

                dst.append_match(l + 4, offset);
                s += l;
                next_emit = s;
                if s >= s_limit {
                    break 'outer;
                }

                // Positions s-2, s-1 and s from a single 8-byte load.
                let mut x = load64(src, s - 2);
                self.insert(slot(hash(x as u32)), s - 2, x as u32);
                x >>= 8;
                self.insert(slot(hash(x as u32)), s - 1, x as u32);
                x >>= 8;
                let cv_s = x as u32;
                let candidates = self.insert(slot(hash(cv_s)), s, cv_s);
                match self.accept(s, cv_s, candidates) {
                    Some(o) => offset = o,
                    None => {
                        cv = (x >> 8) as u32;
                        next_hash = hash(cv);
                        s += 1;
                        break;
                    }
                }
            }
        }

        if next_emit < src.len() {
            dst.append_literals(&src[next_emit..]);
        }
        self.state.end_block(src);
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}
