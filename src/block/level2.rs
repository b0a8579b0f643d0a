//! Level 2: single-candidate match finder that reaches into the previous block.
//!
//! Same scan as level 1, but every table entry carries its fingerprint and a
//! virtual position, so a candidate left over from the previous call can be
//! recognised and extended across the block boundary.

use super::encoder::MatchFinder;
use super::history::BlockHistory;
use super::token::Tokens;
use super::types::{
    hash, load32, load64, slot, TableEntry, INPUT_MARGIN, MAX_STORE_BLOCK_SIZE,
    MIN_NON_LITERAL_BLOCK_SIZE,
};

/// Stateful level-2 encoder.  One instance per stream.
pub struct Level2Encoder {
    state: BlockHistory<TableEntry>,
}

impl Default for Level2Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Level2Encoder {
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

    /// Offset to `entry` if its fingerprint is `cv` and it is within reach of `s`.
    #[inline(always)]
    fn accept(&self, s: usize, cv: u32, entry: TableEntry) -> Option<usize> {
        if entry.val != cv {
            return None;
        }
        self.state.distance(s, entry)
    }

    #[inline(always)]
    fn insert(&mut self, h: usize, s: usize, val: u32) -> TableEntry {
        let entry = TableEntry {
            val,
            offset: self.state.virtual_pos(s),
        };
        core::mem::replace(&mut self.state.table[h], entry)
    }
}

impl MatchFinder for Level2Encoder {
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
                let candidate = self.insert(slot(next_hash), s, cv);
                next_hash = hash(now);
                if let Some(o) = self.accept(s, cv, candidate) {
                    offset = o;
                    break;
                }
                cv = now;
            }

            dst.append_literals(&src[next_emit..s]);

            loop {
                // Four bytes at s are known to match `offset` back.
                s += 4;
                let t = s as i32 - offset as i32;
                let l = self.state.match_len(s, t, src);

                dst.append_match(l + 4, offset);
                s += l;
                next_emit = s;
                if s >= s_limit {
                    break 'outer;
                }

                let x = load64(src, s - 1);
                self.insert(slot(hash(x as u32)), s - 1, x as u32);
                let cv_s = (x >> 8) as u32;
                let candidate = self.insert(slot(hash(cv_s)), s, cv_s);
                match self.accept(s, cv_s, candidate) {
                    Some(o) => offset = o,
                    None => {
                        cv = (x >> 16) as u32;
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
