//! Cross-block state shared by levels 2 and 3.
//!
//! Table entries record positions in a virtual coordinate space: the cursor
//! `cur` is the virtual start of the block being encoded, and an entry stored
//! at local position `s` holds `cur + s`.  After the cursor moves on, the
//! same entry resolves to a negative local position that indexes into the
//! retained previous block.
//!
//! Invariant: `cur > prev.len()` whenever a block is searched.  A zeroed slot
//! therefore resolves to `offset - s == cur`, which always fails the
//! history-length check, even against an all-zero fingerprint.

use super::types::{
    match_len, TableEntry, CURSOR_LIMIT, MAX_MATCH_LENGTH, MAX_MATCH_OFFSET,
    MAX_STORE_BLOCK_SIZE, TABLE_SIZE,
};

/// Hash table, virtual cursor and retained previous block.
pub struct BlockHistory<E> {
    pub(crate) table: Box<[E]>,
    prev: Vec<u8>,
    cur: i32,
}

impl<E: Copy + Default> BlockHistory<E> {
    pub fn new() -> Self {
        Self {
            table: vec![E::default(); TABLE_SIZE].into_boxed_slice(),
            prev: Vec::with_capacity(MAX_STORE_BLOCK_SIZE),
            cur: 1,
        }
    }

    /// Virtual start of the next block.
    #[inline]
    pub fn cursor(&self) -> i32 {
        self.cur
    }

    /// The retained previous block.
    #[inline]
    pub fn history(&self) -> &[u8] {
        &self.prev
    }

    /// Fold the cursor back before it can overflow.
    ///
    /// Every stored position is forgotten along with the retained block, so
    /// no entry written before the fold can resolve to a live position.
    pub fn begin_block(&mut self) {
        if self.cur > CURSOR_LIMIT {
            self.cur = 1;
            self.prev.clear();
            self.table.fill(E::default());
        }
    }

    /// Account for a block too short to search.  Breaks the history chain.
    pub fn skip_block(&mut self) {
        self.cur = self.cur.saturating_add(MAX_STORE_BLOCK_SIZE as i32);
        self.prev.clear();
    }

    /// Advance past `src` and keep an owned copy of it as history.
    pub fn end_block(&mut self, src: &[u8]) {
        self.cur += src.len() as i32;
        self.prev.clear();
        self.prev.extend_from_slice(src);
    }

    /// Drop the history and move the cursor beyond reach of every stored
    /// position.
    pub fn reset(&mut self) {
        self.prev.clear();
        self.cur = self.cur.saturating_add(MAX_MATCH_OFFSET as i32 + 1);
    }

    /// Local position of a stored entry.  Negative values lie in `prev`.
    #[inline(always)]
    pub fn local(&self, entry: TableEntry) -> i32 {
        entry.offset - self.cur
    }

    /// Virtual position of local position `s`.
    #[inline(always)]
    pub fn virtual_pos(&self, s: usize) -> i32 {
        self.cur + s as i32
    }

    /// Offset from local position `s` back to `entry`, if it is a legal
    /// reference: at least 1, at most [`MAX_MATCH_OFFSET`], and not before the
    /// start of the retained block.
    #[inline(always)]
    pub fn distance(&self, s: usize, entry: TableEntry) -> Option<usize> {
        let s = s as i32;
        let offset = s - self.local(entry);
        if offset < 1 || offset > MAX_MATCH_OFFSET as i32 || offset - s > self.prev.len() as i32 {
            return None;
        }
        Some(offset as usize)
    }

    /// Extend a match at local position `s` against candidate position `t`,
    /// both already past the four verified bytes.  Returns the number of
    /// additional matching bytes.
    ///
    /// A negative `t` starts the comparison inside the retained block; when
    /// that runs out, comparison carries on from the start of `src`.
    pub fn match_len(&self, s: usize, t: i32, src: &[u8]) -> usize {
        let s1 = (s + MAX_MATCH_LENGTH - 4).min(src.len());
        let want = &src[s..s1];

        if t >= 0 {
            return match_len(want, &src[t as usize..]);
        }

        let tp = (self.prev.len() as i32 + t) as usize;
        let n = match_len(want, &self.prev[tp..]);
        if tp + n < self.prev.len() {
            return n;
        }
        n + match_len(&want[n..], src)
    }
}

impl<E: Copy + Default> Default for BlockHistory<E> {
    fn default() -> Self {
        Self::new()
    }
}
