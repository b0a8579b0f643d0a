//! Literal/copy tokens and the bounded per-block token sink.
//!
//! A [`Token`] packs either a literal byte or a biased `(length - 3,
//! offset - 1)` pair into one `u32`, the layout the downstream Huffman stage
//! consumes.  [`Tokens`] holds one block's worth of them.

use super::types::{
    BASE_MATCH_LENGTH, BASE_MATCH_OFFSET, MAX_MATCH_LENGTH, MAX_MATCH_OFFSET,
    MAX_STORE_BLOCK_SIZE,
};

const MATCH_TYPE: u32 = 1 << 30;
const LENGTH_SHIFT: u32 = 22;
const OFFSET_MASK: u32 = (1 << LENGTH_SHIFT) - 1;
const LENGTH_MASK: u32 = MATCH_TYPE - 1;

/// Capacity of a [`Tokens`] sink.
pub const MAX_TOKENS: usize = MAX_STORE_BLOCK_SIZE + 1;

/// One packed token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Token(u32);

/// Unpacked view of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Literal(u8),
    Match { length: usize, offset: usize },
}

impl Token {
    /// A literal byte.
    #[inline(always)]
    pub const fn literal(b: u8) -> Token {
        Token(b as u32)
    }

    /// A match from already-biased fields: `xlength = length - 3`,
    /// `xoffset = offset - 1`.
    #[inline(always)]
    pub fn matched(xlength: u32, xoffset: u32) -> Token {
        debug_assert!(xlength as usize <= MAX_MATCH_LENGTH - BASE_MATCH_LENGTH);
        debug_assert!((xoffset as usize) < MAX_MATCH_OFFSET);
        Token(MATCH_TYPE | xlength << LENGTH_SHIFT | xoffset)
    }

    /// The packed representation.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_match(self) -> bool {
        self.0 & MATCH_TYPE != 0
    }

    /// The literal byte, or `None` for a match.
    #[inline]
    pub fn literal_byte(self) -> Option<u8> {
        if self.is_match() {
            None
        } else {
            Some(self.0 as u8)
        }
    }

    /// Match length in bytes (meaningless for literals).
    #[inline]
    pub fn length(self) -> usize {
        ((self.0 & LENGTH_MASK) >> LENGTH_SHIFT) as usize + BASE_MATCH_LENGTH
    }

    /// Match offset in bytes (meaningless for literals).
    #[inline]
    pub fn offset(self) -> usize {
        (self.0 & OFFSET_MASK) as usize + BASE_MATCH_OFFSET
    }

    pub fn kind(self) -> TokenKind {
        if self.is_match() {
            TokenKind::Match {
                length: self.length(),
                offset: self.offset(),
            }
        } else {
            TokenKind::Literal(self.0 as u8)
        }
    }
}

/// Bounded token sink for one block.
///
/// The logical length `n` is the only state the encoders report through: a
/// block too short to search leaves `n == block.len()` with nothing written,
/// and the caller is expected to treat that block as all literals (see
/// [`Tokens::is_verbatim`]).
pub struct Tokens {
    tokens: Box<[Token]>,
    n: usize,
}

impl Default for Tokens {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokens {
    /// Allocate a sink with room for [`MAX_TOKENS`] tokens.
    pub fn new() -> Self {
        Self {
            tokens: vec![Token::default(); MAX_TOKENS].into_boxed_slice(),
            n: 0,
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.n = 0;
    }

    /// Logical length.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The first `len()` tokens.  After an unsearched block these are stale.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens[..self.n]
    }

    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.as_slice().iter().copied()
    }

    /// Append each byte of `lit` as a literal token.
    #[inline]
    pub fn append_literals(&mut self, lit: &[u8]) {
        let end = self.n + lit.len();
        debug_assert!(end <= MAX_TOKENS, "token sink overflow");
        for (slot, &b) in self.tokens[self.n..end].iter_mut().zip(lit) {
            *slot = Token::literal(b);
        }
        self.n = end;
    }

    /// Append one match of `length` bytes, `offset` bytes back.
    #[inline]
    pub fn append_match(&mut self, length: usize, offset: usize) {
        debug_assert!((BASE_MATCH_LENGTH..=MAX_MATCH_LENGTH).contains(&length));
        debug_assert!((BASE_MATCH_OFFSET..=MAX_MATCH_OFFSET).contains(&offset));
        debug_assert!(self.n < MAX_TOKENS, "token sink overflow");
        self.tokens[self.n] = Token::matched(
            (length - BASE_MATCH_LENGTH) as u32,
            (offset - BASE_MATCH_OFFSET) as u32,
        );
        self.n += 1;
    }

    /// Signal a block too short to search: logical length `len`, nothing written.
    #[inline]
    pub(crate) fn mark_unsearched(&mut self, len: usize) {
        debug_assert!(len <= MAX_TOKENS);
        self.n = len;
    }

    /// `true` when the caller should emit `block` verbatim as literals.
    ///
    /// Also true for a searched block that produced only literals, where the
    /// two readings agree.
    #[inline]
    pub fn is_verbatim(&self, block: &[u8]) -> bool {
        self.n == block.len()
    }

    /// Replace the contents with one literal per byte of `block`.
    pub fn fill_literals(&mut self, block: &[u8]) {
        self.reset();
        self.append_literals(block);
    }

    /// Total input bytes the tokens describe.
    pub fn covered_len(&self) -> usize {
        self.iter()
            .map(|t| if t.is_match() { t.length() } else { 1 })
            .sum()
    }
}
