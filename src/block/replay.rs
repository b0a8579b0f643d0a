//! Rebuild bytes from a token stream.
//!
//! Used to check encoder output, not to decode DEFLATE: the tokens come
//! straight from a [`Tokens`] sink, never from a bit stream.

use super::error::SnapError;
use super::token::{Token, TokenKind, Tokens};

/// Append the bytes described by `tokens` to `out`.
///
/// Matches copy from the tail of `out` one byte at a time, so overlapping
/// copies (offset < length) repeat their pattern.  `out` must already hold
/// whatever history the matches reach into.
pub fn replay(tokens: &[Token], out: &mut Vec<u8>) -> Result<(), SnapError> {
    for &t in tokens {
        match t.kind() {
            TokenKind::Literal(b) => out.push(b),
            TokenKind::Match { length, offset } => {
                if offset > out.len() {
                    return Err(SnapError::OffsetBeyondHistory {
                        offset,
                        available: out.len(),
                    });
                }
                let start = out.len() - offset;
                out.reserve(length);
                for i in start..start + length {
                    let b = out[i];
                    out.push(b);
                }
            }
        }
    }
    Ok(())
}

/// Append the bytes of one encoded block to `out`.
///
/// An unsearched block (see [`Tokens::is_verbatim`]) is taken from `block`
/// directly; everything else is replayed from the tokens.
pub fn replay_block(dst: &Tokens, block: &[u8], out: &mut Vec<u8>) -> Result<(), SnapError> {
    if dst.is_verbatim(block) {
        out.extend_from_slice(block);
        return Ok(());
    }
    replay(dst.as_slice(), out)
}
