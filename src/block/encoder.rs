//! Level selection and the common encoder interface.
//!
//! A stream picks one [`Level`] up front and keeps the resulting [`Encoder`]
//! for its whole lifetime; levels 2 and 3 carry state from one block to the
//! next, so switching mid-stream would throw that history away.

use core::fmt;

use super::error::SnapError;
use super::level1::Level1Encoder;
use super::level2::Level2Encoder;
use super::level3::Level3Encoder;
use super::token::Tokens;

/// A block match finder.
pub trait MatchFinder {
    /// Fill `dst` with the tokens for `src` (at most `MAX_STORE_BLOCK_SIZE`
    /// bytes).  `dst` is cleared first.
    ///
    /// Blocks shorter than `MIN_NON_LITERAL_BLOCK_SIZE` are not searched:
    /// `dst.len()` is set to `src.len()` without writing tokens and the caller
    /// must emit `src` as literals.
    fn encode(&mut self, dst: &mut Tokens, src: &[u8]);

    /// Forget all history so later blocks cannot reference earlier ones.
    fn reset(&mut self);
}

/// Match-finder strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// Intra-block, single candidate.
    One = 1,
    /// Cross-block, single candidate.
    Two = 2,
    /// Cross-block, two candidates per slot.
    Three = 3,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Level {
    type Error = SnapError;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            other => Err(SnapError::InvalidLevel(other)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

/// One of the three match finders.
///
/// The stateful variants are boxed; their tables are 128 KiB and 256 KiB.
pub enum Encoder {
    Level1(Level1Encoder),
    Level2(Box<Level2Encoder>),
    Level3(Box<Level3Encoder>),
}

impl Encoder {
    pub fn new(level: Level) -> Self {
        match level {
            Level::One => Encoder::Level1(Level1Encoder::new()),
            Level::Two => Encoder::Level2(Box::default()),
            Level::Three => Encoder::Level3(Box::default()),
        }
    }

    /// Build an encoder from a numeric level.
    pub fn from_level(level: i32) -> Result<Self, SnapError> {
        Level::try_from(level).map(Encoder::new)
    }

    pub fn level(&self) -> Level {
        match self {
            Encoder::Level1(_) => Level::One,
            Encoder::Level2(_) => Level::Two,
            Encoder::Level3(_) => Level::Three,
        }
    }
}

impl MatchFinder for Encoder {
    #[inline]
    fn encode(&mut self, dst: &mut Tokens, src: &[u8]) {
        match self {
            Encoder::Level1(e) => e.encode(dst, src),
            Encoder::Level2(e) => e.encode(dst, src),
            Encoder::Level3(e) => e.encode(dst, src),
        }
    }

    fn reset(&mut self) {
        match self {
            Encoder::Level1(e) => e.reset(),
            Encoder::Level2(e) => e.reset(),
            Encoder::Level3(e) => e.reset(),
        }
    }
}
