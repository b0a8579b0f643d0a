//! Block match finding.
//!
//! Three strategies turn one input block into a stream of literal and copy
//! tokens for a DEFLATE encoder.  Level 1 searches within the block only;
//! levels 2 and 3 also reach back into the previous block.

pub mod encoder;
pub mod error;
pub mod history;
pub mod level1;
pub mod level2;
pub mod level3;
pub mod replay;
pub mod token;
pub mod types;

pub use encoder::{Encoder, Level, MatchFinder};
pub use error::SnapError;
pub use level1::Level1Encoder;
pub use level2::Level2Encoder;
pub use level3::Level3Encoder;
pub use replay::{replay, replay_block};
pub use token::{Token, TokenKind, Tokens, MAX_TOKENS};
pub use types::{
    MAX_MATCH_LENGTH, MAX_MATCH_OFFSET, MAX_STORE_BLOCK_SIZE, MIN_NON_LITERAL_BLOCK_SIZE,
};
