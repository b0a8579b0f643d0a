// The DEFLATE distance limit is inclusive: a copy exactly 32768 bytes back is
// legal, one byte further is not.  Checked within one block at every level
// and across a block boundary for levels 2 and 3.

use snapmatch::block::{Encoder, Level, MatchFinder, Tokens, MAX_MATCH_OFFSET};

use crate::common::{encode_and_replay, placed_matches, Rng};

/// `MAX_MATCH_OFFSET` bytes made of 16-byte chunks, each an 8-byte random run
/// written twice, so every chunk offers a local match as well.
fn doubled_unit(seed: u64) -> Vec<u8> {
    let mut rng = Rng::new(seed);
    let mut unit = Vec::with_capacity(MAX_MATCH_OFFSET);
    while unit.len() < MAX_MATCH_OFFSET {
        let run = rng.bytes(8);
        unit.extend_from_slice(&run);
        unit.extend_from_slice(&run);
    }
    unit
}

// ─────────────────────────────────────────────────────────────────────────────
// Within one block
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn copy_exactly_max_offset_back_is_emitted() {
    let unit = doubled_unit(17);
    let mut block = unit.clone();
    block.extend_from_slice(&unit[..20_000]);

    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        enc.encode(&mut dst, &block);
        let matches = placed_matches(&dst);

        let at_limit = matches.iter().filter(|m| m.offset == MAX_MATCH_OFFSET).count();
        assert!(at_limit > 0, "level {} never used the full window", level);
        assert!(
            matches.iter().all(|m| m.offset <= MAX_MATCH_OFFSET),
            "level {} went past the window",
            level
        );

        let mut fresh = Encoder::new(level);
        assert_eq!(encode_and_replay(&mut fresh, &[&block]), block, "level {}", level);
    }
}

#[test]
fn copy_one_past_max_offset_is_never_emitted() {
    let unit = doubled_unit(18);
    let mut block = unit.clone();
    block.push(0xa5);
    block.extend_from_slice(&unit[..20_000]);

    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        enc.encode(&mut dst, &block);
        for m in placed_matches(&dst) {
            assert!(m.offset <= MAX_MATCH_OFFSET, "level {}: {:?}", level, m);
        }

        let mut fresh = Encoder::new(level);
        assert_eq!(encode_and_replay(&mut fresh, &[&block]), block, "level {}", level);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Across a block boundary
// ─────────────────────────────────────────────────────────────────────────────

// The first block's opening positions are all probed, so the second block's
// first probe finds a candidate at the same position one block back.  With a
// first block of exactly MAX_MATCH_OFFSET bytes that candidate is at the limit;
// one extra trailing byte pushes it out of reach.

#[test]
fn previous_block_at_max_offset_is_reachable() {
    let mut rng = Rng::new(0xb0b);
    let a = rng.bytes(MAX_MATCH_OFFSET);
    let b = a[..1000].to_vec();

    for level in [Level::Two, Level::Three] {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        enc.encode(&mut dst, &a);
        enc.encode(&mut dst, &b);
        let matches = placed_matches(&dst);
        assert!(!matches.is_empty(), "level {}", level);
        assert!(matches[0].pos <= 4, "level {}: {:?}", level, matches[0]);
        assert_eq!(matches[0].offset, MAX_MATCH_OFFSET, "level {}", level);
        assert!(matches.iter().all(|m| m.offset <= MAX_MATCH_OFFSET));

        let mut fresh = Encoder::new(level);
        let out = encode_and_replay(&mut fresh, &[&a, &b]);
        assert_eq!(out, [a.as_slice(), b.as_slice()].concat(), "level {}", level);
    }
}

#[test]
fn previous_block_one_past_max_offset_is_rejected() {
    let mut rng = Rng::new(0xb0b);
    let body = rng.bytes(MAX_MATCH_OFFSET);
    let mut a = body.clone();
    a.push(0xa5);
    let b = body[..1000].to_vec();

    for level in [Level::Two, Level::Three] {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        enc.encode(&mut dst, &a);
        enc.encode(&mut dst, &b);
        assert!(
            placed_matches(&dst).is_empty(),
            "level {} reached {} bytes back",
            level,
            MAX_MATCH_OFFSET + 1
        );
        assert!(dst.is_verbatim(&b));
    }
}
