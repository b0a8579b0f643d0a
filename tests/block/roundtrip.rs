// Round trips through every level: whatever the encoder emits, replaying the
// tokens (or taking an unsearched block verbatim) must give the input back,
// and every match must stay inside DEFLATE's length and distance limits.

use snapmatch::block::{
    Encoder, Level, MatchFinder, Tokens, MAX_MATCH_LENGTH, MAX_MATCH_OFFSET,
    MAX_STORE_BLOCK_SIZE, MIN_NON_LITERAL_BLOCK_SIZE,
};

use crate::common::{encode_and_replay, periodic, placed_matches, prose, Rng};

fn roundtrip_all_levels(blocks: &[&[u8]]) {
    let expected: Vec<u8> = blocks.concat();
    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let out = encode_and_replay(&mut enc, blocks);
        assert_eq!(out, expected, "level {} round trip", level);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Block sizes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_block() {
    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        enc.encode(&mut dst, b"");
        assert!(dst.is_empty());
        assert!(dst.is_verbatim(b""));
    }
}

#[test]
fn every_short_length_is_left_unsearched() {
    let data = periodic(MIN_NON_LITERAL_BLOCK_SIZE);
    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        for n in 1..MIN_NON_LITERAL_BLOCK_SIZE {
            let block = &data[..n];
            enc.encode(&mut dst, block);
            assert_eq!(dst.len(), n, "level {} len {}", level, n);
            assert!(dst.is_verbatim(block));
        }
    }
}

#[test]
fn shortest_searchable_block() {
    let block = vec![b'q'; MIN_NON_LITERAL_BLOCK_SIZE];
    roundtrip_all_levels(&[&block]);

    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        enc.encode(&mut dst, &block);
        assert_eq!(dst.covered_len(), block.len());
        assert!(dst.len() < block.len(), "level {} found nothing", level);
    }
}

#[test]
fn largest_block() {
    let mut rng = Rng::new(7);
    let noise = rng.bytes(MAX_STORE_BLOCK_SIZE);
    let text = prose(MAX_STORE_BLOCK_SIZE);
    roundtrip_all_levels(&[&noise]);
    roundtrip_all_levels(&[&text]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Content
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn random_blocks_of_many_sizes() {
    let mut rng = Rng::new(0xfeed);
    for n in [17, 18, 31, 32, 33, 64, 100, 255, 256, 1000, 4096, 20_000] {
        let block = rng.bytes(n);
        roundtrip_all_levels(&[&block]);
    }
}

#[test]
fn single_byte_run_uses_overlapping_copies() {
    let block = vec![0u8; 5000];
    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        enc.encode(&mut dst, &block);
        let matches = placed_matches(&dst);
        assert!(!matches.is_empty());
        assert_eq!(matches[0].offset, 1, "level {}", level);
        assert!(dst.len() < 60, "level {} emitted {} tokens", level, dst.len());
    }
    roundtrip_all_levels(&[&block]);
}

#[test]
fn multi_block_streams() {
    let text = prose(200_000);
    let mut rng = Rng::new(99);
    let noise = rng.bytes(30_000);

    let mut blocks: Vec<&[u8]> = text.chunks(MAX_STORE_BLOCK_SIZE).collect();
    roundtrip_all_levels(&blocks);

    blocks = text[..50_000].chunks(1000).collect();
    blocks.insert(10, &noise[..5]);
    blocks.insert(20, &noise);
    blocks.insert(21, &text[..16]);
    roundtrip_all_levels(&blocks);
}

// ─────────────────────────────────────────────────────────────────────────────
// Match bounds
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn matches_respect_deflate_limits() {
    let text = prose(150_000);
    let blocks: Vec<&[u8]> = text.chunks(MAX_STORE_BLOCK_SIZE).collect();
    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        let mut seen = 0usize;
        for block in &blocks {
            enc.encode(&mut dst, block);
            for m in placed_matches(&dst) {
                assert!((4..=MAX_MATCH_LENGTH).contains(&m.length), "{:?}", m);
                assert!((1..=MAX_MATCH_OFFSET).contains(&m.offset), "{:?}", m);
                if level == Level::One {
                    assert!(m.offset <= m.pos, "level 1 left its block: {:?}", m);
                } else {
                    assert!(m.offset <= seen + m.pos, "{:?}", m);
                }
            }
            seen = block.len();
        }
    }
}

#[test]
fn long_runs_are_capped() {
    let block = periodic(MAX_STORE_BLOCK_SIZE);
    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        enc.encode(&mut dst, &block);
        let longest = placed_matches(&dst)
            .iter()
            .map(|m| m.length)
            .max()
            .unwrap_or(0);
        assert_eq!(longest, MAX_MATCH_LENGTH, "level {}", level);
    }
}

#[test]
fn first_byte_is_always_a_literal() {
    let block = vec![b'a'; 1000];
    for level in Level::ALL {
        let mut enc = Encoder::new(level);
        let mut dst = Tokens::new();
        enc.encode(&mut dst, &block);
        assert_eq!(dst.as_slice()[0].literal_byte(), Some(b'a'));
        assert!(placed_matches(&dst).iter().all(|m| m.pos >= 1));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Determinism and dispatch
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fresh_encoders_agree() {
    let text = prose(120_000);
    let blocks: Vec<&[u8]> = text.chunks(40_000).collect();
    for level in Level::ALL {
        let mut a = Encoder::new(level);
        let mut b = Encoder::new(level);
        let mut da = Tokens::new();
        let mut db = Tokens::new();
        for block in &blocks {
            a.encode(&mut da, block);
            b.encode(&mut db, block);
            assert_eq!(da.as_slice(), db.as_slice(), "level {}", level);
        }
    }
}

#[test]
fn trait_objects_round_trip() {
    let text = prose(10_000);
    let mut finders: Vec<Box<dyn MatchFinder>> = Level::ALL
        .iter()
        .map(|&l| Box::new(Encoder::new(l)) as Box<dyn MatchFinder>)
        .collect();
    for f in finders.iter_mut() {
        let out = encode_and_replay(f.as_mut(), &[&text[..5000], &text[5000..]]);
        assert_eq!(out, text);
    }
}
