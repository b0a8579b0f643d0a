#![no_main]
use libfuzzer_sys::fuzz_target;
use snapmatch::block::{
    replay_block, Encoder, Level, MatchFinder, Tokens, MAX_STORE_BLOCK_SIZE,
};

fuzz_target!(|data: &[u8]| {
    // The input is cut into blocks at each 0xfe; a block holding just 0xfd
    // resets the encoder instead of being encoded.
    let mut dst = Tokens::new();
    for level in [Level::Two, Level::Three] {
        let mut enc = Encoder::new(level);
        let mut out = Vec::new();
        let mut expected = Vec::new();
        for block in data.split(|&b| b == 0xfe) {
            let block = &block[..block.len().min(MAX_STORE_BLOCK_SIZE)];
            if block == [0xfd] {
                enc.reset();
                out.clear();
                expected.clear();
                continue;
            }
            enc.encode(&mut dst, block);
            replay_block(&dst, block, &mut out).expect("match reached past history");
            expected.extend_from_slice(block);
            assert_eq!(out, expected);
        }
    }
});
