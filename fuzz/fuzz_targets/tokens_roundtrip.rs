#![no_main]
use libfuzzer_sys::fuzz_target;
use snapmatch::block::Level;
use snapmatch::{scan, ScanOptions};

fuzz_target!(|data: &[u8]| {
    // The first byte picks the block size so short, boundary and full blocks
    // all get exercised; the rest is the stream.
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    let block_size = match first % 4 {
        0 => 16,
        1 => 17 + first as usize,
        2 => 1024,
        _ => 65_535,
    };
    for level in Level::ALL {
        let options = ScanOptions {
            level,
            block_size,
            verify: true,
        };
        if let Err(e) = scan(rest, &options) {
            panic!("level {} block {}: {}", level, block_size, e);
        }
    }
});
