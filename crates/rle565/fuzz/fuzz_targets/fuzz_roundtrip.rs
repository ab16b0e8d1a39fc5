#![no_main]

use libfuzzer_sys::fuzz_target;
use rle565::{rle_encode, MAX_RUN_LENGTH};

fuzz_target!(|pixels: Vec<u16>| {
    let runs = rle_encode(&pixels);

    // Expanding the runs must reproduce the input exactly
    let expanded: Vec<u16> = runs
        .iter()
        .flat_map(|r| std::iter::repeat(r.value).take(r.length as usize))
        .collect();
    assert_eq!(expanded, pixels);

    // Every run is within bounds, and equal-valued neighbors only occur
    // when the earlier run hit the length cap
    for run in &runs {
        assert!(run.length >= 1);
    }
    for pair in runs.windows(2) {
        if pair[0].value == pair[1].value {
            assert_eq!(pair[0].length, MAX_RUN_LENGTH);
        }
    }
});
