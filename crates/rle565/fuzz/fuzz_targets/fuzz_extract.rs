#![no_main]

use libfuzzer_sys::fuzz_target;
use rle565::extract_image;

fuzz_target!(|text: &str| {
    // Extraction must never panic on arbitrary text, and any accepted image
    // must satisfy the count invariant.
    if let Ok(image) = extract_image(text) {
        assert_eq!(image.pixels.len(), image.width * image.height);
        assert!(!image.pixels.is_empty());
    }
});
