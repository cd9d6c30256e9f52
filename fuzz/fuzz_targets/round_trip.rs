#![no_main]

use libfuzzer_sys::fuzz_target;
use recipe_block_converter::converter::BlockConverter;

// Canonical HTML must re-parse to the same canonical HTML
fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let converter = BlockConverter::new();

    let once = converter.canonicalize(&html);
    let twice = converter.canonicalize(&once);
    let thrice = converter.canonicalize(&twice);
    assert_eq!(twice, thrice);
});
