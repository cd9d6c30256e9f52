#![no_main]

use libfuzzer_sys::fuzz_target;
use recipe_block_converter::converter::{BlockConverter, ConversionOptions};

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);

    for options in [
        ConversionOptions::default(),
        ConversionOptions::sanitized(),
        ConversionOptions::verbatim(),
    ] {
        let blocks = BlockConverter::with_options(options).to_blocks(&html);
        assert!(!blocks.is_empty());
    }
});
