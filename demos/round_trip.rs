//! Round-trip example: generated article HTML to blocks and back
//!
//! Run with `RUST_LOG=debug` to see conversion logging.

use recipe_block_converter::block::BlockKind;
use recipe_block_converter::converter::{BlockConverter, ConversionOptions};
use recipe_block_converter::fingerprint::ContentFingerprint;
use recipe_block_converter::word_count::count_words;

const ARTICLE: &str = r#"
<h1>Lemon Drizzle Cake</h1>
<div class="recipe-image-placeholder" style="height: 300px;">Image: Lemon drizzle cake</div>
<p>A zingy loaf that keeps for days &amp; freezes well.</p>
<h2>Ingredients</h2>
<ul>
  <li>225g <strong>unsalted</strong> butter</li>
  <li>225g caster sugar</li>
  <li>2 lemons, zested</li>
</ul>
<h2>Method</h2>
<ol>
  <li>Heat the oven to 180C.</li>
  <li>Beat the butter and sugar until pale.</li>
</ol>
<blockquote>Pour the drizzle over while the cake is still warm.</blockquote>
<script>trackPageView()</script>
"#;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("=== Recipe Block Converter - Round Trip ===\n");

    // The article carries a tracking script, so sanitize on the way in
    let converter = BlockConverter::with_options(ConversionOptions::sanitized());
    let blocks = converter.to_blocks(ARTICLE);
    log::info!("parsed {} blocks", blocks.len());

    println!("Blocks:");
    for (index, block) in blocks.iter().enumerate() {
        let detail = match &block.kind {
            BlockKind::Heading { level } => format!("level {}", level),
            BlockKind::List { ordered } => {
                if *ordered { "ordered".to_string() } else { "unordered".to_string() }
            }
            BlockKind::Image { src, alt, is_placeholder } => {
                format!("src={:?} alt={:?} placeholder={}", src, alt, is_placeholder)
            }
            BlockKind::Paragraph | BlockKind::Quote => String::new(),
        };
        println!(
            "  {:>2}. {:<9} {:<40} {:?}",
            index,
            block.block_type(),
            detail,
            block.content
        );
    }

    let html = converter.to_html(&blocks);
    println!("\nSerialized HTML:\n{}\n", html);

    let canonical = converter.canonicalize(&html);
    println!("Fixed point: {}", canonical == html);
    println!("Words: {}", count_words(&html));
    println!("ETag: {}", ContentFingerprint::of(&html).etag());

    println!("\nAs JSON:");
    match serde_json::to_string_pretty(&blocks[..3]) {
        Ok(json) => println!("{}", json),
        Err(err) => log::error!("failed to encode blocks: {}", err),
    }

    let legacy = BlockConverter::with_options(ConversionOptions::verbatim());
    println!("\nLegacy verbatim output:\n{}", legacy.canonicalize(ARTICLE));
}
