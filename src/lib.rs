//! Recipe Block Converter
//!
//! Conversion engine behind the recipe article block editor. Article HTML is
//! parsed into an ordered sequence of typed content blocks for direct editing,
//! and edited blocks are serialized back to HTML for storage and publishing.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `block`: block model and its JSON contract with the editor page
//! - `parser`: HTML5 parsing using html5ever
//! - `converter`: HTML to block conversion and conversion options
//! - `serializer`: block to HTML rendering
//! - `editor`: headless editing session with change notifications
//! - `security`: sanitization rules applied while parsing
//! - `fingerprint`: content fingerprints using BLAKE3
//! - `word_count`: word count of article HTML
//! - `error`: error types for editor operations
//!
//! # Example
//!
//! ```rust
//! use recipe_block_converter::{blocks_to_html, html_to_blocks};
//!
//! let blocks = html_to_blocks("<h2>Title</h2><p>Body text</p>");
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks_to_html(&blocks), "<h2>Title</h2>\n<p>Body text</p>");
//! ```

pub mod block;
pub mod converter;
pub mod editor;
pub mod error;
pub mod fingerprint;
pub mod parser;
pub mod security;
pub mod serializer;
pub mod word_count;

// Re-export main types for convenience
pub use block::{Block, BlockId, BlockKind, BlockType};
pub use converter::{BlockConverter, ConversionOptions, blocks_to_html, html_to_blocks};
pub use editor::{BlockEditor, MoveDirection};
pub use error::EditError;
pub use fingerprint::ContentFingerprint;
