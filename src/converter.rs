//! HTML ⇄ block conversion
//!
//! This module turns an HTML fragment into the ordered block sequence the
//! editor works on, and hands serialization back to [`HtmlSerializer`].
//!
//! # Conversion Strategy
//!
//! The body of the parsed document is walked depth-first in document order.
//! Each node either emits exactly one block or, for wrappers the block model
//! has no concept of, is transparent and its children are walked in turn:
//!
//! | Node | Result |
//! |---|---|
//! | `h1`-`h6` | heading, level from the tag, full text content |
//! | `p` | paragraph, dropped when its text is blank |
//! | `ul` / `ol` | list, one line per descendant `li` |
//! | `blockquote` | quote |
//! | `img` | image with `src`/`alt` |
//! | placeholder `div` | image placeholder, alt from the `Image: ` label |
//! | other elements | no block, children walked |
//! | text | paragraph of the trimmed text, dropped when blank |
//!
//! Inline markup is flattened to text. A document that yields no blocks at all
//! becomes a single empty paragraph, so the result is never empty.
//!
//! # Round Trips
//!
//! `to_html(to_blocks(html))` keeps the supported structure of `html` but not
//! its exact bytes. `to_blocks(to_html(blocks))` reproduces `blocks` (kinds,
//! attributes, content) for anything produced by normal editing, because the
//! serializer only emits tags this walk recognizes.
//!
//! # Examples
//!
//! ```rust
//! use recipe_block_converter::block::BlockKind;
//! use recipe_block_converter::converter::BlockConverter;
//!
//! let converter = BlockConverter::new();
//! let blocks = converter.to_blocks("<div><h3>Method</h3><p>Whisk the eggs.</p></div>");
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].kind, BlockKind::Heading { level: 3 });
//! assert_eq!(blocks[1].content, "Whisk the eggs.");
//!
//! let html = converter.to_html(&blocks);
//! assert_eq!(html, "<h3>Method</h3>\n<p>Whisk the eggs.</p>");
//! ```

use crate::block::{Block, DEFAULT_HEADING_LEVEL};
use crate::parser::{attribute, body, has_class, parse_fragment};
use crate::security::{MAX_NESTING_DEPTH, SanitizeAction, SecurityValidator};
use crate::serializer::{HtmlSerializer, PLACEHOLDER_LABEL_PREFIX};
use log::{debug, trace, warn};
use markup5ever_rcdom::{Handle, NodeData};
use std::rc::Rc;

/// Marker class of image placeholder containers
pub const DEFAULT_PLACEHOLDER_CLASS: &str = "recipe-image-placeholder";

/// Conversion options
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// HTML-escape block text and image attributes on output
    pub escape_content: bool,
    /// Drop script-like subtrees and unsafe image URLs while parsing
    pub sanitize: bool,
    /// Deepest element nesting walked while parsing
    pub max_depth: usize,
    /// Class marking image placeholder containers, both read and written
    pub placeholder_class: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            escape_content: true,
            sanitize: false,
            max_depth: MAX_NESTING_DEPTH,
            placeholder_class: DEFAULT_PLACEHOLDER_CLASS.to_string(),
        }
    }
}

impl ConversionOptions {
    /// Default options with input sanitization turned on
    ///
    /// Script-like elements contribute neither blocks nor text and unsafe
    /// image sources are cleared.
    pub fn sanitized() -> Self {
        Self {
            sanitize: true,
            ..Default::default()
        }
    }

    /// Options reproducing the legacy editor exactly: no escaping on output
    /// and no sanitization on input
    pub fn verbatim() -> Self {
        Self {
            escape_content: false,
            sanitize: false,
            ..Default::default()
        }
    }
}

/// Bidirectional HTML ⇄ block converter
///
/// Stateless apart from its options; conversions are pure functions of their
/// input and never fail.
///
/// ```rust
/// use recipe_block_converter::converter::{BlockConverter, ConversionOptions};
///
/// let converter = BlockConverter::with_options(ConversionOptions::verbatim());
/// let blocks = converter.to_blocks("");
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].content, "");
/// ```
#[derive(Debug, Clone)]
pub struct BlockConverter {
    options: ConversionOptions,
    security_validator: SecurityValidator,
}

impl BlockConverter {
    /// Create a converter with default options
    pub fn new() -> Self {
        Self::with_options(ConversionOptions::default())
    }

    /// Create a converter with custom options
    pub fn with_options(options: ConversionOptions) -> Self {
        let security_validator = SecurityValidator::with_max_depth(options.max_depth);
        Self {
            options,
            security_validator,
        }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Convert an HTML fragment into a block sequence
    ///
    /// The result always holds at least one block.
    pub fn to_blocks(&self, html: &str) -> Vec<Block> {
        let mut walk = Walk::new(self);

        if !html.trim().is_empty() {
            let dom = parse_fragment(html);
            if let Some(body) = body(&dom) {
                walk.run(&body);
            }
        }

        let Walk {
            mut blocks,
            truncated,
            ..
        } = walk;

        if truncated > 0 {
            warn!(
                "skipped {} subtrees nested deeper than {} levels",
                truncated,
                self.security_validator.max_depth()
            );
        }

        if blocks.is_empty() {
            blocks.push(Block::paragraph(""));
        }

        debug!(
            "converted {} bytes of HTML into {} blocks",
            html.len(),
            blocks.len()
        );

        blocks
    }

    /// Serialize a block sequence to HTML, one block per line
    pub fn to_html(&self, blocks: &[Block]) -> String {
        let html = HtmlSerializer::new(&self.options).serialize(blocks);
        debug!(
            "serialized {} blocks into {} bytes of HTML",
            blocks.len(),
            html.len()
        );
        html
    }

    /// Re-serialize HTML through the block model
    ///
    /// This is the canonical form the editor reports after loading content.
    pub fn canonicalize(&self, html: &str) -> String {
        self.to_html(&self.to_blocks(html))
    }

    fn is_removed(&self, tag_name: &str) -> bool {
        self.options.sanitize
            && self.security_validator.check_element(tag_name) == SanitizeAction::Remove
    }

    fn image_block(&self, node: &Handle) -> Block {
        let alt = attribute(node, "alt").unwrap_or_default();
        let mut src = attribute(node, "src").unwrap_or_default();

        if self.options.sanitize && self.security_validator.sanitize_image_url(&src).is_none() {
            warn!("dropping unsafe image source");
            src.clear();
        }

        Block::image(src, alt)
    }
}

/// State of one `to_blocks` pass
///
/// Every traversal keeps an explicit stack of `(node, depth)` pairs, so
/// nesting is bounded by `max_depth` and not by the thread's stack size.
struct Walk<'a> {
    converter: &'a BlockConverter,
    blocks: Vec<Block>,
    /// Subtrees cut off by the depth limit
    truncated: usize,
}

impl<'a> Walk<'a> {
    fn new(converter: &'a BlockConverter) -> Self {
        Self {
            converter,
            blocks: Vec::new(),
            truncated: 0,
        }
    }

    fn run(&mut self, body: &Handle) {
        let mut stack = Vec::new();
        push_children(&mut stack, body, 1);

        while let Some((node, depth)) = stack.pop() {
            match node.data {
                NodeData::Element { ref name, .. } => {
                    if self.handle_element(&node, name.local.as_ref(), depth) {
                        push_children(&mut stack, &node, depth + 1);
                    }
                }
                NodeData::Text { ref contents } => {
                    let text = contents.borrow();
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        self.emit(Block::paragraph(trimmed));
                    }
                }
                // Comments, doctypes and processing instructions carry no content
                _ => {}
            }
        }
    }

    /// Emit the block for an element, if any
    ///
    /// Returns true when the element is transparent and its children must be
    /// walked.
    fn handle_element(&mut self, node: &Handle, tag_name: &str, depth: usize) -> bool {
        let converter = self.converter;

        if !converter.security_validator.within_depth(depth) {
            trace!("depth limit reached at <{}> ({} levels)", tag_name, depth);
            self.truncated += 1;
            return false;
        }

        if converter.is_removed(tag_name) {
            trace!("removed <{}> subtree", tag_name);
            return false;
        }

        match tag_name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = tag_name[1..].parse::<u8>().unwrap_or(DEFAULT_HEADING_LEVEL);
                let text = self.text_content(node, depth);
                self.emit(Block::heading(level, text));
            }

            "p" => {
                let text = self.text_content(node, depth);
                if !text.trim().is_empty() {
                    self.emit(Block::paragraph(text));
                }
            }

            "ul" | "ol" => {
                let items = self.list_items(node, depth);
                self.emit(Block::list(tag_name == "ol", items.join("\n")));
            }

            "blockquote" => {
                let text = self.text_content(node, depth);
                self.emit(Block::quote(text));
            }

            "img" => self.emit(converter.image_block(node)),

            "div" if has_class(node, &converter.options.placeholder_class) => {
                let label = self.text_content(node, depth);
                // First occurrence only, so alt text that itself contains the
                // label survives a round trip
                let alt = label.replacen(PLACEHOLDER_LABEL_PREFIX, "", 1);
                self.emit(Block::image_placeholder(alt));
            }

            // Wrappers and inline elements: flatten into the top-level sequence
            _ => return true,
        }

        false
    }

    fn emit(&mut self, block: Block) {
        trace!(
            "block #{} {} ({} bytes)",
            self.blocks.len(),
            block.block_type(),
            block.content.len()
        );
        self.blocks.push(block);
    }

    /// Visit the descendant elements of `node` that pass the depth limit and
    /// the removal list, in document order
    ///
    /// Text nodes are passed to `on_text`. `on_element` decides whether to
    /// descend into an element.
    fn descend(
        &mut self,
        node: &Handle,
        depth: usize,
        mut on_text: impl FnMut(&str),
        mut on_element: impl FnMut(&mut Self, &Handle, &str, usize) -> bool,
    ) {
        let mut stack = Vec::new();
        push_children(&mut stack, node, depth + 1);

        while let Some((child, child_depth)) = stack.pop() {
            match child.data {
                NodeData::Text { ref contents } => on_text(&**contents.borrow()),
                NodeData::Element { ref name, .. } => {
                    let tag_name = name.local.as_ref();
                    if !self.converter.security_validator.within_depth(child_depth) {
                        self.truncated += 1;
                        continue;
                    }
                    if self.converter.is_removed(tag_name)
                        || !on_element(self, &child, tag_name, child_depth)
                    {
                        continue;
                    }
                    push_children(&mut stack, &child, child_depth + 1);
                }
                _ => {}
            }
        }
    }

    /// Concatenated text of all descendant text nodes
    fn text_content(&mut self, node: &Handle, depth: usize) -> String {
        let mut output = String::new();
        self.descend(node, depth, |text| output.push_str(text), |_, _, _, _| true);
        output
    }

    /// Text of every descendant `li`, in document order
    ///
    /// Nested list items are collected too, after the item containing them.
    fn list_items(&mut self, node: &Handle, depth: usize) -> Vec<String> {
        let mut items = Vec::new();
        self.descend(
            node,
            depth,
            |_| {},
            |walk, child, tag_name, child_depth| {
                if tag_name == "li" {
                    items.push(walk.text_content(child, child_depth));
                }
                true
            },
        );
        items
    }
}

/// Push the children of `node` so that they pop in document order
fn push_children(stack: &mut Vec<(Handle, usize)>, node: &Handle, depth: usize) {
    for child in node.children.borrow().iter().rev() {
        stack.push((Rc::clone(child), depth));
    }
}

impl Default for BlockConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert HTML to blocks with default options
pub fn html_to_blocks(html: &str) -> Vec<Block> {
    BlockConverter::new().to_blocks(html)
}

/// Convert blocks to HTML with default options
pub fn blocks_to_html(blocks: &[Block]) -> String {
    BlockConverter::new().to_html(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockKind, BlockType};
    use proptest::prelude::*;

    fn kinds(blocks: &[Block]) -> Vec<BlockType> {
        blocks.iter().map(Block::block_type).collect()
    }

    #[test]
    fn test_empty_input_yields_single_empty_paragraph() {
        for html in ["", "   ", "\n\t  \n"] {
            let blocks = html_to_blocks(html);
            assert_eq!(blocks.len(), 1, "input {:?}", html);
            assert_eq!(blocks[0].kind, BlockKind::Paragraph);
            assert_eq!(blocks[0].content, "");
        }
    }

    #[test]
    fn test_comment_only_input_yields_floor() {
        let blocks = html_to_blocks("<!-- nothing here -->");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "");
    }

    #[test]
    fn test_heading_and_paragraph() {
        let blocks = html_to_blocks("<h2>Title</h2><p>Body text</p>");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].kind, BlockKind::Heading { level: 2 });
        assert_eq!(blocks[0].content, "Title");
        assert_eq!(blocks[1].kind, BlockKind::Paragraph);
        assert_eq!(blocks[1].content, "Body text");
    }

    #[test]
    fn test_all_heading_levels() {
        let blocks = html_to_blocks("<h1>a</h1><h2>b</h2><h3>c</h3><h4>d</h4><h5>e</h5><h6>f</h6>");
        let levels: Vec<u8> = blocks
            .iter()
            .map(|b| match b.kind {
                BlockKind::Heading { level } => level,
                _ => 0,
            })
            .collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_heading_keeps_inline_text() {
        let blocks = html_to_blocks("<h2>Lemon <em>drizzle</em> cake</h2>");
        assert_eq!(blocks[0].content, "Lemon drizzle cake");
    }

    #[test]
    fn test_paragraph_content_not_trimmed() {
        let blocks = html_to_blocks("<p>  spaced  </p>");
        assert_eq!(blocks[0].content, "  spaced  ");
    }

    #[test]
    fn test_blank_paragraphs_dropped() {
        let blocks = html_to_blocks("<p></p><p>kept</p><p>   </p>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "kept");
    }

    #[test]
    fn test_unordered_list() {
        let blocks = html_to_blocks("<ul><li>a</li><li>b</li></ul>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::List { ordered: false });
        assert_eq!(blocks[0].content, "a\nb");
    }

    #[test]
    fn test_ordered_list_with_formatting() {
        let blocks = html_to_blocks("<ol>\n  <li><strong>2</strong> cups flour</li>\n  <li>1 egg</li>\n</ol>");
        assert_eq!(blocks[0].kind, BlockKind::List { ordered: true });
        assert_eq!(blocks[0].content, "2 cups flour\n1 egg");
    }

    #[test]
    fn test_nested_list_items_collected_in_document_order() {
        let blocks = html_to_blocks("<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "ab\nb\nc");
    }

    #[test]
    fn test_blockquote_without_blank_check() {
        let blocks = html_to_blocks("<blockquote></blockquote>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Quote);
        assert_eq!(blocks[0].content, "");
    }

    #[test]
    fn test_image_attributes() {
        let blocks = html_to_blocks(r#"<img src="https://x/y.png" alt="Cake">"#);
        assert_eq!(
            blocks[0].kind,
            BlockKind::Image {
                src: "https://x/y.png".to_string(),
                alt: "Cake".to_string(),
                is_placeholder: false,
            }
        );
        assert_eq!(blocks[0].content, "");
    }

    #[test]
    fn test_image_missing_attributes() {
        let blocks = html_to_blocks("<img>");
        assert_eq!(
            blocks[0].kind,
            BlockKind::Image {
                src: String::new(),
                alt: String::new(),
                is_placeholder: false,
            }
        );
    }

    #[test]
    fn test_placeholder_div() {
        let blocks = html_to_blocks(r#"<div class="recipe-image-placeholder">Image: Cake</div>"#);
        assert_eq!(
            blocks[0].kind,
            BlockKind::Image {
                src: String::new(),
                alt: "Cake".to_string(),
                is_placeholder: true,
            }
        );
    }

    #[test]
    fn test_placeholder_without_label_prefix() {
        let blocks = html_to_blocks(r#"<div class="recipe-image-placeholder">Image placeholder</div>"#);
        assert!(matches!(
            blocks[0].kind,
            BlockKind::Image { ref alt, is_placeholder: true, .. } if alt == "Image placeholder"
        ));
    }

    #[test]
    fn test_plain_div_unwrapped() {
        let blocks = html_to_blocks("<div><h3>Step</h3><p>Mix</p></div>");
        assert_eq!(kinds(&blocks), vec![BlockType::Heading, BlockType::Paragraph]);
        assert_eq!(blocks[0].content, "Step");
        assert_eq!(blocks[1].content, "Mix");
    }

    #[test]
    fn test_deeply_wrapped_blocks_flattened() {
        let blocks = html_to_blocks(
            "<article><section><div><h2>A</h2></div><p>B</p></section><blockquote>C</blockquote></article>",
        );
        assert_eq!(
            kinds(&blocks),
            vec![BlockType::Heading, BlockType::Paragraph, BlockType::Quote]
        );
    }

    #[test]
    fn test_bare_text_becomes_trimmed_paragraph() {
        let blocks = html_to_blocks("  Serve warm.  ");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "Serve warm.");
    }

    #[test]
    fn test_inline_elements_split_bare_text() {
        let blocks = html_to_blocks("Mix <b>well</b> now");
        let contents: Vec<&str> = blocks.iter().map(|b| b.content.as_str()).collect();
        assert_eq!(contents, vec!["Mix", "well", "now"]);
    }

    #[test]
    fn test_whitespace_between_blocks_ignored() {
        let blocks = html_to_blocks("<h2>T</h2>\n\n   \n<p>P</p>\n");
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_fresh_ids_per_parse() {
        let a = html_to_blocks("<p>x</p>");
        let b = html_to_blocks("<p>x</p>");
        assert_ne!(a[0].id, b[0].id);
    }

    fn sanitizing() -> BlockConverter {
        BlockConverter::with_options(ConversionOptions::sanitized())
    }

    #[test]
    fn test_script_text_becomes_paragraph_by_default() {
        let blocks = html_to_blocks("<p>Before</p><script>var x = 1;</script>");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].kind, BlockKind::Paragraph);
        assert_eq!(blocks[1].content, "var x = 1;");

        // A leading script is parsed into <head>, which is never walked
        let blocks = html_to_blocks("<script>var x = 1;</script>");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "");
    }

    #[test]
    fn test_default_keeps_style_text_and_image_source() {
        let blocks = html_to_blocks("<p>Tasty<style>p{}</style> pie</p>");
        assert_eq!(blocks[0].content, "Tastyp{} pie");

        let blocks = html_to_blocks(r#"<img src="javascript:x" alt="a">"#);
        assert!(matches!(
            blocks[0].kind,
            BlockKind::Image { ref src, .. } if src == "javascript:x"
        ));
    }

    #[test]
    fn test_script_removed_when_sanitizing() {
        let blocks = sanitizing().to_blocks("<p>Before</p><script>alert('x')</script><p>After</p>");
        let contents: Vec<&str> = blocks.iter().map(|b| b.content.as_str()).collect();
        assert_eq!(contents, vec!["Before", "After"]);
    }

    #[test]
    fn test_script_text_kept_in_verbatim_mode() {
        let converter = BlockConverter::with_options(ConversionOptions::verbatim());
        let blocks = converter.to_blocks("<p>Before</p><script>alert('x')</script>");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].content, "alert('x')");
    }

    #[test]
    fn test_inline_style_excluded_from_text() {
        let blocks = sanitizing().to_blocks("<p>Tasty<style>p { color: red }</style> pie</p>");
        assert_eq!(blocks[0].content, "Tasty pie");
    }

    #[test]
    fn test_unsafe_image_source_dropped() {
        let blocks = sanitizing().to_blocks(r#"<img src="javascript:alert(1)" alt="x">"#);
        assert!(matches!(
            blocks[0].kind,
            BlockKind::Image { ref src, ref alt, .. } if src.is_empty() && alt == "x"
        ));
    }

    #[test]
    fn test_depth_limit_skips_deep_subtrees() {
        let converter = BlockConverter::with_options(ConversionOptions {
            max_depth: 3,
            ..Default::default()
        });
        let html = "<div><div><div><div><p>deep</p></div></div></div></div><p>shallow</p>";
        let blocks = converter.to_blocks(html);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "shallow");
    }

    fn nested_divs(depth: usize, inner: &str) -> String {
        let mut html = "<div>".repeat(depth);
        html.push_str(inner);
        html.push_str(&"</div>".repeat(depth));
        html
    }

    #[test]
    fn test_default_depth_keeps_deeply_wrapped_content() {
        let blocks = html_to_blocks(&nested_divs(600, "<p>deep</p>"));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "deep");
    }

    #[test]
    fn test_nesting_beyond_default_limit_is_cut_off() {
        let mut html = nested_divs(MAX_NESTING_DEPTH + 50, "<p>too deep</p>");
        html.push_str("<p>shallow</p>");
        let blocks = html_to_blocks(&html);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "shallow");
    }

    #[test]
    fn test_text_extraction_respects_depth_limit() {
        let converter = BlockConverter::with_options(ConversionOptions {
            max_depth: 4,
            ..Default::default()
        });
        let blocks = converter.to_blocks("<p>a<b>b<i>c<u>d<s>e</s></u></i></b></p>");
        assert_eq!(blocks[0].content, "abcd");
    }

    #[test]
    fn test_custom_placeholder_class_recognized() {
        let converter = BlockConverter::with_options(ConversionOptions {
            placeholder_class: "photo-slot".to_string(),
            ..Default::default()
        });
        let blocks = converter.to_blocks(r#"<div class="photo-slot">Image: Pie</div>"#);
        assert!(matches!(
            blocks[0].kind,
            BlockKind::Image { is_placeholder: true, ref alt, .. } if alt == "Pie"
        ));
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let converter = BlockConverter::new();
        let once = converter.canonicalize("<div><h1>T</h1>loose text<ul><li>i</li></ul></div>");
        let twice = converter.canonicalize(&once);
        assert_eq!(once, twice);
        assert_eq!(once, "<h1>T</h1>\n<p>loose text</p>\n<ul><li>i</li></ul>");
    }

    proptest! {
        #[test]
        fn prop_never_empty(input in ".{0,300}") {
            let blocks = html_to_blocks(&input);
            prop_assert!(!blocks.is_empty());
        }

        #[test]
        fn prop_malformed_html_no_crash(
            tag in prop::sample::select(vec!["div", "p", "span", "h1", "ul", "li", "blockquote", "ol"]),
            content in "[a-zA-Z0-9 ]{0,100}",
            close_tag in prop::bool::ANY,
            add_invalid_nesting in prop::bool::ANY,
        ) {
            let mut html = format!("<{}>{}", tag, content);
            if close_tag {
                html.push_str(&format!("</{}>", tag));
            }
            if add_invalid_nesting {
                html.push_str("<p><div>Invalid nesting</div></p>");
            }

            let blocks = html_to_blocks(&html);
            prop_assert!(!blocks.is_empty());
        }

        #[test]
        fn prop_wrapper_depth_does_not_change_blocks(
            depth in 0usize..30,
            text in "[a-zA-Z][a-zA-Z0-9 ]{0,20}",
        ) {
            let inner = format!("<h4>{}</h4><p>{}</p>", text, text);
            let mut html = String::new();
            for _ in 0..depth {
                html.push_str("<div>");
            }
            html.push_str(&inner);
            for _ in 0..depth {
                html.push_str("</div>");
            }

            let flat = html_to_blocks(&inner);
            let wrapped = html_to_blocks(&html);
            prop_assert_eq!(flat.len(), wrapped.len());
            for (a, b) in flat.iter().zip(wrapped.iter()) {
                prop_assert!(a.same_content(b));
            }
        }
    }
}
