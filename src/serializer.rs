//! Block sequence to HTML rendering
//!
//! Each block becomes one line of HTML; lines are joined with `\n` in
//! sequence order:
//!
//! | Block | HTML |
//! |---|---|
//! | heading | `<h{level}>text</h{level}>` |
//! | paragraph | `<p>text</p>` |
//! | list | `<ul>`/`<ol>` with one `<li>` per non-blank line |
//! | quote | `<blockquote>text</blockquote>` |
//! | image with `src` | `<img>` with responsive inline styling |
//! | placeholder image | styled `div` labelled `Image: {alt}` |
//! | image without `src` | styled `div` labelled `Image placeholder` |
//!
//! Only tags the parser recognizes are emitted, which is what makes
//! re-parsing serialized output a fixed point.
//!
//! Block text and image attributes are HTML-escaped unless
//! [`ConversionOptions::escape_content`] is turned off, in which case content
//! is interpolated verbatim as the legacy editor did.

use crate::block::{Block, BlockKind, heading_level};
use crate::converter::ConversionOptions;
use std::borrow::Cow;

/// Inline style of a rendered `<img>`
pub const IMAGE_STYLE: &str =
    "width: 100%; max-width: 600px; height: auto; border-radius: 8px; margin: 16px 0;";

/// Inline style of an image placeholder box
pub const PLACEHOLDER_STYLE: &str = "width: 100%; max-width: 600px; height: 300px; \
background: linear-gradient(135deg, #f5f7fa 0%, #c3cfe2 100%); border-radius: 8px; \
margin: 16px 0; display: flex; align-items: center; justify-content: center; \
color: #666; font-style: italic;";

/// Label prefix of a placeholder carrying alt text
pub const PLACEHOLDER_LABEL_PREFIX: &str = "Image: ";

/// Label of a placeholder without alt text
pub const GENERIC_PLACEHOLDER_LABEL: &str = "Image placeholder";

/// Renders blocks to HTML according to the conversion options
pub struct HtmlSerializer<'a> {
    options: &'a ConversionOptions,
}

impl<'a> HtmlSerializer<'a> {
    pub fn new(options: &'a ConversionOptions) -> Self {
        Self { options }
    }

    /// Serialize a block sequence, one block per line
    pub fn serialize(&self, blocks: &[Block]) -> String {
        let mut output = String::with_capacity(blocks.len() * 64);

        for (index, block) in blocks.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            self.write_block(block, &mut output);
        }

        output
    }

    /// Append the HTML of a single block
    pub fn write_block(&self, block: &Block, output: &mut String) {
        match block.kind {
            BlockKind::Heading { level } => {
                let level = heading_level(i64::from(level));
                output.push_str(&format!("<h{}>", level));
                output.push_str(&self.text(&block.content));
                output.push_str(&format!("</h{}>", level));
            }
            BlockKind::Paragraph => {
                output.push_str("<p>");
                output.push_str(&self.text(&block.content));
                output.push_str("</p>");
            }
            BlockKind::List { ordered } => {
                let tag = if ordered { "ol" } else { "ul" };
                output.push('<');
                output.push_str(tag);
                output.push('>');
                for item in block.list_items() {
                    output.push_str("<li>");
                    output.push_str(&self.text(item));
                    output.push_str("</li>");
                }
                output.push_str("</");
                output.push_str(tag);
                output.push('>');
            }
            BlockKind::Quote => {
                output.push_str("<blockquote>");
                output.push_str(&self.text(&block.content));
                output.push_str("</blockquote>");
            }
            BlockKind::Image {
                ref src,
                ref alt,
                is_placeholder,
            } => self.write_image(src, alt, is_placeholder, output),
        }
    }

    fn write_image(&self, src: &str, alt: &str, is_placeholder: bool, output: &mut String) {
        if !src.is_empty() {
            output.push_str("<img src=\"");
            output.push_str(&self.attribute(src));
            output.push_str("\" alt=\"");
            output.push_str(&self.attribute(alt));
            output.push_str("\" style=\"");
            output.push_str(IMAGE_STYLE);
            output.push_str("\" />");
            return;
        }

        output.push_str("<div class=\"");
        output.push_str(&self.attribute(&self.options.placeholder_class));
        output.push_str("\" style=\"");
        output.push_str(PLACEHOLDER_STYLE);
        output.push_str("\">");
        if is_placeholder {
            output.push_str(PLACEHOLDER_LABEL_PREFIX);
            output.push_str(&self.text(alt));
        } else {
            output.push_str(GENERIC_PLACEHOLDER_LABEL);
        }
        output.push_str("</div>");
    }

    fn text<'s>(&self, value: &'s str) -> Cow<'s, str> {
        if self.options.escape_content {
            html_escape::encode_text(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    fn attribute<'s>(&self, value: &'s str) -> Cow<'s, str> {
        if self.options.escape_content {
            html_escape::encode_double_quoted_attribute(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}
