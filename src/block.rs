//! Content block model
//!
//! A document is an ordered sequence of [`Block`]s. Each block carries a fresh
//! [`BlockId`], a [`BlockKind`] holding the variant-specific attributes, and a
//! plain-text `content` payload:
//!
//! - `Paragraph`, `Quote`: content is the text
//! - `Heading { level }`: content is the heading text, level is 1-6
//! - `List { ordered }`: content holds one item per line
//! - `Image { src, alt, is_placeholder }`: content is always empty
//!
//! # JSON Contract
//!
//! The hosting editor page exchanges blocks as JSON objects of the form
//!
//! ```json
//! {"id": "...", "type": "heading", "content": "Title", "attributes": {"level": 2}}
//! ```
//!
//! Attribute keys are camelCase (`level`, `ordered`, `src`, `alt`,
//! `isPlaceholder`). Decoding is lenient: missing attributes take their
//! defaults, unknown types fall back to `paragraph`, a missing id is generated
//! and heading levels are clamped into 1-6 (0 means unset and becomes 2).

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Heading level used when none is given
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Map any requested heading level into 1-6
///
/// Zero means "unset" and yields [`DEFAULT_HEADING_LEVEL`]; anything else is
/// clamped.
///
/// ```
/// use recipe_block_converter::block::heading_level;
///
/// assert_eq!(heading_level(0), 2);
/// assert_eq!(heading_level(-1), 1);
/// assert_eq!(heading_level(9), 6);
/// ```
pub fn heading_level(level: i64) -> u8 {
    match level {
        0 => DEFAULT_HEADING_LEVEL,
        // clamped into 1..=6, so the cast cannot truncate
        _ => level.clamp(1, 6) as u8,
    }
}

/// Opaque block identifier
///
/// Ids only exist for UI identity; they are never part of the semantic
/// content of a document and are regenerated on every parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(String);

impl BlockId {
    /// Generate a fresh identifier (UUID v4, hyphenless)
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for BlockId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Block variant tag without attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    List,
    Quote,
    Image,
}

impl BlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::List => "list",
            BlockType::Quote => "quote",
            BlockType::Image => "image",
        }
    }

    /// Parse a type name; anything unrecognized is treated as a paragraph
    pub fn from_name(name: &str) -> Self {
        match name {
            "heading" => BlockType::Heading,
            "list" => BlockType::List,
            "quote" => BlockType::Quote,
            "image" => BlockType::Image,
            _ => BlockType::Paragraph,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Block variant together with its attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading {
        /// 1-6
        level: u8,
    },
    List {
        ordered: bool,
    },
    Quote,
    Image {
        src: String,
        alt: String,
        /// No image yet; render a placeholder box labelled with `alt`
        is_placeholder: bool,
    },
}

impl BlockKind {
    /// Heading kind with the level mapped by [`heading_level`]
    pub fn heading(level: u8) -> Self {
        BlockKind::Heading {
            level: heading_level(i64::from(level)),
        }
    }

    /// Drop attribute combinations the serializer cannot express
    ///
    /// An image with a source always renders as `<img>`, so its placeholder
    /// flag is cleared.
    pub fn normalized(self) -> Self {
        match self {
            BlockKind::Image {
                src,
                alt,
                is_placeholder: true,
            } if !src.is_empty() => BlockKind::Image {
                src,
                alt,
                is_placeholder: false,
            },
            other => other,
        }
    }

    /// Kind with default attributes for a freshly inserted block
    pub fn default_for(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Paragraph => BlockKind::Paragraph,
            BlockType::Heading => BlockKind::Heading {
                level: DEFAULT_HEADING_LEVEL,
            },
            BlockType::List => BlockKind::List { ordered: false },
            BlockType::Quote => BlockKind::Quote,
            BlockType::Image => BlockKind::Image {
                src: String::new(),
                alt: String::new(),
                is_placeholder: false,
            },
        }
    }

    /// False for kinds whose content is always empty
    pub fn has_text(&self) -> bool {
        !matches!(self, BlockKind::Image { .. })
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockKind::Paragraph => BlockType::Paragraph,
            BlockKind::Heading { .. } => BlockType::Heading,
            BlockKind::List { .. } => BlockType::List,
            BlockKind::Quote => BlockType::Quote,
            BlockKind::Image { .. } => BlockType::Image,
        }
    }
}

/// A unit of editable content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BlockRecord", from = "BlockRecord")]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub content: String,
}

impl Block {
    /// Create a block with a freshly generated id
    ///
    /// Image blocks never carry text, so `content` is dropped for them.
    pub fn new(kind: BlockKind, content: impl Into<String>) -> Self {
        let kind = kind.normalized();
        let content = if kind.has_text() {
            content.into()
        } else {
            String::new()
        };
        Self {
            id: BlockId::generate(),
            kind,
            content,
        }
    }

    /// Create an empty block of the given type with default attributes
    pub fn empty(block_type: BlockType) -> Self {
        Self::new(BlockKind::default_for(block_type), String::new())
    }

    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, content)
    }

    pub fn heading(level: u8, content: impl Into<String>) -> Self {
        Self::new(BlockKind::heading(level), content)
    }

    pub fn list(ordered: bool, content: impl Into<String>) -> Self {
        Self::new(BlockKind::List { ordered }, content)
    }

    pub fn quote(content: impl Into<String>) -> Self {
        Self::new(BlockKind::Quote, content)
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::new(
            BlockKind::Image {
                src: src.into(),
                alt: alt.into(),
                is_placeholder: false,
            },
            String::new(),
        )
    }

    pub fn image_placeholder(alt: impl Into<String>) -> Self {
        Self::new(
            BlockKind::Image {
                src: String::new(),
                alt: alt.into(),
                is_placeholder: true,
            },
            String::new(),
        )
    }

    pub fn block_type(&self) -> BlockType {
        self.kind.block_type()
    }

    /// Non-blank list items, in order
    ///
    /// Meaningful for list blocks only, but defined for every kind.
    pub fn list_items(&self) -> impl Iterator<Item = &str> {
        self.content
            .split('\n')
            .filter(|item| !item.trim().is_empty())
    }

    /// True if both blocks carry the same kind and content, ignoring ids
    pub fn same_content(&self, other: &Block) -> bool {
        self.kind == other.kind && self.content == other.content
    }
}

/// JSON shape of a block as exchanged with the editor page
#[derive(Debug, Serialize, Deserialize)]
struct BlockRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    attributes: BlockAttributes,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ordered: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_placeholder: Option<bool>,
}

impl From<Block> for BlockRecord {
    fn from(block: Block) -> Self {
        let block_type = block.block_type().as_str().to_string();
        let attributes = match block.kind {
            BlockKind::Paragraph | BlockKind::Quote => BlockAttributes::default(),
            BlockKind::Heading { level } => BlockAttributes {
                level: Some(i64::from(level)),
                ..Default::default()
            },
            BlockKind::List { ordered } => BlockAttributes {
                ordered: Some(ordered),
                ..Default::default()
            },
            BlockKind::Image {
                src,
                alt,
                is_placeholder,
            } => BlockAttributes {
                src: Some(src),
                alt: Some(alt),
                is_placeholder: Some(is_placeholder),
                ..Default::default()
            },
        };

        Self {
            id: Some(block.id.0),
            block_type,
            content: block.content,
            attributes,
        }
    }
}

impl From<BlockRecord> for Block {
    fn from(record: BlockRecord) -> Self {
        let attrs = record.attributes;
        let kind = match BlockType::from_name(&record.block_type) {
            BlockType::Paragraph => BlockKind::Paragraph,
            BlockType::Quote => BlockKind::Quote,
            BlockType::Heading => BlockKind::Heading {
                level: heading_level(attrs.level.unwrap_or(0)),
            },
            BlockType::List => BlockKind::List {
                ordered: attrs.ordered.unwrap_or(false),
            },
            BlockType::Image => BlockKind::Image {
                src: attrs.src.unwrap_or_default(),
                alt: attrs.alt.unwrap_or_default(),
                is_placeholder: attrs.is_placeholder.unwrap_or(false),
            },
        }
        .normalized();
        let content = if kind.has_text() {
            record.content
        } else {
            String::new()
        };

        Self {
            id: record
                .id
                .filter(|id| !id.is_empty())
                .map(BlockId)
                .unwrap_or_else(BlockId::generate),
            kind,
            content,
        }
    }
}
