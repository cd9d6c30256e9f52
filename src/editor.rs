//! Headless block editor session
//!
//! [`BlockEditor`] owns the working block sequence of one document and plays
//! the editor surface's side of the contract with the hosting page:
//!
//! - external content is loaded with [`BlockEditor::load`], replacing every
//!   block and its id
//! - each mutation edits the sequence in place and regenerates the HTML
//! - the regenerated HTML is pushed to the registered change callback, unless
//!   its fingerprint matches the last HTML reported
//!
//! Everything happens synchronously on the caller's thread; the callback runs
//! before the mutating method returns.
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use recipe_block_converter::block::BlockType;
//! use recipe_block_converter::editor::BlockEditor;
//!
//! let reported = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&reported);
//!
//! let mut editor = BlockEditor::new("<h2>Pancakes</h2>");
//! editor.on_change(move |html| sink.borrow_mut().push(html.to_string()));
//!
//! let id = editor.insert_block(0, BlockType::Paragraph)?;
//! editor.update_content(&id, "Whisk the batter.")?;
//!
//! assert_eq!(
//!     reported.borrow().last().map(String::as_str),
//!     Some("<h2>Pancakes</h2>\n<p>Whisk the batter.</p>")
//! );
//! # Ok::<(), recipe_block_converter::error::EditError>(())
//! ```

use crate::block::{Block, BlockId, BlockKind, BlockType};
use crate::converter::{BlockConverter, ConversionOptions};
use crate::error::EditError;
use crate::fingerprint::ContentFingerprint;
use crate::word_count::count_words;
use log::debug;

/// Direction for [`BlockEditor::move_block`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

type ChangeListener = Box<dyn FnMut(&str)>;

/// Editing session over one document
pub struct BlockEditor {
    converter: BlockConverter,
    blocks: Vec<Block>,
    listener: Option<ChangeListener>,
    last_reported: Option<ContentFingerprint>,
}

impl BlockEditor {
    /// Start a session from HTML with default conversion options
    pub fn new(html: &str) -> Self {
        Self::with_options(html, ConversionOptions::default())
    }

    /// Start a session from HTML with custom conversion options
    pub fn with_options(html: &str, options: ConversionOptions) -> Self {
        let converter = BlockConverter::with_options(options);
        let blocks = converter.to_blocks(html);
        Self {
            converter,
            blocks,
            listener: None,
            last_reported: None,
        }
    }

    /// Register the change callback, replacing any previous one
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Replace the document with externally supplied HTML
    ///
    /// All previous blocks and ids are dropped.
    pub fn load(&mut self, html: &str) {
        self.blocks = self.converter.to_blocks(html);
        debug!("loaded document with {} blocks", self.blocks.len());
        self.notify();
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false: a session holds at least one block
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Current document as HTML
    pub fn html(&self) -> String {
        self.converter.to_html(&self.blocks)
    }

    pub fn word_count(&self) -> usize {
        count_words(&self.html())
    }

    pub fn fingerprint(&self) -> ContentFingerprint {
        ContentFingerprint::of(&self.html())
    }

    /// Insert an empty block of `block_type` right after position `after`
    ///
    /// Headings start at level 2, lists unordered, images without source.
    pub fn insert_block(
        &mut self,
        after: usize,
        block_type: BlockType,
    ) -> Result<BlockId, EditError> {
        self.check_index(after)?;
        Ok(self.insert_at(after + 1, block_type))
    }

    /// Insert an empty block of `block_type` right before position `before`
    ///
    /// `insert_block_before(0, ..)` adds a block at the top of the document.
    pub fn insert_block_before(
        &mut self,
        before: usize,
        block_type: BlockType,
    ) -> Result<BlockId, EditError> {
        self.check_index(before)?;
        Ok(self.insert_at(before, block_type))
    }

    /// Replace the text of a block
    ///
    /// Image blocks hold no text and reject the edit with
    /// [`EditError::NoTextContent`].
    pub fn update_content(
        &mut self,
        id: &BlockId,
        content: impl Into<String>,
    ) -> Result<(), EditError> {
        let index = self.position(id)?;
        let block = &mut self.blocks[index];
        if !block.kind.has_text() {
            return Err(EditError::NoTextContent(id.clone()));
        }
        block.content = content.into();
        self.notify();
        Ok(())
    }

    /// Replace the kind and attributes of a block, keeping its id
    ///
    /// The text is kept unless the new kind holds none, in which case it is
    /// cleared. An image with a source loses its placeholder flag.
    pub fn update_kind(&mut self, id: &BlockId, kind: BlockKind) -> Result<(), EditError> {
        let index = self.position(id)?;
        let block = &mut self.blocks[index];
        block.kind = kind.normalized();
        if !block.kind.has_text() {
            block.content.clear();
        }
        self.notify();
        Ok(())
    }

    /// Remove a block and return it
    ///
    /// The last remaining block cannot be deleted.
    pub fn delete_block(&mut self, id: &BlockId) -> Result<Block, EditError> {
        let index = self.position(id)?;
        if self.blocks.len() == 1 {
            return Err(EditError::LastBlock);
        }

        let removed = self.blocks.remove(index);
        debug!("deleted block {} at {}", removed.id, index);
        self.notify();
        Ok(removed)
    }

    /// Swap a block with its neighbour
    ///
    /// Returns `false` without changing anything when the block is already
    /// first (moving up) or last (moving down).
    pub fn move_block(&mut self, id: &BlockId, direction: MoveDirection) -> Result<bool, EditError> {
        let index = self.position(id)?;
        let target = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => Some(index + 1).filter(|&t| t < self.blocks.len()),
        };

        let Some(target) = target else {
            return Ok(false);
        };

        self.blocks.swap(index, target);
        self.notify();
        Ok(true)
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.blocks.len() {
            Ok(())
        } else {
            Err(EditError::IndexOutOfBounds {
                index,
                len: self.blocks.len(),
            })
        }
    }

    fn insert_at(&mut self, index: usize, block_type: BlockType) -> BlockId {
        let block = Block::empty(block_type);
        let id = block.id.clone();
        self.blocks.insert(index, block);
        debug!("inserted {} block {} at {}", block_type, id, index);
        self.notify();
        id
    }

    fn position(&self, id: &BlockId) -> Result<usize, EditError> {
        self.blocks
            .iter()
            .position(|block| &block.id == id)
            .ok_or_else(|| EditError::BlockNotFound(id.clone()))
    }

    fn notify(&mut self) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };

        let html = self.converter.to_html(&self.blocks);
        let fingerprint = ContentFingerprint::of(&html);
        if self.last_reported == Some(fingerprint) {
            return;
        }

        self.last_reported = Some(fingerprint);
        listener(&html);
    }
}

impl std::fmt::Debug for BlockEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockEditor")
            .field("blocks", &self.blocks)
            .field("has_listener", &self.listener.is_some())
            .field("last_reported", &self.last_reported)
            .finish()
    }
}
