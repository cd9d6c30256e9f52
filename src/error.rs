//! Error types for editor operations
//!
//! Conversion itself never fails; only operations that address a block by id
//! or position can.

use crate::block::BlockId;

/// Errors returned by [`BlockEditor`](crate::editor::BlockEditor) mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// No block with this id in the current sequence
    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),
    /// The only remaining block cannot be deleted
    #[error("Cannot delete the last remaining block")]
    LastBlock,
    /// Text edit addressed to a block that holds no text, such as an image
    #[error("Block {0} does not hold text")]
    NoTextContent(BlockId),
    /// Position past the end of the sequence
    #[error("Index {index} out of bounds for {len} blocks")]
    IndexOutOfBounds { index: usize, len: usize },
}
