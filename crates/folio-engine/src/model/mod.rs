//! Block model: the closed set of block variants, their typed properties and
//! the document that owns them.

pub mod block;
pub mod document;

pub use block::{
    BlockId, BlockProperties, BlockType, ContentBlock, LegendEdit, LegendEntry, PropertyPatch,
    UnknownBlockType, create_block, move_block, remove_block, update_content, update_properties,
};
pub use document::{Document, DocumentMetadata};
