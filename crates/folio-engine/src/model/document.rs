use serde::{Deserialize, Serialize};

use crate::model::block::{BlockId, BlockType, ContentBlock, create_block, move_block, remove_block};

/// Post-level metadata shown in the page chrome and written as artifact attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub title: String,
    /// Doubles as the post summary.
    pub description: String,
    pub category: String,
    /// ISO-8601 calendar date (`YYYY-MM-DD`). Kept as text so imported
    /// artifacts round-trip whatever they carried.
    pub date: String,
    pub tags: Vec<String>,
}

impl DocumentMetadata {
    /// Blank metadata dated today (local time).
    pub fn today() -> Self {
        Self {
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ..Self::empty()
        }
    }

    pub fn empty() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            date: String::new(),
            tags: Vec::new(),
        }
    }

    /// Add a tag after trimming. Blank and already-present tags are ignored.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self::today()
    }
}

/// Metadata plus the ordered block list. Block order is rendering order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    pub metadata: DocumentMetadata,
    pub blocks: Vec<ContentBlock>,
}

impl Document {
    pub fn new(metadata: DocumentMetadata) -> Self {
        Self {
            metadata,
            blocks: Vec::new(),
        }
    }

    /// Append a fresh block of `block_type` and return its id.
    pub fn push_block(&mut self, block_type: BlockType) -> BlockId {
        let block = create_block(block_type);
        let id = block.id;
        self.blocks.push(block);
        id
    }

    pub fn block(&self, id: BlockId) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Swap in an updated copy of an existing block, matched by id.
    pub fn replace_block(&mut self, block: ContentBlock) -> bool {
        match self.blocks.iter_mut().find(|b| b.id == block.id) {
            Some(slot) if *slot != block => {
                *slot = block;
                true
            }
            _ => false,
        }
    }

    pub fn remove_block(&mut self, id: BlockId) -> bool {
        remove_block(&mut self.blocks, id)
    }

    pub fn move_block(&mut self, from: usize, to: Option<usize>) -> bool {
        move_block(&mut self.blocks, from, to)
    }

    pub fn block_ids(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id).collect()
    }
}
