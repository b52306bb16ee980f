use crate::model::{BlockId, BlockType, DocumentMetadata, LegendEdit, PropertyPatch};

/// Every mutation an editing session accepts.
///
/// Block-addressed commands that name an unknown id are no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Append a new empty block.
    AddBlock { block_type: BlockType },
    UpdateContent { id: BlockId, content: String },
    UpdateProperties { id: BlockId, patch: PropertyPatch },
    EditLegend { id: BlockId, edit: LegendEdit },
    RemoveBlock { id: BlockId },
    /// Reorder by position. `to: None` is a drop outside any target.
    MoveBlock { from: usize, to: Option<usize> },
    SetTitle(String),
    SetDescription(String),
    SetCategory(String),
    SetDate(String),
    AddTag(String),
    RemoveTag(String),
    /// Load imported metadata. The block list is emptied.
    ReplaceMetadata(DocumentMetadata),
    /// Start over with blank metadata dated today.
    Reset,
}

impl Cmd {
    /// The block this command edits in place, if any.
    pub fn target(&self) -> Option<BlockId> {
        match self {
            Cmd::UpdateContent { id, .. }
            | Cmd::UpdateProperties { id, .. }
            | Cmd::EditLegend { id, .. } => Some(*id),
            _ => None,
        }
    }
}
