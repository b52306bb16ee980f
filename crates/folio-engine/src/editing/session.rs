use crate::editing::{Cmd, Patch};
use crate::model::{BlockId, Document, DocumentMetadata};

/// Single owner of the document being edited.
///
/// Every mutation goes through [`EditorSession::apply`]; the version counter
/// moves only when the document actually changed.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    document: Document,
    version: u64,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::from_document(Document::new(DocumentMetadata::today()))
    }

    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            version: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        log::debug!("apply {cmd:?}");
        let (applied, changed) = self.apply_inner(cmd);
        if !applied {
            return Patch::noop(self.version);
        }
        self.version += 1;
        Patch {
            version: self.version,
            applied,
            changed,
        }
    }

    fn apply_inner(&mut self, cmd: Cmd) -> (bool, Option<BlockId>) {
        let target = cmd.target();
        let doc = &mut self.document;
        let applied = match cmd {
            Cmd::AddBlock { block_type } => {
                let id = doc.push_block(block_type);
                return (true, Some(id));
            }
            Cmd::UpdateContent { id, content } => match doc.block(id) {
                Some(block) => {
                    let next = block.with_content(content);
                    doc.replace_block(next)
                }
                None => false,
            },
            Cmd::UpdateProperties { id, patch } => match doc.block(id) {
                Some(block) => {
                    let next = block.with_properties(&patch);
                    doc.replace_block(next)
                }
                None => false,
            },
            Cmd::EditLegend { id, edit } => match doc.block(id) {
                Some(block) => {
                    let next = block.with_legend_edit(&edit);
                    doc.replace_block(next)
                }
                None => false,
            },
            Cmd::RemoveBlock { id } => doc.remove_block(id),
            Cmd::MoveBlock { from, to } => doc.move_block(from, to),
            Cmd::SetTitle(value) => set_field(&mut doc.metadata.title, value),
            Cmd::SetDescription(value) => set_field(&mut doc.metadata.description, value),
            Cmd::SetCategory(value) => set_field(&mut doc.metadata.category, value),
            Cmd::SetDate(value) => set_field(&mut doc.metadata.date, value),
            Cmd::AddTag(tag) => doc.metadata.add_tag(&tag),
            Cmd::RemoveTag(tag) => doc.metadata.remove_tag(&tag),
            Cmd::ReplaceMetadata(metadata) => {
                *doc = Document::new(metadata);
                true
            }
            Cmd::Reset => {
                *doc = Document::new(DocumentMetadata::today());
                true
            }
        };
        (applied, target.filter(|_| applied))
    }
}

fn set_field(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
