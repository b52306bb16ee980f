use crate::model::BlockId;

/// Result of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patch {
    /// Session version after the command. Unchanged for no-ops.
    pub version: u64,
    /// Whether the document actually changed.
    pub applied: bool,
    /// Block edited in place, or the block a new one was appended as.
    pub changed: Option<BlockId>,
}

impl Patch {
    pub(crate) fn noop(version: u64) -> Self {
        Self {
            version,
            applied: false,
            changed: None,
        }
    }
}
