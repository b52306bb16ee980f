use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque block identifier, assigned once at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The closed set of block variants.
///
/// Serialized with the camelCase wire names (`header1`, `equationWithLabel`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockType {
    Header1,
    Header2,
    Header3,
    Header4,
    Paragraph,
    Equation,
    EquationWithLabel,
    EquationSection,
    Quote,
    Code,
    Image,
    Video,
    OrderedList,
    UnorderedList,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Unknown block type: {0}")]
pub struct UnknownBlockType(pub String);

impl BlockType {
    pub const ALL: [BlockType; 14] = [
        BlockType::Header1,
        BlockType::Header2,
        BlockType::Header3,
        BlockType::Header4,
        BlockType::Paragraph,
        BlockType::Equation,
        BlockType::EquationWithLabel,
        BlockType::EquationSection,
        BlockType::Quote,
        BlockType::Code,
        BlockType::Image,
        BlockType::Video,
        BlockType::OrderedList,
        BlockType::UnorderedList,
    ];

    /// Variants offered by the "add block" menu, in menu order.
    ///
    /// `Header4` and `Equation` are valid variants but are not offered for insertion.
    pub const MENU: [BlockType; 12] = [
        BlockType::Header1,
        BlockType::Header2,
        BlockType::Header3,
        BlockType::Paragraph,
        BlockType::EquationWithLabel,
        BlockType::Quote,
        BlockType::Code,
        BlockType::Image,
        BlockType::Video,
        BlockType::OrderedList,
        BlockType::UnorderedList,
        BlockType::EquationSection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Header1 => "header1",
            BlockType::Header2 => "header2",
            BlockType::Header3 => "header3",
            BlockType::Header4 => "header4",
            BlockType::Paragraph => "paragraph",
            BlockType::Equation => "equation",
            BlockType::EquationWithLabel => "equationWithLabel",
            BlockType::EquationSection => "equationSection",
            BlockType::Quote => "quote",
            BlockType::Code => "code",
            BlockType::Image => "image",
            BlockType::Video => "video",
            BlockType::OrderedList => "orderedList",
            BlockType::UnorderedList => "unorderedList",
        }
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            BlockType::Header1 => "Header 1",
            BlockType::Header2 => "Header 2",
            BlockType::Header3 => "Header 3",
            BlockType::Header4 => "Header 4",
            BlockType::Paragraph => "Paragraph",
            BlockType::Equation => "Equation",
            BlockType::EquationWithLabel => "Labelled Eqn",
            BlockType::EquationSection => "Eqn Section",
            BlockType::Quote => "Quote",
            BlockType::Code => "Code",
            BlockType::Image => "Image",
            BlockType::Video => "Video",
            BlockType::OrderedList => "Ordered List",
            BlockType::UnorderedList => "Unordered List",
        }
    }

    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockType::Header1 => Some(1),
            BlockType::Header2 => Some(2),
            BlockType::Header3 => Some(3),
            BlockType::Header4 => Some(4),
            _ => None,
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

/// One `symbol = description` row under an equation section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub symbol: String,
    pub description: String,
}

impl LegendEntry {
    pub fn new(symbol: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            description: description.into(),
        }
    }
}

/// Strongly-typed per-variant properties.
///
/// The variant doubles as the block's type tag, so a block can never carry a
/// property its variant does not define.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BlockProperties {
    Header1,
    Header2,
    Header3,
    Header4,
    Paragraph,
    Equation,
    EquationWithLabel {
        label: String,
    },
    EquationSection {
        label: String,
        legend: Vec<LegendEntry>,
        description: String,
    },
    Quote {
        author: String,
    },
    Code {
        language: String,
    },
    Image {
        alt: String,
    },
    Video {
        description: String,
    },
    OrderedList,
    UnorderedList,
}

impl BlockProperties {
    /// Empty properties for a freshly created block of `block_type`.
    pub fn empty(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Header1 => BlockProperties::Header1,
            BlockType::Header2 => BlockProperties::Header2,
            BlockType::Header3 => BlockProperties::Header3,
            BlockType::Header4 => BlockProperties::Header4,
            BlockType::Paragraph => BlockProperties::Paragraph,
            BlockType::Equation => BlockProperties::Equation,
            BlockType::EquationWithLabel => BlockProperties::EquationWithLabel {
                label: String::new(),
            },
            BlockType::EquationSection => BlockProperties::EquationSection {
                label: String::new(),
                legend: Vec::new(),
                description: String::new(),
            },
            BlockType::Quote => BlockProperties::Quote {
                author: String::new(),
            },
            BlockType::Code => BlockProperties::Code {
                language: String::new(),
            },
            BlockType::Image => BlockProperties::Image { alt: String::new() },
            BlockType::Video => BlockProperties::Video {
                description: String::new(),
            },
            BlockType::OrderedList => BlockProperties::OrderedList,
            BlockType::UnorderedList => BlockProperties::UnorderedList,
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockProperties::Header1 => BlockType::Header1,
            BlockProperties::Header2 => BlockType::Header2,
            BlockProperties::Header3 => BlockType::Header3,
            BlockProperties::Header4 => BlockType::Header4,
            BlockProperties::Paragraph => BlockType::Paragraph,
            BlockProperties::Equation => BlockType::Equation,
            BlockProperties::EquationWithLabel { .. } => BlockType::EquationWithLabel,
            BlockProperties::EquationSection { .. } => BlockType::EquationSection,
            BlockProperties::Quote { .. } => BlockType::Quote,
            BlockProperties::Code { .. } => BlockType::Code,
            BlockProperties::Image { .. } => BlockType::Image,
            BlockProperties::Video { .. } => BlockType::Video,
            BlockProperties::OrderedList => BlockType::OrderedList,
            BlockProperties::UnorderedList => BlockType::UnorderedList,
        }
    }

    /// Shallow-merge `patch` into these properties.
    ///
    /// Keys the variant does not define are ignored; keys absent from the
    /// patch keep their current value. Returns whether anything was written.
    pub fn merge(&mut self, patch: &PropertyPatch) -> bool {
        fn set(slot: &mut String, value: &Option<String>) -> bool {
            match value {
                Some(v) => {
                    slot.clone_from(v);
                    true
                }
                None => false,
            }
        }

        match self {
            BlockProperties::EquationWithLabel { label } => set(label, &patch.label),
            BlockProperties::EquationSection {
                label,
                legend,
                description,
            } => {
                let mut touched = set(label, &patch.label);
                touched |= set(description, &patch.description);
                if let Some(new_legend) = &patch.legend {
                    legend.clone_from(new_legend);
                    touched = true;
                }
                touched
            }
            BlockProperties::Quote { author } => set(author, &patch.author),
            BlockProperties::Code { language } => set(language, &patch.language),
            BlockProperties::Image { alt } => set(alt, &patch.alt),
            BlockProperties::Video { description } => set(description, &patch.description),
            _ => false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            BlockProperties::EquationWithLabel { label }
            | BlockProperties::EquationSection { label, .. } => label,
            _ => "",
        }
    }

    pub fn legend(&self) -> &[LegendEntry] {
        match self {
            BlockProperties::EquationSection { legend, .. } => legend,
            _ => &[],
        }
    }
}

/// Partial property update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyPatch {
    pub label: Option<String>,
    pub author: Option<String>,
    pub language: Option<String>,
    pub alt: Option<String>,
    pub description: Option<String>,
    pub legend: Option<Vec<LegendEntry>>,
}

impl PropertyPatch {
    pub fn label(value: impl Into<String>) -> Self {
        Self {
            label: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn author(value: impl Into<String>) -> Self {
        Self {
            author: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn language(value: impl Into<String>) -> Self {
        Self {
            language: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn alt(value: impl Into<String>) -> Self {
        Self {
            alt: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn description(value: impl Into<String>) -> Self {
        Self {
            description: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn legend(value: Vec<LegendEntry>) -> Self {
        Self {
            legend: Some(value),
            ..Self::default()
        }
    }
}

/// Edit addressed to one legend row of an equation section.
#[derive(Debug, Clone, PartialEq)]
pub enum LegendEdit {
    Add,
    SetSymbol { index: usize, symbol: String },
    SetDescription { index: usize, description: String },
    Remove { index: usize },
}

/// One atomic unit of post content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: BlockId,
    pub content: String,
    pub properties: BlockProperties,
}

impl ContentBlock {
    /// Fresh block with a new id, empty content and empty properties.
    pub fn new(block_type: BlockType) -> Self {
        Self {
            id: BlockId::new(),
            content: String::new(),
            properties: BlockProperties::empty(block_type),
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.properties.block_type()
    }

    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    pub fn with_properties(&self, patch: &PropertyPatch) -> Self {
        let mut next = self.clone();
        next.properties.merge(patch);
        next
    }

    /// Apply a legend row edit. Out-of-range indices and non-section blocks
    /// come back unchanged.
    pub fn with_legend_edit(&self, edit: &LegendEdit) -> Self {
        let mut legend = self.properties.legend().to_vec();
        match edit {
            LegendEdit::Add => legend.push(LegendEntry::default()),
            LegendEdit::SetSymbol { index, symbol } => match legend.get_mut(*index) {
                Some(entry) => entry.symbol.clone_from(symbol),
                None => return self.clone(),
            },
            LegendEdit::SetDescription { index, description } => match legend.get_mut(*index) {
                Some(entry) => entry.description.clone_from(description),
                None => return self.clone(),
            },
            LegendEdit::Remove { index } => {
                if *index >= legend.len() {
                    return self.clone();
                }
                legend.remove(*index);
            }
        }
        self.with_properties(&PropertyPatch::legend(legend))
    }

    /// List items, one per line. Empty lines stay as empty items.
    pub fn list_items(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }
}

/// Create a new block of the given type. Never fails.
pub fn create_block(block_type: BlockType) -> ContentBlock {
    ContentBlock::new(block_type)
}

pub fn update_content(block: &ContentBlock, content: impl Into<String>) -> ContentBlock {
    block.with_content(content)
}

pub fn update_properties(block: &ContentBlock, patch: &PropertyPatch) -> ContentBlock {
    block.with_properties(patch)
}

/// Move the block at `from` so it ends up at `to`, keeping the relative
/// order of every other block.
///
/// A missing drop target (`None`) or an index outside the list is a no-op.
/// Returns whether the list changed.
pub fn move_block(blocks: &mut Vec<ContentBlock>, from: usize, to: Option<usize>) -> bool {
    let Some(to) = to else {
        return false;
    };
    if from >= blocks.len() || to >= blocks.len() || from == to {
        return false;
    }
    let block = blocks.remove(from);
    blocks.insert(to, block);
    true
}

/// Remove the block with `id`. Missing ids leave the list as it was.
pub fn remove_block(blocks: &mut Vec<ContentBlock>, id: BlockId) -> bool {
    match blocks.iter().position(|b| b.id == id) {
        Some(index) => {
            blocks.remove(index);
            true
        }
        None => false,
    }
}
