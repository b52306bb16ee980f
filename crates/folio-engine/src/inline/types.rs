use super::kinds::Emphasis;

/// First-level split of a text field: math spans versus everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    /// Math source with the dollars stripped.
    Math(&'a str),
}

/// Second-level split of a plain segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkPart<'a> {
    Text(&'a str),
    Link { text: &'a str, href: &'a str },
}

/// A rendered inline node.
///
/// Every consumer (editor preview, read-only preview, artifact) walks this
/// same tree, so the three views cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Literal text. Never interpreted as markup by any consumer.
    Text(String),
    Styled {
        emphasis: Emphasis,
        children: Vec<InlineNode>,
    },
    /// Opens in a new external context. Link text is literal.
    Link { text: String, href: String },
    /// Inline (never labelled) math.
    Math(String),
}

impl InlineNode {
    pub fn text(s: impl Into<String>) -> Self {
        InlineNode::Text(s.into())
    }

    pub fn styled(emphasis: Emphasis, children: Vec<InlineNode>) -> Self {
        InlineNode::Styled { emphasis, children }
    }

    /// Concatenated visible text, with math kept as its source.
    pub fn plain_text(nodes: &[InlineNode]) -> String {
        let mut out = String::new();
        for node in nodes {
            match node {
                InlineNode::Text(t) | InlineNode::Math(t) => out.push_str(t),
                InlineNode::Link { text, .. } => out.push_str(text),
                InlineNode::Styled { children, .. } => out.push_str(&Self::plain_text(children)),
            }
        }
        out
    }
}
