use crate::inline::InlineNode;
use crate::math::MathMode;

/// Class applied to every inline link, in every consumer.
pub const LINK_CLASS: &str = "text-[rgb(43,154,154)] hover:underline";
pub const LINK_TARGET: &str = "_blank";
pub const LINK_REL: &str = "noopener noreferrer";

/// Element kinds a block can render to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    P,
    H1,
    H2,
    H3,
    H4,
    Blockquote,
    Footer,
    Pre,
    Code,
    Img,
    Iframe,
    Ol,
    Ul,
    Li,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::P => "p",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::Blockquote => "blockquote",
            Tag::Footer => "footer",
            Tag::Pre => "pre",
            Tag::Code => "code",
            Tag::Img => "img",
            Tag::Iframe => "iframe",
            Tag::Ol => "ol",
            Tag::Ul => "ul",
            Tag::Li => "li",
        }
    }

    /// Rendered self-closing with no children.
    pub fn is_void(self) -> bool {
        matches!(self, Tag::Img | Tag::Iframe)
    }

    pub fn heading(level: u8) -> Option<Tag> {
        match level {
            1 => Some(Tag::H1),
            2 => Some(Tag::H2),
            3 => Some(Tag::H3),
            4 => Some(Tag::H4),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrName {
    Class,
    Src,
    Alt,
    Title,
    FrameBorder,
    Allow,
    AllowFullScreen,
}

impl AttrName {
    /// React spelling.
    pub fn jsx(self) -> &'static str {
        match self {
            AttrName::Class => "className",
            AttrName::Src => "src",
            AttrName::Alt => "alt",
            AttrName::Title => "title",
            AttrName::FrameBorder => "frameBorder",
            AttrName::Allow => "allow",
            AttrName::AllowFullScreen => "allowFullScreen",
        }
    }

    /// DOM spelling.
    pub fn html(self) -> &'static str {
        match self {
            AttrName::Class => "class",
            AttrName::Src => "src",
            AttrName::Alt => "alt",
            AttrName::Title => "title",
            AttrName::FrameBorder => "frameborder",
            AttrName::Allow => "allow",
            AttrName::AllowFullScreen => "allowfullscreen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    /// Boolean attribute, present with no value.
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: AttrName,
    pub value: AttrValue,
}

/// One element of a block's render description. Attribute order is the
/// order they were added and every leaf keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Vec<Attr>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr(AttrName::Class, class)
    }

    pub fn attr(mut self, name: AttrName, value: impl Into<String>) -> Self {
        self.attrs.push(Attr {
            name,
            value: AttrValue::Text(value.into()),
        });
        self
    }

    pub fn flag(mut self, name: AttrName) -> Self {
        self.attrs.push(Attr {
            name,
            value: AttrValue::Flag,
        });
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Text value of `name`, if set.
    pub fn get(&self, name: AttrName) -> Option<&str> {
        self.attrs.iter().find_map(|a| match (&a.value, a.name == name) {
            (AttrValue::Text(v), true) => Some(v.as_str()),
            _ => None,
        })
    }

    pub fn has_flag(&self, name: AttrName) -> bool {
        self.attrs
            .iter()
            .any(|a| a.name == name && a.value == AttrValue::Flag)
    }
}

/// Leaf-independent description of rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// A text field after inline markup rendering.
    Rich(Vec<InlineNode>),
    /// Literal text. Escaped, never interpreted.
    Text(String),
    /// Literal text whose whitespace must survive (code).
    Preformatted(String),
    Math {
        source: String,
        mode: MathMode,
        /// Only ever set for display math.
        label: Option<String>,
    },
}

impl Node {
    pub fn display_math(source: &str, label: &str) -> Self {
        Node::Math {
            source: source.to_string(),
            mode: MathMode::Display,
            label: (!label.is_empty()).then(|| label.to_string()),
        }
    }

    pub fn inline_math(source: &str) -> Self {
        Node::Math {
            source: source.to_string(),
            mode: MathMode::Inline,
            label: None,
        }
    }

    /// True when this node sits on the same line as its siblings.
    pub fn is_inline(&self) -> bool {
        match self {
            Node::Rich(_) | Node::Text(_) | Node::Preformatted(_) => true,
            Node::Math { mode, .. } => *mode == MathMode::Inline,
            Node::Element(_) => false,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_attribute_order() {
        let el = Element::new(Tag::Iframe)
            .class("absolute")
            .attr(AttrName::Src, "https://x")
            .flag(AttrName::AllowFullScreen);

        let names: Vec<_> = el.attrs.iter().map(|a| a.name.jsx()).collect();
        assert_eq!(names, vec!["className", "src", "allowFullScreen"]);
        assert_eq!(el.get(AttrName::Src), Some("https://x"));
        assert!(el.has_flag(AttrName::AllowFullScreen));
        assert_eq!(el.get(AttrName::AllowFullScreen), None);
    }

    #[test]
    fn empty_label_is_dropped() {
        assert_eq!(
            Node::display_math("x", ""),
            Node::Math {
                source: "x".to_string(),
                mode: MathMode::Display,
                label: None,
            }
        );
    }

    #[test]
    fn inline_math_is_inline() {
        assert!(Node::inline_math("x").is_inline());
        assert!(!Node::display_math("x", "Eqn. 1").is_inline());
    }
}
