//! Source-text leaf: writes a render description as React JSX.

use crate::inline::InlineNode;
use crate::math::MathMode;
use crate::render::view::{Attr, AttrValue, Element, LINK_CLASS, LINK_REL, LINK_TARGET, Node};

const INDENT: usize = 2;

/// Render `node` as JSX. The first line is not indented; following lines are
/// indented relative to `indent`, the column the caller places it at.
pub fn to_jsx(node: &Node, indent: usize) -> String {
    let mut out = String::new();
    write_node(&mut out, node, indent);
    out
}

fn pad(out: &mut String, indent: usize) {
    out.push('\n');
    out.extend(std::iter::repeat_n(' ', indent));
}

fn write_node(out: &mut String, node: &Node, indent: usize) {
    match node {
        Node::Element(el) => write_element(out, el, indent),
        Node::Rich(nodes) => write_inline(out, nodes),
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Preformatted(text) => {
            out.push('{');
            out.push_str(&js_string_literal(text));
            out.push('}');
        }
        Node::Math {
            source,
            mode: MathMode::Inline,
            ..
        } => write_inline_math(out, source),
        Node::Math {
            source,
            mode: MathMode::Display,
            label,
        } => {
            out.push_str("<Math");
            pad(out, indent + INDENT);
            out.push_str("block");
            pad(out, indent + INDENT);
            write_attr_value(out, "math", source);
            if let Some(label) = label {
                pad(out, indent + INDENT);
                write_attr_value(out, "label", label);
            }
            pad(out, indent);
            out.push_str("/>");
        }
    }
}

fn write_element(out: &mut String, el: &Element, indent: usize) {
    let name = el.tag.name();

    if el.tag.is_void() {
        out.push('<');
        out.push_str(name);
        for attr in &el.attrs {
            pad(out, indent + INDENT);
            write_attr(out, attr);
        }
        pad(out, indent);
        out.push_str("/>");
        return;
    }

    out.push('<');
    out.push_str(name);
    for attr in &el.attrs {
        out.push(' ');
        write_attr(out, attr);
    }
    out.push('>');

    if el.children.iter().all(Node::is_inline) {
        for child in &el.children {
            write_node(out, child, indent);
        }
    } else {
        for child in &el.children {
            pad(out, indent + INDENT);
            write_node(out, child, indent + INDENT);
        }
        pad(out, indent);
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_attr(out: &mut String, attr: &Attr) {
    match &attr.value {
        AttrValue::Text(value) => write_attr_value(out, attr.name.jsx(), value),
        AttrValue::Flag => out.push_str(attr.name.jsx()),
    }
}

fn write_attr_value(out: &mut String, name: &str, value: &str) {
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}

fn write_inline_math(out: &mut String, source: &str) {
    out.push_str("<Math ");
    write_attr_value(out, "math", source);
    out.push_str(" />");
}

/// Inline nodes always stay on one line.
pub fn write_inline(out: &mut String, nodes: &[InlineNode]) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => out.push_str(&escape_text(text)),
            InlineNode::Styled { emphasis, children } => {
                let tag = emphasis.tag();
                out.push('<');
                out.push_str(tag);
                out.push('>');
                write_inline(out, children);
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            InlineNode::Link { text, href } => {
                out.push_str("<a ");
                write_attr_value(out, "href", href);
                out.push(' ');
                write_attr_value(out, "className", LINK_CLASS);
                out.push(' ');
                write_attr_value(out, "target", LINK_TARGET);
                out.push(' ');
                write_attr_value(out, "rel", LINK_REL);
                out.push('>');
                out.push_str(&escape_text(text));
                out.push_str("</a>");
            }
            InlineNode::Math(source) => write_inline_math(out, source),
        }
    }
}

/// Escape text for a JSX child position: markup characters and the braces
/// that would otherwise open an expression.
pub fn escape_text(text: &str) -> String {
    html_escape::encode_text(text)
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

/// Double-quoted JS string literal, used where whitespace must survive.
fn js_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c < '\x20' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
