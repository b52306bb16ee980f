use dioxus::prelude::*;
use folio_engine::inline::{Emphasis, InlineNode};
use folio_engine::render::{AttrName, Element as ViewElement, LINK_CLASS, LINK_REL, LINK_TARGET, Node, Tag};

use super::MathView;

/// Read-only DOM leaf over a block's render description.
#[component]
pub fn NodeView(node: Node) -> Element {
    render_node(&node)
}

fn render_node(node: &Node) -> Element {
    match node {
        Node::Element(el) => render_element(el),
        Node::Rich(nodes) => render_inline(nodes),
        Node::Text(text) | Node::Preformatted(text) => rsx! { "{text}" },
        Node::Math {
            source,
            mode,
            label,
        } => rsx! {
            MathView { source: source.clone(), mode: *mode, label: label.clone() }
        },
    }
}

fn text_attr(el: &ViewElement, name: AttrName) -> Option<String> {
    el.get(name).map(str::to_string)
}

fn render_element(el: &ViewElement) -> Element {
    let class = text_attr(el, AttrName::Class);
    let kids = rsx! {
        for child in el.children.iter() {
            {render_node(child)}
        }
    };

    match el.tag {
        Tag::Div => rsx! { div { class, {kids} } },
        Tag::P => rsx! { p { class, {kids} } },
        Tag::H1 => rsx! { h1 { class, {kids} } },
        Tag::H2 => rsx! { h2 { class, {kids} } },
        Tag::H3 => rsx! { h3 { class, {kids} } },
        Tag::H4 => rsx! { h4 { class, {kids} } },
        Tag::Blockquote => rsx! { blockquote { class, {kids} } },
        Tag::Footer => rsx! { footer { class, {kids} } },
        Tag::Pre => rsx! { pre { class, {kids} } },
        Tag::Code => rsx! { code { class, {kids} } },
        Tag::Ol => rsx! { ol { class, {kids} } },
        Tag::Ul => rsx! { ul { class, {kids} } },
        Tag::Li => rsx! { li { class, {kids} } },
        Tag::Img => rsx! {
            img {
                class,
                src: text_attr(el, AttrName::Src),
                alt: text_attr(el, AttrName::Alt),
            }
        },
        Tag::Iframe => rsx! {
            iframe {
                class,
                src: text_attr(el, AttrName::Src),
                title: text_attr(el, AttrName::Title),
                frameborder: text_attr(el, AttrName::FrameBorder),
                allow: text_attr(el, AttrName::Allow),
                allowfullscreen: el.has_flag(AttrName::AllowFullScreen),
            }
        },
    }
}

/// Inline markup as DOM. Links open in the system browser.
pub fn render_inline(nodes: &[InlineNode]) -> Element {
    rsx! {
        for node in nodes.iter() {
            {render_inline_node(node)}
        }
    }
}

fn render_inline_node(node: &InlineNode) -> Element {
    match node {
        InlineNode::Text(text) => rsx! { "{text}" },
        InlineNode::Styled { emphasis, children } => {
            let inner = render_inline(children);
            match emphasis {
                Emphasis::Bold => rsx! { strong { {inner} } },
                Emphasis::Italic => rsx! { em { {inner} } },
                Emphasis::Underline => rsx! { u { {inner} } },
                Emphasis::Strikethrough => rsx! { del { {inner} } },
            }
        }
        InlineNode::Link { text, href } => {
            let target = href.clone();
            rsx! {
                a {
                    class: LINK_CLASS,
                    href: "{href}",
                    target: LINK_TARGET,
                    rel: LINK_REL,
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        if let Err(e) = open_url(&target) {
                            log::warn!("Failed to open URL {target}: {e}");
                        }
                    },
                    "{text}"
                }
            }
        }
        InlineNode::Math(source) => rsx! {
            MathView { source: source.clone(), mode: folio_engine::math::MathMode::Inline, label: None }
        },
    }
}

/// Hand a URL to the system's default browser. No shell is involved, so the
/// URL reaches the browser as one argument whatever characters it contains.
fn open_url(url: &str) -> std::io::Result<()> {
    open::that_detached(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use folio_engine::model::{BlockType, PropertyPatch, create_block};
    use folio_engine::render::display;

    fn render_view(node: Node) -> String {
        let mut dom = VirtualDom::new_with_props(NodeView, NodeViewProps { node });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn paragraph_renders_inline_markup() {
        let block = create_block(BlockType::Paragraph)
            .with_content("**bold** and [site](https://example.com)");

        let html = render_view(display(&block));

        assert!(html.starts_with(r#"<p class="text-neutral-700 leading-relaxed mb-4">"#));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn link_with_shell_metacharacters_stays_one_target() {
        let block = create_block(BlockType::Paragraph)
            .with_content("[x](https://a.com/?q=1&calc|more^)");

        let html = render_view(display(&block));

        assert_eq!(html.matches("href=").count(), 1);
        assert!(html.contains("calc|more^\""));
    }

    #[test]
    fn quote_with_author_has_footer() {
        let block = create_block(BlockType::Quote)
            .with_content("Stay hungry")
            .with_properties(&PropertyPatch::author("Jobs"));

        let html = render_view(display(&block));

        assert!(html.contains("<blockquote"));
        assert!(html.contains("— Jobs</footer>"));
    }

    #[test]
    fn video_embeds_normalized_url() {
        let block = create_block(BlockType::Video).with_content("https://youtu.be/dQw4w9WgXcQ");

        let html = render_view(display(&block));

        assert!(html.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn code_is_not_interpreted() {
        let block = create_block(BlockType::Code).with_content("let x = **y**;");

        let html = render_view(display(&block));

        assert!(html.contains("let x = **y**;"));
        assert!(!html.contains("<strong>"));
    }
}
