use dioxus::prelude::*;
use folio_engine::model::Document;
use folio_engine::render::display;

use super::NodeView;

/// The post as readers will see it, inside the page chrome.
#[component]
pub fn DocumentPreview(document: Document, on_back: Callback<()>) -> Element {
    let metadata = &document.metadata;
    let title = if metadata.title.is_empty() {
        "Untitled Post".to_string()
    } else {
        metadata.title.clone()
    };

    rsx! {
        div {
            class: "page-layout",
            button {
                class: "back-link",
                onclick: move |_| on_back.call(()),
                "← Back to Editor"
            }
            header {
                class: "page-header",
                if !metadata.category.is_empty() {
                    span { class: "badge", "{metadata.category}" }
                }
                h1 { class: "text-4xl font-bold", "{title}" }
                if !metadata.description.is_empty() {
                    p { class: "text-neutral-600", "{metadata.description}" }
                }
                div {
                    class: "page-meta",
                    if !metadata.date.is_empty() {
                        span { class: "date", "{metadata.date}" }
                    }
                    for tag in metadata.tags.iter() {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
            article {
                class: "prose prose-lg mx-auto",
                div {
                    class: "mt-8",
                    for block in document.blocks.iter() {
                        NodeView { key: "{block.id}", node: display(block) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use folio_engine::model::{BlockType, DocumentMetadata};

    #[component]
    fn Harness(document: Document) -> Element {
        rsx! { DocumentPreview { document, on_back: move |_| {} } }
    }

    fn render_preview(document: Document) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { document });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn untitled_post_placeholder() {
        let html = render_preview(Document::new(DocumentMetadata::empty()));

        assert!(html.contains("Untitled Post"));
        assert!(html.contains("Back to Editor"));
        assert!(!html.contains("badge"));
    }

    #[test]
    fn blocks_render_in_order() {
        let mut document = Document::new(DocumentMetadata {
            title: "Preview".to_string(),
            category: "Physics".to_string(),
            ..DocumentMetadata::empty()
        });
        let first = document.push_block(BlockType::Header1);
        let second = document.push_block(BlockType::Paragraph);
        for block in &mut document.blocks {
            if block.id == first {
                *block = block.with_content("Intro");
            } else if block.id == second {
                *block = block.with_content("Body *text*");
            }
        }

        let html = render_preview(document);

        assert!(html.contains(r#"<span class="badge">Physics</span>"#));
        let intro = html.find(">Intro</h1>").unwrap();
        let body = html.find("Body <em>text</em>").unwrap();
        assert!(intro < body);
    }
}
