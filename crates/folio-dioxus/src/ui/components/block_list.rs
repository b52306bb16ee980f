use dioxus::prelude::*;
use folio_engine::editing::{Cmd, DragSession};
use folio_engine::model::ContentBlock;

use super::BlockEditor;

/// The document's blocks in order, each with reorder and remove controls.
///
/// While a row is dragged the rows are shown in the provisional order; the
/// document itself only changes when the row is dropped on a position.
#[component]
pub fn BlockList(blocks: Vec<ContentBlock>, on_command: Callback<Cmd>) -> Element {
    let mut drag = use_signal(|| None::<DragSession>);
    let len = blocks.len();

    let (order, dragged) = match drag.read().as_ref() {
        Some(session) if session.order().len() == len => (session.order(), Some(session.from())),
        _ => ((0..len).collect::<Vec<_>>(), None),
    };
    let rows = order
        .into_iter()
        .enumerate()
        .map(|(position, index)| (position, index, blocks[index].clone()));

    if blocks.is_empty() {
        return rsx! {
            p { class: "empty-document", "No blocks yet. Use \"+ Add Block\" to start writing." }
        };
    }

    rsx! {
        div {
            class: "block-list",
            for (position, index, block) in rows {
                div {
                    key: "{block.id}",
                    class: if dragged == Some(index) { "block-row dragging" } else { "block-row" },
                    draggable: true,
                    ondragstart: move |_| drag.set(DragSession::start(index, len)),
                    ondragover: move |evt: DragEvent| {
                        evt.prevent_default();
                        if let Some(session) = drag.write().as_mut() {
                            session.hover(position);
                        }
                    },
                    ondrop: move |evt: DragEvent| {
                        evt.prevent_default();
                        if let Some(cmd) = drag.write().take().and_then(|s| s.drop_on(Some(position))) {
                            on_command.call(cmd);
                        }
                    },
                    ondragend: move |_| {
                        if let Some(session) = drag.write().take() {
                            session.cancel();
                        }
                    },
                    div {
                        class: "block-toolbar",
                        span { class: "drag-handle", title: "Drag to reorder", "⠿" }
                        span { class: "block-type", {block.block_type().label()} }
                        button {
                            class: "button",
                            disabled: index == 0,
                            onclick: move |_| on_command.call(Cmd::MoveBlock { from: index, to: index.checked_sub(1) }),
                            "↑"
                        }
                        button {
                            class: "button",
                            disabled: index + 1 == len,
                            onclick: move |_| on_command.call(Cmd::MoveBlock { from: index, to: Some(index + 1) }),
                            "↓"
                        }
                        button {
                            class: "button button-danger",
                            onclick: {
                                let id = block.id;
                                move |_| on_command.call(Cmd::RemoveBlock { id })
                            },
                            "Remove"
                        }
                    }
                    BlockEditor { block, on_command }
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
    use folio_engine::model::{BlockType, create_block};

    #[component]
    fn Harness(blocks: Vec<ContentBlock>) -> Element {
        rsx! { BlockList { blocks, on_command: move |_| {} } }
    }

    fn render_list(blocks: Vec<ContentBlock>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { blocks });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn rows_follow_document_order() {
        let html = render_list(vec![
            create_block(BlockType::Header1).with_content("First"),
            create_block(BlockType::Paragraph).with_content("Second"),
        ]);

        let first = html.find(r#"value="First""#).unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert_eq!(html.matches(r#"class="block-row""#).count(), 2);
        assert!(html.contains("Header 1"));
    }

    #[test]
    fn empty_list_shows_hint() {
        let html = render_list(Vec::new());
        assert!(html.contains("No blocks yet"));
    }
}
