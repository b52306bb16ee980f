use dioxus::prelude::*;
use folio_engine::editing::Cmd;
use folio_engine::model::BlockType;

/// "Add Block" button with a drop-down of the insertable variants.
#[component]
pub fn AddBlockMenu(on_command: Callback<Cmd>) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "add-block-menu",
            button {
                class: "button",
                onclick: move |_| open.set(!open()),
                "+ Add Block"
            }
            if open() {
                ul {
                    class: "add-block-options",
                    for block_type in BlockType::MENU {
                        li {
                            key: "{block_type}",
                            button {
                                onclick: move |_| {
                                    on_command.call(Cmd::AddBlock { block_type });
                                    open.set(false);
                                },
                                {block_type.label()}
                            }
                        }
                    }
                }
            }
        }
    }
}
