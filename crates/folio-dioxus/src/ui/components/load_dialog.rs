use dioxus::prelude::*;
use relative_path::RelativePathBuf;

/// Pick one of the published components to load.
#[component]
pub fn LoadDialog(
    artifacts: Vec<RelativePathBuf>,
    on_pick: Callback<RelativePathBuf>,
    on_close: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "dialog-backdrop",
            div {
                class: "dialog",
                h2 { "Load Component" }
                if artifacts.is_empty() {
                    p { "No published components found." }
                } else {
                    ul {
                        class: "artifact-list",
                        for path in artifacts {
                            li {
                                key: "{path}",
                                button {
                                    onclick: {
                                        let path = path.clone();
                                        move |_| on_pick.call(path.clone())
                                    },
                                    "{path}"
                                }
                            }
                        }
                    }
                }
                button { class: "button", onclick: move |_| on_close.call(()), "Cancel" }
            }
        }
    }
}
