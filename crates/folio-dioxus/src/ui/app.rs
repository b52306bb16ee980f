use dioxus::prelude::*;
use folio_engine::editing::{Cmd, EditorSession};
use folio_engine::{export_document, import_document, io};
use relative_path::RelativePathBuf;
use std::path::{Path, PathBuf};

use super::components::{
    AddBlockMenu, BlockList, DocumentPreview, LoadDialog, MetadataForm, Toast, ToastView,
    load_katex, typeset_page,
};

const FOLIO_CSS: &str = include_str!("../assets/folio.css");

#[component]
pub fn App(posts_path: PathBuf) -> Element {
    let mut session = use_signal(EditorSession::new);
    let mut previewing = use_signal(|| false);
    let mut toast = use_signal(|| None::<Toast>);
    let mut load_choices = use_signal(|| None::<Vec<RelativePathBuf>>);

    let on_command = use_callback(move |cmd: Cmd| {
        session.write().apply(cmd);
    });

    use_effect(load_katex);
    use_effect(move || {
        let _ = session.read().version();
        let _ = previewing();
        typeset_page();
    });

    rsx! {
        style { {FOLIO_CSS} }
        div {
            class: "app-container",
            if previewing() {
                DocumentPreview {
                    document: session.read().document().clone(),
                    on_back: move |_| previewing.set(false),
                }
            } else {
                div {
                    class: "editor",
                    header {
                        class: "editor-header",
                        h1 { "Create New Blog Post" }
                        div {
                            class: "editor-actions",
                            button {
                                class: "button",
                                onclick: move |_| on_command.call(Cmd::Reset),
                                "New Post"
                            }
                            button {
                                class: "button",
                                onclick: {
                                    let posts_path = posts_path.clone();
                                    move |_| match io::scan_artifacts(&posts_path) {
                                        Ok(artifacts) => load_choices.set(Some(artifacts)),
                                        Err(e) => {
                                            log::warn!("Cannot list components: {e}");
                                            toast.set(Some(Toast::error("Error loading component")));
                                        }
                                    }
                                },
                                "Load Component"
                            }
                            button {
                                class: "button",
                                onclick: move |_| previewing.set(true),
                                "Preview"
                            }
                            button {
                                class: "button button-primary",
                                onclick: {
                                    let posts_path = posts_path.clone();
                                    move |_| {
                                        let outcome = publish(&session.read(), &posts_path);
                                        toast.set(Some(outcome));
                                    }
                                },
                                "Publish"
                            }
                        }
                    }
                    MetadataForm {
                        metadata: session.read().document().metadata.clone(),
                        on_command,
                    }
                    BlockList {
                        blocks: session.read().document().blocks.clone(),
                        on_command,
                    }
                    AddBlockMenu { on_command }
                }
            }
            if let Some(artifacts) = load_choices() {
                LoadDialog {
                    artifacts,
                    on_pick: {
                        let posts_path = posts_path.clone();
                        move |path: RelativePathBuf| {
                            load_choices.set(None);
                            let outcome = match load(&path, &posts_path) {
                                Ok(cmd) => {
                                    session.write().apply(cmd);
                                    Toast::success("Component loaded successfully")
                                }
                                Err(e) => {
                                    log::warn!("Failed to load {path}: {e}");
                                    Toast::error("Error loading component")
                                }
                            };
                            toast.set(Some(outcome));
                        }
                    },
                    on_close: move |_| load_choices.set(None),
                }
            }
            if let Some(current) = toast() {
                ToastView { toast: current, on_dismiss: move |_| toast.set(None) }
            }
        }
    }
}

/// Serialize the session's document into the posts directory.
fn publish(session: &EditorSession, posts_path: &Path) -> Toast {
    let written = export_document(session.document())
        .map_err(|e| e.to_string())
        .and_then(|artifact| io::publish_artifact(&artifact, posts_path).map_err(|e| e.to_string()));

    match written {
        Ok(path) => Toast::success(format!("Component file saved to {}", path.display())),
        Err(message) => {
            log::warn!("Publish failed: {message}");
            Toast::error(message)
        }
    }
}

/// Read and import a published component. The session is only touched
/// when this succeeds.
fn load(path: &RelativePathBuf, posts_path: &Path) -> Result<Cmd, Box<dyn std::error::Error>> {
    let text = io::read_file(path, posts_path)?;
    let document = import_document(&text)?;
    Ok(Cmd::ReplaceMetadata(document.metadata))
}
