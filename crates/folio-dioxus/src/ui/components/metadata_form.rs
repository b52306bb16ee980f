use dioxus::events::Key;
use dioxus::prelude::*;
use folio_engine::editing::Cmd;
use folio_engine::model::DocumentMetadata;

/// Title, description, category, date and tags of the post.
#[component]
pub fn MetadataForm(metadata: DocumentMetadata, on_command: Callback<Cmd>) -> Element {
    rsx! {
        div {
            class: "metadata-form",
            input {
                class: "field text-3xl font-bold",
                r#type: "text",
                placeholder: "Post title",
                value: "{metadata.title}",
                oninput: move |evt: FormEvent| on_command.call(Cmd::SetTitle(evt.value())),
            }
            textarea {
                class: "field",
                rows: 2,
                placeholder: "Short description",
                value: "{metadata.description}",
                oninput: move |evt: FormEvent| on_command.call(Cmd::SetDescription(evt.value())),
            }
            div {
                class: "metadata-row",
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Category",
                    value: "{metadata.category}",
                    oninput: move |evt: FormEvent| on_command.call(Cmd::SetCategory(evt.value())),
                }
                input {
                    class: "field w-48",
                    r#type: "date",
                    value: "{metadata.date}",
                    oninput: move |evt: FormEvent| on_command.call(Cmd::SetDate(evt.value())),
                }
            }
            TagEditor { tags: metadata.tags.clone(), on_command }
        }
    }
}

/// Tag chips plus an input that adds on Enter or the Add button.
#[component]
pub fn TagEditor(tags: Vec<String>, on_command: Callback<Cmd>) -> Element {
    let mut draft = use_signal(String::new);

    let mut commit = move || {
        let tag = draft.read().trim().to_string();
        if !tag.is_empty() {
            on_command.call(Cmd::AddTag(tag));
        }
        draft.set(String::new());
    };

    rsx! {
        div {
            class: "tag-editor",
            div {
                class: "tag-list",
                for tag in tags {
                    span {
                        key: "{tag}",
                        class: "tag",
                        "{tag}"
                        button {
                            class: "tag-remove",
                            title: "Remove tag",
                            onclick: {
                                let tag = tag.clone();
                                move |_| on_command.call(Cmd::RemoveTag(tag.clone()))
                            },
                            "×"
                        }
                    }
                }
            }
            div {
                class: "metadata-row",
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Add a tag",
                    value: "{draft}",
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            commit();
                        }
                    },
                }
                button { class: "button", onclick: move |_| commit(), "Add" }
            }
        }
    }
}
