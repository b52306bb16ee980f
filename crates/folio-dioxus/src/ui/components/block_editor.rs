use dioxus::prelude::*;
use folio_engine::editing::Cmd;
use folio_engine::model::{BlockId, ContentBlock};
use folio_engine::render::{FieldSpec, FormRow, InputKind, form};

use super::{LegendEditor, NodeView};

/// Editing surface for one block, built from its form rows.
#[component]
pub fn BlockEditor(block: ContentBlock, on_command: Callback<Cmd>) -> Element {
    let id = block.id;
    let rows = form(&block);

    rsx! {
        div {
            class: "block-editor",
            for (i, row) in rows.into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "form-row",
                    {render_row(id, row, on_command)}
                }
            }
        }
    }
}

fn render_row(id: BlockId, row: FormRow, on_command: Callback<Cmd>) -> Element {
    match row {
        FormRow::Fields(fields) => rsx! {
            div {
                class: "flex gap-2",
                for (n, spec) in fields.into_iter().enumerate() {
                    FieldInput { key: "{n}", id, spec, on_command }
                }
            }
        },
        FormRow::Preview(node) => rsx! {
            div { class: "block-preview", NodeView { node } }
        },
        FormRow::Legend(legend) => rsx! {
            LegendEditor { id, legend, on_command }
        },
        FormRow::Caption(text) => rsx! {
            p { class: "text-sm font-medium text-neutral-600", "{text}" }
        },
    }
}

#[component]
fn FieldInput(id: BlockId, spec: FieldSpec, on_command: Callback<Cmd>) -> Element {
    let key = spec.key;
    let class = format!("field {}", spec.class);

    match spec.input {
        InputKind::Line => rsx! {
            input {
                class,
                r#type: "text",
                placeholder: "{spec.placeholder}",
                value: "{spec.value}",
                oninput: move |evt: FormEvent| on_command.call(key.command(id, evt.value())),
            }
        },
        InputKind::MultiLine => rsx! {
            textarea {
                class,
                rows: textarea_rows(&spec.value, 3),
                placeholder: "{spec.placeholder}",
                value: "{spec.value}",
                oninput: move |evt: FormEvent| on_command.call(key.command(id, evt.value())),
            }
        },
        InputKind::Code => rsx! {
            textarea {
                class,
                rows: textarea_rows(&spec.value, 8),
                spellcheck: false,
                placeholder: "{spec.placeholder}",
                value: "{spec.value}",
                oninput: move |evt: FormEvent| on_command.call(key.command(id, evt.value())),
            }
        },
    }
}

/// Grow with the content, between `min` and 20 rows.
fn textarea_rows(content: &str, min: u32) -> u32 {
    let line_count = content.lines().count() as u32;
    line_count.clamp(min, 20)
}
