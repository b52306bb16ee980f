use dioxus::prelude::*;
use folio_engine::editing::Cmd;
use folio_engine::model::{BlockId, LegendEdit, LegendEntry};

/// Symbol/description rows of an equation section's legend.
#[component]
pub fn LegendEditor(id: BlockId, legend: Vec<LegendEntry>, on_command: Callback<Cmd>) -> Element {
    let edit = move |edit: LegendEdit| on_command.call(Cmd::EditLegend { id, edit });

    rsx! {
        div {
            class: "legend-editor",
            for (index, entry) in legend.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "legend-row",
                    input {
                        class: "field w-24",
                        r#type: "text",
                        placeholder: "Symbol",
                        value: "{entry.symbol}",
                        oninput: move |evt: FormEvent| {
                            edit(LegendEdit::SetSymbol { index, symbol: evt.value() })
                        },
                    }
                    span { "=" }
                    input {
                        class: "field flex-grow",
                        r#type: "text",
                        placeholder: "Description",
                        value: "{entry.description}",
                        oninput: move |evt: FormEvent| {
                            edit(LegendEdit::SetDescription { index, description: evt.value() })
                        },
                    }
                    button {
                        class: "button button-danger",
                        onclick: move |_| edit(LegendEdit::Remove { index }),
                        "Remove"
                    }
                }
            }
            button {
                class: "button",
                onclick: move |_| edit(LegendEdit::Add),
                "+ Add Legend Item"
            }
        }
    }
}
