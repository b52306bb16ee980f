use crate::editing::Cmd;
use crate::inline::render_inline;
use crate::model::{BlockId, BlockProperties, BlockType, ContentBlock, LegendEntry, PropertyPatch};
use crate::render::view::{AttrName, Element, Node, Tag};
use crate::video::normalize_video_url;

pub const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
pub const VIDEO_TITLE: &str = "Video player";

/// Which value an editor field reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Content,
    Label,
    Author,
    Language,
    Alt,
    Description,
}

impl FieldKey {
    /// The command that stores `value` into this field of block `id`.
    pub fn command(self, id: BlockId, value: String) -> Cmd {
        let patch = match self {
            FieldKey::Content => return Cmd::UpdateContent { id, content: value },
            FieldKey::Label => PropertyPatch::label(value),
            FieldKey::Author => PropertyPatch::author(value),
            FieldKey::Language => PropertyPatch::language(value),
            FieldKey::Alt => PropertyPatch::alt(value),
            FieldKey::Description => PropertyPatch::description(value),
        };
        Cmd::UpdateProperties { id, patch }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line text input.
    Line,
    /// Multi-line text area.
    MultiLine,
    /// Multi-line monospace area.
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub input: InputKind,
    pub placeholder: String,
    pub class: &'static str,
    pub value: String,
}

/// One row of a block's editor form, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormRow {
    /// Fields laid out side by side.
    Fields(Vec<FieldSpec>),
    /// Live preview of the block's current state.
    Preview(Node),
    /// Repeatable symbol/description editor.
    Legend(Vec<LegendEntry>),
    /// Small heading above the following row.
    Caption(&'static str),
}

/// Everything the three consumers need to show one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockView {
    pub id: BlockId,
    pub block_type: BlockType,
    /// Read-only rendering, shared by the preview and the artifact.
    pub display: Node,
    /// Editing surface.
    pub form: Vec<FormRow>,
}

/// The one place that dispatches on block variant.
pub fn describe(block: &ContentBlock) -> BlockView {
    BlockView {
        id: block.id,
        block_type: block.block_type(),
        display: display(block),
        form: form(block),
    }
}

/// Read-only render description of `block`.
///
/// Optional parts (label, author, captions, legend, description) appear only
/// when non-empty.
pub fn display(block: &ContentBlock) -> Node {
    let content = block.content.as_str();
    match &block.properties {
        BlockProperties::Header1
        | BlockProperties::Header2
        | BlockProperties::Header3
        | BlockProperties::Header4 => heading(block.block_type(), content),
        BlockProperties::Paragraph => Element::new(Tag::P)
            .class("text-neutral-700 leading-relaxed mb-4")
            .child(rich(content))
            .into(),
        BlockProperties::Equation => labelled_equation(content, ""),
        BlockProperties::EquationWithLabel { label } => labelled_equation(content, label),
        BlockProperties::Quote { author } => {
            let mut quote = Element::new(Tag::Blockquote)
                .class("border-l-4 border-[rgb(43,154,154)] pl-4 my-8")
                .child(
                    Element::new(Tag::P)
                        .class("text-xl italic text-neutral-600")
                        .child(rich(content)),
                );
            if !author.is_empty() {
                quote = quote.child(
                    Element::new(Tag::Footer)
                        .class("text-sm text-neutral-500 mt-2")
                        .child(Node::Text(format!("— {author}"))),
                );
            }
            quote.into()
        }
        BlockProperties::Code { language } => Element::new(Tag::Div)
            .class("mb-8")
            .child(
                Element::new(Tag::Pre)
                    .class("bg-neutral-50 p-4 rounded-lg overflow-x-auto")
                    .child(
                        Element::new(Tag::Code)
                            .class(language)
                            .child(Node::Preformatted(content.to_string())),
                    ),
            )
            .into(),
        BlockProperties::Image { alt } => Element::new(Tag::Div)
            .class("mb-8")
            .child(image_frame(content, alt))
            .children(caption(alt))
            .into(),
        BlockProperties::Video { description } => Element::new(Tag::Div)
            .class("mb-8")
            .child(video_frame(content))
            .children(caption(description))
            .into(),
        BlockProperties::OrderedList => list(Tag::Ol, "list-decimal", block),
        BlockProperties::UnorderedList => list(Tag::Ul, "list-disc", block),
        BlockProperties::EquationSection {
            label,
            legend,
            description,
        } => {
            let mut column = Element::new(Tag::Div)
                .class("flex flex-col items-center space-y-4")
                .child(
                    Element::new(Tag::Div)
                        .class("text-xl")
                        .child(Node::display_math(content, label)),
                );
            if !legend.is_empty() {
                column = column.child(
                    Element::new(Tag::Div)
                        .class("text-sm text-neutral-600 mt-4 space-y-1 w-full")
                        .child(Element::new(Tag::P).child(Node::Text("where:".to_string())))
                        .child(
                            Element::new(Tag::Ul)
                                .class("list-none space-y-2")
                                .children(legend.iter().map(legend_item)),
                        ),
                );
            }
            if !description.is_empty() {
                column = column.child(
                    Element::new(Tag::Div)
                        .class("text-sm text-neutral-700 mt-4 border-t pt-4 w-full")
                        .child(Element::new(Tag::P).child(rich(description))),
                );
            }
            Element::new(Tag::Div)
                .class("mb-8")
                .child(
                    Element::new(Tag::Div)
                        .class("bg-neutral-50 p-6 rounded-lg")
                        .child(column),
                )
                .into()
        }
    }
}

fn rich(text: &str) -> Node {
    Node::Rich(render_inline(text))
}

fn heading(block_type: BlockType, content: &str) -> Node {
    let (tag, class) = match block_type.heading_level() {
        Some(1) => (Tag::H1, "text-4xl font-bold mb-4"),
        Some(2) => (Tag::H2, "text-3xl font-semibold mb-3"),
        Some(3) => (Tag::H3, "text-2xl font-medium mb-2"),
        _ => (Tag::H4, "text-xl font-medium mb-2"),
    };
    Element::new(tag).class(class).child(rich(content)).into()
}

fn labelled_equation(source: &str, label: &str) -> Node {
    Element::new(Tag::Div)
        .class("my-2")
        .child(
            Element::new(Tag::Div).class("rounded-lg").child(
                Element::new(Tag::Div)
                    .class("flex flex-col items-center")
                    .child(Element::new(Tag::Div).child(Node::display_math(source, label))),
            ),
        )
        .into()
}

fn image_frame(src: &str, alt: &str) -> Element {
    Element::new(Tag::Div)
        .class("relative aspect-video rounded-lg overflow-hidden bg-neutral-100")
        .child(
            Element::new(Tag::Img)
                .attr(AttrName::Src, src)
                .attr(AttrName::Alt, alt)
                .class("object-cover w-full h-full"),
        )
}

fn video_frame(url: &str) -> Element {
    Element::new(Tag::Div)
        .class("relative w-full aspect-video rounded-lg overflow-hidden")
        .child(
        Element::new(Tag::Iframe)
            .class("absolute inset-0 w-full h-full")
            .attr(AttrName::Src, normalize_video_url(url))
            .attr(AttrName::Title, VIDEO_TITLE)
            .attr(AttrName::FrameBorder, "0")
            .attr(AttrName::Allow, VIDEO_ALLOW)
            .flag(AttrName::AllowFullScreen),
    )
}

fn caption(text: &str) -> Option<Node> {
    (!text.is_empty()).then(|| {
        Element::new(Tag::P)
            .class("text-sm text-neutral-500 mt-2")
            .child(rich(text))
            .into()
    })
}

fn list(tag: Tag, marker: &str, block: &ContentBlock) -> Node {
    Element::new(tag)
        .class(&format!(
            "{marker} pl-6 space-y-1 text-neutral-700 leading-relaxed mb-4"
        ))
        .children(
            block
                .list_items()
                .into_iter()
                .map(|item| Element::new(Tag::Li).child(Node::Text(item.to_string())).into()),
        )
        .into()
}

fn legend_item(entry: &LegendEntry) -> Node {
    Element::new(Tag::Li)
        .child(Node::inline_math(&entry.symbol))
        .child(Node::Text(" = ".to_string()))
        .child(rich(&entry.description))
        .into()
}

fn field(
    key: FieldKey,
    input: InputKind,
    placeholder: impl Into<String>,
    class: &'static str,
    value: &str,
) -> FieldSpec {
    FieldSpec {
        key,
        input,
        placeholder: placeholder.into(),
        class,
        value: value.to_string(),
    }
}

fn equation_rows(source: &str, label: &str) -> Vec<FormRow> {
    vec![
        FormRow::Fields(vec![
            field(
                FieldKey::Content,
                InputKind::Line,
                "Enter LaTeX equation",
                "flex-grow",
                source,
            ),
            field(
                FieldKey::Label,
                InputKind::Line,
                "Equation label (e.g., Eqn. 1)",
                "w-32",
                label,
            ),
        ]),
        FormRow::Preview(
            Element::new(Tag::Div)
                .class("p-4 bg-neutral-50 rounded")
                .child(Node::display_math(source, label))
                .into(),
        ),
    ]
}

/// Editing surface for `block`.
pub fn form(block: &ContentBlock) -> Vec<FormRow> {
    let content = block.content.as_str();
    let block_type = block.block_type();
    match &block.properties {
        BlockProperties::Header1
        | BlockProperties::Header2
        | BlockProperties::Header3
        | BlockProperties::Header4 => {
            let class = match block_type.heading_level() {
                Some(1) => "font-bold text-4xl",
                Some(2) => "font-bold text-3xl",
                Some(3) => "font-bold text-2xl",
                _ => "font-bold text-xl",
            };
            vec![FormRow::Fields(vec![field(
                FieldKey::Content,
                InputKind::Line,
                format!(
                    "{} heading",
                    block_type.as_str().trim_end_matches(|c: char| c.is_ascii_digit())
                ),
                class,
                content,
            )])]
        }
        BlockProperties::Paragraph => vec![FormRow::Fields(vec![field(
            FieldKey::Content,
            InputKind::MultiLine,
            "Enter paragraph text",
            "text-neutral-700 leading-relaxed",
            content,
        )])],
        BlockProperties::Equation => equation_rows(content, ""),
        BlockProperties::EquationWithLabel { label } => equation_rows(content, label),
        BlockProperties::Quote { author } => vec![
            FormRow::Fields(vec![field(
                FieldKey::Content,
                InputKind::MultiLine,
                "Enter quote text",
                "italic",
                content,
            )]),
            FormRow::Fields(vec![field(
                FieldKey::Author,
                InputKind::Line,
                "Quote author",
                "text-sm text-neutral-500",
                author,
            )]),
        ],
        BlockProperties::Code { language } => vec![
            FormRow::Fields(vec![field(
                FieldKey::Language,
                InputKind::Line,
                "Programming language (e.g., javascript)",
                "text-sm",
                language,
            )]),
            FormRow::Fields(vec![field(
                FieldKey::Content,
                InputKind::Code,
                "Enter code",
                "font-mono min-h-[150px]",
                content,
            )]),
        ],
        BlockProperties::Image { alt } => {
            let mut rows = vec![
                FormRow::Fields(vec![field(
                    FieldKey::Content,
                    InputKind::Line,
                    "Image URL",
                    "",
                    content,
                )]),
                FormRow::Fields(vec![field(
                    FieldKey::Alt,
                    InputKind::MultiLine,
                    "Image description",
                    "",
                    alt,
                )]),
            ];
            if !content.is_empty() {
                rows.push(FormRow::Preview(display(block)));
            }
            rows
        }
        BlockProperties::Video { description } => {
            let mut rows = vec![
                FormRow::Fields(vec![field(
                    FieldKey::Content,
                    InputKind::Line,
                    "Video URL (YouTube, Vimeo, etc.)",
                    "",
                    content,
                )]),
                FormRow::Fields(vec![field(
                    FieldKey::Description,
                    InputKind::MultiLine,
                    "Video description",
                    "",
                    description,
                )]),
            ];
            if !content.is_empty() {
                rows.push(FormRow::Preview(display(block)));
            }
            rows
        }
        BlockProperties::OrderedList | BlockProperties::UnorderedList => vec![
            FormRow::Fields(vec![field(
                FieldKey::Content,
                InputKind::MultiLine,
                "Enter list items (one per line)",
                "min-h-[100px]",
                content,
            )]),
            FormRow::Preview(display(block)),
        ],
        BlockProperties::EquationSection {
            label,
            legend,
            description,
        } => {
            let mut rows = equation_rows(content, label);
            rows.push(FormRow::Caption("Legend:"));
            rows.push(FormRow::Legend(legend.clone()));
            rows.push(FormRow::Caption("Description:"));
            rows.push(FormRow::Fields(vec![field(
                FieldKey::Description,
                InputKind::MultiLine,
                "Enter equation description",
                "min-h-[100px]",
                description,
            )]));
            rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::{Emphasis, InlineNode};
    use crate::model::{LegendEdit, create_block};
    use rstest::rstest;
    use pretty_assertions::assert_eq;

    fn fields(view: &BlockView) -> Vec<&FieldSpec> {
        view.form
            .iter()
            .filter_map(|row| match row {
                FormRow::Fields(f) => Some(f),
                _ => None,
            })
            .flatten()
            .collect()
    }

    fn has_preview(view: &BlockView) -> bool {
        view.form.iter().any(|row| matches!(row, FormRow::Preview(_)))
    }

    #[test]
    fn paragraph_renders_inline_markup() {
        let block = create_block(BlockType::Paragraph).with_content("Hello **world**");
        let view = describe(&block);

        assert_eq!(
            view.display,
            Node::Element(
                Element::new(Tag::P)
                    .class("text-neutral-700 leading-relaxed mb-4")
                    .child(Node::Rich(vec![
                        InlineNode::text("Hello "),
                        InlineNode::styled(Emphasis::Bold, vec![InlineNode::text("world")]),
                    ]))
            )
        );
        assert_eq!(fields(&view)[0].placeholder, "Enter paragraph text");
    }

    #[test]
    fn heading_levels_pick_tag_and_placeholder() {
        let block = create_block(BlockType::Header4).with_content("Small");
        let view = describe(&block);

        let el = view.display.as_element().unwrap();
        assert_eq!(el.tag, Tag::H4);
        assert_eq!(el.get(AttrName::Class), Some("text-xl font-medium mb-2"));
        assert_eq!(fields(&view)[0].placeholder, "header heading");
        assert_eq!(fields(&view)[0].input, InputKind::Line);
    }

    #[test]
    fn quote_footer_only_with_author() {
        let bare = display(&create_block(BlockType::Quote).with_content("Think."));
        assert_eq!(bare.as_element().unwrap().children.len(), 1);

        let attributed = display(
            &create_block(BlockType::Quote)
                .with_content("Think.")
                .with_properties(&PropertyPatch::author("IBM")),
        );
        let footer = attributed.as_element().unwrap().children[1]
            .as_element()
            .unwrap()
            .clone();
        assert_eq!(footer.tag, Tag::Footer);
        assert_eq!(footer.children, vec![Node::Text("— IBM".to_string())]);
    }

    #[test]
    fn code_text_is_not_marked_up() {
        let block = create_block(BlockType::Code)
            .with_content("let x = **y**;")
            .with_properties(&PropertyPatch::language("rust"));
        let Node::Element(outer) = display(&block) else {
            panic!("expected element");
        };
        let code = outer.children[0].as_element().unwrap().children[0]
            .as_element()
            .unwrap();

        assert_eq!(code.get(AttrName::Class), Some("rust"));
        assert_eq!(
            code.children,
            vec![Node::Preformatted("let x = **y**;".to_string())]
        );
    }

    #[test]
    fn image_preview_is_gated_on_url() {
        let empty = describe(&create_block(BlockType::Image));
        assert!(!has_preview(&empty));

        let with_url =
            describe(&create_block(BlockType::Image).with_content("https://x/cat.png"));
        assert!(has_preview(&with_url));
    }

    #[test]
    fn image_caption_only_with_alt() {
        let bare = display(&create_block(BlockType::Image).with_content("u"));
        assert_eq!(bare.as_element().unwrap().children.len(), 1);

        let captioned = display(
            &create_block(BlockType::Image)
                .with_content("u")
                .with_properties(&PropertyPatch::alt("A *cat*")),
        );
        assert_eq!(captioned.as_element().unwrap().children.len(), 2);
    }

    #[test]
    fn video_is_normalised_and_gated() {
        assert!(!has_preview(&describe(&create_block(BlockType::Video))));

        let block = create_block(BlockType::Video).with_content("https://youtu.be/dQw4w9WgXcQ");
        let view = describe(&block);
        assert!(has_preview(&view));

        let frame = view.display.as_element().unwrap().children[0]
            .as_element()
            .unwrap();
        let iframe = frame.children[0].as_element().unwrap();
        assert_eq!(iframe.tag, Tag::Iframe);
        assert_eq!(
            iframe.get(AttrName::Src),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ")
        );
        assert!(iframe.has_flag(AttrName::AllowFullScreen));
    }

    #[rstest]
    #[case::image(
        create_block(BlockType::Image)
            .with_content("https://x/cat.png")
            .with_properties(&PropertyPatch::alt("A *cat*"))
    )]
    #[case::video(
        create_block(BlockType::Video)
            .with_content("https://youtu.be/dQw4w9WgXcQ")
            .with_properties(&PropertyPatch::description("Watch this"))
    )]
    #[case::ordered_list(create_block(BlockType::OrderedList).with_content("one\ntwo"))]
    #[case::unordered_list(create_block(BlockType::UnorderedList).with_content("a\n\nb"))]
    fn editor_preview_matches_display(#[case] block: ContentBlock) {
        let view = describe(&block);

        let previews: Vec<&Node> = view
            .form
            .iter()
            .filter_map(|row| match row {
                FormRow::Preview(node) => Some(node),
                _ => None,
            })
            .collect();

        assert_eq!(previews, vec![&view.display]);
    }

    #[test]
    fn list_keeps_empty_items() {
        let block = create_block(BlockType::UnorderedList).with_content("a\n\nb");
        let el = display(&block).as_element().unwrap().clone();

        assert_eq!(el.tag, Tag::Ul);
        assert_eq!(
            el.children
                .iter()
                .map(|li| li.as_element().unwrap().children.clone())
                .collect::<Vec<_>>(),
            vec![
                vec![Node::Text("a".to_string())],
                vec![Node::Text(String::new())],
                vec![Node::Text("b".to_string())],
            ]
        );
    }

    #[test]
    fn equation_section_optional_parts() {
        let bare = create_block(BlockType::EquationSection).with_content("E=mc^2");
        let column = |node: &Node| {
            node.as_element().unwrap().children[0].as_element().unwrap().children[0]
                .as_element()
                .unwrap()
                .children
                .len()
        };
        assert_eq!(column(&display(&bare)), 1);

        let full = bare
            .with_legend_edit(&LegendEdit::Add)
            .with_properties(&PropertyPatch::description("Energy *equals* mass"));
        assert_eq!(column(&display(&full)), 3);
    }

    #[test]
    fn equation_section_form_layout() {
        let view = describe(&create_block(BlockType::EquationSection));
        let captions: Vec<_> = view
            .form
            .iter()
            .filter_map(|row| match row {
                FormRow::Caption(c) => Some(*c),
                _ => None,
            })
            .collect();

        assert_eq!(captions, vec!["Legend:", "Description:"]);
        assert!(view.form.iter().any(|row| matches!(row, FormRow::Legend(_))));
        assert!(has_preview(&view));
    }

    #[test]
    fn field_keys_map_to_commands() {
        let id = BlockId::new();
        assert_eq!(
            FieldKey::Content.command(id, "x".to_string()),
            Cmd::UpdateContent {
                id,
                content: "x".to_string()
            }
        );
        assert_eq!(
            FieldKey::Alt.command(id, "y".to_string()),
            Cmd::UpdateProperties {
                id,
                patch: PropertyPatch::alt("y")
            }
        );
    }
}
