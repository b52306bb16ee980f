//! Metadata importer for previously published artifacts.
//!
//! Only the page metadata comes back. Block content is not reconstructed, so
//! an imported document always starts with an empty block list.

use std::collections::HashMap;

use crate::inline::cursor::Cursor;
use crate::model::{Document, DocumentMetadata};

/// Marker every artifact carries.
const PAGE_LAYOUT_MARKER: &str = "<PageLayout";

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Not a blog component: no <PageLayout> found")]
    NotAComponent,
    #[error("Malformed tags literal: {0}")]
    MalformedTags(#[source] serde_json::Error),
}

/// Raw value of one JSX attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RawValue<'a> {
    /// `name="..."`, still entity-escaped.
    Quoted(&'a str),
    /// `name={...}`, without the braces.
    Expression(&'a str),
    /// Bare `name`.
    Flag,
}

/// Which string attribute feeds which metadata field.
#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Description,
    Category,
    Date,
}

impl Field {
    const ALL: [Field; 4] = [Field::Title, Field::Description, Field::Category, Field::Date];

    fn attribute(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Category => "badge",
            Field::Date => "date",
        }
    }

    fn slot(self, metadata: &mut DocumentMetadata) -> &mut String {
        match self {
            Field::Title => &mut metadata.title,
            Field::Description => &mut metadata.description,
            Field::Category => &mut metadata.category,
            Field::Date => &mut metadata.date,
        }
    }
}

/// Whether `text` looks like a published artifact.
pub fn is_artifact(text: &str) -> bool {
    text.contains(PAGE_LAYOUT_MARKER)
}

/// Attributes of the first `<PageLayout` opening tag. The first occurrence
/// of a name wins; quoted values and braced expressions are consumed whole,
/// so attribute-like text inside a value is never read as an attribute.
fn page_layout_attributes(text: &str) -> Option<HashMap<&str, RawValue<'_>>> {
    let start = text.find(PAGE_LAYOUT_MARKER)? + PAGE_LAYOUT_MARKER.len();
    let mut cur = Cursor::new(&text[start..]);
    let mut attrs = HashMap::new();

    loop {
        while cur.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            cur.bump();
        }
        match cur.peek() {
            None | Some(b'>') | Some(b'/') => break,
            _ => {}
        }

        let name_start = cur.pos();
        while cur
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            cur.bump();
        }
        let name = cur.slice_from(name_start);
        if name.is_empty() {
            cur.bump();
            continue;
        }

        let value = if cur.peek() == Some(b'=') {
            cur.bump();
            match cur.peek() {
                Some(b'"') => {
                    cur.bump();
                    let value_start = cur.pos();
                    if !cur.seek(b'"') {
                        break;
                    }
                    let value = cur.slice_from(value_start);
                    cur.bump();
                    RawValue::Quoted(value)
                }
                Some(b'{') => match braced_expression(&mut cur) {
                    Some(expr) => RawValue::Expression(expr),
                    None => break,
                },
                _ => continue,
            }
        } else {
            RawValue::Flag
        };
        attrs.entry(name).or_insert(value);
    }

    Some(attrs)
}

/// Consume `{...}` under the cursor and return its inside. Braces inside
/// string literals do not count. `None` when the expression never closes.
fn braced_expression<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let source = cur.s;
    cur.bump();
    let start = cur.pos();
    let mut depth = 1usize;
    while let Some(b) = cur.bump() {
        match b {
            b'"' | b'\'' | b'`' => skip_string(cur, b),
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&source[start..cur.pos() - 1]);
                }
            }
            _ => {}
        }
    }
    None
}

fn skip_string(cur: &mut Cursor<'_>, quote: u8) {
    while let Some(b) = cur.bump() {
        if b == b'\\' {
            cur.bump();
        } else if b == quote {
            return;
        }
    }
}

/// Pull title, description, category, date and tags out of an artifact.
///
/// Only the `<PageLayout>` opening tag is read. A missing attribute leaves its
/// field empty rather than failing the import.
pub fn extract_metadata(text: &str) -> Result<DocumentMetadata, ImportError> {
    let attrs = page_layout_attributes(text).ok_or(ImportError::NotAComponent)?;

    let mut metadata = DocumentMetadata::empty();
    for field in Field::ALL {
        match attrs.get(field.attribute()) {
            Some(RawValue::Quoted(value)) => {
                *field.slot(&mut metadata) = html_escape::decode_html_entities(value).into_owned();
            }
            _ => log::debug!("import: no {field:?} attribute"),
        }
    }

    metadata.tags = match attrs.get("tags") {
        Some(RawValue::Expression(literal)) => parse_tags(literal.trim())?,
        _ => {
            log::debug!("import: no tags attribute");
            Vec::new()
        }
    };

    Ok(metadata)
}

/// Parse a tags array literal. Single-quoted JS strings are accepted too.
fn parse_tags(literal: &str) -> Result<Vec<String>, ImportError> {
    serde_json::from_str(literal).or_else(|_| {
        serde_json::from_str(&literal.replace('\'', "\"")).map_err(ImportError::MalformedTags)
    })
}

/// Import an artifact as a fresh document with no blocks.
pub fn import_document(text: &str) -> Result<Document, ImportError> {
    extract_metadata(text).map(Document::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::export_document;
    use pretty_assertions::assert_eq;

    const HAND_WRITTEN: &str = r#"
export default function Relativity() {
  return (
    <PageLayout
      title="Relativity"
      description="Why clocks disagree"
      subtitle="Back to Blog"
      badge="Physics"
      date="2024-03-14"
      tags={['time', 'space']}
    >
    </PageLayout>
  );
}"#;

    #[test]
    fn extracts_all_fields() {
        let metadata = extract_metadata(HAND_WRITTEN).unwrap();
        assert_eq!(
            metadata,
            DocumentMetadata {
                title: "Relativity".to_string(),
                description: "Why clocks disagree".to_string(),
                category: "Physics".to_string(),
                date: "2024-03-14".to_string(),
                tags: vec!["time".to_string(), "space".to_string()],
            }
        );
    }

    #[test]
    fn subtitle_is_not_mistaken_for_title() {
        let text = r#"<PageLayout subtitle="Back to Blog" title="Real""#;
        assert_eq!(extract_metadata(text).unwrap().title, "Real");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let metadata = extract_metadata("<PageLayout title=\"Only\" />").unwrap();
        assert_eq!(metadata.title, "Only");
        assert_eq!(metadata.description, "");
        assert_eq!(metadata.date, "");
        assert!(metadata.tags.is_empty());
    }

    #[test]
    fn rejects_non_artifacts() {
        assert!(matches!(
            extract_metadata("# just markdown"),
            Err(ImportError::NotAComponent)
        ));
    }

    #[test]
    fn rejects_malformed_tags() {
        let text = "<PageLayout tags={[oops]} />";
        assert!(matches!(
            extract_metadata(text),
            Err(ImportError::MalformedTags(_))
        ));
    }

    #[test]
    fn tag_containing_apostrophe_survives() {
        let text = r#"<PageLayout tags={["Newton's laws"]} />"#;
        assert_eq!(extract_metadata(text).unwrap().tags, vec!["Newton's laws"]);
    }

    #[test]
    fn tag_containing_bracket_round_trips() {
        let document = Document::new(DocumentMetadata {
            title: "Brackets".to_string(),
            tags: vec!["arr[]".to_string(), "{braces}".to_string()],
            ..DocumentMetadata::empty()
        });
        let artifact = export_document(&document).unwrap();

        let metadata = extract_metadata(&artifact.source).unwrap();

        assert_eq!(metadata.tags, vec!["arr[]", "{braces}"]);
    }

    #[test]
    fn attribute_text_inside_a_value_is_not_an_attribute() {
        let document = Document::new(DocumentMetadata {
            title: "About tags={['x']} in JSX".to_string(),
            description: "date=\"1999\" badge=\"Fake\"".to_string(),
            category: "Real".to_string(),
            tags: vec!["real".to_string()],
            ..DocumentMetadata::empty()
        });
        let artifact = export_document(&document).unwrap();

        let metadata = extract_metadata(&artifact.source).unwrap();

        assert_eq!(metadata, document.metadata);
    }

    #[test]
    fn attributes_after_the_opening_tag_are_ignored() {
        let text = r#"<PageLayout title="Inside">
  <Card title="Outside" tags={["nope"]} />
</PageLayout>"#;
        let metadata = extract_metadata(text).unwrap();
        assert_eq!(metadata.title, "Inside");
        assert!(metadata.tags.is_empty());
    }

    #[test]
    fn import_never_restores_blocks() {
        let mut document = Document::new(DocumentMetadata {
            title: "With Blocks".to_string(),
            ..DocumentMetadata::empty()
        });
        document.push_block(crate::model::BlockType::Paragraph);
        let artifact = export_document(&document).unwrap();

        let imported = import_document(&artifact.source).unwrap();
        assert_eq!(imported.metadata.title, "With Blocks");
        assert!(imported.blocks.is_empty());
    }
}
