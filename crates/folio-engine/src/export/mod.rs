//! Document serializer: one post in, one self-contained React page component out.

use crate::model::{Document, DocumentMetadata};
use crate::render::{display, jsx::to_jsx};

/// Artifact file extension.
pub const ARTIFACT_EXTENSION: &str = "tsx";

/// Column the block fragments start at inside the template.
const BLOCK_INDENT: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Please add a title before publishing")]
    EmptyTitle,
    #[error("Could not generate a valid component name from title")]
    InvalidComponentName,
    #[error("Could not serialize tags: {0}")]
    Tags(#[from] serde_json::Error),
}

/// A serialized post ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub component_name: String,
    pub source: String,
}

impl Artifact {
    pub fn file_name(&self) -> String {
        format!("{}.{ARTIFACT_EXTENSION}", self.component_name)
    }
}

/// Derive a PascalCase component name from a post title.
///
/// Characters other than ASCII letters, digits and whitespace are dropped,
/// each word gets an upper-cased first letter, and the rest of each word
/// keeps its casing. A result that is empty or starts with a digit cannot be
/// a component name and is rejected.
pub fn component_name(title: &str) -> Result<String, ExportError> {
    if title.is_empty() {
        return Err(ExportError::EmptyTitle);
    }

    let cleaned: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    let name: String = cleaned
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    match name.chars().next() {
        Some(first) if !first.is_ascii_digit() => Ok(name),
        _ => Err(ExportError::InvalidComponentName),
    }
}

/// Serialize `document` into its artifact.
///
/// Fails without producing anything when no component name can be derived.
pub fn export_document(document: &Document) -> Result<Artifact, ExportError> {
    let component_name = component_name(&document.metadata.title)?;
    let blocks = document
        .blocks
        .iter()
        .map(|block| to_jsx(&display(block), BLOCK_INDENT))
        .collect::<Vec<_>>()
        .join(&format!("\n{}", " ".repeat(BLOCK_INDENT)));

    let source = render_template(&component_name, &document.metadata, &blocks)?;
    log::debug!(
        "exported {component_name} with {} blocks",
        document.blocks.len()
    );
    Ok(Artifact {
        component_name,
        source,
    })
}

fn attr(value: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

fn render_template(
    component_name: &str,
    metadata: &DocumentMetadata,
    blocks: &str,
) -> Result<String, ExportError> {
    let tags = serde_json::to_string(&metadata.tags)?;
    Ok(format!(
        r#"import React from 'react';
import {{ useNavigate }} from 'react-router-dom';
import {{ PageLayout }} from '@/components/layout/PageLayout';
import {{ Math }} from '@/components/Math';

export default function {component_name}() {{
  const navigate = useNavigate();

  return (
    <PageLayout
      title="{title}"
      description="{description}"
      subtitle="Back to Blog"
      badge="{category}"
      date="{date}"
      tags={{{tags}}}
      onBack={{() => navigate('/blog')}}
    >
      <article className="prose prose-lg mx-auto">
        <div className="mt-8">
          {blocks}
        </div>
      </article>
    </PageLayout>
  );
}}"#,
        title = attr(&metadata.title),
        description = attr(&metadata.description),
        category = attr(&metadata.category),
        date = attr(&metadata.date),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockType, PropertyPatch};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn metadata(title: &str) -> DocumentMetadata {
        DocumentMetadata {
            title: title.to_string(),
            description: "A short tour".to_string(),
            category: "Physics".to_string(),
            date: "2024-03-14".to_string(),
            tags: vec!["relativity".to_string(), "energy".to_string()],
        }
    }

    #[rstest]
    #[case("My First Post!", "MyFirstPost")]
    #[case("hello   world", "HelloWorld")]
    #[case("iPhone tips", "IPhoneTips")]
    #[case("E = mc^2 explained", "EMc2Explained")]
    #[case("  leading space", "LeadingSpace")]
    fn component_names(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(component_name(title).unwrap(), expected);
    }

    #[rstest]
    #[case("???")]
    #[case("   ")]
    #[case("2024 in review")]
    fn invalid_component_names(#[case] title: &str) {
        assert!(matches!(
            component_name(title),
            Err(ExportError::InvalidComponentName)
        ));
    }

    #[test]
    fn empty_title_is_its_own_error() {
        let err = component_name("").unwrap_err();
        assert_eq!(err.to_string(), "Please add a title before publishing");
    }

    #[test]
    fn export_refuses_unnameable_title() {
        let document = Document::new(metadata("???"));
        assert!(export_document(&document).is_err());
    }

    #[test]
    fn empty_document_artifact() {
        let document = Document::new(metadata("My First Post!"));
        let artifact = export_document(&document).unwrap();

        assert_eq!(artifact.file_name(), "MyFirstPost.tsx");
        let source = &artifact.source;
        assert!(source.starts_with("import React from 'react';\n"));
        assert!(source.contains("export default function MyFirstPost() {"));
        assert!(source.contains("      title=\"My First Post!\"\n"));
        assert!(source.contains("      badge=\"Physics\"\n"));
        assert!(source.contains("      date=\"2024-03-14\"\n"));
        assert!(source.contains("      tags={[\"relativity\",\"energy\"]}\n"));
        assert!(source.contains("      onBack={() => navigate('/blog')}\n"));
        assert!(source.ends_with("  );\n}"));
    }

    #[test]
    fn blocks_are_joined_at_template_indent() {
        let mut document = Document::new(metadata("Blocks"));
        let heading = document.push_block(BlockType::Header1);
        let quote = document.push_block(BlockType::Quote);
        for block in &mut document.blocks {
            if block.id == heading {
                *block = block.with_content("Intro");
            } else if block.id == quote {
                *block = block
                    .with_content("Stay hungry")
                    .with_properties(&PropertyPatch::author("Jobs"));
            }
        }

        let artifact = export_document(&document).unwrap();
        assert!(artifact.source.contains(
            "        <div className=\"mt-8\">\n          <h1 className=\"text-4xl font-bold mb-4\">Intro</h1>\n          <blockquote className=\"border-l-4 border-[rgb(43,154,154)] pl-4 my-8\">\n            <p className=\"text-xl italic text-neutral-600\">Stay hungry</p>\n            <footer className=\"text-sm text-neutral-500 mt-2\">— Jobs</footer>\n          </blockquote>\n        </div>"
        ));
    }

    #[test]
    fn quotes_in_metadata_are_escaped() {
        let document = Document::new(metadata(r#"Say "hi""#));
        let artifact = export_document(&document).unwrap();
        assert!(artifact.source.contains(r#"title="Say &quot;hi&quot;""#));
        assert_eq!(artifact.component_name, "SayHi");
    }
}
