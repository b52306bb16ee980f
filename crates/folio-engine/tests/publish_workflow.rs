use folio_engine::catalog::{PostKind, load_catalog, scaffold_markdown_post};
use folio_engine::editing::{Cmd, EditorSession};
use folio_engine::model::{BlockType, Document, DocumentMetadata, PropertyPatch};
use folio_engine::{export_document, import_document, io};
use pretty_assertions::assert_eq;
use relative_path::RelativePath;

fn awkward_metadata() -> DocumentMetadata {
    DocumentMetadata {
        title: r#"Tom & Jerry's "Big" <Day>"#.to_string(),
        description: "Cats, mice & \"chaos\"".to_string(),
        category: "Cartoons".to_string(),
        date: "2024-06-01".to_string(),
        tags: vec![
            "classic".to_string(),
            "two words".to_string(),
            "say \"hi\"".to_string(),
        ],
    }
}

#[test]
fn metadata_survives_export_then_import() {
    // Given a document with awkward metadata and no blocks
    let document = Document::new(awkward_metadata());

    // When it is exported and immediately imported
    let artifact = export_document(&document).unwrap();
    let imported = import_document(&artifact.source).unwrap();

    // Then the metadata comes back unchanged
    assert_eq!(artifact.component_name, "TomJerrysBigDay");
    assert_eq!(imported.metadata, document.metadata);
    assert!(imported.blocks.is_empty());
}

#[test]
fn edited_post_publishes_and_reloads_without_blocks() {
    // Given a session where a post was written block by block
    let mut session = EditorSession::new();
    session.apply(Cmd::ReplaceMetadata(awkward_metadata()));
    let heading = session
        .apply(Cmd::AddBlock {
            block_type: BlockType::Header1,
        })
        .changed
        .unwrap();
    session.apply(Cmd::UpdateContent {
        id: heading,
        content: "Opening".to_string(),
    });
    let quote = session
        .apply(Cmd::AddBlock {
            block_type: BlockType::Quote,
        })
        .changed
        .unwrap();
    session.apply(Cmd::UpdateProperties {
        id: quote,
        patch: PropertyPatch::author("Tom"),
    });

    // When it is published into a posts directory
    let posts_dir = tempfile::tempdir().unwrap();
    let artifact = export_document(session.document()).unwrap();
    io::publish_artifact(&artifact, posts_dir.path()).unwrap();

    // Then reading it back restores the metadata only
    let text = io::read_file(RelativePath::new("TomJerrysBigDay.tsx"), posts_dir.path()).unwrap();
    assert!(text.contains("<h1 className=\"text-4xl font-bold mb-4\">Opening</h1>"));
    let imported = import_document(&text).unwrap();
    assert_eq!(imported.metadata, session.document().metadata);
    assert!(imported.blocks.is_empty());
}

#[test]
fn catalog_lists_published_and_scaffolded_posts() {
    // Given one published component and one scaffolded markdown post
    let posts_dir = tempfile::tempdir().unwrap();
    let artifact = export_document(&Document::new(awkward_metadata())).unwrap();
    io::publish_artifact(&artifact, posts_dir.path()).unwrap();

    let scaffolded = scaffold_markdown_post(
        "Older Notes",
        "Journal",
        &["misc".to_string()],
        "Something from before",
        "2023-01-05",
    )
    .unwrap();
    io::write_file(
        RelativePath::new(&scaffolded.file_name()),
        posts_dir.path(),
        &scaffolded.contents,
    )
    .unwrap();

    // When the catalog is loaded
    let posts = load_catalog(posts_dir.path()).unwrap();

    // Then both appear, newest first, with their own kinds
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].kind, PostKind::Component);
    assert_eq!(posts[0].title, r#"Tom & Jerry's "Big" <Day>"#);
    assert_eq!(posts[0].summary, "Cats, mice & \"chaos\"");
    assert_eq!(posts[1].kind, PostKind::Markdown);
    assert_eq!(posts[1].slug, "older-notes");
    assert_eq!(posts[1].tags, vec!["misc"]);
    assert_eq!(
        posts[1].body_lines(),
        vec!["# Older Notes", "", "Write your post content here..."]
    );
}
