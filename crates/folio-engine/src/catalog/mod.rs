/*!
# Post Catalog

Everything the blog listing needs from a posts directory: one
[`PostSummary`] per published `.tsx` artifact or `.md` post, plus sorting,
filtering and scaffolding of new markdown posts.

Artifacts go through the metadata importer, so a component's summary is its
description and it has no body. Markdown posts carry `---` frontmatter and a
markdown body.
*/

pub mod frontmatter;
pub mod markdown;
pub mod scaffold;
pub mod sort;

use relative_path::{RelativePath, RelativePathBuf};
use std::path::Path;

use crate::import::{ImportError, extract_metadata};
use crate::io::{self, IoError};

pub use frontmatter::Frontmatter;
pub use scaffold::{ScaffoldedPost, scaffold_markdown_post, slugify};
pub use sort::{SortOption, categories, filter_posts, parse_date, sort_posts};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unsupported post file: {0}")]
    UnsupportedFile(String),
    #[error("Invalid frontmatter in {0}")]
    InvalidFrontmatter(String),
    #[error("Cannot derive a slug from {0:?}")]
    EmptySlug(String),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Frontmatter is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    /// A published `.tsx` page component.
    Component,
    /// A `.md` post with frontmatter.
    Markdown,
}

impl PostKind {
    pub fn from_path(path: &RelativePath) -> Option<Self> {
        match path.extension() {
            Some("tsx") => Some(PostKind::Component),
            Some("md") => Some(PostKind::Markdown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub slug: String,
    pub relative_path: RelativePathBuf,
    pub kind: PostKind,
    pub title: String,
    pub date: String,
    pub category: String,
    pub tags: Vec<String>,
    pub summary: String,
    /// Markdown body; components have none.
    pub body: Option<String>,
}

impl PostSummary {
    pub fn body_html(&self) -> Option<String> {
        self.body.as_deref().map(markdown::to_html)
    }

    pub fn body_lines(&self) -> Vec<String> {
        self.body
            .as_deref()
            .map(markdown::to_plain_lines)
            .unwrap_or_default()
    }
}

/// Summarize one post from its path (relative to the posts directory) and text.
pub fn load_post(relative_path: &RelativePath, text: &str) -> Result<PostSummary, CatalogError> {
    let kind = PostKind::from_path(relative_path)
        .ok_or_else(|| CatalogError::UnsupportedFile(relative_path.to_string()))?;
    let slug = relative_path
        .file_stem()
        .unwrap_or_default()
        .to_string();

    match kind {
        PostKind::Component => {
            let metadata = extract_metadata(text)?;
            Ok(PostSummary {
                slug,
                relative_path: relative_path.to_owned(),
                kind,
                title: metadata.title,
                date: metadata.date,
                category: metadata.category,
                tags: metadata.tags,
                summary: metadata.description,
                body: None,
            })
        }
        PostKind::Markdown => {
            let (raw, body) = frontmatter::split(text)
                .ok_or_else(|| CatalogError::InvalidFrontmatter(relative_path.to_string()))?;
            let fields = Frontmatter::from_yaml(raw)?;
            let summary = fields.summary_or_description().to_string();
            Ok(PostSummary {
                slug,
                relative_path: relative_path.to_owned(),
                kind,
                title: fields.title,
                date: fields.date,
                category: fields.category,
                tags: fields.tags,
                summary,
                body: Some(body.to_string()),
            })
        }
    }
}

/// Load every post under `posts_root`, newest first.
///
/// A file that cannot be read or summarized is logged and skipped.
pub fn load_catalog(posts_root: &Path) -> Result<Vec<PostSummary>, CatalogError> {
    let files = io::scan_post_files(posts_root)?;
    let mut posts = Vec::with_capacity(files.len());

    for relative_path in files {
        let loaded = io::read_file(&relative_path, posts_root)
            .map_err(CatalogError::from)
            .and_then(|text| load_post(&relative_path, &text));
        match loaded {
            Ok(post) => posts.push(post),
            Err(e) => log::warn!("Skipping {relative_path}: {e}"),
        }
    }

    log::info!("Loaded {} posts from {}", posts.len(), posts_root.display());
    Ok(sort_posts(&posts, SortOption::DateDesc))
}
