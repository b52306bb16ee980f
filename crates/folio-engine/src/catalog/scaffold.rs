use super::CatalogError;
use super::frontmatter::{FENCE, Frontmatter};

/// URL slug for a title: lowercase, runs of anything outside `[a-z0-9]`
/// collapsed to one `-`, no leading or trailing `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// A new markdown post, ready to be written as `<slug>.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedPost {
    pub slug: String,
    pub contents: String,
}

impl ScaffoldedPost {
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }
}

/// Frontmatter plus a heading and a placeholder line.
pub fn scaffold_markdown_post(
    title: &str,
    category: &str,
    tags: &[String],
    summary: &str,
    date: &str,
) -> Result<ScaffoldedPost, CatalogError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(CatalogError::EmptySlug(title.to_string()));
    }
    let frontmatter = Frontmatter {
        title: title.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        tags: tags.to_vec(),
        summary: summary.to_string(),
        description: String::new(),
    }
    .to_yaml()?;
    let contents =
        format!("{FENCE}{frontmatter}{FENCE}\n# {title}\n\nWrite your post content here...\n");
    Ok(ScaffoldedPost { slug, contents })
}
