use anyhow::Result;
use folio_engine::catalog::scaffold_markdown_post;
use folio_engine::io;
use relative_path::RelativePathBuf;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Answers to the `new` prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetails {
    pub title: String,
    pub category: String,
    pub tags: Vec<String>,
    pub summary: String,
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    write!(output, "{question} ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Comma-separated tags, trimmed, blanks dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn ask_details(input: &mut impl BufRead, output: &mut impl Write) -> Result<PostDetails> {
    let title = prompt(input, output, "Post title:")?;
    let category = prompt(input, output, "Category:")?;
    let tags = parse_tags(&prompt(input, output, "Tags (comma-separated):")?);
    let summary = prompt(input, output, "Summary:")?;
    Ok(PostDetails {
        title,
        category,
        tags,
        summary,
    })
}

/// Write `<slug>.md` into the posts directory, replacing a same-named post.
pub fn create_post(details: &PostDetails, posts_path: &Path, date: &str) -> Result<PathBuf> {
    let post = scaffold_markdown_post(
        &details.title,
        &details.category,
        &details.tags,
        &details.summary,
        date,
    )?;
    let relative_path = RelativePathBuf::from(post.file_name());
    io::write_file(&relative_path, posts_path, &post.contents)?;
    Ok(relative_path.to_path(posts_path))
}
