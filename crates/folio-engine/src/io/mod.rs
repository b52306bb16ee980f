use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::{ARTIFACT_EXTENSION, Artifact};

/// Extensions the posts directory is scanned for.
pub const POST_EXTENSIONS: [&str; 2] = [ARTIFACT_EXTENSION, "md"];

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid posts directory: {0}")]
    InvalidPostsDir(String),
}

/// Read a post file and return its content
pub fn read_file(relative_path: &RelativePath, posts_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(posts_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file under the posts directory, creating parents
pub fn write_file(
    relative_path: &RelativePath,
    posts_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(posts_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Write an artifact as `<ComponentName>.tsx` at the top of the posts
/// directory, replacing any file of the same name.
pub fn publish_artifact(artifact: &Artifact, posts_root: &Path) -> Result<PathBuf, IoError> {
    validate_posts_dir(posts_root)?;
    let relative_path = RelativePathBuf::from(artifact.file_name());
    write_file(&relative_path, posts_root, &artifact.source)?;
    let absolute_path = relative_path.to_path(posts_root);
    log::info!("Published {}", absolute_path.display());
    Ok(absolute_path)
}

/// Scan for `.tsx` and `.md` posts, as paths relative to the posts directory
pub fn scan_post_files(posts_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    scan(posts_root, &POST_EXTENSIONS)
}

/// Scan for published `.tsx` artifacts only
pub fn scan_artifacts(posts_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    scan(posts_root, &[ARTIFACT_EXTENSION])
}

fn scan(posts_root: &Path, extensions: &[&str]) -> Result<Vec<RelativePathBuf>, IoError> {
    if !posts_root.exists() {
        return Err(IoError::InvalidPostsDir(
            "posts directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(posts_root, extensions, &mut files)?;
    let mut relative: Vec<RelativePathBuf> = files
        .iter()
        .filter_map(|path| path.strip_prefix(posts_root).ok())
        .filter_map(|path| RelativePathBuf::from_path(path).ok())
        .collect();
    relative.sort();
    Ok(relative)
}

fn scan_directory_recursive(
    dir: &Path,
    extensions: &[&str],
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, extensions, files)?;
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str())
            && extensions.contains(&ext)
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_posts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidPostsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
