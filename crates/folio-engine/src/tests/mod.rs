use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary posts directory
pub fn create_test_posts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test post file with content
pub fn create_test_file(posts_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = posts_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
