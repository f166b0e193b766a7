use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
}

/// Read a file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files below `root`, returned relative to it and sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "content directory not found: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;

    let mut relative = files
        .iter()
        .filter_map(|path| path.strip_prefix(root).ok())
        .filter_map(|path| RelativePathBuf::from_path(path).ok())
        .collect::<Vec<_>>();
    relative.sort();
    Ok(relative)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Copy every file below `source` into `destination`, recreating directories.
/// Returns the number of files copied.
pub fn copy_dir_recursive(source: &Path, destination: &Path) -> Result<usize, IoError> {
    fs::create_dir_all(destination).map_err(IoError::Io)?;

    let mut copied = 0;
    for entry in fs::read_dir(source).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let from = entry.path();
        let to = destination.join(entry.file_name());

        if from.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            log::debug!("copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(IoError::Io)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Remove `path` if it exists and recreate it empty
pub fn reset_dir(path: &Path) -> Result<(), IoError> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(IoError::Io)?;
    }
    fs::create_dir_all(path).map_err(IoError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_site_dir};

    #[test]
    fn test_scan_finds_markdown_files() {
        let site_dir = create_test_site_dir();
        create_test_file(&site_dir, "index.md", "# Home");
        create_test_file(&site_dir, "about.md", "# About");

        let files = scan_markdown_files(site_dir.path()).unwrap();

        assert_eq!(
            files,
            vec![
                RelativePathBuf::from("about.md"),
                RelativePathBuf::from("index.md")
            ]
        );
    }

    #[test]
    fn test_scan_nested_directories() {
        let site_dir = create_test_site_dir();
        create_test_file(&site_dir, "index.md", "# Root file");
        create_test_file(&site_dir, "blog/first/index.md", "# Nested file");

        let files = scan_markdown_files(site_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.contains(&RelativePathBuf::from("blog/first/index.md")));
    }

    #[test]
    fn test_scan_ignores_non_markdown_files() {
        let site_dir = create_test_site_dir();
        create_test_file(&site_dir, "document.md", "# Markdown");
        create_test_file(&site_dir, "image.png", "fake image data");
        create_test_file(&site_dir, "notes.md.bak", "old");

        let files = scan_markdown_files(site_dir.path()).unwrap();

        assert_eq!(files, vec![RelativePathBuf::from("document.md")]);
    }

    #[test]
    fn test_scan_invalid_directory() {
        let result = scan_markdown_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidDirectory(_))));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("content directory")
        );
    }

    #[test]
    fn test_read_file_not_found() {
        let site_dir = create_test_site_dir();
        let result = read_file(&site_dir.path().join("missing.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let site_dir = create_test_site_dir();
        let path = site_dir.path().join("folder/subfolder/page.html");

        write_file(&path, "<p>hi</p>").unwrap();

        assert_eq!(read_file(&path).unwrap(), "<p>hi</p>");
        assert!(site_dir.path().join("folder/subfolder").is_dir());
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let site_dir = create_test_site_dir();
        let path = create_test_file(&site_dir, "page.html", "old");

        write_file(&path, "new").unwrap();

        assert_eq!(read_file(&path).unwrap(), "new");
    }

    #[test]
    fn test_copy_dir_recursive() {
        let source = create_test_site_dir();
        create_test_file(&source, "index.css", "body {}");
        create_test_file(&source, "images/logo.png", "png");
        let destination = create_test_site_dir();

        let copied = copy_dir_recursive(source.path(), destination.path()).unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            read_file(&destination.path().join("images/logo.png")).unwrap(),
            "png"
        );
    }

    #[test]
    fn test_reset_dir_removes_contents() {
        let site_dir = create_test_site_dir();
        create_test_file(&site_dir, "public/stale.html", "stale");
        let public = site_dir.path().join("public");

        reset_dir(&public).unwrap();

        assert!(public.is_dir());
        assert_eq!(fs::read_dir(&public).unwrap().count(), 0);
    }
}
