//! Directory tree walker
//!
//! Produces the box-drawing listing of a directory as a list of
//! [`TreeEntry`] values. The walk is depth first, sorted by name, and
//! follows symlinked directories without cycle detection.

use crate::config::TreeConfig;
use crate::domain::{Connector, FileInfo, InfoError, TreeEntry};
use crate::services::text::count_lines;

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Walks a directory tree using a [`TreeConfig`] for filtering
pub struct TreeWalker<'a> {
    config: &'a TreeConfig,
}

impl<'a> TreeWalker<'a> {
    /// Create a new walker
    pub fn new(config: &'a TreeConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return every entry in display order
    ///
    /// Failing to list any directory aborts the walk. Failing to inspect a
    /// single file only marks that entry as unreadable.
    pub fn walk(&self, root: &Path) -> io::Result<Vec<TreeEntry>> {
        self.walk_dir(root, "")
    }

    fn walk_dir(&self, dir: &Path, prefix: &str) -> io::Result<Vec<TreeEntry>> {
        let children = self.list_dir(dir)?;
        let count = children.len();
        let mut entries = Vec::with_capacity(count);

        for (index, (name, path)) in children.into_iter().enumerate() {
            let connector = Connector::for_position(index, count);

            if path.is_dir() {
                entries.push(TreeEntry::directory(prefix, connector, name));
                let child_prefix = format!("{}{}", prefix, connector.child_indent());
                entries.extend(self.walk_dir(&path, &child_prefix)?);
            } else {
                let info = file_info(&path, self.config.is_source(&name));
                entries.push(TreeEntry::file(prefix, connector, name, info));
            }
        }

        Ok(entries)
    }

    /// Surviving children of `dir`, sorted by name
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
        let mut children = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if self.config.is_skipped(&name) {
                log::debug!("Skipping {}", entry.path().display());
                continue;
            }

            children.push((name, entry.path()));
        }

        children.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(children)
    }
}

/// Compute the info suffix for a file
///
/// Source files get a line count, everything else a size in KB. Failures
/// are captured in [`FileInfo::Unreadable`] instead of being returned.
pub fn file_info(path: &Path, is_source: bool) -> FileInfo {
    let result = if is_source {
        File::open(path)
            .and_then(count_lines)
            .map(FileInfo::Lines)
            .map_err(|e| InfoError::Read(e.kind()))
    } else {
        fs::metadata(path)
            .map(|m| FileInfo::from_bytes(m.len()))
            .map_err(|e| InfoError::Metadata(e.kind()))
    };

    result.unwrap_or_else(|err| {
        log::debug!("Cannot inspect {}: {}", path.display(), err);
        FileInfo::Unreadable(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn render(entries: &[TreeEntry]) -> Vec<String> {
        entries.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_file_info_kinds() {
        let dir = TempDir::new().unwrap();
        let py = dir.path().join("app.py");
        let bin = dir.path().join("blob.bin");
        fs::write(&py, "import os\nprint(os.getcwd())\n").unwrap();
        fs::write(&bin, vec![0u8; 3000]).unwrap();

        assert_eq!(file_info(&py, true), FileInfo::Lines(2));
        assert_eq!(file_info(&bin, false), FileInfo::Kilobytes(2));
    }

    #[test]
    fn test_file_info_counts_classic_mac_line_endings() {
        let dir = TempDir::new().unwrap();
        let py = dir.path().join("legacy.py");
        fs::write(&py, "a = 1\rb = 2\rc = 3\r").unwrap();

        assert_eq!(file_info(&py, true), FileInfo::Lines(3));
    }

    #[test]
    fn test_file_info_missing_file() {
        let missing = Path::new("/nonexistent/devutils/gone.py");
        assert_eq!(
            file_info(missing, true),
            FileInfo::Unreadable(InfoError::Read(io::ErrorKind::NotFound))
        );
        assert_eq!(
            file_info(missing, false),
            FileInfo::Unreadable(InfoError::Metadata(io::ErrorKind::NotFound))
        );
    }

    #[test]
    fn test_flat_directory_sorted() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        fs::write(dir.path().join("c.log"), "skipped").unwrap();

        let config = TreeConfig::default();
        let entries = TreeWalker::new(&config).walk(dir.path()).unwrap();
        assert_eq!(
            render(&entries),
            vec!["├── a.txt (0 KB)", "└── b.py (1 lines)"]
        );
    }

    #[test]
    fn test_nested_prefixes() {
        let dir = TempDir::new().unwrap();
        let app = dir.path().join("app");
        fs::create_dir_all(app.join("models")).unwrap();
        fs::write(app.join("__init__.py"), "").unwrap();
        fs::write(app.join("models").join("user.py"), "a\nb\nc\n").unwrap();
        fs::write(dir.path().join("main.py"), "run()\n").unwrap();

        let config = TreeConfig::default();
        let entries = TreeWalker::new(&config).walk(dir.path()).unwrap();
        assert_eq!(
            render(&entries),
            vec![
                "├── app/",
                "│   ├── __init__.py (0 lines)",
                "│   └── models/",
                "│       └── user.py (3 lines)",
                "└── main.py (1 lines)",
            ]
        );
    }

    #[test]
    fn test_skipped_directory_not_visited() {
        let dir = TempDir::new().unwrap();
        let git = dir.path().join(".git");
        fs::create_dir(&git).unwrap();
        fs::write(git.join("HEAD"), "ref: refs/heads/main\n").unwrap();
        fs::write(dir.path().join("setup.py"), "").unwrap();

        let config = TreeConfig::default();
        let entries = TreeWalker::new(&config).walk(dir.path()).unwrap();
        assert_eq!(render(&entries), vec!["└── setup.py (0 lines)"]);
    }

    #[test]
    fn test_custom_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        fs::write(dir.path().join("lib.rs"), "fn a() {}\nfn b() {}\n").unwrap();

        let config = TreeConfig {
            skip_dirs: ["target".to_string()].into_iter().collect(),
            source_ext: ".rs".to_string(),
            ..TreeConfig::default()
        };
        let entries = TreeWalker::new(&config).walk(dir.path()).unwrap();
        assert_eq!(render(&entries), vec!["└── lib.rs (2 lines)"]);
    }

    #[test]
    fn test_missing_root_is_error() {
        let config = TreeConfig::default();
        let result = TreeWalker::new(&config).walk(Path::new("/nonexistent/devutils/root"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_marked_unreadable() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("broken.py"))
            .unwrap();
        fs::write(dir.path().join("ok.txt"), "fine").unwrap();

        let config = TreeConfig::default();
        let entries = TreeWalker::new(&config).walk(dir.path()).unwrap();
        assert_eq!(
            render(&entries),
            vec!["├── broken.py (error reading file)", "└── ok.txt (0 KB)"]
        );
        assert!(entries[0].info().is_some_and(|i| i.is_error()));
    }
}
