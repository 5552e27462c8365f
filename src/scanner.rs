use crate::classifier;
use crate::models::{Config, DirectoryListing, FileEntry, ScanReport};
use anyhow::{Result, bail};
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Walk a directory tree and collect every target file, grouped by directory.
///
/// Excluded directory names are pruned before descending; excluded filenames
/// are skipped before they count toward the scanned total. Counts come out of
/// the same pass that builds the listings.
pub fn scan_directory(path: &Path, config: &Config) -> Result<ScanReport> {
    if !path.is_dir() {
        bail!("Scan root is not a readable directory: {}", path.display());
    }

    let mut walker = WalkBuilder::new(path);
    // No gitignore/hidden filtering: dotted files like .env must be visible
    walker.standard_filters(false);
    walker.sort_by_file_name(|a, b| a.cmp(b));

    let excluded_dirs = config.excluded_dirs.clone();
    walker.filter_entry(move |entry| {
        // Pruning is by directory basename; the root itself is never pruned
        if entry.depth() == 0 || !entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            return true;
        }
        let name = entry.file_name().to_str().unwrap_or("");
        !excluded_dirs.iter().any(|excluded| excluded == name)
    });

    let mut dir_order: Vec<PathBuf> = Vec::new();
    let mut files_by_dir: HashMap<PathBuf, Vec<FileEntry>> = HashMap::new();
    let mut total_scanned = 0;

    for result in walker.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(_) => continue, // Skip entries we can't read
        };

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            dir_order.push(entry.path().to_path_buf());
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();

        if config.excluded_files.iter().any(|excluded| excluded == &name) {
            continue;
        }

        total_scanned += 1;

        if !classifier::is_target(&name) {
            continue;
        }

        let parent = entry
            .path()
            .parent()
            .unwrap_or(path)
            .to_path_buf();
        files_by_dir.entry(parent).or_default().push(FileEntry {
            category: classifier::classify(&name),
            path: entry.path().to_path_buf(),
            name,
        });
    }

    // Directories keep first-visit order; ones without targets produce no listing
    let mut listings = Vec::new();
    for dir in dir_order {
        if let Some(files) = files_by_dir.remove(&dir) {
            let relative = dir.strip_prefix(path).unwrap_or(dir.as_path());
            let (relative_path, depth) = if relative.as_os_str().is_empty() {
                (PathBuf::from("."), 0)
            } else {
                (relative.to_path_buf(), relative.components().count())
            };
            listings.push(DirectoryListing {
                relative_path,
                depth,
                files,
            });
        }
    }

    Ok(ScanReport::new(listings, total_scanned, path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_scan_mixed_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "app.py", "print('hi')\n");
        write_file(temp_dir.path(), "Dockerfile", "FROM python:3.12\n");
        write_file(temp_dir.path(), "requirements.txt", "flask\n");
        write_file(temp_dir.path(), "notes.md", "# notes\n");

        let config = Config::default();
        let report = scan_directory(temp_dir.path(), &config).unwrap();

        assert_eq!(report.total_scanned, 4);
        assert_eq!(report.included_count, 3);
        assert_eq!(report.listings.len(), 1);

        let listing = &report.listings[0];
        assert_eq!(listing.relative_path, PathBuf::from("."));
        assert_eq!(listing.depth, 0);

        let names: Vec<_> = listing.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Dockerfile", "app.py", "requirements.txt"]);

        assert_eq!(*report.by_category.get("Scripts").unwrap(), 1);
        assert_eq!(*report.by_category.get("Container Build Files").unwrap(), 1);
        assert_eq!(*report.by_category.get("Dependency Lists").unwrap(), 1);
        assert!(!report.by_category.contains_key("Other Config Files"));
    }

    #[test]
    fn test_excluded_dirs_are_pruned() {
        let temp_dir = TempDir::new().unwrap();
        let node_modules = temp_dir.path().join("node_modules");
        fs::create_dir(&node_modules).unwrap();
        write_file(&node_modules, "hidden.py", "print('never seen')\n");
        let nested = node_modules.join("pkg");
        fs::create_dir(&nested).unwrap();
        write_file(&nested, "deep.py", "print('never seen')\n");

        let config = Config::default();
        let report = scan_directory(temp_dir.path(), &config).unwrap();

        assert_eq!(report.total_scanned, 0);
        assert_eq!(report.included_count, 0);
        assert!(report.listings.is_empty());
    }

    #[test]
    fn test_excluded_files_do_not_count() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "app.py", "print('hi')\n");
        write_file(temp_dir.path(), "skip_me.py", "print('skipped')\n");

        let mut config = Config::default();
        config.excluded_files.push("skip_me.py".to_string());
        let report = scan_directory(temp_dir.path(), &config).unwrap();

        assert_eq!(report.total_scanned, 1);
        assert_eq!(report.included_count, 1);
        assert_eq!(report.listings[0].files[0].name, "app.py");
    }

    #[test]
    fn test_directory_without_targets_has_no_listing() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "main.py", "print('hi')\n");
        let docs = temp_dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        write_file(&docs, "readme.md", "# docs\n");

        let config = Config::default();
        let report = scan_directory(temp_dir.path(), &config).unwrap();

        // docs/readme.md is visited but produces no listing
        assert_eq!(report.total_scanned, 2);
        assert_eq!(report.included_count, 1);
        assert_eq!(report.listings.len(), 1);
        assert_eq!(report.listings[0].relative_path, PathBuf::from("."));
    }

    #[test]
    fn test_nested_directory_depth() {
        let temp_dir = TempDir::new().unwrap();
        let inner = temp_dir.path().join("services").join("api");
        fs::create_dir_all(&inner).unwrap();
        write_file(&inner, ".env.production", "KEY=value\n");

        let config = Config::default();
        let report = scan_directory(temp_dir.path(), &config).unwrap();

        assert_eq!(report.included_count, 1);
        assert_eq!(report.listings.len(), 1);

        let listing = &report.listings[0];
        assert_eq!(listing.relative_path, PathBuf::from("services/api"));
        assert_eq!(listing.depth, 2);
        assert_eq!(listing.files[0].category, Category::Environment);
    }

    #[test]
    fn test_total_is_at_least_included() {
        let temp_dir = TempDir::new().unwrap();
        write_file(temp_dir.path(), "a.py", "pass\n");
        write_file(temp_dir.path(), "b.txt", "plain\n");
        write_file(temp_dir.path(), "c.rs", "fn main() {}\n");

        let config = Config::default();
        let report = scan_directory(temp_dir.path(), &config).unwrap();

        assert!(report.total_scanned >= report.included_count);
        assert_eq!(report.total_scanned, 3);
        assert_eq!(report.included_count, 1);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        let config = Config::default();
        assert!(scan_directory(&missing, &config).is_err());
    }
}
