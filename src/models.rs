use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Default filename for the generated report.
pub const DEFAULT_OUTPUT: &str = "stack_report.txt";

/// Which recognized kind of file a name belongs to.
///
/// The label is what appears next to the filename in the report and as the
/// key in the summary breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Scripts,
    ContainerBuild,
    Compose,
    DependencyList,
    PackageConfig,
    LockFile,
    CondaEnvironment,
    Environment,
    OtherConfig,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Scripts => "Scripts",
            Category::ContainerBuild => "Container Build Files",
            Category::Compose => "Compose Files",
            Category::DependencyList => "Dependency Lists",
            Category::PackageConfig => "Package Config",
            Category::LockFile => "Lock Files",
            Category::CondaEnvironment => "Conda Environment Files",
            Category::Environment => "Environment Files",
            Category::OtherConfig => "Other Config Files",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single file picked up by the scan
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Filename as it appears on disk (display is case-sensitive)
    pub name: String,

    /// Full path, used later to embed the file's content
    pub path: PathBuf,

    /// Resolved category
    pub category: Category,
}

/// One directory that contained at least one included file
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    /// Path relative to the scan root; the root itself renders as "."
    pub relative_path: PathBuf,

    /// Component count of `relative_path` (root = 0); drives indentation
    pub depth: usize,

    /// Included files in the order the walk encountered them
    pub files: Vec<FileEntry>,
}

/// Complete result of one scan pass
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Directories with included files, in first-visit order
    pub listings: Vec<DirectoryListing>,

    /// Every non-excluded file visited, included or not
    pub total_scanned: usize,

    /// Number of included files
    pub included_count: usize,

    /// Included-file count per category label, lexicographic order
    pub by_category: BTreeMap<&'static str, usize>,

    /// Path that was scanned
    pub scan_path: PathBuf,
}

impl ScanReport {
    /// Build a report from the listings collected during the walk.
    ///
    /// The totals are derived here, from the same entries the listing section
    /// is rendered from, so the summary can never disagree with the listing.
    pub fn new(listings: Vec<DirectoryListing>, total_scanned: usize, scan_path: PathBuf) -> Self {
        let mut included_count = 0;
        let mut by_category: BTreeMap<&'static str, usize> = BTreeMap::new();

        for listing in &listings {
            included_count += listing.files.len();
            for file in &listing.files {
                *by_category.entry(file.category.label()).or_insert(0) += 1;
            }
        }

        Self {
            listings,
            total_scanned,
            included_count,
            by_category,
            scan_path,
        }
    }
}

/// Configuration for the stackscan walker
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Directory basenames pruned from the walk, descendants included
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// Exact filenames skipped before counting or classification
    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            excluded_dirs: default_excluded_dirs(),
            excluded_files: default_excluded_files(),
        }
    }
}

fn default_excluded_dirs() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        "dist".to_string(),
        "build".to_string(),
        "venv".to_string(),
        "__pycache__".to_string(),
        ".git".to_string(),
        ".next".to_string(),
        "out".to_string(),
        ".venv".to_string(),
        "env".to_string(),
    ]
}

fn default_excluded_files() -> Vec<String> {
    // A re-scan must never ingest the report it wrote last time
    vec![DEFAULT_OUTPUT.to_string()]
}
