use crate::models::Category;
use std::path::Path;

/// Script extensions recognized for inclusion (compared lowercase)
const SCRIPT_EXTENSIONS: &[&str] = &["py", "pyw"];

/// Exact filenames included regardless of extension (compared lowercase)
const TARGET_FILES: &[&str] = &[
    "dockerfile",
    "dockerfile.dev",
    "dockerfile.prod",
    "dockerfile.test",
    "docker-compose.yml",
    "docker-compose.yaml",
    "docker-compose.dev.yml",
    "docker-compose.prod.yml",
    "docker-compose.test.yml",
    "docker-compose.override.yml",
    "requirements.txt",
    "requirements-dev.txt",
    "requirements-prod.txt",
    "requirements-test.txt",
    "pyproject.toml",
    "setup.py",
    "setup.cfg",
    "pipfile",
    "pipfile.lock",
    "poetry.lock",
    "conda.yml",
    "environment.yml",
    "environment.yaml",
    ".env",
    ".env.local",
    ".env.dev",
    ".env.development",
    ".env.prod",
    ".env.production",
    ".env.test",
    ".env.testing",
    ".env.staging",
    ".env.example",
    ".env.template",
];

/// One classification rule: a predicate over the lowercased basename.
///
/// Rules are evaluated in table order and the first match wins, so precedence
/// is the table itself. A name that matches no rule falls back to
/// [`Category::OtherConfig`].
struct Rule {
    matches: fn(&str) -> bool,
    category: Category,
}

const RULES: &[Rule] = &[
    Rule {
        matches: has_script_extension,
        category: Category::Scripts,
    },
    Rule {
        matches: is_container_build,
        category: Category::ContainerBuild,
    },
    Rule {
        matches: is_compose,
        category: Category::Compose,
    },
    Rule {
        matches: is_dependency_list,
        category: Category::DependencyList,
    },
    Rule {
        matches: is_package_config,
        category: Category::PackageConfig,
    },
    Rule {
        matches: is_lock_file,
        category: Category::LockFile,
    },
    Rule {
        matches: is_conda_environment,
        category: Category::CondaEnvironment,
    },
    Rule {
        matches: is_environment,
        category: Category::Environment,
    },
];

fn has_script_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

fn is_container_build(name: &str) -> bool {
    name.starts_with("dockerfile")
}

fn is_compose(name: &str) -> bool {
    name.contains("docker-compose")
}

fn is_dependency_list(name: &str) -> bool {
    name.contains("requirements") && name.ends_with(".txt")
}

fn is_package_config(name: &str) -> bool {
    matches!(name, "pyproject.toml" | "setup.py" | "setup.cfg")
}

fn is_lock_file(name: &str) -> bool {
    matches!(name, "pipfile" | "pipfile.lock" | "poetry.lock")
}

fn is_conda_environment(name: &str) -> bool {
    matches!(name, "conda.yml" | "environment.yml" | "environment.yaml")
}

fn is_environment(name: &str) -> bool {
    name.starts_with(".env")
}

/// Should this file's content be embedded in the report?
///
/// Matching is case-insensitive on the basename: a recognized script
/// extension, an exact target filename, or a `dockerfile`/`.env` prefix.
pub fn is_target(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    has_script_extension(&lower)
        || TARGET_FILES.contains(&lower.as_str())
        || is_container_build(&lower)
        || is_environment(&lower)
}

/// Resolve the category label for a filename.
///
/// Total: a name the rule table does not cover resolves to
/// `Other Config Files`, which is the legitimate catch-all for target names
/// added to the inclusion set without a dedicated category.
pub fn classify(file_name: &str) -> Category {
    let lower = file_name.to_lowercase();
    RULES
        .iter()
        .find(|rule| (rule.matches)(&lower))
        .map(|rule| rule.category)
        .unwrap_or(Category::OtherConfig)
}
