//! Manifest readers for the project types that have one
//!
//! Readers never fail: a missing or malformed manifest yields `None` or an
//! empty [`ManifestData`] and the rest of the analysis carries on.

use super::types::{ProjectType, Script};
use crate::fs::FileSystem;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

pub const PACKAGE_JSON: &str = "package.json";
pub const REQUIREMENTS_TXT: &str = "requirements.txt";

/// Version constraint operators stripped from requirement lines, in the
/// order they are checked.
const CONSTRAINT_OPERATORS: [&str; 3] = ["==", ">=", "<="];

/// Fields a manifest reader contributes to `ProjectInfo`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestData {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub scripts: Vec<Script>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub repository: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    name: Option<String>,
    description: Option<String>,
    version: Option<String>,
    license: Option<Value>,
    author: Option<Value>,
    repository: Option<Value>,
    dependencies: Option<Map<String, Value>>,
    dev_dependencies: Option<Map<String, Value>>,
    scripts: Option<Map<String, Value>>,
}

/// Runs the manifest reader registered for `project_type`, if any.
pub fn read_manifest(
    fs: &dyn FileSystem,
    root: &Path,
    project_type: ProjectType,
) -> ManifestData {
    match project_type {
        ProjectType::Nodejs => read_package_json(fs, root).unwrap_or_default(),
        ProjectType::Python => read_python_project(fs, root),
        ProjectType::Rust => {
            note_manifest(fs, root, "Cargo.toml");
            ManifestData::default()
        }
        ProjectType::Go => {
            note_manifest(fs, root, "go.mod");
            ManifestData::default()
        }
        _ => {
            debug!("No manifest reader for project type {}", project_type);
            ManifestData::default()
        }
    }
}

/// Parses `package.json` in `root`. Returns `None` (with a warning) when the
/// file cannot be read or is not a valid package manifest.
pub fn read_package_json(fs: &dyn FileSystem, root: &Path) -> Option<ManifestData> {
    let content = match fs.read_to_string(&root.join(PACKAGE_JSON)) {
        Ok(content) => content,
        Err(e) => {
            warn!(error = %e, "Could not read {}", PACKAGE_JSON);
            return None;
        }
    };

    let package = match parse_package_json(&content) {
        Some(package) => package,
        None => {
            warn!("Could not parse {}", PACKAGE_JSON);
            return None;
        }
    };

    debug!("Found {} dependencies", package.dependencies.len());
    debug!("Found {} dev dependencies", package.dev_dependencies.len());
    Some(package)
}

pub fn parse_package_json(content: &str) -> Option<ManifestData> {
    let package: PackageJson = serde_json::from_str(content).ok()?;

    let keys = |map: Option<Map<String, Value>>| -> Vec<String> {
        map.map(|m| m.into_iter().map(|(k, _)| k).collect())
            .unwrap_or_default()
    };

    let scripts = package
        .scripts
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, command)| match command {
            Value::String(command) => Some(Script::new(name, command)),
            _ => None,
        })
        .collect();

    Some(ManifestData {
        dependencies: keys(package.dependencies),
        dev_dependencies: keys(package.dev_dependencies),
        scripts,
        name: non_blank(package.name),
        description: non_blank(package.description),
        version: non_blank(package.version),
        license: non_blank(package.license.as_ref().and_then(license_name)),
        author: non_blank(package.author.as_ref().and_then(person_name)),
        repository: non_blank(package.repository.as_ref().and_then(repository_url)),
    })
}

/// Empty strings (as written by `npm init -y`) count as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn license_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj.get("type").and_then(Value::as_str).map(String::from),
        _ => None,
    }
}

/// `author` is either `"Name <email> (url)"` or `{ "name": .., "email": .. }`.
/// Objects are folded into the string form so the email can be recovered later.
fn person_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => {
            let name = obj.get("name").and_then(Value::as_str)?;
            match obj.get("email").and_then(Value::as_str) {
                Some(email) => Some(format!("{} <{}>", name, email)),
                None => Some(name.to_string()),
            }
        }
        _ => None,
    }
}

fn repository_url(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj.get("url").and_then(Value::as_str).map(String::from),
        _ => None,
    }
}

/// Reads dependency names from `requirements.txt` when present. `setup.py`
/// and `pyproject.toml` are only noted.
pub fn read_python_project(fs: &dyn FileSystem, root: &Path) -> ManifestData {
    let mut data = ManifestData::default();

    let requirements = root.join(REQUIREMENTS_TXT);
    if fs.exists(&requirements) {
        match fs.read_to_string(&requirements) {
            Ok(content) => data.dependencies = parse_requirements(&content),
            Err(e) => debug!(error = %e, "Could not read {}", REQUIREMENTS_TXT),
        }
    }

    note_manifest(fs, root, "setup.py");
    note_manifest(fs, root, "pyproject.toml");

    data
}

/// Bare dependency names from a requirements listing. Blank and `#` comment
/// lines are skipped; everything from the first constraint operator on is
/// dropped.
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(strip_constraint)
        .collect()
}

fn strip_constraint(line: &str) -> String {
    let mut name = line;
    for op in CONSTRAINT_OPERATORS {
        if let Some((head, _)) = name.split_once(op) {
            name = head;
        }
    }
    name.trim().to_string()
}

fn note_manifest(fs: &dyn FileSystem, root: &Path, file: &str) {
    if fs.exists(&root.join(file)) {
        debug!("Found {}", file);
    }
}

const GITHUB_HOSTS: [&str; 2] = ["github.com", "www.github.com"];

/// Extracts the GitHub owner from the common repository URL spellings:
/// `https://github.com/o/r`, `git+https://github.com/o/r.git`,
/// `git@github.com:o/r.git` and the `github:o/r` shorthand. The host must
/// be GitHub itself; `github.com` elsewhere in the URL does not count.
pub fn github_owner(repository: &str) -> Option<String> {
    let repository = repository.trim();
    let path = if let Some(rest) = repository.strip_prefix("github:") {
        rest
    } else if let Some((_, rest)) = repository.split_once("://") {
        let (authority, path) = rest.split_once('/')?;
        is_github_host(authority).then_some(path)?
    } else {
        let (authority, path) = repository.split_once(':')?;
        is_github_host(authority).then_some(path)?
    };

    let owner = path.split('/').next()?.trim();
    if owner.is_empty() || !path.contains('/') {
        return None;
    }
    Some(owner.to_string())
}

/// `authority` is `[user@]host[:port]`.
fn is_github_host(authority: &str) -> bool {
    let host = authority.rsplit('@').next().unwrap_or(authority);
    let host = host.split(':').next().unwrap_or(host);
    GITHUB_HOSTS
        .iter()
        .any(|known| host.eq_ignore_ascii_case(known))
}

/// Email from an author string of the form `Name <email> (url)`.
pub fn author_email(author: &str) -> Option<String> {
    let start = author.find('<')?;
    let end = author[start..].find('>')? + start;
    let email = author[start + 1..end].trim();
    (!email.is_empty()).then(|| email.to_string())
}
