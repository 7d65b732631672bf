//! Section generators for the README
//!
//! Each function is pure and returns a self-contained Markdown fragment;
//! conditional sections return an empty string when they do not apply.

use crate::detection::{ProjectInfo, ProjectType};

const NPM_PACKAGE_URL: &str = "https://www.npmjs.com/package";
const SHIELDS_URL: &str = "https://img.shields.io";

/// Badge line: npm badges, then GitHub badges, then the license badge.
pub fn badges(info: &ProjectInfo, owner: &str) -> String {
    let mut badges = Vec::new();

    if let Some(name) = info.name.as_deref() {
        if info.project_type == ProjectType::Nodejs {
            badges.push(format!("![npm version]({}/npm/v/{})", SHIELDS_URL, name));
            badges.push(format!("![npm downloads]({}/npm/dm/{})", SHIELDS_URL, name));
        }

        if info.has_git {
            badges.push(format!(
                "![GitHub last commit]({}/github/last-commit/{}/{})",
                SHIELDS_URL, owner, name
            ));
            badges.push(format!(
                "![GitHub issues]({}/github/issues/{}/{})",
                SHIELDS_URL, owner, name
            ));
        }
    }

    if let Some(license) = info.license.as_deref() {
        badges.push(format!(
            "![License]({}/badge/license-{}-blue.svg)",
            SHIELDS_URL, license
        ));
    }

    badges.join(" ")
}

pub fn installation(info: &ProjectInfo, owner: &str) -> String {
    match info.project_type {
        ProjectType::Nodejs => "```bash\n\
             # Install dependencies\n\
             npm install\n\
             \n\
             # Or using yarn\n\
             yarn install\n\
             ```"
        .to_string(),
        ProjectType::Python => "```bash\n\
             # Install dependencies\n\
             pip install -r requirements.txt\n\
             \n\
             # Or using pipenv\n\
             pipenv install\n\
             \n\
             # Or using poetry\n\
             poetry install\n\
             ```"
        .to_string(),
        ProjectType::Rust => "```bash\n\
             # Install dependencies\n\
             cargo build\n\
             \n\
             # Run the project\n\
             cargo run\n\
             ```"
        .to_string(),
        ProjectType::Go => "```bash\n\
             # Install dependencies\n\
             go mod download\n\
             \n\
             # Run the project\n\
             go run .\n\
             ```"
        .to_string(),
        _ => {
            let repo = info.name.as_deref().unwrap_or("project");
            format!(
                "```bash\n\
                 # Clone the repository\n\
                 git clone https://github.com/{owner}/{repo}.git\n\
                 cd {repo}\n\
                 ```"
            )
        }
    }
}

pub fn usage(info: &ProjectInfo) -> String {
    if info.project_type == ProjectType::Nodejs && !info.scripts.is_empty() {
        let mut usage = String::from("```bash\n");
        for script in &info.scripts {
            usage.push_str(&format!("npm run {}\n", script.name));
        }
        usage.push_str("```");
        return usage;
    }

    "```bash\n# Basic usage\nnode index.js\n```".to_string()
}

/// Ordered section titles linked from the table of contents.
pub fn toc_sections(info: &ProjectInfo) -> Vec<&'static str> {
    let mut sections = vec!["Installation", "Usage"];

    if info.has_dependencies() {
        sections.push("Dependencies");
    }
    if info.has_tests {
        sections.push("Testing");
    }

    sections.extend(["Contributing", "License", "Author"]);
    sections
}

pub fn table_of_contents(info: &ProjectInfo) -> String {
    toc_sections(info)
        .iter()
        .map(|section| format!("- [{}](#{})", section, section.to_lowercase()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn dependencies_section(info: &ProjectInfo) -> String {
    if !info.has_dependencies() {
        return String::new();
    }

    let mut deps = String::from("## Dependencies\n\n");
    deps.push_str("This project uses the following main dependencies:\n\n");
    for dep in &info.dependencies {
        deps.push_str(&dependency_bullet(dep));
    }

    if !info.dev_dependencies.is_empty() {
        deps.push_str("\n### Development Dependencies\n\n");
        for dep in &info.dev_dependencies {
            deps.push_str(&dependency_bullet(dep));
        }
    }

    deps.push('\n');
    deps
}

fn dependency_bullet(dep: &str) -> String {
    format!("- **{}** - [View on npm]({}/{})\n", dep, NPM_PACKAGE_URL, dep)
}

pub fn testing_section(info: &ProjectInfo) -> String {
    if !info.has_tests {
        return String::new();
    }

    "## Testing\n\n\
     ```bash\n\
     # Run tests\n\
     npm test\n\
     ```\n\n\
     ```bash\n\
     # Run tests with coverage\n\
     npm run test:coverage\n\
     ```\n\n"
        .to_string()
}
