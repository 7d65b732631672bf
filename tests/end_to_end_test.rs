//! Detection followed by rendering, without the interactive layer

use repome::detection::analyze;
use repome::render::{render, Answers};
use std::fs;
use tempfile::TempDir;

fn answers() -> Answers {
    Answers {
        project_name: "foo".to_string(),
        description: "d".to_string(),
        github_username: "u".to_string(),
        email: "e@x.com".to_string(),
        contributing: "c".to_string(),
        ..Default::default()
    }
}

#[test]
fn test_nodejs_project_readme() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"name":"foo","license":"MIT","dependencies":{"a":"1","b":"2"},"scripts":{"test":"jest"}}"#,
    )
    .unwrap();
    fs::create_dir(dir.path().join("tests")).unwrap();

    let info = analyze(dir.path());
    let readme = render(&info, &answers());

    assert!(readme.starts_with("# foo\n"));
    assert!(readme.contains("- [Dependencies](#dependencies)"));
    assert!(readme.contains("- [Testing](#testing)"));
    assert!(readme.contains("- **a** - [View on npm](https://www.npmjs.com/package/a)"));
    assert!(readme.contains("- **b** - [View on npm](https://www.npmjs.com/package/b)"));
    assert!(readme.contains("```bash\nnpm run test\n```"));
    assert!(readme.contains("This project is licensed under the MIT License."));
    assert!(!readme.contains("### Development Dependencies"));

    let sections: Vec<usize> = [
        "## Installation",
        "## Usage",
        "## Dependencies",
        "## Testing",
        "## Contributing",
        "## License",
        "## Author",
    ]
    .iter()
    .map(|heading| readme.find(heading).unwrap())
    .collect();
    assert!(sections.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_python_project_readme() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("requirements.txt"), "django>=4\n").unwrap();

    let readme = render(&analyze(dir.path()), &answers());

    assert!(readme.contains("pip install -r requirements.txt"));
    assert!(readme.contains("- **django** - [View on npm](https://www.npmjs.com/package/django)"));
    assert!(readme.contains("# Basic usage\nnode index.js"));
    assert!(!readme.contains("## Testing"));
}

#[test]
fn test_unknown_project_readme_uses_fallbacks() {
    let dir = TempDir::new().unwrap();

    let readme = render(&analyze(dir.path()), &Answers::default());

    assert!(readme.starts_with("# My Project\n"));
    assert!(readme.contains("A project created with repome"));
    assert!(readme.contains("git clone https://github.com/your-username/project.git"));
    assert!(readme.contains("This project is licensed under the ISC License."));
    assert!(!readme.contains("## Dependencies"));
}

#[test]
fn test_render_twice_is_identical() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("go.mod"), "module example.com/x\n").unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();

    let info = analyze(dir.path());
    assert_eq!(render(&info, &answers()), render(&info, &answers()));
}
