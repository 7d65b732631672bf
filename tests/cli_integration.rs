//! CLI integration tests
//!
//! Runs the built binary against temporary project directories with answers
//! piped on stdin, checking the written README and exit codes.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn repome() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_repome"));
    for var in [
        "REPOME_PROJECT_NAME",
        "REPOME_DESCRIPTION",
        "REPOME_GITHUB_USERNAME",
        "REPOME_EMAIL",
        "REPOME_CONTRIBUTING",
        "REPOME_OUTPUT",
        "REPOME_LOG_LEVEL",
        "REPOME_LOG_JSON",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn run_in(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = repome()
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn repome");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write answers");

    child.wait_with_output().expect("Failed to wait for repome")
}

#[test]
fn test_cli_help() {
    let output = repome().arg("--help").output().expect("Failed to execute");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("repome"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--verbose"));
}

#[test]
fn test_cli_version_flags() {
    for flag in ["-v", "--version"] {
        let output = repome().arg(flag).output().expect("Failed to execute");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(&format!("repome {}", env!("CARGO_PKG_VERSION"))));
    }
}

#[test]
fn test_cli_unknown_flag_fails() {
    let output = repome().arg("--bogus").output().expect("Failed to execute");
    assert!(!output.status.success());
}

#[test]
fn test_cli_accepts_all_defaults_on_empty_stdin() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &[], "");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project type detected: Unknown"));
    assert!(stdout.contains("README created successfully"));

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# My Project\n"));
    assert!(readme.contains("git clone https://github.com/your-username/project.git"));
    assert!(readme.contains("This project is licensed under the ISC License."));
}

#[test]
fn test_cli_nodejs_project_with_answers() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{
  "name": "foo",
  "description": "A foo",
  "license": "MIT",
  "dependencies": { "express": "^4.0.0" },
  "devDependencies": { "jest": "^29.0.0" },
  "scripts": { "start": "node index.js", "test": "jest" }
}"#,
    )
    .unwrap();
    fs::create_dir(dir.path().join("tests")).unwrap();
    fs::write(dir.path().join("LICENSE"), "MIT").unwrap();

    let answers = "\n\noctocat\nme@example.com\n\n\nEND\nEND\n";
    let output = run_in(dir.path(), &[], answers);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project type detected: nodejs"));
    assert!(stdout.contains("Dependencies found: 1"));
    assert!(stdout.contains("Tests detected: Yes"));
    assert!(stdout.contains("License detected: Yes"));

    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# foo\n"));
    assert!(readme.contains("A foo"));
    assert!(readme.contains("![npm version](https://img.shields.io/npm/v/foo)"));
    assert!(readme.contains("npm run start\nnpm run test\n"));
    assert!(readme.contains("- **express** - [View on npm](https://www.npmjs.com/package/express)"));
    assert!(readme.contains("### Development Dependencies"));
    assert!(readme.contains("## Testing"));
    assert!(readme.contains("licensed under the MIT License"));
    assert!(readme.contains("- GitHub: [@octocat](https://github.com/octocat)"));
    assert!(readme.contains("- Email: me@example.com"));
}

#[test]
fn test_cli_custom_output_path() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("docs")).unwrap();

    let output = run_in(dir.path(), &["--output", "docs/OVERVIEW.md"], "");

    assert!(output.status.success());
    assert!(dir.path().join("docs/OVERVIEW.md").exists());
    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn test_cli_output_from_env() {
    let dir = TempDir::new().unwrap();

    let mut child = repome()
        .env("REPOME_OUTPUT", "GENERATED.md")
        .current_dir(dir.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn repome");
    let status = child.wait().expect("Failed to wait for repome");

    assert!(status.success());
    assert!(dir.path().join("GENERATED.md").exists());
}

#[test]
fn test_cli_write_failure_exits_with_error() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &["-o", "missing/dir/README.md"], "");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to write README"));
    assert!(!dir.path().join("missing").exists());
}

#[test]
fn test_cli_invalid_log_level_fails_validation() {
    let dir = TempDir::new().unwrap();

    let output = repome()
        .env("REPOME_LOG_LEVEL", "chatty")
        .current_dir(dir.path())
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log level: chatty"));
    assert!(!stderr.contains("defaulting to WARN"));
    assert!(!dir.path().join("README.md").exists());
}
