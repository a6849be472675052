use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn release_command(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_npm-release"));
    cmd.current_dir(dir.path());
    cmd
}

fn write_manifest(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join("package.json"), contents).unwrap();
}

#[cfg(unix)]
fn write_fake_tool(dir: &TempDir, name: &str, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
fn prepend_to_path(dir: &TempDir) -> String {
    let current = std::env::var("PATH").unwrap_or_default();
    format!("{}:{}", dir.path().display(), current)
}

// ============================================================================
// Startup failures and clean exits
// ============================================================================

#[test]
fn test_missing_manifest_exits_with_failure() {
    let dir = TempDir::new().unwrap();

    let output = release_command(&dir).stdin(Stdio::null()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("package.json not found"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_malformed_manifest_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, "{ this is not json");

    let output = release_command(&dir).stdin(Stdio::null()).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid JSON"));
}

#[test]
fn test_eof_at_the_menu_is_a_clean_cancel() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, r#"{"name": "demo", "version": "1.2.3"}"#);

    let output = release_command(&dir).stdin(Stdio::null()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1.2.3"), "stdout: {}", stdout);
    assert!(stdout.contains("cancelled"), "stdout: {}", stdout);
}

#[test]
fn test_invalid_menu_answer_reprompts_before_cancel() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, r#"{"name": "demo", "version": "1.2.3"}"#);

    let mut child = release_command(&dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"9\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Please enter 1, 2, 3 or 4"),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("cancelled"));
}

#[test]
fn test_version_flag_prints_the_tool_version() {
    let dir = TempDir::new().unwrap();

    let output = release_command(&dir).arg("--version").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("npm-release"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Full runs against fake git/npm on PATH
// ============================================================================

#[cfg(unix)]
#[test]
fn test_full_patch_release_against_fake_tools() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, r#"{"name": "demo", "version": "1.2.3"}"#);

    let bin_dir = TempDir::new().unwrap();
    write_fake_tool(&bin_dir, "git", "#!/bin/sh\nexit 0\n");
    write_fake_tool(
        &bin_dir,
        "npm",
        r#"#!/bin/sh
if [ "$1" = "version" ]; then
  echo "v1.2.4"
fi
exit 0
"#,
    );

    let mut child = release_command(&dir)
        .env("PATH", prepend_to_path(&bin_dir))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"1\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Release summary"), "stdout: {}", stdout);
    assert!(stdout.contains("1.2.4"), "stdout: {}", stdout);
}

#[cfg(unix)]
#[test]
fn test_declined_commit_gate_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, r#"{"name": "demo", "version": "1.2.3"}"#);

    let bin_dir = TempDir::new().unwrap();
    write_fake_tool(
        &bin_dir,
        "git",
        r#"#!/bin/sh
if [ "$1" = "status" ]; then
  echo " M index.js"
fi
exit 0
"#,
    );

    let mut child = release_command(&dir)
        .env("PATH", prepend_to_path(&bin_dir))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"1\nn\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("working tree is not clean"),
        "stderr: {}",
        stderr
    );
}

#[cfg(unix)]
#[test]
fn test_publish_failure_reports_and_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    write_manifest(&dir, r#"{"name": "demo", "version": "1.2.3"}"#);

    let bin_dir = TempDir::new().unwrap();
    write_fake_tool(&bin_dir, "git", "#!/bin/sh\nexit 0\n");
    write_fake_tool(
        &bin_dir,
        "npm",
        r#"#!/bin/sh
if [ "$1" = "version" ]; then
  echo "v1.2.4"
fi
if [ "$1" = "publish" ]; then
  echo "npm ERR! code E403" >&2
  exit 1
fi
exit 0
"#,
    );

    let mut child = release_command(&dir)
        .env("PATH", prepend_to_path(&bin_dir))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"1\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Release summary"), "stdout: {}", stdout);
    assert!(stderr.contains("npm publish failed"), "stderr: {}", stderr);
    assert!(
        stdout.contains("npm publish --access public"),
        "stdout: {}",
        stdout
    );
}
