use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_bbmark-cli") {
        return PathBuf::from(path);
    }
    if let Some(path) = env::var_os("CARGO_BIN_EXE_bbmark_cli") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("bbmark-cli");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn temp_path(name: &str, extension: &str) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "bbmark_cli_{}_{}_{}.{}",
        name,
        now.as_secs(),
        now.subsec_nanos(),
        extension
    );
    path.push(file_name);
    path
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = temp_path(name, "md");
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn converts_file_to_stdout() {
    let input = temp_file("file", "# Title\n\n**Bold** text\n");
    let output = Command::new(bin_path())
        .arg(&input)
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "[h1]Title[/h1]\n\n[b]Bold[/b] text\n");
}

#[test]
fn converts_stdin_when_no_input_given() {
    let mut child = Command::new(bin_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"- a\n- b\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "[list]\n  [*] a\n  [*] b\n[/list]\n");
}

#[test]
fn output_flag_writes_file() {
    let input = temp_file("out_in", "> quoted\n");
    let target = temp_path("out", "bbcode");
    let output = Command::new(bin_path())
        .arg(&input)
        .arg("--output")
        .arg(&target)
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    assert!(output.stdout.is_empty(), "expected nothing on stdout");
    let written = fs::read_to_string(&target).expect("read output");
    assert_eq!(written, "[quote]quoted[/quote]\n");
}

#[test]
fn missing_input_reports_error_and_exit_code() {
    let missing = temp_path("missing", "md");
    let output = Command::new(bin_path())
        .arg(&missing)
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to read"),
        "expected read error in stderr: {stderr}"
    );
}

#[test]
fn check_runs_every_sample() {
    let output = Command::new(bin_path())
        .arg("--check")
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1. Headings: passed"));
    assert!(!stdout.contains("FAILED"), "unexpected failure:\n{stdout}");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = Command::new(bin_path())
        .arg("--sanitized")
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(2));
}
