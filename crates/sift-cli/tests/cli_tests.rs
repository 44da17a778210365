//! End-to-end tests for the `sift` binary.

use std::path::Path;
use std::process::{Command, Output};

fn sift(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sift"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("SIFT_LOG")
        .output()
        .expect("failed to run sift")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_clean_project_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("main.ts"), "const name = user?.name ?? 'anon';\n").unwrap();

    let output = sift(dir.path(), &["lint"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("no issues found"));
}

#[test]
fn test_warnings_do_not_fail() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("main.js"), "const n = user && user.name;\n").unwrap();

    let output = sift(dir.path(), &["lint"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("S3002"));
    assert!(text.contains("1 warning"));
    assert!(text.contains("auto-fixable"));
}

#[test]
fn test_error_severity_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("io.ts"), "Deno.remove('tmp');\n").unwrap();

    let output = sift(dir.path(), &["lint"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("S1001"));
}

#[test]
fn test_fix_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("main.ts");
    std::fs::write(&file, "const n = user && user.name;\nconst s = a || '';\n").unwrap();

    let output = sift(dir.path(), &["lint", "--fix"]);
    assert!(output.status.success());
    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "const n = user?.name;\nconst s = a ?? '';\n"
    );
    assert!(stdout(&output).contains("Fixed 2 issues in 1 file"));
}

#[test]
fn test_json_format() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.ts"), "const s = a || '';\n").unwrap();

    let output = sift(dir.path(), &["lint", "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let diags = &json[0]["diagnostics"];
    assert_eq!(diags[0]["code"], "S3001");
    assert_eq!(diags[0]["severity"], "warn");
    assert_eq!(diags[0]["fix"]["replacement"], "a ?? ''");
}

#[test]
fn test_config_discovered_from_parent() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("src");
    std::fs::create_dir_all(&src).unwrap();
    std::fs::write(dir.path().join("sift.toml"), "[rules]\nrequire-error-handling = \"warn\"\n").unwrap();
    std::fs::write(src.join("io.ts"), "Deno.remove('tmp');\n").unwrap();

    let output = sift(&src, &["lint"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("1 warning"));
}

#[test]
fn test_explicit_config_flag() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("custom.toml"), "[rules]\nprefer-nullish-coalescing = \"off\"\n").unwrap();
    std::fs::write(dir.path().join("a.ts"), "const s = a || '';\n").unwrap();

    let output = sift(dir.path(), &["lint", "--config", "custom.toml"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("no issues found"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sift.toml"), "[rules]\nnot-a-rule = \"warn\"\n").unwrap();
    std::fs::write(dir.path().join("a.ts"), "let x = 1;\n").unwrap();

    let output = sift(dir.path(), &["lint"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not-a-rule"));
}

#[test]
fn test_parse_error_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.js"), "let x = ;\n").unwrap();

    let output = sift(dir.path(), &["lint"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("S0001"));
}

#[test]
fn test_rules_lists_every_rule() {
    let dir = tempfile::tempdir().unwrap();
    let output = sift(dir.path(), &["rules", "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rules = json.as_array().unwrap();
    assert_eq!(rules.len(), 15);
    assert!(rules.iter().any(|r| r["id"] == "prefer-array-every" && r["fixable"] == true));

    let pretty = stdout(&sift(dir.path(), &["rules"]));
    assert!(pretty.contains("async-function-naming"));
    assert!(pretty.contains("S2001"));
}
