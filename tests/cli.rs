//! End-to-end tests of the `uiforge` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with config lookups confined to `home`
fn uiforge(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("uiforge").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("UIFORGE_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_list_prints_catalog() {
    let home = TempDir::new().unwrap();
    uiforge(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Templates (40)"))
        .stdout(predicate::str::contains("neo-brutalism"));
}

#[test]
fn test_list_json_is_parseable() {
    let home = TempDir::new().unwrap();
    let output = uiforge(&home)
        .args(["list", "--search", "retro", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let templates: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let templates = templates.as_array().unwrap();
    assert!(!templates.is_empty());
    assert!(templates.iter().all(|t| t["slug"].is_string()));
}

#[test]
fn test_unknown_category_fails() {
    let home = TempDir::new().unwrap();
    uiforge(&home)
        .args(["list", "--category", "Nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_show_unknown_template_fails() {
    let home = TempDir::new().unwrap();
    uiforge(&home)
        .args(["show", "no-such-template"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_show_lists_design_tokens() {
    let home = TempDir::new().unwrap();
    uiforge(&home)
        .args(["show", "neo-brutalism"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Color Palette:"))
        .stdout(predicate::str::contains("--ring:"));
}

#[test]
fn test_tokens_with_override() {
    let home = TempDir::new().unwrap();
    uiforge(&home)
        .args(["tokens", "neo-brutalism", "--primary", "#FF0000"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("@layer base {"))
        .stdout(predicate::str::contains("--primary: 0 100% 50%;"));
}

#[test]
fn test_tokens_rejects_bad_color() {
    let home = TempDir::new().unwrap();
    uiforge(&home)
        .args(["tokens", "neo-brutalism", "--accent", "teal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid accent color 'teal'"));
}

#[test]
fn test_generate_dry_run_lists_files() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    uiforge(&home)
        .args(["generate", "retro-80s", "--framework", "react", "--dry-run", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("retro-80s-react.zip"))
        .stdout(predicate::str::contains("package.json"))
        .stdout(predicate::str::contains("vite.config.ts"));

    assert!(!out.path().join("retro-80s-react.zip").exists());
}

#[test]
fn test_generate_writes_archive() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    uiforge(&home)
        .args(["generate", "neo-brutalism", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Wrote"));

    assert!(out.path().join("neo-brutalism-nextjs.zip").is_file());
}

#[test]
fn test_generate_unknown_template_writes_nothing() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    uiforge(&home)
        .args(["generate", "no-such-template", "--out"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn test_generate_write_failure_is_logged() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let blocker = out.path().join("not-a-dir");
    std::fs::write(&blocker, "file").unwrap();

    uiforge(&home)
        .env("RUST_LOG", "uiforge=error")
        .args(["generate", "neo-brutalism", "--out"])
        .arg(&blocker)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Download of neo-brutalism-nextjs failed"))
        .stderr(predicate::str::contains("Error: File operation failed"));
}

#[test]
fn test_configured_framework_is_default() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    uiforge(&home)
        .args(["config", "set", "framework", "react"])
        .assert()
        .success();
    uiforge(&home)
        .args(["config", "get", "framework"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(react)"));

    uiforge(&home)
        .args(["generate", "gaming-theme", "--out"])
        .arg(out.path())
        .assert()
        .success();
    assert!(out.path().join("gaming-theme-react.zip").is_file());
}
