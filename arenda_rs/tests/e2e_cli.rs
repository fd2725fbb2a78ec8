//! End-to-End CLI Tests for arenda

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const DEFAULT_LINK: &str = "https://yandex.ru/maps/-/CLfdUR8I";

/// Get a command pointing to the arenda binary
fn arenda() -> Command {
    cargo_bin_cmd!("arenda")
}

/// Built-in registry as JSON, straight from the binary
fn default_content_json() -> serde_json::Value {
    let output = arenda().arg("content").output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        arenda()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        arenda()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_subcommand() {
        arenda().assert().failure();
    }
}

// ============================================
// Render
// ============================================

mod render {
    use super::*;

    #[test]
    fn writes_page_and_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public/site/index.html");

        arenda()
            .args(["render", "--year", "2026", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Гостиная зона"));
        assert!(html.contains(DEFAULT_LINK));
        assert!(html.contains("© 2026 АрендаПрайм"));
    }

    #[test]
    fn prints_page_to_stdout() {
        arenda()
            .args(["render", "--out", "-", "--year", "2030"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("id=\"root\""))
            .stdout(predicate::str::contains("© 2030 АрендаПрайм"));
    }

    #[test]
    fn renders_custom_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");

        let mut content = default_content_json();
        content["outbound_link"] = serde_json::json!("https://example.com/listing");
        content["gallery"][0]["title"] = serde_json::json!("Терраса");
        std::fs::write(&path, content.to_string()).unwrap();

        arenda()
            .args(["render", "--out", "-", "--content"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("https://example.com/listing"))
            .stdout(predicate::str::contains("Терраса"))
            .stdout(predicate::str::contains(DEFAULT_LINK).not());
    }

    #[test]
    fn refuses_invalid_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        let out = dir.path().join("index.html");

        let mut content = default_content_json();
        content["hero_image"] = serde_json::json!("hero.jpg");
        std::fs::write(&path, content.to_string()).unwrap();

        arenda()
            .args(["render", "--content"])
            .arg(&path)
            .arg("--out")
            .arg(&out)
            .assert()
            .failure()
            .stderr(predicate::str::contains("hero_image"));

        assert!(!out.exists());
    }
}

// ============================================
// Content registry
// ============================================

mod content {
    use super::*;

    #[test]
    fn dumps_builtin_registry() {
        let content = default_content_json();

        assert_eq!(content["outbound_link"], DEFAULT_LINK);
        assert_eq!(content["features"].as_array().unwrap().len(), 3);
        assert_eq!(content["gallery"].as_array().unwrap().len(), 8);
        assert_eq!(content["amenities"].as_array().unwrap().len(), 4);
        assert_eq!(content["features"][1]["icon"], "shield-check");
    }

    #[test]
    fn check_accepts_dumped_registry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, default_content_json().to_string()).unwrap();

        arenda()
            .args(["check", "--content"])
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::contains("3 features"))
            .stdout(predicate::str::contains("8 gallery images"))
            .stdout(predicate::str::contains("4 amenities"));
    }

    #[test]
    fn check_rejects_non_http_link() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");

        let mut content = default_content_json();
        content["outbound_link"] = serde_json::json!("ftp://example.com/listing");
        std::fs::write(&path, content.to_string()).unwrap();

        arenda()
            .args(["check", "--content"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("outbound_link"));
    }

    #[test]
    fn check_rejects_empty_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");

        let mut content = default_content_json();
        content["amenities"] = serde_json::json!([]);
        std::fs::write(&path, content.to_string()).unwrap();

        arenda()
            .args(["check", "--content"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("amenities"));
    }

    #[test]
    fn check_reports_missing_file() {
        arenda()
            .args(["check", "--content", "/nonexistent/content.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read content file"));
    }

    #[test]
    fn check_reports_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "{ not json").unwrap();

        arenda()
            .args(["check", "--content"])
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid content JSON"));
    }
}
