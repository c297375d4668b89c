//! Integration tests for the admin-routes binary
//!
//! Each test runs the binary inside a scratch project directory and checks
//! what it writes to stdout.

use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MODULES_DIR: &str = "src/router/routes/modules";

fn write(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn module(name: &str) -> String {
    format!(
        "[default]\npath = \"/{}\"\nname = \"{}\"\ncomponent = \"LAYOUT\"\n",
        name.to_lowercase(),
        name
    )
}

fn run(dir: &Path, args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_admin-routes"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("ADMIN_ROUTES_LOCALE")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "admin-routes {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_dump_prints_only_json_on_stdout() {
    // No modules and no locales: both emit log lines
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["dump"]);

    let value = stdout_json(&output);
    assert_eq!(value["dynamic"].as_array().unwrap().len(), 1);
    assert_eq!(value["dynamic"][0]["name"], "PageNotFound");
    assert_eq!(value["basic"].as_array().unwrap().len(), 6);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_dump_dynamic_table_in_discovery_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, &format!("{}/b/beta.toml", MODULES_DIR), &module("Beta"));
    write(root, &format!("{}/alpha.toml", MODULES_DIR), &module("Alpha"));

    let output = run(root, &["dump", "--table", "dynamic", "--pretty"]);
    let names: Vec<String> = stdout_json(&output)
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(names, vec!["PageNotFound", "Alpha", "Beta"]);
}

#[test]
fn test_dump_uses_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "routes/about.toml", &module("About"));
    write(
        root,
        "i18n/de.json",
        r#"{ "routes": { "basic": { "login": "Anmelden" } } }"#,
    );
    write(
        root,
        "custom.toml",
        r#"
        [discovery]
        modules_dir = "routes"

        [pages]
        home = "/home"

        [i18n]
        locale = "de"
        locales_dir = "i18n"
        "#,
    );

    let output = run(root, &["--config", "custom.toml", "dump", "--table", "basic"]);
    let basic = stdout_json(&output);

    assert_eq!(basic[0]["meta"]["title"], "Anmelden");
    assert_eq!(basic[2]["redirect"], "/home");
}

#[test]
fn test_check_reports_duplicate_names() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, &format!("{}/one.toml", MODULES_DIR), &module("Same"));
    write(root, &format!("{}/two.toml", MODULES_DIR), &module("Same"));

    let output = run(root, &["check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("`Same` appears 2 times"));
    assert!(stdout.contains("1 duplicate route name(s) found"));
}

#[test]
fn test_check_clean_tables() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["check"]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("No duplicate route names"));
}

#[test]
fn test_codegen_writes_registry() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, &format!("{}/about.toml", MODULES_DIR), &module("About"));

    run(root, &["codegen", "--out", "generated/registry.rs"]);

    let generated = fs::read_to_string(root.join("generated/registry.rs")).unwrap();
    assert!(generated.contains("pub fn module_registry() -> admin_routes::ModuleRegistry"));
    assert!(generated.contains(".with_module(\"./modules/about.toml\""));
    assert_eq!(generated.matches("include_str!(").count(), 1);
}
