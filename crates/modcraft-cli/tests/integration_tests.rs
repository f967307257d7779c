//! Integration tests for the modcraft binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const COMPOSER: &str = r#"{
    "autoload": {
        "psr-4": {
            "App\\": "app/"
        }
    },
    "autoload-dev": {
        "psr-4": {
            "Tests\\": "tests/"
        }
    }
}
"#;

const BOOTSTRAP: &str = r#"<?php

return Application::configure(basePath: dirname(__DIR__))
    ->withProviders([
        \App\Providers\AppServiceProvider::class,
    ])
    ->create();
"#;

fn modcraft(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("modcraft").unwrap();
    cmd.current_dir(dir)
        .env_remove("MODCRAFT_STUBS_DIR")
        .env_remove("MODCRAFT_ENVIRONMENT__MODE")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates `Billing` with no optional directories.
fn create_billing(dir: &Path) {
    modcraft(dir)
        .arg("module")
        .write_stdin("Billing\nn\nn\nn\nn\n")
        .assert()
        .success();
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    modcraft(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Module scaffolding"))
        .stdout(predicate::str::contains("controller"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    modcraft(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_module_in_production_mode_is_not_wired() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("composer.json"), COMPOSER).unwrap();

    modcraft(temp.path())
        .arg("module")
        .write_stdin("billing\ny\nn\nn\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BillingServiceProvider.php"));

    let module = temp.path().join("modules/Billing");
    assert!(module.join("app/Providers/BillingServiceProvider.php").is_file());
    assert!(module.join("domain/Processes").is_dir());
    assert!(module.join("app/Http/Middleware").is_dir());
    assert!(!module.join("app/Events").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("composer.json")).unwrap(),
        COMPOSER
    );
}

#[test]
fn test_module_in_development_mode_is_wired() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("composer.json"), COMPOSER).unwrap();
    fs::create_dir_all(temp.path().join("bootstrap")).unwrap();
    fs::write(temp.path().join("bootstrap/app.php"), BOOTSTRAP).unwrap();

    modcraft(temp.path())
        .env("MODCRAFT_ENVIRONMENT__MODE", "development")
        .args(["module", "--no-refresh"])
        .write_stdin("Billing\nn\nn\nn\nn\n")
        .assert()
        .success();

    let composer = fs::read_to_string(temp.path().join("composer.json")).unwrap();
    assert!(composer.contains(r#""Modules\\Billing\\App\\": "modules/Billing/app/","#));
    assert!(composer.contains(r#""Modules\\Billing\\Domain\\": "modules/Billing/domain/","#));
    let parsed: serde_json::Value = serde_json::from_str(&composer).unwrap();
    assert_eq!(parsed["autoload"]["psr-4"].as_object().unwrap().len(), 3);
    assert_eq!(parsed["autoload-dev"]["psr-4"].as_object().unwrap().len(), 1);

    let bootstrap = fs::read_to_string(temp.path().join("bootstrap/app.php")).unwrap();
    assert!(bootstrap.contains("\\Modules\\Billing\\App\\Providers\\BillingServiceProvider::class,"));
}

#[test]
fn test_controller_from_piped_answers() {
    let temp = TempDir::new().unwrap();
    create_billing(temp.path());

    modcraft(temp.path())
        .arg("controller")
        .write_stdin("Billing\n\nInvoice\n")
        .assert()
        .success();

    let body = fs::read_to_string(
        temp.path()
            .join("modules/Billing/app/Http/Controllers/InvoiceController.php"),
    )
    .unwrap();
    assert!(body.contains("class InvoiceController"));
}

#[test]
fn test_json_report() {
    let temp = TempDir::new().unwrap();
    create_billing(temp.path());

    let output = modcraft(temp.path())
        .args(["job", "--output-format", "json"])
        .write_stdin("Billing\nSendInvoice\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["kind"], "job");
    assert_eq!(report["module"], "Billing");
    assert!(
        report["written_files"][0]
            .as_str()
            .unwrap()
            .ends_with("app/Jobs/SendInvoice.php")
    );
}

#[test]
fn test_quiet_flag_prints_nothing() {
    let temp = TempDir::new().unwrap();
    create_billing(temp.path());

    modcraft(temp.path())
        .args(["--quiet", "http-request"])
        .write_stdin("Billing\n\nStoreInvoiceRequest\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(
        temp.path()
            .join("modules/Billing/app/Http/Requests/StoreInvoiceRequest.php")
            .is_file()
    );
}

#[test]
fn test_list_json() {
    let temp = TempDir::new().unwrap();
    let output = modcraft(temp.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 12);
    assert!(
        rows.iter()
            .any(|r| r["kind"] == "controller" && r["subtree"] == "app/Http/Controllers")
    );
}

#[test]
fn test_list_uses_project_stub_overrides() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("stubs")).unwrap();
    fs::write(temp.path().join("stubs/job.queued.stub"), "<?php // {{ class }}\n").unwrap();

    modcraft(temp.path())
        .args(["list", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("job.queued.stub"))
        .stdout(predicate::str::contains("built-in"));
}

#[test]
fn test_init_then_config_get() {
    let temp = TempDir::new().unwrap();

    modcraft(temp.path()).arg("init").assert().success();
    assert!(temp.path().join("modcraft.toml").is_file());

    let toml = fs::read_to_string(temp.path().join("modcraft.toml")).unwrap();
    fs::write(
        temp.path().join("modcraft.toml"),
        toml.replace("namespace_root = \"Modules\"", "namespace_root = \"Domains\""),
    )
    .unwrap();

    modcraft(temp.path())
        .args(["config", "get", "paths.namespace_root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Domains"));

    modcraft(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modcraft.toml"));
}

#[test]
fn test_shell_completions() {
    let temp = TempDir::new().unwrap();
    modcraft(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modcraft"));
}
