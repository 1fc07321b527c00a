//! Console shortcut and full dispatch through the binary with `--dry-run`.

#![allow(clippy::expect_used)]

use predicates::prelude::*;
use tempfile::TempDir;

use crate::cli_tests::fleetop;

const SNAPSHOT: &str = r#"{
  "production": [
    { "type": "app-1a", "address": "ec2-1" },
    { "type": "workers-2b", "address": "ec2-2" }
  ]
}"#;

fn home_with_snapshot() -> TempDir {
    let home = TempDir::new().expect("tempdir");
    std::fs::write(home.path().join("inventory.json"), SNAPSHOT).expect("write snapshot");
    home
}

#[test]
fn test_console_shortcut_prints_console_command() {
    let home = TempDir::new().expect("tempdir");
    fleetop(&home)
        .args(["--dry-run", "console", "staging"])
        .assert()
        .success()
        .stdout("ey console -e staging -c fleet\n");
}

#[test]
fn test_two_arguments_require_console() {
    let home = TempDir::new().expect("tempdir");
    fleetop(&home)
        .args(["--dry-run", "ssh", "production"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("needs an instance class"));
}

#[test]
fn test_ssh_apps_targets_app_host() {
    let home = home_with_snapshot();
    fleetop(&home)
        .args(["--dry-run", "ssh", "production", "apps"])
        .assert()
        .success()
        .stdout("ssh -t deploy@ec2-1 \"cd /data/app/current && exec \\$SHELL -l\"\n");
}

#[test]
fn test_logs_images_tails_image_processor_on_workers() {
    let home = home_with_snapshot();
    fleetop(&home)
        .args(["--dry-run", "logs", "production", "images"])
        .assert()
        .success()
        .stdout("ssh -t deploy@ec2-2 \"tail -f /data/app/current/log/image_processor.log\"\n");
}

#[test]
fn test_htop_ignores_instance_class() {
    let home = home_with_snapshot();
    fleetop(&home)
        .args(["--dry-run", "htop", "production", "thumbs"])
        .assert()
        .success()
        .stdout("ey ssh \"/usr/bin/htop\" -t --app-servers -e production -c fleet\n");
}

#[test]
fn test_config_overrides_user_path_and_log_files() {
    let home = home_with_snapshot();
    std::fs::write(
        home.path().join("config.yaml"),
        "deploy_user: ops\ndeploy_path: /srv/shop/current\nlog_files:\n  apps: unicorn.log\n",
    )
    .expect("write config");
    fleetop(&home)
        .args(["--dry-run", "logs", "production", "apps"])
        .assert()
        .success()
        .stdout("ssh -t ops@ec2-1 \"tail -f /srv/shop/current/log/unicorn.log\"\n");
}

#[test]
fn test_missing_log_file_entry_is_configuration_error() {
    let home = home_with_snapshot();
    std::fs::write(home.path().join("config.yaml"), "log_files:\n  apps: app.log\n")
        .expect("write config");
    fleetop(&home)
        .args(["--dry-run", "logs", "production", "sites"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No log file configured for instance class 'sites'"));
}

#[test]
fn test_missing_snapshot_asks_for_refresh() {
    let home = TempDir::new().expect("tempdir");
    fleetop(&home)
        .args(["--dry-run", "ssh", "production", "apps"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No inventory snapshot"))
        .stderr(predicate::str::contains("no arguments to refresh"));
}

#[test]
fn test_corrupt_snapshot_is_reported() {
    let home = TempDir::new().expect("tempdir");
    std::fs::write(home.path().join("inventory.json"), "not json").expect("write snapshot");
    fleetop(&home)
        .args(["--dry-run", "ssh", "production", "apps"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is corrupt"));
}

#[test]
fn test_snapshot_flag_overrides_env() {
    let home = TempDir::new().expect("tempdir");
    let other = home.path().join("other.json");
    std::fs::write(&other, SNAPSHOT).expect("write snapshot");
    fleetop(&home)
        .args(["--dry-run", "--snapshot"])
        .arg(&other)
        .args(["ssh", "production", "sites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy@ec2-2"));
}

#[test]
fn test_snapshot_address_with_shell_syntax_is_rejected() {
    let home = TempDir::new().expect("tempdir");
    std::fs::write(
        home.path().join("inventory.json"),
        r#"{"production":[{"type":"app-1a","address":"ec2-1;rm -rf ~"}]}"#,
    )
    .expect("write snapshot");
    fleetop(&home)
        .args(["--dry-run", "ssh", "production", "apps"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid address"));
}
