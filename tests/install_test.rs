use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Run kamal-easy with given args.
fn kamal_easy() -> Command {
    cargo_bin_cmd!("kamal-easy")
}

#[test]
fn install_creates_default_config() {
    let dir = assert_fs::TempDir::new().unwrap();

    kamal_easy()
        .current_dir(dir.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config/kamal-easy.yml"));

    let config = dir.child("config/kamal-easy.yml");
    config.assert(predicate::path::exists());

    let content = std::fs::read_to_string(config.path()).unwrap();
    for expected in ["uat:", "staging:", "production:", "backend:", "frontend:"] {
        assert!(content.contains(expected), "missing {expected}");
    }
}

#[test]
fn install_twice_leaves_file_untouched() {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("config/kamal-easy.yml");
    config.write_str("components: {}\n").unwrap();

    kamal_easy()
        .current_dir(dir.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    config.assert("components: {}\n");
}

#[test]
fn install_second_run_is_byte_identical() {
    let dir = assert_fs::TempDir::new().unwrap();

    kamal_easy()
        .current_dir(dir.path())
        .arg("install")
        .assert()
        .success();
    let first = std::fs::read(dir.path().join("config/kamal-easy.yml")).unwrap();

    kamal_easy()
        .current_dir(dir.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    let second = std::fs::read(dir.path().join("config/kamal-easy.yml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn install_honors_config_flag() {
    let dir = assert_fs::TempDir::new().unwrap();

    kamal_easy()
        .current_dir(dir.path())
        .args(["install", "--config", "deploy/easy.yml"])
        .assert()
        .success();

    dir.child("deploy/easy.yml")
        .assert(predicate::path::exists());
    dir.child("config/kamal-easy.yml")
        .assert(predicate::path::missing());
}

#[test]
fn deploy_without_config_points_to_install() {
    let dir = assert_fs::TempDir::new().unwrap();

    kamal_easy()
        .current_dir(dir.path())
        .args(["deploy", "--backend"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("kamal-easy install"));
}

#[test]
fn malformed_config_is_reported() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("config/kamal-easy.yml")
        .write_str("components: [unclosed\n")
        .unwrap();

    kamal_easy()
        .current_dir(dir.path())
        .args(["deploy", "--backend"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));
}
