//! Shared fixtures: a project directory with a fake `kamal` that records
//! each invocation instead of deploying anything.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;

/// Appends `<args>|tag=<DEPLOY_TAG>|dir=<basename of cwd>` to `$KAMAL_LOG`,
/// and exits 1 when the arguments equal `$KAMAL_FAIL`.
const FAKE_KAMAL: &str = r#"#!/bin/sh
echo "$*|tag=$DEPLOY_TAG|dir=$(basename "$(pwd)")" >> "$KAMAL_LOG"
if [ -n "$KAMAL_FAIL" ] && [ "$*" = "$KAMAL_FAIL" ]; then
    exit 1
fi
exit 0
"#;

pub struct Project {
    pub dir: assert_fs::TempDir,
}

impl Project {
    /// Backend at the project root, frontend under `web/`, both passing
    /// their prechecks, with `uat` and `staging` environments configured.
    pub fn new() -> Self {
        let dir = assert_fs::TempDir::new().unwrap();
        let script = dir.child("bin/fake-kamal");
        script.write_str(FAKE_KAMAL).unwrap();
        let script = script.path().display().to_string();

        dir.child("config/kamal-easy.yml")
            .write_str(&format!(
                r#"environments:
  uat:
    env_file: .env.uat
  staging:
    env_file: .env.staging
components:
  backend:
    path: .
    kamal_cmd: "sh '{script}' backend"
    container_name_pattern: app-api
    mandatory_files:
      - Dockerfile
      - config/deploy.yml
  frontend:
    path: web
    kamal_cmd: "sh '{script}' frontend"
    mandatory_files:
      - config/deploy.yml
"#
            ))
            .unwrap();

        dir.child("Dockerfile").write_str("FROM ruby:3.3\n").unwrap();
        dir.child("config/deploy.yml").write_str("service: api\n").unwrap();
        dir.child("web/config/deploy.yml")
            .write_str("service: web\n")
            .unwrap();

        Self { dir }
    }

    /// Replace the configuration file.
    pub fn with_config(self, yaml: &str) -> Self {
        self.dir
            .child("config/kamal-easy.yml")
            .write_str(yaml)
            .unwrap();
        self
    }

    pub fn write(&self, relative: &str, content: &str) {
        self.dir.child(relative).write_str(content).unwrap();
    }

    pub fn log_path(&self) -> std::path::PathBuf {
        self.dir.path().join("kamal.log")
    }

    /// kamal-easy running inside the project, logging to `kamal.log`.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("kamal-easy");
        cmd.current_dir(self.dir.path())
            .env("KAMAL_LOG", self.log_path())
            .env_remove("KAMAL_FAIL")
            .env_remove("DEPLOY_TAG")
            .env_remove("KAMAL_EASY_CONFIG");
        cmd
    }

    /// Full recorded lines, in invocation order.
    pub fn invocations(&self) -> Vec<String> {
        match std::fs::read_to_string(self.log_path()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Only the argument part of each recorded line. The arguments may
    /// themselves contain `|`, so the two suffix fields are split off the end.
    pub fn calls(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(|line| line.rsplitn(3, '|').last().unwrap_or_default().to_string())
            .collect()
    }
}
