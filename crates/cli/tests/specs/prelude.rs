//! Shared helpers for CLI specs.

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use serde_json::Value;

/// Scratch working directory for one spec
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty directory: no config, no data files
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a file inside the default `data/` directory
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.dir.path().join("data").join(name)
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// A kiosk command running in this project with a clean environment
    pub fn kiosk(&self) -> Kiosk {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_kiosk"));
        cmd.current_dir(self.dir.path())
            .env_remove("KIOSK_DATA_DIR")
            .env_remove("KIOSK_ADMIN_PASSWORD")
            .env_remove("RUST_LOG");
        Kiosk { cmd }
    }

    /// Run `kiosk <args> --format json` and parse stdout
    pub fn json(&self, args: &[&str]) -> Value {
        let out = self.kiosk().args(args).args(&["--format", "json"]).passes();
        serde_json::from_str(&out.stdout()).expect("stdout is not JSON")
    }
}

pub struct Kiosk {
    cmd: Command,
}

impl Kiosk {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> Run {
        Run {
            assert: self.cmd.assert().success(),
        }
    }

    pub fn fails(mut self) -> Run {
        Run {
            assert: self.cmd.assert().failure(),
        }
    }
}

pub struct Run {
    assert: Assert,
}

impl Run {
    pub fn stdout_has(self, text: &str) -> Self {
        Self {
            assert: self.assert.stdout(contains(text)),
        }
    }

    pub fn stdout_lacks(self, text: &str) -> Self {
        Self {
            assert: self.assert.stdout(contains(text).not()),
        }
    }

    pub fn stderr_has(self, text: &str) -> Self {
        Self {
            assert: self.assert.stderr(contains(text)),
        }
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.assert.get_output().stdout).into_owned()
    }
}

/// Ids of a JSON array of objects, in order
pub fn ids(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_u64().expect("id"))
        .collect()
}
