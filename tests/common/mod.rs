//! Shared testing utilities for deskbuild CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the project root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `deskbuild` binary in the project root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("deskbuild").expect("Failed to locate deskbuild binary");
        cmd.current_dir(self.root());
        cmd
    }

    /// Write `deskbuild.toml` overriding only the build command.
    pub fn write_settings(&self, command: &str) {
        let content = format!("[build]\ncommand = \"{}\"\n", command);
        fs::write(self.root().join("deskbuild.toml"), content).unwrap();
    }

    /// Write the desktop entry-point HTML at the project root.
    pub fn write_entry_point(&self) {
        fs::write(self.root().join("index-cv.html"), "<html>desktop entry</html>").unwrap();
    }

    /// Materialize one versioned build under `dist/simulatorvue/`.
    pub fn write_versioned_build(&self, version: &str) {
        let index = self.versioned_index(version);
        fs::create_dir_all(index.parent().unwrap()).unwrap();
        fs::write(&index, format!("<html>{version} build</html>")).unwrap();
    }

    /// Write `src-tauri/tauri.conf.json` with the given `frontendDist`, or
    /// without a `build.frontendDist` field when `None`.
    pub fn write_tauri_conf(&self, frontend_dist: Option<&str>) {
        let tauri_dir = self.root().join("src-tauri");
        fs::create_dir_all(&tauri_dir).unwrap();
        let content = match frontend_dist {
            Some(value) => format!(r#"{{"build": {{"frontendDist": "{value}"}}}}"#),
            None => r#"{"build": {}}"#.to_string(),
        };
        fs::write(tauri_dir.join("tauri.conf.json"), content).unwrap();
    }

    /// Complete fixture: entry point, v0 build, valid Tauri configuration.
    pub fn write_full_fixture(&self) {
        // `echo ok` is a no-op build that both `sh -c` and `cmd /C` accept.
        self.write_settings("echo ok");
        self.write_entry_point();
        self.write_versioned_build("v0");
        self.write_tauri_conf(Some("../dist"));
    }

    pub fn versioned_index(&self, version: &str) -> PathBuf {
        self.root().join("dist").join("simulatorvue").join(version).join("index.html")
    }

    pub fn root_index(&self) -> PathBuf {
        self.root().join("dist").join("index.html")
    }

    pub fn read_root_index(&self) -> String {
        fs::read_to_string(self.root_index()).unwrap()
    }
}
