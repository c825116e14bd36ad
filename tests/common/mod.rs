//! Shared testing utilities for appboot CLI tests.

#![allow(dead_code)]

mod fake_tools;

use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CERT_ROUTE: &str = "/BaltimoreCyberTrustRoot.crt.pem";
pub const TEST_PEM: &str = concat!(
    "-----BEGIN CERTIFICATE-----\n",
    "MIIDdzCCAl+gAwIBAgIEAgAAuTANBgkq\n",
    "-----END CERTIFICATE-----\n"
);

/// Isolated app directory, fake tool chain on `PATH`, and a local certificate server.
pub struct TestContext {
    root: TempDir,
    app_dir: PathBuf,
    bin_dir: PathBuf,
    log_file: PathBuf,
    pub server: mockito::ServerGuard,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let app_dir = root.path().join("site");
        fs::create_dir_all(&app_dir).expect("Failed to create app directory");
        let bin_dir = root.path().join("bin");
        let log_file = root.path().join("tools.log");
        fake_tools::install(&bin_dir, &log_file);

        let ctx = Self { root, app_dir, bin_dir, log_file, server: mockito::Server::new() };
        ctx.write_config("");
        ctx
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.root.path().join("uploads")
    }

    pub fn ssl_dir(&self) -> PathBuf {
        self.root.path().join("ssl")
    }

    pub fn certificate_path(&self) -> PathBuf {
        self.ssl_dir().join("BaltimoreCyberTrustRoot.crt.pem")
    }

    pub fn tesseract_path(&self) -> PathBuf {
        self.bin_dir.join("tesseract")
    }

    /// Write `appboot.toml` with sandboxed directories and the local certificate URL.
    ///
    /// `extra` is appended verbatim and must not repeat the `directories` or
    /// `certificate` tables.
    pub fn write_config(&self, extra: &str) {
        self.write_config_with_root("", extra);
    }

    /// Like `write_config`, with `root` placed ahead of the first table.
    pub fn write_config_with_root(&self, root: &str, extra: &str) {
        let content = format!(
            r#"{}
[directories]
upload = "{}"
ssl = "{}"

[certificate]
url = "{}{}"
timeout_secs = 5

{}"#,
            root,
            self.upload_dir().display(),
            self.ssl_dir().display(),
            self.server.url(),
            CERT_ROUTE,
            extra
        );
        fs::write(self.app_dir.join("appboot.toml"), content).expect("Failed to write config");
    }

    pub fn remove_config(&self) {
        fs::remove_file(self.app_dir.join("appboot.toml")).expect("Failed to remove config");
    }

    /// Requirements file plus `app/main.py`.
    pub fn write_app(&self) {
        fs::write(self.app_dir.join("requirements.txt"), "fastapi\nuvicorn\n")
            .expect("Failed to write requirements");
        fs::create_dir_all(self.app_dir.join("app")).expect("Failed to create app package");
        fs::write(self.app_dir.join("app/main.py"), "app = None\n")
            .expect("Failed to write app/main.py");
    }

    pub fn write_requirements_only(&self) {
        fs::write(self.app_dir.join("requirements.txt"), "fastapi\n")
            .expect("Failed to write requirements");
    }

    pub fn write_root_main(&self) {
        fs::write(self.app_dir.join("main.py"), "app = None\n").expect("Failed to write main.py");
    }

    pub fn write_certificate(&self, content: &str) {
        fs::create_dir_all(self.ssl_dir()).expect("Failed to create ssl dir");
        fs::write(self.certificate_path(), content).expect("Failed to write certificate");
    }

    /// Mock for the certificate download expected `hits` times.
    pub fn certificate_mock(&mut self, hits: usize) -> mockito::Mock {
        self.server
            .mock("GET", CERT_ROUTE)
            .with_status(200)
            .with_body(TEST_PEM)
            .expect(hits)
            .create()
    }

    /// Build a command for invoking the compiled `appboot` binary in the app directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("appboot").expect("Failed to locate appboot binary");
        let path = match env::var_os("PATH") {
            Some(existing) => {
                let mut entries = vec![self.bin_dir.clone()];
                entries.extend(env::split_paths(&existing));
                env::join_paths(entries).expect("Failed to join PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };
        cmd.current_dir(&self.app_dir)
            .env("PATH", path)
            .env("TESSERACT_CMD", self.tesseract_path())
            .env_remove("PYTHONPATH")
            .env_remove("APPBOOT_CONFIG")
            .env_remove("APPBOOT_TIER")
            .env_remove("APPBOOT_APP_DIR")
            .env_remove("FAKE_PIP_FAIL")
            .env_remove("FAKE_APT_FAIL")
            .env_remove("FAKE_MISSING_MODULES")
            .env_remove("FAKE_TESSERACT_HANG")
            .env_remove("FAKE_SERVER_EXIT");
        cmd
    }

    /// Everything the fake tools were invoked with, one line per call.
    pub fn tool_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }
}
