//! Environment variables handed to the application process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::AppError;

pub const PYTHONPATH: &str = "PYTHONPATH";
pub const OCR_TEMP_FOLDER: &str = "OCR_TEMP_FOLDER";
pub const UPLOAD_FOLDER: &str = "UPLOAD_FOLDER";
pub const SSL_CERT_PATH: &str = "SSL_CERT_PATH";
pub const TESSERACT_CMD: &str = "TESSERACT_CMD";

/// Ordered set of exported variables. Setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvExports {
    vars: Vec<(String, String)>,
}

impl EnvExports {
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.vars.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Render as POSIX `export` lines with single-quoted values.
    pub fn to_shell(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("export {}='{}'\n", key, value.replace('\'', r"'\''")))
            .collect()
    }
}

impl Serialize for EnvExports {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.vars.len()))?;
        for (key, value) in &self.vars {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Prepend `app_dir` to an existing `PYTHONPATH`, dropping empty entries and duplicates of it.
pub fn augment_python_path(
    app_dir: &Path,
    existing: Option<&OsString>,
) -> Result<String, AppError> {
    let mut entries: Vec<PathBuf> = vec![app_dir.to_path_buf()];
    if let Some(existing) = existing {
        entries.extend(
            std::env::split_paths(existing)
                .filter(|entry| !entry.as_os_str().is_empty() && entry != app_dir),
        );
    }

    let joined = std::env::join_paths(&entries).map_err(|err| {
        AppError::config_error(format!("Cannot build {}: {}", PYTHONPATH, err))
    })?;
    joined.into_string().map_err(|raw| {
        AppError::config_error(format!("{} is not valid UTF-8: {:?}", PYTHONPATH, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn set_replaces_in_place() {
        let mut exports = EnvExports::default();
        exports.set(UPLOAD_FOLDER, "/tmp/a");
        exports.set(SSL_CERT_PATH, "/opt/ssl/root.pem");
        exports.set(UPLOAD_FOLDER, "/tmp/b");

        let names: Vec<&str> = exports.iter().map(|(key, _)| key).collect();
        assert_eq!(names, vec![UPLOAD_FOLDER, SSL_CERT_PATH]);
        assert_eq!(exports.get(UPLOAD_FOLDER), Some("/tmp/b"));
    }

    #[test]
    fn shell_rendering_quotes_values() {
        let mut exports = EnvExports::default();
        exports.set(UPLOAD_FOLDER, "/tmp/it's here");

        assert_eq!(exports.to_shell(), "export UPLOAD_FOLDER='/tmp/it'\\''s here'\n");
    }

    #[test]
    fn python_path_without_existing_value_is_app_dir() {
        let value = augment_python_path(Path::new("/home/site/wwwroot"), None).unwrap();
        assert_eq!(value, "/home/site/wwwroot");
    }

    #[test]
    fn python_path_keeps_existing_entries_after_app_dir() {
        let existing = OsString::from("/opt/lib:/home/site/wwwroot::/usr/lib/python3");
        let value = augment_python_path(Path::new("/home/site/wwwroot"), Some(&existing)).unwrap();
        assert_eq!(value, "/home/site/wwwroot:/opt/lib:/usr/lib/python3");
    }

    fn path_entry() -> impl Strategy<Value = String> {
        "/[a-z]{1,8}(/[a-z0-9_]{1,8}){0,3}"
    }

    proptest! {
        #[test]
        fn app_dir_is_first_and_unique(
            app_dir in path_entry(),
            existing in proptest::collection::vec(path_entry(), 0..6),
        ) {
            let raw = OsString::from(existing.join(":"));
            let value = augment_python_path(Path::new(&app_dir), Some(&raw)).unwrap();
            let entries: Vec<&str> = value.split(':').collect();

            prop_assert_eq!(entries[0], app_dir.as_str());
            prop_assert_eq!(entries.iter().filter(|entry| **entry == app_dir).count(), 1);

            let kept: Vec<&str> =
                existing.iter().map(String::as_str).filter(|entry| *entry != app_dir).collect();
            prop_assert_eq!(&entries[1..], kept.as_slice());
        }
    }
}
