use serde::Serialize;

pub const ROOT_ENTRY_FILE: &str = "main.py";
pub const PACKAGE_DIR: &str = "app";

/// Where the entry module was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryLocation {
    /// `<app_dir>/main.py`
    Root,
    /// `<app_dir>/app/main.py`
    Package,
    /// Neither file exists; configured fallback module.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPoint {
    pub module: String,
    pub location: EntryLocation,
}

impl EntryPoint {
    pub fn root() -> Self {
        Self { module: "main".to_string(), location: EntryLocation::Root }
    }

    pub fn package() -> Self {
        Self { module: format!("{}.main", PACKAGE_DIR), location: EntryLocation::Package }
    }

    pub fn fallback(module: &str) -> Self {
        Self { module: module.to_string(), location: EntryLocation::Fallback }
    }

    /// `module:object` target understood by ASGI servers.
    pub fn asgi_target(&self, app_object: &str) -> String {
        format!("{}:{}", self.module, app_object)
    }
}
