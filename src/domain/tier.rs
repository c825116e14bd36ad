use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

/// Filesystem privilege assumed by the deployment.
///
/// `System` may install OS packages and write under `/opt` and `/tmp`.
/// `Constrained` keeps everything under the application directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrivilegeTier {
    System,
    #[default]
    Constrained,
}

impl PrivilegeTier {
    pub fn label(self) -> &'static str {
        match self {
            PrivilegeTier::System => "system",
            PrivilegeTier::Constrained => "constrained",
        }
    }

    pub fn can_install_packages(self) -> bool {
        matches!(self, PrivilegeTier::System)
    }
}

impl fmt::Display for PrivilegeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrivilegeTier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(PrivilegeTier::System),
            "constrained" => Ok(PrivilegeTier::Constrained),
            _ => Err(AppError::InvalidTier(s.to_string())),
        }
    }
}

impl Serialize for PrivilegeTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PrivilegeTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
