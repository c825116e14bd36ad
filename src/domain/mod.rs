pub mod capability;
pub mod config;
pub mod entry_point;
pub mod error;
pub mod exports;
pub mod launch;
pub mod layout;
pub mod step;
pub mod tier;

pub use capability::{CapabilityKind, CapabilityProbe, CapabilityReport};
pub use config::{BootstrapConfig, CONFIG_FILE_NAME, parse_config_content};
pub use entry_point::{EntryLocation, EntryPoint};
pub use error::AppError;
pub use exports::EnvExports;
pub use launch::LaunchPlan;
pub use layout::ResolvedLayout;
pub use step::{BootstrapReport, FailurePolicy, StepKind, StepRecord, StepStatus};
pub use tier::PrivilegeTier;
