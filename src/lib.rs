//! appboot: provision an App Service container and hand off to the ASGI server.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    BootstrapOptions, CheckOutcome, PlanOutput, Settings, check, env, plan, resolve, run,
};
pub use domain::{AppError, PrivilegeTier};
