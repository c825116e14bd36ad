pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod output;

pub use context::AppContext;
