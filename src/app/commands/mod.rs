pub mod capabilities;
pub mod certificate;
pub mod check;
pub mod dependencies;
pub mod directories;
pub mod entry_point;
pub mod environment;
pub mod handoff;
pub mod packages;
pub mod plan;
pub mod sequence;
