//! Command implementations for gymctl CLI

pub mod plans;
pub mod serve;

pub use plans::run_plans;
pub use serve::run_serve;
