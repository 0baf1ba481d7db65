//! gymctl-server: HTTP API over a gym-membership database
//!
//! Members are registered, read, updated, patched and deleted together with
//! their emergency contact and membership. Membership plans are looked up by
//! name and never written.

pub mod db;
pub mod http;
pub mod models;

pub use db::create_pool;
pub use http::{build_router, run_server, AppState, ServerConfig};
