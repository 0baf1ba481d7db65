//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One shared pool, no Arc<Mutex<Connection>>
//! - Single-member reads and the member list each run one JOIN query
//! - Multi-table writes are all-or-nothing inside one transaction
//! - The schema enforces relationships; no check-then-write

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, ping, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
