//! Database layer - connection pool, schema, repositories and stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Rely on DB constraints, map violations - no check-then-insert
//! - Handlers and the seed job only see the `Store` trait

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use store::{PgStore, Store};
