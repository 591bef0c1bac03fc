//! taskshop-server: CRUD HTTP API over users, tasks and products
//!
//! Exposes the data layer over JSON routes and provides the one-shot
//! seeding job that repopulates the tables and writes export files.

pub mod db;
pub mod http;
pub mod models;
pub mod seed;

pub use db::{DbError, MemoryStore, PgStore, Store};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
pub use seed::{SeedError, SeedReport};
