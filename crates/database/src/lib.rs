//! # LMS Database Crate
//!
//! This crate is the record access layer: a high-level, application-specific
//! interface to the relational store. All SQL lives here.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** encapsulates database-specific logic behind a clean API,
//!   hiding the SQL and the driver from the rest of the application.
//! - **Atomic statements:** every operation is a single parameterized
//!   round-trip. The store's key-uniqueness constraints are the only
//!   cross-request consistency guarantee.
//! - **Asynchronous & pooled:** all operations are async and share one
//!   connection pool, constructed once at startup and injected by reference.
//!
//! ## Public API
//!
//! - `connect` / `connect_in_memory`: establish the connection pool.
//! - `run_migrations`: apply the embedded schema migrations.
//! - `seed_demo_data`: idempotent demo-record inserts for fresh deployments.
//! - `DbRepository`: the struct holding the pool and all data access methods.
//! - `DbError`: the error types returned from this crate. `Duplicate` and
//!   `MissingReference` are distinct so callers can map them to specific
//!   HTTP statuses; absent keys are `Ok(None)`, never an error.

pub mod connection;
pub mod error;
pub mod repository;
pub mod seed;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, connect_in_memory, run_migrations};
pub use error::DbError;
pub use repository::DbRepository;
pub use seed::seed_demo_data;
