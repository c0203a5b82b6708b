//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for task storage.
//! - Isolate SQLite query details from controller orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - Field validation is not a repository concern; the controller decides
//!   what may be persisted.

pub mod task_repo;
