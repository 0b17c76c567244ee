//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&mut PgConnection` as the first argument, so every call runs on the
//! caller's storage session.

pub mod sprintgoal_repo;

pub use sprintgoal_repo::SprintgoalRepo;
