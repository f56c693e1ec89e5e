//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&mut PgConnection` as the first argument. Every method
//! issues exactly one parameterized statement.

pub mod museum_repo;

pub use museum_repo::MuseumRepo;
