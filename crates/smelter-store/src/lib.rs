//! Smelter Store crate - the immutable in-memory batch record set.
//!
//! Holds the seed dataset and the two lookup indices (by batch id and by
//! timestamp), built once at startup and read without locking afterwards.

pub mod seed;
pub mod store;

pub use seed::seed_records;
pub use store::BatchStore;
