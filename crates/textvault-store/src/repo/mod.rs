//! Repository layer
//!
//! Persists named blobs to the files table.

mod blob_repo;

pub use blob_repo::BlobRepo;
