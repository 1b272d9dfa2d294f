//! Flat-file persistence for the apparel collection.

pub mod error;
pub mod file;

pub use error::StoreError;
pub use file::FileStore;
