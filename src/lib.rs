//! Download Catalog Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod config;
pub mod search;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, Catalog, CatalogQuery, FileRecord};
pub use search::FileFilter;
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
