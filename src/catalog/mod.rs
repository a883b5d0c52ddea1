mod catalog;
mod file_record;
mod load;
mod query;

pub use catalog::{Catalog, CatalogBuildResult, CatalogError, Problem as LoadCatalogProblem};
pub use file_record::{format_size, FileRecord, InvalidReleaseDate, ReleaseDate};
pub use load::{build_catalog, load_catalog};
pub use query::{CatalogQuery, MAX_RELATED_FILES};
