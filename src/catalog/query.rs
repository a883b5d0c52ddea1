//! Read-only queries over a [`Catalog`].

use super::{Catalog, FileRecord};
use std::collections::HashSet;

/// Upper bound on the number of files returned by [`CatalogQuery::get_related`].
pub const MAX_RELATED_FILES: usize = 5;

#[derive(Clone, Copy)]
pub struct CatalogQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(catalog: &'a Catalog) -> CatalogQuery<'a> {
        CatalogQuery { catalog }
    }

    pub fn list_all(&self) -> &'a [FileRecord] {
        self.catalog.files()
    }

    /// First record with the given id, in catalog order.
    pub fn get_by_id(&self, id: &str) -> Option<&'a FileRecord> {
        self.catalog.files().iter().find(|f| f.id == id)
    }

    /// Distinct categories in order of first occurrence.
    pub fn list_categories(&self) -> Vec<&'a str> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.catalog
            .files()
            .iter()
            .map(|f| f.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// Files related to `id`, never including `id` itself.
    ///
    /// Explicitly linked files come first in catalog order. When none of the
    /// links resolve to another file, the rest of the category is returned
    /// instead, newest release first. The result is capped at
    /// [`MAX_RELATED_FILES`]. An unknown id yields no related files.
    pub fn get_related(&self, id: &str) -> Vec<&'a FileRecord> {
        let current = match self.get_by_id(id) {
            Some(file) => file,
            None => return vec![],
        };
        let files = self.catalog.files();

        let related_ids = current.related_ids();
        let mut related: Vec<&FileRecord> = if related_ids.is_empty() {
            vec![]
        } else {
            files
                .iter()
                .filter(|f| f.id != id && related_ids.contains(&f.id))
                .collect()
        };

        if related.is_empty() {
            related = files
                .iter()
                .filter(|f| f.category == current.category && f.id != id)
                .collect();
            // Stable, so equal dates keep catalog order.
            related.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        }

        related.truncate(MAX_RELATED_FILES);
        related
    }
}
