use crate::catalog::FileRecord;
use serde::Deserialize;

/// Listing filter: free-text query over title and description, plus an
/// optional exact category. Both conditions must hold.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct FileFilter {
    #[serde(default, rename = "q")]
    pub query: String,

    #[serde(default)]
    pub category: Option<String>,
}

impl FileFilter {
    pub fn new<Q: Into<String>>(query: Q, category: Option<String>) -> FileFilter {
        FileFilter {
            query: query.into(),
            category,
        }
    }

    fn matches_query(&self, file: &FileRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        file.title.to_lowercase().contains(&query)
            || file.description.to_lowercase().contains(&query)
    }

    fn matches_category(&self, file: &FileRecord) -> bool {
        match self.category.as_deref() {
            None | Some("") => true,
            Some(category) => file.category == category,
        }
    }

    pub fn matches(&self, file: &FileRecord) -> bool {
        self.matches_query(file) && self.matches_category(file)
    }

    /// Keeps matching files, in input order.
    pub fn apply<'a, I>(&self, files: I) -> Vec<&'a FileRecord>
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        files.into_iter().filter(|f| self.matches(f)).collect()
    }
}
