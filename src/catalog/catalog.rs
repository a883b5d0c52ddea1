use super::{CatalogQuery, FileRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

const EMBEDDED_FILES_JSON: &str = include_str!("../../data/files.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Non-fatal data integrity issues found while building a catalog.
/// None of them changes how the catalog answers queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    DuplicateId(String),
    DanglingRelation { file_id: String, related_id: String },
    SelfRelation(String),
    EmptyTitle(String),
}

#[derive(Debug)]
pub struct CatalogBuildResult {
    pub catalog: Catalog,
    pub problems: Vec<Problem>,
}

impl CatalogBuildResult {
    /// Human readable summary of the build: problems first, then counts.
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = vec![];
        if !self.problems.is_empty() {
            lines.push(format!("Found {} problems:", self.problems.len()));
            for problem in self.problems.iter() {
                lines.push(format!("- {:?}", problem));
            }
            lines.push(format!(
                "Catalog was built, but check the {} non-fatal issues above.",
                self.problems.len()
            ));
        } else {
            lines.push("Catalog checked, no issues found.".to_owned());
        }
        lines.push(format!(
            "Catalog has {} files in {} categories",
            self.catalog.get_files_count(),
            CatalogQuery::new(&self.catalog).list_categories().len()
        ));
        lines
    }
}

/// The immutable, ordered collection of file records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    files: Vec<FileRecord>,
}

fn find_problems(files: &[FileRecord]) -> Vec<Problem> {
    let mut problems = vec![];
    let all_ids: HashSet<&str> = files.iter().map(|f| f.id.as_str()).collect();
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for file in files {
        if !seen_ids.insert(file.id.as_str()) {
            problems.push(Problem::DuplicateId(file.id.clone()));
        }
        if file.title.trim().is_empty() {
            problems.push(Problem::EmptyTitle(file.id.clone()));
        }
        for related_id in file.related_ids() {
            if related_id == &file.id {
                problems.push(Problem::SelfRelation(file.id.clone()));
            } else if !all_ids.contains(related_id.as_str()) {
                problems.push(Problem::DanglingRelation {
                    file_id: file.id.clone(),
                    related_id: related_id.clone(),
                });
            }
        }
    }
    problems
}

impl Catalog {
    pub fn new(files: Vec<FileRecord>) -> Catalog {
        Catalog { files }
    }

    pub fn build(files: Vec<FileRecord>) -> CatalogBuildResult {
        let problems = find_problems(&files);
        CatalogBuildResult {
            catalog: Catalog::new(files),
            problems,
        }
    }

    pub fn from_json_str(json: &str) -> Result<CatalogBuildResult, CatalogError> {
        let files: Vec<FileRecord> = serde_json::from_str(json)?;
        Ok(Catalog::build(files))
    }

    pub fn from_json_file(path: &Path) -> Result<CatalogBuildResult, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })?;
        Catalog::from_json_str(&text)
    }

    /// Builds the catalog shipped inside the binary.
    pub fn embedded() -> Result<CatalogBuildResult, CatalogError> {
        Catalog::from_json_str(EMBEDDED_FILES_JSON)
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn get_files_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
