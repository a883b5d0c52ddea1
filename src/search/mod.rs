mod file_filter;

pub use file_filter::FileFilter;
