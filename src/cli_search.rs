use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;

use download_catalog_server::catalog::{load_catalog, CatalogQuery, FileRecord};
use download_catalog_server::search::FileFilter;

const CATEGORY_PREFIX: &str = "category:";

fn parse_root_dir(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s).canonicalize()?;
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON catalog file. The embedded catalog is used if omitted.
    #[clap(value_parser = parse_root_dir)]
    pub path: Option<PathBuf>,
}

/// Reads `category:<name> <query>` or a plain `<query>`.
fn parse_input(input: &str) -> FileFilter {
    let input = input.trim();
    match input.strip_prefix(CATEGORY_PREFIX) {
        Some(rest) => {
            let (category, query) = rest.split_once(' ').unwrap_or((rest, ""));
            FileFilter::new(query.trim(), Some(category.to_owned()))
        }
        None => FileFilter::new(input, None),
    }
}

fn print_result(file: &FileRecord) {
    println!(
        "{} v{} [{}] {} - {} - {}",
        file.title,
        file.version,
        file.category,
        file.formatted_release_date(),
        file.formatted_size(),
        file.id,
    );
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    match &cli_args.path {
        Some(path) => println!("Cli Search loading catalog at {}...", path.display()),
        None => println!("Cli Search loading embedded catalog..."),
    }

    let catalog = load_catalog(cli_args.path.as_deref())?;
    let query = CatalogQuery::new(&catalog);
    println!(
        "Done! Categories: {}",
        query.list_categories().join(", ")
    );

    loop {
        println!("Please enter your search query (prefix with \"category:<name> \" to filter):");

        let mut user_input = String::new();
        let read = io::stdin()
            .read_line(&mut user_input)
            .context("Failed to read line")?;
        if read == 0 {
            return Ok(());
        }

        let filter = parse_input(&user_input);
        let results = filter.apply(query.list_all());
        if results.is_empty() {
            println!("No files found matching \"{}\".", user_input.trim());
        } else {
            println!(
                "Found {} matches for \"{}\":\n",
                results.len(),
                user_input.trim()
            );
            for file in results {
                print_result(file);
            }
        }
        println!("\n");
    }
}
