// src/cli/check.rs
// Headless summary of a catalog: does it load, which schema it had, what it holds.

use std::process::ExitCode;

use crate::catalog::{CatalogPaths, CatalogStore};

pub fn summarize(store: &CatalogStore) -> Vec<String> {
    let doc = store.document();
    let mut lines = vec![format!(
        "Store: {}",
        doc.store_name().unwrap_or("(unnamed)")
    )];
    for category in &doc.categories {
        let featured = category.products.iter().filter(|p| p.featured).count();
        lines.push(format!(
            "  [{}] {}: {} products ({} featured)",
            category.id,
            category.name,
            category.products.len(),
            featured
        ));
    }
    lines.push(format!("Portfolio: {} items", doc.portfolio.len()));
    lines
}

pub fn run(paths: CatalogPaths) -> ExitCode {
    println!("=== Catalog check: {} ===", paths.document().display());
    let mut store = CatalogStore::new(paths);
    match store.load() {
        Ok(report) => {
            println!("Schema: {:?}{}", report.from, if report.patched { " (upgraded in memory)" } else { "" });
            for line in summarize(&store) {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn summary_of_default_catalog() {
        let dir = tempdir().unwrap();
        let mut store = CatalogStore::new(CatalogPaths::new(dir.path()));
        store.load().unwrap();
        assert_eq!(
            summarize(&store),
            vec!["Store: Candid Craft".to_string(), "Portfolio: 0 items".to_string()]
        );
    }
}
