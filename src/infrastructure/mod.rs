//! `CatalogSource` adapters.

pub mod csv_file;
pub mod in_memory;
pub mod json_file;

use crate::domain::ports::CatalogSourceBox;
use std::path::Path;

/// Picks a catalog adapter from the file extension: `.json` is JSON,
/// anything else is CSV.
pub fn catalog_for_path(path: &Path) -> CatalogSourceBox {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Box::new(json_file::JsonFileCatalog::new(path))
    } else {
        Box::new(csv_file::CsvFileCatalog::new(path))
    }
}
