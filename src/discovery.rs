use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// A discovered project catalog. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct CatalogRef {
    pub project_name: String,
    pub path: PathBuf,
}

/// Recursively finds project catalogs under `root`.
///
/// A catalog lives at `<project>/2_RESOURCES/Catalog/Catalog.lrcat`; the
/// project name is the directory three levels above the catalog file.
/// Returns an empty vec when nothing matches. Entries are sorted by file
/// name at each directory level so discovery order is deterministic.
pub fn find_catalogs(root: &Path) -> Vec<CatalogRef> {
    let mut builder = WalkBuilder::new(root);
    // Plain filesystem walk: ignore files and hidden-dir rules must not
    // hide catalogs.
    builder.standard_filters(false);
    builder.follow_links(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    let mut out = Vec::new();
    for dent in builder.build() {
        let dent = match dent {
            Ok(d) => d,
            Err(_) => continue,
        };
        let path = dent.path();
        if !path.is_file() || !has_catalog_suffix(path) {
            continue;
        }
        let Some(project_name) = project_name_for(path) else {
            continue;
        };
        out.push(CatalogRef {
            project_name,
            path: path.to_path_buf(),
        });
    }

    out
}

fn has_catalog_suffix(path: &Path) -> bool {
    let mut components = path.components().rev().map(|c| c.as_os_str());
    components.next() == Some("Catalog.lrcat".as_ref())
        && components.next() == Some("Catalog".as_ref())
        && components.next() == Some("2_RESOURCES".as_ref())
}

/// The directory directly above `2_RESOURCES`.
fn project_name_for(path: &Path) -> Option<String> {
    let project_dir = path.ancestors().nth(3)?;
    Some(project_dir.file_name()?.to_string_lossy().into_owned())
}
