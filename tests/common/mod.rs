#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};

pub struct Photo<'a> {
    pub lens: Option<&'a str>,
    pub rating: Option<i64>,
    pub pick: i64,
    pub age_days: i64,
}

/// `total` photos for one lens, the first `rated` of them with a 3-star
/// rating, all captured 10 days ago.
pub fn photos(lens: &str, total: usize, rated: usize) -> Vec<Photo<'_>> {
    (0..total)
        .map(|i| Photo {
            lens: Some(lens),
            rating: if i < rated { Some(3) } else { None },
            pick: 0,
            age_days: 10,
        })
        .collect()
}

/// Creates a minimal Lightroom catalog with the photo/EXIF/lens tables
/// the aggregation query touches.
pub fn create_catalog(path: &Path, photos: &[Photo]) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE Adobe_images (
            id_local INTEGER PRIMARY KEY,
            rating INTEGER,
            pick INTEGER NOT NULL DEFAULT 0,
            captureTime TEXT
        );
        CREATE TABLE AgHarvestedExifMetadata (
            id_local INTEGER PRIMARY KEY,
            image INTEGER,
            lensRef INTEGER
        );
        CREATE TABLE AgInternedExifLens (
            id_local INTEGER PRIMARY KEY,
            value TEXT
        );
        "#,
    )
    .unwrap();

    let mut lens_ids: HashMap<&str, i64> = HashMap::new();
    for (i, photo) in photos.iter().enumerate() {
        let id = i as i64 + 1;
        conn.execute(
            "INSERT INTO Adobe_images (id_local, rating, pick, captureTime)
             VALUES (?1, ?2, ?3, datetime('now', ?4))",
            params![id, photo.rating, photo.pick, format!("-{} days", photo.age_days)],
        )
        .unwrap();
        if let Some(lens) = photo.lens {
            let next_id = lens_ids.len() as i64 + 1;
            let lens_id = *lens_ids.entry(lens).or_insert(next_id);
            if lens_id == next_id {
                conn.execute(
                    "INSERT INTO AgInternedExifLens (id_local, value) VALUES (?1, ?2)",
                    params![lens_id, lens],
                )
                .unwrap();
            }
            conn.execute(
                "INSERT INTO AgHarvestedExifMetadata (id_local, image, lensRef)
                 VALUES (?1, ?2, ?3)",
                params![id, id, lens_id],
            )
            .unwrap();
        }
    }
}

/// Plants a project catalog under the `*/2_RESOURCES/Catalog/Catalog.lrcat`
/// convention and returns its path.
pub fn plant_project(root: &Path, project: &str, photos: &[Photo]) -> PathBuf {
    let dir = root.join(project).join("2_RESOURCES").join("Catalog");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("Catalog.lrcat");
    create_catalog(&path, photos);
    path
}
