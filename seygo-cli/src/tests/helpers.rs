//! Test helpers for building temporary CLI workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use rstest::fixture;
use serde_json::{Value, json};
use tempfile::TempDir;

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
        write_utf8(&path, &payload);
        path
    }
}

#[fixture]
pub(super) fn workspace() -> Workspace {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
    Workspace { _dir: dir, root }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// A small catalogue around Galle with two beaches, a fort and a museum.
pub(super) fn catalogue_json() -> Value {
    json!([
        {
            "id": "galle-fort",
            "name": "Galle Fort",
            "category": "historic site",
            "tags": ["fort", "ramparts"],
            "latitude": 6.0269,
            "longitude": 80.2170,
            "avg_rating": 4.8,
            "review_count": 21000
        },
        {
            "id": "unawatuna-beach",
            "name": "Unawatuna Beach",
            "category": "beach",
            "tags": ["swimming", "surf"],
            "latitude": 6.0096,
            "longitude": 80.2496,
            "avg_rating": 4.5,
            "review_count": 9000
        },
        {
            "place_id": "hikkaduwa-beach",
            "name": "Hikkaduwa Beach",
            "category": "beach",
            "tags": ["surf", "coral", "snorkeling"],
            "latitude": 6.1395,
            "longitude": 80.1063,
            "avg_rating": 4.4,
            "review_count": 7400,
            "description": "Reef beach known for surf breaks"
        },
        {
            "id": "colombo-museum",
            "name": "Colombo National Museum",
            "category": "museum",
            "latitude": 6.9106,
            "longitude": 79.8610,
            "avg_rating": 4.6,
            "review_count": 5200
        }
    ])
}
