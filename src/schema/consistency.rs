//! Cross-translation structural checks.
//!
//! Every language file must list the same hotspot ids in the same order with
//! identical `coords` and `shape`. This is a build-time guard used by the
//! offline validator, not by the runtime loader.

use crate::error::ConsistencyError;
use crate::models::HotspotDataFile;

/// A validated data file together with the name it was read from.
#[derive(Debug, Clone)]
pub struct NamedDataFile {
    pub file_name: String,
    pub data: HotspotDataFile,
}

impl NamedDataFile {
    pub fn new(file_name: impl Into<String>, data: HotspotDataFile) -> Self {
        Self {
            file_name: file_name.into(),
            data,
        }
    }
}

/// Compare every file against the first one.
pub fn check_consistency(files: &[NamedDataFile]) -> Result<(), ConsistencyError> {
    let Some((baseline, rest)) = files.split_first() else {
        return Err(ConsistencyError::NoFiles);
    };
    let expected = baseline.data.hotspots.len();

    for entry in rest {
        let actual = entry.data.hotspots.len();
        if actual != expected {
            return Err(ConsistencyError::CountMismatch {
                file: entry.file_name.clone(),
                actual,
                expected,
            });
        }

        for (index, (base, other)) in baseline
            .data
            .hotspots
            .iter()
            .zip(entry.data.hotspots.iter())
            .enumerate()
        {
            if base.id != other.id {
                return Err(ConsistencyError::OrderMismatch {
                    file: entry.file_name.clone(),
                    index,
                    expected: base.id.clone(),
                    received: other.id.clone(),
                });
            }
            if base.coords != other.coords {
                return Err(ConsistencyError::CoordsMismatch {
                    id: base.id.clone(),
                    baseline: baseline.file_name.clone(),
                    file: entry.file_name.clone(),
                });
            }
            if base.shape != other.shape {
                return Err(ConsistencyError::ShapeMismatch {
                    id: base.id.clone(),
                    baseline: baseline.file_name.clone(),
                    file: entry.file_name.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coords, Hotspot, ResponsiveCoords, Shape};

    fn hotspot(id: &str) -> Hotspot {
        Hotspot {
            id: id.to_string(),
            title: format!("Title {}", id),
            short_title: None,
            description: "Description".to_string(),
            aria_label: "Label".to_string(),
            coords: ResponsiveCoords::new(Coords::center(10.0, 10.0)),
            shape: Shape::Circle { radius: 3.0 },
            media: None,
            categories: vec![crate::models::Category::Physical],
            severity: None,
            links: None,
            updated_at: None,
        }
    }

    fn file(name: &str, language: &str, ids: &[&str]) -> NamedDataFile {
        NamedDataFile::new(
            name,
            HotspotDataFile {
                language: language.to_string(),
                updated_at: "2025-02-11".to_string(),
                hotspots: ids.iter().map(|id| hotspot(id)).collect(),
            },
        )
    }

    #[test]
    fn test_no_files() {
        assert_eq!(check_consistency(&[]), Err(ConsistencyError::NoFiles));
    }

    #[test]
    fn test_single_file_is_consistent() {
        assert!(check_consistency(&[file("hotspots.en.json", "en", &["a", "b"])]).is_ok());
    }

    #[test]
    fn test_translated_text_may_differ() {
        let en = file("hotspots.en.json", "en", &["a", "b"]);
        let mut lv = file("hotspots.lv.json", "lv", &["a", "b"]);
        lv.data.hotspots[0].title = "Virsraksts".to_string();
        assert!(check_consistency(&[en, lv]).is_ok());
    }

    #[test]
    fn test_count_mismatch() {
        let en = file("hotspots.en.json", "en", &["a", "b"]);
        let lv = file("hotspots.lv.json", "lv", &["a"]);
        assert!(matches!(
            check_consistency(&[en, lv]),
            Err(ConsistencyError::CountMismatch {
                actual: 1,
                expected: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_order_mismatch() {
        let en = file("hotspots.en.json", "en", &["a", "b"]);
        let lv = file("hotspots.lv.json", "lv", &["b", "a"]);
        let err = check_consistency(&[en, lv]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "File \"hotspots.lv.json\" hotspot order mismatch at position 0: expected \"a\", received \"b\""
        );
    }

    #[test]
    fn test_coords_mismatch() {
        let en = file("hotspots.en.json", "en", &["a"]);
        let mut lv = file("hotspots.lv.json", "lv", &["a"]);
        lv.data.hotspots[0].coords = ResponsiveCoords::new(Coords::center(11.0, 10.0));
        assert!(matches!(
            check_consistency(&[en, lv]),
            Err(ConsistencyError::CoordsMismatch { .. })
        ));
    }

    #[test]
    fn test_shape_mismatch() {
        let en = file("hotspots.en.json", "en", &["a"]);
        let mut lv = file("hotspots.lv.json", "lv", &["a"]);
        lv.data.hotspots[0].shape = Shape::Circle { radius: 4.0 };
        assert!(matches!(
            check_consistency(&[en, lv]),
            Err(ConsistencyError::ShapeMismatch { .. })
        ));
    }
}
