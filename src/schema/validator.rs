//! Schema validation for hotspot data files.
//!
//! Walks raw JSON and builds the typed model, collecting every violation with
//! its field path instead of stopping at the first one. Unknown keys are
//! ignored; absent optional fields are valid.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationIssue};
use crate::models::{
    Anchor, Breakpoint, Category, Coords, Hotspot, HotspotDataFile, Link, Media, Point,
    ResponsiveCoords, Severity, Shape,
};

/// Minimum number of hotspots in every data file.
pub const MIN_HOTSPOTS: usize = 12;

/// Minimum polygon vertex count.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Dotted/indexed path to a JSON field, rendered like `hotspots[2].shape.radius`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Validate raw parsed JSON into a [`HotspotDataFile`].
pub fn validate(data: &Value) -> Result<HotspotDataFile, ValidationError> {
    let mut walker = Walker::default();
    let file = walker.data_file(data, &FieldPath::root());
    match (file, walker.issues.is_empty()) {
        (Some(file), true) => Ok(file),
        _ => Err(ValidationError::new(walker.issues)),
    }
}

/// Parse and validate a JSON document.
pub fn parse_data_file(bytes: &[u8]) -> Result<HotspotDataFile, ValidationError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| ValidationError::single("(root)", format!("invalid JSON: {}", e)))?;
    validate(&value)
}

/// Validate a single hotspot record, e.g. for seeding a context directly.
pub fn validate_hotspot(data: &Value) -> Result<Hotspot, ValidationError> {
    let mut walker = Walker::default();
    let hotspot = walker.hotspot(data, &FieldPath::root());
    match (hotspot, walker.issues.is_empty()) {
        (Some(hotspot), true) => Ok(hotspot),
        _ => Err(ValidationError::new(walker.issues)),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Default)]
struct Walker {
    issues: Vec<ValidationIssue>,
}

impl Walker {
    fn issue(&mut self, path: &FieldPath, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(path.to_string(), message));
    }

    fn expected(&mut self, path: &FieldPath, expected: &str, found: Option<&Value>) {
        match found {
            None => self.issue(path, "is required"),
            Some(value) => self.issue(
                path,
                format!("expected {}, received {}", expected, type_name(value)),
            ),
        }
    }

    fn object<'a>(&mut self, value: &'a Value, path: &FieldPath) -> Option<&'a Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.expected(path, "object", Some(other));
                None
            }
        }
    }

    fn string(&mut self, value: Option<&Value>, path: &FieldPath, min_len: usize) -> Option<String> {
        match value {
            Some(Value::String(s)) => {
                if s.chars().count() < min_len {
                    self.issue(
                        path,
                        format!("must contain at least {} character(s)", min_len),
                    );
                    None
                } else {
                    Some(s.clone())
                }
            }
            other => {
                self.expected(path, "string", other);
                None
            }
        }
    }

    /// `Ok(None)` when absent, `Err(())` when present but invalid.
    fn optional_string(
        &mut self,
        value: Option<&Value>,
        path: &FieldPath,
        min_len: usize,
    ) -> Result<Option<String>, ()> {
        match value {
            None => Ok(None),
            Some(v) => self.string(Some(v), path, min_len).map(Some).ok_or(()),
        }
    }

    fn number(&mut self, value: Option<&Value>, path: &FieldPath) -> Option<f64> {
        match value.and_then(Value::as_f64) {
            Some(n) => Some(n),
            None => {
                self.expected(path, "number", value);
                None
            }
        }
    }

    fn number_in(&mut self, value: Option<&Value>, path: &FieldPath, min: f64, max: f64) -> Option<f64> {
        let n = self.number(value, path)?;
        if n < min {
            self.issue(path, format!("must be >= {}", min));
            None
        } else if n > max {
            self.issue(path, format!("must be <= {}", max));
            None
        } else {
            Some(n)
        }
    }

    fn positive(&mut self, value: Option<&Value>, path: &FieldPath) -> Option<f64> {
        let n = self.number(value, path)?;
        if n > 0.0 {
            Some(n)
        } else {
            self.issue(path, "must be greater than 0");
            None
        }
    }

    fn array<'a>(&mut self, value: Option<&'a Value>, path: &FieldPath, min_len: usize) -> Option<&'a Vec<Value>> {
        match value {
            Some(Value::Array(items)) => {
                if items.len() < min_len {
                    self.issue(path, format!("must contain at least {} item(s)", min_len));
                }
                Some(items)
            }
            other => {
                self.expected(path, "array", other);
                None
            }
        }
    }

    fn data_file(&mut self, value: &Value, path: &FieldPath) -> Option<HotspotDataFile> {
        let map = self.object(value, path)?;
        let language = self.string(map.get("language"), &path.key("language"), 2);
        let updated_at = self.string(map.get("updatedAt"), &path.key("updatedAt"), 4);

        let hotspots_path = path.key("hotspots");
        let hotspots = self
            .array(map.get("hotspots"), &hotspots_path, MIN_HOTSPOTS)
            .map(|items| {
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| self.hotspot(item, &hotspots_path.index(i)))
                    .collect::<Vec<_>>()
            });

        if let Some(ref hotspots) = hotspots {
            self.unique_ids(hotspots, &hotspots_path);
        }

        Some(HotspotDataFile {
            language: language?,
            updated_at: updated_at?,
            hotspots: hotspots?,
        })
    }

    fn unique_ids(&mut self, hotspots: &[Hotspot], path: &FieldPath) {
        let mut seen = HashSet::new();
        for (i, hotspot) in hotspots.iter().enumerate() {
            if !seen.insert(hotspot.id.as_str()) {
                self.issue(
                    &path.index(i).key("id"),
                    format!("duplicate hotspot id \"{}\"", hotspot.id),
                );
            }
        }
    }

    fn hotspot(&mut self, value: &Value, path: &FieldPath) -> Option<Hotspot> {
        let map = self.object(value, path)?;

        let id = self.string(map.get("id"), &path.key("id"), 1);
        let title = self.string(map.get("title"), &path.key("title"), 1);
        let short_title = self.optional_string(map.get("shortTitle"), &path.key("shortTitle"), 0);
        let description = self.string(map.get("description"), &path.key("description"), 1);
        let aria_label = self.string(map.get("ariaLabel"), &path.key("ariaLabel"), 1);
        let coords = self.responsive_coords(map.get("coords"), &path.key("coords"));
        let shape = self.shape(map.get("shape"), &path.key("shape"));
        let media = self.media(map.get("media"), &path.key("media"));
        let categories = self.categories(map.get("categories"), &path.key("categories"));
        let severity = self.severity(map.get("severity"), &path.key("severity"));
        let links = self.links(map.get("links"), &path.key("links"));
        let updated_at = self.optional_string(map.get("updatedAt"), &path.key("updatedAt"), 0);

        Some(Hotspot {
            id: id?,
            title: title?,
            short_title: short_title.ok()?,
            description: description?,
            aria_label: aria_label?,
            coords: coords?,
            shape: shape?,
            media: media.ok()?,
            categories: categories?,
            severity: severity.ok()?,
            links: links.ok()?,
            updated_at: updated_at.ok()?,
        })
    }

    fn coords(&mut self, value: &Value, path: &FieldPath) -> Option<Coords> {
        let map = self.object(value, path)?;
        let anchor_path = path.key("anchor");
        let anchor = match map.get("anchor") {
            Some(Value::String(s)) => match Anchor::from_key(s) {
                Some(anchor) => Some(anchor),
                None => {
                    self.issue(
                        &anchor_path,
                        format!("expected one of center, top-left; received \"{}\"", s),
                    );
                    None
                }
            },
            other => {
                self.expected(&anchor_path, "string", other);
                None
            }
        };
        let x = self.number_in(map.get("x"), &path.key("x"), 0.0, 100.0);
        let y = self.number_in(map.get("y"), &path.key("y"), 0.0, 100.0);
        Some(Coords::new(anchor?, x?, y?))
    }

    fn responsive_coords(&mut self, value: Option<&Value>, path: &FieldPath) -> Option<ResponsiveCoords> {
        let Some(value) = value else {
            self.issue(path, "is required");
            return None;
        };
        let map = self.object(value, path)?;

        let mut entries = BTreeMap::new();
        let mut ok = true;
        for (key, entry) in map {
            match self.coords(entry, &path.key(key)) {
                Some(coords) => {
                    entries.insert(key.clone(), coords);
                }
                None => ok = false,
            }
        }
        if !map.contains_key(Breakpoint::Default.key()) {
            self.issue(&path.key("default"), "is required");
            return None;
        }
        if !ok {
            return None;
        }
        ResponsiveCoords::try_from(entries).ok()
    }

    fn point(&mut self, value: &Value, path: &FieldPath) -> Option<Point> {
        let map = self.object(value, path)?;
        let x = self.number(map.get("x"), &path.key("x"));
        let y = self.number(map.get("y"), &path.key("y"));
        Some(Point::new(x?, y?))
    }

    fn shape(&mut self, value: Option<&Value>, path: &FieldPath) -> Option<Shape> {
        let Some(value) = value else {
            self.issue(path, "is required");
            return None;
        };
        let map = self.object(value, path)?;
        let type_path = path.key("type");
        let kind = match map.get("type") {
            Some(Value::String(s)) => s.as_str(),
            other => {
                self.expected(&type_path, "string", other);
                return None;
            }
        };

        match kind {
            "circle" => {
                let radius = self.positive(map.get("radius"), &path.key("radius"))?;
                Some(Shape::Circle { radius })
            }
            "rectangle" => {
                let width = self.positive(map.get("width"), &path.key("width"));
                let height = self.positive(map.get("height"), &path.key("height"));
                let border_radius = match map.get("borderRadius") {
                    None => Ok(None),
                    Some(v) => self
                        .number_in(Some(v), &path.key("borderRadius"), 0.0, 50.0)
                        .map(Some)
                        .ok_or(()),
                };
                Some(Shape::Rectangle {
                    width: width?,
                    height: height?,
                    border_radius: border_radius.ok()?,
                })
            }
            "polygon" => {
                let points_path = path.key("points");
                let items = self.array(map.get("points"), &points_path, MIN_POLYGON_POINTS)?;
                let before = self.issues.len();
                let points: Vec<Point> = items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| self.point(item, &points_path.index(i)))
                    .collect();
                if self.issues.len() != before || points.len() < MIN_POLYGON_POINTS {
                    return None;
                }
                Some(Shape::Polygon { points })
            }
            other => {
                self.issue(
                    &type_path,
                    format!(
                        "expected one of circle, rectangle, polygon; received \"{}\"",
                        other
                    ),
                );
                None
            }
        }
    }

    fn media(&mut self, value: Option<&Value>, path: &FieldPath) -> Result<Option<Media>, ()> {
        let Some(value) = value else {
            return Ok(None);
        };
        let map = self.object(value, path).ok_or(())?;
        let image = self.optional_string(map.get("image"), &path.key("image"), 1);
        let gallery_path = path.key("gallery");
        let gallery = match map.get("gallery") {
            None => Ok(None),
            Some(v) => {
                let before = self.issues.len();
                let items = self.array(Some(v), &gallery_path, 1);
                let entries: Vec<String> = items
                    .map(|items| {
                        items
                            .iter()
                            .enumerate()
                            .filter_map(|(i, item)| {
                                self.string(Some(item), &gallery_path.index(i), 1)
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                if self.issues.len() == before {
                    Ok(Some(entries))
                } else {
                    Err(())
                }
            }
        };
        Ok(Some(Media {
            image: image?,
            gallery: gallery?,
        }))
    }

    fn categories(&mut self, value: Option<&Value>, path: &FieldPath) -> Option<Vec<Category>> {
        let items = self.array(value, path, 1)?;
        let before = self.issues.len();
        let mut categories = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_path = path.index(i);
            match item {
                Value::String(s) => match Category::from_key(s) {
                    Some(category) => categories.push(category),
                    None => self.issue(&item_path, format!("unknown category \"{}\"", s)),
                },
                other => self.expected(&item_path, "string", Some(other)),
            }
        }
        if self.issues.len() != before || categories.is_empty() {
            return None;
        }
        Some(categories)
    }

    fn severity(&mut self, value: Option<&Value>, path: &FieldPath) -> Result<Option<Severity>, ()> {
        match value {
            None => Ok(None),
            Some(Value::String(s)) => match Severity::from_key(s) {
                Some(severity) => Ok(Some(severity)),
                None => {
                    self.issue(
                        path,
                        format!("expected one of low, medium, high; received \"{}\"", s),
                    );
                    Err(())
                }
            },
            Some(other) => {
                self.expected(path, "string", Some(other));
                Err(())
            }
        }
    }

    fn links(&mut self, value: Option<&Value>, path: &FieldPath) -> Result<Option<Vec<Link>>, ()> {
        let Some(value) = value else {
            return Ok(None);
        };
        let items = self.array(Some(value), path, 0).ok_or(())?;
        let before = self.issues.len();
        let mut links = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let item_path = path.index(i);
            let Some(map) = self.object(item, &item_path) else {
                continue;
            };
            let label = self.string(map.get("label"), &item_path.key("label"), 1);
            let href_path = item_path.key("href");
            let href = self.string(map.get("href"), &href_path, 0).and_then(|href| {
                if reqwest::Url::parse(&href).is_ok() {
                    Some(href)
                } else {
                    self.issue(&href_path, "links.href must be a valid URL");
                    None
                }
            });
            if let (Some(label), Some(href)) = (label, href) {
                links.push(Link { label, href });
            }
        }
        if self.issues.len() != before {
            return Err(());
        }
        Ok(Some(links))
    }
}
