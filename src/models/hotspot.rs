use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reference point the percentage coordinates are measured from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Center,
    TopLeft,
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Center => "center",
            Anchor::TopLeft => "top-left",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "center" => Some(Anchor::Center),
            "top-left" => Some(Anchor::TopLeft),
            _ => None,
        }
    }
}

/// A position in percent of the container (`0..=100` on both axes).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coords {
    pub anchor: Anchor,
    pub x: f64,
    pub y: f64,
}

impl Coords {
    pub fn new(anchor: Anchor, x: f64, y: f64) -> Self {
        Self { anchor, x, y }
    }

    pub fn center(x: f64, y: f64) -> Self {
        Self::new(Anchor::Center, x, y)
    }
}

/// Named container-width threshold.
///
/// Ordering follows the threshold, so `Breakpoint::Xl` is the greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    Default,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Widest first; this is the order responsive resolution walks.
    pub const DESCENDING: [Breakpoint; 5] = [
        Breakpoint::Xl,
        Breakpoint::Lg,
        Breakpoint::Md,
        Breakpoint::Sm,
        Breakpoint::Default,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Breakpoint::Default => "default",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Minimum container width (px) at which this breakpoint applies.
    pub fn min_width(&self) -> f64 {
        match self {
            Breakpoint::Default => 0.0,
            Breakpoint::Sm => 480.0,
            Breakpoint::Md => 768.0,
            Breakpoint::Lg => 1024.0,
            Breakpoint::Xl => 1280.0,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "default" => Some(Breakpoint::Default),
            "sm" => Some(Breakpoint::Sm),
            "md" => Some(Breakpoint::Md),
            "lg" => Some(Breakpoint::Lg),
            "xl" => Some(Breakpoint::Xl),
            _ => None,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-breakpoint coordinates with a mandatory `default` entry.
///
/// Keys that are not one of the known breakpoints are kept in `extra` so that
/// structural comparisons between translations see them, but resolution
/// never picks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Coords>",
    into = "BTreeMap<String, Coords>"
)]
pub struct ResponsiveCoords {
    pub default: Coords,
    pub overrides: BTreeMap<Breakpoint, Coords>,
    pub extra: BTreeMap<String, Coords>,
}

impl ResponsiveCoords {
    pub fn new(default: Coords) -> Self {
        Self {
            default,
            overrides: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_override(mut self, breakpoint: Breakpoint, coords: Coords) -> Self {
        if breakpoint == Breakpoint::Default {
            self.default = coords;
        } else {
            self.overrides.insert(breakpoint, coords);
        }
        self
    }

    /// Entry explicitly present for `breakpoint`.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&Coords> {
        match breakpoint {
            Breakpoint::Default => Some(&self.default),
            other => self.overrides.get(&other),
        }
    }
}

impl TryFrom<BTreeMap<String, Coords>> for ResponsiveCoords {
    type Error = String;

    fn try_from(mut entries: BTreeMap<String, Coords>) -> Result<Self, Self::Error> {
        let default = entries
            .remove(Breakpoint::Default.key())
            .ok_or_else(|| "coords.default is required".to_string())?;
        let mut coords = ResponsiveCoords::new(default);
        for (key, value) in entries {
            match Breakpoint::from_key(&key) {
                Some(breakpoint) => {
                    coords.overrides.insert(breakpoint, value);
                }
                None => {
                    coords.extra.insert(key, value);
                }
            }
        }
        Ok(coords)
    }
}

impl From<ResponsiveCoords> for BTreeMap<String, Coords> {
    fn from(coords: ResponsiveCoords) -> Self {
        let mut map = coords.extra;
        map.insert(Breakpoint::Default.key().to_string(), coords.default);
        for (breakpoint, value) in coords.overrides {
            map.insert(breakpoint.key().to_string(), value);
        }
        map
    }
}

/// Polygon vertex, in percent offsets from the anchor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Clickable region shape. Dimensions are percentages of the container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle {
        radius: f64,
    },
    Rectangle {
        width: f64,
        height: f64,
        #[serde(
            rename = "borderRadius",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        border_radius: Option<f64>,
    },
    Polygon {
        points: Vec<Point>,
    },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
            Shape::Polygon { .. } => "polygon",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ergonomics,
    Physical,
    Environment,
    Psychological,
    Organizational,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Ergonomics,
        Category::Physical,
        Category::Environment,
        Category::Psychological,
        Category::Organizational,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ergonomics => "ergonomics",
            Category::Physical => "physical",
            Category::Environment => "environment",
            Category::Psychological => "psychological",
            Category::Organizational => "organizational",
            Category::Other => "other",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Media {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
}

/// A named, shaped, positioned region of interest on the illustration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotspot {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
    pub description: String,
    pub aria_label: String,
    pub coords: ResponsiveCoords,
    pub shape: Shape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One translation of the hotspot catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotspotDataFile {
    pub language: String,
    pub updated_at: String,
    pub hotspots: Vec<Hotspot>,
}
