//! Responsive coordinate resolution.

use crate::models::{Breakpoint, Coords, ResponsiveCoords};

/// Pick the coordinates for a container `container_width` pixels wide.
///
/// Walks breakpoints from widest to narrowest and returns the first one whose
/// threshold is satisfied and that has an explicit entry. `default` always
/// matches. Only width is considered.
pub fn resolve_responsive_coords(coords: &ResponsiveCoords, container_width: f64) -> Coords {
    resolve_breakpoint(coords, container_width)
        .and_then(|bp| coords.get(bp).copied())
        .unwrap_or(coords.default)
}

/// The breakpoint [`resolve_responsive_coords`] would use.
pub fn resolve_breakpoint(coords: &ResponsiveCoords, container_width: f64) -> Option<Breakpoint> {
    Breakpoint::DESCENDING
        .into_iter()
        .find(|bp| container_width >= bp.min_width() && coords.get(*bp).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Anchor;

    fn coords() -> ResponsiveCoords {
        ResponsiveCoords::new(Coords::center(10.0, 10.0))
            .with_override(Breakpoint::Sm, Coords::center(20.0, 20.0))
            .with_override(Breakpoint::Lg, Coords::center(40.0, 40.0))
    }

    #[test]
    fn test_default_below_every_threshold() {
        assert_eq!(resolve_responsive_coords(&coords(), 320.0), Coords::center(10.0, 10.0));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(resolve_responsive_coords(&coords(), 480.0), Coords::center(20.0, 20.0));
        assert_eq!(resolve_responsive_coords(&coords(), 479.9), Coords::center(10.0, 10.0));
    }

    #[test]
    fn test_missing_breakpoint_falls_through_to_narrower() {
        // md is absent, so 800px resolves to sm
        assert_eq!(resolve_responsive_coords(&coords(), 800.0), Coords::center(20.0, 20.0));
        // xl is absent, so 1400px resolves to lg
        assert_eq!(resolve_responsive_coords(&coords(), 1400.0), Coords::center(40.0, 40.0));
        assert_eq!(resolve_breakpoint(&coords(), 1400.0), Some(Breakpoint::Lg));
    }

    #[test]
    fn test_wide_container_with_only_default() {
        let only_default = ResponsiveCoords::new(Coords::new(Anchor::TopLeft, 5.0, 6.0));
        assert_eq!(
            resolve_responsive_coords(&only_default, 2000.0),
            Coords::new(Anchor::TopLeft, 5.0, 6.0)
        );
        assert_eq!(resolve_breakpoint(&only_default, 2000.0), Some(Breakpoint::Default));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let c = coords();
        for width in [0.0, 480.0, 767.0, 1024.0, 1280.0, 4000.0] {
            assert_eq!(
                resolve_responsive_coords(&c, width),
                resolve_responsive_coords(&c, width)
            );
        }
    }
}
