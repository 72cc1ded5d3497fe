//! Spherical and planar geometry for waypoint ordering and crossing checks.
//!
//! All functions assume finite inputs; callers validate coordinates before
//! handing them to this module.

use crate::models::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Collinearity tolerance for the planar orientation test. Waypoint
/// coordinates differ by whole degrees down to ~1e-5; anything below this
/// is floating-point noise.
const COLLINEAR_EPS: f64 = 1e-12;

/// Initial compass bearing from `center` to `point`, in degrees [0, 360).
///
/// Used purely as a deterministic sort key for the clockwise waypoint
/// sweep, not for display.
pub fn bearing_deg(center: Coordinate, point: Coordinate) -> f64 {
    let lat1 = center.lat.to_radians();
    let lat2 = point.lat.to_radians();
    let d_lng = (point.lng - center.lng).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Winding of the ordered triplet (a, b, c).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of (a, b, c) from the sign of the cross product of
/// `(b - a)` and `(c - b)`, treating magnitudes below the epsilon as
/// collinear.
pub fn orientation(a: Coordinate, b: Coordinate, c: Coordinate) -> Orientation {
    let val = (b.lat - a.lat) * (c.lng - b.lng) - (b.lng - a.lng) * (c.lat - b.lat);
    if val.abs() < COLLINEAR_EPS {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True if `b` lies within the bounding box of segment `a`-`c`, with the
/// collinearity epsilon as slack. Only meaningful when the three points
/// are already known to be collinear.
fn on_segment(a: Coordinate, b: Coordinate, c: Coordinate) -> bool {
    b.lng >= a.lng.min(c.lng) - COLLINEAR_EPS
        && b.lng <= a.lng.max(c.lng) + COLLINEAR_EPS
        && b.lat >= a.lat.min(c.lat) - COLLINEAR_EPS
        && b.lat <= a.lat.max(c.lat) + COLLINEAR_EPS
}

/// Classic orientation-based segment intersection test for `p1`-`p2`
/// against `p3`-`p4`. Reports proper crossings and collinear overlaps.
pub fn segments_intersect(p1: Coordinate, p2: Coordinate, p3: Coordinate, p4: Coordinate) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);

    // Proper crossing: each segment's endpoints lie on opposite sides of the other.
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear overlap cases.
    if o1 == Orientation::Collinear && on_segment(p1, p3, p2) {
        return true;
    }
    if o2 == Orientation::Collinear && on_segment(p1, p4, p2) {
        return true;
    }
    if o3 == Orientation::Collinear && on_segment(p3, p1, p4) {
        return true;
    }
    if o4 == Orientation::Collinear && on_segment(p3, p2, p4) {
        return true;
    }

    false
}

/// Great-circle distance between two coordinates in kilometers.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    #[test]
    fn bearing_cardinal_directions() {
        let center = c(0.0, 0.0);
        assert!((bearing_deg(center, c(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((bearing_deg(center, c(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((bearing_deg(center, c(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((bearing_deg(center, c(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_range_is_half_open() {
        let b = bearing_deg(c(1.2834, 103.8607), c(1.30, 103.85));
        assert!((0.0..360.0).contains(&b));
    }

    #[test]
    fn orientation_antisymmetric_under_endpoint_swap() {
        let a = c(0.0, 0.0);
        let b = c(1.0, 1.0);
        let d = c(0.0, 2.0);
        let forward = orientation(a, b, d);
        let reverse = orientation(d, b, a);
        assert_ne!(forward, Orientation::Collinear);
        assert_ne!(reverse, Orientation::Collinear);
        assert_ne!(forward, reverse);

        // Collinearity is preserved either way round.
        let m = c(0.5, 0.5);
        assert_eq!(orientation(a, m, b), Orientation::Collinear);
        assert_eq!(orientation(b, m, a), Orientation::Collinear);
    }

    #[test]
    fn segments_intersect_proper_crossing() {
        // X-shaped crossing.
        assert!(segments_intersect(
            c(0.0, 0.0),
            c(1.0, 1.0),
            c(1.0, 0.0),
            c(0.0, 1.0)
        ));
    }

    #[test]
    fn segments_intersect_disjoint() {
        assert!(!segments_intersect(
            c(0.0, 0.0),
            c(0.0, 1.0),
            c(1.0, 0.0),
            c(1.0, 1.0)
        ));
    }

    #[test]
    fn segments_intersect_collinear_overlap() {
        assert!(segments_intersect(
            c(0.0, 0.0),
            c(0.0, 2.0),
            c(0.0, 1.0),
            c(0.0, 3.0)
        ));
        // Collinear but disjoint.
        assert!(!segments_intersect(
            c(0.0, 0.0),
            c(0.0, 1.0),
            c(0.0, 2.0),
            c(0.0, 3.0)
        ));
    }

    #[test]
    fn shared_endpoint_counts_as_touching() {
        assert!(segments_intersect(
            c(0.0, 0.0),
            c(1.0, 1.0),
            c(1.0, 1.0),
            c(2.0, 0.0)
        ));
    }

    #[test]
    fn haversine_known_distance() {
        // One degree of latitude is ~111.19 km.
        let d = haversine_km(c(0.0, 0.0), c(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    #[test]
    fn haversine_same_point_is_zero() {
        let p = c(1.2834, 103.8607);
        assert!(haversine_km(p, p) < 1e-9);
    }
}
