//! 2-opt style crossing removal for ordered waypoint sequences.

use crate::geo::segments_intersect;
use crate::models::Coordinate;

/// Reorder `items` so that no two non-adjacent edges of the open path
/// cross, preferring minimal reordering.
///
/// Scans every edge pair `(i, i+1)` / `(j, j+1)` with `j >= i + 2`; on the
/// first intersecting pair found, reverses `items[i+1..=j]` and restarts
/// the scan. The first-found (not best-improving) pair is deliberate: it
/// matches the behavior callers were tuned against, and convergence order
/// matters for reproducibility under a fixed seed.
///
/// Sequences shorter than four points have no non-adjacent edge pairs and
/// are returned unchanged. Worst case is O(n³), acceptable for the ≤10
/// waypoints a route ever carries. Degenerate collinear layouts may keep
/// producing overlap hits; a sweep cap bounds the loop there, leaving the
/// best ordering reached so far (known limitation of the heuristic).
pub fn remove_crossings<T, F>(mut items: Vec<T>, location: F) -> Vec<T>
where
    F: Fn(&T) -> Coordinate,
{
    if items.len() < 4 {
        return items;
    }

    let max_sweeps = items.len() * items.len();

    for _ in 0..max_sweeps {
        match find_crossing(&items, &location) {
            Some((i, j)) => items[i + 1..=j].reverse(),
            None => break,
        }
    }

    items
}

/// First pair of non-adjacent crossing edges, as `(i, j)` edge start
/// indices, or `None` when the path is untangled.
fn find_crossing<T, F>(items: &[T], location: &F) -> Option<(usize, usize)>
where
    F: Fn(&T) -> Coordinate,
{
    for i in 0..items.len().saturating_sub(3) {
        for j in i + 2..items.len() - 1 {
            let p1 = location(&items[i]);
            let p2 = location(&items[i + 1]);
            let p3 = location(&items[j]);
            let p4 = location(&items[j + 1]);

            if segments_intersect(p1, p2, p3, p4) {
                return Some((i, j));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    fn has_crossing(points: &[Coordinate]) -> bool {
        find_crossing(points, &|p: &Coordinate| *p).is_some()
    }

    #[test]
    fn short_sequences_are_untouched() {
        for len in 0..4 {
            let points: Vec<Coordinate> = (0..len).map(|i| c(i as f64, (i * i) as f64)).collect();
            let result = remove_crossings(points.clone(), |p| *p);
            assert_eq!(result, points);
        }
    }

    #[test]
    fn bowtie_is_untangled() {
        // Visiting the corners of a unit square along the diagonals crosses
        // in the middle; the untangled order walks the perimeter.
        let bowtie = vec![c(0.0, 0.0), c(1.0, 1.0), c(1.0, 0.0), c(0.0, 1.0)];
        assert!(has_crossing(&bowtie));

        let result = remove_crossings(bowtie.clone(), |p| *p);
        assert!(!has_crossing(&result));

        // Same point set, only reordered.
        let mut sorted_in = bowtie;
        let mut sorted_out = result;
        let key = |p: &Coordinate| (p.lat.to_bits(), p.lng.to_bits());
        sorted_in.sort_by_key(key);
        sorted_out.sort_by_key(key);
        assert_eq!(sorted_in, sorted_out);
    }

    #[test]
    fn idempotent_once_converged() {
        let bowtie = vec![c(0.0, 0.0), c(1.0, 1.0), c(1.0, 0.0), c(0.0, 1.0)];
        let once = remove_crossings(bowtie, |p| *p);
        let twice = remove_crossings(once.clone(), |p| *p);
        assert_eq!(once, twice);
    }

    #[test]
    fn random_point_sets_end_up_crossing_free() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.random_range(4..=9);
            let points: Vec<Coordinate> = (0..n)
                .map(|_| c(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
                .collect();

            let result = remove_crossings(points, |p| *p);
            assert!(!has_crossing(&result), "crossing left in {result:?}");
        }
    }

    #[test]
    fn carries_payload_through_reordering() {
        let bowtie = vec![
            ("a", c(0.0, 0.0)),
            ("b", c(1.0, 1.0)),
            ("c", c(1.0, 0.0)),
            ("d", c(0.0, 1.0)),
        ];
        let result = remove_crossings(bowtie, |(_, p)| *p);
        let mut labels: Vec<&str> = result.iter().map(|(l, _)| *l).collect();
        labels.sort_unstable();
        assert_eq!(labels, ["a", "b", "c", "d"]);
    }
}
