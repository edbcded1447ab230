// Random line arrangement and its intersection graph.
//
// Pairwise non-parallel infinite lines in general position intersect in
// exactly one point per pair; connecting each intersection to its nearest
// neighbours along both parent lines yields a planar graph (every edge is
// a sub-segment of a line, so edges can only meet at shared intersection
// vertices). This over-sized graph is what contraction later shrinks.

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

use crate::error::GraphError;
use crate::model::Point;

/// Angle sweep for the slope candidate pool: -80..80 degrees in 7-degree
/// steps, 23 candidates. Angles are converted degree-correctly to slopes.
const ANGLE_MIN_DEG: f64 = -80.0;
const ANGLE_MAX_DEG: f64 = 80.0;
const ANGLE_STEP_DEG: f64 = 7.0;

/// Intercepts are uniform integers in [-500, 500).
const INTERCEPT_SPAN: i32 = 1000;

/// Infinite line `y = slope * x + intercept`, plus the indices of the
/// intersections lying on it, kept sorted by x after `sort_hits`.
#[derive(Debug, Clone)]
pub(crate) struct Line {
    pub slope: f64,
    pub intercept: f64,
    pub hits: Vec<usize>,
    // Informational x-span of the hits, for rendering-side bounds
    pub span: Option<(f64, f64)>,
}

impl Line {
    fn new(slope: f64, intercept: f64) -> Self {
        Line {
            slope,
            intercept,
            hits: Vec::new(),
            span: None,
        }
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

pub(crate) fn slope_pool() -> Vec<f64> {
    let mut pool = Vec::new();
    let mut deg = ANGLE_MIN_DEG;
    while deg < ANGLE_MAX_DEG {
        pool.push(deg.to_radians().tan());
        deg += ANGLE_STEP_DEG;
    }
    pool
}

/// Smallest `n >= 2` with `n * (n - 1) >= 2 * requested`, so that the
/// arrangement's `n * (n - 1) / 2` intersections cover the request.
pub(crate) fn line_count_for(requested: u32) -> u32 {
    let want = 2 * requested as u64;
    let mut n = 2u64;
    while n * (n - 1) < want {
        n += 1;
    }
    n as u32
}

/// Draws `line_count_for(requested)` lines with pairwise-distinct slopes
/// (each slope is removed from the pool once drawn) and random intercepts.
pub(crate) fn generate_lines(rng: &mut StdRng, requested: u32) -> Result<Vec<Line>, GraphError> {
    let mut pool = slope_pool();
    let n = line_count_for(requested);
    if n as usize > pool.len() {
        return Err(GraphError::SlopePoolExhausted {
            requested,
            lines_needed: n,
            pool_size: pool.len() as u32,
        });
    }
    let mut lines = Vec::with_capacity(n as usize);
    for _ in 0..n {
        let idx = rng.gen_range(0..pool.len());
        let slope = pool.remove(idx);
        let intercept = (rng.gen_range(0..INTERCEPT_SPAN) - INTERCEPT_SPAN / 2) as f64;
        lines.push(Line::new(slope, intercept));
    }
    Ok(lines)
}

/// One intersection per unordered line pair, created in pair order
/// (0,1), (0,2), .., (1,2), ..; vertex ids follow this order.
pub(crate) fn find_intersections(lines: &mut [Line]) -> Vec<Point> {
    let mut points = Vec::new();
    for i in 0..lines.len() {
        for k in (i + 1)..lines.len() {
            // Slopes are distinct, so the denominator is never zero
            let x = (lines[k].intercept - lines[i].intercept) / (lines[i].slope - lines[k].slope);
            let y = lines[i].y_at(x);
            let idx = points.len();
            points.push(Point::new(x, y));
            lines[i].hits.push(idx);
            lines[k].hits.push(idx);
        }
    }
    points
}

fn sort_hits(lines: &mut [Line], points: &[Point]) {
    for line in lines.iter_mut() {
        line.hits
            .sort_by(|&u, &v| points[u].x.total_cmp(&points[v].x));
        if let (Some(&first), Some(&last)) = (line.hits.first(), line.hits.last()) {
            line.span = Some((points[first].x, points[last].x));
        }
    }
}

/// Builds the edge list of the intersection graph: each intersection is
/// joined to its immediate left/right neighbour on each parent line.
/// Emitting only `i < k` pairs lists each adjacency exactly once and in
/// canonical `from < to` form, since ids equal creation order.
pub(crate) fn neighbor_edges(lines: &mut [Line], points: &[Point]) -> Vec<(u32, u32)> {
    sort_hits(lines, points);
    let mut pairs = Vec::new();
    for line in lines.iter() {
        for w in line.hits.windows(2) {
            let (i, k) = if w[0] < w[1] { (w[0], w[1]) } else { (w[1], w[0]) };
            pairs.push((i as u32, k as u32));
        }
    }
    // Adjacent-on-a-line pairs are unique across lines (two lines share
    // only one point), so this sort is for deterministic edge numbering
    // in id order, not for dedup.
    pairs.sort_unstable();
    pairs
}

/// Full arrangement pipeline: random lines, intersections, neighbour
/// edges. Returns the vertex count and the canonical adjacency list.
pub(crate) fn build(rng: &mut StdRng, requested: u32) -> Result<(usize, Vec<(u32, u32)>), GraphError> {
    let mut lines = generate_lines(rng, requested)?;
    let points = find_intersections(&mut lines);
    let pairs = neighbor_edges(&mut lines, &points);
    debug!(
        "arrangement: {} lines, {} intersections, {} edges for {} requested",
        lines.len(),
        points.len(),
        pairs.len(),
        requested
    );
    Ok((points.len(), pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn pool_has_23_distinct_slopes() {
        let pool = slope_pool();
        assert_eq!(pool.len(), 23);
        for i in 0..pool.len() {
            for k in (i + 1)..pool.len() {
                assert_ne!(pool[i], pool[k]);
            }
        }
        // Sweep runs -80..80 in 7-degree steps, so the last angle is 74:
        // tan(-80 deg) ~ -5.67, tan(74 deg) ~ 3.49
        assert!(pool[0] < -5.0 && pool[22] > 3.0);
    }

    #[test]
    fn line_count_table() {
        // n(n-1) >= 2V
        assert_eq!(line_count_for(1), 2);
        assert_eq!(line_count_for(3), 3);
        assert_eq!(line_count_for(4), 4);
        assert_eq!(line_count_for(6), 4);
        assert_eq!(line_count_for(7), 5);
        assert_eq!(line_count_for(10), 5);
        assert_eq!(line_count_for(100), 15);
    }

    #[test]
    fn generated_lines_have_distinct_slopes() {
        let mut rng = StdRng::seed_from_u64(7);
        let lines = generate_lines(&mut rng, 20).unwrap();
        assert_eq!(lines.len(), line_count_for(20) as usize);
        for i in 0..lines.len() {
            for k in (i + 1)..lines.len() {
                assert_ne!(lines[i].slope, lines[k].slope);
            }
            assert!(lines[i].intercept >= -500.0 && lines[i].intercept < 500.0);
        }
    }

    #[test]
    fn pool_exhaustion_is_reported() {
        let mut rng = StdRng::seed_from_u64(7);
        // 23 slopes support n <= 23 lines, i.e. up to 253 vertices
        let err = generate_lines(&mut rng, 300).unwrap_err();
        assert!(matches!(err, GraphError::SlopePoolExhausted { .. }));
        assert!(generate_lines(&mut rng, 253).is_ok());
    }

    #[test]
    fn neighbor_wiring_on_fixed_arrangement() {
        // Three fixed lines; intersections in pair order:
        //   0: lines 0,1 at (2, 2)
        //   1: lines 0,2 at (1, 1)
        //   2: lines 1,2 at (3, 1)
        let mut lines = vec![
            super::Line::new(1.0, 0.0),   // y = x
            super::Line::new(-1.0, 4.0),  // y = -x + 4
            super::Line::new(0.0, 1.0),   // y = 1
        ];
        let points = find_intersections(&mut lines);
        assert_eq!(points.len(), 3);
        // 0: (2,2), 1: (1,1), 2: (3,1)
        assert!((points[0].x - 2.0).abs() < 1e-12);
        assert!((points[1].x - 1.0).abs() < 1e-12);
        assert!((points[2].x - 3.0).abs() < 1e-12);
        let pairs = neighbor_edges(&mut lines, &points);
        // A triangle: each line carries two of the three intersections
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        // Spans cover the sorted hits on each line
        assert_eq!(lines[2].span, Some((1.0, 3.0)));
    }

    #[test]
    fn four_lines_yield_six_intersections() {
        let mut rng = StdRng::seed_from_u64(42);
        let (count, pairs) = build(&mut rng, 4).unwrap();
        assert_eq!(count, 6);
        // Each of 4 lines strings its 3 hits into 2 edges
        assert_eq!(pairs.len(), 8);
        for &(a, b) in &pairs {
            assert!(a < b);
            assert!((b as usize) < count);
        }
    }

    #[test]
    fn build_is_deterministic() {
        let mut r1 = StdRng::seed_from_u64(99);
        let mut r2 = StdRng::seed_from_u64(99);
        assert_eq!(build(&mut r1, 12).unwrap(), build(&mut r2, 12).unwrap());
    }
}
