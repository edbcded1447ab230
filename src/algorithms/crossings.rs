// Crossing count over caller-supplied vertex positions.
//
// Edges sharing a vertex are skipped before any geometry runs: meeting at
// a shared endpoint is a structural property of the graph, not a visual
// crossing, no matter where the player drags the vertices.

use crate::geometry::intersect::segments_cross;
use crate::model::Point;
use crate::Graph;

pub(crate) fn count_crossings_impl<F>(g: &Graph, position: F) -> usize
where
    F: Fn(u32) -> Point,
{
    let mut n = 0;
    for i in 0..g.edges.len() {
        let e1 = &g.edges[i];
        let a = position(e1.from);
        let b = position(e1.to);
        for e2 in &g.edges[i + 1..] {
            if e1.shares_vertex(e2) {
                continue;
            }
            let c = position(e2.from);
            let d = position(e2.to);
            if segments_cross(a, b, c, d) {
                n += 1;
            }
        }
    }
    n
}

#[cfg(test)]
mod tests {
    use crate::model::Point;
    use crate::Graph;

    #[test]
    fn adjacent_edges_never_cross() {
        // Path 0-1-2 bent back on itself so the segments overlap
        let g = Graph::from_edge_list(3, &[(0, 1), (1, 2)]).unwrap();
        let pos = |v: u32| match v {
            0 => Point::new(0.0, 0.0),
            1 => Point::new(2.0, 0.0),
            _ => Point::new(1.0, 0.0),
        };
        assert_eq!(g.count_crossings(pos), 0);
    }

    #[test]
    fn disjoint_pair_counts_once() {
        let g = Graph::from_edge_list(4, &[(0, 1), (2, 3)]).unwrap();
        let crossed = |v: u32| match v {
            0 => Point::new(0.0, 0.0),
            1 => Point::new(2.0, 2.0),
            2 => Point::new(0.0, 2.0),
            _ => Point::new(2.0, 0.0),
        };
        assert_eq!(g.count_crossings(crossed), 1);
        let apart = |v: u32| match v {
            0 => Point::new(0.0, 0.0),
            1 => Point::new(1.0, 0.0),
            2 => Point::new(0.0, 5.0),
            _ => Point::new(1.0, 5.0),
        };
        assert_eq!(g.count_crossings(apart), 0);
    }
}
