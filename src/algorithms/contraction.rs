// Vertex contraction: fold random adjacent pairs until the graph is the
// requested size. Contracting an edge of a planar graph yields a planar
// graph, so the result stays solvable no matter which pairs are chosen.

use log::{debug, trace};
use rand::Rng;

use crate::error::GraphError;
use crate::Graph;

/// Folds one vertex into an adjacent one per iteration until exactly
/// `requested` vertices remain. Uses the graph-owned rng, so the fold
/// sequence is reproducible from the graph's seed.
pub(crate) fn contract_to(g: &mut Graph, requested: u32) -> Result<(), GraphError> {
    while g.vertices.len() as u32 > requested {
        let (keeper, absorbed) = find_fold_pair(g)?;
        fold(g, keeper, absorbed)?;
        trace!("after fold:\n{}", g.dump());
    }
    Ok(())
}

/// Picks a random starting index and scans forward circularly for a
/// vertex with at least one out-edge; the fold pair is that vertex and
/// the `to` end of its first out-edge. Canonical storage guarantees
/// `keeper < absorbed`.
fn find_fold_pair(g: &mut Graph) -> Result<(u32, u32), GraphError> {
    let n = g.vertices.len();
    let start = g.rng.gen_range(0..n);
    for step in 0..n {
        let v1 = g.vertices[(start + step) % n].id;
        if let Some(e) = g.edges.iter().find(|e| e.from == v1) {
            return Ok((v1, e.to));
        }
    }
    Err(GraphError::NoFoldablePair {
        seed: g.seed,
        requested: g.requested,
    })
}

/// Merges `absorbed` into `keeper`: drops the connecting edge, re-homes
/// every other edge of `absorbed` onto `keeper` (dropping duplicates,
/// restoring canonical direction where the repoint flips it), then
/// removes `absorbed` from the vertex sequence.
fn fold(g: &mut Graph, keeper: u32, absorbed: u32) -> Result<(), GraphError> {
    debug!("folding {} into {}", absorbed, keeper);

    remove_pair(g, keeper, absorbed);

    // Out-edges absorbed -> x: x > absorbed > keeper, so the repointed
    // edge keeper -> x is already canonical.
    let out: Vec<(u32, u32)> = g
        .edges
        .iter()
        .filter(|e| e.from == absorbed)
        .map(|e| (e.id, e.to))
        .collect();
    for (eid, x) in out {
        rehome(g, eid, (absorbed, x), (keeper, x));
    }

    // In-edges y -> absorbed: y == keeper is impossible for a correctly
    // built source graph (that edge was just removed, and edges are
    // deduplicated), so hitting it means the builder is broken.
    let incoming: Vec<(u32, u32)> = g
        .edges
        .iter()
        .filter(|e| e.to == absorbed)
        .map(|e| (e.id, e.from))
        .collect();
    for (eid, y) in incoming {
        if y == keeper {
            return Err(GraphError::SelfLoopFold {
                seed: g.seed,
                requested: g.requested,
                vertices_left: g.vertices.len() as u32,
            });
        }
        let target = if keeper < y { (keeper, y) } else { (y, keeper) };
        rehome(g, eid, (y, absorbed), target);
    }

    g.vertices.retain(|v| v.id != absorbed);
    Ok(())
}

/// Repoints edge `eid` from endpoint pair `old` to `new`, or drops it if
/// an edge with the `new` pair already exists.
fn rehome(g: &mut Graph, eid: u32, old: (u32, u32), new: (u32, u32)) {
    if g.pairs.contains(&new) {
        debug!("dropping duplicate edge {} ({} -> {})", eid, new.0, new.1);
        remove_pair(g, old.0, old.1);
        return;
    }
    let idx = g.edges.iter().position(|e| e.id == eid).unwrap_or_else(|| {
        unreachable!("edge id {} vanished during fold", eid)
    });
    g.edges[idx].from = new.0;
    g.edges[idx].to = new.1;
    g.pairs.remove(&old);
    g.pairs.insert(new);
}

fn remove_pair(g: &mut Graph, from: u32, to: u32) {
    if let Some(idx) = g.edges.iter().position(|e| e.from == from && e.to == to) {
        g.edges.remove(idx);
        g.pairs.remove(&(from, to));
    }
}
