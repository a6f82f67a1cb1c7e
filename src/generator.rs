//! Seeded random graph generators.
//!
//! These supply the snapshots the disruption engine consumes. Both samplers
//! take an explicit seed and are fully reproducible: the same parameters
//! always yield the same graph.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    edge::Edge,
    graph::{Graph, NodeId},
};

/// Samples an Erdős–Rényi graph `G(n, p)`: each of the `n * (n - 1) / 2`
/// possible edges is present independently with probability `probability`.
///
/// # Panics
///
/// Panics if `probability` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use fracture::generator::erdos_renyi;
///
/// let graph = erdos_renyi(20, 0.25, 1616492035);
///
/// assert_eq!(graph.node_count(), 20);
/// assert_eq!(graph, erdos_renyi(20, 0.25, 1616492035));
/// ```
pub fn erdos_renyi(node_count: usize, probability: f64, seed: u64) -> Graph {
    assert!(
        (0.0..=1.0).contains(&probability),
        "probability must be in [0, 1]"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(node_count);

    for a in 0..node_count {
        for b in (a + 1)..node_count {
            if rng.gen_bool(probability) {
                graph.insert(Edge::new(a, b));
            }
        }
    }

    graph
}

/// Samples a Barabási–Albert preferential-attachment graph: starting from
/// `attachments` isolated nodes, each subsequent node attaches to
/// `attachments` distinct existing nodes chosen with probability
/// proportional to their degree.
///
/// # Panics
///
/// Panics if `attachments` is 0 or `node_count <= attachments`.
///
/// # Examples
///
/// ```
/// use fracture::generator::barabasi_albert;
///
/// let graph = barabasi_albert(20, 2, 1616492035);
///
/// assert_eq!(graph.node_count(), 20);
/// assert_eq!(graph.edge_count(), 36);
/// ```
pub fn barabasi_albert(node_count: usize, attachments: usize, seed: u64) -> Graph {
    assert!(attachments >= 1, "attachments must be at least 1");
    assert!(
        node_count > attachments,
        "node count must exceed the attachment count"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(node_count);

    // Attachment targets for the next incoming node; the first one connects
    // to all of the initial isolated nodes.
    let mut targets: Vec<NodeId> = (0..attachments).collect();

    // Every node repeated once per incident edge, so a uniform draw from
    // this list is a draw proportional to degree.
    let mut repeated = Vec::new();

    for source in attachments..node_count {
        for &target in &targets {
            graph.insert(Edge::new(source, target));
        }

        repeated.extend(targets.iter().copied());
        repeated.extend(std::iter::repeat(source).take(attachments));

        if source + 1 < node_count {
            targets = distinct_sample(&mut rng, &repeated, attachments);
        }
    }

    graph
}

/// Draws `count` distinct values uniformly from `pool`.
fn distinct_sample(rng: &mut StdRng, pool: &[NodeId], count: usize) -> Vec<NodeId> {
    let mut picked = Vec::with_capacity(count);

    while picked.len() < count {
        let candidate = pool[rng.gen_range(0..pool.len())];

        if !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }

    picked
}
