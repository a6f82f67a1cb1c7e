//! Ranking of isolation candidates.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    distance::Metric,
    error::Error,
    graph::{Graph, NodeId},
};

/// The outcome of hypothetically isolating one node from a base snapshot,
/// scored under one metric.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ranking {
    /// The candidate node whose incident edges were removed.
    pub node: NodeId,
    /// The snapshot resulting from the isolation.
    pub graph: Graph,
    /// The metric's distance between the base snapshot and [`graph`](Self::graph).
    pub score: f64,
    /// Connected-component count of the resulting snapshot.
    pub components: usize,
    /// Order of the largest connected component of the resulting snapshot.
    pub giant_order: usize,
}

/// Scores every node of `base` as an isolation candidate under `metric` and
/// returns the records in ranked order.
///
/// One record is produced per node, including nodes that are already
/// isolated: re-isolation is a no-op and scores 0. The result is sorted
/// descending by score with ties broken by ascending node id, so the ranking
/// is reproducible for a given snapshot and metric. `base` is never mutated.
///
/// Candidates are independent of one another and are evaluated in parallel;
/// the final sort restores the deterministic order.
///
/// # Examples
///
/// ```
/// use fracture::distance::Metric;
/// use fracture::edge::Edge;
/// use fracture::graph::Graph;
/// use fracture::ranking::rank;
///
/// // A star with centre 0: isolating the centre does maximal damage.
/// let star = Graph::from_edges(4, [Edge::new(0, 1), Edge::new(0, 2), Edge::new(0, 3)]);
/// let rankings = rank(&star, Metric::Laplacian)?;
///
/// assert_eq!(rankings.len(), 4);
/// assert_eq!(rankings[0].node, 0);
/// # Ok::<(), fracture::error::Error>(())
/// ```
pub fn rank(base: &Graph, metric: Metric) -> Result<Vec<Ranking>, Error> {
    let mut rankings = (0..base.node_count())
        .into_par_iter()
        .map(|node| {
            let graph = base.isolate(node)?;
            let score = metric.distance(base, &graph)?;

            trace!(node, score, "scored isolation candidate");

            Ok(Ranking {
                node,
                score,
                components: graph.component_count(),
                giant_order: graph.giant_order(),
                graph,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    // Scores are finite and non-negative; the total order over f64 is only
    // used to get a stable comparison.
    rankings.sort_unstable_by(|a, b| b.score.total_cmp(&a.score).then(a.node.cmp(&b.node)));

    Ok(rankings)
}

#[cfg(test)]
mod tests {
    use crate::edge::Edge;

    use super::*;

    /// A star with centre 0 and leaves 1 to 4.
    fn star_graph() -> Graph {
        Graph::from_edges(5, (1..5).map(|leaf| Edge::new(0, leaf)))
    }

    /// The complete graph on 5 nodes.
    fn complete_graph() -> Graph {
        let edges = (0..5).flat_map(|a| ((a + 1)..5).map(move |b| Edge::new(a, b)));
        Graph::from_edges(5, edges)
    }

    fn assert_ranked(rankings: &[Ranking]) {
        for pair in rankings.windows(2) {
            assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].node < pair[1].node),
                "ranking out of order: {:?} before {:?}",
                (pair[0].node, pair[0].score),
                (pair[1].node, pair[1].score),
            );
        }
    }

    #[test]
    fn one_record_per_node() {
        let rankings = rank(&star_graph(), Metric::Laplacian).unwrap();

        assert_eq!(rankings.len(), 5);

        let mut nodes: Vec<NodeId> = rankings.iter().map(|r| r.node).collect();
        nodes.sort_unstable();
        assert_eq!(nodes, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn star_centre_ranks_first_under_spectral_metrics() {
        for metric in [Metric::Laplacian, Metric::NormalizedLaplacian] {
            let rankings = rank(&star_graph(), metric).unwrap();

            assert_eq!(rankings[0].node, 0);
            assert_eq!(rankings[0].giant_order, 1);
            assert_eq!(rankings[0].components, 5);
            assert_ranked(&rankings);
        }
    }

    #[test]
    fn ties_break_by_ascending_node_id() {
        // Every node of the complete graph is symmetric under the
        // giant-order metric, so the ranking degenerates to node order.
        let rankings = rank(&complete_graph(), Metric::GiantOrder).unwrap();

        let nodes: Vec<NodeId> = rankings.iter().map(|r| r.node).collect();
        assert_eq!(nodes, vec![0, 1, 2, 3, 4]);

        for ranking in &rankings {
            assert_eq!(ranking.score, 0.2);
        }
    }

    #[test]
    fn already_isolated_nodes_score_zero() {
        // Node 3 has no edges; re-isolating it changes nothing.
        let graph = Graph::from_edges(4, [Edge::new(0, 1), Edge::new(1, 2)]);
        let rankings = rank(&graph, Metric::Laplacian).unwrap();

        let isolated = rankings.iter().find(|r| r.node == 3).unwrap();
        assert_eq!(isolated.score, 0.0);
        assert_eq!(isolated.graph, graph);

        // And it therefore ranks last, after the tie-break.
        assert_eq!(rankings.last().unwrap().node, 3);
    }

    #[test]
    fn ranking_is_ordered_for_every_metric() {
        let graph = crate::generator::erdos_renyi(10, 0.4, 1616492035);

        for metric in [
            Metric::Laplacian,
            Metric::NormalizedLaplacian,
            Metric::GiantOrder,
        ] {
            assert_ranked(&rank(&graph, metric).unwrap());
        }
    }

    #[test]
    fn base_graph_is_not_mutated() {
        let graph = star_graph();
        let before = graph.clone();

        rank(&graph, Metric::Laplacian).unwrap();

        assert_eq!(graph, before);
    }
}
