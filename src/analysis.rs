//! Post-run analysis of a disruption sequence.

use serde::{Deserialize, Serialize};

use crate::{
    distance::{giant_order_distance, laplacian_distance, normalized_laplacian_distance},
    error::Error,
    graph::{Graph, NodeId},
    ranking::Ranking,
};

/// Per-step statistics derived from a completed disruption sequence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Analysis {
    /// The node isolated at this step.
    pub isolated_node: NodeId,
    /// Connected-component count of this step's snapshot.
    pub components: usize,
    /// Order of the largest connected component of this step's snapshot.
    pub giant_order: usize,
    /// Laplacian distance from the previous snapshot.
    pub laplacian_distance: f64,
    /// Normalised-Laplacian distance from the previous snapshot.
    pub normalized_laplacian_distance: f64,
    /// Giant-order distance from the previous snapshot.
    pub giant_order_distance: f64,
    /// Giant-order distance from the original snapshot, tracking cumulative
    /// disruption across the whole run.
    pub cumulative_giant_order_distance: f64,
}

/// Derives per-step statistics from a completed disruption sequence.
///
/// The first step's "previous" snapshot is `original`; every later step is
/// measured against the step before it. The cumulative giant-order distance
/// is always measured from `original`, not the previous step. The output has
/// one record per input step; no new disruption is performed.
///
/// # Examples
///
/// ```
/// use fracture::analysis::analyze;
/// use fracture::disruption::Disruptor;
/// use fracture::distance::Metric;
/// use fracture::generator::erdos_renyi;
///
/// let graph = erdos_renyi(10, 0.3, 1616492035);
/// let steps = Disruptor::new(graph.clone(), Metric::GiantOrder, 5)?.run()?;
///
/// let analyses = analyze(&graph, &steps)?;
/// assert_eq!(analyses.len(), steps.len());
/// # Ok::<(), fracture::error::Error>(())
/// ```
pub fn analyze(original: &Graph, steps: &[Ranking]) -> Result<Vec<Analysis>, Error> {
    let mut analyses = Vec::with_capacity(steps.len());
    let mut previous = original;

    for step in steps {
        analyses.push(Analysis {
            isolated_node: step.node,
            components: step.components,
            giant_order: step.giant_order,
            laplacian_distance: laplacian_distance(previous, &step.graph)?,
            normalized_laplacian_distance: normalized_laplacian_distance(previous, &step.graph)?,
            giant_order_distance: giant_order_distance(previous, &step.graph)?,
            cumulative_giant_order_distance: giant_order_distance(original, &step.graph)?,
        });

        previous = &step.graph;
    }

    Ok(analyses)
}

#[cfg(test)]
mod tests {
    use crate::{
        disruption::Disruptor,
        distance::Metric,
        edge::Edge,
        generator::erdos_renyi,
        ranking::rank,
    };

    use super::*;

    #[test]
    fn empty_sequence_yields_empty_analysis() {
        let graph = Graph::from_edges(3, [Edge::new(0, 1)]);

        assert_eq!(analyze(&graph, &[]).unwrap().len(), 0);
    }

    #[test]
    fn one_record_per_step() {
        let graph = erdos_renyi(10, 0.4, 1616492035);
        let steps = Disruptor::new(graph.clone(), Metric::Laplacian, 6)
            .unwrap()
            .run()
            .unwrap();

        let analyses = analyze(&graph, &steps).unwrap();
        assert_eq!(analyses.len(), steps.len());
    }

    #[test]
    fn first_step_is_measured_against_the_original() {
        // The path graph 0 - 1 - 2 - 3; the best Laplacian candidate is one
        // of the interior nodes.
        let graph = Graph::from_edges(4, [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]);
        let steps = vec![rank(&graph, Metric::Laplacian).unwrap().remove(0)];

        let analyses = analyze(&graph, &steps).unwrap();
        let first = &analyses[0];

        assert_eq!(
            first.laplacian_distance,
            laplacian_distance(&graph, &steps[0].graph).unwrap()
        );
        assert_eq!(
            first.giant_order_distance,
            first.cumulative_giant_order_distance
        );
    }

    #[test]
    fn later_steps_are_measured_against_the_previous_snapshot() {
        let graph = erdos_renyi(8, 0.5, 1616492035);
        let steps = Disruptor::new(graph.clone(), Metric::Laplacian, 3)
            .unwrap()
            .run()
            .unwrap();
        assert!(steps.len() >= 2);

        let analyses = analyze(&graph, &steps).unwrap();

        for i in 1..steps.len() {
            assert_eq!(
                analyses[i].laplacian_distance,
                laplacian_distance(&steps[i - 1].graph, &steps[i].graph).unwrap()
            );
            assert_eq!(
                analyses[i].giant_order_distance,
                giant_order_distance(&steps[i - 1].graph, &steps[i].graph).unwrap()
            );
        }
    }

    #[test]
    fn cumulative_distance_tracks_the_original() {
        let graph = erdos_renyi(8, 0.5, 1616492035);
        let steps = Disruptor::new(graph.clone(), Metric::GiantOrder, 4)
            .unwrap()
            .run()
            .unwrap();

        let analyses = analyze(&graph, &steps).unwrap();
        let reference = graph.giant_order() as f64;

        for (analysis, step) in analyses.iter().zip(&steps) {
            let expected = (reference - step.graph.giant_order() as f64).abs() / reference;
            assert_eq!(analysis.cumulative_giant_order_distance, expected);
        }

        // Cumulative disruption never recovers: the sequence is
        // non-decreasing because giant orders only shrink.
        for pair in analyses.windows(2) {
            assert!(
                pair[0].cumulative_giant_order_distance
                    <= pair[1].cumulative_giant_order_distance
            );
        }
    }
}
