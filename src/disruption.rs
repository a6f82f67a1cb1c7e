//! The greedy disruption engine.

use tracing::debug;

use crate::{
    distance::Metric,
    error::Error,
    graph::Graph,
    ranking::{rank, Ranking},
};

/// The engine's lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Further disruption steps may still be produced.
    Running,
    /// The run is complete; [`advance`](Disruptor::advance) returns `None`
    /// from here on.
    Done,
}

/// A greedy disruption engine.
///
/// Each step ranks every node of the current snapshot by how much structural
/// damage its isolation would cause under the configured metric, applies the
/// best candidate and records it. The run ends when the iteration bound is
/// reached, the node set is exhausted, or the graph has no edges left to
/// remove; ending early is success, not an error.
///
/// Runs are sequential by nature: each step's ranking depends on the
/// previous step's resulting snapshot. `max_iterations` is the sole built-in
/// bound against unbounded work.
///
/// # Examples
///
/// ```
/// use fracture::disruption::Disruptor;
/// use fracture::distance::Metric;
/// use fracture::edge::Edge;
/// use fracture::graph::Graph;
///
/// // A star with centre 0: one isolation leaves the graph edge-free.
/// let star = Graph::from_edges(5, (1..5).map(|leaf| Edge::new(0, leaf)));
///
/// let steps = Disruptor::new(star, Metric::Laplacian, 20)?.run()?;
///
/// assert_eq!(steps.len(), 1);
/// assert_eq!(steps[0].node, 0);
/// # Ok::<(), fracture::error::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Disruptor {
    metric: Metric,
    max_iterations: usize,
    current: Graph,
    steps_taken: usize,
    state: State,
}

impl Disruptor {
    /// Creates an engine over the given snapshot.
    ///
    /// Fails with [`Error::EmptyGraph`] if the graph has no nodes.
    pub fn new(graph: Graph, metric: Metric, max_iterations: usize) -> Result<Self, Error> {
        if graph.node_count() == 0 {
            return Err(Error::EmptyGraph);
        }

        Ok(Self {
            metric,
            max_iterations,
            current: graph,
            steps_taken: 0,
            state: State::Running,
        })
    }

    /// Returns the engine's lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the current snapshot.
    pub fn current(&self) -> &Graph {
        &self.current
    }

    /// Returns the number of disruption steps taken so far.
    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Performs one disruption step, returning the chosen record, or `None`
    /// once the engine is done. `Done` is terminal.
    pub fn advance(&mut self) -> Result<Option<Ranking>, Error> {
        if self.state == State::Done {
            return Ok(None);
        }

        // An edge-free snapshot can't be disrupted further, and the node set
        // bounds the number of meaningful isolations.
        if self.steps_taken >= self.max_iterations
            || self.steps_taken >= self.current.node_count()
            || self.current.edge_count() == 0
        {
            self.state = State::Done;
            debug!(steps = self.steps_taken, "disruption run complete");

            return Ok(None);
        }

        let rankings = rank(&self.current, self.metric)?;

        // Safety: the node set is non-empty (checked at construction), so
        // the ranking holds at least one record.
        let best = rankings.into_iter().next().unwrap();

        debug!(
            step = self.steps_taken,
            node = best.node,
            score = best.score,
            components = best.components,
            giant_order = best.giant_order,
            "isolated best candidate"
        );

        self.current = best.graph.clone();
        self.steps_taken += 1;

        Ok(Some(best))
    }

    /// Runs the engine to completion and returns the ordered step sequence.
    ///
    /// The sequence may be shorter than the configured iteration bound if
    /// the graph becomes edge-free first.
    pub fn run(mut self) -> Result<Vec<Ranking>, Error> {
        let mut steps = Vec::new();

        while let Some(step) = self.advance()? {
            steps.push(step);
        }

        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use crate::{edge::Edge, generator::erdos_renyi};

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

    #[test]
    fn empty_graph_is_rejected() {
        assert!(matches!(
            Disruptor::new(Graph::new(0), Metric::Laplacian, 10),
            Err(Error::EmptyGraph)
        ));
    }

    #[test]
    fn zero_iterations_produce_an_empty_run() {
        let mut disruptor = Disruptor::new(star_graph(), Metric::Laplacian, 0).unwrap();

        assert_eq!(disruptor.state(), State::Running);
        assert!(disruptor.advance().unwrap().is_none());
        assert_eq!(disruptor.state(), State::Done);

        let steps = Disruptor::new(star_graph(), Metric::Laplacian, 0)
            .unwrap()
            .run()
            .unwrap();
        assert!(steps.is_empty());
    }

    #[test]
    fn star_run_finishes_after_one_step() {
        // Isolating the centre empties the edge set, so the engine is done
        // after a single step regardless of the iteration bound.
        let mut disruptor = Disruptor::new(star_graph(), Metric::Laplacian, 100).unwrap();

        let step = disruptor.advance().unwrap().unwrap();
        assert_eq!(step.node, 0);
        assert_eq!(step.graph.edge_count(), 0);
        assert_eq!(disruptor.current(), &step.graph);

        assert!(disruptor.advance().unwrap().is_none());
        assert_eq!(disruptor.state(), State::Done);
        assert_eq!(disruptor.steps_taken(), 1);

        // Done is terminal.
        assert!(disruptor.advance().unwrap().is_none());
    }

    #[test]
    fn complete_graph_first_step_under_giant_order_metric() {
        // All nodes tie, so the tie-break picks node 0; the remaining
        // complete graph on 4 nodes stays connected.
        let steps = Disruptor::new(complete_graph(), Metric::GiantOrder, 1)
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].node, 0);
        assert_eq!(steps[0].giant_order, 4);
        assert_eq!(steps[0].graph.component_count(), 2);
    }

    #[test]
    fn iteration_bound_caps_the_run() {
        let graph = erdos_renyi(12, 0.5, 1616492035);

        let steps = Disruptor::new(graph, Metric::Laplacian, 3)
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn disruption_is_monotonic() {
        let graph = erdos_renyi(12, 0.4, 1616492035);

        for metric in [
            Metric::Laplacian,
            Metric::NormalizedLaplacian,
            Metric::GiantOrder,
        ] {
            let steps = Disruptor::new(graph.clone(), metric, 12)
                .unwrap()
                .run()
                .unwrap();
            assert!(!steps.is_empty());

            // Component counts never decrease and giant orders never grow
            // as edges are stripped away.
            for pair in steps.windows(2) {
                assert!(pair[0].components <= pair[1].components);
                assert!(pair[0].giant_order >= pair[1].giant_order);
            }
        }
    }

    #[test]
    fn node_set_exhaustion_terminates_the_run() {
        // A graph whose nodes all carry edges until the very end: the step
        // count can never exceed the node count.
        let graph = complete_graph();

        let steps = Disruptor::new(graph, Metric::Laplacian, 100)
            .unwrap()
            .run()
            .unwrap();

        assert!(steps.len() <= 5);
        assert_eq!(steps.last().unwrap().graph.edge_count(), 0);
    }
}
