//! Error types surfaced by the toolkit.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors returned by graph operators, distance functions and the disruption
/// engine.
///
/// Every computation in this crate is deterministic and pure, so a failure is
/// never transient: errors are surfaced synchronously to the direct caller and
/// nothing is retried.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Isolation was requested for a node outside the snapshot's node set.
    #[error("node {0} is not in the graph's node set")]
    UnknownNode(NodeId),

    /// A distance was requested between snapshots of differing node count.
    #[error("graphs are incomparable: node counts {left} and {right} differ")]
    IncomparableGraphs {
        /// Node count of the first graph.
        left: usize,
        /// Node count of the second graph.
        right: usize,
    },

    /// A giant-order distance was requested against a reference graph whose
    /// largest component has order 0.
    #[error("reference graph has a giant component of order 0")]
    DegenerateReference,

    /// The disruption engine was invoked on a graph with no nodes.
    #[error("cannot disrupt a graph with no nodes")]
    EmptyGraph,
}
