//! Fracture is a small toolkit for analysing the structural robustness of
//! undirected networks by simulating their progressive, targeted disruption.
//!
//! At each step the engine scores every node by how much structural damage
//! its isolation (removal of all incident edges) would cause under a chosen
//! distance metric, applies the most damaging isolation and repeats. The
//! output is an ordered trace of disruption steps plus derived per-step
//! statistics, which can be used to compare how well the spectral and
//! component-based metrics predict network vulnerability.
//!
//! Graphs are simple, undirected and static: the node set is fixed for the
//! lifetime of a run and disruption only ever shrinks the edge set.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) snapshot,
//! built from [`Edge`](edge::Edge) instances or sampled from a seeded random
//! model, and the [`Disruptor`](disruption::Disruptor) engine that drives
//! the greedy disruption loop.
//!
//! ```rust
//! use fracture::analysis::analyze;
//! use fracture::disruption::Disruptor;
//! use fracture::distance::Metric;
//! use fracture::generator::erdos_renyi;
//!
//! # fn main() -> Result<(), fracture::error::Error> {
//! // Sample a reproducible random graph.
//! let graph = erdos_renyi(20, 0.25, 1616492035);
//!
//! // Greedily isolate the most damaging node, ten steps or until the graph
//! // runs out of edges.
//! let steps = Disruptor::new(graph.clone(), Metric::Laplacian, 10)?.run()?;
//!
//! // Derive per-step statistics for export or plotting.
//! let analyses = analyze(&graph, &steps)?;
//! assert_eq!(analyses.len(), steps.len());
//!
//! for analysis in &analyses {
//!     println!(
//!         "isolated {}: {} components, giant order {}",
//!         analysis.isolated_node, analysis.components, analysis.giant_order
//!     );
//! }
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod distance;
pub mod disruption;
pub mod edge;
pub mod error;
pub mod generator;
pub mod graph;
pub mod ranking;
pub mod spectrum;
