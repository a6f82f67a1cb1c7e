//! A module for working with graph snapshots.

use std::collections::{BTreeSet, VecDeque};

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::{edge::Edge, error::Error};

/// A node identifier: an integer in `[0, n)` for a graph of `n` nodes,
/// stable for the whole lifetime of a disruption run.
pub type NodeId = usize;

/// A snapshot of a simple undirected graph.
///
/// The node set is fixed at construction as `{0, .., n - 1}` and never
/// changes; disruption shrinks the edge set, never the node set. Snapshots
/// are values: operators like [`isolate`](Graph::isolate) return a new
/// snapshot and leave the input untouched, so any number of readers can hold
/// references without synchronisation.
///
/// The edge set round-trips exactly through serialisation; matrices and
/// spectra are derived state and recomputed on demand. Deserialisation
/// validates that every edge endpoint lies inside the node set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Graph {
    node_count: usize,
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// Creates an edge-free graph over the node set `{0, .., node_count - 1}`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::graph::Graph;
    ///
    /// let graph = Graph::new(4);
    /// assert_eq!(graph.node_count(), 4);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: BTreeSet::new(),
        }
    }

    /// Creates a graph over `{0, .., node_count - 1}` from an edge collection.
    ///
    /// # Panics
    ///
    /// Panics if any edge endpoint lies outside the node set.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    ///
    /// // The path graph 0 - 1 - 2.
    /// let graph = Graph::from_edges(3, [Edge::new(0, 1), Edge::new(1, 2)]);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edges(node_count: usize, edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut graph = Self::new(node_count);

        for edge in edges {
            graph.insert(edge);
        }

        graph
    }

    /// Inserts an edge, returning whether it was newly added.
    ///
    /// This is a construction-phase operation: once a snapshot has been
    /// handed to the ranker or the engine it is never mutated again.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint lies outside the node set.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    ///
    /// let mut graph = Graph::new(2);
    ///
    /// assert!(graph.insert(Edge::new(0, 1)));
    /// assert!(!graph.insert(Edge::new(1, 0)));
    /// ```
    pub fn insert(&mut self, edge: Edge) -> bool {
        // The larger endpoint bounds both thanks to edge normalisation.
        assert!(
            edge.hi() < self.node_count,
            "edge endpoint {} outside the node set",
            edge.hi()
        );

        self.edges.insert(edge)
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edge set, ordered by `Edge`'s `Ord`.
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// Checks if the graph contains an edge.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the degree (number of incident edges) of a node.
    ///
    /// Fails with [`Error::UnknownNode`] if the node is outside the node set.
    pub fn degree(&self, node: NodeId) -> Result<usize, Error> {
        if node >= self.node_count {
            return Err(Error::UnknownNode(node));
        }

        Ok(self.edges.iter().filter(|edge| edge.contains(node)).count())
    }

    /// Computes the density of the graph, the ratio of edges with respect to
    /// the maximum possible edges. Graphs with fewer than two nodes have no
    /// possible edges and a density of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    ///
    /// let graph = Graph::from_edges(3, [Edge::new(0, 1), Edge::new(0, 2)]);
    /// assert_eq!(graph.density(), 2.0 / 3.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.node_count as f64;
        let ec = self.edge_count() as f64;

        // Calculate the total number of possible edges given the node count.
        let pec = vc * (vc - 1.0) / 2.0;
        if pec == 0.0 {
            return 0.0;
        }

        // Actual edges divided by the possible edges gives the density.
        ec / pec
    }

    /// Removes every edge incident to `node`, producing a new snapshot with
    /// an identical node set.
    ///
    /// Isolation is idempotent: isolating an already isolated node returns an
    /// equal-valued snapshot. The input snapshot is never modified.
    ///
    /// Fails with [`Error::UnknownNode`] if the node is outside the node set.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    ///
    /// // The path graph 0 - 1 - 2 - 3.
    /// let graph = Graph::from_edges(4, [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3)]);
    /// let isolated = graph.isolate(1)?;
    ///
    /// assert_eq!(isolated.node_count(), 4);
    /// assert_eq!(isolated.edge_count(), 1);
    /// assert!(isolated.contains(&Edge::new(2, 3)));
    /// # Ok::<(), fracture::error::Error>(())
    /// ```
    pub fn isolate(&self, node: NodeId) -> Result<Self, Error> {
        if node >= self.node_count {
            return Err(Error::UnknownNode(node));
        }

        let edges = self
            .edges
            .iter()
            .filter(|edge| !edge.contains(node))
            .copied()
            .collect();

        Ok(Self {
            node_count: self.node_count,
            edges,
        })
    }

    /// Constructs the adjacency matrix for this graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let graph = Graph::from_edges(2, [Edge::new(0, 1)]);
    /// assert_eq!(
    ///     graph.adjacency_matrix(),
    ///     dmatrix![0.0, 1.0;
    ///              1.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&self) -> DMatrix<f64> {
        let mut matrix = DMatrix::<f64>::zeros(self.node_count, self.node_count);

        // Edges are unique and undirected, so each one writes both triangles.
        for edge in &self.edges {
            matrix[(edge.lo(), edge.hi())] = 1.0;
            matrix[(edge.hi(), edge.lo())] = 1.0;
        }

        matrix
    }

    /// Constructs the degree matrix for this graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let graph = Graph::from_edges(2, [Edge::new(0, 1)]);
    /// assert_eq!(
    ///     graph.degree_matrix(),
    ///     dmatrix![1.0, 0.0;
    ///              0.0, 1.0]
    /// );
    /// ```
    pub fn degree_matrix(&self) -> DMatrix<f64> {
        let degrees = self.degrees();

        DMatrix::from_diagonal(&DVector::from_iterator(
            self.node_count,
            degrees.into_iter().map(|degree| degree as f64),
        ))
    }

    /// Constructs the Laplacian matrix `L = D - A` for this graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    /// use nalgebra::dmatrix;
    ///
    /// let graph = Graph::from_edges(2, [Edge::new(0, 1)]);
    /// assert_eq!(
    ///     graph.laplacian_matrix(),
    ///     dmatrix![1.0, -1.0;
    ///              -1.0, 1.0]
    /// );
    /// ```
    pub fn laplacian_matrix(&self) -> DMatrix<f64> {
        self.degree_matrix() - self.adjacency_matrix()
    }

    /// Constructs the symmetrically normalised Laplacian `D^-1/2 L D^-1/2`.
    ///
    /// Nodes of degree 0 get a zero scaling factor: their rows and columns
    /// stay zero, so they contribute an eigenvalue of 0 rather than a
    /// division by zero.
    pub fn normalized_laplacian_matrix(&self) -> DMatrix<f64> {
        let laplacian = self.laplacian_matrix();

        let scale: Vec<f64> = self
            .degrees()
            .into_iter()
            .map(|degree| {
                if degree == 0 {
                    0.0
                } else {
                    1.0 / (degree as f64).sqrt()
                }
            })
            .collect();

        DMatrix::from_fn(self.node_count, self.node_count, |i, j| {
            scale[i] * laplacian[(i, j)] * scale[j]
        })
    }

    /// Returns the number of connected components, counting isolated nodes
    /// as singleton components.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    ///
    /// let graph = Graph::from_edges(4, [Edge::new(2, 3)]);
    /// assert_eq!(graph.component_count(), 3);
    /// ```
    pub fn component_count(&self) -> usize {
        self.component_sizes().len()
    }

    /// Returns the order (node count) of the largest connected component, or
    /// 0 for a graph with no nodes.
    ///
    /// Only the size of the giant component is observable; when several
    /// components tie for largest, any of them is "the" giant and the result
    /// is unaffected.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    ///
    /// let graph = Graph::from_edges(5, [Edge::new(0, 1), Edge::new(1, 2)]);
    /// assert_eq!(graph.giant_order(), 3);
    /// ```
    pub fn giant_order(&self) -> usize {
        self.component_sizes().into_iter().max().unwrap_or(0)
    }

    //
    // Private
    //

    /// Returns the degree of every node, indexed by node id.
    fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count];

        for edge in &self.edges {
            degrees[edge.lo()] += 1;
            degrees[edge.hi()] += 1;
        }

        degrees
    }

    /// Returns the sizes of the connected components, found with a breadth
    /// first traversal over the adjacency lists.
    fn component_sizes(&self) -> Vec<usize> {
        let mut neighbours = vec![Vec::new(); self.node_count];
        for edge in &self.edges {
            neighbours[edge.lo()].push(edge.hi());
            neighbours[edge.hi()].push(edge.lo());
        }

        let mut visited = vec![false; self.node_count];
        let mut sizes = Vec::new();

        for start in 0..self.node_count {
            if visited[start] {
                continue;
            }
            visited[start] = true;

            let mut size = 0;
            let mut queue = VecDeque::from([start]);

            while let Some(node) = queue.pop_front() {
                size += 1;

                for &next in &neighbours[node] {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }

            sizes.push(size);
        }

        sizes
    }
}

//
// Trait implementations
//

impl<'de> Deserialize<'de> for Graph {
    /// Deserialises a graph, rejecting edge sets that reference nodes
    /// outside `{0, .., node_count - 1}`; the construction invariant holds
    /// for hand-crafted input too.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawGraph {
            node_count: usize,
            edges: BTreeSet<Edge>,
        }

        let raw = RawGraph::deserialize(deserializer)?;

        // The larger endpoint bounds both thanks to edge normalisation.
        if let Some(edge) = raw.edges.iter().find(|edge| edge.hi() >= raw.node_count) {
            return Err(serde::de::Error::custom(format!(
                "edge endpoint {} outside the node set of {} nodes",
                edge.hi(),
                raw.node_count
            )));
        }

        Ok(Self {
            node_count: raw.node_count,
            edges: raw.edges,
        })
    }
}
