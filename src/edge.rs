//! A module for working with edges.

use serde::{Deserialize, Serialize};

use crate::graph::NodeId;

/// An unordered pair of distinct nodes representing a graph edge.
///
/// The endpoints are normalised at construction so that `Edge::new(a, b)` and
/// `Edge::new(b, a)` are the same value; equality, hashing and ordering all
/// follow from the normalised form. Deserialisation rejects self-loops and
/// denormalised pairs, so the invariant also holds for hand-crafted input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge {
    lo: NodeId,
    hi: NodeId,
}

impl Edge {
    /// Creates a new edge from two distinct nodes.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`; the graphs in this crate are simple and don't
    /// support self-loops.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1);
    /// assert_eq!(edge, Edge::new(1, 0));
    /// ```
    pub fn new(a: NodeId, b: NodeId) -> Self {
        assert_ne!(a, b, "self-loops are not supported");

        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Returns the smaller endpoint of the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    ///
    /// let edge = Edge::new(3, 1);
    /// assert_eq!(edge.lo(), 1);
    /// ```
    pub fn lo(&self) -> NodeId {
        self.lo
    }

    /// Returns the larger endpoint of the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    ///
    /// let edge = Edge::new(3, 1);
    /// assert_eq!(edge.hi(), 3);
    /// ```
    pub fn hi(&self) -> NodeId {
        self.hi
    }

    /// Returns whether the edge is incident to the given node.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::edge::Edge;
    ///
    /// let edge = Edge::new(0, 1);
    ///
    /// assert!(edge.contains(0));
    /// assert!(edge.contains(1));
    /// assert!(!edge.contains(2));
    /// ```
    pub fn contains(&self, node: NodeId) -> bool {
        self.lo == node || self.hi == node
    }
}

//
// Trait implementations
//

impl<'de> Deserialize<'de> for Edge {
    /// Deserialises an edge, rejecting self-loops and pairs that aren't in
    /// normalised `lo < hi` order.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawEdge {
            lo: NodeId,
            hi: NodeId,
        }

        let raw = RawEdge::deserialize(deserializer)?;

        if raw.lo >= raw.hi {
            return Err(serde::de::Error::custom(format!(
                "edge ({}, {}) is not a normalised pair of distinct nodes",
                raw.lo, raw.hi
            )));
        }

        Ok(Self {
            lo: raw.lo,
            hi: raw.hi,
        })
    }
}
