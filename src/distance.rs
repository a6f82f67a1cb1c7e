//! Structural distance measures between graph snapshots.
//!
//! All three distances are defined only over snapshot pairs with equal node
//! count, are non-negative, and are zero for identical edge sets.

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    graph::Graph,
    spectrum::{laplacian_spectrum, normalized_laplacian_spectrum, Spectrum},
};

/// The structural-distance metric used to score isolation candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    /// Euclidean distance between Laplacian spectra.
    Laplacian,
    /// Euclidean distance between normalised-Laplacian spectra.
    NormalizedLaplacian,
    /// Relative change in the order of the largest connected component.
    GiantOrder,
}

impl Metric {
    /// Computes this metric's distance between two snapshots.
    ///
    /// # Examples
    ///
    /// ```
    /// use fracture::distance::Metric;
    /// use fracture::edge::Edge;
    /// use fracture::graph::Graph;
    ///
    /// let graph = Graph::from_edges(3, [Edge::new(0, 1), Edge::new(1, 2)]);
    ///
    /// assert_eq!(Metric::Laplacian.distance(&graph, &graph)?, 0.0);
    /// # Ok::<(), fracture::error::Error>(())
    /// ```
    pub fn distance(&self, g0: &Graph, g1: &Graph) -> Result<f64, Error> {
        match self {
            Self::Laplacian => laplacian_distance(g0, g1),
            Self::NormalizedLaplacian => normalized_laplacian_distance(g0, g1),
            Self::GiantOrder => giant_order_distance(g0, g1),
        }
    }
}

/// Euclidean norm of the elementwise difference between the Laplacian
/// spectra of the two snapshots.
///
/// Fails with [`Error::IncomparableGraphs`] if the node counts differ.
pub fn laplacian_distance(g0: &Graph, g1: &Graph) -> Result<f64, Error> {
    check_comparable(g0, g1)?;

    Ok(spectrum_distance(
        &laplacian_spectrum(g0),
        &laplacian_spectrum(g1),
    ))
}

/// Euclidean norm of the elementwise difference between the normalised
/// Laplacian spectra of the two snapshots.
///
/// Fails with [`Error::IncomparableGraphs`] if the node counts differ.
pub fn normalized_laplacian_distance(g0: &Graph, g1: &Graph) -> Result<f64, Error> {
    check_comparable(g0, g1)?;

    Ok(spectrum_distance(
        &normalized_laplacian_spectrum(g0),
        &normalized_laplacian_spectrum(g1),
    ))
}

/// Relative change in giant-component order, measured against `g0`'s giant:
/// `|giant(g1) - giant(g0)| / giant(g0)`.
///
/// Fails with [`Error::IncomparableGraphs`] if the node counts differ and
/// with [`Error::DegenerateReference`] if `g0`'s giant has order 0 (only
/// possible for a zero-node graph).
pub fn giant_order_distance(g0: &Graph, g1: &Graph) -> Result<f64, Error> {
    check_comparable(g0, g1)?;

    let reference = g0.giant_order();
    if reference == 0 {
        return Err(Error::DegenerateReference);
    }

    Ok((g1.giant_order() as f64 - reference as f64).abs() / reference as f64)
}

fn check_comparable(g0: &Graph, g1: &Graph) -> Result<(), Error> {
    if g0.node_count() != g1.node_count() {
        return Err(Error::IncomparableGraphs {
            left: g0.node_count(),
            right: g1.node_count(),
        });
    }

    Ok(())
}

fn spectrum_distance(s0: &Spectrum, s1: &Spectrum) -> f64 {
    s0.eigenvalues()
        .iter()
        .zip(s1.eigenvalues())
        .map(|(a, b)| (a - b).powi(2))
        .sum::<f64>()
        .sqrt()
}
