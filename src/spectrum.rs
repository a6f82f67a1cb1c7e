//! Eigenvalue spectra of graph snapshots.

use nalgebra::{DMatrix, SymmetricEigen};

use crate::graph::Graph;

/// The real eigenvalue spectrum of a graph matrix, sorted ascending.
///
/// Two spectra are comparable only if they were computed from snapshots with
/// equal node count; the distance functions enforce this.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    eigenvalues: Vec<f64>,
}

impl Spectrum {
    /// Returns the eigenvalues in ascending order.
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Returns the number of eigenvalues, equal to the node count of the
    /// snapshot the spectrum was computed from.
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Returns whether the spectrum is empty (zero-node snapshot).
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }
}

/// Computes the eigenvalue spectrum of the graph's Laplacian matrix.
///
/// This is a dense decomposition, O(n³) in the node count.
///
/// # Examples
///
/// ```
/// use fracture::edge::Edge;
/// use fracture::graph::Graph;
/// use fracture::spectrum::laplacian_spectrum;
///
/// let graph = Graph::from_edges(2, [Edge::new(0, 1)]);
/// let spectrum = laplacian_spectrum(&graph);
///
/// assert_eq!(spectrum.len(), 2);
/// // The smallest Laplacian eigenvalue of any graph is 0.
/// assert!(spectrum.eigenvalues()[0].abs() < 1e-12);
/// ```
pub fn laplacian_spectrum(graph: &Graph) -> Spectrum {
    sorted_eigenvalues(graph.laplacian_matrix())
}

/// Computes the eigenvalue spectrum of the graph's normalised Laplacian
/// matrix.
///
/// Nodes of degree 0 contribute an eigenvalue of 0 by convention.
pub fn normalized_laplacian_spectrum(graph: &Graph) -> Spectrum {
    sorted_eigenvalues(graph.normalized_laplacian_matrix())
}

/// Computes the real eigenvalues of the supplied symmetric matrix, ascending.
fn sorted_eigenvalues(matrix: DMatrix<f64>) -> Spectrum {
    // The decomposition requires a matrix with at least a dim of 1x1.
    if matrix.is_empty() {
        return Spectrum {
            eigenvalues: vec![],
        };
    }

    let eigen = SymmetricEigen::new(matrix);

    let mut eigenvalues: Vec<f64> = eigen.eigenvalues.iter().copied().collect();
    eigenvalues.sort_unstable_by(f64::total_cmp);

    Spectrum { eigenvalues }
}
