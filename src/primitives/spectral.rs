//! Dense symmetric eigensolver used for the signed Laplacian's Fiedler
//! vector.
//!
//! The teacher's CSR graph layer never needs a linear-algebra dependency —
//! its algorithms are purely combinatorial. The spectral bipartition this
//! crate needs has no combinatorial substitute, so it borrows `nalgebra`'s
//! dense symmetric eigendecomposition the way `habedi-graphina` and
//! `malcolmvr-graphrs` (both graph-analytics crates) do for the same class
//! of problem.

use nalgebra::{DMatrix, DVector};

/// Returns the eigenvector associated with the second-smallest eigenvalue
/// (the Fiedler vector) of the symmetric matrix `laplacian`.
///
/// `nalgebra::SymmetricEigen` sorts eigenpairs in ascending eigenvalue
/// order, so the Fiedler vector is simply the second column. For `n < 2`
/// there is no second eigenvector; callers should treat that as "no
/// bipartition signal" (every node goes to the first cluster).
pub fn fiedler_vector(laplacian: &DMatrix<f64>) -> Option<DVector<f64>> {
    let n = laplacian.nrows();
    if n < 2 {
        return None;
    }

    let eigen = nalgebra::SymmetricEigen::new(laplacian.clone());
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[a]
            .partial_cmp(&eigen.eigenvalues[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let fiedler_col = order[1];
    Some(eigen.eigenvectors.column(fiedler_col).into_owned())
}

/// Builds the signed Laplacian `L = D - A` where `D` is the diagonal of
/// absolute row sums of the signed adjacency matrix `A`.
pub fn signed_laplacian(signed_adjacency: &DMatrix<f64>) -> DMatrix<f64> {
    let n = signed_adjacency.nrows();
    let mut laplacian = -signed_adjacency.clone();
    for i in 0..n {
        let degree: f64 = (0..n).map(|j| signed_adjacency[(i, j)].abs()).sum();
        laplacian[(i, i)] += degree;
    }
    laplacian
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fiedler_is_none_below_two_nodes() {
        let laplacian = DMatrix::<f64>::zeros(1, 1);
        assert!(fiedler_vector(&laplacian).is_none());
    }

    #[test]
    fn signed_laplacian_of_positive_triangle_has_zero_row_sums() {
        // a-b, b-c, a-c all positive
        let mut a = DMatrix::<f64>::zeros(3, 3);
        for &(i, j) in &[(0usize, 1usize), (1, 2), (0, 2)] {
            a[(i, j)] = 1.0;
            a[(j, i)] = 1.0;
        }
        let l = signed_laplacian(&a);
        for i in 0..3 {
            let row_sum: f64 = (0..3).map(|j| l[(i, j)]).sum();
            assert!(row_sum.abs() < 1e-9);
        }
    }
}
