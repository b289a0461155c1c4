use std::collections::HashSet;

use nalgebra::{DMatrix, Scalar};
use nalgebra_sparse::CsrMatrix;
use num_traits::{One, Zero};

use crate::{coloring_error, ColoringConfig, KempeError};

use self::coloring::nonzeros2graph;

pub mod coloring;

/// Find the non-zero entries of a dense matrix, in column-major order.
pub fn find_non_zeros<T: Scalar + Zero>(m: &DMatrix<T>) -> Vec<(usize, usize)> {
    let mut non_zeros = Vec::new();
    for j in 0..m.ncols() {
        for i in 0..m.nrows() {
            if !m[(i, j)].is_zero() {
                non_zeros.push((i, j));
            }
        }
    }
    non_zeros
}

/// Column coloring of a sparsity pattern.
///
/// Columns of the same color never share a row, so a Jacobian `J` with this pattern can be
/// recovered from the compressed product `B = J S`, where `S` is the seed matrix, with one
/// evaluation per color instead of one per column.
#[derive(Debug, Clone)]
pub struct ColumnColoring {
    nrows: usize,
    ncols: usize,
    colors: Vec<usize>,
    cols_per_color: Vec<Vec<usize>>,
    ij_per_color: Vec<Vec<(usize, usize)>>,
}

impl ColumnColoring {
    /// Color the column-intersection graph of `non_zeros`, visiting columns in index order.
    pub fn new(
        non_zeros: &[(usize, usize)],
        ncols: usize,
        config: &ColoringConfig,
    ) -> Result<Self, KempeError> {
        let mut graph = nonzeros2graph(non_zeros, ncols)?;
        let order = (0..ncols).collect::<Vec<_>>();
        let coloring = graph.color_with_config(&order, config)?;
        let mut cols_per_color = vec![Vec::new(); coloring.ncolors];
        let mut ij_per_color = vec![Vec::new(); coloring.ncolors];
        for (j, &c) in coloring.colors.iter().enumerate() {
            cols_per_color[c].push(j);
        }
        let mut seen = HashSet::with_capacity(non_zeros.len());
        for &(i, j) in non_zeros {
            if seen.insert((i, j)) {
                ij_per_color[coloring.colors[j]].push((i, j));
            }
        }
        let nrows = non_zeros.iter().map(|(i, _j)| i + 1).max().unwrap_or(0);
        Ok(Self {
            nrows,
            ncols,
            colors: coloring.colors,
            cols_per_color,
            ij_per_color,
        })
    }

    pub fn from_csr<T>(m: &CsrMatrix<T>) -> Result<Self, KempeError> {
        let non_zeros = m
            .triplet_iter()
            .map(|(i, j, _v)| (i, j))
            .collect::<Vec<_>>();
        Self::new(&non_zeros, m.ncols(), &ColoringConfig::default())
    }

    pub fn from_dense<T: Scalar + Zero>(m: &DMatrix<T>) -> Result<Self, KempeError> {
        Self::new(&find_non_zeros(m), m.ncols(), &ColoringConfig::default())
    }

    pub fn ncolors(&self) -> usize {
        self.cols_per_color.len()
    }

    pub fn color(&self, col: usize) -> usize {
        self.colors[col]
    }

    pub fn cols_per_color(&self) -> &[Vec<usize>] {
        &self.cols_per_color
    }

    /// The `ncols x ncolors` 0/1 seed matrix with `S[j, color(j)] = 1`.
    pub fn seed_matrix<T: Scalar + Zero + One>(&self) -> DMatrix<T> {
        let mut seed = DMatrix::zeros(self.ncols, self.ncolors());
        for (c, cols) in self.cols_per_color.iter().enumerate() {
            for &j in cols {
                seed[(j, c)] = T::one();
            }
        }
        seed
    }

    /// Read the pattern entries back from a compressed product `B = J S`, using
    /// `J[i, j] = B[i, color(j)]`.
    ///
    /// `B` needs one column per color and a row for every row index in the pattern.
    pub fn recover<T: Scalar>(
        &self,
        compressed: &DMatrix<T>,
    ) -> Result<Vec<(usize, usize, T)>, KempeError> {
        if compressed.ncols() != self.ncolors() {
            return Err(coloring_error!(
                CompressedShapeMismatch,
                compressed.ncols(),
                self.ncolors()
            ));
        }
        if compressed.nrows() < self.nrows {
            return Err(coloring_error!(
                CompressedTooFewRows,
                compressed.nrows(),
                self.nrows - 1
            ));
        }
        let mut triplets = Vec::new();
        for (c, ijs) in self.ij_per_color.iter().enumerate() {
            for &(i, j) in ijs {
                triplets.push((i, j, compressed[(i, c)].clone()));
            }
        }
        Ok(triplets)
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::DMatrix;
    use nalgebra_sparse::{CooMatrix, CsrMatrix};

    use super::{find_non_zeros, ColumnColoring};
    use crate::{ColoringConfig, ColoringError, KempeError};

    #[test]
    fn find_non_zeros_column_major() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 2.0, 3.0]);
        assert_eq!(find_non_zeros(&m), vec![(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn build_coloring() {
        let test_non_zeros: [Vec<(usize, usize)>; 4] = [
            vec![(0, 0), (1, 1)],
            vec![(0, 0), (0, 1), (1, 1)],
            vec![(1, 1)],
            vec![(0, 0), (1, 0), (0, 1), (1, 1)],
        ];
        let expect = [vec![0, 0], vec![0, 1], vec![0, 0], vec![0, 1]];
        for (non_zeros, expect) in test_non_zeros.iter().zip(expect) {
            let coloring = ColumnColoring::new(non_zeros, 2, &ColoringConfig::default()).unwrap();
            let colors = (0..2).map(|j| coloring.color(j)).collect::<Vec<_>>();
            assert_eq!(colors, expect);
        }
    }

    #[test]
    fn tridiagonal_needs_three_colors() {
        let n = 9;
        let mut coo = CooMatrix::new(n, n);
        for i in 0..n {
            for j in i.saturating_sub(1)..(i + 2).min(n) {
                coo.push(i, j, (i * n + j) as f64 + 1.0);
            }
        }
        let csr = CsrMatrix::from(&coo);
        let coloring = ColumnColoring::from_csr(&csr).unwrap();
        assert_eq!(coloring.ncolors(), 3);
        for j in 0..n {
            assert_eq!(coloring.color(j), j % 3);
        }
        assert_eq!(coloring.cols_per_color()[0], vec![0, 3, 6]);
    }

    #[test]
    fn recover_jacobian_from_compressed_product() {
        #[rustfmt::skip]
        let jac = DMatrix::from_row_slice(4, 5, &[
            1.0, 2.0, 0.0, 0.0, 0.0,
            0.0, 3.0, 4.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 5.0, 6.0,
            7.0, 0.0, 0.0, 0.0, 8.0,
        ]);
        let coloring = ColumnColoring::from_dense(&jac).unwrap();
        assert!(coloring.ncolors() < jac.ncols());
        let seed = coloring.seed_matrix::<f64>();
        assert_eq!(seed.shape(), (5, coloring.ncolors()));
        let compressed = &jac * &seed;
        let mut recovered = DMatrix::<f64>::zeros(4, 5);
        for (i, j, v) in coloring.recover(&compressed).unwrap() {
            recovered[(i, j)] = v;
        }
        assert_eq!(recovered, jac);
    }

    #[test]
    fn recover_rejects_wrong_shape() {
        let coloring =
            ColumnColoring::new(&[(0, 0), (0, 1)], 2, &ColoringConfig::default()).unwrap();
        assert!(matches!(
            coloring.recover(&DMatrix::<f64>::zeros(1, 1)),
            Err(KempeError::ColoringError(ColoringError::CompressedShapeMismatch(1, 2)))
        ));
        let coloring =
            ColumnColoring::new(&[(0, 0), (3, 1)], 2, &ColoringConfig::default()).unwrap();
        assert_eq!(coloring.ncolors(), 1);
        assert!(matches!(
            coloring.recover(&DMatrix::<f64>::zeros(1, 1)),
            Err(KempeError::ColoringError(ColoringError::CompressedTooFewRows(1, 3)))
        ));
        assert_eq!(coloring.recover(&DMatrix::<f64>::zeros(4, 1)).unwrap().len(), 2);
    }

    #[test]
    fn repeated_non_zeros_recovered_once() {
        let non_zeros = [(0, 0), (1, 1), (0, 0), (1, 1), (0, 0)];
        let coloring = ColumnColoring::new(&non_zeros, 2, &ColoringConfig::default()).unwrap();
        let compressed = DMatrix::from_row_slice(2, 1, &[5.0, 6.0]);
        let recovered = coloring.recover(&compressed).unwrap();
        assert_eq!(recovered, vec![(0, 0, 5.0), (1, 1, 6.0)]);
    }
}
