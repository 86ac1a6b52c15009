//! Dense square matrices.
//!
//! Every matrix in the root-finding pipeline is square and shares a single
//! dimension, so the storage carries one `dim` instead of separate row and
//! column counts. Element access through `Index` is bounds-checked on both
//! coordinates.

use std::ops::{Index, IndexMut, Sub};

use num_traits::Float;

/// Square matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    /// Matrix entries in row-major order.
    data: Vec<T>,
    /// Number of rows, equal to the number of columns.
    dim: usize,
}

impl<T> SquareMatrix<T> {
    /// Returns the dimension `n` of this `n x n` matrix.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns true for the `0 x 0` matrix.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.dim && col < self.dim {
            Some(&self.data[row * self.dim + col])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the entry at (row, col).
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.dim && col < self.dim {
            Some(&mut self.data[row * self.dim + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.dim, "row {row} out of bounds for {dim}x{dim} matrix", dim = self.dim);
        let start = row * self.dim;
        &self.data[start..start + self.dim]
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.dim && col < self.dim,
            "index ({row}, {col}) out of bounds for {dim}x{dim} matrix",
            dim = self.dim
        );
        row * self.dim + col
    }
}

impl<T: Float> SquareMatrix<T> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            data: vec![T::zero(); dim * dim],
            dim,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Creates a matrix whose (row, col) entry is `f(row, col)`.
    #[must_use]
    pub fn from_fn(dim: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(dim * dim);
        for row in 0..dim {
            for col in 0..dim {
                data.push(f(row, col));
            }
        }
        Self { data, dim }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from the number of rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let dim = rows.len();
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), dim, "row {i} has {} entries, expected {dim}", row.len());
        }
        Self {
            data: rows.into_iter().flatten().collect(),
            dim,
        }
    }

    /// Returns the rows as nested vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.dim).map(|r| self.row(r).to_vec()).collect()
    }

    /// Returns the main diagonal in index order.
    #[must_use]
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.dim).map(|i| self[(i, i)]).collect()
    }

    /// Matrix-matrix multiply: C = A * B.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.dim, other.dim, "dimension mismatch in matrix product");

        let n = self.dim;
        let mut result = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..n {
                    sum = sum + self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        result
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.dim, |row, col| self[(col, row)])
    }

    /// Largest absolute entry, zero for the empty matrix.
    #[must_use]
    pub fn max_abs(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, v| acc.max(v.abs()))
    }

    /// Checks that every off-diagonal entry has magnitude at most `tolerance`.
    #[must_use]
    pub fn is_diagonal(&self, tolerance: T) -> bool {
        (0..self.dim).all(|i| {
            (0..self.dim).all(|j| i == j || self[(i, j)].abs() <= tolerance)
        })
    }

    /// Checks that every entry below the diagonal has magnitude at most `tolerance`.
    #[must_use]
    pub fn is_upper_triangular(&self, tolerance: T) -> bool {
        (1..self.dim).all(|i| (0..i).all(|j| self[(i, j)].abs() <= tolerance))
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl<T: Float> Sub for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn sub(self, other: Self) -> SquareMatrix<T> {
        assert_eq!(self.dim, other.dim, "dimension mismatch in matrix difference");

        SquareMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| *a - *b)
                .collect(),
            dim: self.dim,
        }
    }
}
