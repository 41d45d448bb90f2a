//! Dense binary genotype buffers.
//!
//! A [`GenotypeMatrix`] stores one allele (0 or 1) per cell. Rows are
//! haplotypes and always come in pairs: rows `2k` and `2k + 1` are the two
//! chromosome copies of individual `k`. Columns are loci. In the locus-pair
//! layout used by reproduction and the compartment shift, columns `2i` and
//! `2i + 1` hold locus A and locus B of pair `i`.
//!
//! Storage is column-major: each locus column is one contiguous slice. Every
//! parallel operation in this crate partitions its output by column (or by
//! pair of columns), so each task owns a disjoint `&mut [u8]` and no locking
//! is required.

use crate::errors::{Result, SimError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A dense, column-major matrix of 0/1 alleles with an even number of rows.
///
/// Deserialization goes through [`GenotypeMatrix::from_column_major`], so a
/// decoded matrix satisfies the same invariants as a constructed one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGenotypeMatrix")]
pub struct GenotypeMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

/// Unchecked wire form of a [`GenotypeMatrix`].
#[derive(Deserialize)]
struct RawGenotypeMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u8>,
}

impl TryFrom<RawGenotypeMatrix> for GenotypeMatrix {
    type Error = SimError;

    fn try_from(raw: RawGenotypeMatrix) -> Result<Self> {
        Self::from_column_major(raw.rows, raw.cols, raw.data)
    }
}

impl GenotypeMatrix {
    /// Create an all-zero matrix for `n_individuals` diploid individuals.
    pub fn zeros(n_individuals: usize, cols: usize) -> Self {
        let rows = 2 * n_individuals;
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Create a matrix from column-major data, validating every invariant.
    ///
    /// # Errors
    /// Returns a shape error if `rows` is odd or `data.len() != rows * cols`,
    /// and [`SimError::InvalidAllele`] if any cell is not 0 or 1.
    pub fn from_column_major(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self> {
        if rows % 2 != 0 {
            return Err(SimError::shape("haplotype rows (must be even)", rows + 1, rows));
        }
        if data.len() != rows * cols {
            return Err(SimError::shape("genotype data length", rows * cols, data.len()));
        }
        if let Some(pos) = data.iter().position(|&a| a > 1) {
            return Err(SimError::InvalidAllele {
                row: pos % rows,
                col: pos / rows,
                value: data[pos],
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from haplotype rows.
    ///
    /// Convenient for tests and for callers holding row-major data. All rows
    /// must have the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let n_rows = rows.len();
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = vec![0u8; n_rows * cols];
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(SimError::shape("haplotype row length", cols, row.len()));
            }
            for (c, &allele) in row.iter().enumerate() {
                data[c * n_rows + r] = allele;
            }
        }
        Self::from_column_major(n_rows, cols, data)
    }

    /// Build a matrix from already-validated column-major data.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(rows % 2, 0);
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Number of haplotype rows (always even).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of locus columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of diploid individuals.
    #[inline]
    pub fn n_individuals(&self) -> usize {
        self.rows / 2
    }

    /// Number of locus pairs when read in the locus-pair layout.
    ///
    /// # Errors
    /// Returns a shape error if the column count is odd.
    pub fn n_pairs(&self) -> Result<usize> {
        if self.cols % 2 != 0 {
            return Err(SimError::shape(
                "locus-pair columns (must be even)",
                self.cols + 1,
                self.cols,
            ));
        }
        Ok(self.cols / 2)
    }

    /// True when the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allele at (`row`, `col`), if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.rows && col < self.cols {
            Some(self.data[col * self.rows + row])
        } else {
            None
        }
    }

    /// All alleles of one locus column.
    ///
    /// # Panics
    /// Panics if `col >= self.cols()`.
    #[inline]
    pub fn column(&self, col: usize) -> &[u8] {
        assert!(col < self.cols, "column {col} out of bounds ({})", self.cols);
        &self.data[col * self.rows..(col + 1) * self.rows]
    }

    /// Iterate over locus columns in order.
    pub fn columns(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.cols).map(move |c| self.column(c))
    }

    /// Locus A and locus B columns of pair `pair`.
    pub fn pair(&self, pair: usize) -> (&[u8], &[u8]) {
        (self.column(2 * pair), self.column(2 * pair + 1))
    }

    /// Copy out one haplotype row.
    pub fn row(&self, row: usize) -> Vec<u8> {
        self.columns().map(|col| col[row]).collect()
    }

    /// Copy out the two haplotype rows of individual `k`.
    pub fn individual(&self, k: usize) -> [Vec<u8>; 2] {
        [self.row(2 * k), self.row(2 * k + 1)]
    }

    /// Raw column-major data.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the matrix and return its column-major data.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Copy a contiguous range of individuals into a new matrix.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the range runs past the last
    /// individual.
    pub fn slice_individuals(&self, individuals: Range<usize>) -> Result<Self> {
        if individuals.start > individuals.end || individuals.end > self.n_individuals() {
            return Err(SimError::invalid_argument(format!(
                "individual range {}..{} out of bounds for {} individuals",
                individuals.start,
                individuals.end,
                self.n_individuals()
            )));
        }
        let rows = 2 * (individuals.end - individuals.start);
        let haplotypes = 2 * individuals.start..2 * individuals.end;
        let mut out = Self::from_raw(rows, self.cols, vec![0; rows * self.cols]);
        out.par_columns_mut(|c, col| col.copy_from_slice(&self.column(c)[haplotypes.clone()]));
        Ok(out)
    }

    /// Run `fill` once per column, in parallel, each call owning its column.
    ///
    /// `fill` receives the column index and the column's mutable slice. Does
    /// nothing for matrices without rows or columns.
    pub(crate) fn par_columns_mut<F>(&mut self, fill: F)
    where
        F: Fn(usize, &mut [u8]) + Sync + Send,
    {
        if self.rows == 0 || self.cols == 0 {
            return;
        }
        self.data
            .par_chunks_mut(self.rows)
            .enumerate()
            .for_each(|(c, col)| fill(c, col));
    }

    /// Run `fill` once per locus pair, in parallel, each call owning the two
    /// columns of its pair.
    pub(crate) fn par_pairs_mut<F>(&mut self, fill: F)
    where
        F: Fn(usize, &mut [u8], &mut [u8]) + Sync + Send,
    {
        if self.rows == 0 || self.cols < 2 {
            return;
        }
        let rows = self.rows;
        self.data
            .par_chunks_mut(2 * rows)
            .enumerate()
            .for_each(|(i, block)| {
                let (col_a, col_b) = block.split_at_mut(rows);
                fill(i, col_a, col_b);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GenotypeMatrix {
        GenotypeMatrix::from_rows(&[[1u8, 0], [1, 0], [0, 1], [1, 1]]).unwrap()
    }

    #[test]
    fn test_from_rows_is_column_major() {
        let m = sample();
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.column(0), &[1, 1, 0, 1]);
        assert_eq!(m.column(1), &[0, 0, 1, 1]);
        assert_eq!(m.get(2, 1), Some(1));
        assert_eq!(m.get(4, 0), None);
    }

    #[test]
    fn test_odd_rows_rejected() {
        let err = GenotypeMatrix::from_rows(&[[0u8, 1], [1, 1], [0, 0]]).unwrap_err();
        assert!(matches!(err, SimError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_invalid_allele_rejected() {
        let err = GenotypeMatrix::from_column_major(2, 1, vec![0, 2]).unwrap_err();
        assert!(matches!(
            err,
            SimError::InvalidAllele {
                row: 1,
                col: 0,
                value: 2
            }
        ));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![0, 1], vec![1]];
        assert!(GenotypeMatrix::from_rows(&rows).is_err());
    }

    #[test]
    fn test_n_pairs() {
        assert_eq!(sample().n_pairs().unwrap(), 1);
        let odd = GenotypeMatrix::zeros(2, 3);
        assert!(odd.n_pairs().is_err());
        assert_eq!(GenotypeMatrix::zeros(2, 0).n_pairs().unwrap(), 0);
    }

    #[test]
    fn test_rows_and_individuals() {
        let m = sample();
        assert_eq!(m.n_individuals(), 2);
        assert_eq!(m.row(2), vec![0, 1]);
        assert_eq!(m.individual(1), [vec![0, 1], vec![1, 1]]);
    }

    #[test]
    fn test_slice_individuals() {
        let m = sample();
        let tail = m.slice_individuals(1..2).unwrap();
        assert_eq!(tail.rows(), 2);
        assert_eq!(tail.row(0), vec![0, 1]);
        assert_eq!(tail.row(1), vec![1, 1]);

        let empty = m.slice_individuals(1..1).unwrap();
        assert_eq!(empty.rows(), 0);
        assert_eq!(empty.cols(), 2);

        assert!(m.slice_individuals(1..3).is_err());
    }

    #[test]
    fn test_par_pairs_mut_writes_disjoint_columns() {
        let mut m = GenotypeMatrix::zeros(2, 4);
        m.par_pairs_mut(|i, a, b| {
            a.fill(1);
            if i == 1 {
                b.fill(1);
            }
        });
        assert_eq!(m.column(0), &[1, 1, 1, 1]);
        assert_eq!(m.column(1), &[0, 0, 0, 0]);
        assert_eq!(m.column(2), &[1, 1, 1, 1]);
        assert_eq!(m.column(3), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_deserialize_validates() {
        let m: GenotypeMatrix =
            serde_json::from_str(r#"{"rows":2,"cols":2,"data":[1,0,0,1]}"#).unwrap();
        assert_eq!(m.get(0, 0), Some(1));
        assert_eq!(m.get(1, 1), Some(1));

        // Odd rows, bad allele values, and mismatched lengths are all rejected
        for bad in [
            r#"{"rows":3,"cols":2,"data":[7,0]}"#,
            r#"{"rows":2,"cols":1,"data":[0,2]}"#,
            r#"{"rows":2,"cols":2,"data":[0,1,1]}"#,
        ] {
            assert!(serde_json::from_str::<GenotypeMatrix>(bad).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_serialize_round_trip() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<GenotypeMatrix>(&json).unwrap(), m);
    }

    #[test]
    fn test_zero_row_matrix_is_valid() {
        let mut m = GenotypeMatrix::zeros(0, 4);
        m.par_columns_mut(|_, _| unreachable!());
        assert!(m.is_empty());
        assert_eq!(m.column(3), &[] as &[u8]);
    }
}
