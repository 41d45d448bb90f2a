//! Allele frequency analysis

use aestivo_sim::GenotypeMatrix;
use rayon::prelude::*;

/// Frequency of allele 1 in every locus column.
///
/// Each column is averaged over all haplotype rows, so the result has one
/// entry per column and every entry lies in [0, 1]. Columns are evaluated in
/// parallel on the current rayon pool; wrap the call in
/// [`aestivo_sim::base::WorkerPool::install`] to bound the worker count.
///
/// A buffer with zero rows has no haplotypes to average over and yields
/// `NaN` for every column.
///
/// # Examples
///
/// ```
/// use aestivo_analysis::allele_frequencies;
/// use aestivo_sim::GenotypeMatrix;
///
/// let g = GenotypeMatrix::from_rows(&[[1u8, 0], [1, 0], [0, 1], [1, 1]]).unwrap();
/// assert_eq!(allele_frequencies(&g), vec![0.75, 0.5]);
/// ```
pub fn allele_frequencies(buffer: &GenotypeMatrix) -> Vec<f64> {
    let rows = buffer.rows() as f64;
    (0..buffer.cols())
        .into_par_iter()
        .map(|c| {
            let ones: u64 = buffer.column(c).iter().map(|&a| u64::from(a)).sum();
            ones as f64 / rows
        })
        .collect()
}
