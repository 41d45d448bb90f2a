//! Linkage disequilibrium analysis
//!
//! Measures non-random association of alleles at the two loci of each locus
//! pair, from phased haplotype rows.

use aestivo_sim::{GenotypeMatrix, Result};
use rayon::prelude::*;

/// Correlation coefficient `r` between the two loci of every locus pair.
///
/// Every haplotype row is classified by `2 * allele_a + allele_b` into one of
/// four joint classes. With class counts `p`,
///
/// ```text
/// D = p[0]·p[3] − p[1]·p[2]
/// r = D / sqrt((p[0]+p[1])·(p[2]+p[3])·(p[0]+p[2])·(p[1]+p[3]))
/// ```
///
/// Raw counts are used throughout; the row count cancels between numerator
/// and denominator. If either locus of a pair is monomorphic the denominator
/// is zero and that pair's entry is `NaN`; other pairs are unaffected.
///
/// Pairs are evaluated in parallel on the current rayon pool.
///
/// # Errors
/// Returns a shape error if the buffer has an odd number of columns.
///
/// # References
///
/// Hill, W. G., & Robertson, A. (1968). Linkage disequilibrium in finite
/// populations. Theoretical and Applied Genetics, 38(6), 226-231.
pub fn linkage_r(buffer: &GenotypeMatrix) -> Result<Vec<f64>> {
    let pairs = buffer.n_pairs()?;
    Ok((0..pairs)
        .into_par_iter()
        .map(|i| {
            let (a, b) = buffer.pair(i);
            pair_r(a, b)
        })
        .collect())
}

/// `r²` for every locus pair, with the same `NaN` convention as [`linkage_r`].
pub fn r_squared(buffer: &GenotypeMatrix) -> Result<Vec<f64>> {
    Ok(linkage_r(buffer)?.into_iter().map(|r| r * r).collect())
}

/// Joint haplotype class counts of two loci.
fn class_counts(a: &[u8], b: &[u8]) -> [u64; 4] {
    let mut p = [0u64; 4];
    for (&x, &y) in a.iter().zip(b) {
        p[usize::from(2 * x + y)] += 1;
    }
    p
}

fn pair_r(a: &[u8], b: &[u8]) -> f64 {
    let p = class_counts(a, b).map(|n| n as f64);
    let d = p[0] * p[3] - p[1] * p[2];
    let denominator = (p[0] + p[1]) * (p[2] + p[3]) * (p[0] + p[2]) * (p[1] + p[3]);
    if denominator == 0.0 {
        return f64::NAN;
    }
    d / denominator.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_buffer(a: &[u8], b: &[u8]) -> GenotypeMatrix {
        let rows: Vec<[u8; 2]> = a.iter().zip(b).map(|(&x, &y)| [x, y]).collect();
        GenotypeMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_perfect_coupling() {
        let g = pair_buffer(&[1, 0, 1, 0, 1, 1], &[1, 0, 1, 0, 1, 1]);
        let r = linkage_r(&g).unwrap();
        assert_eq!(r.len(), 1);
        assert!((r[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_anti_coupling() {
        let g = pair_buffer(&[1, 0, 1, 0], &[0, 1, 0, 1]);
        let r = linkage_r(&g).unwrap();
        assert!((r[0] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_monomorphic_is_nan() {
        let g = pair_buffer(&[1, 1, 1, 1], &[0, 1, 0, 1]);
        assert!(linkage_r(&g).unwrap()[0].is_nan());
    }

    #[test]
    fn test_independent_loci() {
        // All four classes equally represented
        let g = pair_buffer(&[0, 0, 1, 1], &[0, 1, 0, 1]);
        assert_eq!(linkage_r(&g).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_nan_does_not_spread() {
        let rows = [[1u8, 1, 0, 1], [0, 0, 0, 0], [1, 1, 0, 1], [0, 0, 0, 0]];
        let g = GenotypeMatrix::from_rows(&rows).unwrap();
        let r = linkage_r(&g).unwrap();
        assert!((r[0] - 1.0).abs() < 1e-12);
        assert!(r[1].is_nan());
    }

    #[test]
    fn test_scale_invariance() {
        let a = [1, 0, 1, 1, 0, 0, 1, 0];
        let b = [1, 0, 0, 1, 0, 1, 1, 0];
        let r1 = linkage_r(&pair_buffer(&a, &b)).unwrap()[0];

        let a2: Vec<u8> = a.iter().chain(&a).chain(&a).copied().collect();
        let b2: Vec<u8> = b.iter().chain(&b).chain(&b).copied().collect();
        let r3 = linkage_r(&pair_buffer(&a2, &b2)).unwrap()[0];
        assert!((r1 - r3).abs() < 1e-12);
    }

    #[test]
    fn test_odd_columns_rejected() {
        let g = GenotypeMatrix::zeros(2, 3);
        assert!(linkage_r(&g).is_err());
    }

    #[test]
    fn test_r_squared() {
        let g = pair_buffer(&[1, 0, 1, 0], &[0, 1, 0, 1]);
        let r2 = r_squared(&g).unwrap();
        assert!((r2[0] - 1.0).abs() < 1e-12);
    }
}
