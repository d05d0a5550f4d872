//! Similarity kernel trait
//!
//! A kernel maps two feature vectors to a bounded, symmetric similarity score.
//! Regressors only ever see the kernel through this trait, so any pairwise
//! function can stand in for an explicit feature-space inner product.

use crate::error::Result;

/// Symmetric pairwise similarity between two feature vectors
///
/// Implementations must satisfy `evaluate(a, b) == evaluate(b, a)` and
/// `evaluate(a, a) == 1` (within floating-point tolerance).
///
/// # Example
///
/// ```rust,ignore
/// use regression_spi::SimilarityKernel;
///
/// fn self_similarity<K: SimilarityKernel>(kernel: &K, x: &[f64]) -> regression_spi::Result<f64> {
///     kernel.evaluate(x, x)
/// }
/// ```
pub trait SimilarityKernel {
    /// Similarity score between `a` and `b`
    fn evaluate(&self, a: &[f64], b: &[f64]) -> Result<f64>;

    /// Name of this kernel, used in log output
    fn name(&self) -> &str;

    /// Full pairwise similarity matrix over `xs`
    ///
    /// Only the upper triangle is evaluated; the lower triangle is mirrored.
    fn gram_matrix(&self, xs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let n = xs.len();
        let mut gram = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let value = self.evaluate(&xs[i], &xs[j])?;
                gram[i][j] = value;
                gram[j][i] = value;
            }
        }
        Ok(gram)
    }

    /// Similarity of every row of `rows` against every row of `columns`
    fn cross_matrix(&self, rows: &[Vec<f64>], columns: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        rows.iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| self.evaluate(row, column))
                    .collect::<Result<Vec<f64>>>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegressionError;

    /// Mock implementation: exp(-|a - b|^2)
    struct GaussianKernel;

    impl SimilarityKernel for GaussianKernel {
        fn evaluate(&self, a: &[f64], b: &[f64]) -> Result<f64> {
            if a.len() != b.len() {
                return Err(RegressionError::DimensionMismatch {
                    expected: a.len(),
                    actual: b.len(),
                });
            }
            let dist: f64 = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
            Ok((-dist).exp())
        }

        fn name(&self) -> &str {
            "gaussian"
        }
    }

    #[test]
    fn test_gram_matrix_is_symmetric_with_unit_diagonal() {
        let xs = vec![vec![0.0, 0.0], vec![0.5, 0.1], vec![1.0, 1.0]];
        let gram = GaussianKernel.gram_matrix(&xs).unwrap();

        assert_eq!(gram.len(), 3);
        for i in 0..3 {
            assert!((gram[i][i] - 1.0).abs() < 1e-12);
            for j in 0..3 {
                assert_eq!(gram[i][j], gram[j][i]);
            }
        }
    }

    #[test]
    fn test_gram_matrix_empty() {
        let gram = GaussianKernel.gram_matrix(&[]).unwrap();
        assert!(gram.is_empty());
    }

    #[test]
    fn test_cross_matrix_shape() {
        let rows = vec![vec![0.0, 0.0], vec![1.0, 0.0]];
        let columns = vec![vec![0.0, 0.0], vec![0.2, 0.2], vec![1.0, 1.0]];
        let cross = GaussianKernel.cross_matrix(&rows, &columns).unwrap();

        assert_eq!(cross.len(), 2);
        assert!(cross.iter().all(|row| row.len() == 3));
        assert!((cross[0][0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_gram_matrix_propagates_errors() {
        let xs = vec![vec![0.0, 0.0], vec![1.0]];
        let result = GaussianKernel.gram_matrix(&xs);
        assert!(matches!(
            result,
            Err(RegressionError::DimensionMismatch { .. })
        ));
    }
}
