//! Fidelity kernel
//!
//! `k(a, b) = |<psi(a)|psi(b)>|^2` where `psi` is the [`ZzFeatureMap`]
//! encoding. The score lies in [0, 1], equals 1 for identical inputs and is
//! bitwise symmetric.

use super::feature_map::{Amplitude, ZzFeatureMap};
use regression_spi::{Result, SimilarityKernel};

/// Squared-overlap kernel over a ZZ feature map
#[derive(Debug, Clone, PartialEq)]
pub struct FidelityKernel {
    feature_map: ZzFeatureMap,
}

impl FidelityKernel {
    pub fn new(feature_map: ZzFeatureMap) -> Self {
        Self { feature_map }
    }

    pub fn feature_map(&self) -> &ZzFeatureMap {
        &self.feature_map
    }

    fn encode_all(&self, xs: &[Vec<f64>]) -> Result<Vec<Vec<Amplitude>>> {
        xs.iter().map(|x| self.feature_map.encode(x)).collect()
    }
}

/// Squared magnitude of the inner product of two statevectors
///
/// The real part sums products that commute and the imaginary part flips
/// sign exactly when the arguments are swapped, so the result is symmetric
/// bit for bit.
pub(crate) fn fidelity(a: &[Amplitude], b: &[Amplitude]) -> f64 {
    let mut re = 0.0;
    let mut im = 0.0;
    for (x, y) in a.iter().zip(b) {
        re += x.re * y.re + x.im * y.im;
        im += x.re * y.im - x.im * y.re;
    }
    (re * re + im * im).clamp(0.0, 1.0)
}

impl SimilarityKernel for FidelityKernel {
    fn evaluate(&self, a: &[f64], b: &[f64]) -> Result<f64> {
        let psi_a = self.feature_map.encode(a)?;
        let psi_b = self.feature_map.encode(b)?;
        Ok(fidelity(&psi_a, &psi_b))
    }

    fn name(&self) -> &str {
        "fidelity"
    }

    // Each vector is encoded once instead of once per pair.
    fn gram_matrix(&self, xs: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let states = self.encode_all(xs)?;
        let n = states.len();
        let mut gram = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i..n {
                let value = fidelity(&states[i], &states[j]);
                gram[i][j] = value;
                gram[j][i] = value;
            }
        }
        Ok(gram)
    }

    fn cross_matrix(&self, rows: &[Vec<f64>], columns: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        let row_states = self.encode_all(rows)?;
        let column_states = self.encode_all(columns)?;
        Ok(row_states
            .iter()
            .map(|row| {
                column_states
                    .iter()
                    .map(|column| fidelity(row, column))
                    .collect()
            })
            .collect())
    }
}
