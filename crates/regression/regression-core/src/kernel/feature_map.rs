//! ZZ feature map
//!
//! Encodes a feature vector `x` of dimension `n` into a statevector of
//! `2^n` complex amplitudes. Starting from the all-zero basis state, each
//! repetition applies a Hadamard to every qubit followed by the diagonal phase
//!
//! ```text
//! theta_b(x) = alpha * ( sum_k x_k * b_k + sum_(p,q) (pi - x_p)(pi - x_q) * (b_p XOR b_q) )
//! ```
//!
//! where `b` ranges over basis states and `(p, q)` over the entangled pairs.
//! The pairwise products and trigonometric phases give a fixed nonlinear
//! expansion that is never materialized outside of the statevector.

use regression_spi::{RegressionError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Largest supported feature dimension (statevector of 1024 amplitudes)
pub const MAX_FEATURE_DIMENSION: usize = 10;

/// Which coordinate pairs receive a pairwise phase term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Entanglement {
    /// Every pair `p < q`
    #[default]
    Full,
    /// Consecutive pairs `(q - 1, q)`
    Linear,
}

impl Entanglement {
    /// Coordinate pairs for a feature vector of dimension `n`
    pub fn pairs(&self, n: usize) -> Vec<(usize, usize)> {
        match self {
            Entanglement::Full => (0..n)
                .flat_map(|p| ((p + 1)..n).map(move |q| (p, q)))
                .collect(),
            Entanglement::Linear => (1..n).map(|q| (q - 1, q)).collect(),
        }
    }
}

/// Complex amplitude of a single basis state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Amplitude {
    pub re: f64,
    pub im: f64,
}

impl Amplitude {
    pub const ONE: Amplitude = Amplitude { re: 1.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Unit amplitude `exp(i * theta)`
    pub fn from_phase(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }

    /// Squared magnitude (probability of the basis state)
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    fn mul(self, other: Amplitude) -> Amplitude {
        Amplitude {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

/// Hadamard + pairwise-phase encoding of feature vectors
#[derive(Debug, Clone, PartialEq)]
pub struct ZzFeatureMap {
    feature_dimension: usize,
    reps: usize,
    entanglement: Entanglement,
    alpha: f64,
    pairs: Vec<(usize, usize)>,
}

impl ZzFeatureMap {
    /// Create a feature map with full entanglement and `alpha = 2`
    ///
    /// # Arguments
    ///
    /// * `feature_dimension` - Number of coordinates per vector (1 to 10)
    /// * `reps` - Number of Hadamard + phase repetitions (at least 1)
    pub fn new(feature_dimension: usize, reps: usize) -> Result<Self> {
        if feature_dimension == 0 || feature_dimension > MAX_FEATURE_DIMENSION {
            return Err(RegressionError::InvalidParameter {
                name: "feature_dimension".to_string(),
                reason: format!("must be between 1 and {}", MAX_FEATURE_DIMENSION),
            });
        }
        if reps == 0 {
            return Err(RegressionError::InvalidParameter {
                name: "reps".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let entanglement = Entanglement::default();
        Ok(Self {
            feature_dimension,
            reps,
            entanglement,
            alpha: 2.0,
            pairs: entanglement.pairs(feature_dimension),
        })
    }

    /// Use a different pair layout
    pub fn with_entanglement(mut self, entanglement: Entanglement) -> Self {
        self.entanglement = entanglement;
        self.pairs = entanglement.pairs(self.feature_dimension);
        self
    }

    /// Use a different phase scale
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        if !alpha.is_finite() || alpha == 0.0 {
            return Err(RegressionError::InvalidParameter {
                name: "alpha".to_string(),
                reason: "must be finite and non-zero".to_string(),
            });
        }
        self.alpha = alpha;
        Ok(self)
    }

    pub fn feature_dimension(&self) -> usize {
        self.feature_dimension
    }

    pub fn reps(&self) -> usize {
        self.reps
    }

    pub fn entanglement(&self) -> Entanglement {
        self.entanglement
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Number of amplitudes in an encoded statevector
    pub fn state_size(&self) -> usize {
        1 << self.feature_dimension
    }

    /// Encode `x` into a normalized statevector
    pub fn encode(&self, x: &[f64]) -> Result<Vec<Amplitude>> {
        if x.len() != self.feature_dimension {
            return Err(RegressionError::DimensionMismatch {
                expected: self.feature_dimension,
                actual: x.len(),
            });
        }

        let size = self.state_size();
        let phases: Vec<Amplitude> = (0..size)
            .map(|basis| Amplitude::from_phase(self.phase(x, basis)))
            .collect();

        let mut state = vec![Amplitude::default(); size];
        state[0] = Amplitude::ONE;

        for _ in 0..self.reps {
            hadamard_all(&mut state, self.feature_dimension);
            for (amplitude, phase) in state.iter_mut().zip(&phases) {
                *amplitude = amplitude.mul(*phase);
            }
        }

        Ok(state)
    }

    fn phase(&self, x: &[f64], basis: usize) -> f64 {
        let bit = |k: usize| (basis >> k) & 1 == 1;

        let mut theta = 0.0;
        for (k, &value) in x.iter().enumerate() {
            if bit(k) {
                theta += value;
            }
        }
        for &(p, q) in &self.pairs {
            if bit(p) != bit(q) {
                theta += (PI - x[p]) * (PI - x[q]);
            }
        }

        self.alpha * theta
    }
}

/// Apply a Hadamard to each of the `qubits` lowest bits of the basis index
fn hadamard_all(state: &mut [Amplitude], qubits: usize) {
    for qubit in 0..qubits {
        let stride = 1 << qubit;
        for i in 0..state.len() {
            if i & stride != 0 {
                continue;
            }
            let j = i | stride;
            let (a, b) = (state[i], state[j]);
            state[i] = Amplitude::new((a.re + b.re) * FRAC_1_SQRT_2, (a.im + b.im) * FRAC_1_SQRT_2);
            state[j] = Amplitude::new((a.re - b.re) * FRAC_1_SQRT_2, (a.im - b.im) * FRAC_1_SQRT_2);
        }
    }
}
