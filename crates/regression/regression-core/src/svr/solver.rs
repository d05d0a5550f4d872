//! SMO solver for the epsilon-SVR dual
//!
//! The dual has `2l` variables: `alpha[t]` for `t < l` pushes the prediction
//! up towards `y[t]`, `alpha[t + l]` pushes it down. With `s[t] = +1` for the
//! first half and `-1` for the second, the problem is
//!
//! ```text
//! min  1/2 a'Qa + p'a    s.t.  s'a = 0,  0 <= a <= C
//! Q[i][j] = s[i] s[j] K(i mod l, j mod l)
//! p[t] = epsilon - y[t],  p[t + l] = epsilon + y[t]
//! ```
//!
//! Each iteration picks a maximal-violating pair with second-order working
//! set selection, solves the two-variable subproblem analytically and updates
//! the gradient.

const TAU: f64 = 1e-12;

/// Result of a solver run
#[derive(Debug, Clone)]
pub(crate) struct SmoSolution {
    /// `alpha[t] - alpha[t + l]` for every training sample
    pub coefficients: Vec<f64>,
    /// Offset subtracted from the kernel expansion
    pub rho: f64,
    pub iterations: usize,
    pub converged: bool,
}

struct Problem<'a> {
    gram: &'a [Vec<f64>],
    sign: Vec<f64>,
    diag: Vec<f64>,
    l: usize,
    c: f64,
}

impl Problem<'_> {
    fn q(&self, i: usize, j: usize) -> f64 {
        self.sign[i] * self.sign[j] * self.gram[i % self.l][j % self.l]
    }

    fn is_upper(&self, alpha: f64) -> bool {
        alpha >= self.c
    }

    fn is_lower(&self, alpha: f64) -> bool {
        alpha <= 0.0
    }
}

pub(crate) fn solve_epsilon_svr(
    gram: &[Vec<f64>],
    targets: &[f64],
    c: f64,
    epsilon: f64,
    tolerance: f64,
    max_iterations: usize,
) -> SmoSolution {
    let l = targets.len();
    let n = 2 * l;

    let problem = Problem {
        gram,
        sign: (0..n).map(|t| if t < l { 1.0 } else { -1.0 }).collect(),
        diag: (0..n).map(|t| gram[t % l][t % l]).collect(),
        l,
        c,
    };

    let mut alpha = vec![0.0; n];
    let mut gradient: Vec<f64> = (0..n)
        .map(|t| {
            if t < l {
                epsilon - targets[t]
            } else {
                epsilon + targets[t - l]
            }
        })
        .collect();

    let mut iterations = 0;
    let mut converged = false;
    while iterations < max_iterations {
        let Some((i, j)) = select_working_set(&problem, &alpha, &gradient, tolerance) else {
            converged = true;
            break;
        };
        iterations += 1;

        let (old_i, old_j) = (alpha[i], alpha[j]);
        update_pair(&problem, &mut alpha, &gradient, i, j);

        let delta_i = alpha[i] - old_i;
        let delta_j = alpha[j] - old_j;
        for (k, g) in gradient.iter_mut().enumerate() {
            *g += problem.q(i, k) * delta_i + problem.q(j, k) * delta_j;
        }
    }

    let rho = compute_rho(&problem, &alpha, &gradient);
    let coefficients = (0..l).map(|t| alpha[t] - alpha[t + l]).collect();

    SmoSolution {
        coefficients,
        rho,
        iterations,
        converged,
    }
}

/// Second-order working set selection; `None` once the KKT gap is below tolerance
fn select_working_set(
    problem: &Problem<'_>,
    alpha: &[f64],
    gradient: &[f64],
    tolerance: f64,
) -> Option<(usize, usize)> {
    let mut g_max = f64::NEG_INFINITY;
    let mut g_max_idx = None;
    for t in 0..alpha.len() {
        if problem.sign[t] > 0.0 {
            if !problem.is_upper(alpha[t]) && -gradient[t] >= g_max {
                g_max = -gradient[t];
                g_max_idx = Some(t);
            }
        } else if !problem.is_lower(alpha[t]) && gradient[t] >= g_max {
            g_max = gradient[t];
            g_max_idx = Some(t);
        }
    }
    let i = g_max_idx?;

    let mut g_max2 = f64::NEG_INFINITY;
    let mut g_min_idx = None;
    let mut obj_diff_min = f64::INFINITY;
    for j in 0..alpha.len() {
        let (grad_diff, quad_coef) = if problem.sign[j] > 0.0 {
            if problem.is_lower(alpha[j]) {
                continue;
            }
            if gradient[j] >= g_max2 {
                g_max2 = gradient[j];
            }
            (
                g_max + gradient[j],
                problem.diag[i] + problem.diag[j] - 2.0 * problem.sign[i] * problem.q(i, j),
            )
        } else {
            if problem.is_upper(alpha[j]) {
                continue;
            }
            if -gradient[j] >= g_max2 {
                g_max2 = -gradient[j];
            }
            (
                g_max - gradient[j],
                problem.diag[i] + problem.diag[j] + 2.0 * problem.sign[i] * problem.q(i, j),
            )
        };

        if grad_diff > 0.0 {
            let quad_coef = if quad_coef > 0.0 { quad_coef } else { TAU };
            let obj_diff = -(grad_diff * grad_diff) / quad_coef;
            if obj_diff <= obj_diff_min {
                g_min_idx = Some(j);
                obj_diff_min = obj_diff;
            }
        }
    }

    if g_max + g_max2 < tolerance {
        return None;
    }
    g_min_idx.map(|j| (i, j))
}

/// Solve the two-variable subproblem for `(i, j)` and clip to the box
fn update_pair(problem: &Problem<'_>, alpha: &mut [f64], gradient: &[f64], i: usize, j: usize) {
    let c = problem.c;
    let q_ij = problem.q(i, j);

    if problem.sign[i] != problem.sign[j] {
        let quad_coef = problem.diag[i] + problem.diag[j] + 2.0 * q_ij;
        let quad_coef = if quad_coef > 0.0 { quad_coef } else { TAU };
        let delta = (-gradient[i] - gradient[j]) / quad_coef;
        let diff = alpha[i] - alpha[j];
        alpha[i] += delta;
        alpha[j] += delta;

        if diff > 0.0 {
            if alpha[j] < 0.0 {
                alpha[j] = 0.0;
                alpha[i] = diff;
            }
        } else if alpha[i] < 0.0 {
            alpha[i] = 0.0;
            alpha[j] = -diff;
        }
        if diff > 0.0 {
            if alpha[i] > c {
                alpha[i] = c;
                alpha[j] = c - diff;
            }
        } else if alpha[j] > c {
            alpha[j] = c;
            alpha[i] = c + diff;
        }
    } else {
        let quad_coef = problem.diag[i] + problem.diag[j] - 2.0 * q_ij;
        let quad_coef = if quad_coef > 0.0 { quad_coef } else { TAU };
        let delta = (gradient[i] - gradient[j]) / quad_coef;
        let sum = alpha[i] + alpha[j];
        alpha[i] -= delta;
        alpha[j] += delta;

        if sum > c {
            if alpha[i] > c {
                alpha[i] = c;
                alpha[j] = sum - c;
            }
        } else if alpha[j] < 0.0 {
            alpha[j] = 0.0;
            alpha[i] = sum;
        }
        if sum > c {
            if alpha[j] > c {
                alpha[j] = c;
                alpha[i] = sum - c;
            }
        } else if alpha[i] < 0.0 {
            alpha[i] = 0.0;
            alpha[j] = sum;
        }
    }
}

/// Offset from free variables, or the midpoint of the feasible interval
fn compute_rho(problem: &Problem<'_>, alpha: &[f64], gradient: &[f64]) -> f64 {
    let mut upper = f64::INFINITY;
    let mut lower = f64::NEG_INFINITY;
    let mut free = 0usize;
    let mut sum_free = 0.0;

    for t in 0..alpha.len() {
        let yg = problem.sign[t] * gradient[t];
        if problem.is_upper(alpha[t]) {
            if problem.sign[t] < 0.0 {
                upper = upper.min(yg);
            } else {
                lower = lower.max(yg);
            }
        } else if problem.is_lower(alpha[t]) {
            if problem.sign[t] > 0.0 {
                upper = upper.min(yg);
            } else {
                lower = lower.max(yg);
            }
        } else {
            free += 1;
            sum_free += yg;
        }
    }

    if free > 0 {
        sum_free / free as f64
    } else {
        (upper + lower) / 2.0
    }
}
