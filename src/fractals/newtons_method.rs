// Newton-Raphson classification of a single point in the complex plane,
// used as the per-pixel kernel for the fractal render.

use std::fmt;

use crate::core::complex::Complex;

/// Hard bound on the number of solver calls for one point. Counting starts
/// at one, so at most 999 refinement steps run before the point is declared
/// inconclusive.
pub const ITERATION_LIMIT: u32 = 1000;

/// A point has converged once a single step moves it less than this.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-6;

/// A complex-valued function with its derivative (slope).
pub trait ComplexFunctionWithSlope {
    /// f(z)
    fn value(&self, z: Complex) -> Complex;

    /// f'(z)
    fn slope(&self, z: Complex) -> Complex;
}

/// Terminal state of the Newton iteration for one grid point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointOutcome {
    /// The iteration settled onto this approximate root.
    Converged(Complex),
    /// A step produced NaN, typically by dividing through a derivative zero.
    Diverged,
    /// Still moving when the iteration limit was reached.
    Inconclusive,
}

impl fmt::Display for PointOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointOutcome::Converged(root) => write!(f, "{:+.2}{:+.2}i", root.re, root.im),
            PointOutcome::Diverged => write!(f, "nan"),
            PointOutcome::Inconclusive => write!(f, "incomplete"),
        }
    }
}

/// Perform one Newton-Raphson step:  y = z - f(z) / f'(z)
#[inline]
pub fn newton_raphson_step<F>(z: Complex, function: &F) -> Complex
where
    F: ComplexFunctionWithSlope,
{
    z - function.value(z) / function.slope(z)
}

/// Iterate Newton's method from `z0` until it converges, diverges to NaN, or
/// exhausts the call budget. An explicit loop, not recursion: the bound is
/// 999 steps and the stack depth must not depend on it.
pub fn classify<F>(z0: Complex, function: &F) -> PointOutcome
where
    F: ComplexFunctionWithSlope,
{
    let mut z = z0;
    for _calls in 1..ITERATION_LIMIT {
        let next_z = newton_raphson_step(z, function);
        if next_z.is_nan() {
            return PointOutcome::Diverged;
        }
        if (next_z - z).norm() < CONVERGENCE_TOLERANCE {
            return PointOutcome::Converged(next_z);
        }
        z = next_z;
    }
    PointOutcome::Inconclusive
}
