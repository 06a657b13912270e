use crate::core::complex::Complex;
use crate::fractals::newtons_method::ComplexFunctionWithSlope;

/// Evaluate `sum(coefficients[i] * z^i)` at `z`. The coefficient slice is
/// ordered from the constant term upward; an empty slice evaluates to zero,
/// which matters for the derivative of a degree-zero polynomial.
pub fn evaluate(z: Complex, coefficients: &[f64]) -> Complex {
    let mut result = Complex::ZERO;
    for (i, &coefficient) in coefficients.iter().enumerate() {
        result = result + z.powu(i as u32).scale(coefficient);
    }
    result
}

/// A real-coefficient polynomial paired with its derivative. The derivative
/// coefficients are computed once at construction and both sequences are
/// read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Vec<f64>,
    derivative_coefficients: Vec<f64>,
}

impl Polynomial {
    /// `coefficients` is ordered from the constant term upward and must be
    /// non-empty (degree n has n+1 entries).
    pub fn new(coefficients: Vec<f64>) -> Polynomial {
        assert!(!coefficients.is_empty(), "polynomial has no coefficients");
        let derivative_coefficients = coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * (i as f64))
            .collect();
        Polynomial {
            coefficients,
            derivative_coefficients,
        }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn derivative_coefficients(&self) -> &[f64] {
        &self.derivative_coefficients
    }
}

impl ComplexFunctionWithSlope for Polynomial {
    fn value(&self, z: Complex) -> Complex {
        evaluate(z, &self.coefficients)
    }

    fn slope(&self, z: Complex) -> Complex {
        evaluate(z, &self.derivative_coefficients)
    }
}
