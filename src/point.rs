use serde::{Deserialize, Serialize};

/// A point in the complex plane, held as two explicit f64 scalars.
///
/// The real and imaginary parts are kept as independent scalars rather than
/// behind an opaque complex type, so the arithmetic in the iteration loops
/// stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexPoint {
    re: f64,
    im: f64,
}

impl ComplexPoint {
    /// z = 0, the seed the algebraic strategy starts from.
    pub const ORIGIN: ComplexPoint = ComplexPoint { re: 0.0, im: 0.0 };

    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn re(&self) -> f64 {
        self.re
    }

    pub fn im(&self) -> f64 {
        self.im
    }

    pub fn into_parts(self) -> (f64, f64) {
        (self.re, self.im)
    }

    /// Squared magnitude `re² + im²`.
    ///
    /// Escape tests compare this against 4.0 instead of comparing the
    /// magnitude against 2.0, so no square root is taken anywhere.
    pub fn norm_sq(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }
}
