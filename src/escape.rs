//! Escape-time iteration for the quadratic recurrence z ← z² + c.
//!
//! Two strategies compute the same escape count with different arithmetic.
//! `Direct` seeds the orbit at c and expands the complex square inline on
//! every step. `Algebraic` seeds at zero and carries the squared components
//! between steps, trading two multiplications per iteration for bookkeeping.
//!
//! The strategies use different loop-condition strictness: `Direct` iterates
//! while |z|² is strictly below 4, `Algebraic` while |z|² is at most 4. They
//! agree everywhere except for orbits that land exactly on squared magnitude
//! 4; that discrepancy is deliberate and pinned by tests rather than unified.

use crate::{ComplexPoint, EscapeData};
use serde::{Deserialize, Serialize};

/// Squared escape radius. An orbit whose squared magnitude exceeds this can
/// never return to the set, so iteration stops.
pub const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Which arithmetic formulation the kernel runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscapeStrategy {
    /// Seed z₀ = c, expand the complex square each step, loop while |z|² < 4.
    Direct,
    /// Seed z₀ = 0, carry zr²/zi² between steps, loop while |z|² ≤ 4.
    Algebraic,
}

/// Escape count for `c` with the orbit seeded at c itself.
///
/// Returns the index (starting at 1) of the first orbit point whose squared
/// magnitude fails the `< 4` test, capped at `max_iterations`. The complex
/// square is expanded into scalars: (a + bi)² = (a² − b²) + 2abi.
pub fn escape_count_direct(c: ComplexPoint, max_iterations: u32) -> u32 {
    let (count, _) = direct_loop(c, max_iterations);
    count
}

/// Escape count for `c` with the orbit seeded at zero, tracking squares.
///
/// The zero seed spends one recurrence step reaching z₁ = c, which the
/// direct strategy gets for free, so counting starts at 0 here and the two
/// strategies report the same orbit index.
pub fn escape_count_algebraic(c: ComplexPoint, max_iterations: u32) -> u32 {
    let (count, _) = algebraic_loop(c, max_iterations);
    count
}

fn direct_loop(c: ComplexPoint, max_iterations: u32) -> (u32, f64) {
    let (cr, ci) = c.into_parts();
    let mut zr = cr;
    let mut zi = ci;
    let mut count = 1u32;
    let mut norm_sq = zr * zr + zi * zi;

    while norm_sq < ESCAPE_RADIUS_SQ && count < max_iterations {
        let new_zr = zr * zr - zi * zi + cr;
        let new_zi = 2.0 * zr * zi + ci;
        zr = new_zr;
        zi = new_zi;
        count += 1;
        norm_sq = zr * zr + zi * zi;
    }

    (count, norm_sq)
}

fn algebraic_loop(c: ComplexPoint, max_iterations: u32) -> (u32, f64) {
    let (cr, ci) = c.into_parts();
    let mut zr = 0.0f64;
    let mut zi = 0.0f64;
    let mut zrsqr = 0.0f64;
    let mut zisqr = 0.0f64;
    let mut count = 0u32;

    while zrsqr + zisqr <= ESCAPE_RADIUS_SQ && count < max_iterations {
        // zi must consume the old zr and old zi before zr is overwritten
        zi = zr * zi;
        zi += zi;
        zi += ci;
        zr = zrsqr - zisqr + cr;
        zrsqr = zr * zr;
        zisqr = zi * zi;
        count += 1;
    }

    (count, zrsqr + zisqr)
}

/// Escape-time kernel for a single point in the complex plane.
///
/// Pure and stateless beyond its configuration; safe to call from any number
/// of threads at once. Precision is plain IEEE f64 throughout; non-finite
/// inputs propagate per IEEE rules without validation.
#[derive(Clone, Copy, Debug)]
pub struct EscapeIterator {
    max_iterations: u32,
    strategy: EscapeStrategy,
}

impl EscapeIterator {
    /// Create a kernel with the given iteration budget and strategy.
    ///
    /// Returns an error when `max_iterations` is zero, since the contract
    /// guarantees a result of at least 1.
    pub fn new(max_iterations: u32, strategy: EscapeStrategy) -> Result<Self, String> {
        if max_iterations == 0 {
            return Err("max_iterations must be at least 1".to_string());
        }
        Ok(Self {
            max_iterations,
            strategy,
        })
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn strategy(&self) -> EscapeStrategy {
        self.strategy
    }

    /// Run the configured escape loop for `c`.
    ///
    /// `escaped` is set only when the final squared magnitude is strictly
    /// above 4. A direct-strategy orbit stopping exactly on the circle
    /// |z| = 2 therefore reports its count without the escape flag.
    pub fn iterate(&self, c: ComplexPoint) -> EscapeData {
        let (iterations, norm_sq) = match self.strategy {
            EscapeStrategy::Direct => direct_loop(c, self.max_iterations),
            EscapeStrategy::Algebraic => algebraic_loop(c, self.max_iterations),
        };
        EscapeData::new(iterations, self.max_iterations, norm_sq > ESCAPE_RADIUS_SQ)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direct(max_iterations: u32) -> EscapeIterator {
        EscapeIterator::new(max_iterations, EscapeStrategy::Direct).unwrap()
    }

    fn algebraic(max_iterations: u32) -> EscapeIterator {
        EscapeIterator::new(max_iterations, EscapeStrategy::Algebraic).unwrap()
    }

    #[test]
    fn zero_max_iterations_is_rejected() {
        let result = EscapeIterator::new(0, EscapeStrategy::Direct);
        assert!(result.is_err());
    }

    #[test]
    fn origin_never_escapes() {
        // z stays at 0 forever, so the budget is always exhausted
        for max in [1, 10, 100] {
            let data = direct(max).iterate(ComplexPoint::ORIGIN);
            assert_eq!(data.iterations, max);
            assert!(!data.escaped);

            let data = algebraic(max).iterate(ComplexPoint::ORIGIN);
            assert_eq!(data.iterations, max);
            assert!(!data.escaped);
        }
    }

    #[test]
    fn period_two_point_never_escapes() {
        // c = (-1, 0) cycles between -1 and 0
        let data = direct(500).iterate(ComplexPoint::new(-1.0, 0.0));
        assert_eq!(data.iterations, 500);
        assert!(!data.escaped);

        let data = algebraic(500).iterate(ComplexPoint::new(-1.0, 0.0));
        assert_eq!(data.iterations, 500);
        assert!(!data.escaped);
    }

    #[test]
    fn point_far_outside_escapes_at_one() {
        // |c|² = 9 > 4, so the very first check fails
        let data = direct(100).iterate(ComplexPoint::new(3.0, 0.0));
        assert_eq!(data.iterations, 1);
        assert!(data.escaped);
    }

    #[test]
    fn one_one_escapes_at_two() {
        // Regression pin: z₁ = (1,1) with |z|² = 2, z₂ = (1,3) with |z|² = 10
        let data = direct(100).iterate(ComplexPoint::new(1.0, 1.0));
        assert_eq!(data.iterations, 2);
        assert!(data.escaped);

        let data = algebraic(100).iterate(ComplexPoint::new(1.0, 1.0));
        assert_eq!(data.iterations, 2);
        assert!(data.escaped);
    }

    #[test]
    fn direct_stops_on_boundary_without_escape_flag() {
        // |c|² = 4 exactly: the strict < 4 test fails immediately, but the
        // orbit is on the circle, not outside it
        let data = direct(100).iterate(ComplexPoint::new(2.0, 0.0));
        assert_eq!(data.iterations, 1);
        assert!(!data.escaped);
    }

    #[test]
    fn algebraic_steps_through_boundary() {
        // |z₁|² = 4 passes the ≤ 4 test, so z₂ = (6, 0) is computed and
        // flagged as escaped one step later than the direct strategy
        let data = algebraic(100).iterate(ComplexPoint::new(2.0, 0.0));
        assert_eq!(data.iterations, 2);
        assert!(data.escaped);
    }

    #[test]
    fn main_cardioid_point_exhausts_budget() {
        // c = (-0.5, 0.5) lies inside the main cardioid
        let data = direct(100).iterate(ComplexPoint::new(-0.5, 0.5));
        assert_eq!(data.iterations, 100);
        assert!(!data.escaped);
    }

    #[test]
    fn near_boundary_point_takes_many_iterations() {
        let data = direct(1000).iterate(ComplexPoint::new(-0.75, 0.1));
        assert!(data.escaped);
        assert!(data.iterations > 10);
        assert!(data.iterations < 1000);
    }

    #[test]
    fn max_iterations_stored_in_result() {
        let data = direct(500).iterate(ComplexPoint::ORIGIN);
        assert_eq!(data.max_iterations, 500);
    }

    #[test]
    fn free_functions_match_iterator_counts() {
        let c = ComplexPoint::new(0.3, 0.6);
        assert_eq!(
            escape_count_direct(c, 200),
            direct(200).iterate(c).iterations
        );
        assert_eq!(
            escape_count_algebraic(c, 200),
            algebraic(200).iterate(c).iterations
        );
    }

    #[test]
    fn budget_of_one_returns_one() {
        // Both loops run at most zero recurrence steps with max = 1
        assert_eq!(escape_count_direct(ComplexPoint::ORIGIN, 1), 1);
        assert_eq!(escape_count_algebraic(ComplexPoint::ORIGIN, 1), 1);
        assert_eq!(escape_count_direct(ComplexPoint::new(3.0, 0.0), 1), 1);
        assert_eq!(escape_count_algebraic(ComplexPoint::new(3.0, 0.0), 1), 1);
    }
}
