//! Kernel presets and iteration-budget helpers.
//!
//! Pure configuration used by embedding callers; the kernel itself never
//! reads any of this.

use crate::{EscapeIterator, EscapeStrategy};

/// Configuration for one escape-time kernel variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name for display
    pub display_name: &'static str,
    /// Iteration budget used when the caller has no zoom-derived budget
    pub default_max_iterations: u32,
    /// Arithmetic formulation this preset runs
    pub strategy: EscapeStrategy,
}

impl KernelConfig {
    /// Build the kernel this preset describes, at its default budget.
    pub fn iterator(&self) -> EscapeIterator {
        EscapeIterator::new(self.default_max_iterations, self.strategy)
            .expect("Invalid default_max_iterations in KernelConfig")
    }
}

/// The two kernel variants. `fmandelbrot` is the square-tracking
/// formulation that saves two multiplications per iteration.
pub static KERNEL_CONFIGS: &[KernelConfig] = &[
    KernelConfig {
        id: "mandelbrot",
        display_name: "Mandelbrot (direct)",
        default_max_iterations: 1000,
        strategy: EscapeStrategy::Direct,
    },
    KernelConfig {
        id: "fmandelbrot",
        display_name: "Mandelbrot (algebraic)",
        default_max_iterations: 1000,
        strategy: EscapeStrategy::Algebraic,
    },
];

/// Look up a kernel configuration by ID.
pub fn get_config(id: &str) -> Option<&'static KernelConfig> {
    KERNEL_CONFIGS.iter().find(|c| c.id == id)
}

/// Iteration budget for a given zoom factor.
///
/// Uses a logarithmic relationship: iterations = base + k * log10(zoom)^power,
/// clamped to [50, 10000]. Zoom factors at or below 1.0 get the base budget.
pub fn max_iterations_for_zoom(zoom: f64) -> u32 {
    let base = 50.0;
    let k = 100.0;
    let power = 1.5;

    let zoom_exp = zoom.log10().max(0.0);
    let iterations = base + k * zoom_exp.powf(power);

    iterations.clamp(50.0, 10000.0) as u32
}
