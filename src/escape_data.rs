// src/escape_data.rs

use serde::{Deserialize, Serialize};

/// Result of running the escape-time kernel for a single point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeData {
    /// Escape step in [1, max_iterations], or max_iterations if the orbit
    /// stayed bounded within budget.
    pub iterations: u32,
    /// Maximum iterations used for this computation, kept alongside so
    /// downstream consumers can normalize without extra context.
    pub max_iterations: u32,
    /// Whether the orbit left the radius-2 disc (|z|² strictly above 4).
    pub escaped: bool,
}

impl EscapeData {
    pub fn new(iterations: u32, max_iterations: u32, escaped: bool) -> Self {
        Self {
            iterations,
            max_iterations,
            escaped,
        }
    }
}

impl Default for EscapeData {
    fn default() -> Self {
        Self {
            iterations: 0,
            max_iterations: 0,
            escaped: false,
        }
    }
}
