pub mod config;
pub mod escape;
pub mod escape_data;
pub mod point;

pub use config::{get_config, max_iterations_for_zoom, KernelConfig, KERNEL_CONFIGS};
pub use escape::{
    escape_count_algebraic, escape_count_direct, EscapeIterator, EscapeStrategy, ESCAPE_RADIUS_SQ,
};
pub use escape_data::EscapeData;
pub use point::ComplexPoint;
