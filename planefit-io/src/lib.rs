//! I/O operations for planefit
//!
//! Reads the plain-text task file (tolerance, declared point count, then
//! whitespace-separated coordinates) and writes plane coefficients the way
//! a default C++ output stream prints doubles.

pub mod input;
pub mod output;
pub mod error;

pub use error::*;
pub use input::{parse_input, read_input, PlaneFitInput, DEFAULT_INPUT_FILE};
pub use output::{format_general, format_plane, write_plane, DEFAULT_OUTPUT_PRECISION};
