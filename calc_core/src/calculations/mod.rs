//! # Geotechnical Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bearing_capacity`] - Terzaghi bearing capacity of shallow footings

pub mod bearing_capacity;

// Re-export commonly used types
pub use bearing_capacity::{
    calculate, BearingCapacityInput, BearingCapacityResult, FoundationShape, ShapeCoefficients,
};
