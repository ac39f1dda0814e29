//! # calc_core - Bearing Capacity Engine
//!
//! `calc_core` computes Terzaghi ultimate and allowable bearing capacity for
//! shallow foundations, with a clean, LLM-friendly API. All inputs and outputs
//! are JSON-serializable, making it easy to drive from a CLI, a web form, or
//! an AI assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every formula is registered with its literature reference
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{calculate, BearingCapacityInput, FoundationShape};
//!
//! let input = BearingCapacityInput {
//!     label: "F-1".to_string(),
//!     cohesion_psf: 0.0,
//!     friction_angle_deg: 30,
//!     depth_ft: 3.0,
//!     unit_weight_pcf: 120.0,
//!     width_ft: 4.0,
//!     shape: FoundationShape::Continuous,
//!     groundwater_depth_ft: None,
//!     factor_of_safety: 3.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("allowable_bearing_capacity_psf"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Bearing capacity input, result, and calculation
//! - [`bearing_factors`] - Terzaghi Nc, Nq, Nγ table
//! - [`equations`] - Groundwater corrections and the equation registry
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod bearing_factors;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use bearing_factors::{BearingFactorTable, BearingFactors};
pub use calculations::bearing_capacity::{
    calculate, BearingCapacityInput, BearingCapacityResult, FoundationShape,
};
pub use errors::{CalcError, CalcResult};
