//! # Bearing Capacity Equations
//!
//! This module contains the soil mechanics equations used by the bearing
//! capacity calculation. Keeping them in one place enables:
//! - Easy verification against the literature (Terzaghi, Das)
//! - Documentation of the groundwater zone conventions
//! - A single registry for generated documentation
//!
//! ## Modules
//!
//! - [`bearing`] - Groundwater corrections, superposition terms, allowable capacity
//! - [`registry`] - Equation metadata and markdown reference generation
//!
//! ## Conventions
//!
//! - **Depths**: Measured downward from the ground surface (ft)
//! - **Stresses and capacities**: Compression positive (psf)
//! - **Zone of influence**: From the footing base down to a depth B below it
//!
//! ## References
//!
//! - Terzaghi, K. (1943), Theoretical Soil Mechanics
//! - Das, B.M., Principles of Foundation Engineering, 7th Edition

pub mod bearing;
pub mod registry;

// Re-export commonly used items
pub use bearing::{
    allowable_capacity,
    cohesion_term,
    default_groundwater_depth,
    effective_stress,
    effective_unit_weight,
    groundwater_condition,
    self_weight_term,
    surcharge_term,
    terzaghi_ultimate,
    GroundwaterCondition,
    WATER_UNIT_WEIGHT_PCF,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    bearing_calculation_equations,
    generate_equations_markdown,
};
