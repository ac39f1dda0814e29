//! # Shallow Foundation Bearing Formulas
//!
//! Terzaghi's superposition for the ultimate bearing capacity of a shallow
//! footing, with the groundwater corrections applied to the surcharge and
//! self-weight terms.
//!
//! ## Notation
//!
//! - `c` = Cohesion (psf)
//! - `D` = Embedment depth, ground surface to footing base (ft)
//! - `B` = Footing width, or diameter for circular footings (ft)
//! - `γ` = Moist unit weight of soil (pcf)
//! - `γ_w` = Unit weight of water, 62.4 pcf
//! - `D_w` = Depth from ground surface to the water table (ft)
//! - `γ'` = Effective unit weight below the footing (pcf)
//! - `σ'` = Effective overburden stress at footing level (psf)
//!
//! ## Groundwater Zones
//!
//! ```text
//!   ground ─────────────────────────────  D_w = 0
//!           │         D                   D_w <= D       : γ' = γ - γ_w
//!   base    ├───┬═══════════┬─────────    D_w = D
//!           │   │   zone of │             D < D_w < D+B  : γ' interpolated
//!           │   │ influence │ B
//!           └───┴───────────┴─────────    D_w = D + B
//!                                         D_w >= D+B     : γ' = γ
//! ```
//!
//! The water table sitting exactly at footing level (`D_w = D`) belongs to
//! the upper zone for both γ' and σ'.
//!
//! ## References
//!
//! - Terzaghi, K. (1943), Theoretical Soil Mechanics
//! - Das, B.M., Principles of Foundation Engineering, Chapter 3

use serde::{Deserialize, Serialize};

use crate::bearing_factors::BearingFactors;
use crate::calculations::bearing_capacity::ShapeCoefficients;
use crate::errors::{CalcError, CalcResult};
use crate::units::WATER_UNIT_WEIGHT;

/// Unit weight of water (pcf)
pub const WATER_UNIT_WEIGHT_PCF: f64 = WATER_UNIT_WEIGHT.0;

/// Where the water table sits relative to the footing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundwaterCondition {
    /// `D_w <= D`: water at or above the footing base
    AtOrAboveFoundation,
    /// `D < D_w < D + B`: water inside the zone of influence
    WithinInfluenceZone,
    /// `D_w >= D + B`: water below the zone of influence, no correction
    BelowInfluenceZone,
}

impl GroundwaterCondition {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            GroundwaterCondition::AtOrAboveFoundation => "At or above foundation level",
            GroundwaterCondition::WithinInfluenceZone => "Within zone of influence",
            GroundwaterCondition::BelowInfluenceZone => "Below zone of influence",
        }
    }
}

impl std::fmt::Display for GroundwaterCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Water table depth assumed when none is given.
///
/// # Formula
/// D_w = 2(D + B)
///
/// Always deeper than `D + B` for non-negative `D` and positive `B`, so the
/// groundwater correction drops out.
///
/// # Example
/// ```rust
/// use calc_core::equations::bearing::default_groundwater_depth;
///
/// assert_eq!(default_groundwater_depth(3.5, 4.0), 15.0);
/// ```
#[inline]
pub fn default_groundwater_depth(depth_ft: f64, width_ft: f64) -> f64 {
    2.0 * (depth_ft + width_ft)
}

/// Classify the water table position.
#[inline]
pub fn groundwater_condition(
    depth_ft: f64,
    width_ft: f64,
    groundwater_depth_ft: f64,
) -> GroundwaterCondition {
    if groundwater_depth_ft <= depth_ft {
        GroundwaterCondition::AtOrAboveFoundation
    } else if groundwater_depth_ft < depth_ft + width_ft {
        GroundwaterCondition::WithinInfluenceZone
    } else {
        GroundwaterCondition::BelowInfluenceZone
    }
}

/// Effective unit weight of the soil beneath the footing.
///
/// # Formulas
/// - D_w <= D: γ' = γ - γ_w
/// - D < D_w < D+B: γ' = γ - γ_w(1 - (D_w - D)/B)
/// - D_w >= D+B: γ' = γ
///
/// # Example
/// ```rust
/// use calc_core::equations::bearing::effective_unit_weight;
///
/// // Water table at footing level: fully buoyant
/// let g = effective_unit_weight(120.0, 3.0, 4.0, 3.0);
/// assert!((g - 57.6).abs() < 1e-9);
///
/// // Halfway through the zone of influence
/// let g = effective_unit_weight(120.0, 3.0, 4.0, 5.0);
/// assert!((g - 88.8).abs() < 1e-9);
/// ```
pub fn effective_unit_weight(
    unit_weight_pcf: f64,
    depth_ft: f64,
    width_ft: f64,
    groundwater_depth_ft: f64,
) -> f64 {
    match groundwater_condition(depth_ft, width_ft, groundwater_depth_ft) {
        GroundwaterCondition::AtOrAboveFoundation => unit_weight_pcf - WATER_UNIT_WEIGHT_PCF,
        GroundwaterCondition::WithinInfluenceZone => {
            unit_weight_pcf
                - WATER_UNIT_WEIGHT_PCF * (1.0 - (groundwater_depth_ft - depth_ft) / width_ft)
        }
        GroundwaterCondition::BelowInfluenceZone => unit_weight_pcf,
    }
}

/// Effective overburden stress at footing level (surcharge).
///
/// # Formulas
/// - D_w >= D: σ' = γD
/// - D_w < D: σ' = γD - (D - D_w)γ_w
///
/// # Example
/// ```rust
/// use calc_core::equations::bearing::effective_stress;
///
/// assert_eq!(effective_stress(120.0, 3.0, 14.0), 360.0);
///
/// // Water table 1 ft below grade: 360 - 2(62.4)
/// let s = effective_stress(120.0, 3.0, 1.0);
/// assert!((s - 235.2).abs() < 1e-9);
/// ```
pub fn effective_stress(unit_weight_pcf: f64, depth_ft: f64, groundwater_depth_ft: f64) -> f64 {
    let total_stress = unit_weight_pcf * depth_ft;
    if groundwater_depth_ft >= depth_ft {
        total_stress
    } else {
        let pore_pressure = (depth_ft - groundwater_depth_ft) * WATER_UNIT_WEIGHT_PCF;
        total_stress - pore_pressure
    }
}

/// Cohesion term: c1·c·Nc (psf)
#[inline]
pub fn cohesion_term(c1: f64, cohesion_psf: f64, nc: f64) -> f64 {
    c1 * cohesion_psf * nc
}

/// Surcharge term: c2·σ'·Nq (psf)
#[inline]
pub fn surcharge_term(c2: f64, effective_stress_psf: f64, nq: f64) -> f64 {
    c2 * effective_stress_psf * nq
}

/// Self-weight term: c3·γ'·B·Nγ (psf)
#[inline]
pub fn self_weight_term(
    c3: f64,
    effective_unit_weight_pcf: f64,
    width_ft: f64,
    n_gamma: f64,
) -> f64 {
    c3 * effective_unit_weight_pcf * width_ft * n_gamma
}

/// Terzaghi ultimate bearing capacity, unrounded (psf).
///
/// # Formula
/// q_ult = c1·c·Nc + c2·σ'·Nq + c3·γ'·B·Nγ
///
/// # Example
/// ```rust
/// use calc_core::bearing_factors::lookup;
/// use calc_core::calculations::FoundationShape;
/// use calc_core::equations::bearing::terzaghi_ultimate;
///
/// // Strip footing, φ = 30°: 0 + 360(22.5) + 0.5(120)(4)(20.1) = 8100 + 4824
/// let coefficients = FoundationShape::Continuous.coefficients();
/// let q_ult = terzaghi_ultimate(coefficients, 0.0, 360.0, 120.0, 4.0, lookup(30).unwrap());
/// assert!((q_ult - 12924.0).abs() < 1e-9);
/// ```
pub fn terzaghi_ultimate(
    coefficients: ShapeCoefficients,
    cohesion_psf: f64,
    effective_stress_psf: f64,
    effective_unit_weight_pcf: f64,
    width_ft: f64,
    factors: BearingFactors,
) -> f64 {
    cohesion_term(coefficients.c1, cohesion_psf, factors.nc)
        + surcharge_term(coefficients.c2, effective_stress_psf, factors.nq)
        + self_weight_term(coefficients.c3, effective_unit_weight_pcf, width_ft, factors.n_gamma)
}

/// Allowable bearing capacity.
///
/// # Formula
/// q_allow = q_ult / FS
///
/// # Errors
/// `CalcError::InvalidFactorOfSafety` when FS is zero, negative, or not
/// finite. No infinite or NaN capacity is ever returned.
///
/// # Example
/// ```rust
/// use calc_core::equations::bearing::allowable_capacity;
///
/// assert_eq!(allowable_capacity(12924.0, 3.0).unwrap(), 4308.0);
/// assert!(allowable_capacity(12924.0, 0.0).is_err());
/// ```
pub fn allowable_capacity(ultimate_psf: f64, factor_of_safety: f64) -> CalcResult<f64> {
    if !factor_of_safety.is_finite() || factor_of_safety <= 0.0 {
        return Err(CalcError::invalid_factor_of_safety(factor_of_safety));
    }
    Ok(ultimate_psf / factor_of_safety)
}
