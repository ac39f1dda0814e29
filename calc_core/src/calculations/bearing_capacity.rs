//! # Shallow Foundation Bearing Capacity (Terzaghi)
//!
//! Ultimate and allowable bearing capacity of a shallow footing using
//! Terzaghi's bearing capacity factors and shape coefficients, with the
//! effective unit weight and surcharge corrected for the water table.
//!
//! ## Procedure
//!
//! 1. Resolve the water table depth (default `2(D + B)` when not given)
//! 2. Effective unit weight γ' and effective stress σ' at footing level
//! 3. Look up Nc, Nq, Nγ for φ
//! 4. `q_ult = c1·c·Nc + c2·σ'·Nq + c3·γ'·B·Nγ`, rounded to the nearest psf
//! 5. `q_allow = q_ult / FS`, rounded to the nearest psf
//!
//! ## Assumptions
//!
//! - General shear failure, vertical concentric load
//! - Homogeneous soil with a single unit weight above and below the base
//! - No Meyerhof/Vesic depth or inclination factors
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use calc_core::calculations::bearing_capacity::{calculate, BearingCapacityInput, FoundationShape};
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
//! assert_eq!(result.ultimate_bearing_capacity_psf, 12924.0);
//! assert_eq!(result.allowable_bearing_capacity_psf, 4308.0);
//! println!("{}", result.calculation);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bearing_factors::BearingFactorTable;
use crate::equations::bearing::{
    allowable_capacity, cohesion_term, default_groundwater_depth, effective_stress,
    effective_unit_weight, groundwater_condition, self_weight_term, surcharge_term,
    terzaghi_ultimate, GroundwaterCondition,
};
use crate::errors::CalcResult;
use crate::units::{Ksf, Psf};

// ============================================================================
// Foundation Shape
// ============================================================================

/// Footing plan shape.
///
/// Serializes lowercase (`"square"`, `"circular"`, `"continuous"`). Any other
/// string deserializes to [`FoundationShape::FALLBACK`] (Continuous).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FoundationShape {
    /// Square footing, B × B
    Square,
    /// Circular footing of diameter B
    Circular,
    /// Continuous (strip / wall) footing of width B
    #[default]
    Continuous,
}

/// Multipliers applied to the cohesion, surcharge and self-weight terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeCoefficients {
    /// Cohesion term multiplier
    pub c1: f64,
    /// Surcharge term multiplier
    pub c2: f64,
    /// Self-weight term multiplier
    pub c3: f64,
}

impl FoundationShape {
    /// All shapes for UI selection
    pub const ALL: [FoundationShape; 3] = [
        FoundationShape::Square,
        FoundationShape::Circular,
        FoundationShape::Continuous,
    ];

    /// Shape used for any name that is not recognized
    pub const FALLBACK: FoundationShape = FoundationShape::Continuous;

    /// Terzaghi shape coefficients
    pub fn coefficients(&self) -> ShapeCoefficients {
        match self {
            FoundationShape::Square => ShapeCoefficients { c1: 1.3, c2: 1.0, c3: 0.4 },
            FoundationShape::Circular => ShapeCoefficients { c1: 1.3, c2: 1.0, c3: 0.3 },
            FoundationShape::Continuous => ShapeCoefficients { c1: 1.0, c2: 1.0, c3: 0.5 },
        }
    }

    /// Human-readable ultimate capacity equation for this shape
    pub fn equation_template(&self) -> &'static str {
        match self {
            FoundationShape::Square => "q_ult = 1.3*c*Nc + σ'*Nq + 0.4*γ'*B*Nγ",
            FoundationShape::Circular => "q_ult = 1.3*c*Nc + σ'*Nq + 0.3*γ'*B*Nγ",
            FoundationShape::Continuous => "q_ult = c*Nc + σ'*Nq + 0.5*γ'*B*Nγ",
        }
    }

    /// Match a shape name, case-insensitively, including common aliases.
    ///
    /// Returns `None` for unrecognized names.
    pub fn recognize(name: &str) -> Option<FoundationShape> {
        match name.trim().to_lowercase().as_str() {
            "square" => Some(FoundationShape::Square),
            "circular" | "circle" | "round" => Some(FoundationShape::Circular),
            "continuous" | "strip" | "wall" => Some(FoundationShape::Continuous),
            _ => None,
        }
    }

    /// Parse a shape name, falling back to Continuous for anything unrecognized.
    ///
    /// The fallback is not an error; it is logged as a warning.
    ///
    /// ```rust
    /// use calc_core::calculations::bearing_capacity::FoundationShape;
    ///
    /// assert_eq!(FoundationShape::from_name("Square"), FoundationShape::Square);
    /// assert_eq!(FoundationShape::from_name("hexagonal"), FoundationShape::Continuous);
    /// ```
    pub fn from_name(name: &str) -> FoundationShape {
        FoundationShape::recognize(name).unwrap_or_else(|| {
            warn!(
                shape = name,
                fallback = %FoundationShape::FALLBACK,
                "unrecognized foundation shape, using continuous coefficients"
            );
            FoundationShape::FALLBACK
        })
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FoundationShape::Square => "Square",
            FoundationShape::Circular => "Circular",
            FoundationShape::Continuous => "Continuous",
        }
    }

    /// What `B` means for this shape
    pub fn width_label(&self) -> &'static str {
        match self {
            FoundationShape::Circular => "Diameter",
            FoundationShape::Square | FoundationShape::Continuous => "Width",
        }
    }
}

impl From<String> for FoundationShape {
    fn from(name: String) -> Self {
        FoundationShape::from_name(&name)
    }
}

impl std::fmt::Display for FoundationShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Input
// ============================================================================

/// Input parameters for a shallow footing bearing capacity check.
///
/// Values are expected to be validated by the caller (non-negative depths
/// and cohesion, positive width and unit weight). The calculation still
/// rejects a friction angle outside 0..=41 and a non-positive factor of safety.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "F-1",
///   "cohesion_psf": 0.0,
///   "friction_angle_deg": 30,
///   "depth_ft": 3.0,
///   "unit_weight_pcf": 120.0,
///   "width_ft": 4.0,
///   "shape": "continuous",
///   "groundwater_depth_ft": null,
///   "factor_of_safety": 3.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingCapacityInput {
    /// User label for this footing (e.g., "F-1", "Wall footing A")
    #[serde(default)]
    pub label: String,

    /// Soil cohesion c (psf)
    pub cohesion_psf: f64,

    /// Friction angle φ in whole degrees (0..=41)
    pub friction_angle_deg: i32,

    /// Embedment depth D, ground surface to footing base (ft)
    pub depth_ft: f64,

    /// Moist unit weight of soil γ (pcf)
    pub unit_weight_pcf: f64,

    /// Footing width B, or diameter for circular footings (ft)
    pub width_ft: f64,

    /// Footing shape
    #[serde(default)]
    pub shape: FoundationShape,

    /// Depth from ground surface to the water table (ft).
    ///
    /// Leave as `None` when there is no groundwater to consider; `Some(0.0)`
    /// means water at the ground surface.
    #[serde(default)]
    pub groundwater_depth_ft: Option<f64>,

    /// Factor of safety applied to the ultimate capacity
    pub factor_of_safety: f64,
}

impl BearingCapacityInput {
    /// Water table depth used by the calculation.
    ///
    /// Falls back to `2(D + B)`, below the zone of influence.
    pub fn resolved_groundwater_depth_ft(&self) -> f64 {
        self.groundwater_depth_ft
            .unwrap_or_else(|| default_groundwater_depth(self.depth_ft, self.width_ft))
    }
}

// ============================================================================
// Result
// ============================================================================

/// Results from a bearing capacity calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "shape": "continuous",
///   "groundwater_depth_ft": 14.0,
///   "groundwater_condition": "BelowInfluenceZone",
///   "effective_unit_weight_pcf": 120.0,
///   "effective_stress_psf": 360.0,
///   "nc": 37.2,
///   "nq": 22.5,
///   "n_gamma": 20.1,
///   "ultimate_bearing_capacity_unrounded_psf": 12924.0,
///   "ultimate_bearing_capacity_psf": 12924.0,
///   "allowable_bearing_capacity_psf": 4308.0,
///   "equation": "q_ult = c*Nc + σ'*Nq + 0.5*γ'*B*Nγ",
///   "calculation": "(1 * 0 * 37.2) + (1 * 360 * 22.5) + (0.5 * 120 * 4 * 20.1) = 12924"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingCapacityResult {
    /// Shape whose coefficients were applied
    pub shape: FoundationShape,

    /// Shape coefficients applied to the three terms
    pub coefficients: ShapeCoefficients,

    /// Water table depth used, after applying the default (ft)
    pub groundwater_depth_ft: f64,

    /// Water table position relative to the footing
    pub groundwater_condition: GroundwaterCondition,

    /// Effective unit weight γ' below the footing (pcf)
    pub effective_unit_weight_pcf: f64,

    /// Effective stress σ' at footing level (psf)
    pub effective_stress_psf: f64,

    /// Bearing capacity factor Nc
    pub nc: f64,

    /// Bearing capacity factor Nq
    pub nq: f64,

    /// Bearing capacity factor Nγ
    pub n_gamma: f64,

    /// c1·c·Nc (psf, unrounded)
    pub cohesion_term_psf: f64,

    /// c2·σ'·Nq (psf, unrounded)
    pub surcharge_term_psf: f64,

    /// c3·γ'·B·Nγ (psf, unrounded)
    pub self_weight_term_psf: f64,

    /// Sum of the three terms before rounding (psf)
    pub ultimate_bearing_capacity_unrounded_psf: f64,

    /// Ultimate bearing capacity q_ult, rounded to the nearest psf
    pub ultimate_bearing_capacity_psf: f64,

    /// Allowable bearing capacity q_ult / FS, rounded to the nearest psf
    pub allowable_bearing_capacity_psf: f64,

    /// Equation for the footing shape
    pub equation: String,

    /// Equation with the numbers substituted and the resulting q_ult
    pub calculation: String,
}

impl BearingCapacityResult {
    /// Ultimate bearing capacity in ksf
    pub fn ultimate_ksf(&self) -> Ksf {
        Psf(self.ultimate_bearing_capacity_psf).into()
    }

    /// Allowable bearing capacity in ksf
    pub fn allowable_ksf(&self) -> Ksf {
        Psf(self.allowable_bearing_capacity_psf).into()
    }

    /// Share of q_ult (unrounded) contributed by each term: (cohesion, surcharge, self-weight).
    ///
    /// All zeros when q_ult is zero.
    pub fn term_fractions(&self) -> (f64, f64, f64) {
        let total = self.ultimate_bearing_capacity_unrounded_psf;
        if total == 0.0 {
            return (0.0, 0.0, 0.0);
        }
        (
            self.cohesion_term_psf / total,
            self.surcharge_term_psf / total,
            self.self_weight_term_psf / total,
        )
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Calculate ultimate and allowable bearing capacity with the Terzaghi table.
///
/// # Arguments
///
/// * `input` - Footing and soil parameters
///
/// # Returns
///
/// * `Ok(BearingCapacityResult)` - Calculation results
/// * `Err(CalcError::OutOfRange)` - φ outside 0..=41
/// * `Err(CalcError::InvalidFactorOfSafety)` - FS ≤ 0 or not finite
pub fn calculate(input: &BearingCapacityInput) -> CalcResult<BearingCapacityResult> {
    calculate_with_table(BearingFactorTable::terzaghi(), input)
}

/// Calculation against a given factor table.
fn calculate_with_table(
    table: &BearingFactorTable,
    input: &BearingCapacityInput,
) -> CalcResult<BearingCapacityResult> {
    let factors = table.lookup(input.friction_angle_deg)?;

    let d = input.depth_ft;
    let b = input.width_ft;
    let dw = input.resolved_groundwater_depth_ft();

    let condition = groundwater_condition(d, b, dw);
    let gamma_eff = effective_unit_weight(input.unit_weight_pcf, d, b, dw);
    let sigma_eff = effective_stress(input.unit_weight_pcf, d, dw);

    let coefficients = input.shape.coefficients();
    let ShapeCoefficients { c1, c2, c3 } = coefficients;

    let cohesion = cohesion_term(c1, input.cohesion_psf, factors.nc);
    let surcharge = surcharge_term(c2, sigma_eff, factors.nq);
    let self_weight = self_weight_term(c3, gamma_eff, b, factors.n_gamma);

    let unrounded =
        terzaghi_ultimate(coefficients, input.cohesion_psf, sigma_eff, gamma_eff, b, factors);
    let ultimate = unrounded.round();
    let allowable = allowable_capacity(ultimate, input.factor_of_safety)?.round();

    debug!(
        label = %input.label,
        shape = %input.shape,
        phi = input.friction_angle_deg,
        groundwater_depth_ft = dw,
        condition = ?condition,
        q_ult = ultimate,
        q_allow = allowable,
        "bearing capacity calculated"
    );

    let calculation = format!(
        "({} * {} * {}) + ({} * {} * {}) + ({} * {} * {} * {}) = {}",
        fmt_num(c1),
        fmt_num(input.cohesion_psf),
        fmt_num(factors.nc),
        fmt_num(c2),
        fmt_num(sigma_eff),
        fmt_num(factors.nq),
        fmt_num(c3),
        fmt_num(gamma_eff),
        fmt_num(b),
        fmt_num(factors.n_gamma),
        fmt_num(ultimate),
    );

    Ok(BearingCapacityResult {
        shape: input.shape,
        coefficients,
        groundwater_depth_ft: dw,
        groundwater_condition: condition,
        effective_unit_weight_pcf: gamma_eff,
        effective_stress_psf: sigma_eff,
        nc: factors.nc,
        nq: factors.nq,
        n_gamma: factors.n_gamma,
        cohesion_term_psf: cohesion,
        surcharge_term_psf: surcharge,
        self_weight_term_psf: self_weight,
        ultimate_bearing_capacity_unrounded_psf: unrounded,
        ultimate_bearing_capacity_psf: ultimate,
        allowable_bearing_capacity_psf: allowable,
        equation: input.shape.equation_template().to_string(),
        calculation,
    })
}

/// Format a number with at most four decimals and no trailing zeros.
fn fmt_num(value: f64) -> String {
    let s = format!("{:.4}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_footing() -> BearingCapacityInput {
        BearingCapacityInput {
            label: "Test Footing".to_string(),
            cohesion_psf: 0.0,
            friction_angle_deg: 30,
            depth_ft: 3.0,
            unit_weight_pcf: 120.0,
            width_ft: 4.0,
            shape: FoundationShape::Continuous,
            groundwater_depth_ft: None,
            factor_of_safety: 3.0,
        }
    }

    #[test]
    fn test_continuous_footing_no_groundwater() {
        let result = calculate(&test_footing()).unwrap();

        assert_eq!(result.nc, 37.2);
        assert_eq!(result.nq, 22.5);
        assert_eq!(result.n_gamma, 20.1);
        assert_eq!(result.groundwater_depth_ft, 14.0);
        assert_eq!(result.groundwater_condition, GroundwaterCondition::BelowInfluenceZone);
        assert_eq!(result.effective_unit_weight_pcf, 120.0);
        assert_eq!(result.effective_stress_psf, 360.0);

        // 0 + 360(22.5) + 0.5(120)(4)(20.1) = 8100 + 4824
        assert_eq!(result.ultimate_bearing_capacity_psf, 12924.0);
        assert_eq!(result.allowable_bearing_capacity_psf, 4308.0);
    }

    #[test]
    fn test_equation_and_calculation_strings() {
        let result = calculate(&test_footing()).unwrap();
        assert_eq!(result.equation, "q_ult = c*Nc + σ'*Nq + 0.5*γ'*B*Nγ");
        assert_eq!(
            result.calculation,
            "(1 * 0 * 37.2) + (1 * 360 * 22.5) + (0.5 * 120 * 4 * 20.1) = 12924"
        );
    }

    #[test]
    fn test_square_footing_with_water_at_base() {
        // Water table at footing level: γ' = 100 - 62.4 = 37.6, σ' = 350
        let input = BearingCapacityInput {
            cohesion_psf: 0.0,
            friction_angle_deg: 30,
            depth_ft: 3.5,
            unit_weight_pcf: 100.0,
            width_ft: 1.0,
            shape: FoundationShape::Square,
            groundwater_depth_ft: Some(3.5),
            ..test_footing()
        };
        let result = calculate(&input).unwrap();

        assert_eq!(result.groundwater_condition, GroundwaterCondition::AtOrAboveFoundation);
        assert!((result.effective_unit_weight_pcf - 37.6).abs() < 1e-9);
        assert_eq!(result.effective_stress_psf, 350.0);

        // 350(22.5) + 0.4(37.6)(1)(20.1) = 7875 + 302.304 = 8177.304
        assert!((result.ultimate_bearing_capacity_unrounded_psf - 8177.304).abs() < 1e-6);
        assert_eq!(result.ultimate_bearing_capacity_psf, 8177.0);
        assert_eq!(result.allowable_bearing_capacity_psf, 2726.0);
    }

    #[test]
    fn test_calculate_uses_terzaghi_table() {
        let input = BearingCapacityInput {
            cohesion_psf: 150.0,
            groundwater_depth_ft: Some(4.5),
            shape: FoundationShape::Circular,
            ..test_footing()
        };
        let shared = calculate(&input).unwrap();
        let explicit = calculate_with_table(BearingFactorTable::terzaghi(), &input).unwrap();
        assert_eq!(shared, explicit);
    }

    #[test]
    fn test_cohesive_circular_footing() {
        let input = BearingCapacityInput {
            cohesion_psf: 500.0,
            friction_angle_deg: 0,
            shape: FoundationShape::Circular,
            ..test_footing()
        };
        let result = calculate(&input).unwrap();

        // 1.3(500)(5.7) + 360(1.0) + 0 = 3705 + 360
        assert_eq!(result.ultimate_bearing_capacity_psf, 4065.0);
        assert_eq!(result.allowable_bearing_capacity_psf, 1355.0);
        assert_eq!(result.self_weight_term_psf, 0.0);
    }

    #[test]
    fn test_water_within_influence_zone() {
        let input = BearingCapacityInput {
            groundwater_depth_ft: Some(5.0),
            ..test_footing()
        };
        let result = calculate(&input).unwrap();

        assert_eq!(result.groundwater_condition, GroundwaterCondition::WithinInfluenceZone);
        // 120 - 62.4(1 - 2/4) = 88.8
        assert!((result.effective_unit_weight_pcf - 88.8).abs() < 1e-9);
        assert_eq!(result.effective_stress_psf, 360.0);
        // 8100 + 0.5(88.8)(4)(20.1) = 8100 + 3569.76
        assert_eq!(result.ultimate_bearing_capacity_psf, 11670.0);
    }

    #[test]
    fn test_water_above_footing_reduces_surcharge() {
        let input = BearingCapacityInput {
            groundwater_depth_ft: Some(1.0),
            ..test_footing()
        };
        let result = calculate(&input).unwrap();

        // 360 - 2(62.4) = 235.2
        assert!((result.effective_stress_psf - 235.2).abs() < 1e-9);
        assert!((result.effective_unit_weight_pcf - 57.6).abs() < 1e-9);
    }

    #[test]
    fn test_shape_changes_only_cohesion_and_self_weight_terms() {
        let base = BearingCapacityInput {
            cohesion_psf: 200.0,
            ..test_footing()
        };
        let continuous = calculate(&base).unwrap();
        let square = calculate(&BearingCapacityInput {
            shape: FoundationShape::Square,
            ..base.clone()
        })
        .unwrap();

        assert_eq!(continuous.surcharge_term_psf, square.surcharge_term_psf);
        assert!((square.cohesion_term_psf / continuous.cohesion_term_psf - 1.3).abs() < 1e-12);
        let ratio = square.self_weight_term_psf / continuous.self_weight_term_psf;
        assert!((ratio - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_friction_angle() {
        for phi in [-1, 42] {
            let input = BearingCapacityInput {
                friction_angle_deg: phi,
                ..test_footing()
            };
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "OUT_OF_RANGE");
        }
    }

    #[test]
    fn test_invalid_factor_of_safety() {
        for fs in [0.0, -3.0] {
            let input = BearingCapacityInput {
                factor_of_safety: fs,
                ..test_footing()
            };
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_FACTOR_OF_SAFETY");
        }
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!(FoundationShape::from_name("square"), FoundationShape::Square);
        assert_eq!(FoundationShape::from_name(" CIRCULAR "), FoundationShape::Circular);
        assert_eq!(FoundationShape::from_name("strip"), FoundationShape::Continuous);
        assert_eq!(FoundationShape::recognize("triangle"), None);
        assert_eq!(FoundationShape::from_name("triangle"), FoundationShape::FALLBACK);
        assert_eq!(FoundationShape::from_name(""), FoundationShape::Continuous);
    }

    #[test]
    fn test_shape_coefficients() {
        let sq = FoundationShape::Square.coefficients();
        assert_eq!((sq.c1, sq.c2, sq.c3), (1.3, 1.0, 0.4));
        let ci = FoundationShape::Circular.coefficients();
        assert_eq!((ci.c1, ci.c2, ci.c3), (1.3, 1.0, 0.3));
        let co = FoundationShape::Continuous.coefficients();
        assert_eq!((co.c1, co.c2, co.c3), (1.0, 1.0, 0.5));
        assert_eq!(FoundationShape::Circular.width_label(), "Diameter");
    }

    #[test]
    fn test_shape_serialization() {
        assert_eq!(serde_json::to_string(&FoundationShape::Square).unwrap(), "\"square\"");
        let s: FoundationShape = serde_json::from_str("\"circular\"").unwrap();
        assert_eq!(s, FoundationShape::Circular);
        let s: FoundationShape = serde_json::from_str("\"octagonal\"").unwrap();
        assert_eq!(s, FoundationShape::Continuous);
    }

    #[test]
    fn test_input_json_defaults() {
        let json = r#"{
            "cohesion_psf": 0.0,
            "friction_angle_deg": 30,
            "depth_ft": 3.0,
            "unit_weight_pcf": 120.0,
            "width_ft": 4.0,
            "factor_of_safety": 3.0
        }"#;
        let input: BearingCapacityInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.shape, FoundationShape::Continuous);
        assert_eq!(input.groundwater_depth_ft, None);
        assert!(input.label.is_empty());
        assert_eq!(input.resolved_groundwater_depth_ft(), 14.0);
    }

    #[test]
    fn test_non_integer_friction_angle_rejected_by_serde() {
        let json = r#"{
            "cohesion_psf": 0.0,
            "friction_angle_deg": 30.5,
            "depth_ft": 3.0,
            "unit_weight_pcf": 120.0,
            "width_ft": 4.0,
            "factor_of_safety": 3.0
        }"#;
        assert!(serde_json::from_str::<BearingCapacityInput>(json).is_err());
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_footing()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("ultimate_bearing_capacity_psf"));
        assert!(json.contains("\"continuous\""));
        let roundtrip: BearingCapacityResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.shape, result.shape);
        assert_eq!(roundtrip.ultimate_bearing_capacity_psf, result.ultimate_bearing_capacity_psf);
        assert_eq!(
            roundtrip.ultimate_bearing_capacity_unrounded_psf,
            result.ultimate_bearing_capacity_unrounded_psf
        );
        assert_eq!(roundtrip.allowable_bearing_capacity_psf, result.allowable_bearing_capacity_psf);
        assert_eq!(roundtrip.calculation, result.calculation);
    }

    #[test]
    fn test_ksf_and_term_fractions() {
        let result = calculate(&test_footing()).unwrap();
        assert!((result.ultimate_ksf().0 - 12.924).abs() < 1e-9);
        assert!((result.allowable_ksf().0 - 4.308).abs() < 1e-9);

        let (c, q, g) = result.term_fractions();
        assert_eq!(c, 0.0);
        assert!((q + g - 1.0).abs() < 1e-12);
        assert!(q > g);
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(88.80000000000001), "88.8");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(12924.0), "12924");
    }
}
