//! # Equation Registry
//!
//! Central registry of the equations used by the bearing capacity engine.
//! Each equation has metadata including its literature reference, formula,
//! and variable definitions, so every number in a report can be traced back
//! to a formula and a source function.
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::Equation;
//!
//! let meta = Equation::EffectiveUnitWeight.metadata();
//! println!("{}: {}", meta.name, meta.formula_plain);
//! println!("Reference: {}", meta.reference.citation());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::bearing_capacity::FoundationShape;

// ============================================================================
// Code References
// ============================================================================

/// Reference to the literature an equation is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Terzaghi, Theoretical Soil Mechanics
    Terzaghi { year: u16 },
    /// Das, Principles of Foundation Engineering
    Das { edition: u8, section: &'static str },
    /// Fundamental soil mechanics (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Terzaghi { year } => {
                format!("Terzaghi ({}), Theoretical Soil Mechanics", year)
            }
            CodeReference::Das { edition, section } => {
                format!("Das {}ed, Section {}", edition, section)
            }
            CodeReference::Mechanics => "Fundamental Soil Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Terzaghi { .. } => "Terzaghi",
            CodeReference::Das { .. } => "Das",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Effective unit weight and stress corrections for the water table
    Groundwater,
    /// Ultimate bearing capacity superposition
    UltimateCapacity,
    /// Allowable capacity from the factor of safety
    AllowableCapacity,
}

impl EquationCategory {
    /// All categories, in documentation order
    pub const ALL: [EquationCategory; 3] = [
        EquationCategory::Groundwater,
        EquationCategory::UltimateCapacity,
        EquationCategory::AllowableCapacity,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Groundwater => "Groundwater",
            EquationCategory::UltimateCapacity => "Ultimate Capacity",
            EquationCategory::AllowableCapacity => "Allowable Capacity",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "c", "B", "N_c")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "psf", "ft")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a bearing capacity equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Literature reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the bearing capacity engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// D_w = 2(D + B) when no water table is given
    DefaultGroundwaterDepth,
    /// γ' by water table zone
    EffectiveUnitWeight,
    /// σ' = γD - (D - D_w)γ_w
    EffectiveStress,
    /// q_ult = cNc + σ'Nq + 0.5γ'BNγ
    TerzaghiContinuous,
    /// q_ult = 1.3cNc + σ'Nq + 0.4γ'BNγ
    TerzaghiSquare,
    /// q_ult = 1.3cNc + σ'Nq + 0.3γ'BNγ
    TerzaghiCircular,
    /// q_allow = q_ult / FS
    AllowableBearingCapacity,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::DefaultGroundwaterDepth => EquationMetadata {
                name: "Default Groundwater Depth",
                description: "Water table depth assumed when none is given, placed below the zone of influence",
                formula_plain: "D_w = 2(D + B)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("D_w", "Depth to water table", "ft"),
                    Variable::new("D", "Embedment depth", "ft"),
                    Variable::new("B", "Footing width or diameter", "ft"),
                ],
                assumptions: vec!["Zone of influence extends a depth B below the footing base"],
                category: EquationCategory::Groundwater,
                source_module: "equations/bearing.rs",
                source_function: "default_groundwater_depth",
            },

            Equation::EffectiveUnitWeight => EquationMetadata {
                name: "Effective Unit Weight",
                description: "Unit weight of the soil below the footing, reduced for buoyancy inside the zone of influence",
                formula_plain: "γ' = γ - γ_w for D_w <= D; γ' = γ - γ_w(1 - (D_w - D)/B) for D < D_w < D+B; γ' = γ for D_w >= D+B",
                reference: CodeReference::Das { edition: 7, section: "3.6" },
                variables: vec![
                    Variable::new("γ'", "Effective unit weight", "pcf"),
                    Variable::new("γ", "Moist unit weight of soil", "pcf"),
                    Variable::new("γ_w", "Unit weight of water (62.4)", "pcf"),
                    Variable::new("D_w", "Depth to water table", "ft"),
                    Variable::new("D", "Embedment depth", "ft"),
                    Variable::new("B", "Footing width or diameter", "ft"),
                ],
                assumptions: vec![
                    "Linear transition across the zone of influence",
                    "Water table at footing level is treated as fully buoyant",
                ],
                category: EquationCategory::Groundwater,
                source_module: "equations/bearing.rs",
                source_function: "effective_unit_weight",
            },

            Equation::EffectiveStress => EquationMetadata {
                name: "Effective Overburden Stress",
                description: "Vertical effective stress at footing level acting as surcharge",
                formula_plain: "σ' = γD for D_w >= D; σ' = γD - (D - D_w)γ_w for D_w < D",
                reference: CodeReference::Das { edition: 7, section: "3.6" },
                variables: vec![
                    Variable::new("σ'", "Effective stress at footing level", "psf"),
                    Variable::new("γ", "Moist unit weight of soil", "pcf"),
                    Variable::new("γ_w", "Unit weight of water (62.4)", "pcf"),
                    Variable::new("D", "Embedment depth", "ft"),
                    Variable::new("D_w", "Depth to water table", "ft"),
                ],
                assumptions: vec![
                    "Single soil unit weight above the footing base",
                    "Hydrostatic pore pressure",
                ],
                category: EquationCategory::Groundwater,
                source_module: "equations/bearing.rs",
                source_function: "effective_stress",
            },

            Equation::TerzaghiContinuous => EquationMetadata {
                name: "Terzaghi Ultimate Capacity - Continuous Footing",
                description: "Ultimate bearing capacity of a strip footing",
                formula_plain: FoundationShape::Continuous.equation_template(),
                reference: CodeReference::Terzaghi { year: 1943 },
                variables: terzaghi_variables(),
                assumptions: vec![
                    "General shear failure",
                    "Vertical, concentric load",
                    "Shallow footing (D <= B)",
                ],
                category: EquationCategory::UltimateCapacity,
                source_module: "equations/bearing.rs",
                source_function: "terzaghi_ultimate",
            },

            Equation::TerzaghiSquare => EquationMetadata {
                name: "Terzaghi Ultimate Capacity - Square Footing",
                description: "Ultimate bearing capacity of a square footing",
                formula_plain: FoundationShape::Square.equation_template(),
                reference: CodeReference::Terzaghi { year: 1943 },
                variables: terzaghi_variables(),
                assumptions: vec!["General shear failure", "Vertical, concentric load"],
                category: EquationCategory::UltimateCapacity,
                source_module: "equations/bearing.rs",
                source_function: "terzaghi_ultimate",
            },

            Equation::TerzaghiCircular => EquationMetadata {
                name: "Terzaghi Ultimate Capacity - Circular Footing",
                description: "Ultimate bearing capacity of a circular footing of diameter B",
                formula_plain: FoundationShape::Circular.equation_template(),
                reference: CodeReference::Terzaghi { year: 1943 },
                variables: terzaghi_variables(),
                assumptions: vec!["General shear failure", "Vertical, concentric load"],
                category: EquationCategory::UltimateCapacity,
                source_module: "equations/bearing.rs",
                source_function: "terzaghi_ultimate",
            },

            Equation::AllowableBearingCapacity => EquationMetadata {
                name: "Allowable Bearing Capacity",
                description: "Ultimate capacity reduced by the factor of safety",
                formula_plain: "q_allow = q_ult / FS",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("q_allow", "Allowable bearing capacity", "psf"),
                    Variable::new("q_ult", "Ultimate bearing capacity", "psf"),
                    Variable::new("FS", "Factor of safety (> 0)", "-"),
                ],
                assumptions: vec!["FS applied to the gross ultimate capacity"],
                category: EquationCategory::AllowableCapacity,
                source_module: "equations/bearing.rs",
                source_function: "allowable_capacity",
            },
        }
    }

    /// The ultimate-capacity equation for a footing shape
    pub fn ultimate_for(shape: FoundationShape) -> Equation {
        match shape {
            FoundationShape::Square => Equation::TerzaghiSquare,
            FoundationShape::Circular => Equation::TerzaghiCircular,
            FoundationShape::Continuous => Equation::TerzaghiContinuous,
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in documentation order
    pub fn all_categories() -> &'static [EquationCategory] {
        &EquationCategory::ALL
    }
}

fn terzaghi_variables() -> Vec<Variable> {
    vec![
        Variable::new("q_ult", "Ultimate bearing capacity", "psf"),
        Variable::new("c", "Cohesion", "psf"),
        Variable::new("σ'", "Effective stress at footing level", "psf"),
        Variable::new("γ'", "Effective unit weight below footing", "pcf"),
        Variable::new("B", "Footing width or diameter", "ft"),
        Variable::new("Nc, Nq, Nγ", "Terzaghi bearing capacity factors for φ", "-"),
    ]
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::DefaultGroundwaterDepth,
    Equation::EffectiveUnitWeight,
    Equation::EffectiveStress,
    Equation::TerzaghiContinuous,
    Equation::TerzaghiSquare,
    Equation::TerzaghiCircular,
    Equation::AllowableBearingCapacity,
];

/// Equations applied by one bearing capacity calculation, in evaluation order.
///
/// `groundwater_given` is false when the default water table depth was used.
pub fn bearing_calculation_equations(
    shape: FoundationShape,
    groundwater_given: bool,
) -> Vec<Equation> {
    let mut equations = Vec::with_capacity(5);
    if !groundwater_given {
        equations.push(Equation::DefaultGroundwaterDepth);
    }
    equations.push(Equation::EffectiveUnitWeight);
    equations.push(Equation::EffectiveStress);
    equations.push(Equation::ultimate_for(shape));
    equations.push(Equation::AllowableBearingCapacity);
    equations
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equations reference document as markdown.
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Bearing Capacity Equations Reference"));
/// assert!(markdown.contains("## Groundwater"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Bearing Capacity Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists every formula used by the bearing capacity engine.
Each equation includes its formula, literature reference, source location, and assumptions.

## Units

| Quantity | Units |
|----------|-------|
| Lengths (D, B, D_w) | ft |
| Unit weights (γ, γ', γ_w) | pcf |
| Cohesion, stresses, capacities | psf |

---

"#);

    for category in Equation::all_categories() {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        Equation::all_categories().len()
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 7);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source", eq);
        }

        let square = Equation::TerzaghiSquare.metadata();
        assert!(square.formula_plain.contains("0.4*γ'*B*Nγ"));
    }

    #[test]
    fn test_code_reference_citation() {
        let t = CodeReference::Terzaghi { year: 1943 };
        assert_eq!(t.citation(), "Terzaghi (1943), Theoretical Soil Mechanics");

        let das = CodeReference::Das { edition: 7, section: "3.6" };
        assert_eq!(das.citation(), "Das 7ed, Section 3.6");
        assert_eq!(das.short_form(), "Das");
    }

    #[test]
    fn test_ultimate_for_shape() {
        assert_eq!(Equation::ultimate_for(FoundationShape::Square), Equation::TerzaghiSquare);
        assert_eq!(Equation::ultimate_for(FoundationShape::Circular), Equation::TerzaghiCircular);
        assert_eq!(
            Equation::ultimate_for(FoundationShape::Continuous),
            Equation::TerzaghiContinuous
        );
    }

    #[test]
    fn test_bearing_calculation_equations() {
        let with_default = bearing_calculation_equations(FoundationShape::Square, false);
        assert_eq!(with_default.first(), Some(&Equation::DefaultGroundwaterDepth));
        assert!(with_default.contains(&Equation::TerzaghiSquare));
        assert_eq!(with_default.len(), 5);

        let given = bearing_calculation_equations(FoundationShape::Continuous, true);
        assert!(!given.contains(&Equation::DefaultGroundwaterDepth));
        assert_eq!(given.last(), Some(&Equation::AllowableBearingCapacity));
    }

    #[test]
    fn test_categories_in_documentation_order() {
        assert_eq!(
            Equation::all_categories(),
            &[
                EquationCategory::Groundwater,
                EquationCategory::UltimateCapacity,
                EquationCategory::AllowableCapacity,
            ]
        );

        // Every registered equation lands in a listed category
        for eq in ALL_EQUATIONS {
            assert!(Equation::all_categories().contains(&eq.metadata().category));
        }
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");
        assert!(markdown.contains("## Groundwater"));
        assert!(markdown.contains("## Ultimate Capacity"));
        assert!(markdown.contains("## Allowable Capacity"));
        assert!(markdown.contains("### Effective Unit Weight"));
        assert!(markdown.contains("`q_allow = q_ult / FS`"));
        assert!(markdown.contains("Terzaghi (1943)"));
        assert!(markdown.contains("equations/bearing.rs"));
        assert!(markdown.contains("**Total Equations:** 7"));
        assert!(markdown.contains("**Categories:** 3"));
    }
}
