//! # Terzaghi Bearing Capacity Factors
//!
//! Dimensionless bearing capacity factors Nc, Nq and Nγ tabulated by soil
//! friction angle φ in whole degrees, 0° through 41°.
//!
//! ```text
//! q_ult = c·Nc·(shape) + σ'·Nq + γ'·B·Nγ·(shape)
//!           │              │          │
//!        cohesion      surcharge   self-weight
//! ```
//!
//! Values are the published Terzaghi table. They are looked up, never
//! interpolated or recomputed from the closed-form expressions, so results
//! match hand calculations made from the printed table exactly.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::bearing_factors::BearingFactorTable;
//!
//! let factors = BearingFactorTable::terzaghi().lookup(30).unwrap();
//! assert_eq!(factors.nc, 37.2);
//! assert_eq!(factors.nq, 22.5);
//! assert_eq!(factors.n_gamma, 20.1);
//!
//! assert!(BearingFactorTable::terzaghi().lookup(42).is_err());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Smallest tabulated friction angle (degrees)
pub const MIN_FRICTION_ANGLE_DEG: i32 = 0;

/// Largest tabulated friction angle (degrees)
pub const MAX_FRICTION_ANGLE_DEG: i32 = 41;

/// (Nc, Nq, Nγ) indexed by φ in degrees
const TERZAGHI_FACTORS: [(f64, f64, f64); 42] = [
    (5.7, 1.0, 0.0),      // 0
    (6.0, 1.1, 0.1),      // 1
    (6.3, 1.2, 0.1),      // 2
    (6.6, 1.3, 0.2),      // 3
    (7.0, 1.5, 0.3),      // 4
    (7.3, 1.6, 0.4),      // 5
    (7.7, 1.8, 0.5),      // 6
    (8.2, 2.0, 0.6),      // 7
    (8.6, 2.2, 0.7),      // 8
    (9.1, 2.4, 0.9),      // 9
    (9.6, 2.7, 1.0),      // 10
    (10.2, 3.0, 1.2),     // 11
    (10.8, 3.3, 1.4),     // 12
    (11.4, 3.6, 1.6),     // 13
    (12.1, 4.0, 1.9),     // 14
    (12.9, 4.4, 2.2),     // 15
    (13.7, 4.9, 2.5),     // 16
    (14.6, 5.5, 2.9),     // 17
    (15.5, 6.0, 3.3),     // 18
    (16.6, 6.7, 3.8),     // 19
    (17.7, 7.4, 4.4),     // 20
    (18.9, 8.3, 5.1),     // 21
    (20.3, 9.2, 5.9),     // 22
    (21.7, 10.2, 6.8),    // 23
    (23.4, 11.4, 7.9),    // 24
    (25.1, 12.7, 9.2),    // 25
    (27.1, 14.2, 10.7),   // 26
    (29.2, 15.9, 12.5),   // 27
    (31.6, 17.8, 14.6),   // 28
    (34.2, 20.0, 17.1),   // 29
    (37.2, 22.5, 20.1),   // 30
    (40.4, 25.3, 23.7),   // 31
    (44.0, 28.5, 28.0),   // 32
    (48.1, 32.2, 33.3),   // 33
    (52.6, 36.5, 39.6),   // 34
    (57.8, 41.4, 47.3),   // 35
    (63.5, 47.2, 56.7),   // 36
    (70.1, 53.8, 68.1),   // 37
    (77.5, 61.5, 82.3),   // 38
    (86.0, 70.6, 99.8),   // 39
    (95.7, 81.3, 121.5),  // 40
    (106.8, 93.8, 148.5), // 41
];

static TERZAGHI_TABLE: Lazy<BearingFactorTable> = Lazy::new(|| BearingFactorTable {
    rows: TERZAGHI_FACTORS
        .iter()
        .map(|&(nc, nq, n_gamma)| BearingFactors { nc, nq, n_gamma })
        .collect(),
});

/// The three dimensionless factors for a single friction angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingFactors {
    /// Cohesion factor Nc
    pub nc: f64,
    /// Surcharge factor Nq
    pub nq: f64,
    /// Self-weight factor Nγ
    pub n_gamma: f64,
}

/// Immutable φ → (Nc, Nq, Nγ) table.
///
/// Built once on first use and shared read-only afterwards; obtain it with
/// [`BearingFactorTable::terzaghi`].
#[derive(Debug)]
pub struct BearingFactorTable {
    rows: Vec<BearingFactors>,
}

impl BearingFactorTable {
    /// The published Terzaghi table (φ = 0°..=41°).
    pub fn terzaghi() -> &'static BearingFactorTable {
        &TERZAGHI_TABLE
    }

    /// Look up the factors for friction angle `phi_deg`.
    ///
    /// # Errors
    ///
    /// `CalcError::OutOfRange` if `phi_deg` is outside 0..=41. The value is
    /// never clamped.
    pub fn lookup(&self, phi_deg: i32) -> CalcResult<BearingFactors> {
        usize::try_from(phi_deg)
            .ok()
            .and_then(|i| self.rows.get(i))
            .copied()
            .ok_or_else(|| {
                CalcError::out_of_range(
                    "friction_angle_deg",
                    phi_deg,
                    MIN_FRICTION_ANGLE_DEG,
                    MAX_FRICTION_ANGLE_DEG,
                )
            })
    }

    /// Iterate over `(φ, factors)` in ascending φ.
    pub fn iter(&self) -> impl Iterator<Item = (i32, BearingFactors)> + '_ {
        (MIN_FRICTION_ANGLE_DEG..).zip(self.rows.iter().copied())
    }

    /// Number of tabulated friction angles
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows are tabulated
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Shorthand for `BearingFactorTable::terzaghi().lookup(phi_deg)`.
pub fn lookup(phi_deg: i32) -> CalcResult<BearingFactors> {
    BearingFactorTable::terzaghi().lookup(phi_deg)
}
