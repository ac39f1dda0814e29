//! # Unit Types
//!
//! Type-safe wrappers for the units that appear on a bearing capacity
//! result. These are plain f64 newtypes that serialize as bare numbers.
//!
//! ## US Customary Units
//!
//! - Pressure / capacity: pounds per square foot (psf), kips per square foot (ksf)
//! - Unit weight: pounds per cubic foot (pcf)
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Ksf, Psf};
//!
//! let q = Psf(4308.0);
//! let q_ksf: Ksf = q.into();
//! assert!((q_ksf.0 - 4.308).abs() < 1e-12);
//! assert_eq!(q_ksf.to_string(), "4.31 ksf");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Pressure
// ============================================================================

/// Pressure in pounds per square foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psf(pub f64);

/// Pressure in kips per square foot (1 ksf = 1000 psf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksf(pub f64);

impl From<Psf> for Ksf {
    fn from(psf: Psf) -> Self {
        Ksf(psf.0 / 1000.0)
    }
}

impl From<Ksf> for Psf {
    fn from(ksf: Ksf) -> Self {
        Psf(ksf.0 * 1000.0)
    }
}

impl std::fmt::Display for Ksf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} ksf", self.0)
    }
}

// ============================================================================
// Unit Weight
// ============================================================================

/// Unit weight in pounds per cubic foot
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pcf(pub f64);

/// Unit weight of water
pub const WATER_UNIT_WEIGHT: Pcf = Pcf(62.4);
