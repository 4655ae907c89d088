//! # Materials
//!
//! Material definitions for steel and reinforced-concrete members, plus the
//! steel section catalog.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::materials::{ConcreteMaterial, SteelGrade, SteelMaterial};
//!
//! let steel = SteelMaterial::from_grade(SteelGrade::A992);
//! assert_eq!(steel.fy_mpa, 345.0);
//!
//! let concrete = ConcreteMaterial::new(30.0, 420.0);
//! assert_eq!(concrete.es_mpa, 200_000.0);
//! ```

pub mod steel;
pub mod steel_shapes;

pub use steel::{SectionCatalog, ShapeType, SteelSection};
pub use steel_shapes::{builtin_hss_shapes, builtin_w_shapes};

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

/// Modulus of elasticity of structural and reinforcing steel (MPa)
pub const STEEL_E_MPA: f64 = 200_000.0;

/// Common structural steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    /// ASTM A36 plates and shapes, Fy = 248 MPa
    A36,
    /// ASTM A992 wide-flange shapes, Fy = 345 MPa
    A992,
    /// ASTM A500 Grade C rectangular HSS, Fy = 345 MPa
    A500GrC,
}

impl SteelGrade {
    /// Specified minimum yield stress (MPa)
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::A36 => 248.0,
            SteelGrade::A992 => 345.0,
            SteelGrade::A500GrC => 345.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::A36 => "ASTM A36",
            SteelGrade::A992 => "ASTM A992",
            SteelGrade::A500GrC => "ASTM A500 Gr. C",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structural steel material properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    /// Yield strength Fy (MPa)
    pub fy_mpa: f64,
    /// Modulus of elasticity E (MPa)
    pub e_mpa: f64,
}

impl SteelMaterial {
    pub fn new(fy_mpa: f64, e_mpa: f64) -> Self {
        Self { fy_mpa, e_mpa }
    }

    pub fn from_grade(grade: SteelGrade) -> Self {
        Self::new(grade.fy_mpa(), STEEL_E_MPA)
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("fy_mpa", self.fy_mpa)?;
        require_positive("e_mpa", self.e_mpa)?;
        Ok(())
    }

    /// sqrt(E/Fy), the recurring slenderness-limit term
    pub fn slenderness_root(&self) -> f64 {
        (self.e_mpa / self.fy_mpa).sqrt()
    }
}

impl Default for SteelMaterial {
    fn default() -> Self {
        Self::from_grade(SteelGrade::A992)
    }
}

/// Reinforced-concrete material properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteMaterial {
    /// Specified compressive strength f'c (MPa)
    pub fc_mpa: f64,
    /// Reinforcement yield strength fy (MPa)
    pub fy_mpa: f64,
    /// Reinforcement modulus of elasticity Es (MPa)
    pub es_mpa: f64,
}

impl ConcreteMaterial {
    /// Concrete with Es = 200 000 MPa reinforcement
    pub fn new(fc_mpa: f64, fy_mpa: f64) -> Self {
        Self {
            fc_mpa,
            fy_mpa,
            es_mpa: STEEL_E_MPA,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_positive("fc_mpa", self.fc_mpa)?;
        require_positive("fy_mpa", self.fy_mpa)?;
        require_positive("es_mpa", self.es_mpa)?;
        Ok(())
    }

    /// Reinforcement yield strain εy = fy/Es
    pub fn yield_strain(&self) -> f64 {
        self.fy_mpa / self.es_mpa
    }
}

impl Default for ConcreteMaterial {
    fn default() -> Self {
        Self::new(25.0, 420.0)
    }
}
