//! # Structural Engineering Equations
//!
//! Closed-form formulas shared by the calculation modules. Keeping them in one
//! place makes them easy to check against the code references.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported point-load formulas (moment, deflection)
//! - [`section`] - Cross-section properties (A, I, r, wall ratios)
//! - [`registry`] - Equation metadata and the value recorder interface
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Deflection**: Positive downward
//! - **Reactions**: Positive upward (resisting gravity)
//!
//! ## References
//!
//! - AISC 360-16: Specification for Structural Steel Buildings
//! - ACI 318M-19: Building Code Requirements for Structural Concrete
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod beam;
pub mod registry;
pub mod section;

pub use beam::{
    deflection_limit,
    point_load_deflection_at_load,
    point_load_max_moment,
    point_load_moment,
    point_load_reactions,
};

pub use section::{
    hollow_rectangle_area,
    hollow_rectangle_inertia,
    hss_wall_ratio,
    radius_of_gyration,
    rectangular_area,
};

pub use registry::{
    CalcRecorder,
    CalcTrace,
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    NoTrace,
    TraceEntry,
    ALL_EQUATIONS,
};
