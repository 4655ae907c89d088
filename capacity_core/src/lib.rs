//! # capacity_core - Member Capacity Engine
//!
//! `capacity_core` evaluates the design capacity of structural members in SI
//! units and picks the lightest catalog section that carries a demand:
//!
//! - steel W-shapes in flexure, including lateral-torsional buckling
//! - rectangular HSS in axial compression
//! - singly-reinforced concrete beams in flexure
//! - rectangular tied concrete columns under axial load
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over value types; no global catalogs
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: Invalid input and invalid section states are distinct
//!   errors; an inadequate member is a normal result
//! - **Traceable**: Every evaluator has a `*_traced` form that reports each
//!   intermediate value to a [`CalcRecorder`]
//!
//! ## Quick Start
//!
//! ```rust
//! use capacity_core::calculations::{select_lightest, MemberGeometry, SteelFlexureEvaluator};
//! use capacity_core::materials::{builtin_w_shapes, SteelMaterial};
//!
//! let catalog = builtin_w_shapes();
//! let evaluator = SteelFlexureEvaluator::new(SteelMaterial::default(), MemberGeometry::new(4.0));
//!
//! let outcome = select_lightest(&catalog, &evaluator, 180.0).unwrap();
//! if let Some(chosen) = outcome.selected() {
//!     println!("{}: φMn = {:.1} kN·m", chosen.section, chosen.capacity.design);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Capacity evaluators, the optimizer, and beam demand
//! - [`materials`] - Steel and concrete materials, section catalogs
//! - [`equations`] - Closed-form formulas, equation registry, value recorder
//! - [`units`] - SI unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CapacityResult, DesignFlag, LimitState, MemberGeometry};
pub use equations::registry::{CalcRecorder, CalcTrace, NoTrace};
pub use errors::{CalcError, CalcResult};
