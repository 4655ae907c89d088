//! # Capacity Calculations
//!
//! Each calculation follows the same pattern:
//!
//! - an input (`*Input` or `*Evaluator`) that is JSON-serializable
//! - a `*Result` carrying a [`CapacityResult`] plus the intermediate values
//! - `calculate(...)` and `calculate_traced(..., &mut dyn CalcRecorder)`
//!
//! The traced variant pushes every intermediate value into a
//! [`CalcRecorder`](crate::equations::registry::CalcRecorder); the plain one
//! discards them.
//!
//! ## Available Calculations
//!
//! - [`steel_flexure`] - W-shape moment capacity with lateral-torsional buckling
//! - [`steel_compression`] - Rectangular HSS axial capacity
//! - [`concrete_flexure`] - Singly-reinforced rectangular beam
//! - [`concrete_column`] - Rectangular tied column
//! - [`optimizer`] - Lightest adequate catalog section
//! - [`point_load_beam`] - Simply-supported point-load demand

pub mod capacity;
pub mod concrete_column;
pub mod concrete_flexure;
pub mod optimizer;
pub mod point_load_beam;
pub mod steel_compression;
pub mod steel_flexure;

pub use capacity::{CapacityKind, CapacityResult, DesignFlag, LimitState, MemberGeometry};
pub use concrete_column::{TiedColumnInput, TiedColumnResult};
pub use concrete_flexure::{ConcreteBeamInput, ConcreteFlexureResult};
pub use optimizer::{select_lightest, CapacityEvaluator, OptimizationResult, Selection, SelectedSection, Trial};
pub use point_load_beam::{PointLoadBeamInput, PointLoadBeamResult};
pub use steel_compression::{SteelCompressionEvaluator, SteelCompressionResult};
pub use steel_flexure::{SteelFlexureEvaluator, SteelFlexureResult};
