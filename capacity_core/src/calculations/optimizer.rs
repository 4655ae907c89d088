//! # Section Optimizer
//!
//! Selects the lightest adequate section from a [`SectionCatalog`].
//!
//! The catalog is scanned once in its own order (ascending mass per metre)
//! and the first section whose design capacity meets the demand is returned.
//! Capacity is not assumed to grow with weight, so the scan never skips
//! ahead; it also never looks past the first adequate section.
//!
//! ## Candidate errors
//!
//! Every candidate's properties are validated before it is evaluated.
//! Errors tied to one section ([`CalcError::is_section_specific`], such as a
//! missing LTB property or an invalid section state) disqualify that
//! candidate and the scan moves on. Any other error concerns the shared
//! inputs and aborts the search.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::calculations::capacity::MemberGeometry;
//! use capacity_core::calculations::optimizer::select_lightest;
//! use capacity_core::calculations::steel_flexure::SteelFlexureEvaluator;
//! use capacity_core::materials::{builtin_w_shapes, SteelMaterial};
//!
//! let catalog = builtin_w_shapes();
//! let evaluator = SteelFlexureEvaluator::new(SteelMaterial::default(), MemberGeometry::new(3.0));
//!
//! let outcome = select_lightest(&catalog, &evaluator, 250.0).unwrap();
//! let chosen = outcome.selected().unwrap();
//! assert!(chosen.capacity.design >= 250.0);
//! ```

use serde::{Deserialize, Serialize};

use super::capacity::CapacityResult;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{SectionCatalog, SteelSection};

/// Anything that can rate a catalog section.
///
/// Implementations hold the demand-independent parameters (material,
/// lengths, factors) and are evaluated once per candidate.
pub trait CapacityEvaluator {
    fn evaluate(&self, section: &SteelSection) -> CalcResult<CapacityResult>;
}

impl<F> CapacityEvaluator for F
where
    F: Fn(&SteelSection) -> CalcResult<CapacityResult>,
{
    fn evaluate(&self, section: &SteelSection) -> CalcResult<CapacityResult> {
        self(section)
    }
}

/// One evaluated candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    pub designation: String,
    pub weight_kg_m: f64,
    /// Design capacity, when the evaluation succeeded
    pub design: Option<f64>,
    pub adequate: bool,
    /// Section-specific error that disqualified the candidate
    pub error: Option<CalcError>,
}

/// The section chosen by the optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSection {
    pub section: SteelSection,
    /// Capacity checked against the demand
    pub capacity: CapacityResult,
    /// demand / design capacity
    pub utilization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome")]
pub enum Selection {
    Found(SelectedSection),
    /// Every candidate was evaluated and none qualified
    NoAdequateSection,
}

/// Outcome of a catalog search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub demand: f64,
    pub selection: Selection,
    /// Candidates evaluated, in scan order
    pub trials: Vec<Trial>,
}

impl OptimizationResult {
    pub fn selected(&self) -> Option<&SelectedSection> {
        match &self.selection {
            Selection::Found(selected) => Some(selected),
            Selection::NoAdequateSection => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.selected().is_some()
    }
}

/// Return the first section in catalog order whose design capacity meets
/// `demand`.
///
/// `demand` must be positive and finite, in the evaluator's capacity units.
pub fn select_lightest<E>(catalog: &SectionCatalog, evaluator: &E, demand: f64) -> CalcResult<OptimizationResult>
where
    E: CapacityEvaluator + ?Sized,
{
    if !demand.is_finite() || demand <= 0.0 {
        return Err(CalcError::invalid_input(
            "demand",
            demand.to_string(),
            "Demand must be positive and finite",
        ));
    }

    let mut trials = Vec::new();
    for section in catalog {
        match section.validate().and_then(|()| evaluator.evaluate(section)) {
            Ok(result) => {
                let result = result.with_demand(demand);
                let adequate = result.adequate == Some(true);
                log::debug!(
                    "{} ({} kg/m): design {:.2} {} vs demand {:.2}, {}",
                    section.designation,
                    section.weight_kg_m,
                    result.design,
                    result.unit(),
                    demand,
                    if adequate { "adequate" } else { "inadequate" }
                );
                trials.push(Trial {
                    designation: section.designation.clone(),
                    weight_kg_m: section.weight_kg_m,
                    design: Some(result.design),
                    adequate,
                    error: None,
                });

                if adequate {
                    log::info!(
                        "Selected {} after {} trial(s), utilization {:.3}",
                        section.designation,
                        trials.len(),
                        demand / result.design
                    );
                    return Ok(OptimizationResult {
                        demand,
                        selection: Selection::Found(SelectedSection {
                            section: section.clone(),
                            utilization: demand / result.design,
                            capacity: result,
                        }),
                        trials,
                    });
                }
            }
            Err(err) if err.is_section_specific() => {
                log::debug!("{} disqualified: {}", section.designation, err);
                trials.push(Trial {
                    designation: section.designation.clone(),
                    weight_kg_m: section.weight_kg_m,
                    design: None,
                    adequate: false,
                    error: Some(err),
                });
            }
            Err(err) => return Err(err),
        }
    }

    log::info!(
        "No adequate section for demand {:.2} among {} candidate(s)",
        demand,
        trials.len()
    );
    Ok(OptimizationResult {
        demand,
        selection: Selection::NoAdequateSection,
        trials,
    })
}
