//! # Equation Registry
//!
//! Central registry of the design equations used by the capacity evaluators,
//! and the recorder interface through which evaluators report each value they
//! compute.
//!
//! ## Architecture
//!
//! - [`Equation`] identifies every formula with its symbol, unit, and code
//!   reference.
//! - [`CalcRecorder`] is the only channel to a report writer. Evaluators push
//!   `(label, value, unit)` triples into it and never read anything back.
//! - [`CalcTrace`] keeps those triples in order; [`NoTrace`] drops them.
//!
//! ## Usage
//!
//! ```rust
//! use capacity_core::equations::registry::{CalcRecorder, CalcTrace, Equation};
//!
//! let mut trace = CalcTrace::new();
//! let mp = trace.record_equation(Equation::PlasticMoment, 403.65);
//! assert_eq!(mp, 403.65);
//!
//! let entry = &trace.entries()[0];
//! assert_eq!(entry.label, "Mp");
//! assert_eq!(entry.unit, "kN*m");
//! assert_eq!(entry.reference.as_deref(), Some("AISC 360-16 Eq. F2-1"));
//! assert_eq!(entry.quantity().to_string(), "403.65 kN*m");
//! ```

use serde::{Deserialize, Serialize};

use crate::units::Quantity;

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural design code or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// AISC 360 - Specification for Structural Steel Buildings
    AISC360 { year: u16, clause: &'static str },
    /// ACI 318M - Building Code Requirements for Structural Concrete (metric)
    ACI318 { year: u16, clause: &'static str },
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::AISC360 { year, clause } => {
                format!("AISC 360-{} {}", year % 100, clause)
            }
            CodeReference::ACI318 { year, clause } => {
                format!("ACI 318M-{} {}", year % 100, clause)
            }
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::AISC360 { .. } => "AISC 360",
            CodeReference::ACI318 { .. } => "ACI 318M",
            CodeReference::Roarks { .. } => "Roark's",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

const fn aisc(clause: &'static str) -> CodeReference {
    CodeReference::AISC360 { year: 2016, clause }
}

const fn aci(clause: &'static str) -> CodeReference {
    CodeReference::ACI318 { year: 2019, clause }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Groups equations by the evaluator that uses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Steel beam flexure and lateral-torsional buckling
    SteelFlexure,
    /// Steel member compression and local slenderness
    SteelCompression,
    /// Reinforced-concrete beam flexure
    ConcreteFlexure,
    /// Reinforced-concrete tied column
    ConcreteAxial,
    /// Beam demand and serviceability
    BeamDemand,
}

impl EquationCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SteelFlexure => "Steel Flexure",
            EquationCategory::SteelCompression => "Steel Compression",
            EquationCategory::ConcreteFlexure => "Concrete Flexure",
            EquationCategory::ConcreteAxial => "Concrete Axial",
            EquationCategory::BeamDemand => "Beam Demand",
        }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Metadata for one design equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Plastic Moment")
    pub name: &'static str,
    /// Symbol used as the trace label (e.g., "Mp")
    pub symbol: &'static str,
    /// Unit of the result (e.g., "kN*m")
    pub unit: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Category for grouping
    pub category: EquationCategory,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every formula the evaluators compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Steel flexure (AISC 360 Chapter F2)
    // -------------------------------------------------------------------------
    /// λpf = 0.38·√(E/Fy)
    FlangeCompactLimit,
    /// λpw = 3.76·√(E/Fy)
    WebCompactLimit,
    /// Mp = Fy·Zx
    PlasticMoment,
    /// Lp = 1.76·ry·√(E/Fy)
    LimitingLengthPlastic,
    /// Lr closed form
    LimitingLengthInelastic,
    /// Linear interpolation between Mp and 0.7·Fy·Sx
    InelasticLtbMoment,
    /// Fcr for elastic lateral-torsional buckling
    ElasticLtbStress,
    /// Mn = Fcr·Sx ≤ Mp
    ElasticLtbMoment,
    /// φb·Mn
    FlexuralDesignStrength,

    // -------------------------------------------------------------------------
    // Steel compression (AISC 360 Chapter E3, Table B4.1a)
    // -------------------------------------------------------------------------
    /// (b − 2t)/(2t) for each HSS wall
    HssWallRatio,
    /// λr = 1.40·√(E/Fy)
    HssWallSlenderLimit,
    /// KL/r
    MemberSlenderness,
    /// 4.71·√(E/Fy)
    BucklingTransition,
    /// Fe = π²E/(KL/r)²
    EulerStress,
    /// Fcr = 0.658^(Fy/Fe)·Fy
    InelasticBucklingStress,
    /// Fcr = 0.877·Fe
    ElasticBucklingStress,
    /// Fcr = 0.6·Fy for slender walls
    SlenderWallStress,
    /// Pn = Fcr·Ag
    SteelNominalAxial,
    /// φc·Pn
    SteelDesignAxial,

    // -------------------------------------------------------------------------
    // Concrete flexure (ACI 318M Chapter 22)
    // -------------------------------------------------------------------------
    /// d = h − cover
    EffectiveDepth,
    /// ρ = As/(b·d)
    ReinforcementRatio,
    /// a = As·fy/(0.85·f'c·b)
    StressBlockDepth,
    /// c = a/β1
    NeutralAxisDepth,
    /// εs = 0.003·(d − c)/c
    SteelStrain,
    /// εy = fy/Es
    YieldStrain,
    /// As,min = max(0.25·√f'c, 1.4)·b·d/fy
    MinimumReinforcement,
    /// Cc = 0.85·f'c·a·b
    ConcreteCompression,
    /// Ts = As·fy
    SteelTension,
    /// Mn = As·fy·(d − a/2)
    ConcreteNominalMoment,
    /// φ·Mn
    ConcreteDesignMoment,

    // -------------------------------------------------------------------------
    // Concrete tied column (ACI 318M 22.4)
    // -------------------------------------------------------------------------
    /// Ag = h·b
    GrossArea,
    /// ρg = As/Ag
    LongitudinalRatio,
    /// Pn = 0.80·[0.85·f'c·(Ag − As) + fy·As]
    TiedColumnNominalAxial,
    /// φ·Pn
    TiedColumnDesignAxial,

    // -------------------------------------------------------------------------
    // Point-load beam demand
    // -------------------------------------------------------------------------
    /// Mmax = F·x·(L − x)/L
    PointLoadMaxMoment,
    /// δ = F·a·b·(L² − a² − b²)/(6EIL)
    PointLoadDeflection,
    /// δallow = L/360
    DeflectionLimit,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        use EquationCategory::*;

        let (name, symbol, unit, formula_plain, reference, category) = match self {
            // Steel flexure
            Equation::FlangeCompactLimit => (
                "Flange Compact Limit",
                "lambda_pf",
                "",
                "lambda_pf = 0.38 * sqrt(E/Fy)",
                aisc("Table B4.1b"),
                SteelFlexure,
            ),
            Equation::WebCompactLimit => (
                "Web Compact Limit",
                "lambda_pw",
                "",
                "lambda_pw = 3.76 * sqrt(E/Fy)",
                aisc("Table B4.1b"),
                SteelFlexure,
            ),
            Equation::PlasticMoment => (
                "Plastic Moment",
                "Mp",
                "kN*m",
                "Mp = Fy * Zx",
                aisc("Eq. F2-1"),
                SteelFlexure,
            ),
            Equation::LimitingLengthPlastic => (
                "Limiting Unbraced Length for Yielding",
                "Lp",
                "mm",
                "Lp = 1.76 * ry * sqrt(E/Fy)",
                aisc("Eq. F2-5"),
                SteelFlexure,
            ),
            Equation::LimitingLengthInelastic => (
                "Limiting Unbraced Length for Inelastic LTB",
                "Lr",
                "mm",
                "Lr = rts*pi*sqrt(E/(0.7Fy)) * sqrt(k + sqrt(k^2 + 1)), k = 0.078*Jc/(Sx*ho)*pi^2*E/(2*0.7Fy)",
                aisc("Eq. F2-6"),
                SteelFlexure,
            ),
            Equation::InelasticLtbMoment => (
                "Inelastic LTB Moment",
                "Mn",
                "kN*m",
                "Mn = Cb*[Mp - (Mp - 0.7*Fy*Sx)*(Lb - Lp)/(Lr - Lp)] <= Mp",
                aisc("Eq. F2-2"),
                SteelFlexure,
            ),
            Equation::ElasticLtbStress => (
                "Elastic LTB Critical Stress",
                "Fcr",
                "MPa",
                "Fcr = Cb*pi^2*E/(Lb/rts)^2 * sqrt(1 + 0.078*Jc/(Sx*ho)*(Lb/rts)^2)",
                aisc("Eq. F2-4"),
                SteelFlexure,
            ),
            Equation::ElasticLtbMoment => (
                "Elastic LTB Moment",
                "Mn",
                "kN*m",
                "Mn = Fcr * Sx <= Mp",
                aisc("Eq. F2-3"),
                SteelFlexure,
            ),
            Equation::FlexuralDesignStrength => (
                "Design Flexural Strength",
                "phi_Mn",
                "kN*m",
                "phi_b * Mn, phi_b = 0.90",
                aisc("F1(1)"),
                SteelFlexure,
            ),

            // Steel compression
            Equation::HssWallRatio => (
                "HSS Wall Width-to-Thickness Ratio",
                "b/t",
                "",
                "b/t = (b - 2t)/(2t)",
                aisc("Table B4.1a"),
                SteelCompression,
            ),
            Equation::HssWallSlenderLimit => (
                "HSS Wall Slenderness Limit",
                "lambda_r",
                "",
                "lambda_r = 1.40 * sqrt(E/Fy)",
                aisc("Table B4.1a"),
                SteelCompression,
            ),
            Equation::MemberSlenderness => (
                "Member Slenderness",
                "KL/r",
                "",
                "KL/r = K * L / r_min",
                aisc("E2"),
                SteelCompression,
            ),
            Equation::BucklingTransition => (
                "Inelastic/Elastic Buckling Transition",
                "lambda_crit",
                "",
                "lambda_crit = 4.71 * sqrt(E/Fy)",
                aisc("E3(a)"),
                SteelCompression,
            ),
            Equation::EulerStress => (
                "Elastic Buckling Stress",
                "Fe",
                "MPa",
                "Fe = pi^2 * E / (KL/r)^2",
                aisc("Eq. E3-4"),
                SteelCompression,
            ),
            Equation::InelasticBucklingStress => (
                "Inelastic Flexural Buckling Stress",
                "Fcr",
                "MPa",
                "Fcr = 0.658^(Fy/Fe) * Fy",
                aisc("Eq. E3-2"),
                SteelCompression,
            ),
            Equation::ElasticBucklingStress => (
                "Elastic Flexural Buckling Stress",
                "Fcr",
                "MPa",
                "Fcr = 0.877 * Fe",
                aisc("Eq. E3-3"),
                SteelCompression,
            ),
            Equation::SlenderWallStress => (
                "Slender Wall Fallback Stress",
                "Fcr",
                "MPa",
                "Fcr = 0.6 * Fy",
                aisc("E7"),
                SteelCompression,
            ),
            Equation::SteelNominalAxial => (
                "Nominal Compressive Strength",
                "Pn",
                "kN",
                "Pn = Fcr * Ag",
                aisc("Eq. E3-1"),
                SteelCompression,
            ),
            Equation::SteelDesignAxial => (
                "Design Compressive Strength",
                "phi_Pn",
                "kN",
                "phi_c * Pn, phi_c = 0.90",
                aisc("E1"),
                SteelCompression,
            ),

            // Concrete flexure
            Equation::EffectiveDepth => (
                "Effective Depth",
                "d",
                "mm",
                "d = h - cover",
                CodeReference::Mechanics,
                ConcreteFlexure,
            ),
            Equation::ReinforcementRatio => (
                "Reinforcement Ratio",
                "rho",
                "",
                "rho = As / (b * d)",
                CodeReference::Mechanics,
                ConcreteFlexure,
            ),
            Equation::StressBlockDepth => (
                "Equivalent Stress Block Depth",
                "a",
                "mm",
                "a = As * fy / (0.85 * f'c * b)",
                aci("22.2.2.4.1"),
                ConcreteFlexure,
            ),
            Equation::NeutralAxisDepth => (
                "Neutral Axis Depth",
                "c",
                "mm",
                "c = a / beta1",
                aci("22.2.2.4.2"),
                ConcreteFlexure,
            ),
            Equation::SteelStrain => (
                "Tension Steel Strain",
                "eps_s",
                "",
                "eps_s = 0.003 * (d - c) / c",
                aci("22.2.2.1"),
                ConcreteFlexure,
            ),
            Equation::YieldStrain => (
                "Reinforcement Yield Strain",
                "eps_y",
                "",
                "eps_y = fy / Es",
                aci("21.2.2.1"),
                ConcreteFlexure,
            ),
            Equation::MinimumReinforcement => (
                "Minimum Flexural Reinforcement",
                "As_min",
                "mm^2",
                "As_min = max(0.25*sqrt(f'c)*b*d/fy, 1.4*b*d/fy)",
                aci("9.6.1.2"),
                ConcreteFlexure,
            ),
            Equation::ConcreteCompression => (
                "Concrete Compression Resultant",
                "Cc",
                "kN",
                "Cc = 0.85 * f'c * a * b",
                aci("22.2.2.4.1"),
                ConcreteFlexure,
            ),
            Equation::SteelTension => (
                "Steel Tension Resultant",
                "Ts",
                "kN",
                "Ts = As * fy",
                CodeReference::Mechanics,
                ConcreteFlexure,
            ),
            Equation::ConcreteNominalMoment => (
                "Nominal Flexural Strength",
                "Mn",
                "kN*m",
                "Mn = As * fy * (d - a/2)",
                aci("22.3"),
                ConcreteFlexure,
            ),
            Equation::ConcreteDesignMoment => (
                "Design Flexural Strength",
                "phi_Mn",
                "kN*m",
                "phi * Mn, phi per Table 21.2.2",
                aci("Table 21.2.2"),
                ConcreteFlexure,
            ),

            // Concrete column
            Equation::GrossArea => (
                "Gross Column Area",
                "Ag",
                "mm^2",
                "Ag = h * b",
                CodeReference::Mechanics,
                ConcreteAxial,
            ),
            Equation::LongitudinalRatio => (
                "Longitudinal Reinforcement Ratio",
                "rho_g",
                "",
                "rho_g = As / Ag, 0.01 <= rho_g <= 0.08",
                aci("10.6.1.1"),
                ConcreteAxial,
            ),
            Equation::TiedColumnNominalAxial => (
                "Maximum Nominal Axial Strength (Tied)",
                "Pn",
                "kN",
                "Pn = 0.80 * [0.85 * f'c * (Ag - As) + fy * As]",
                aci("Table 22.4.2.1"),
                ConcreteAxial,
            ),
            Equation::TiedColumnDesignAxial => (
                "Design Axial Strength (Tied)",
                "phi_Pn",
                "kN",
                "phi * Pn, phi = 0.65",
                aci("Table 21.2.2"),
                ConcreteAxial,
            ),

            // Beam demand
            Equation::PointLoadMaxMoment => (
                "Point Load Maximum Moment",
                "M_max",
                "kN*m",
                "M_max = F * x * (L - x) / L",
                CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                BeamDemand,
            ),
            Equation::PointLoadDeflection => (
                "Deflection Under Point Load",
                "delta",
                "mm",
                "delta = F*a*b*(L^2 - a^2 - b^2) / (6*E*I*L)",
                CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                BeamDemand,
            ),
            Equation::DeflectionLimit => (
                "Deflection Limit",
                "delta_allow",
                "mm",
                "delta_allow = L / 360",
                CodeReference::Mechanics,
                BeamDemand,
            ),
        };

        EquationMetadata {
            name,
            symbol,
            unit,
            formula_plain,
            reference,
            category,
        }
    }

    /// Trace label for this equation
    pub fn symbol(&self) -> &'static str {
        self.metadata().symbol
    }

    /// Unit string of this equation's result
    pub fn unit(&self) -> &'static str {
        self.metadata().unit
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::FlangeCompactLimit,
    Equation::WebCompactLimit,
    Equation::PlasticMoment,
    Equation::LimitingLengthPlastic,
    Equation::LimitingLengthInelastic,
    Equation::InelasticLtbMoment,
    Equation::ElasticLtbStress,
    Equation::ElasticLtbMoment,
    Equation::FlexuralDesignStrength,
    Equation::HssWallRatio,
    Equation::HssWallSlenderLimit,
    Equation::MemberSlenderness,
    Equation::BucklingTransition,
    Equation::EulerStress,
    Equation::InelasticBucklingStress,
    Equation::ElasticBucklingStress,
    Equation::SlenderWallStress,
    Equation::SteelNominalAxial,
    Equation::SteelDesignAxial,
    Equation::EffectiveDepth,
    Equation::ReinforcementRatio,
    Equation::StressBlockDepth,
    Equation::NeutralAxisDepth,
    Equation::SteelStrain,
    Equation::YieldStrain,
    Equation::MinimumReinforcement,
    Equation::ConcreteCompression,
    Equation::SteelTension,
    Equation::ConcreteNominalMoment,
    Equation::ConcreteDesignMoment,
    Equation::GrossArea,
    Equation::LongitudinalRatio,
    Equation::TiedColumnNominalAxial,
    Equation::TiedColumnDesignAxial,
    Equation::PointLoadMaxMoment,
    Equation::PointLoadDeflection,
    Equation::DeflectionLimit,
];

// ============================================================================
// Value Recording
// ============================================================================

/// Sink for computed values on their way to a report.
///
/// Evaluators call `record` for every intermediate and final value. The
/// return value is the value passed in, so recording can wrap an expression
/// without changing the data flow.
pub trait CalcRecorder {
    fn record(&mut self, label: &str, value: f64, unit: &str) -> f64;

    /// Record a registry equation under its symbol and unit.
    fn record_equation(&mut self, equation: Equation, value: f64) -> f64 {
        let meta = equation.metadata();
        self.record(meta.symbol, value, meta.unit)
    }
}

/// Recorder that keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl CalcRecorder for NoTrace {
    fn record(&mut self, _label: &str, value: f64, _unit: &str) -> f64 {
        value
    }
}

/// One recorded value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub label: String,
    pub value: f64,
    pub unit: String,
    /// Citation of the governing clause, when the value came from a registry equation
    pub reference: Option<String>,
}

impl TraceEntry {
    pub fn quantity(&self) -> Quantity {
        Quantity::new(self.value, self.unit.clone())
    }
}

/// Ordered log of recorded values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalcTrace {
    entries: Vec<TraceEntry>,
}

impl CalcTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded entries in order
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Most recent value recorded under `label`
    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.label == label)
            .map(|e| e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another trace onto the end of this one
    pub fn merge(&mut self, other: CalcTrace) {
        self.entries.extend(other.entries);
    }
}

impl CalcRecorder for CalcTrace {
    fn record(&mut self, label: &str, value: f64, unit: &str) -> f64 {
        self.entries.push(TraceEntry {
            label: label.to_string(),
            value,
            unit: unit.to_string(),
            reference: None,
        });
        value
    }

    fn record_equation(&mut self, equation: Equation, value: f64) -> f64 {
        let meta = equation.metadata();
        self.entries.push(TraceEntry {
            label: meta.symbol.to_string(),
            value,
            unit: meta.unit.to_string(),
            reference: Some(meta.reference.citation()),
        });
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citations() {
        assert_eq!(aisc("Eq. F2-5").citation(), "AISC 360-16 Eq. F2-5");
        assert_eq!(aci("9.6.1.2").citation(), "ACI 318M-19 9.6.1.2");
        assert_eq!(CodeReference::Mechanics.short_form(), "Mechanics");
    }

    #[test]
    fn test_every_equation_has_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "{:?} missing name", eq);
            assert!(!meta.symbol.is_empty(), "{:?} missing symbol", eq);
            assert!(!meta.formula_plain.is_empty(), "{:?} missing formula", eq);
        }
    }

    #[test]
    fn test_in_category() {
        let axial = Equation::in_category(EquationCategory::ConcreteAxial);
        assert_eq!(axial.len(), 4);
        assert!(axial.contains(&Equation::TiedColumnNominalAxial));
    }

    #[test]
    fn test_no_trace_passes_value_through() {
        let mut sink = NoTrace;
        assert_eq!(sink.record("x", 1.5, "m"), 1.5);
        assert_eq!(sink.record_equation(Equation::GrossArea, 160_000.0), 160_000.0);
    }

    #[test]
    fn test_calc_trace_keeps_order_and_latest_value() {
        let mut trace = CalcTrace::new();
        trace.record("Lb", 3000.0, "mm");
        trace.record_equation(Equation::InelasticLtbMoment, 250.0);
        trace.record_equation(Equation::ElasticLtbMoment, 180.0);

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.entries()[0].reference, None);
        assert_eq!(trace.value_of("Mn"), Some(180.0));
        assert_eq!(trace.value_of("missing"), None);
    }

    #[test]
    fn test_merge() {
        let mut a = CalcTrace::new();
        a.record("a", 1.0, "");
        let mut b = CalcTrace::new();
        b.record("b", 2.0, "");
        a.merge(b);
        let labels: Vec<_> = a.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["a", "b"]);
    }

    #[test]
    fn test_trace_serialization() {
        let mut trace = CalcTrace::new();
        trace.record_equation(Equation::StressBlockDepth, 109.8);
        let json = serde_json::to_string(&trace).unwrap();
        let parsed: CalcTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, parsed);
    }
}
