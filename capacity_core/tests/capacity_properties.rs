//! End-to-end properties of the evaluators and the optimizer over the
//! built-in catalogs.

use approx::assert_relative_eq;
use capacity_core::calculations::concrete_column::{self, TiedColumnInput};
use capacity_core::calculations::concrete_flexure::{self, ConcreteBeamInput};
use capacity_core::calculations::point_load_beam::{self, PointLoadBeamInput};
use capacity_core::calculations::steel_flexure::limiting_lengths;
use capacity_core::calculations::{
    select_lightest, CapacityEvaluator, CapacityKind, CapacityResult, LimitState, MemberGeometry, Selection,
    SteelCompressionEvaluator, SteelFlexureEvaluator,
};
use capacity_core::materials::{
    builtin_hss_shapes, builtin_w_shapes, ConcreteMaterial, SectionCatalog, SteelGrade, SteelMaterial, SteelSection,
};
use capacity_core::{CalcResult, CalcTrace};

fn grades() -> [SteelMaterial; 2] {
    [
        SteelMaterial::from_grade(SteelGrade::A36),
        SteelMaterial::from_grade(SteelGrade::A992),
    ]
}

fn flexure_at(section: &SteelSection, material: SteelMaterial, lb_mm: f64) -> CapacityResult {
    SteelFlexureEvaluator::new(material, MemberGeometry::new(lb_mm / 1000.0))
        .evaluate(section)
        .unwrap()
}

#[test]
fn lp_is_below_lr_for_every_w_shape() {
    for material in grades() {
        for section in &builtin_w_shapes() {
            let (lp, lr) = limiting_lengths(section, &material).unwrap();
            assert!(lp < lr, "{} at Fy = {}: Lp = {} >= Lr = {}", section.designation, material.fy_mpa, lp, lr);
        }
    }
}

#[test]
fn flexure_is_continuous_at_zone_boundaries() {
    let eps = 1e-6;
    for material in grades() {
        for section in &builtin_w_shapes() {
            let (lp, lr) = limiting_lengths(section, &material).unwrap();

            let below = flexure_at(section, material, lp - eps).nominal;
            let above = flexure_at(section, material, lp + eps).nominal;
            assert!((below - above).abs() < 1e-4, "{} discontinuous at Lp", section.designation);

            let below = flexure_at(section, material, lr - eps).nominal;
            let above = flexure_at(section, material, lr + eps).nominal;
            assert!((below - above).abs() < 1e-4, "{} discontinuous at Lr", section.designation);
        }
    }
}

#[test]
fn flexure_zones_follow_unbraced_length() {
    let material = SteelMaterial::default();
    let section = builtin_w_shapes().lookup("W410X46").unwrap().clone();
    let (lp, lr) = limiting_lengths(&section, &material).unwrap();

    assert_eq!(flexure_at(&section, material, 0.5 * lp).limit_state, LimitState::Yielding);
    assert_eq!(flexure_at(&section, material, 0.5 * (lp + lr)).limit_state, LimitState::InelasticLtb);
    assert_eq!(flexure_at(&section, material, 1.5 * lr).limit_state, LimitState::ElasticLtb);
}

#[test]
fn flexure_is_non_increasing_beyond_lp() {
    let material = SteelMaterial::default();
    for section in &builtin_w_shapes() {
        let (lp, _) = limiting_lengths(section, &material).unwrap();
        let mut previous = f64::INFINITY;
        for step in 0..60 {
            let lb = lp + 1.0 + 200.0 * step as f64;
            let mn = flexure_at(section, material, lb).nominal;
            assert!(mn <= previous + 1e-9, "{}: Mn rose at Lb = {} mm", section.designation, lb);
            previous = mn;
        }
    }
}

#[test]
fn repeated_evaluations_are_bit_identical() {
    let w = builtin_w_shapes();
    let beam = w.lookup("W530X74").unwrap();
    let flexure = SteelFlexureEvaluator::new(SteelMaterial::default(), MemberGeometry::new(5.5).with_cb(1.14));
    assert_eq!(flexure.calculate(beam).unwrap(), flexure.calculate(beam).unwrap());

    let hss = builtin_hss_shapes();
    let column = hss.lookup("HSS203X152X7.9").unwrap();
    let compression = SteelCompressionEvaluator::new(SteelMaterial::default(), MemberGeometry::new(3.6));
    assert_eq!(compression.calculate(column).unwrap(), compression.calculate(column).unwrap());

    let rc = ConcreteBeamInput::new(300.0, 460.0, 2000.0, ConcreteMaterial::new(30.0, 420.0));
    assert_eq!(concrete_flexure::calculate(&rc).unwrap(), concrete_flexure::calculate(&rc).unwrap());
}

#[test]
fn optimizer_returns_first_adequate_in_weight_order() {
    let catalog = SectionCatalog::new(
        [("C", 30.0), ("A", 10.0), ("B", 20.0)]
            .into_iter()
            .map(|(name, weight)| {
                let mut s = SteelSection::rectangular_hss(name, 100.0, 100.0, 5.0);
                s.weight_kg_m = weight;
                s
            })
            .collect(),
    );
    let capacities = |section: &SteelSection| -> CalcResult<CapacityResult> {
        let design = match section.designation.as_str() {
            "A" => 5.0,
            "B" => 15.0,
            _ => 40.0,
        };
        Ok(CapacityResult::new(CapacityKind::Moment, design, 1.0, LimitState::Yielding))
    };

    let outcome = select_lightest(&catalog, &capacities, 12.0).unwrap();
    let chosen = outcome.selected().unwrap();
    assert_eq!(chosen.section.weight_kg_m, 20.0);
    assert_eq!(chosen.capacity.design, 15.0);
}

#[test]
fn optimizer_picks_lightest_adequate_w_shape() {
    let catalog = builtin_w_shapes();
    let evaluator = SteelFlexureEvaluator::new(SteelMaterial::default(), MemberGeometry::new(4.0));
    let demand = 250.0;

    let outcome = select_lightest(&catalog, &evaluator, demand).unwrap();
    let chosen = outcome.selected().unwrap();

    // Brute force over the whole catalog
    let expected = catalog
        .iter()
        .find(|s| evaluator.evaluate(s).map(|r| r.design >= demand).unwrap_or(false))
        .unwrap();
    assert_eq!(chosen.section.designation, expected.designation);
    assert!(outcome.trials[..outcome.trials.len() - 1].iter().all(|t| !t.adequate));
    assert!(chosen.utilization <= 1.0);
}

#[test]
fn optimizer_reports_exhausted_catalog() {
    let catalog = builtin_w_shapes();
    let evaluator = SteelFlexureEvaluator::new(SteelMaterial::default(), MemberGeometry::new(4.0));

    let outcome = select_lightest(&catalog, &evaluator, 50_000.0).unwrap();
    assert_eq!(outcome.selection, Selection::NoAdequateSection);
    assert_eq!(outcome.trials.len(), catalog.len());
}

#[test]
fn optimizer_skips_w_shapes_for_hss_compression() {
    let mut sections: Vec<SteelSection> = builtin_w_shapes().iter().cloned().collect();
    sections.extend(builtin_hss_shapes().iter().cloned());
    let mixed = SectionCatalog::new(sections);

    let a500 = SteelMaterial::from_grade(SteelGrade::A500GrC);
    let evaluator = SteelCompressionEvaluator::new(a500, MemberGeometry::new(3.0));
    let outcome = select_lightest(&mixed, &evaluator, 400.0).unwrap();

    let chosen = outcome.selected().unwrap();
    assert!(chosen.section.designation.starts_with("HSS"));
    assert!(outcome.trials.iter().any(|t| t.error.is_some()));
}

#[test]
fn point_load_demand_drives_selection() {
    let demand = point_load_beam::calculate(&PointLoadBeamInput::new(6.0, 120.0, 3.0, 1.0e8)).unwrap();
    assert_relative_eq!(demand.max_moment_knm, 180.0, epsilon = 1e-9);

    let evaluator = SteelFlexureEvaluator::new(SteelMaterial::default(), MemberGeometry::new(3.0));
    let outcome = select_lightest(&builtin_w_shapes(), &evaluator, demand.max_moment_knm).unwrap();
    let chosen = outcome.selected().unwrap();

    let check = point_load_beam::calculate(&PointLoadBeamInput::new(6.0, 120.0, 3.0, chosen.section.ix_mm4)).unwrap();
    assert!(check.deflection_mm > 0.0);
}

#[test]
fn concrete_neutral_axis_stays_inside_section() {
    let material = ConcreteMaterial::new(25.0, 420.0);
    for as_mm2 in (500..=4000).step_by(250) {
        let input = ConcreteBeamInput::new(300.0, 500.0, as_mm2 as f64, material);
        let result = concrete_flexure::calculate(&input).unwrap();
        assert!(result.c_mm > 0.0 && result.c_mm < result.d_mm);
    }

    let over = ConcreteBeamInput::new(200.0, 250.0, 8000.0, material);
    let err = concrete_flexure::calculate(&over).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_SECTION_STATE");
}

#[test]
fn concrete_beam_reference_values() {
    let input = ConcreteBeamInput::new(300.0, 460.0, 2000.0, ConcreteMaterial::new(30.0, 420.0));
    let mut trace = CalcTrace::new();
    let result = concrete_flexure::calculate_traced(&input, &mut trace).unwrap();

    assert_relative_eq!(result.a_mm, 109.8, epsilon = 0.01);
    assert_relative_eq!(result.c_mm, 129.181, epsilon = 1e-3);
    assert_relative_eq!(result.capacity.nominal, 340.3, epsilon = 0.05);
    assert!(!trace.is_empty());
}

#[test]
fn tied_column_reference_values() {
    let input = TiedColumnInput::new(400.0, 400.0, 3200.0, ConcreteMaterial::new(25.0, 420.0));
    let result = concrete_column::calculate(&input).unwrap();

    assert_eq!(result.ag_mm2, 160_000.0);
    assert_relative_eq!(result.rho_g, 0.02, epsilon = 1e-12);
    assert!(result.rho_within_limits);
    assert_relative_eq!(result.capacity.nominal, 3740.8, epsilon = 1e-6);
    assert_relative_eq!(result.capacity.design, 2431.52, epsilon = 1e-6);
}
