//! Steel Section Catalog
//!
//! Section properties for rolled wide-flange shapes and rectangular hollow
//! structural sections in metric units, and the immutable catalog the
//! section optimizer walks.
//!
//! ## Ordering
//!
//! A [`SectionCatalog`] is always sorted ascending by mass per metre. The sort
//! is stable, so sections of equal mass keep their declaration order. The
//! catalog is never mutated after construction.
//!
//! ## Example
//!
//! ```rust
//! use capacity_core::materials::{builtin_w_shapes, ShapeType};
//!
//! let catalog = builtin_w_shapes();
//! let w460 = catalog.lookup("W460×60").unwrap();
//!
//! assert_eq!(w460.shape_type, ShapeType::W);
//! assert!(w460.zx_mm3 > w460.sx_mm3);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::equations::section::{
    hollow_rectangle_area, hollow_rectangle_inertia, hss_wall_ratio, radius_of_gyration,
};
use crate::errors::{CalcError, CalcResult};

/// Density of structural steel (kg/m³)
pub const STEEL_DENSITY_KG_M3: f64 = 7850.0;

/// Steel shape type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    /// Wide flange (W-shape), used for flexure
    W,
    /// Rectangular/square hollow structural section, used for compression
    HssRect,
}

impl ShapeType {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeType::W => "Wide Flange (W)",
            ShapeType::HssRect => "HSS Rectangular/Square",
        }
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structural steel section with precomputed properties
///
/// All dimensional values are metric (mm, mm², mm³, mm⁴). Properties that only
/// one shape family carries are optional; evaluators that need them report
/// [`CalcError::MissingField`] when they are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelSection {
    /// Shape type (W or rectangular HSS)
    pub shape_type: ShapeType,

    /// Designation (e.g., "W460X60", "HSS152X51X3.2")
    pub designation: String,

    /// Nominal mass per metre (kg/m)
    pub weight_kg_m: f64,

    /// Gross cross-sectional area (mm²)
    pub area_mm2: f64,

    /// Overall depth (mm)
    pub depth_mm: f64,

    // === Strong Axis (X-X) ===
    /// Moment of inertia about X-axis (mm⁴)
    pub ix_mm4: f64,

    /// Elastic section modulus about X-axis (mm³)
    pub sx_mm3: f64,

    /// Plastic section modulus about X-axis (mm³)
    pub zx_mm3: f64,

    /// Radius of gyration about X-axis (mm)
    pub rx_mm: f64,

    // === Weak Axis (Y-Y) ===
    /// Radius of gyration about Y-axis (mm)
    pub ry_mm: f64,

    // === Lateral-torsional buckling (W-shapes) ===
    /// Torsional constant J (mm⁴)
    pub j_mm4: Option<f64>,

    /// Effective radius of gyration for LTB (mm)
    pub rts_mm: Option<f64>,

    /// Distance between flange centroids (mm)
    pub ho_mm: Option<f64>,

    // === Local buckling ratios (W-shapes) ===
    /// Flange slenderness bf / (2·tf)
    pub bf_2tf: Option<f64>,

    /// Web slenderness h / tw
    pub h_tw: Option<f64>,

    // === Plate dimensions (HSS) ===
    /// Overall width b (mm)
    pub width_mm: Option<f64>,

    /// Wall thickness t (mm)
    pub wall_thickness_mm: Option<f64>,
}

impl SteelSection {
    /// Build a rectangular HSS from its plate dimensions.
    ///
    /// Area, inertias and radii are computed from the sharp-corner hollow
    /// rectangle; mass uses 7850 kg/m³. `width_mm` is the dimension bent about
    /// the Y axis, `height_mm` the dimension bent about X.
    pub fn rectangular_hss(designation: impl Into<String>, width_mm: f64, height_mm: f64, thickness_mm: f64) -> Self {
        let area = hollow_rectangle_area(width_mm, height_mm, thickness_mm);
        let ix = hollow_rectangle_inertia(width_mm, height_mm, thickness_mm);
        let iy = hollow_rectangle_inertia(height_mm, width_mm, thickness_mm);
        let sx = ix / (height_mm / 2.0);
        let inner_b = width_mm - 2.0 * thickness_mm;
        let inner_h = height_mm - 2.0 * thickness_mm;
        let zx = width_mm * height_mm.powi(2) / 4.0 - inner_b * inner_h.powi(2) / 4.0;

        SteelSection {
            shape_type: ShapeType::HssRect,
            designation: designation.into(),
            weight_kg_m: area * STEEL_DENSITY_KG_M3 * 1.0e-6,
            area_mm2: area,
            depth_mm: height_mm,
            ix_mm4: ix,
            sx_mm3: sx,
            zx_mm3: zx,
            rx_mm: radius_of_gyration(ix, area),
            ry_mm: radius_of_gyration(iy, area),
            j_mm4: None,
            rts_mm: None,
            ho_mm: None,
            bf_2tf: None,
            h_tw: None,
            width_mm: Some(width_mm),
            wall_thickness_mm: Some(thickness_mm),
        }
    }

    /// Check that every stored property is positive and finite.
    ///
    /// Bad section data is reported as an invalid section state so the
    /// optimizer disqualifies that one candidate.
    pub fn validate(&self) -> CalcResult<()> {
        let required = [
            ("weight_kg_m", self.weight_kg_m),
            ("area_mm2", self.area_mm2),
            ("depth_mm", self.depth_mm),
            ("ix_mm4", self.ix_mm4),
            ("sx_mm3", self.sx_mm3),
            ("zx_mm3", self.zx_mm3),
            ("rx_mm", self.rx_mm),
            ("ry_mm", self.ry_mm),
        ];
        let optional = [
            ("j_mm4", self.j_mm4),
            ("rts_mm", self.rts_mm),
            ("ho_mm", self.ho_mm),
            ("bf_2tf", self.bf_2tf),
            ("h_tw", self.h_tw),
            ("width_mm", self.width_mm),
            ("wall_thickness_mm", self.wall_thickness_mm),
        ];

        let present = optional
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)));
        for (field, value) in required.into_iter().chain(present) {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_section_state(
                    "Section properties",
                    format!("{}: {} = {} must be positive and finite", self.designation, field, value),
                ));
            }
        }
        Ok(())
    }

    /// Get the shape's display name (same as designation)
    pub fn display_name(&self) -> &str {
        &self.designation
    }

    /// Get the governing radius of gyration (minimum of rx, ry)
    pub fn r_min(&self) -> f64 {
        self.rx_mm.min(self.ry_mm)
    }

    /// Member slenderness KL/r about the weaker axis.
    ///
    /// A zero or negative governing radius is an invalid section state.
    pub fn slenderness(&self, effective_length_mm: f64) -> CalcResult<f64> {
        let r = self.r_min();
        if r <= 0.0 || !r.is_finite() {
            return Err(CalcError::invalid_section_state(
                "Member slenderness",
                format!("{} has radius of gyration {} mm", self.designation, r),
            ));
        }
        Ok(effective_length_mm / r)
    }

    /// Plate width-to-thickness ratios (b-side, h-side) for a rectangular HSS
    pub fn hss_wall_ratios(&self) -> CalcResult<(f64, f64)> {
        let b = require(self.width_mm, "width_mm")?;
        let t = require(self.wall_thickness_mm, "wall_thickness_mm")?;
        Ok((hss_wall_ratio(b, t), hss_wall_ratio(self.depth_mm, t)))
    }
}

/// Unwrap an optional section property or report it as missing
pub(crate) fn require(value: Option<f64>, field: &str) -> CalcResult<f64> {
    value.ok_or_else(|| CalcError::missing_field(field))
}

impl std::fmt::Display for SteelSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.1} kg/m, A={:.0} mm², Zx={:.3e} mm³)",
            self.designation, self.weight_kg_m, self.area_mm2, self.zx_mm3
        )
    }
}

/// Normalize a designation for lookup: uppercase, `×` and `x` both become `X`.
fn designation_key(designation: &str) -> String {
    designation.trim().replace('×', "X").to_uppercase()
}

/// Immutable steel section catalog, sorted ascending by mass per metre.
///
/// Built once from a list of records and then only read. Pass it by
/// reference to the optimizer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionCatalog {
    /// Sections in ascending weight order (stable)
    sections: Vec<SteelSection>,

    /// Normalized designation -> index into `sections`
    #[serde(skip)]
    index: HashMap<String, usize>,

    /// Catalog version tag (e.g., "builtin-w-metric")
    pub version: Option<String>,
}

impl SectionCatalog {
    /// Build a catalog from records in declaration order.
    ///
    /// Records are sorted by weight with a stable sort, so equal weights keep
    /// the order given here. A duplicate designation keeps its first entry.
    pub fn new(mut sections: Vec<SteelSection>) -> Self {
        sections.sort_by(|a, b| a.weight_kg_m.total_cmp(&b.weight_kg_m));

        let mut index = HashMap::with_capacity(sections.len());
        for (i, section) in sections.iter().enumerate() {
            index.entry(designation_key(&section.designation)).or_insert(i);
        }

        SectionCatalog {
            sections,
            index,
            version: None,
        }
    }

    /// Tag the catalog with a version string
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Load a catalog from a JSON array of [`SteelSection`] records.
    ///
    /// Every record is validated; the first bad one fails the load.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let sections: Vec<SteelSection> = serde_json::from_str(json)?;
        for section in &sections {
            section.validate()?;
        }
        Ok(Self::new(sections))
    }

    /// Look up a section by designation
    ///
    /// Matching is case-insensitive and treats `×` and `X` alike.
    ///
    /// # Example
    ///
    /// ```rust
    /// use capacity_core::materials::builtin_w_shapes;
    ///
    /// let catalog = builtin_w_shapes();
    /// assert!(catalog.lookup("w310x39").is_ok());
    /// assert!(catalog.lookup("W310×39").is_ok());
    /// ```
    pub fn lookup(&self, designation: &str) -> CalcResult<&SteelSection> {
        self.index
            .get(&designation_key(designation))
            .map(|&i| &self.sections[i])
            .ok_or_else(|| CalcError::section_not_found(designation))
    }

    /// Iterate sections in ascending weight order
    pub fn iter(&self) -> std::slice::Iter<'_, SteelSection> {
        self.sections.iter()
    }

    /// Sections in ascending weight order
    pub fn as_slice(&self) -> &[SteelSection] {
        &self.sections
    }

    /// A new catalog holding only one shape type (order preserved)
    pub fn of_type(&self, shape_type: ShapeType) -> SectionCatalog {
        let filtered = self
            .sections
            .iter()
            .filter(|s| s.shape_type == shape_type)
            .cloned()
            .collect();
        SectionCatalog {
            version: self.version.clone(),
            ..SectionCatalog::new(filtered)
        }
    }

    /// Get the number of sections in the catalog
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<'a> IntoIterator for &'a SectionCatalog {
    type Item = &'a SteelSection;
    type IntoIter = std::slice::Iter<'a, SteelSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(designation: &str, weight: f64) -> SteelSection {
        let mut s = SteelSection::rectangular_hss(designation, 100.0, 100.0, 5.0);
        s.weight_kg_m = weight;
        s
    }

    #[test]
    fn test_catalog_sorted_by_weight() {
        let catalog = SectionCatalog::new(vec![stub("C", 30.0), stub("A", 10.0), stub("B", 20.0)]);
        let names: Vec<_> = catalog.iter().map(|s| s.designation.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_equal_weights_keep_declaration_order() {
        let catalog = SectionCatalog::new(vec![
            stub("HEAVY", 40.0),
            stub("FIRST", 38.8),
            stub("SECOND", 38.8),
            stub("THIRD", 38.8),
        ]);
        let names: Vec<_> = catalog.iter().map(|s| s.designation.as_str()).collect();
        assert_eq!(names, ["FIRST", "SECOND", "THIRD", "HEAVY"]);
    }

    #[test]
    fn test_lookup_normalizes_designation() {
        let catalog = SectionCatalog::new(vec![stub("HSS152X51X3.2", 9.9)]);
        assert!(catalog.lookup("hss152x51x3.2").is_ok());
        assert!(catalog.lookup("HSS152×51×3.2").is_ok());

        let err = catalog.lookup("HSS999X1X1").unwrap_err();
        assert_eq!(err.error_code(), "SECTION_NOT_FOUND");
    }

    #[test]
    fn test_rectangular_hss_properties() {
        // 152 x 51 x 3.2 wall
        let hss = SteelSection::rectangular_hss("HSS152X51X3.2", 152.0, 51.0, 3.2);
        assert!((hss.area_mm2 - 1258.24).abs() < 0.01);
        assert!((hss.rx_mm - 21.9).abs() < 0.1);
        assert!((hss.ry_mm - 52.4).abs() < 0.1);
        assert_eq!(hss.r_min(), hss.rx_mm);
        // 1258.24 mm² × 7850 kg/m³ = 9.88 kg/m
        assert!((hss.weight_kg_m - 9.877).abs() < 0.01);

        let (b_t, h_t) = hss.hss_wall_ratios().unwrap();
        assert!((b_t - 22.75).abs() < 1e-9);
        assert!((h_t - 6.96875).abs() < 1e-9);
    }

    #[test]
    fn test_zero_radius_is_invalid_state() {
        let mut hss = SteelSection::rectangular_hss("BAD", 100.0, 100.0, 5.0);
        hss.rx_mm = 0.0;
        let err = hss.slenderness(3000.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SECTION_STATE");
    }

    #[test]
    fn test_missing_plate_dimensions() {
        let mut hss = SteelSection::rectangular_hss("HSS", 100.0, 100.0, 5.0);
        hss.wall_thickness_mm = None;
        assert_eq!(
            hss.hss_wall_ratios().unwrap_err(),
            CalcError::missing_field("wall_thickness_mm")
        );
    }

    #[test]
    fn test_from_json() {
        let hss = SteelSection::rectangular_hss("HSS102X102X6.4", 102.0, 102.0, 6.4);
        let json = serde_json::to_string(&vec![hss.clone()]).unwrap();
        let catalog = SectionCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("HSS102X102X6.4").unwrap(), &hss);

        let err = SectionCatalog::from_json("not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_validate_rejects_each_bad_property() {
        let setters: [(&str, fn(&mut SteelSection, f64)); 12] = [
            ("weight_kg_m", |s, v| s.weight_kg_m = v),
            ("area_mm2", |s, v| s.area_mm2 = v),
            ("depth_mm", |s, v| s.depth_mm = v),
            ("ix_mm4", |s, v| s.ix_mm4 = v),
            ("sx_mm3", |s, v| s.sx_mm3 = v),
            ("zx_mm3", |s, v| s.zx_mm3 = v),
            ("rx_mm", |s, v| s.rx_mm = v),
            ("ry_mm", |s, v| s.ry_mm = v),
            ("j_mm4", |s, v| s.j_mm4 = Some(v)),
            ("rts_mm", |s, v| s.rts_mm = Some(v)),
            ("ho_mm", |s, v| s.ho_mm = Some(v)),
            ("wall_thickness_mm", |s, v| s.wall_thickness_mm = Some(v)),
        ];
        let good = SteelSection::rectangular_hss("HSS102X102X6.4", 102.0, 102.0, 6.4);
        assert!(good.validate().is_ok());

        for (field, set) in setters {
            for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
                let mut section = good.clone();
                set(&mut section, bad);
                let err = section.validate().unwrap_err();
                assert_eq!(err.error_code(), "INVALID_SECTION_STATE", "{} = {}", field, bad);
                assert!(err.to_string().contains(field), "{}", err);
            }
        }
    }

    #[test]
    fn test_absent_optional_properties_are_valid() {
        let hss = SteelSection::rectangular_hss("HSS", 100.0, 100.0, 5.0);
        assert_eq!(hss.j_mm4, None);
        assert!(hss.validate().is_ok());
    }

    #[test]
    fn test_from_json_rejects_bad_section() {
        let mut bad = SteelSection::rectangular_hss("HSS102X102X6.4", 102.0, 102.0, 6.4);
        bad.weight_kg_m = -19.0;
        let json = serde_json::to_string(&vec![bad]).unwrap();
        let err = SectionCatalog::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SECTION_STATE");
    }

    #[test]
    fn test_of_type_filters() {
        let catalog = SectionCatalog::new(vec![stub("A", 10.0), stub("B", 20.0)]).with_version("t");
        assert_eq!(catalog.of_type(ShapeType::HssRect).len(), 2);
        assert!(catalog.of_type(ShapeType::W).is_empty());
        assert_eq!(catalog.of_type(ShapeType::W).version.as_deref(), Some("t"));
    }
}
