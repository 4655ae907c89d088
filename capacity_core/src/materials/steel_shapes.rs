//! Built-in Steel Shape Tables
//!
//! Metric properties for a working set of rolled W-shapes and rectangular
//! HSS. Both tables are returned as fresh [`SectionCatalog`]s so callers can
//! filter or extend them without touching shared state.
//!
//! W-shape values are the published metric properties (soft-converted from
//! the AISC Shapes Database v16). HSS properties are computed from plate
//! dimensions with sharp corners, see [`SteelSection::rectangular_hss`].

use super::steel::{SectionCatalog, ShapeType, SteelSection};

/// Catalog version tag for the built-in W table
pub const W_CATALOG_VERSION: &str = "builtin-w-metric";

/// Catalog version tag for the built-in HSS table
pub const HSS_CATALOG_VERSION: &str = "builtin-hss-metric";

// (designation, kg/m, A mm², d mm, Ix mm⁴, Sx mm³, rx mm, Zx mm³, ry mm,
//  J mm⁴, rts mm, ho mm, bf/2tf, h/tw)
type WRow = (
    &'static str,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
    f64,
);

#[rustfmt::skip]
const W_SHAPES: &[WRow] = &[
    ("W200X15",  15.0,  1910.0,  200.4, 1.282e7, 1.28e5,   81.79, 1.454e5, 21.36, 17730.0, 26.92, 195.3, 9.61, 40.5),
    ("W250X18",  17.9,  2284.0,  250.7, 2.239e7, 1.786e5,  99.06, 2.065e5, 19.94, 22810.0, 24.97, 245.4, 9.43, 46.6),
    ("W310X21",  20.9,  2684.0,  302.3, 3.688e7, 2.442e5, 117.3,  2.851e5, 19.13, 29300.0, 24.38, 297.2, 8.82, 54.3),
    ("W310X24",  23.8,  3039.0,  304.8, 4.287e7, 2.802e5, 118.6,  3.294e5, 19.63, 42870.0, 24.89, 297.2, 7.53, 49.4),
    ("W310X28",  28.3,  3594.0,  309.9, 5.411e7, 3.49e5,  122.4,  4.048e5, 20.88, 74920.0, 25.91, 302.3, 5.72, 46.2),
    ("W250X28",  28.4,  3626.0,  259.1, 4.008e7, 3.081e5, 105.2,  3.54e5,  22.2,  96980.0, 26.92, 251.7, 5.09, 35.4),
    ("W360X33",  32.9,  4187.0,  348.0, 8.283e7, 4.752e5, 140.7,  5.441e5, 26.42, 86580.0, 32.26, 340.4, 7.46, 53.3),
    ("W310X39",  38.8,  4935.0,  309.9, 8.491e7, 5.473e5, 131.3,  6.096e5, 38.35, 1.249e5, 44.45, 299.7, 8.54, 47.2),
    ("W360X39",  38.8,  4961.0,  353.1, 1.02e8,  5.785e5, 143.5,  6.588e5, 27.43, 1.49e5,  33.27, 342.9, 5.98, 48.1),
    ("W410X39",  38.8,  4955.0,  398.8, 1.253e8, 6.293e5, 159.0,  7.243e5, 28.45, 1.091e5, 34.54, 391.2, 7.97, 56.8),
    ("W360X45",  44.5,  5710.0,  350.5, 1.211e8, 6.883e5, 145.5,  7.751e5, 37.85, 1.582e5, 44.2,  340.4, 8.74, 45.4),
    ("W410X46",  46.1,  5890.0,  403.9, 1.561e8, 7.735e5, 162.8,  8.849e5, 29.72, 1.919e5, 35.31, 401.3, 6.28, 51.6),
    ("W360X51",  50.7,  6452.0,  355.6, 1.415e8, 7.964e5, 148.1,  8.947e5, 38.86, 2.368e5, 45.21, 348.0, 7.41, 43.1),
    ("W460X52",  52.0,  6645.0,  449.6, 2.123e8, 9.439e5, 178.8,  1.09e6,  30.99, 2.106e5, 38.35, 439.4, 7.06, 53.5),
    ("W410X60",  59.5,  7613.0,  406.4, 2.156e8, 1.06e6,  168.4,  1.196e6, 39.88, 3.305e5, 46.23, 393.7, 6.93, 46.5),
    ("W460X60",  60.0,  7613.0,  454.7, 2.547e8, 1.121e6, 183.1,  1.285e6, 32.26, 3.371e5, 39.62, 442.0, 5.73, 50.9),
    ("W530X66",  65.4,  8387.0,  525.8, 3.509e8, 1.337e6, 204.7,  1.563e6, 32.0,  3.205e5, 40.64, 515.6, 7.22, 53.6),
    ("W530X72",  71.4,  9097.0,  523.2, 3.992e8, 1.524e6, 209.3,  1.753e6, 42.16, 3.342e5, 52.07, 513.1, 9.47, 53.6),
    ("W530X74",  74.4,  9484.0,  528.3, 4.096e8, 1.549e6, 207.8,  1.803e6, 33.02, 4.745e5, 41.66, 515.6, 6.1,  49.4),
    ("W460X82",  81.6, 10450.0,  459.7, 3.704e8, 1.611e6, 188.2,  1.835e6, 42.42, 6.909e5, 50.29, 444.5, 5.98, 41.1),
    ("W530X82",  82.0, 10450.0,  528.3, 4.745e8, 1.803e6, 213.4,  2.065e6, 43.94, 5.161e5, 53.59, 515.6, 7.87, 50.0),
    ("W610X82",  82.0, 10450.0,  599.4, 5.619e8, 1.868e6, 231.4,  2.196e6, 34.04, 4.912e5, 43.43, 586.7, 6.94, 54.6),
    ("W530X92",  92.4, 11810.0,  533.4, 5.536e8, 2.081e6, 216.9,  2.36e6,  44.96, 7.617e5, 54.61, 518.2, 6.7,  46.9),
    ("W610X92",  92.4, 11740.0,  602.0, 6.452e8, 2.147e6, 234.4,  2.507e6, 35.05, 7.118e5, 44.45, 589.3, 5.97, 50.1),
    ("W610X101", 101.0, 12970.0, 602.0, 7.617e8, 2.524e6, 242.6,  2.901e6, 47.5,  7.784e5, 58.42, 589.3, 7.66, 52.0),
    ("W610X113", 113.0, 14450.0, 607.1, 8.741e8, 2.884e6, 246.1,  3.277e6, 48.77, 1.116e6, 59.18, 589.3, 6.61, 49.0),
];

// (designation, b mm, h mm, t mm)
#[rustfmt::skip]
const HSS_SHAPES: &[(&str, f64, f64, f64)] = &[
    ("HSS102X51X3.2",   102.0,  51.0, 3.2),
    ("HSS102X76X4.8",   102.0,  76.0, 4.8),
    ("HSS127X76X4.8",   127.0,  76.0, 4.8),
    ("HSS152X51X3.2",   152.0,  51.0, 3.2),
    ("HSS152X102X4.8",  152.0, 102.0, 4.8),
    ("HSS152X152X6.4",  152.0, 152.0, 6.4),
    ("HSS203X102X6.4",  203.0, 102.0, 6.4),
    ("HSS203X152X7.9",  203.0, 152.0, 7.9),
    ("HSS203X203X9.5",  203.0, 203.0, 9.5),
    ("HSS254X152X9.5",  254.0, 152.0, 9.5),
    ("HSS254X254X9.5",  254.0, 254.0, 9.5),
    ("HSS305X203X9.5",  305.0, 203.0, 9.5),
];

fn w_section(row: &WRow) -> SteelSection {
    let &(designation, weight, area, depth, ix, sx, rx, zx, ry, j, rts, ho, bf_2tf, h_tw) = row;
    SteelSection {
        shape_type: ShapeType::W,
        designation: designation.to_string(),
        weight_kg_m: weight,
        area_mm2: area,
        depth_mm: depth,
        ix_mm4: ix,
        sx_mm3: sx,
        zx_mm3: zx,
        rx_mm: rx,
        ry_mm: ry,
        j_mm4: Some(j),
        rts_mm: Some(rts),
        ho_mm: Some(ho),
        bf_2tf: Some(bf_2tf),
        h_tw: Some(h_tw),
        width_mm: None,
        wall_thickness_mm: None,
    }
}

/// Rolled W-shapes, sorted by mass per metre
pub fn builtin_w_shapes() -> SectionCatalog {
    SectionCatalog::new(W_SHAPES.iter().map(w_section).collect()).with_version(W_CATALOG_VERSION)
}

/// Rectangular HSS, sorted by mass per metre
pub fn builtin_hss_shapes() -> SectionCatalog {
    let sections = HSS_SHAPES
        .iter()
        .map(|&(name, b, h, t)| SteelSection::rectangular_hss(name, b, h, t))
        .collect();
    SectionCatalog::new(sections).with_version(HSS_CATALOG_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_w_catalog_complete_and_sorted() {
        let catalog = builtin_w_shapes();
        assert_eq!(catalog.len(), W_SHAPES.len());
        assert_eq!(catalog.version.as_deref(), Some(W_CATALOG_VERSION));

        let weights: Vec<f64> = catalog.iter().map(|s| s.weight_kg_m).collect();
        assert!(weights.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(catalog.as_slice()[0].designation, "W200X15");
    }

    #[test]
    fn test_w_shapes_carry_ltb_properties() {
        for section in &builtin_w_shapes() {
            assert_eq!(section.shape_type, ShapeType::W);
            assert!(section.j_mm4.is_some(), "{} missing J", section.designation);
            assert!(section.rts_mm.is_some());
            assert!(section.ho_mm.is_some());
            assert!(section.zx_mm3 > section.sx_mm3);
        }
    }

    #[test]
    fn test_equal_weight_w_shapes_keep_table_order() {
        let catalog = builtin_w_shapes();
        let names: Vec<_> = catalog
            .iter()
            .filter(|s| s.weight_kg_m == 38.8)
            .map(|s| s.designation.as_str())
            .collect();
        assert_eq!(names, ["W310X39", "W360X39", "W410X39"]);
    }

    #[test]
    fn test_hss_catalog() {
        let catalog = builtin_hss_shapes();
        assert_eq!(catalog.len(), HSS_SHAPES.len());
        assert!(catalog.iter().all(|s| s.shape_type == ShapeType::HssRect));
        assert_eq!(catalog.as_slice()[0].designation, "HSS102X51X3.2");

        let hss = catalog.lookup("HSS152×51×3.2").unwrap();
        assert!((hss.area_mm2 - 1258.24).abs() < 0.01);
    }
}
