// ---------------------------------------------------------------------------
// Unit conversion: NO₂ column density → standardized mass concentration
// ---------------------------------------------------------------------------

/// Molar mass of NO₂ (g/mol). Source: IUPAC.
pub const MOLAR_MASS_NO2_G_PER_MOL: f64 = 46.0055;

/// Grams → micrograms.
pub const G_TO_UG: f64 = 1_000_000.0;

/// Assumed well-mixed boundary-layer height (m). Fixed part of the standard
/// scale; changing it breaks numeric parity with the trained artifacts.
pub const BOUNDARY_LAYER_HEIGHT_M: f64 = 100.0;

/// Convert a column density (mol/m²) into a volumetric molar concentration
/// (mol/m³) by dividing by the air-column height.
///
/// A non-positive height is physically meaningless; the result is clamped to
/// `0.0` instead of dividing by zero.
pub fn column_to_volume_concentration(mol_per_m2: f64, height_m: f64) -> f64 {
    if height_m <= 0.0 {
        return 0.0;
    }
    mol_per_m2 / height_m
}

/// Convert a column density (mol/m²) into a mass concentration (µg/m³)
/// on the standard scale: mol/m³ × g/mol → g/m³, then g → µg.
pub fn to_standard_concentration(mol_per_m2: f64) -> f64 {
    let g_per_m3 = column_to_volume_concentration(mol_per_m2, BOUNDARY_LAYER_HEIGHT_M)
        * MOLAR_MASS_NO2_G_PER_MOL;
    g_per_m3 * G_TO_UG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_column_maps_to_zero() {
        assert_eq!(to_standard_concentration(0.0), 0.0);
    }

    #[test]
    fn non_positive_height_is_guarded() {
        assert_eq!(column_to_volume_concentration(0.00003, 0.0), 0.0);
        assert_eq!(column_to_volume_concentration(0.00003, -5.0), 0.0);
    }

    #[test]
    fn matches_explicit_formula() {
        for &x in &[0.0, 1e-6, 0.000012, 0.00003, 0.5, 3.0] {
            let expected = (x / 100.0) * 46.0055 * 1_000_000.0;
            assert_eq!(to_standard_concentration(x), expected);
        }
    }

    #[test]
    fn non_negative_and_monotone() {
        let mut prev = -1.0;
        for i in 0..100 {
            let x = i as f64 * 1e-6;
            let c = to_standard_concentration(x);
            assert!(c >= 0.0);
            assert!(c > prev);
            prev = c;
        }
    }
}
