//! Solubility and supersaturation.

/// Cubic solubility coefficients, c* in g per 100 g water against T in °C.
pub const SOLUBILITY_COEFFS: [f64; 4] = [64.18, 0.1337, 5.52e-3, -9.73e-6];

/// Equilibrium solubility [g/100 g water] at `t_c` °C.
///
/// Total function: the cubic is evaluated wherever it is asked, with no
/// extrapolation guard. It is continuous and non-decreasing across the
/// 20..90 °C service range.
pub fn solubility(t_c: f64) -> f64 {
    let [a0, a1, a2, a3] = SOLUBILITY_COEFFS;
    a0 + t_c * (a1 + t_c * (a2 + t_c * a3))
}

/// Relative supersaturation `(C - c*) / c*` at liquor concentration `C`
/// [g/100 g water] and temperature `t_c` °C.
///
/// Deliberately unclamped: undersaturated liquor reports a negative value,
/// which the kinetics floor only at their own boundary.
pub fn supersaturation(concentration_g_per_100g: f64, t_c: f64) -> f64 {
    let c_star = solubility(t_c);
    (concentration_g_per_100g - c_star) / c_star
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn solubility_at_fifty_degrees() {
        // 64.18 + 0.1337*50 + 5.52e-3*2500 - 9.73e-6*125000
        assert!((solubility(50.0) - 83.448_75).abs() < 1e-9);
    }

    #[test]
    fn solubility_at_profile_endpoints() {
        assert!((solubility(70.0) - 97.249_61).abs() < 1e-4);
        assert!((solubility(35.0) - 75.204_326).abs() < 1e-4);
    }

    #[test]
    fn supersaturation_signs() {
        // saturated liquor sits exactly at zero
        let c_star = solubility(50.0);
        assert!(supersaturation(c_star, 50.0).abs() < 1e-12);
        assert!(supersaturation(90.0, 50.0) > 0.0);
        assert!(supersaturation(75.0, 35.0) < 0.0);
    }

    proptest! {
        #[test]
        fn solubility_non_decreasing_in_service_range(
            t in 20.0f64..89.0,
            dt in 0.01f64..1.0,
        ) {
            let lo = solubility(t);
            let hi = solubility(t + dt);
            prop_assert!(hi >= lo);
        }

        #[test]
        fn solubility_is_continuous(t in 20.0f64..90.0) {
            let step = 1e-6;
            let delta = (solubility(t + step) - solubility(t)).abs();
            prop_assert!(delta < 1e-4);
        }
    }
}
