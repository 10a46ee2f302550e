use crate::EvError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, EvError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EvError::NonFinite { what, value: v })
    }
}

/// Evenly spaced grid from `start` to `end` inclusive.
///
/// The last point is pinned to `end` exactly so accumulated rounding in the
/// step never shifts the endpoint. `n == 0` gives an empty grid, `n == 1`
/// gives `[start]`.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + step * i as Real).collect();
            points[n - 1] = end;
            points
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 10.0, 2), vec![0.0, 10.0]);
    }

    #[test]
    fn linspace_midpoint() {
        let grid = linspace(70.0, 35.0, 3);
        assert_eq!(grid.len(), 3);
        assert!((grid[1] - 52.5).abs() < 1e-12);
        assert_eq!(grid[2], 35.0);
    }

    proptest! {
        #[test]
        fn linspace_hits_both_ends(
            start in -1e6f64..1e6,
            end in -1e6f64..1e6,
            n in 2usize..500,
        ) {
            let grid = linspace(start, end, n);
            prop_assert_eq!(grid.len(), n);
            prop_assert_eq!(grid[0], start);
            prop_assert_eq!(grid[n - 1], end);
        }

        #[test]
        fn linspace_is_monotone(n in 2usize..200) {
            let grid = linspace(0.0, 1.0, n);
            for pair in grid.windows(2) {
                prop_assert!(pair[1] > pair[0]);
            }
        }
    }
}
