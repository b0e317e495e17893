/// Hyperbola `y = c / (x + h) + v`.
///
/// - `c` sets curvature and orientation: positive `c` falls toward `v`
///   for `x > -h`, negative `c` rises toward it.
/// - `h` shifts the curve horizontally. Larger `h` moves it left.
/// - `v` is the horizontal asymptote.
///
/// Evaluating at `x == -h` divides by zero. Nothing here guards against it;
/// callers keep `h` fitted so the non-negative steps they query never land there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperbola {
    pub c: f64,
    pub h: f64,
    pub v: f64,
}

/// `1 / t`, with `0` mapped to `0` instead of infinity.
pub fn invert(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        t.recip()
    }
}

impl Hyperbola {
    pub fn new(c: f64, h: f64, v: f64) -> Self {
        Self { c, h, v }
    }

    pub fn value(&self, x: f64) -> f64 {
        self.c / (x + self.h) + self.v
    }

    /// `(step, value)` pairs for every step in `steps`.
    pub fn coordinates<I>(&self, steps: I) -> Vec<(u64, f64)>
    where
        I: IntoIterator<Item = u64>,
    {
        steps
            .into_iter()
            .map(|x| (x, self.value(x as f64)))
            .collect()
    }

    /// Shift horizontally so the curve keeps its shape and passes through `(x, y)`.
    pub fn shift_h(&mut self, x: f64, y: f64) {
        self.h = invert((y - self.v) / self.c) - x;
    }

    /// Refit `c` and `h` so the curve passes through `(x1, y1)` and `(x2, y2)`.
    /// The asymptote `v` is left as is.
    ///
    /// `y1 == y2` has no solution and yields non-finite coefficients.
    pub fn adjust_rate(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let v = self.v;
        let h = ((x2 * y2) - (x2 * v) - (x1 * y1) + (x1 * v)) / (y1 - y2);
        let c = (y1 - v) * (x1 + h);
        self.h = h;
        self.c = c;
    }

    /// True when both fitted coefficients are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.c.is_finite() && self.h.is_finite() && self.v.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn value_follows_formula() {
        let curve = Hyperbola::new(2.0, 1.0, 3.0);
        assert!(close(curve.value(0.0), 5.0));
        assert!(close(curve.value(1.0), 4.0));
        assert!(close(curve.value(3.0), 3.5));
    }

    #[test]
    fn invert_maps_zero_to_zero() {
        assert_eq!(invert(0.0), 0.0);
        assert_eq!(invert(4.0), 0.25);
        assert_eq!(invert(-0.5), -2.0);
    }

    #[test]
    fn shift_h_passes_through_point_and_keeps_c_and_v() {
        let mut curve = Hyperbola::new(1.0, 1.0, 0.0);
        curve.shift_h(7.0, 0.25);
        assert!(close(curve.value(7.0), 0.25));
        assert_eq!(curve.c, 1.0);
        assert_eq!(curve.v, 0.0);
    }

    #[test]
    fn shift_h_onto_asymptote_degenerates_without_panicking() {
        let mut curve = Hyperbola::new(1.0, 1.0, 2.0);
        curve.shift_h(3.0, 2.0);
        assert_eq!(curve.h, -3.0);
        assert!(!curve.value(3.0).is_finite());
    }

    #[test]
    fn adjust_rate_passes_through_both_points() {
        let mut curve = Hyperbola::new(1.0, 1.0, 0.0);
        curve.adjust_rate(0.0, 4.0, 1.0, 2.0);
        assert!(close(curve.value(0.0), 4.0));
        assert!(close(curve.value(1.0), 2.0));
        assert_eq!(curve.v, 0.0);
        // h = r / (1 - r) for a one-step rate r = 0.5
        assert!(close(curve.h, 1.0));
        assert!(close(curve.c, 4.0));
    }

    #[test]
    fn adjust_rate_with_equal_targets_is_not_finite() {
        let mut curve = Hyperbola::new(1.0, 1.0, 0.0);
        curve.adjust_rate(0.0, 2.0, 1.0, 2.0);
        assert!(!curve.is_finite());
    }

    #[test]
    fn coordinates_pair_steps_with_values() {
        let curve = Hyperbola::new(4.0, 1.0, 0.0);
        let coords = curve.coordinates(0..3);
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[0].0, 0);
        assert!(close(coords[0].1, 4.0));
        assert!(close(coords[2].1, 4.0 / 3.0));
    }
}
