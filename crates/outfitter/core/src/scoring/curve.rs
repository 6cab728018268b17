/// Piecewise-linear curve over sorted `(x, y)` points.
///
/// Inputs outside the first and last point are clamped to the end values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreCurve {
    points: &'static [(f32, f32)],
}

/// Score factor by remaining durability ratio. Items near destruction are
/// discounted steeply; intact items keep their full score.
pub const HIT_POINTS_CURVE: ScoreCurve =
    ScoreCurve::new(&[(0.0, 0.05), (0.4, 0.3), (0.6, 0.75), (1.0, 1.0)]);

impl ScoreCurve {
    /// `points` must be sorted by `x` and non-empty.
    pub const fn new(points: &'static [(f32, f32)]) -> Self {
        Self { points }
    }

    pub fn evaluate(&self, x: f32) -> f32 {
        let Some(&(first_x, first_y)) = self.points.first() else {
            return 0.0;
        };
        if x <= first_x {
            return first_y;
        }

        for window in self.points.windows(2) {
            let (x0, y0) = window[0];
            let (x1, y1) = window[1];
            if x <= x1 {
                if x1 == x0 {
                    return y1;
                }
                let t = (x - x0) / (x1 - x0);
                return y0 + t * (y1 - y0);
            }
        }

        self.points.last().map_or(first_y, |&(_, y)| y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn passes_through_its_points() {
        assert_eq!(HIT_POINTS_CURVE.evaluate(0.0), 0.05);
        assert!(close(HIT_POINTS_CURVE.evaluate(0.4), 0.3));
        assert!(close(HIT_POINTS_CURVE.evaluate(0.6), 0.75));
        assert_eq!(HIT_POINTS_CURVE.evaluate(1.0), 1.0);
    }

    #[test]
    fn interpolates_between_points() {
        assert!(close(HIT_POINTS_CURVE.evaluate(0.5), 0.525));
        assert!(close(HIT_POINTS_CURVE.evaluate(0.2), 0.175));
    }

    #[test]
    fn clamps_outside_domain() {
        assert_eq!(HIT_POINTS_CURVE.evaluate(-1.0), 0.05);
        assert_eq!(HIT_POINTS_CURVE.evaluate(2.0), 1.0);
    }

    #[test]
    fn is_monotonic() {
        let samples: Vec<f32> = (0..=100)
            .map(|i| HIT_POINTS_CURVE.evaluate(i as f32 / 100.0))
            .collect();
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
