use std::sync::Arc;

/// A designer-authored 1D mapping, evaluated once per frame by the motion integrator
pub trait ResponseCurve: Send + Sync {
    fn evaluate(&self, t: f32) -> f32;
}

impl<F> ResponseCurve for F where F: Fn(f32) -> f32 + Send + Sync {
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

pub type SharedCurve = Arc<dyn ResponseCurve>;

#[derive(Clone, Copy)]
pub struct ConstantCurve(pub f32);

impl ResponseCurve for ConstantCurve {
    fn evaluate(&self, _: f32) -> f32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
    pub in_tangent: f32,
    pub out_tangent: f32,
}

impl CurveKey {
    pub fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> CurveKey {
        CurveKey {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Cubic hermite curve over a sorted list of keys. Evaluation outside the key range
/// clamps to the first/last key's value.
#[derive(Clone, Debug)]
pub struct KeyframeCurve {
    keys: Vec<CurveKey>,
}

impl KeyframeCurve {
    pub fn new(mut keys: Vec<CurveKey>) -> KeyframeCurve {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        KeyframeCurve { keys }
    }

    /// Builds a curve through (time, value) points with auto tangents: each interior key
    /// takes the average slope of its two neighbouring segments, end keys take the slope
    /// of their only segment.
    pub fn from_points(points: &[(f32, f32)]) -> KeyframeCurve {
        let mut sorted = points.to_vec();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let slope = |a: (f32, f32), b: (f32, f32)| {
            let dt = b.0 - a.0;
            if dt.abs() <= f32::EPSILON { 0.0 } else { (b.1 - a.1) / dt }
        };

        let count = sorted.len();
        let keys = sorted.iter().enumerate().map(|(i, &(time, value))| {
            let tangent = if count < 2 {
                0.0
            }
            else if i == 0 {
                slope(sorted[0], sorted[1])
            }
            else if i == count - 1 {
                slope(sorted[count - 2], sorted[count - 1])
            }
            else {
                (slope(sorted[i - 1], sorted[i]) + slope(sorted[i], sorted[i + 1])) * 0.5
            };

            CurveKey::new(time, value, tangent, tangent)
        }).collect();

        KeyframeCurve { keys }
    }

    /// Straight line from (0, start) to (1, end)
    pub fn linear(start: f32, end: f32) -> KeyframeCurve {
        KeyframeCurve::from_points(&[(0.0, start), (1.0, end)])
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }
}

impl ResponseCurve for KeyframeCurve {
    fn evaluate(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };

        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // find the segment containing t
        let idx = self.keys.partition_point(|k| k.time <= t);
        let k0 = &self.keys[idx - 1];
        let k1 = &self.keys[idx];

        let dt = k1.time - k0.time;
        if dt <= f32::EPSILON {
            return k1.value;
        }

        let s = (t - k0.time) / dt;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
    }
}
