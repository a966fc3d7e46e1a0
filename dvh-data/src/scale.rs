/// A monotonic mapping from a domain value (time or measurement) to a pixel
/// coordinate. Any `Fn(f64) -> f64` is a scale.
pub trait Scale {
    fn apply(&self, value: f64) -> f64;
}

impl<F> Scale for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, value: f64) -> f64 {
        self(value)
    }
}

/// Linear interpolation from `domain` onto `range`.
///
/// A collapsed domain maps every value to the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    /// Map a pixel coordinate back to the domain.
    pub fn invert(&self, pixel: f64) -> f64 {
        LinearScale::new(self.range, self.domain).apply(pixel)
    }
}

impl Scale for LinearScale {
    fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }
}
