// File: crates/scamviz-core/src/scale.rs
// Summary: Categorical (band) and linear scale transforms with resize hooks.

/// Categorical X scale.
///
/// Spacing follows the band convention: with `n` bands and padding `p`
/// (inner and outer alike), `step = span / (n + p)`, `bandwidth =
/// step * (1 - p)`, and the leftover outer space is centered.
#[derive(Clone, Debug)]
pub struct BandScale {
    keys: Vec<String>,
    r0: f32,
    r1: f32,
    padding: f32,
    step: f32,
    bandwidth: f32,
    start: f32,
}

impl BandScale {
    pub fn new(keys: Vec<String>, r0: f32, r1: f32, padding: f32) -> Self {
        let mut scale = Self {
            keys,
            r0,
            r1,
            padding: padding.clamp(0.0, 1.0),
            step: 0.0,
            bandwidth: 0.0,
            start: r0,
        };
        scale.recompute();
        scale
    }

    fn recompute(&mut self) {
        let n = self.keys.len() as f32;
        let span = self.r1 - self.r0;
        let divisor = (n + self.padding).max(1.0);
        self.step = span / divisor;
        self.bandwidth = self.step * (1.0 - self.padding);
        self.start = self.r0 + (span - self.step * (n - self.padding)) * 0.5;
    }

    /// Re-range the scale in place; band count and order are untouched.
    pub fn set_range(&mut self, r0: f32, r1: f32) {
        self.r0 = r0;
        self.r1 = r1;
        self.recompute();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    /// Left edge of the band at `index`.
    pub fn position_at(&self, index: usize) -> Option<f32> {
        (index < self.keys.len()).then(|| self.start + self.step * index as f32)
    }

    /// Left edge of the band for `key`.
    pub fn position(&self, key: &str) -> Option<f32> {
        self.keys
            .iter()
            .position(|k| k == key)
            .and_then(|i| self.position_at(i))
    }

    /// Horizontal center of the band for `key`.
    pub fn center(&self, key: &str) -> Option<f32> {
        self.position(key).map(|p| p + self.bandwidth * 0.5)
    }

    /// Index of the band covering pixel `px`, if any.
    pub fn hit(&self, px: f32) -> Option<usize> {
        (0..self.keys.len()).find(|&i| {
            let left = self.start + self.step * i as f32;
            px >= left && px <= left + self.bandwidth
        })
    }
}

/// Linear scale mapping a value domain onto a pixel range.
///
/// The range is directional: pass `(bottom, top)` for a Y axis or
/// `(left, right)` for an X axis.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    px0: f32,
    px1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, mut d1: f64, px0: f32, px1: f32) -> Self {
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Self { d0, d1, px0, px1 }
    }

    /// Round the domain outward to tick-friendly values.
    pub fn nice(mut self, count: usize) -> Self {
        let step = tick_increment(self.d0, self.d1, count.max(1));
        if step > 0.0 {
            self.d0 = (self.d0 / step).floor() * step;
            self.d1 = (self.d1 / step).ceil() * step;
        }
        self
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn set_range(&mut self, px0: f32, px1: f32) {
        self.px0 = px0;
        self.px1 = px1;
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.d1 - self.d0).max(1e-12);
        self.px0 + (((v - self.d0) / span) as f32) * (self.px1 - self.px0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let pixel_span = self.px1 - self.px0;
        if pixel_span.abs() < 1e-6 {
            return self.d0;
        }
        self.d0 + ((px - self.px0) / pixel_span) as f64 * (self.d1 - self.d0)
    }

    /// Round-valued ticks covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let step = tick_increment(self.d0, self.d1, count.max(1));
        if step <= 0.0 {
            return vec![self.d0];
        }
        let start = (self.d0 / step).ceil() as i64;
        let end = (self.d1 / step).floor() as i64;
        (start..=end).map(|i| i as f64 * step).collect()
    }
}

/// Tick step for `count` intervals over `[d0, d1]`, snapped to 1/2/5/10
/// multiples of a power of ten.
fn tick_increment(d0: f64, d1: f64, count: usize) -> f64 {
    let span = d1 - d0;
    if span <= 0.0 {
        return 0.0;
    }
    let step = span / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}
