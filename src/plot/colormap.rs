use plotters::style::RGBColor;

/// Number of entries in a colormap lookup table.
pub const LUT_SIZE: usize = 256;

const EXPANDER: f64 = 0.1;
const TINY: f64 = 1e-15;

/// Linear mapping of `[vmin, vmax]` onto `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    vmin: f64,
    vmax: f64,
}

impl Normalize {
    /// Builds a normalization over a non-singular version of the range.
    ///
    /// Non-finite bounds, or bounds whose distance overflows, fall back to
    /// `(-0.1, 0.1)`. Reversed bounds are swapped, and a range with no width
    /// is widened (to `(-0.1, 0.1)` around zero, by 10% of each bound's
    /// magnitude otherwise).
    pub fn new(vmin: f64, vmax: f64) -> Self {
        if !(vmax - vmin).is_finite() {
            return Self {
                vmin: -EXPANDER,
                vmax: EXPANDER,
            };
        }
        let (mut vmin, mut vmax) = if vmax < vmin {
            (vmax, vmin)
        } else {
            (vmin, vmax)
        };
        let max_abs = vmin.abs().max(vmax.abs());
        if max_abs < (1e6 / TINY) * f64::MIN_POSITIVE {
            vmin = -EXPANDER;
            vmax = EXPANDER;
        } else if vmax - vmin <= max_abs * TINY {
            if vmax == 0.0 && vmin == 0.0 {
                vmin = -EXPANDER;
                vmax = EXPANDER;
            } else {
                vmin -= EXPANDER * vmin.abs();
                vmax += EXPANDER * vmax.abs();
            }
        }
        Self { vmin, vmax }
    }

    /// Range symmetric around zero.
    pub fn symmetric(bound: f64) -> Self {
        Self::new(-bound, bound)
    }

    pub fn vmin(&self) -> f64 {
        self.vmin
    }

    pub fn vmax(&self) -> f64 {
        self.vmax
    }

    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.vmin) / (self.vmax - self.vmin)
    }
}

/// A colormap sampled into a fixed lookup table.
#[derive(Debug, Clone)]
pub struct Colormap {
    lut: Vec<RGBColor>,
}

impl Colormap {
    /// Interpolates evenly spaced color stops (channels in `[0, 1]`) into a
    /// table of `LUT_SIZE` entries. With no stops the table is all black.
    pub fn from_stops(stops: &[(f64, f64, f64)]) -> Self {
        if stops.is_empty() {
            return Self {
                lut: vec![RGBColor(0, 0, 0); LUT_SIZE],
            };
        }
        let segments = stops.len().saturating_sub(1).max(1) as f64;
        let lut = (0..LUT_SIZE)
            .map(|i| {
                let x = i as f64 / (LUT_SIZE - 1) as f64;
                let position = x * segments;
                let lower = (position.floor() as usize).min(stops.len().saturating_sub(2));
                let upper = (lower + 1).min(stops.len() - 1);
                let weight = position - lower as f64;
                let channel = |a: f64, b: f64| {
                    let value = a + (b - a) * weight;
                    (value.clamp(0.0, 1.0) * 255.0).round() as u8
                };
                let (r0, g0, b0) = stops[lower];
                let (r1, g1, b1) = stops[upper];
                RGBColor(channel(r0, r1), channel(g0, g1), channel(b0, b1))
            })
            .collect();
        Self { lut }
    }

    /// Diverging blue, white, red.
    pub fn bwr() -> Self {
        Self::from_stops(&[(0.0, 0.0, 1.0), (1.0, 1.0, 1.0), (1.0, 0.0, 0.0)])
    }

    /// Diverging red, white, blue: negative values red, positive values blue.
    pub fn bwr_r() -> Self {
        Self::bwr().reversed()
    }

    pub fn reversed(mut self) -> Self {
        self.lut.reverse();
        self
    }

    pub fn len(&self) -> usize {
        self.lut.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lut.is_empty()
    }

    /// Table entry at `index`, clamped to the table.
    pub fn entry(&self, index: usize) -> RGBColor {
        self.lut[index.min(self.lut.len() - 1)]
    }

    /// Color of a normalized value; out of range values take the end colors.
    pub fn color(&self, t: f64) -> RGBColor {
        if t.is_nan() || t < 0.0 {
            return self.entry(0);
        }
        self.entry((t * self.lut.len() as f64) as usize)
    }

    /// Color for `value` under `norm`.
    pub fn map(&self, norm: &Normalize, value: f64) -> RGBColor {
        self.color(norm.normalize(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn symmetric_range() {
        let norm = Normalize::symmetric(5.0);
        assert_float_eq!(norm.vmin(), -5.0, abs <= f64::EPSILON);
        assert_float_eq!(norm.vmax(), 5.0, abs <= f64::EPSILON);
        assert_float_eq!(norm.normalize(0.0), 0.5, abs <= f64::EPSILON);
        assert_float_eq!(norm.normalize(-5.0), 0.0, abs <= f64::EPSILON);
        assert_float_eq!(norm.normalize(5.0), 1.0, abs <= f64::EPSILON);
        assert_float_eq!(norm.normalize(2.5), 0.75, abs <= f64::EPSILON);
    }

    #[test]
    fn zero_range_is_expanded() {
        let norm = Normalize::symmetric(0.0);
        assert_float_eq!(norm.vmin(), -0.1, abs <= f64::EPSILON);
        assert_float_eq!(norm.vmax(), 0.1, abs <= f64::EPSILON);
    }

    #[test]
    fn flat_range_is_widened() {
        let norm = Normalize::new(2.0, 2.0);
        assert_float_eq!(norm.vmin(), 1.8, abs <= 1e-12);
        assert_float_eq!(norm.vmax(), 2.2, abs <= 1e-12);
    }

    #[test]
    fn reversed_range_is_swapped() {
        let norm = Normalize::symmetric(-4.91);
        assert_eq!(norm, Normalize::symmetric(4.91));
    }

    #[test]
    fn non_finite_range() {
        let norm = Normalize::symmetric(f64::NAN);
        assert_float_eq!(norm.vmin(), -0.1, abs <= f64::EPSILON);
        assert_float_eq!(norm.vmax(), 0.1, abs <= f64::EPSILON);
        assert_eq!(Normalize::symmetric(f64::INFINITY), norm);
    }

    #[test]
    fn overflowing_range() {
        let norm = Normalize::symmetric(1e308);
        assert_float_eq!(norm.vmin(), -0.1, abs <= f64::EPSILON);
        assert_float_eq!(norm.vmax(), 0.1, abs <= f64::EPSILON);
        assert_eq!(Normalize::new(-f64::MAX, f64::MAX), norm);
        let wide = Normalize::symmetric(1e307);
        assert_float_eq!(wide.vmax(), 1e307, rmax <= f64::EPSILON);
    }

    #[test]
    fn no_stops() {
        let cmap = Colormap::from_stops(&[]);
        assert_eq!(cmap.len(), LUT_SIZE);
        assert_eq!(cmap.color(0.5), RGBColor(0, 0, 0));
    }

    #[test]
    fn single_stop() {
        let cmap = Colormap::from_stops(&[(1.0, 1.0, 1.0)]);
        assert_eq!(cmap.entry(0), RGBColor(255, 255, 255));
        assert_eq!(cmap.entry(LUT_SIZE - 1), RGBColor(255, 255, 255));
    }

    #[test]
    fn bwr_r_end_points() {
        let cmap = Colormap::bwr_r();
        assert_eq!(cmap.len(), LUT_SIZE);
        assert_eq!(cmap.entry(0), RGBColor(255, 0, 0));
        assert_eq!(cmap.entry(LUT_SIZE - 1), RGBColor(0, 0, 255));
        assert_eq!(cmap.color(-0.5), RGBColor(255, 0, 0));
        assert_eq!(cmap.color(1.0), RGBColor(0, 0, 255));
        assert_eq!(cmap.color(7.0), RGBColor(0, 0, 255));
    }

    #[test]
    fn extremes_and_center_of_symmetric_bar() {
        let cmap = Colormap::bwr_r();
        let norm = Normalize::symmetric(5.0);
        assert_eq!(cmap.map(&norm, -5.0), RGBColor(255, 0, 0));
        assert_eq!(cmap.map(&norm, 5.0), RGBColor(0, 0, 255));
        let RGBColor(r, g, b) = cmap.map(&norm, 0.0);
        assert!(r >= 250 && g >= 250 && b >= 250);
    }

    #[test]
    fn mapping_mirrors_around_zero() {
        let cmap = Colormap::bwr_r();
        let norm = Normalize::symmetric(5.0);
        for value in &[0.3, 1.3, 2.7, 4.1] {
            let RGBColor(r, g, b) = cmap.map(&norm, *value);
            let RGBColor(mr, mg, mb) = cmap.map(&norm, -*value);
            assert_eq!((r, g, b), (mb, mg, mr), "value {}", value);
        }
    }

    #[test]
    fn negative_side_is_red() {
        let cmap = Colormap::bwr_r();
        let norm = Normalize::symmetric(5.0);
        let RGBColor(r, _, b) = cmap.map(&norm, -2.0);
        assert_eq!(r, 255);
        assert!(b < 255);
        let RGBColor(r, _, b) = cmap.map(&norm, 2.0);
        assert_eq!(b, 255);
        assert!(r < 255);
    }
}
