use std::fmt;

use yansi::Color::Blue;

#[derive(Debug)]
/// A struct holding statistical data regarding a unsorted set of numerical
/// values.
pub struct Stats {
    /// Minimum of the input values.
    pub min: f64,
    /// Maximum of the input values.
    pub max: f64,
    /// Average of the input values.
    pub avg: f64,
    /// Standard deviation of the input values.
    pub std: f64,
    /// Variance of the input values.
    pub var: f64,
    /// Number of samples of the input values.
    pub samples: usize,
}

impl Stats {
    /// Creates a Stats struct from a slice of numerical data, or None if the
    /// slice is empty.
    pub fn new(vec: &[f64]) -> Option<Self> {
        let first = *vec.first()?;
        let mut max = first;
        let mut min = first;
        let mut temp: f64 = 0.0;
        let sum = vec.iter().sum::<f64>();
        let avg = sum / vec.len() as f64;
        for val in vec.iter() {
            max = max.max(*val);
            min = min.min(*val);
            temp += (avg - *val).powi(2);
        }
        let var = temp / vec.len() as f64;
        Some(Self {
            min,
            max,
            avg,
            std: var.sqrt(),
            var,
            samples: vec.len(),
        })
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Samples = {len}; Min = {min}; Max = {max}; ",
            len = Blue.paint(self.samples.to_string()),
            min = Blue.paint(format!("{:.3}", self.min)),
            max = Blue.paint(format!("{:.3}", self.max)),
        )?;
        write!(
            f,
            "Average = {avg}; Variance = {var}; STD = {std}",
            avg = Blue.paint(format!("{:.3}", self.avg)),
            var = Blue.paint(format!("{:.3}", self.var)),
            std = Blue.paint(format!("{:.3}", self.std)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use yansi::Paint;

    #[test]
    fn basic_test() {
        let stats = Stats::new(&[1.1, 3.3, 2.2]).unwrap();
        assert_eq!(3_usize, stats.samples);
        assert_float_eq!(stats.avg, 2.2, rmax <= f64::EPSILON);
        assert_float_eq!(stats.min, 1.1, rmax <= f64::EPSILON);
        assert_float_eq!(stats.max, 3.3, rmax <= f64::EPSILON);
        assert_float_eq!(stats.var, 0.8066, abs <= 0.0001);
        assert_float_eq!(stats.std, 0.8981, abs <= 0.0001);
    }

    #[test]
    fn empty_slice() {
        assert!(Stats::new(&[]).is_none());
    }

    #[test]
    fn test_display() {
        let stats = Stats::new(&[-5.0, 0.0, 5.0]).unwrap();
        Paint::disable();
        let display = format!("{stats}");
        assert!(display.contains("Samples = 3"));
        assert!(display.contains("Min = -5.000"));
        assert!(display.contains("Max = 5.000"));
        assert!(display.contains("Average = 0.000"));
    }
}
