use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::format::{axis_label, format_tick, format_value};

const TITLE: &str = "Vertical Differencing";

#[derive(Debug)]
/// A struct that represents a unit-width bucket of an histogram.
struct Bucket {
    start: i64,
    count: usize,
}

impl Bucket {
    fn new(start: i64) -> Self {
        Self { start, count: 0 }
    }

    fn range(&self) -> Range<f64> {
        self.start as f64..(self.start + 1) as f64
    }

    fn inc(&mut self) {
        self.count += 1;
    }
}

/// A struct holding the options to build and render an histogram.
#[derive(Debug, Clone, Builder)]
pub struct HistogramOptions {
    /// Buckets span `[-bin_bound, bin_bound)` in steps of one.
    pub bin_bound: i64,
    /// Position of the reference lines drawn at `-threshold` and `threshold`.
    /// Negative values mean no lines.
    #[builder(default = "-1.0")]
    pub threshold: f64,
    /// Unit appended to the axis label and title.
    #[builder(setter(into))]
    pub unit: String,
    /// Image width, in pixels.
    #[builder(default = "600")]
    pub width: u32,
    /// Image height, in pixels.
    #[builder(default = "675")]
    pub height: u32,
}

/// A struct holding data to plot a Histogram of vertical differences.
pub struct Histogram {
    vec: Vec<Bucket>,
    // Maximum of all bucket counts
    top: usize,
    options: HistogramOptions,
}

impl Histogram {
    /// Creates a Histogram from a slice of numerical data.
    ///
    /// Fails if `options.bin_bound` is not positive.
    pub fn new(vec: &[f64], options: HistogramOptions) -> Result<Self> {
        let mut histogram = Self::new_empty(options)?;
        histogram.load(vec);
        Ok(histogram)
    }

    /// Creates a Histogram with all buckets empty.
    pub fn new_empty(options: HistogramOptions) -> Result<Self> {
        if options.bin_bound <= 0 {
            return Err(Error::BinBound(options.bin_bound));
        }
        if options.threshold.is_nan() {
            warn!("Threshold is not a number; no reference lines will be drawn");
        } else if options.threshold >= 0.0 && !(2.0 * options.threshold).is_finite() {
            warn!(
                "Threshold {} is too large to place; no reference lines will be drawn",
                options.threshold
            );
        }
        Ok(Self {
            vec: (-options.bin_bound..options.bin_bound)
                .map(Bucket::new)
                .collect(),
            top: 0,
            options,
        })
    }

    /// Add to the `Histogram` data the values of a slice of numerical data.
    pub fn load(&mut self, vec: &[f64]) {
        for x in vec {
            self.add(*x);
        }
    }

    /// Add to the `Histogram` a single piece of numerical data.
    pub fn add(&mut self, n: f64) {
        if let Some(slot) = self.find_slot(n) {
            self.vec[slot].inc();
            self.top = self.top.max(self.vec[slot].count);
        }
    }

    fn find_slot(&self, n: f64) -> Option<usize> {
        let bound = self.options.bin_bound as f64;
        if !(n >= -bound && n < bound) {
            return None;
        }
        Some(((n + bound).floor() as usize).min(self.vec.len() - 1))
    }

    /// Left edges of every bucket, in order.
    pub fn edges(&self) -> Vec<i64> {
        self.vec.iter().map(|b| b.start).collect()
    }

    /// Counts of every bucket, in order.
    pub fn counts(&self) -> Vec<usize> {
        self.vec.iter().map(|b| b.count).collect()
    }

    /// Maximum bucket count, zero if nothing was loaded.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Position of the reference lines, if they are to be drawn. NaN and
    /// negative thresholds draw none.
    pub fn threshold(&self) -> Option<f64> {
        let threshold = self.options.threshold;
        if threshold >= 0.0 {
            Some(threshold)
        } else {
            None
        }
    }

    /// Threshold whose lines fit on a finite x axis.
    fn drawable_threshold(&self) -> Option<f64> {
        self.threshold().filter(|t| (2.0 * t).is_finite())
    }

    pub fn title(&self) -> String {
        match self.threshold() {
            Some(threshold) => format!(
                "{}: Error threshold = {} {}",
                TITLE,
                format_value(threshold),
                self.options.unit
            ),
            None => TITLE.to_owned(),
        }
    }

    /// Vertical segments at `-threshold` and `threshold` from zero to the
    /// tallest bucket. Thresholds too large for the axis draw none.
    pub fn threshold_lines(&self) -> Vec<[(f64, f64); 2]> {
        let top = self.top as f64;
        match self.drawable_threshold() {
            Some(t) => vec![[(-t, 0.0), (-t, top)], [(t, 0.0), (t, top)]],
            None => vec![],
        }
    }

    fn x_range(&self) -> Range<f64> {
        let bound = self.options.bin_bound as f64;
        let reach = self.drawable_threshold().map_or(bound, |t| bound.max(t));
        -reach..reach
    }

    fn y_range(&self) -> Range<f64> {
        0.0..self.top.max(1) as f64 * 1.05
    }

    /// Draws the histogram into a bitmap at `path`, overwriting it. The
    /// encoding follows the file extension.
    pub fn render<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let root = BitMapBackend::new(path, (self.options.width, self.options.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title(), ("sans-serif", 18))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(self.x_range(), self.y_range())?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_label_formatter(&|v| format_tick(*v, 2))
            .y_label_formatter(&|v| format_tick(*v, 1))
            .x_desc(axis_label(&self.options.unit))
            .y_desc("Counts")
            .axis_desc_style(("sans-serif", 15))
            .draw()?;

        chart.draw_series(self.vec.iter().filter(|b| b.count > 0).map(|b| {
            let range = b.range();
            Rectangle::new(
                [(range.start, 0.0), (range.end, b.count as f64)],
                BLUE.mix(0.5).filled(),
            )
        }))?;
        for line in self.threshold_lines() {
            chart.draw_series(LineSeries::new(line.iter().copied(), &RED))?;
        }

        root.present()?;
        info!("Histogram written to {}", path.display());
        Ok(())
    }
}
