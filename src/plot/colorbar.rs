use std::path::Path;

use plotters::prelude::*;

use crate::error::Result;
use crate::format::{axis_label, format_tick};
use crate::plot::colormap::{Colormap, Normalize};

/// A struct holding the options to render a colorbar.
#[derive(Debug, Clone, Builder)]
pub struct ColorbarOptions {
    /// Half-width of the displayed range, which spans `[-stddev, stddev]`.
    pub stddev: f64,
    /// Unit appended to the axis label.
    #[builder(setter(into))]
    pub unit: String,
    /// Image width, in pixels.
    #[builder(default = "600")]
    pub width: u32,
    /// Image height, in pixels.
    #[builder(default = "100")]
    pub height: u32,
}

/// A horizontal diverging color gradient keyed to a symmetric range.
pub struct Colorbar {
    norm: Normalize,
    colormap: Colormap,
    options: ColorbarOptions,
}

impl Colorbar {
    pub fn new(options: ColorbarOptions) -> Self {
        if options.stddev == 0.0 || !(2.0 * options.stddev).is_finite() {
            warn!(
                "Degenerate stddevVal {}; showing [-0.1, 0.1] instead",
                options.stddev
            );
        } else if options.stddev < 0.0 {
            warn!(
                "Negative stddevVal {}; using its magnitude",
                options.stddev
            );
        }
        Self {
            norm: Normalize::symmetric(options.stddev),
            colormap: Colormap::bwr_r(),
            options,
        }
    }

    pub fn norm(&self) -> &Normalize {
        &self.norm
    }

    pub fn colormap(&self) -> &Colormap {
        &self.colormap
    }

    pub fn label(&self) -> String {
        axis_label(&self.options.unit)
    }

    /// Value range of each cell of the bar, one per colormap entry.
    pub fn cells(&self) -> Vec<(f64, f64, RGBColor)> {
        let steps = self.colormap.len();
        let vmin = self.norm.vmin();
        let delta = (self.norm.vmax() - vmin) / steps as f64;
        (0..steps)
            .map(|i| {
                let v0 = vmin + delta * i as f64;
                (v0, v0 + delta, self.colormap.entry(i))
            })
            .collect()
    }

    /// Draws the bar into a bitmap at `path`, overwriting it. The encoding
    /// follows the file extension.
    pub fn render<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let (vmin, vmax) = (self.norm.vmin(), self.norm.vmax());
        let root = BitMapBackend::new(path, (self.options.width, self.options.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let label_area = self.options.height / 2;
        let mut chart = ChartBuilder::on(&root)
            .margin_top(self.options.height / 8)
            .margin_left(self.options.width / 8)
            .margin_right(self.options.width / 10)
            .x_label_area_size(label_area)
            .build_cartesian_2d(vmin..vmax, 0f64..1f64)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .disable_y_axis()
            .x_labels(9)
            .x_label_formatter(&|v| format_tick(*v, 3))
            .x_desc(self.label())
            .label_style(("sans-serif", 12))
            .axis_desc_style(("sans-serif", 13))
            .draw()?;

        chart.draw_series(
            self.cells()
                .into_iter()
                .map(|(v0, v1, color)| Rectangle::new([(v0, 0.0), (v1, 1.0)], color.filled())),
        )?;
        chart.plotting_area().draw(&Rectangle::new(
            [(vmin, 0.0), (vmax, 1.0)],
            BLACK.stroke_width(1),
        ))?;

        root.present()?;
        info!("Colorbar written to {}", path.display());
        Ok(())
    }
}
