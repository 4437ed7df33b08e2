use std::ffi::OsString;

use log::{error, info};

use vdcharts::app;
use vdcharts::cli::{self, HISTOGRAM_USAGE};
use vdcharts::plot::{Histogram, HistogramOptionsBuilder};
use vdcharts::read::SampleReader;
use vdcharts::stats::Stats;
use vdcharts::{Error, Result};

fn histogram(args: Vec<OsString>) -> Result<()> {
    let matches = app::get_histogram_app().get_matches_from(args);
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();
    let bin_bound: i64 = matches.value_of_t("bin-bound")?;
    let threshold: f64 = matches.value_of_t("threshold")?;
    let unit = matches.value_of("unit").unwrap_or_default();
    info!("Input file xyz = {}", input);
    info!("Output file png = {}", output);
    info!("bind_val = {}", bin_bound);
    info!("mlod = {}", threshold);
    info!("unit = {}", unit);

    let options = HistogramOptionsBuilder::default()
        .bin_bound(bin_bound)
        .threshold(threshold)
        .unit(unit)
        .build()
        .map_err(|e| Error::Options(e.to_string()))?;
    let mut histogram = Histogram::new_empty(options)?;

    let samples = SampleReader::default().read(input)?;
    match Stats::new(&samples) {
        Some(stats) => info!("{}", stats),
        None => info!("No samples left after filtering"),
    }
    histogram.load(&samples);
    histogram.render(output)
}

fn main() {
    cli::disable_color_if_needed();
    let args = cli::args_or_usage(&HISTOGRAM_USAGE);
    cli::init_logger();
    if let Err(error) = histogram(args) {
        error!("{}", error);
        std::process::exit(1);
    }
}
