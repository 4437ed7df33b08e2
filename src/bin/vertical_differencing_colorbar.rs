use std::ffi::OsString;

use log::{error, info};

use vdcharts::app;
use vdcharts::cli::{self, COLORBAR_USAGE};
use vdcharts::plot::{Colorbar, ColorbarOptionsBuilder};
use vdcharts::{Error, Result};

fn colorbar(args: Vec<OsString>) -> Result<()> {
    let matches = app::get_colorbar_app().get_matches_from(args);
    let stddev: f64 = matches.value_of_t("stddev")?;
    let unit = matches.value_of("unit").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();
    info!("stddevVal = {}", stddev);
    info!("unit = {}", unit);
    info!("file_png = {}", output);

    let options = ColorbarOptionsBuilder::default()
        .stddev(stddev)
        .unit(unit)
        .build()
        .map_err(|e| Error::Options(e.to_string()))?;
    Colorbar::new(options).render(output)
}

fn main() {
    cli::disable_color_if_needed();
    let args = cli::args_or_usage(&COLORBAR_USAGE);
    cli::init_logger();
    if let Err(error) = colorbar(args) {
        error!("{}", error);
        std::process::exit(1);
    }
}
