use clap::{self, Arg, Command};

// Values may start with a dash: negative numbers, or units such as `-m`.
fn positional(name: &'static str, help: &'static str) -> Arg<'static> {
    Arg::new(name)
        .help(help)
        .required(true)
        .allow_hyphen_values(true)
}

pub fn get_colorbar_app() -> Command<'static> {
    Command::new("vertical_differencing_colorbar")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Render a diverging colorbar legend for vertical differences")
        .max_term_width(100)
        .allow_hyphen_values(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(positional(
            "stddev",
            "Half-width of the range shown, which spans [-stddev, stddev]",
        ))
        .arg(positional("unit", "Unit appended to the axis label"))
        .arg(positional(
            "output",
            "Output image (the extension selects the encoding)",
        ))
}

pub fn get_histogram_app() -> Command<'static> {
    Command::new("vertical_differencing_histogram")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Render an histogram of vertical differences")
        .max_term_width(100)
        .allow_hyphen_values(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(positional(
            "input",
            "Text file with whitespace separated values, or `-` for stdin",
        ))
        .arg(positional(
            "output",
            "Output image (the extension selects the encoding)",
        ))
        .arg(positional(
            "bin-bound",
            "Buckets of width 1 span from -bin-bound to bin-bound",
        ))
        .arg(positional(
            "threshold",
            "Draw reference lines at -threshold and threshold (negative for none)",
        ))
        .arg(positional("unit", "Unit appended to the axis label and title"))
}
