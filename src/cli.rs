//! Plumbing shared by both binaries: argument count check, usage banner,
//! terminal colors and logging.

use std::env;
use std::ffi::OsString;
use std::fmt;

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, LevelPadding, TermLogger, TerminalMode};
use yansi::Color::Yellow;
use yansi::Paint;

/// Positional interface of a binary.
pub struct Usage {
    pub program: &'static str,
    pub synopsis: &'static str,
    pub example: &'static str,
    /// Number of arguments, program name excluded.
    pub arity: usize,
}

pub const COLORBAR_USAGE: Usage = Usage {
    program: "vertical_differencing_colorbar",
    synopsis: "<stddevVal> <unit> <Output-file>",
    example: "4.91 m colorbar.png",
    arity: 3,
};

pub const HISTOGRAM_USAGE: Usage = Usage {
    program: "vertical_differencing_histogram",
    synopsis: "<Input-file> <Output-file> <bin-value> <MLoD> <unit>",
    example: "vertical_differencing_3.xyz histogram.png 10 0.5 m",
    arity: 5,
};

impl Usage {
    /// True if `args` (program name included) carries exactly `arity`
    /// arguments.
    pub fn accepts(&self, args: &[OsString]) -> bool {
        args.len() == self.arity + 1
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n\n{}", Yellow.paint("Missing parameters:"))?;
        writeln!(f, "Usage: {} {}", self.program, self.synopsis)?;
        writeln!(f, "Example: {} {}\n\n", self.program, self.example)
    }
}

/// Returns the process arguments if their count matches `usage`; otherwise
/// prints the usage banner to stdout and exits with status 0.
pub fn args_or_usage(usage: &Usage) -> Vec<OsString> {
    let args: Vec<OsString> = env::args_os().collect();
    if !usage.accepts(&args) {
        print!("{usage}");
        std::process::exit(0);
    }
    args
}

fn color_wanted(stream: atty::Stream) -> bool {
    match env::var("TERM") {
        Ok(value) if value == "dumb" => false,
        _ => atty::is(stream),
    }
}

/// Disables colors on stdout unless it is an interactive terminal.
pub fn disable_color_if_needed() {
    if !color_wanted(atty::Stream::Stdout) {
        Paint::disable();
    }
}

/// Logs `Info` and above: errors to stderr, the rest to stdout.
pub fn init_logger() {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_level_padding(LevelPadding::Off)
        .build();
    let color = if color_wanted(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    if TermLogger::init(LevelFilter::Info, config, TerminalMode::Mixed, color).is_err() {
        eprintln!("Logger already initialized");
    }
}
