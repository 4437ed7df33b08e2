pub use self::samples::{SampleReader, SampleReaderBuilder, NO_DATA_BOUND};

mod samples;

use std::fs::File;
use std::io::{self, BufReader};

use crate::error::{Error, Result};

/// Return io::BufRead from a path, falling back to using stdin if path is "-".
fn open_file(path: &str) -> Result<Box<dyn io::BufRead>> {
    match path {
        "-" => Ok(Box::new(BufReader::new(io::stdin()))),
        _ => match File::open(path) {
            Ok(fd) => Ok(Box::new(io::BufReader::new(fd))),
            Err(source) => Err(Error::Open {
                path: path.to_owned(),
                source,
            }),
        },
    }
}
