use std::io::BufRead;

use crate::error::{Error, Result};
use crate::read::open_file;

/// Magnitude at and beyond which values are no-data sentinels.
pub const NO_DATA_BOUND: f64 = 9000.0;

/// Reads whitespace separated numbers from a text file, keeping only values
/// strictly inside the `(lower, upper)` band.
#[derive(Debug, Clone, Builder)]
pub struct SampleReader {
    #[builder(default = "-NO_DATA_BOUND")]
    lower: f64,
    #[builder(default = "NO_DATA_BOUND")]
    upper: f64,
    #[builder(default = "'#'")]
    comment: char,
}

impl Default for SampleReader {
    fn default() -> Self {
        Self {
            lower: -NO_DATA_BOUND,
            upper: NO_DATA_BOUND,
            comment: '#',
        }
    }
}

impl SampleReader {
    /// Loads and filters every number in `path` ("-" for stdin).
    pub fn read(&self, path: &str) -> Result<Vec<f64>> {
        let values = self.load(open_file(path)?, path)?;
        let total = values.len();
        let kept: Vec<f64> = values.into_iter().filter(|n| self.accepts(*n)).collect();
        if kept.len() < total {
            info!(
                "Discarded {} of {} values outside ({}, {})",
                total - kept.len(),
                total,
                self.lower,
                self.upper
            );
        }
        Ok(kept)
    }

    /// True if `n` lies strictly inside the band. NaN never does.
    pub fn accepts(&self, n: f64) -> bool {
        self.lower < n && n < self.upper
    }

    /// Reads every numeric token, flattening all columns in file order.
    fn load(&self, reader: Box<dyn BufRead>, path: &str) -> Result<Vec<f64>> {
        let mut vec: Vec<f64> = Vec::new();
        let mut columns: Option<usize> = None;
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| Error::Read {
                path: path.to_owned(),
                source,
            })?;
            let data = match line.find(self.comment) {
                Some(position) => &line[..position],
                None => &line[..],
            };
            let before = vec.len();
            for token in data.split_whitespace() {
                vec.push(Self::parse_float(token, index + 1)?);
            }
            let found = vec.len() - before;
            if found == 0 {
                continue;
            }
            match columns {
                None => columns = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::Columns {
                        line: index + 1,
                        expected,
                        found,
                    });
                }
                _ => (),
            }
        }
        if vec.is_empty() {
            warn!("No data in {}", path);
        }
        Ok(vec)
    }

    fn parse_float(token: &str, line: usize) -> Result<f64> {
        match token.parse::<f64>() {
            Ok(n) => Ok(n),
            Err(parse_error) => {
                debug!("Cannot parse float ({}) at '{}'", parse_error, token);
                Err(Error::Parse {
                    line,
                    token: token.to_owned(),
                })
            }
        }
    }
}
