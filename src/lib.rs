//! # Getting Started
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! vdcharts = "*"
//! ```
//!
//! ```rust,no_run
//! use vdcharts::plot::{Histogram, HistogramOptionsBuilder};
//! use vdcharts::read::SampleReader;
//!
//! // Load vertical differences, discarding the no-data sentinels
//! let samples = SampleReader::default().read("vertical_differencing.xyz").unwrap();
//! let options = HistogramOptionsBuilder::default()
//!     .bin_bound(10)
//!     .threshold(0.5)
//!     .unit("m")
//!     .build()
//!     .unwrap();
//! let histogram = Histogram::new(&samples, options).unwrap();
//! histogram.render("histogram.png").unwrap();
//! ```

#[macro_use]
extern crate derive_builder;
#[macro_use]
extern crate log;

pub mod app;
pub mod cli;
mod error;
pub mod format;
pub mod plot;
pub mod read;
pub mod stats;

pub use self::error::{Error, Result};
