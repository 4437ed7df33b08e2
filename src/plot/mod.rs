pub use self::colorbar::{Colorbar, ColorbarOptions, ColorbarOptionsBuilder};
pub use self::colormap::{Colormap, Normalize};
pub use self::histogram::{Histogram, HistogramOptions, HistogramOptionsBuilder};

mod colorbar;
mod colormap;
mod histogram;
