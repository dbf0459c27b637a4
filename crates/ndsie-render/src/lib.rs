pub mod raster;

pub use crate::raster::{rasterize, IconRaster, RasterError, MAX_SCALE, MIN_SCALE};
