pub mod loader;
pub mod measure;
pub mod raster;
