//! Rasterization of scenes (CPU, `vello_cpu`).

pub(crate) mod cpu;
pub(crate) mod geometry;
pub(crate) mod raster;
pub(crate) mod style;
