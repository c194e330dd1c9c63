pub(crate) mod bitmap;
pub(crate) mod decode;
pub(crate) mod provider;
pub(crate) mod raster;
pub(crate) mod vector;
