use std::sync::Arc;

use crate::{
    assets::{
        bitmap::{ImmutableBitmap, ResourceId},
        decode::decode_raster,
        raster::RasterImageProvider,
        vector::VectorImageProvider,
    },
    foundation::{
        core::{DeviceSize, Size},
        error::PaintResult,
    },
};

/// Receives the resources a traced object keeps reachable.
///
/// Implementations must not call back into the object being traced.
pub trait EdgeVisitor {
    /// Report one reachable resource.
    fn visit_edge(&mut self, id: ResourceId);
}

/// [`EdgeVisitor`] that records every reported edge in order.
#[derive(Clone, Debug, Default)]
pub struct EdgeCollector {
    edges: Vec<ResourceId>,
}

impl EdgeCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Edges reported so far.
    pub fn edges(&self) -> &[ResourceId] {
        &self.edges
    }

    /// Consume the collector.
    pub fn into_edges(self) -> Vec<ResourceId> {
        self.edges
    }
}

impl EdgeVisitor for EdgeCollector {
    fn visit_edge(&mut self, id: ResourceId) {
        self.edges.push(id);
    }
}

/// Capability a replaced element's content source exposes to painting.
///
/// Providers are shared between the layout tree and paint nodes, so every method takes `&self`;
/// state changes go through interior mutability on a single thread.
pub trait ImageProvider {
    /// Whether decoded, displayable content exists right now.
    fn is_image_available(&self) -> bool;

    /// Natural size in CSS pixels, if known.
    fn intrinsic_size(&self) -> Option<Size>;

    /// A bitmap suitable for drawing at `size` device pixels; `None` while undecoded.
    /// Must not block.
    fn current_image_bitmap_sized(&self, size: DeviceSize) -> Option<Arc<ImmutableBitmap>>;

    /// Hint that the content intersects (or left) the viewport.
    fn set_visible_in_viewport(&self, visible: bool);

    /// Report every resource this provider keeps alive.
    fn visit_provider_edges(&self, visitor: &mut dyn EdgeVisitor);
}

/// The built-in content sources.
#[derive(Debug)]
pub enum ImageContent {
    /// Raster image, possibly animated.
    Raster(RasterImageProvider),
    /// SVG document rasterized on demand.
    Vector(VectorImageProvider),
}

impl ImageContent {
    /// Sniff `bytes`: known raster signatures decode as raster, anything else is parsed as SVG.
    pub fn decode(bytes: &[u8]) -> PaintResult<Self> {
        if image::guess_format(bytes).is_ok() {
            let frames = decode_raster(bytes)?;
            return Ok(Self::Raster(RasterImageProvider::from_frames(frames)));
        }
        Ok(Self::Vector(VectorImageProvider::parse(bytes)?))
    }

    /// Return `true` for SVG content.
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Vector(_))
    }

    fn provider(&self) -> &dyn ImageProvider {
        match self {
            Self::Raster(p) => p,
            Self::Vector(p) => p,
        }
    }
}

impl ImageProvider for ImageContent {
    fn is_image_available(&self) -> bool {
        self.provider().is_image_available()
    }

    fn intrinsic_size(&self) -> Option<Size> {
        self.provider().intrinsic_size()
    }

    fn current_image_bitmap_sized(&self, size: DeviceSize) -> Option<Arc<ImmutableBitmap>> {
        self.provider().current_image_bitmap_sized(size)
    }

    fn set_visible_in_viewport(&self, visible: bool) {
        self.provider().set_visible_in_viewport(visible);
    }

    fn visit_provider_edges(&self, visitor: &mut dyn EdgeVisitor) {
        self.provider().visit_provider_edges(visitor);
    }
}

impl From<RasterImageProvider> for ImageContent {
    fn from(value: RasterImageProvider) -> Self {
        Self::Raster(value)
    }
}

impl From<VectorImageProvider> for ImageContent {
    fn from(value: VectorImageProvider) -> Self {
        Self::Vector(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/provider.rs"]
mod tests;
