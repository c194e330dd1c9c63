use std::{
    cell::{Cell, RefCell},
    fmt,
    sync::Arc,
};

use crate::{
    assets::{
        bitmap::{ImmutableBitmap, ResourceId},
        decode::{parse_svg, rasterize_svg},
        provider::{EdgeVisitor, ImageProvider},
    },
    foundation::{
        core::{DeviceSize, Size},
        error::PaintResult,
    },
};

/// SVG content source. Rasterizes at whatever device size painting asks for and keeps the most
/// recent raster.
pub struct VectorImageProvider {
    tree_id: ResourceId,
    tree: Arc<usvg::Tree>,
    cached: RefCell<Option<Arc<ImmutableBitmap>>>,
    visible_in_viewport: Cell<bool>,
}

impl fmt::Debug for VectorImageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VectorImageProvider")
            .field("tree_id", &self.tree_id)
            .field("size", &self.tree.size())
            .field("cached", &self.cached.borrow().as_ref().map(|b| b.size()))
            .field("visible_in_viewport", &self.visible_in_viewport.get())
            .finish()
    }
}

impl VectorImageProvider {
    /// Parse SVG bytes.
    pub fn parse(bytes: &[u8]) -> PaintResult<Self> {
        Ok(Self::from_tree(parse_svg(bytes)?))
    }

    /// Wrap an already-parsed tree.
    pub fn from_tree(tree: usvg::Tree) -> Self {
        Self {
            tree_id: ResourceId::next(),
            tree: Arc::new(tree),
            cached: RefCell::new(None),
            visible_in_viewport: Cell::new(false),
        }
    }

    /// Last visibility hint received.
    pub fn is_visible_in_viewport(&self) -> bool {
        self.visible_in_viewport.get()
    }
}

impl ImageProvider for VectorImageProvider {
    fn is_image_available(&self) -> bool {
        true
    }

    fn intrinsic_size(&self) -> Option<Size> {
        let s = self.tree.size();
        Some(Size::new(f64::from(s.width()), f64::from(s.height())))
    }

    fn current_image_bitmap_sized(&self, size: DeviceSize) -> Option<Arc<ImmutableBitmap>> {
        if size.is_empty() {
            return None;
        }
        if let Some(hit) = self
            .cached
            .borrow()
            .as_ref()
            .filter(|b| b.size() == size)
        {
            return Some(Arc::clone(hit));
        }

        match rasterize_svg(&self.tree, size) {
            Ok(bitmap) => {
                let bitmap = Arc::new(bitmap);
                *self.cached.borrow_mut() = Some(Arc::clone(&bitmap));
                Some(bitmap)
            }
            Err(err) => {
                tracing::warn!(%err, width = size.width, height = size.height, "svg rasterization failed");
                None
            }
        }
    }

    fn set_visible_in_viewport(&self, visible: bool) {
        self.visible_in_viewport.set(visible);
    }

    fn visit_provider_edges(&self, visitor: &mut dyn EdgeVisitor) {
        visitor.visit_edge(self.tree_id);
        if let Some(bitmap) = self.cached.borrow().as_ref() {
            visitor.visit_edge(bitmap.id());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/vector.rs"]
mod tests;
