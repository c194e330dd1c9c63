use std::{
    cell::{Cell, RefCell},
    sync::Arc,
};

use crate::{
    assets::{
        bitmap::ImmutableBitmap,
        decode::{AnimationFrame, decode_raster},
        provider::{EdgeVisitor, ImageProvider},
    },
    foundation::{
        core::{DeviceSize, Size},
        error::PaintResult,
    },
};

/// Frame delays at or below this are treated as [`DEFAULT_FRAME_DURATION_MS`], as browsers do.
const MIN_FRAME_DURATION_MS: u32 = 10;
const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// Raster content source. Starts pending or decoded; animated content only advances while
/// visible in the viewport.
#[derive(Debug, Default)]
pub struct RasterImageProvider {
    frames: RefCell<Vec<AnimationFrame>>,
    current_frame: Cell<usize>,
    elapsed_in_frame_ms: Cell<u64>,
    visible_in_viewport: Cell<bool>,
}

impl RasterImageProvider {
    /// Provider whose content has not been decoded yet.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Provider over already-decoded frames.
    pub fn from_frames(frames: Vec<AnimationFrame>) -> Self {
        let p = Self::default();
        p.set_decoded(frames);
        p
    }

    /// Provider over one still bitmap.
    pub fn from_bitmap(bitmap: Arc<ImmutableBitmap>) -> Self {
        Self::from_frames(vec![AnimationFrame::still(bitmap)])
    }

    /// Decode encoded bytes (PNG, JPEG, GIF, ...).
    pub fn decode(bytes: &[u8]) -> PaintResult<Self> {
        Ok(Self::from_frames(decode_raster(bytes)?))
    }

    /// Install decoded frames, restarting any animation.
    pub fn set_decoded(&self, frames: Vec<AnimationFrame>) {
        tracing::debug!(frames = frames.len(), "raster content decoded");
        *self.frames.borrow_mut() = frames;
        self.current_frame.set(0);
        self.elapsed_in_frame_ms.set(0);
    }

    /// Number of decoded frames.
    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Return `true` for multi-frame content.
    pub fn is_animated(&self) -> bool {
        self.frame_count() > 1
    }

    /// Index of the frame currently displayed.
    pub fn current_frame_index(&self) -> usize {
        self.current_frame.get()
    }

    /// Last visibility hint received.
    pub fn is_visible_in_viewport(&self) -> bool {
        self.visible_in_viewport.get()
    }

    /// Advance the animation clock by `elapsed_ms`. Returns `true` when the displayed frame
    /// changed. Offscreen or still content never advances.
    pub fn advance_animation(&self, elapsed_ms: u64) -> bool {
        if !self.visible_in_viewport.get() || !self.is_animated() {
            return false;
        }

        let frames = self.frames.borrow();
        let durations: Vec<u64> = frames
            .iter()
            .map(|f| u64::from(effective_duration_ms(f.duration_ms)))
            .collect();
        let cycle: u64 = durations.iter().sum();

        let start = self.current_frame.get();
        let mut idx = start;
        let mut t = self.elapsed_in_frame_ms.get() + elapsed_ms % cycle;
        while t >= durations[idx] {
            t -= durations[idx];
            idx = (idx + 1) % durations.len();
        }

        self.current_frame.set(idx);
        self.elapsed_in_frame_ms.set(t);
        idx != start
    }
}

fn effective_duration_ms(duration_ms: u32) -> u32 {
    if duration_ms <= MIN_FRAME_DURATION_MS {
        DEFAULT_FRAME_DURATION_MS
    } else {
        duration_ms
    }
}

impl ImageProvider for RasterImageProvider {
    fn is_image_available(&self) -> bool {
        !self.frames.borrow().is_empty()
    }

    fn intrinsic_size(&self) -> Option<Size> {
        self.frames
            .borrow()
            .first()
            .map(|f| Size::new(f64::from(f.bitmap.width()), f64::from(f.bitmap.height())))
    }

    fn current_image_bitmap_sized(&self, _size: DeviceSize) -> Option<Arc<ImmutableBitmap>> {
        self.frames
            .borrow()
            .get(self.current_frame.get())
            .map(|f| Arc::clone(&f.bitmap))
    }

    fn set_visible_in_viewport(&self, visible: bool) {
        self.visible_in_viewport.set(visible);
    }

    fn visit_provider_edges(&self, visitor: &mut dyn EdgeVisitor) {
        for frame in self.frames.borrow().iter() {
            visitor.visit_edge(frame.bitmap.id());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
