use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crate::foundation::{
    core::{DeviceRect, DeviceSize},
    error::{PaintError, PaintResult},
};

static NEXT_RESOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a provider-held resource, as reported during edge visits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub u64);

impl ResourceId {
    pub(crate) fn next() -> Self {
        Self(NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Decoded pixels in premultiplied RGBA8, never mutated after creation.
#[derive(Clone, Debug)]
pub struct ImmutableBitmap {
    id: ResourceId,
    width: u32,
    height: u32,
    rgba8_premul: Arc<Vec<u8>>,
}

impl ImmutableBitmap {
    /// Wrap premultiplied RGBA8 bytes; the buffer must be exactly `width * height * 4` bytes.
    pub fn from_rgba8_premul(width: u32, height: u32, data: Vec<u8>) -> PaintResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| PaintError::validation("bitmap dimensions overflow"))?;
        if data.len() != expected {
            return Err(PaintError::validation(format!(
                "bitmap buffer is {} bytes, expected {expected} for {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            id: ResourceId::next(),
            width,
            height,
            rgba8_premul: Arc::new(data),
        })
    }

    /// Premultiply a straight-alpha image.
    pub fn from_straight_rgba(image: image::RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let mut data = image.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self {
            id: ResourceId::next(),
            width,
            height,
            rgba8_premul: Arc::new(data),
        }
    }

    /// Resource identity used for reachability reporting.
    pub fn id(&self) -> ResourceId {
        self.id
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Natural size.
    pub fn size(&self) -> DeviceSize {
        DeviceSize::new(self.width, self.height)
    }

    /// `(0, 0, width, height)`.
    pub fn rect(&self) -> DeviceRect {
        DeviceRect::from_size(self.size())
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        self.rgba8_premul.as_slice()
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/bitmap.rs"]
mod tests;
