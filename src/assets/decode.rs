use std::{io::Cursor, sync::Arc};

use anyhow::Context;
use image::AnimationDecoder;

use crate::{
    assets::bitmap::ImmutableBitmap,
    foundation::{
        core::DeviceSize,
        error::{PaintError, PaintResult},
    },
};

/// Largest raster edge produced for vector content.
pub const MAX_VECTOR_RASTER_DIM: u32 = 16_384;

/// One frame of a (possibly animated) raster image.
#[derive(Clone, Debug)]
pub struct AnimationFrame {
    /// Frame pixels.
    pub bitmap: Arc<ImmutableBitmap>,
    /// Display duration in milliseconds; 0 for still images.
    pub duration_ms: u32,
}

impl AnimationFrame {
    /// A single still frame.
    pub fn still(bitmap: Arc<ImmutableBitmap>) -> Self {
        Self {
            bitmap,
            duration_ms: 0,
        }
    }
}

/// Decode raster bytes into frames. GIFs yield every animation frame, other formats one frame.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_raster(bytes: &[u8]) -> PaintResult<Vec<AnimationFrame>> {
    let format = image::guess_format(bytes).context("guess image format")?;

    if format == image::ImageFormat::Gif {
        let decoder =
            image::codecs::gif::GifDecoder::new(Cursor::new(bytes)).context("open gif decoder")?;
        let frames = decoder
            .into_frames()
            .collect_frames()
            .context("decode gif frames")?;
        if frames.is_empty() {
            return Err(PaintError::decode("gif contains no frames"));
        }
        tracing::debug!(frames = frames.len(), "decoded animated gif");
        return Ok(frames
            .into_iter()
            .map(|frame| {
                let (num, den) = frame.delay().numer_denom_ms();
                let duration_ms = if den == 0 { 0 } else { num / den };
                AnimationFrame {
                    bitmap: Arc::new(ImmutableBitmap::from_straight_rgba(frame.into_buffer())),
                    duration_ms,
                }
            })
            .collect());
    }

    let dyn_img = image::load_from_memory_with_format(bytes, format)
        .context("decode image from memory")?;
    Ok(vec![AnimationFrame::still(Arc::new(
        ImmutableBitmap::from_straight_rgba(dyn_img.to_rgba8()),
    ))])
}

/// Parse SVG bytes into a render tree.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn parse_svg(bytes: &[u8]) -> PaintResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize `tree` into a `size` pixmap, uniformly scaled and centered. Uncovered pixels stay
/// transparent.
pub fn rasterize_svg(tree: &usvg::Tree, size: DeviceSize) -> PaintResult<ImmutableBitmap> {
    if size.is_empty() {
        return Err(PaintError::validation("svg raster size must be non-empty"));
    }
    if size.width > MAX_VECTOR_RASTER_DIM || size.height > MAX_VECTOR_RASTER_DIM {
        return Err(PaintError::validation(format!(
            "svg raster size too large: {}x{} (max {MAX_VECTOR_RASTER_DIM}x{MAX_VECTOR_RASTER_DIM})",
            size.width, size.height
        )));
    }

    let tree_size = tree.size();
    if !(tree_size.width() > 0.0 && tree_size.height() > 0.0) {
        return Err(PaintError::decode("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width, size.height)
        .ok_or_else(|| PaintError::decode("failed to allocate svg pixmap"))?;

    // Fit the document inside the pixmap, keeping its aspect ratio (xMidYMid meet).
    let (w, h) = (size.width as f32, size.height as f32);
    let scale = (w / tree_size.width()).min(h / tree_size.height());
    let tx = (w - tree_size.width() * scale) / 2.0;
    let ty = (h - tree_size.height() * scale) / 2.0;
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty),
        &mut pixmap.as_mut(),
    );

    ImmutableBitmap::from_rgba8_premul(size.width, size.height, pixmap.take())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
