//! Placement of replaced content inside its box (`object-fit` / `object-position`).
//!
//! See <https://drafts.csswg.org/css-images/#the-object-fit> and
//! <https://drafts.csswg.org/css-images/#the-object-position>.

use crate::{
    foundation::core::{DevicePixelConverter, DeviceRect, DeviceSize, Rect},
    style::computed::{
        AxisPosition, ImageRendering, ObjectFit, ObjectPosition, PositionEdge,
    },
};

/// A box in CSS pixels together with its rounded device-pixel equivalent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerGeometry {
    /// The box in CSS pixels.
    pub rect: Rect,
    /// `rect` rounded to device pixels.
    pub device_rect: DeviceRect,
    /// Converter used to produce `device_rect`; reused for offsets and sizes.
    pub converter: DevicePixelConverter,
}

impl ContainerGeometry {
    /// Build the geometry for `rect` under `converter`.
    pub fn new(rect: Rect, converter: DevicePixelConverter) -> Self {
        Self {
            rect,
            device_rect: converter.rounded_device_rect(rect),
            converter,
        }
    }
}

/// Resample filter requested from the display list backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ScalingMode {
    /// Source and destination match; copy pixels.
    None,
    /// Nearest neighbor.
    NearestNeighbor,
    /// Nearest neighbor with antialiased pixel edges.
    SmoothPixels,
    /// Bilinear interpolation (upscaling).
    BilinearBlend,
    /// Area averaging (downscaling).
    BoxSampling,
}

/// Pick a scaling mode from `image-rendering` and the source/target rect sizes.
pub fn scaling_mode_for(
    image_rendering: ImageRendering,
    source: DeviceRect,
    target: DeviceRect,
) -> ScalingMode {
    match image_rendering {
        ImageRendering::Auto | ImageRendering::Smooth | ImageRendering::HighQuality => {
            if target.width < source.width || target.height < source.height {
                ScalingMode::BoxSampling
            } else if target.width == source.width && target.height == source.height {
                ScalingMode::None
            } else {
                ScalingMode::BilinearBlend
            }
        }
        ImageRendering::CrispEdges => ScalingMode::NearestNeighbor,
        ImageRendering::Pixelated => ScalingMode::SmoothPixels,
    }
}

/// Vector content is always contain-fitted regardless of style.
pub fn effective_object_fit(style_fit: ObjectFit, forces_contain: bool) -> ObjectFit {
    if forces_contain {
        ObjectFit::Contain
    } else {
        style_fit
    }
}

/// Compute the device-pixel rectangle `content` is drawn into inside `container`.
///
/// Pure: the same inputs always produce the same rect. Degenerate extents never divide by zero;
/// the affected ratio or scale is taken as 0.
pub fn compute_paint_area(
    container: &ContainerGeometry,
    fit: ObjectFit,
    position: ObjectPosition,
    content: DeviceSize,
) -> DeviceRect {
    let box_w = container.rect.width();
    let box_h = container.rect.height();
    let content_w = f64::from(content.width);
    let content_h = f64::from(content.height);

    let fit = match fit {
        ObjectFit::ScaleDown if content_w > box_w || content_h > box_h => ObjectFit::Contain,
        ObjectFit::ScaleDown => ObjectFit::None,
        other => other,
    };

    let content_aspect = fraction(content_h, content_w);
    let box_aspect = fraction(box_h, box_w);

    let (scale_x, scale_y) = match fit {
        ObjectFit::Fill => (fraction(box_w, content_w), fraction(box_h, content_h)),
        ObjectFit::Contain => {
            let s = if content_aspect >= box_aspect {
                fraction(box_h, content_h)
            } else {
                fraction(box_w, content_w)
            };
            (s, s)
        }
        ObjectFit::Cover => {
            let s = if content_aspect >= box_aspect {
                fraction(box_w, content_w)
            } else {
                fraction(box_h, content_h)
            };
            (s, s)
        }
        ObjectFit::None | ObjectFit::ScaleDown => (1.0, 1.0),
    };

    let scaled_w = content_w * scale_x;
    let scaled_h = content_h * scale_y;

    let offset_x = axis_offset(position.x, box_w - scaled_w);
    let offset_y = axis_offset(position.y, box_h - scaled_h);

    let conv = container.converter;
    DeviceRect::new(
        container.device_rect.x + conv.rounded_device_pixels(offset_x),
        container.device_rect.y + conv.rounded_device_pixels(offset_y),
        conv.rounded_device_pixels(scaled_w),
        conv.rounded_device_pixels(scaled_h),
    )
}

/// Offset of the content's start edge from the container's start edge along one axis.
///
/// `Unspecified` is a zero-offset passthrough, not centering.
fn axis_offset(position: AxisPosition, residual: f64) -> f64 {
    match position.edge {
        PositionEdge::Start => position.offset.to_px(residual),
        PositionEdge::End => residual - position.offset.to_px(residual),
        PositionEdge::Unspecified => 0.0,
    }
}

/// `num / den`, or 0 when `den` is zero. Inputs are non-negative extents, so the result is too.
fn fraction(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { (num / den).max(0.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/object_fit.rs"]
mod tests;
