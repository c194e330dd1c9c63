//! Painting of replaced content (raster and SVG images) inside browser-style layout boxes.
//!
//! The crate covers two concerns:
//!
//! - [`compute_paint_area`]: where content of a given intrinsic size lands inside its box under
//!   CSS `object-fit` / `object-position`, in device pixels.
//! - [`PaintNode`]: the per-element paint-tree entity. It emits display-list commands for each
//!   [`PaintPhase`], falls back to alt text, reports provider-held resources through
//!   [`PaintNode::visit_edges`], and forwards viewport visibility to its [`ImageProvider`].
//!
//! Painting is infallible; only decoding content and loading [`PaintSettings`] return
//! [`PaintResult`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod geometry;
mod paint;
mod style;
mod viewport;

pub use crate::assets::bitmap::{ImmutableBitmap, ResourceId};
pub use crate::assets::decode::{
    AnimationFrame, MAX_VECTOR_RASTER_DIM, decode_raster, parse_svg, rasterize_svg,
};
pub use crate::assets::provider::{EdgeCollector, EdgeVisitor, ImageContent, ImageProvider};
pub use crate::assets::raster::RasterImageProvider;
pub use crate::assets::vector::VectorImageProvider;
pub use crate::foundation::core::{
    DevicePixelConverter, DeviceRect, DeviceSize, Point, Rect, Rgba8, Size, rects_intersect,
};
pub use crate::foundation::error::{PaintError, PaintResult};
pub use crate::geometry::object_fit::{
    ContainerGeometry, ScalingMode, compute_paint_area, effective_object_fit, scaling_mode_for,
};
pub use crate::geometry::radii::{
    CornerRadiusPx, DeviceCornerRadii, DeviceCornerRadius, NormalizedRadii, ShrinkRadiiForBorders,
};
pub use crate::paint::context::PaintContext;
pub use crate::paint::corner_clip::ScopedCornerRadiusClip;
pub use crate::paint::display_list::{
    DisplayCommand, DisplayList, DisplayListRecorder, FontSpec, TextAlignment,
};
pub use crate::paint::node::{BoxPainter, PaintNode, PaintPhase, ReplacedBox};
pub use crate::paint::settings::PaintSettings;
pub use crate::style::computed::{
    AxisPosition, BorderRadii, BorderWidths, ComputedValues, CornerRadius, ImageRendering,
    LengthPercentage, ObjectFit, ObjectPosition, PositionEdge,
};
pub use crate::viewport::registry::{
    ClientId, ViewportClient, ViewportRegistry, ViewportSubscription,
};
