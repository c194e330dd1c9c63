use std::sync::Arc;

use crate::{
    assets::bitmap::ImmutableBitmap,
    foundation::core::{DeviceRect, Rgba8},
    geometry::{object_fit::ScalingMode, radii::DeviceCornerRadii},
};

/// Horizontal placement of text inside its rect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlignment {
    /// Left edge.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Right edge.
    End,
}

/// Font selection for recorded text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FontSpec {
    /// Family name, resolved by the display-list consumer.
    pub family: String,
    /// Size in device pixels.
    pub size_px: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_owned(),
            size_px: 12.0,
        }
    }
}

/// Sink for drawing commands emitted during painting.
///
/// Save/restore calls are always balanced by the painter.
pub trait DisplayListRecorder {
    /// Stroke or fill marker for `rect` in `color`.
    fn draw_rect(&mut self, rect: DeviceRect, color: Rgba8);
    /// Draw `text` laid out inside `rect`.
    fn draw_text(
        &mut self,
        rect: DeviceRect,
        text: &str,
        font: &FontSpec,
        alignment: TextAlignment,
        color: Rgba8,
    );
    /// Draw `bitmap` scaled into `dst`, clipped to `clip`.
    fn draw_scaled_immutable_bitmap(
        &mut self,
        dst: DeviceRect,
        clip: DeviceRect,
        bitmap: Arc<ImmutableBitmap>,
        scaling_mode: ScalingMode,
    );
    /// Push the clip state.
    fn save(&mut self);
    /// Intersect the clip with a rounded rect.
    fn add_rounded_rect_clip(&mut self, rect: DeviceRect, radii: DeviceCornerRadii);
    /// Pop the clip state.
    fn restore(&mut self);
}

/// One recorded drawing command.
#[derive(Clone, Debug)]
pub enum DisplayCommand {
    /// See [`DisplayListRecorder::draw_rect`].
    DrawRect {
        /// Target rect.
        rect: DeviceRect,
        /// Color.
        color: Rgba8,
    },
    /// See [`DisplayListRecorder::draw_text`].
    DrawText {
        /// Layout rect.
        rect: DeviceRect,
        /// Text content.
        text: String,
        /// Font.
        font: FontSpec,
        /// Alignment.
        alignment: TextAlignment,
        /// Color.
        color: Rgba8,
    },
    /// See [`DisplayListRecorder::draw_scaled_immutable_bitmap`].
    DrawScaledImmutableBitmap {
        /// Destination rect.
        dst: DeviceRect,
        /// Clip rect.
        clip: DeviceRect,
        /// Bitmap.
        bitmap: Arc<ImmutableBitmap>,
        /// Resampling filter.
        scaling_mode: ScalingMode,
    },
    /// See [`DisplayListRecorder::save`].
    Save,
    /// See [`DisplayListRecorder::add_rounded_rect_clip`].
    AddRoundedRectClip {
        /// Clip rect.
        rect: DeviceRect,
        /// Corner radii.
        radii: DeviceCornerRadii,
    },
    /// See [`DisplayListRecorder::restore`].
    Restore,
}

/// In-memory recorder for hosts and tests.
#[derive(Debug, Default)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the recorded commands.
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Return `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DisplayListRecorder for DisplayList {
    fn draw_rect(&mut self, rect: DeviceRect, color: Rgba8) {
        self.commands.push(DisplayCommand::DrawRect { rect, color });
    }

    fn draw_text(
        &mut self,
        rect: DeviceRect,
        text: &str,
        font: &FontSpec,
        alignment: TextAlignment,
        color: Rgba8,
    ) {
        self.commands.push(DisplayCommand::DrawText {
            rect,
            text: text.to_owned(),
            font: font.clone(),
            alignment,
            color,
        });
    }

    fn draw_scaled_immutable_bitmap(
        &mut self,
        dst: DeviceRect,
        clip: DeviceRect,
        bitmap: Arc<ImmutableBitmap>,
        scaling_mode: ScalingMode,
    ) {
        self.commands.push(DisplayCommand::DrawScaledImmutableBitmap {
            dst,
            clip,
            bitmap,
            scaling_mode,
        });
    }

    fn save(&mut self) {
        self.commands.push(DisplayCommand::Save);
    }

    fn add_rounded_rect_clip(&mut self, rect: DeviceRect, radii: DeviceCornerRadii) {
        self.commands
            .push(DisplayCommand::AddRoundedRectClip { rect, radii });
    }

    fn restore(&mut self) {
        self.commands.push(DisplayCommand::Restore);
    }
}
