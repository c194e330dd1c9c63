use crate::{
    foundation::core::{DevicePixelConverter, DeviceRect, Rect},
    paint::{display_list::DisplayListRecorder, node::BoxPainter, settings::PaintSettings},
};

/// Everything one paint pass needs: the command sink, CSS-to-device conversion, host settings
/// and the painter for the box's own background, border and outline.
pub struct PaintContext<'a> {
    recorder: &'a mut dyn DisplayListRecorder,
    converter: DevicePixelConverter,
    settings: &'a PaintSettings,
    box_painter: Option<&'a dyn BoxPainter>,
}

impl<'a> PaintContext<'a> {
    /// Create a context without a box painter.
    pub fn new(
        recorder: &'a mut dyn DisplayListRecorder,
        converter: DevicePixelConverter,
        settings: &'a PaintSettings,
    ) -> Self {
        Self {
            recorder,
            converter,
            settings,
            box_painter: None,
        }
    }

    /// Delegate non-content painting to `painter`.
    pub fn with_box_painter(mut self, painter: &'a dyn BoxPainter) -> Self {
        self.box_painter = Some(painter);
        self
    }

    /// The recorder receiving commands.
    pub fn recorder(&mut self) -> &mut dyn DisplayListRecorder {
        &mut *self.recorder
    }

    /// CSS-to-device conversion for this pass.
    pub fn converter(&self) -> DevicePixelConverter {
        self.converter
    }

    /// Host settings.
    pub fn settings(&self) -> &'a PaintSettings {
        self.settings
    }

    /// Box painter, if any.
    pub fn box_painter(&self) -> Option<&'a dyn BoxPainter> {
        self.box_painter
    }

    /// `rect` with each edge rounded to device pixels.
    pub fn rounded_device_rect(&self, rect: Rect) -> DeviceRect {
        self.converter.rounded_device_rect(rect)
    }

    /// Smallest device rect covering `rect`.
    pub fn enclosing_device_rect(&self, rect: Rect) -> DeviceRect {
        self.converter.enclosing_device_rect(rect)
    }
}
