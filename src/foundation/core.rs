pub use kurbo::{Point, Rect, Size};

/// Integral size in device pixels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DeviceSize {
    /// Width in device pixels.
    pub width: u32,
    /// Height in device pixels.
    pub height: u32,
}

impl DeviceSize {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either axis is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle in integral device pixels.
///
/// The origin may be negative (content positioned above/left of the viewport origin).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct DeviceRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width; never negative for rects built by this crate.
    pub width: i32,
    /// Height; never negative for rects built by this crate.
    pub height: i32,
}

impl DeviceRect {
    /// Create a new rect.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect of `size` anchored at the origin.
    pub fn from_size(size: DeviceSize) -> Self {
        Self::new(0, 0, clamp_to_i32(size.width), clamp_to_i32(size.height))
    }

    /// Size with negative extents clamped to zero.
    pub fn size(self) -> DeviceSize {
        DeviceSize::new(self.width.max(0) as u32, self.height.max(0) as u32)
    }

    /// Return `true` when the rect covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

fn clamp_to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Converts CSS-pixel quantities to device pixels for one paint.
///
/// Rounding follows round-to-nearest with halves away from zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DevicePixelConverter {
    device_pixels_per_css_pixel: f64,
}

impl Default for DevicePixelConverter {
    fn default() -> Self {
        Self {
            device_pixels_per_css_pixel: 1.0,
        }
    }
}

impl DevicePixelConverter {
    /// Create a converter; non-finite or non-positive ratios fall back to 1.
    pub fn new(device_pixels_per_css_pixel: f64) -> Self {
        let ratio = if device_pixels_per_css_pixel.is_finite() && device_pixels_per_css_pixel > 0.0
        {
            device_pixels_per_css_pixel
        } else {
            1.0
        };
        Self {
            device_pixels_per_css_pixel: ratio,
        }
    }

    /// Device pixels per CSS pixel.
    pub fn ratio(self) -> f64 {
        self.device_pixels_per_css_pixel
    }

    /// Scale a CSS length into fractional device pixels.
    pub fn to_device(self, css: f64) -> f64 {
        css * self.device_pixels_per_css_pixel
    }

    /// Scale a CSS length and round it to an integral device pixel count.
    pub fn rounded_device_pixels(self, css: f64) -> i32 {
        round_to_i32(self.to_device(css))
    }

    /// Round each edge quantity of `rect` independently.
    pub fn rounded_device_rect(self, rect: Rect) -> DeviceRect {
        DeviceRect::new(
            self.rounded_device_pixels(rect.x0),
            self.rounded_device_pixels(rect.y0),
            self.rounded_device_pixels(rect.width()),
            self.rounded_device_pixels(rect.height()),
        )
    }

    /// Smallest integral rect fully covering `rect`.
    pub fn enclosing_device_rect(self, rect: Rect) -> DeviceRect {
        let x0 = self.to_device(rect.x0).floor();
        let y0 = self.to_device(rect.y0).floor();
        let x1 = self.to_device(rect.x1).ceil();
        let y1 = self.to_device(rect.y1).ceil();
        DeviceRect::new(
            round_to_i32(x0),
            round_to_i32(y0),
            round_to_i32(x1 - x0),
            round_to_i32(y1 - y0),
        )
    }
}

fn round_to_i32(v: f64) -> i32 {
    // `as` saturates and maps NaN to 0.
    v.round() as i32
}

/// Strict overlap test: touching edges and empty rects never intersect.
pub fn rects_intersect(a: Rect, b: Rect) -> bool {
    let a = a.abs();
    let b = b.abs();
    if a.width() <= 0.0 || a.height() <= 0.0 || b.width() <= 0.0 || b.height() <= 0.0 {
        return false;
    }
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
