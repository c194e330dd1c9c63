use crate::{
    foundation::core::{DevicePixelConverter, Rect},
    style::computed::{BorderRadii, BorderWidths, CornerRadius},
};

/// Whether radii are reduced by the adjacent border widths (inner border edge).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShrinkRadiiForBorders {
    /// Clip to the padding edge.
    Yes,
    /// Clip to the border edge.
    No,
}

/// One corner's radii in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadiusPx {
    /// Horizontal radius.
    pub horizontal: f64,
    /// Vertical radius.
    pub vertical: f64,
}

impl CornerRadiusPx {
    fn resolve(corner: CornerRadius, rect: Rect) -> Self {
        Self {
            horizontal: corner.horizontal.to_px(rect.width()).max(0.0),
            vertical: corner.vertical.to_px(rect.height()).max(0.0),
        }
    }

    fn scaled(self, f: f64) -> Self {
        Self {
            horizontal: self.horizontal * f,
            vertical: self.vertical * f,
        }
    }

    fn shrunk(self, horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal: (self.horizontal - horizontal).max(0.0),
            vertical: (self.vertical - vertical).max(0.0),
        }
    }

    /// A corner is rounded only when both radii are positive.
    pub fn is_rounded(self) -> bool {
        self.horizontal > 0.0 && self.vertical > 0.0
    }
}

/// One corner's radii in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeviceCornerRadius {
    /// Horizontal radius.
    pub horizontal: i32,
    /// Vertical radius.
    pub vertical: i32,
}

/// Four device-pixel corner radii, as consumed by rounded-rect clips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeviceCornerRadii {
    /// Top-left corner.
    pub top_left: DeviceCornerRadius,
    /// Top-right corner.
    pub top_right: DeviceCornerRadius,
    /// Bottom-right corner.
    pub bottom_right: DeviceCornerRadius,
    /// Bottom-left corner.
    pub bottom_left: DeviceCornerRadius,
}

/// Border radii after overlap scaling, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedRadii {
    /// Top-left corner.
    pub top_left: CornerRadiusPx,
    /// Top-right corner.
    pub top_right: CornerRadiusPx,
    /// Bottom-right corner.
    pub bottom_right: CornerRadiusPx,
    /// Bottom-left corner.
    pub bottom_left: CornerRadiusPx,
}

impl NormalizedRadii {
    /// Resolve `radii` against `rect` and scale them down so adjacent radii never overlap
    /// (<https://drafts.csswg.org/css-backgrounds/#corner-overlap>).
    pub fn from_style(
        radii: &BorderRadii,
        rect: Rect,
        widths: &BorderWidths,
        shrink: ShrinkRadiiForBorders,
    ) -> Self {
        let tl = CornerRadiusPx::resolve(radii.top_left, rect);
        let tr = CornerRadiusPx::resolve(radii.top_right, rect);
        let br = CornerRadiusPx::resolve(radii.bottom_right, rect);
        let bl = CornerRadiusPx::resolve(radii.bottom_left, rect);

        let w = rect.width().max(0.0);
        let h = rect.height().max(0.0);
        let mut f = 1.0f64;
        for (side, sum) in [
            (w, tl.horizontal + tr.horizontal),
            (h, tr.vertical + br.vertical),
            (w, bl.horizontal + br.horizontal),
            (h, tl.vertical + bl.vertical),
        ] {
            if sum > side && sum > 0.0 {
                f = f.min(side / sum);
            }
        }

        let mut out = Self {
            top_left: tl.scaled(f),
            top_right: tr.scaled(f),
            bottom_right: br.scaled(f),
            bottom_left: bl.scaled(f),
        };

        if shrink == ShrinkRadiiForBorders::Yes {
            out.top_left = out.top_left.shrunk(widths.left, widths.top);
            out.top_right = out.top_right.shrunk(widths.right, widths.top);
            out.bottom_right = out.bottom_right.shrunk(widths.right, widths.bottom);
            out.bottom_left = out.bottom_left.shrunk(widths.left, widths.bottom);
        }
        out
    }

    /// Return `true` when any corner is rounded.
    pub fn has_any_radius(&self) -> bool {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
        .into_iter()
        .any(CornerRadiusPx::is_rounded)
    }

    /// Round every radius to device pixels.
    pub fn to_device(&self, conv: DevicePixelConverter) -> DeviceCornerRadii {
        let corner = |c: CornerRadiusPx| DeviceCornerRadius {
            horizontal: conv.rounded_device_pixels(c.horizontal),
            vertical: conv.rounded_device_pixels(c.vertical),
        };
        DeviceCornerRadii {
            top_left: corner(self.top_left),
            top_right: corner(self.top_right),
            bottom_right: corner(self.bottom_right),
            bottom_left: corner(self.bottom_left),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/radii.rs"]
mod tests;
