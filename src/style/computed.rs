use crate::foundation::core::Rgba8;

/// Computed `object-fit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Stretch to the container on each axis independently.
    #[default]
    Fill,
    /// Scale uniformly so the content fits inside the container.
    Contain,
    /// Scale uniformly so the content covers the container.
    Cover,
    /// Keep the intrinsic size.
    None,
    /// `Contain` when the content overflows the container, otherwise `None`.
    ScaleDown,
}

/// Edge an `object-position` offset is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionEdge {
    /// Left or top.
    #[default]
    Start,
    /// Right or bottom.
    End,
    /// No edge resolved upstream; offset is ignored.
    Unspecified,
}

/// A length in CSS pixels or a fraction of a reference length.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LengthPercentage {
    /// Absolute CSS pixels.
    Px(f64),
    /// Fraction of the reference length, `0.5` meaning 50%.
    Percent(f64),
}

impl Default for LengthPercentage {
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl LengthPercentage {
    /// Resolve against `reference` (which may be negative for overflowing content).
    pub fn to_px(self, reference: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(fraction) => reference * fraction,
        }
    }
}

/// One axis of `object-position`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisPosition {
    /// Edge the offset is measured from.
    pub edge: PositionEdge,
    /// Offset from that edge.
    pub offset: LengthPercentage,
}

impl AxisPosition {
    /// Offset measured from the start edge.
    pub fn start(offset: LengthPercentage) -> Self {
        Self {
            edge: PositionEdge::Start,
            offset,
        }
    }

    /// Offset measured from the end edge.
    pub fn end(offset: LengthPercentage) -> Self {
        Self {
            edge: PositionEdge::End,
            offset,
        }
    }

    /// No edge; resolves to a zero offset.
    pub fn unspecified() -> Self {
        Self {
            edge: PositionEdge::Unspecified,
            offset: LengthPercentage::default(),
        }
    }
}

impl Default for AxisPosition {
    fn default() -> Self {
        Self::start(LengthPercentage::Percent(0.5))
    }
}

/// Computed `object-position`; the initial value is `50% 50%` from the start edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObjectPosition {
    /// Horizontal component.
    #[serde(default)]
    pub x: AxisPosition,
    /// Vertical component.
    #[serde(default)]
    pub y: AxisPosition,
}

/// Computed `image-rendering`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageRendering {
    /// UA default (smooth).
    #[default]
    Auto,
    /// Smooth scaling.
    Smooth,
    /// Prefer quality over speed.
    HighQuality,
    /// Preserve hard edges.
    CrispEdges,
    /// Nearest-neighbor look when upscaling.
    Pixelated,
}

/// Horizontal and vertical radius of one corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CornerRadius {
    /// Horizontal radius; percentages refer to the box width.
    #[serde(default)]
    pub horizontal: LengthPercentage,
    /// Vertical radius; percentages refer to the box height.
    #[serde(default)]
    pub vertical: LengthPercentage,
}

impl CornerRadius {
    /// Circular corner with the same radius on both axes.
    pub fn circular(radius: LengthPercentage) -> Self {
        Self {
            horizontal: radius,
            vertical: radius,
        }
    }
}

/// Computed `border-*-radius` for the four corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BorderRadii {
    /// Top-left corner.
    #[serde(default)]
    pub top_left: CornerRadius,
    /// Top-right corner.
    #[serde(default)]
    pub top_right: CornerRadius,
    /// Bottom-right corner.
    #[serde(default)]
    pub bottom_right: CornerRadius,
    /// Bottom-left corner.
    #[serde(default)]
    pub bottom_left: CornerRadius,
}

impl BorderRadii {
    /// Same radius on all four corners.
    pub fn uniform(radius: LengthPercentage) -> Self {
        let corner = CornerRadius::circular(radius);
        Self {
            top_left: corner,
            top_right: corner,
            bottom_right: corner,
            bottom_left: corner,
        }
    }
}

/// Used border widths in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BorderWidths {
    /// Top border.
    #[serde(default)]
    pub top: f64,
    /// Right border.
    #[serde(default)]
    pub right: f64,
    /// Bottom border.
    #[serde(default)]
    pub bottom: f64,
    /// Left border.
    #[serde(default)]
    pub left: f64,
}

impl BorderWidths {
    /// Same width on every side.
    pub fn uniform(width: f64) -> Self {
        Self {
            top: width,
            right: width,
            bottom: width,
            left: width,
        }
    }
}

/// The subset of computed style a replaced element's painting reads.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComputedValues {
    /// `object-fit`.
    #[serde(default)]
    pub object_fit: ObjectFit,
    /// `object-position`.
    #[serde(default)]
    pub object_position: ObjectPosition,
    /// `image-rendering`.
    #[serde(default)]
    pub image_rendering: ImageRendering,
    /// `border-radius` longhands.
    #[serde(default)]
    pub border_radii: BorderRadii,
    /// Used border widths.
    #[serde(default)]
    pub border_widths: BorderWidths,
    /// `color`, used for alt text.
    #[serde(default)]
    pub color: Rgba8,
}

#[cfg(test)]
#[path = "../../tests/unit/style/computed.rs"]
mod tests;
