use std::ops::{Deref, DerefMut};

use crate::{
    foundation::core::DeviceRect,
    geometry::radii::NormalizedRadii,
    paint::context::PaintContext,
};

/// Clips painting to a rounded rect for as long as the guard lives.
///
/// Square corners record nothing; otherwise `save` + `add_rounded_rect_clip` on entry and a
/// matching `restore` on drop.
pub struct ScopedCornerRadiusClip<'c, 'a> {
    context: &'c mut PaintContext<'a>,
    active: bool,
}

impl<'c, 'a> ScopedCornerRadiusClip<'c, 'a> {
    /// Open the clip over `rect`.
    pub fn new(context: &'c mut PaintContext<'a>, rect: DeviceRect, radii: &NormalizedRadii) -> Self {
        let active = radii.has_any_radius();
        if active {
            let device_radii = radii.to_device(context.converter());
            let recorder = context.recorder();
            recorder.save();
            recorder.add_rounded_rect_clip(rect, device_radii);
        }
        Self { context, active }
    }

    /// Whether commands were emitted.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl<'a> Deref for ScopedCornerRadiusClip<'_, 'a> {
    type Target = PaintContext<'a>;

    fn deref(&self) -> &Self::Target {
        &*self.context
    }
}

impl DerefMut for ScopedCornerRadiusClip<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.context
    }
}

impl Drop for ScopedCornerRadiusClip<'_, '_> {
    fn drop(&mut self) {
        if self.active {
            self.context.recorder().restore();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/corner_clip.rs"]
mod tests;
