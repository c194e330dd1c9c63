use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    assets::provider::{EdgeVisitor, ImageContent, ImageProvider},
    foundation::core::{Rect, rects_intersect},
    geometry::{
        object_fit::{ContainerGeometry, compute_paint_area, effective_object_fit, scaling_mode_for},
        radii::{NormalizedRadii, ShrinkRadiiForBorders},
    },
    paint::{context::PaintContext, corner_clip::ScopedCornerRadiusClip, display_list::TextAlignment},
    style::computed::ComputedValues,
    viewport::registry::{ViewportClient, ViewportRegistry, ViewportSubscription},
};

/// Stacking-order pass a paint call belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintPhase {
    /// Box background.
    Background,
    /// Box border.
    Border,
    /// Replaced content.
    Foreground,
    /// Outline.
    Outline,
    /// Overlays such as focus rings.
    Overlay,
}

/// Paints the parts of a box that are not its replaced content.
pub trait BoxPainter {
    /// Called for every phase before the node paints its own content.
    fn paint_box(&self, context: &mut PaintContext<'_>, layout: &ReplacedBox, phase: PaintPhase);
}

/// Layout data a paint node reads.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplacedBox {
    /// Border box in absolute CSS pixels.
    pub absolute_rect: Rect,
    /// Computed style.
    pub style: ComputedValues,
    /// `visibility: visible`.
    pub visible: bool,
}

impl ReplacedBox {
    /// A visible box at `absolute_rect`.
    pub fn new(absolute_rect: Rect, style: ComputedValues) -> Self {
        Self {
            absolute_rect,
            style,
            visible: true,
        }
    }
}

/// Paint-tree entity for an `<img>`-like or inline-SVG replaced element.
pub struct PaintNode {
    layout: RefCell<ReplacedBox>,
    alt_text: String,
    renders_as_alt_text: bool,
    forces_contain_fit: bool,
    provider: Rc<dyn ImageProvider>,
    visible_in_viewport: Cell<bool>,
    subscription: RefCell<Option<ViewportSubscription>>,
}

impl fmt::Debug for PaintNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaintNode")
            .field("layout", &self.layout.borrow())
            .field("alt_text", &self.alt_text)
            .field("renders_as_alt_text", &self.renders_as_alt_text)
            .field("forces_contain_fit", &self.forces_contain_fit)
            .field("visible_in_viewport", &self.visible_in_viewport.get())
            .field("registered", &self.is_registered())
            .finish_non_exhaustive()
    }
}

impl PaintNode {
    /// Node for an image box. Falls back to alt text when the provider has nothing to show yet.
    pub fn for_image_box(
        layout: ReplacedBox,
        alt: Option<&str>,
        provider: Rc<dyn ImageProvider>,
        registry: &Rc<ViewportRegistry>,
    ) -> Rc<Self> {
        let renders_as_alt_text = !provider.is_image_available();
        Self::create(
            layout,
            alt.unwrap_or_default().to_owned(),
            renders_as_alt_text,
            false,
            provider,
            registry,
        )
    }

    /// Node for an SVG image box. Never renders alt text; content is always contain-fitted.
    pub fn for_svg_image_box(
        layout: ReplacedBox,
        provider: Rc<dyn ImageProvider>,
        registry: &Rc<ViewportRegistry>,
    ) -> Rc<Self> {
        Self::create(layout, String::new(), false, true, provider, registry)
    }

    /// Node for built-in content, picking the box kind from the variant.
    pub fn for_content(
        layout: ReplacedBox,
        alt: Option<&str>,
        content: Rc<ImageContent>,
        registry: &Rc<ViewportRegistry>,
    ) -> Rc<Self> {
        if content.is_vector() {
            Self::for_svg_image_box(layout, content, registry)
        } else {
            Self::for_image_box(layout, alt, content, registry)
        }
    }

    fn create(
        layout: ReplacedBox,
        alt_text: String,
        renders_as_alt_text: bool,
        forces_contain_fit: bool,
        provider: Rc<dyn ImageProvider>,
        registry: &Rc<ViewportRegistry>,
    ) -> Rc<Self> {
        let node = Rc::new_cyclic(|weak: &Weak<Self>| {
            let client: Weak<dyn ViewportClient> = weak.clone();
            Self {
                layout: RefCell::new(layout),
                alt_text,
                renders_as_alt_text,
                forces_contain_fit,
                provider,
                visible_in_viewport: Cell::new(false),
                subscription: RefCell::new(Some(registry.register_viewport_client(client))),
            }
        });
        tracing::debug!(
            alt_text = node.renders_as_alt_text,
            contain = node.forces_contain_fit,
            "paint node created"
        );
        node
    }

    /// Alt text; empty when absent.
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    /// Whether the foreground is alt text instead of content.
    pub fn renders_as_alt_text(&self) -> bool {
        self.renders_as_alt_text
    }

    /// Whether `object-fit` is overridden to `contain`.
    pub fn forces_contain_fit(&self) -> bool {
        self.forces_contain_fit
    }

    /// Shared content source.
    pub fn provider(&self) -> &Rc<dyn ImageProvider> {
        &self.provider
    }

    /// Snapshot of the layout data.
    pub fn layout(&self) -> ReplacedBox {
        self.layout.borrow().clone()
    }

    /// Move the box after relayout.
    pub fn set_absolute_rect(&self, rect: Rect) {
        self.layout.borrow_mut().absolute_rect = rect;
    }

    /// Toggle `visibility`.
    pub fn set_visible(&self, visible: bool) {
        self.layout.borrow_mut().visible = visible;
    }

    /// Last visibility hint forwarded to the provider; `false` before the first viewport event.
    pub fn is_visible_in_viewport(&self) -> bool {
        self.visible_in_viewport.get()
    }

    /// Whether the node still listens to its registry.
    pub fn is_registered(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Stop listening to viewport changes. Idempotent; dropping the node does the same.
    pub fn dispose(&self) {
        let sub = self.subscription.borrow_mut().take();
        if let Some(mut sub) = sub {
            sub.dispose();
            tracing::debug!("paint node disposed");
        }
    }

    /// Report every resource the node keeps alive through its provider.
    pub fn visit_edges(&self, visitor: &mut dyn EdgeVisitor) {
        self.provider.visit_provider_edges(visitor);
    }

    /// Emit the commands for `phase`.
    ///
    /// Paints from a snapshot of the layout, so the box painter may update the node.
    pub fn paint(&self, context: &mut PaintContext<'_>, phase: PaintPhase) {
        let layout = self.layout();
        if !layout.visible {
            return;
        }

        if let Some(painter) = context.box_painter() {
            painter.paint_box(context, &layout, phase);
        }

        if phase != PaintPhase::Foreground {
            return;
        }

        if self.renders_as_alt_text {
            self.paint_alt_text(context, &layout);
            return;
        }

        let node_rect = context.rounded_device_rect(layout.absolute_rect);
        let Some(bitmap) = self.provider.current_image_bitmap_sized(node_rect.size()) else {
            tracing::trace!(?node_rect, "no bitmap yet, skipping foreground");
            return;
        };

        let style = &layout.style;
        let radii = NormalizedRadii::from_style(
            &style.border_radii,
            layout.absolute_rect,
            &style.border_widths,
            ShrinkRadiiForBorders::Yes,
        );
        let mut clip = ScopedCornerRadiusClip::new(context, node_rect, &radii);

        let fit = effective_object_fit(style.object_fit, self.forces_contain_fit);
        let container = ContainerGeometry::new(layout.absolute_rect, clip.converter());
        let dest = compute_paint_area(&container, fit, style.object_position, bitmap.size());
        let mode = scaling_mode_for(style.image_rendering, bitmap.rect(), node_rect);

        clip.recorder()
            .draw_scaled_immutable_bitmap(dest, node_rect, bitmap, mode);
    }

    fn paint_alt_text(&self, context: &mut PaintContext<'_>, layout: &ReplacedBox) {
        if self.alt_text.is_empty() {
            return;
        }
        let rect = context.enclosing_device_rect(layout.absolute_rect);
        let settings = context.settings();
        let recorder = context.recorder();
        recorder.draw_rect(rect, settings.alt_text_outline);
        recorder.draw_text(
            rect,
            &self.alt_text,
            &settings.alt_text_font,
            TextAlignment::Center,
            layout.style.color,
        );
    }
}

impl ViewportClient for PaintNode {
    fn did_set_viewport_rect(&self, rect: Rect) {
        let visible = rects_intersect(rect, self.layout.borrow().absolute_rect);
        self.visible_in_viewport.set(visible);
        tracing::trace!(visible, "forwarding viewport visibility");
        self.provider.set_visible_in_viewport(visible);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/node.rs"]
mod tests;
