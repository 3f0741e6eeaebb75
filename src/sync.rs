use crate::{
    geom::{OverlayBox, SurfaceBox},
    surface::VideoSurface,
};

/// The companion layer model: current box, overlay-level visibility, and
/// the insertion-ordered set of attached annotation ids. Mutated only by
/// the owning session; the host reads it to paint.
#[derive(Debug)]
pub struct OverlayLayer {
    bbox: OverlayBox,
    visible: bool,
    children: Vec<String>,
}

impl OverlayLayer {
    pub fn new() -> Self {
        Self {
            bbox: OverlayBox::default(),
            visible: true,
            children: Vec::new(),
        }
    }

    pub fn bbox(&self) -> OverlayBox {
        self.bbox
    }

    pub fn set_bbox(&mut self, bbox: OverlayBox) {
        self.bbox = bbox;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Attach an id; keeps insertion order. No-op when already attached.
    pub fn attach(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.children.push(id.to_string());
        true
    }

    pub fn detach(&mut self, id: &str) -> bool {
        let before = self.children.len();
        self.children.retain(|c| c != id);
        self.children.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.children.iter().any(|c| c == id)
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Default for OverlayLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the overlay layer's box congruent with the video surface's
/// rendered content box, painting above it.
#[derive(Clone, Copy, Debug)]
pub struct OverlaySynchronizer {
    fallback_z_order: i32,
}

impl OverlaySynchronizer {
    pub fn new(fallback_z_order: i32) -> Self {
        Self { fallback_z_order }
    }

    /// Surface order + 1 when resolved, configured fallback when unset.
    pub fn overlay_z(&self, surface_order: Option<i32>) -> i32 {
        match surface_order {
            Some(z) => z.saturating_add(1),
            None => self.fallback_z_order,
        }
    }

    /// Read the surface geometry and stacking order and apply them to the
    /// layer unchanged. Side effect only; a zero-sized surface yields a
    /// zero-sized layer.
    #[tracing::instrument(skip(self, surface, layer))]
    pub fn recompute(&self, surface: &dyn VideoSurface, layer: &mut OverlayLayer) {
        let content: SurfaceBox = surface.content_box();
        let z = self.overlay_z(surface.stacking_order());
        let bbox = OverlayBox::from_surface(content, z);
        tracing::trace!(
            left = bbox.left,
            top = bbox.top,
            width = bbox.width,
            height = bbox.height,
            z_order = bbox.z_order,
            "overlay box updated"
        );
        layer.set_bbox(bbox);
    }
}
