use std::collections::HashSet;

use crate::{
    annotation::{Annotation, Tick},
    element::RenderCache,
    sync::OverlayLayer,
};

/// What one recompute changed, in scan order. Annotations active both
/// before and after are never touched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityDiff {
    pub attached: Vec<String>,
    pub detached: Vec<String>,
}

impl VisibilityDiff {
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty() && self.detached.is_empty()
    }
}

/// Computes the active annotation set for a tick and applies the minimal
/// attach/detach diff against the layer. Pure function of the current
/// tick and collection; direction of travel is irrelevant, so repeated
/// ticks yield empty diffs and backward seeks just re-select.
#[derive(Debug, Default)]
pub struct VisibilityEngine {
    active: HashSet<String>,
}

impl VisibilityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids displayed as of the last recompute.
    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    /// Selection scan is O(collection); layer mutation is
    /// O(previous + newly selected). Duplicate ids select once, first
    /// occurrence wins.
    #[tracing::instrument(skip_all, fields(tick = tick.0))]
    pub fn recompute(
        &mut self,
        tick: Tick,
        annotations: &[Annotation],
        layer: &mut OverlayLayer,
        cache: &mut RenderCache,
    ) -> VisibilityDiff {
        let mut next = HashSet::with_capacity(self.active.len());
        let mut diff = VisibilityDiff::default();

        for annotation in annotations {
            if !annotation.is_active_at(tick) {
                continue;
            }
            if !next.insert(annotation.id().to_string()) {
                continue;
            }
            if !self.active.contains(annotation.id()) {
                cache.element_for(annotation);
                layer.attach(annotation.id());
                diff.attached.push(annotation.id().to_string());
            }
        }

        for id in &self.active {
            if !next.contains(id) {
                layer.detach(id);
                diff.detached.push(id.clone());
            }
        }

        self.active = next;
        if !diff.is_empty() {
            tracing::debug!(
                attached = diff.attached.len(),
                detached = diff.detached.len(),
                displayed = self.active.len(),
                "active set changed"
            );
        }
        diff
    }
}
