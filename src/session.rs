use std::time::{Duration, Instant};

use crate::{
    annotation::{Annotation, Tick},
    element::{OverlayElement, RenderCache},
    surface::{SurfaceSignal, VideoSurface},
    sync::{OverlayLayer, OverlaySynchronizer},
    visibility::{VisibilityDiff, VisibilityEngine},
};

#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    /// Overlay stacking order used when the surface reports no resolved
    /// order of its own.
    pub fallback_z_order: i32,
    /// Interval of the periodic geometry fallback. Some relayouts (CSS
    /// driven) raise no resize signal; the poll catches those.
    pub poll_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback_z_order: 1000,
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Deadline-based periodic timer driven by the host loop. No background
/// thread; cancellation is permanent and observable.
#[derive(Clone, Copy, Debug)]
pub struct FallbackTimer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl FallbackTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: Some(now + interval),
        }
    }

    /// True when the deadline has passed; re-arms relative to `now`, so a
    /// stalled host loop gets one firing, not a burst of catch-ups.
    pub fn due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.deadline.is_none()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Binds one video surface to one overlay: owns the synchronizer, the
/// visibility engine, the layer, and the render cache, and routes surface
/// signals to the right mechanism.
///
/// All operations run to completion on the host's event loop. The host
/// must call [`AnnotationSession::close`] (or drop the session) before
/// abandoning its loop; otherwise the fallback timer stays armed.
#[derive(Debug)]
pub struct AnnotationSession<S> {
    surface: S,
    synchronizer: OverlaySynchronizer,
    engine: VisibilityEngine,
    layer: OverlayLayer,
    cache: RenderCache,
    annotations: Vec<Annotation>,
    timer: FallbackTimer,
}

impl<S: VideoSurface> AnnotationSession<S> {
    pub fn new(surface: S, config: SessionConfig) -> Self {
        let mut session = Self {
            surface,
            synchronizer: OverlaySynchronizer::new(config.fallback_z_order),
            engine: VisibilityEngine::new(),
            layer: OverlayLayer::new(),
            cache: RenderCache::new(),
            annotations: Vec::new(),
            timer: FallbackTimer::new(config.poll_interval, Instant::now()),
        };
        // Congruent before the first signal arrives.
        session.refresh_geometry();
        session
    }

    /// Replace the collection wholesale. Deliberately lazy: the displayed
    /// set goes stale until the next time signal, or until
    /// [`AnnotationSession::force_visibility_refresh`].
    pub fn set_annotations(&mut self, annotations: Vec<Annotation>) {
        self.annotations = annotations;
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn layer(&self) -> &OverlayLayer {
        &self.layer
    }

    pub fn is_visible(&self) -> bool {
        self.layer.is_visible()
    }

    /// Overlay-level visibility only; the displayed-annotation set is
    /// untouched, so `show` after `hide` restores the previous picture
    /// without a diff.
    pub fn show(&mut self) {
        self.layer.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.layer.set_visible(false);
    }

    pub fn toggle_visibility(&mut self) {
        let visible = self.layer.is_visible();
        self.layer.set_visible(!visible);
    }

    /// Attached elements in layer order, for the host to paint. Consult
    /// [`AnnotationSession::is_visible`] for the overlay-level flag.
    pub fn visible_elements(&self) -> impl Iterator<Item = (&str, &OverlayElement)> {
        self.layer
            .children()
            .iter()
            .filter_map(|id| self.cache.get(id).map(|el| (id.as_str(), el)))
    }

    pub fn handle_signal(&mut self, signal: SurfaceSignal) -> Option<VisibilityDiff> {
        tracing::trace!(?signal, "surface signal");
        match signal {
            SurfaceSignal::Resized | SurfaceSignal::FullscreenChanged => {
                self.refresh_geometry();
                None
            }
            SurfaceSignal::TimeChanged => Some(self.recompute_visibility()),
        }
    }

    /// Fires the periodic geometry fallback when due. Returns whether it
    /// fired. A cancelled timer never fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.due(now) {
            return false;
        }
        self.refresh_geometry();
        true
    }

    pub fn refresh_geometry(&mut self) {
        self.synchronizer.recompute(&self.surface, &mut self.layer);
    }

    /// Run the visibility diff at the current playback position. Needed
    /// when annotation timing data changed without a position change.
    pub fn force_visibility_refresh(&mut self) -> VisibilityDiff {
        self.recompute_visibility()
    }

    fn recompute_visibility(&mut self) -> VisibilityDiff {
        let tick = Tick::from_secs(self.surface.position_secs());
        self.engine
            .recompute(tick, &self.annotations, &mut self.layer, &mut self.cache)
    }

    /// Cancel the fallback timer. Idempotent; `Drop` is the backstop.
    pub fn close(&mut self) {
        self.timer.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.timer.is_cancelled()
    }
}

impl<S> Drop for AnnotationSession<S> {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
