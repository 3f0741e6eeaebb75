use crate::geom::SurfaceBox;

/// Read-side view of the host video element. A detached or zero-sized
/// surface reports a zero-sized box; that is not an error.
pub trait VideoSurface {
    fn content_box(&self) -> SurfaceBox;

    /// Resolved stacking order, or `None` when the host style leaves it
    /// unset ("auto").
    fn stacking_order(&self) -> Option<i32>;

    /// Current playback position in seconds.
    fn position_secs(&self) -> f64;
}

/// Signals the host forwards from the surface into the session. Handlers
/// run to completion on the host's single-threaded event loop; geometry
/// and time signals touch disjoint session state, so their relative order
/// within one loop turn is unobservable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceSignal {
    Resized,
    FullscreenChanged,
    TimeChanged,
}
