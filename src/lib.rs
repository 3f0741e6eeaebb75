#![forbid(unsafe_code)]

pub mod annotation;
pub mod color;
pub mod element;
pub mod error;
pub mod geom;
pub mod session;
pub mod surface;
pub mod sync;
pub mod visibility;

pub use annotation::{
    Annotation, BubbleEdge, BubblePointer, SpeechBubbleAnnotation, TextAnnotation, Tick, TickRange,
};
pub use color::Color;
pub use element::{ElementKind, ElementStyle, OverlayElement, Render, RenderCache};
pub use error::{OvermarkError, OvermarkResult};
pub use geom::{OverlayBox, Region, SurfaceBox};
pub use session::{AnnotationSession, FallbackTimer, SessionConfig};
pub use surface::{SurfaceSignal, VideoSurface};
pub use sync::{OverlayLayer, OverlaySynchronizer};
pub use visibility::{VisibilityDiff, VisibilityEngine};
