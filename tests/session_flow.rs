use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use overmark::{
    Annotation, AnnotationSession, Region, SessionConfig, SurfaceBox, SurfaceSignal,
    TextAnnotation, Tick, TickRange, VideoSurface,
};

#[derive(Clone, Default)]
struct ScriptedSurface {
    content: Rc<Cell<SurfaceBox>>,
    order: Rc<Cell<Option<i32>>>,
    position: Rc<Cell<f64>>,
}

impl VideoSurface for ScriptedSurface {
    fn content_box(&self) -> SurfaceBox {
        self.content.get()
    }

    fn stacking_order(&self) -> Option<i32> {
        self.order.get()
    }

    fn position_secs(&self) -> f64 {
        self.position.get()
    }
}

fn label(id: &str, start: i64, end: i64) -> Annotation {
    Annotation::Text(TextAnnotation::new(
        id,
        TickRange::new(Tick(start), Tick(end)),
        Region::new(5.0, 5.0, 20.0, 10.0),
        id,
    ))
}

fn seek(session: &mut AnnotationSession<ScriptedSurface>, surface: &ScriptedSurface, secs: f64) -> overmark::VisibilityDiff {
    surface.position.set(secs);
    session.handle_signal(SurfaceSignal::TimeChanged).unwrap()
}

#[test]
fn playback_walkthrough() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let surface = ScriptedSurface::default();
    surface.content.set(SurfaceBox::new(16.0, 9.0, 960.0, 540.0));
    let mut session = AnnotationSession::new(surface.clone(), SessionConfig::default());
    session.set_annotations(vec![label("first", 0, 50), label("second", 40, 100)]);

    // Overlay is congruent from construction.
    assert_eq!(session.layer().bbox().to_rect(), surface.content.get().to_rect());

    let d = seek(&mut session, &surface, 3.0);
    assert_eq!(d.attached, ["first"]);

    let d = seek(&mut session, &surface, 4.5);
    assert_eq!(d.attached, ["second"]);
    assert!(d.detached.is_empty());

    let d = seek(&mut session, &surface, 6.0);
    assert_eq!(d.detached, ["first"]);

    let d = seek(&mut session, &surface, 20.0);
    assert_eq!(d.detached, ["second"]);
    assert!(session.layer().is_empty());

    // Seeking back re-selects purely from the new position.
    let d = seek(&mut session, &surface, 4.5);
    let mut attached = d.attached.clone();
    attached.sort();
    assert_eq!(attached, ["first", "second"]);
}

#[test]
fn fullscreen_transition_tracks_geometry() {
    let surface = ScriptedSurface::default();
    surface.content.set(SurfaceBox::new(16.0, 9.0, 960.0, 540.0));
    surface.order.set(Some(2));
    let mut session = AnnotationSession::new(surface.clone(), SessionConfig::default());
    assert_eq!(session.layer().bbox().z_order, 3);

    surface.content.set(SurfaceBox::new(0.0, 0.0, 2560.0, 1440.0));
    surface.order.set(None);
    assert!(session.handle_signal(SurfaceSignal::FullscreenChanged).is_none());
    assert_eq!(session.layer().bbox().width, 2560.0);
    assert_eq!(session.layer().bbox().z_order, 1000);
}

#[test]
fn hide_show_and_teardown() {
    let surface = ScriptedSurface::default();
    let mut session = AnnotationSession::new(
        surface.clone(),
        SessionConfig {
            poll_interval: Duration::from_millis(250),
            ..SessionConfig::default()
        },
    );
    session.set_annotations(vec![label("only", 0, 10)]);
    seek(&mut session, &surface, 0.5);
    assert_eq!(session.layer().children(), ["only"]);

    session.hide();
    session.show();
    assert_eq!(session.layer().children(), ["only"]);

    let start = Instant::now();
    assert!(session.poll(start + Duration::from_millis(300)));
    session.close();
    assert!(!session.poll(start + Duration::from_secs(5)));
}
