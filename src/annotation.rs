use crate::{
    color::Color,
    error::{OvermarkError, OvermarkResult},
    geom::Region,
};

/// Integer tenths-of-a-second unit. All interval comparisons use ticks.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Tick(pub i64);

impl Tick {
    /// Quantize a playback position in seconds. Floors, so -0.05 s lands
    /// on tick -1 and 0.95 s on tick 9.
    pub fn from_secs(position: f64) -> Self {
        Self((position * 10.0).floor() as i64)
    }
}

/// Annotation display window in ticks, both bounds inclusive.
///
/// An inverted range (start > end) is representable and permanently
/// inactive: no tick satisfies `contains`. `validate` reports it for
/// hosts that want strictness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TickRange {
    pub start: Tick,
    pub end: Tick,
}

impl TickRange {
    pub fn new(start: Tick, end: Tick) -> Self {
        Self { start, end }
    }

    pub fn contains(self, t: Tick) -> bool {
        self.start <= t && t <= self.end
    }

    pub fn is_inverted(self) -> bool {
        self.start > self.end
    }

    pub fn validate(self) -> OvermarkResult<()> {
        if self.is_inverted() {
            return Err(OvermarkError::validation(format!(
                "tick range start {} exceeds end {}",
                self.start.0, self.end.0
            )));
        }
        Ok(())
    }
}

/// Closed set of annotation variants. Rendering is dispatched per variant
/// through [`crate::element::Render`]; there is no abstract base and no
/// runtime unimplemented-capability path.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Annotation {
    Text(TextAnnotation),
    SpeechBubble(SpeechBubbleAnnotation),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TextAnnotation {
    pub id: String,
    pub range: TickRange,
    pub region: Region,
    pub text: String,
    pub font_size_px: f64,
    pub text_color: Color,
    pub link: Option<String>,
    pub background: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width_px: f64,
    pub border_radius_px: f64,
    pub padding_px: f64,
}

impl TextAnnotation {
    /// Plain label with default styling; callers adjust fields directly.
    pub fn new(id: impl Into<String>, range: TickRange, region: Region, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            range,
            region,
            text: text.into(),
            font_size_px: 16.0,
            text_color: Color::rgb(255, 255, 255),
            link: None,
            background: None,
            border_color: None,
            border_width_px: 0.0,
            border_radius_px: 0.0,
            padding_px: 0.0,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SpeechBubbleAnnotation {
    pub body: TextAnnotation,
    /// Pointer geometry is carried through the data model but not yet
    /// consumed by rendering.
    pub pointer: BubblePointer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BubblePointer {
    pub edge: BubbleEdge,
    pub offset_pct: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BubbleEdge {
    #[default]
    Bottom,
    Top,
    Left,
    Right,
}

impl Annotation {
    pub fn id(&self) -> &str {
        match self {
            Self::Text(t) => &t.id,
            Self::SpeechBubble(b) => &b.body.id,
        }
    }

    pub fn range(&self) -> TickRange {
        match self {
            Self::Text(t) => t.range,
            Self::SpeechBubble(b) => b.body.range,
        }
    }

    pub fn region(&self) -> Region {
        match self {
            Self::Text(t) => t.region,
            Self::SpeechBubble(b) => b.body.region,
        }
    }

    pub fn is_active_at(&self, t: Tick) -> bool {
        self.range().contains(t)
    }

    pub fn validate(&self) -> OvermarkResult<()> {
        if self.id().is_empty() {
            return Err(OvermarkError::validation("annotation id must be non-empty"));
        }
        self.range().validate().map_err(|_| {
            OvermarkError::validation(format!(
                "annotation '{}' has an inverted tick range",
                self.id()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(id: &str, start: i64, end: i64) -> Annotation {
        Annotation::Text(TextAnnotation::new(
            id,
            TickRange::new(Tick(start), Tick(end)),
            Region::new(10.0, 10.0, 20.0, 10.0),
            "hello",
        ))
    }

    #[test]
    fn quantization_floors_seconds() {
        assert_eq!(Tick::from_secs(0.0), Tick(0));
        assert_eq!(Tick::from_secs(0.949), Tick(9));
        assert_eq!(Tick::from_secs(0.95), Tick(9));
        assert_eq!(Tick::from_secs(1.0), Tick(10));
        assert_eq!(Tick::from_secs(-0.05), Tick(-1));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let a = label("a", 10, 20);
        assert!(!a.is_active_at(Tick(9)));
        assert!(a.is_active_at(Tick(10)));
        assert!(a.is_active_at(Tick(20)));
        assert!(!a.is_active_at(Tick(21)));
    }

    #[test]
    fn inverted_range_is_never_active() {
        let a = label("a", 20, 10);
        for t in 0..30 {
            assert!(!a.is_active_at(Tick(t)));
        }
        assert!(a.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_id() {
        let a = label("", 0, 10);
        assert!(a.validate().is_err());
    }

    #[test]
    fn validate_accepts_well_formed() {
        label("a", 0, 10).validate().unwrap();
    }
}
