use std::collections::{HashMap, hash_map::Entry};

use crate::{
    annotation::{Annotation, SpeechBubbleAnnotation, TextAnnotation},
    geom::Region,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ElementKind {
    Label,
    Bubble,
}

/// Rendered, presentational product of an annotation: a plain value the
/// host paints inside the overlay layer. Built once per annotation id and
/// mutated in place on refresh, never recreated.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayElement {
    pub kind: ElementKind,
    pub text: String,
    pub link: Option<String>,
    pub region: Region,
    pub style: ElementStyle,
}

/// Resolved style, colors already in CSS form.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementStyle {
    pub font_size_px: f64,
    pub text_color: String,
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub border_width_px: f64,
    pub border_radius_px: f64,
    pub padding_px: f64,
}

/// Rendering capability, implemented by every annotation variant.
pub trait Render {
    fn render(&self) -> OverlayElement;
    fn refresh(&self, el: &mut OverlayElement);
}

impl TextAnnotation {
    fn style(&self) -> ElementStyle {
        ElementStyle {
            font_size_px: self.font_size_px,
            text_color: self.text_color.to_css(),
            background: self.background.map(|c| c.to_css()),
            border_color: self.border_color.map(|c| c.to_css()),
            border_width_px: self.border_width_px,
            border_radius_px: self.border_radius_px,
            padding_px: self.padding_px,
        }
    }
}

impl Render for TextAnnotation {
    fn render(&self) -> OverlayElement {
        OverlayElement {
            kind: ElementKind::Label,
            text: self.text.clone(),
            link: self.link.clone(),
            region: self.region,
            style: self.style(),
        }
    }

    fn refresh(&self, el: &mut OverlayElement) {
        el.text = self.text.clone();
        el.link = self.link.clone();
        el.region = self.region;
        el.style = self.style();
    }
}

impl Render for SpeechBubbleAnnotation {
    fn render(&self) -> OverlayElement {
        let mut el = self.body.render();
        el.kind = ElementKind::Bubble;
        el
    }

    fn refresh(&self, el: &mut OverlayElement) {
        self.body.refresh(el);
    }
}

impl Render for Annotation {
    fn render(&self) -> OverlayElement {
        match self {
            Self::Text(t) => t.render(),
            Self::SpeechBubble(b) => b.render(),
        }
    }

    fn refresh(&self, el: &mut OverlayElement) {
        match self {
            Self::Text(t) => t.refresh(el),
            Self::SpeechBubble(b) => b.refresh(el),
        }
    }
}

/// Elements keyed by annotation id. Separating the cache from the pure
/// annotation data keeps the created-once element lifecycle without
/// aliasing a mutable handle inside the value type.
#[derive(Debug, Default)]
pub struct RenderCache {
    elements: HashMap<String, OverlayElement>,
}

impl RenderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the element on first sight of the id; refresh the existing
    /// one in place afterwards so data changes flow into it.
    pub fn element_for(&mut self, annotation: &Annotation) -> &OverlayElement {
        match self.elements.entry(annotation.id().to_string()) {
            Entry::Occupied(mut slot) => {
                annotation.refresh(slot.get_mut());
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(annotation.render()),
        }
    }

    pub fn get(&self, id: &str) -> Option<&OverlayElement> {
        self.elements.get(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }
}
