pub use kurbo::{Point, Rect, Size, Vec2};

/// Rendered content box of the host video surface: on-screen pixels,
/// offset from its layout parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

/// Box applied to the companion overlay layer. Derived and ephemeral:
/// recomputed on every synchronization tick, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub z_order: i32,
}

impl OverlayBox {
    pub fn from_surface(surface: SurfaceBox, z_order: i32) -> Self {
        Self {
            left: surface.left,
            top: surface.top,
            width: surface.width,
            height: surface.height,
            z_order,
        }
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

impl Default for OverlayBox {
    fn default() -> Self {
        Self::from_surface(SurfaceBox::default(), 0)
    }
}

/// Placement of an annotation inside the overlay, as percentages of the
/// layer's content box, origin top-left. Values are not clamped to
/// [0, 100]; out-of-range placements pass through to presentation as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Resolve to layer-local pixels against a layer of the given size.
    pub fn resolve(self, layer_width: f64, layer_height: f64) -> Rect {
        let x0 = layer_width * self.x / 100.0;
        let y0 = layer_height * self.y / 100.0;
        Rect::new(
            x0,
            y0,
            x0 + layer_width * self.width / 100.0,
            y0 + layer_height * self.height / 100.0,
        )
    }
}
