use foundation::math::Vec2;

/// CSS hex color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color(pub &'static str);

/// Reference palette.
pub const PATH_STROKE: Color = Color("#06B6D4");
pub const MARKER_FILL: Color = Color("#f0f9ff");
pub const MARKER_STROKE: Color = Color("#0ea5e9");
pub const LAND_FILL: Color = Color("#374151");
pub const BACKGROUND: Color = Color("#111827");
pub const GRATICULE: Color = Color("#9ca3af");

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PrimitiveStyle {
    pub stroke: Option<Color>,
    pub fill: Option<Color>,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl PrimitiveStyle {
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            stroke: Some(color),
            fill: None,
            stroke_width: width,
            opacity: 1.0,
        }
    }

    pub fn fill(color: Color) -> Self {
        Self {
            stroke: None,
            fill: Some(color),
            stroke_width: 0.0,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Screen-space output of a render pass.
///
/// Primitives are rebuilt on every state change and owned by the drawing
/// backend; the core never retains them across frames.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPrimitive {
    Polyline {
        points: Vec<Vec2>,
        style: PrimitiveStyle,
    },
    Polygon {
        rings: Vec<Vec<Vec2>>,
        style: PrimitiveStyle,
    },
    Circle {
        center: Vec2,
        radius: f64,
        style: PrimitiveStyle,
    },
}

/// Stroke weight compensation: visual width stays roughly constant across
/// zoom by dividing by the square root of the zoom fraction.
pub fn zoom_compensated(base: f64, zoom_fraction: f64) -> f64 {
    base / zoom_fraction.max(1e-6).sqrt()
}

#[cfg(test)]
mod tests {
    use super::{PATH_STROKE, PrimitiveStyle, zoom_compensated};

    #[test]
    fn stroke_width_shrinks_with_zoom() {
        assert_eq!(zoom_compensated(2.0, 1.0), 2.0);
        assert_eq!(zoom_compensated(2.0, 4.0), 1.0);
        assert!(zoom_compensated(2.0, 16.0) < zoom_compensated(2.0, 4.0));
    }

    #[test]
    fn style_builders() {
        let s = PrimitiveStyle::stroke(PATH_STROKE, 2.0).with_opacity(0.5);
        assert_eq!(s.stroke, Some(PATH_STROKE));
        assert_eq!(s.opacity, 0.5);
        assert!(s.fill.is_none());
    }
}
