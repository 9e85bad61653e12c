use foundation::math::Vec2;

/// Canvas dimensions in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Baseline orthographic sphere radius in pixels.
    pub fn orthographic_scale(self) -> f64 {
        self.width.min(self.height) / 2.2
    }

    /// Baseline Mercator scale: the full longitude range spans the width.
    pub fn mercator_scale(self) -> f64 {
        self.width / (2.0 * std::f64::consts::PI)
    }
}

/// Post-projection pan/zoom affine: `screen = p * k + (tx, ty)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D {
    pub tx: f64,
    pub ty: f64,
    pub k: f64,
}

impl Transform2D {
    pub fn identity() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            k: 1.0,
        }
    }

    pub fn new(tx: f64, ty: f64, k: f64) -> Self {
        Self { tx, ty, k }
    }

    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x * self.k + self.tx, p.y * self.k + self.ty)
    }

    /// Change the zoom factor while keeping `anchor` (screen pixels) fixed,
    /// the usual cursor-centered wheel behavior.
    pub fn rescaled_about(self, anchor: Vec2, new_k: f64) -> Self {
        let ratio = new_k / self.k;
        Self {
            tx: anchor.x - (anchor.x - self.tx) * ratio,
            ty: anchor.y - (anchor.y - self.ty) * ratio,
            k: new_k,
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

/// Orthographic view state: Euler rotation triple (degrees) plus the
/// absolute sphere radius in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthographicView {
    /// (lambda, phi, gamma): yaw, pitch, roll of the sphere.
    pub rotation: [f64; 3],
    pub scale: f64,
}

impl OrthographicView {
    pub fn new(rotation: [f64; 3], scale: f64) -> Self {
        Self { rotation, scale }
    }

    /// Identity view for a viewport: no rotation, baseline scale.
    pub fn default_for(viewport: Viewport) -> Self {
        Self::new([0.0, 0.0, 0.0], viewport.orthographic_scale())
    }
}

/// Mercator view state: the pan/zoom transform applied after the baseline
/// cylindrical mapping.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct MercatorView {
    pub transform: Transform2D,
}

impl MercatorView {
    pub fn new(transform: Transform2D) -> Self {
        Self { transform }
    }
}

#[cfg(test)]
mod tests {
    use super::{Transform2D, Viewport};
    use foundation::math::Vec2;

    #[test]
    fn viewport_baselines() {
        let vp = Viewport::new(1100.0, 660.0);
        assert_eq!(vp.orthographic_scale(), 660.0 / 2.2);
        assert!((vp.mercator_scale() - 1100.0 / (2.0 * std::f64::consts::PI)).abs() < 1e-12);
    }

    #[test]
    fn viewport_never_degenerates() {
        let vp = Viewport::new(0.0, -5.0);
        assert_eq!(vp.width, 1.0);
        assert_eq!(vp.height, 1.0);
    }

    #[test]
    fn rescale_keeps_anchor_fixed() {
        let t = Transform2D::new(40.0, -10.0, 2.0);
        let anchor = Vec2::new(300.0, 200.0);
        // The world point currently under the anchor.
        let world = Vec2::new((anchor.x - t.tx) / t.k, (anchor.y - t.ty) / t.k);
        let zoomed = t.rescaled_about(anchor, 5.0);
        let after = zoomed.apply(world);
        assert!((after.x - anchor.x).abs() < 1e-9);
        assert!((after.y - anchor.y).abs() < 1e-9);
        assert_eq!(zoomed.k, 5.0);
    }
}
