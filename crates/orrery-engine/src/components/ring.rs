use crate::components::mesh::Color;

/// Flat annulus around a body, lying in the orbital plane (Saturn).
#[derive(Debug, Clone, Copy)]
pub struct RingComponent {
    /// Inner edge radius in world units.
    pub inner: f32,
    /// Outer edge radius in world units.
    pub outer: f32,
    pub color: Color,
    /// Blend opacity in [0, 1].
    pub opacity: f32,
}

impl RingComponent {
    pub fn new(inner: f32, outer: f32, color: Color) -> Self {
        Self {
            inner,
            outer,
            color,
            opacity: 0.7,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Radius of the annulus centerline.
    pub fn mid_radius(&self) -> f32 {
        (self.inner + self.outer) / 2.0
    }

    /// Radial thickness of the annulus.
    pub fn width(&self) -> f32 {
        self.outer - self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_radius_and_width() {
        let ring = RingComponent::new(3.12, 4.8, Color::from_hex(0xDDDDDD));
        assert!((ring.mid_radius() - 3.96).abs() < 1e-5);
        assert!((ring.width() - 1.68).abs() < 1e-5);
        assert_eq!(ring.opacity, 0.7);
    }
}
