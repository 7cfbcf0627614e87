//! Pixel-to-viewport mapping.
//!
//! The viewport spans x in [-1, 1] and y in [-1/aspect, 1/aspect]. Pixel
//! (0, 0) maps to the (-1, -1/aspect) corner and row 0 is the top row of the
//! output image.

use lumen_core::{Scene, SceneError};

/// Viewport bounds and per-pixel step sizes derived from the canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
    pub x_min: f64,
    pub y_min: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Viewport {
    /// Derive the viewport for a `width` x `height` canvas.
    ///
    /// Both dimensions must be at least 2, since the step sizes divide by
    /// `width - 1` and `height - 1`.
    pub fn new(width: u32, height: u32) -> Result<Self, SceneError> {
        if width < 2 || height < 2 {
            return Err(SceneError::InvalidDimensions { width, height });
        }

        let aspect_ratio = width as f64 / height as f64;
        let x_min = -1.0;
        let y_min = -1.0 / aspect_ratio;

        Ok(Self {
            width,
            height,
            aspect_ratio,
            x_min,
            y_min,
            dx: 2.0 / (width - 1) as f64,
            dy: (-y_min * 2.0) / (height - 1) as f64,
        })
    }

    /// Viewport for a scene's canvas.
    pub fn for_scene(scene: &Scene) -> Result<Self, SceneError> {
        Self::new(scene.width, scene.height)
    }

    /// World-space (x, y) of pixel column `x`, row `y`.
    #[inline]
    pub fn pixel_to_world(&self, x: u32, y: u32) -> (f64, f64) {
        (
            self.x_min + self.dx * x as f64,
            self.y_min + self.dy * y as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_viewport() {
        let viewport = Viewport::new(10, 10).unwrap();
        assert_eq!(viewport.aspect_ratio, 1.0);
        assert_eq!(viewport.dx, 2.0 / 9.0);
        assert_eq!(viewport.dy, 2.0 / 9.0);

        assert_eq!(viewport.pixel_to_world(0, 0), (-1.0, -1.0));
        let (x, y) = viewport.pixel_to_world(9, 9);
        assert!((x - 1.0).abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_wide_viewport() {
        let viewport = Viewport::new(200, 100).unwrap();
        assert_eq!(viewport.aspect_ratio, 2.0);
        assert_eq!(viewport.y_min, -0.5);

        let (_, top) = viewport.pixel_to_world(0, 0);
        let (_, bottom) = viewport.pixel_to_world(0, 99);
        assert_eq!(top, -0.5);
        assert!((bottom - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_degenerate_canvas() {
        assert!(Viewport::new(1, 10).is_err());
        assert!(Viewport::new(10, 0).is_err());
        assert!(Viewport::new(2, 2).is_ok());
    }
}
