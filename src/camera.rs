
use super::math::{Ray, Vec3};

/// Pinhole camera fixed at the world origin, looking down -z with the image
/// plane at z = -1.
pub struct Camera {
    origin: Vec3,
    start: Vec3,
    unit: f64,
}

impl Camera {
    pub fn new(width: usize, height: usize, fov: f64) -> Camera {
        let w = width as f64;
        let h = height as f64;
        let half = (fov / 2.0).tan();

        // Top-left pixel on the image plane
        let start = Vec3::new(-half * (w - 1.0) / w, half * (h - 1.0) / h, -1.0);
        let start = if h > w {
            start.scale(w / h, 1.0, 1.0)
        }
        else if h < w {
            start.scale(1.0, h / w, 1.0)
        }
        else {
            start
        };
        let unit = half / w * 2.0;

        Camera { origin: Vec3::zero(), start, unit }
    }

    /// World-space step between neighbouring pixels
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Ray through pixel `(col, row)`, counted from the top left. The
    /// direction is left unnormalised.
    pub fn pixel_ray(&self, col: usize, row: usize) -> Ray {
        let offset = Vec3::new(col as f64 * self.unit, -(row as f64 * self.unit), 0.0);
        Ray::new(self.origin, self.start + offset - self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use std::f64::consts::FRAC_PI_2;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!(approx_eq!(f64, a.x, b.x, epsilon = 1e-12), "{:?} != {:?}", a, b);
        assert!(approx_eq!(f64, a.y, b.y, epsilon = 1e-12), "{:?} != {:?}", a, b);
        assert!(approx_eq!(f64, a.z, b.z, epsilon = 1e-12), "{:?} != {:?}", a, b);
    }

    #[test]
    fn landscape_corners_are_symmetric() {
        let camera = Camera::new(4, 2, FRAC_PI_2);
        assert!(approx_eq!(f64, camera.unit(), 0.5, epsilon = 1e-12));

        let top_left = camera.pixel_ray(0, 0);
        assert_eq!(top_left.origin, Vec3::zero());
        assert_vec_eq(top_left.direction, Vec3::new(-0.75, 0.25, -1.0));

        let bottom_right = camera.pixel_ray(3, 1);
        assert_vec_eq(bottom_right.direction, Vec3::new(0.75, -0.25, -1.0));
    }

    #[test]
    fn portrait_scales_horizontal_axis() {
        let camera = Camera::new(2, 4, FRAC_PI_2);
        // x = -(1/2) * (2/4), y = 3/4
        assert_vec_eq(camera.pixel_ray(0, 0).direction, Vec3::new(-0.25, 0.75, -1.0));
        assert!(approx_eq!(f64, camera.unit(), 1.0, epsilon = 1e-12));
    }

    #[test]
    fn square_image_is_centred() {
        let camera = Camera::new(3, 3, FRAC_PI_2);
        let centre = camera.pixel_ray(1, 1);
        assert_vec_eq(centre.direction, Vec3::new(0.0, 0.0, -1.0));
    }
}
