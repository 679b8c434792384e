use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Debug, Default, Deserialize, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Vec3 {
        Vec3 { x, y, z }
    }

    pub const fn zero() -> Vec3 {
        Vec3 { x: 0.0, y: 0.0, z: 0.0 }
    }

    pub fn splat(v: f64) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }

    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Vec3 {
        Vec3 { x: f(self.x), y: f(self.y), z: f(self.z) }
    }

    /// Component-wise scale, used for aspect correction
    pub fn scale(self, sx: f64, sy: f64, sz: f64) -> Vec3 {
        Vec3 { x: self.x * sx, y: self.y * sy, z: self.z * sz }
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn len_sq(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.len_sq().sqrt()
    }

    pub fn distance(&self, other: &Vec3) -> f64 {
        (*self - *other).length()
    }

    /// Unit vector in the same direction. The zero vector normalises to NaNs.
    pub fn normalise(&self) -> Vec3 {
        *self * (1.0 / self.length())
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3 { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Vec3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, scale: f64) -> Vec3 {
        Vec3 { x: self.x * scale, y: self.y * scale, z: self.z * scale }
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3 { x: -self.x, y: -self.y, z: -self.z }
    }
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(&b)
}

/// Mirror `v` about the plane with unit normal `n`
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * (2.0 * dot(n, v))
}

/// Bend a unit direction through a boundary with the given refractive index.
///
/// The incidence cosine is clamped to `[0, 1]` before the orientation test, so
/// rays are always treated as entering the surface from outside. Returns `None`
/// on total internal reflection.
pub fn refract(v: Vec3, n: Vec3, refractive_index: f64) -> Option<Vec3> {
    let cos_i = dot(v, n).clamp(0.0, 1.0);
    let (eta_i, eta_t, n) = if cos_i < 0.0 {
        (refractive_index, 1.0, -n)
    }
    else {
        (1.0, refractive_index, n)
    };
    let eta = eta_i / eta_t;
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some(v * eta + n * (eta * cos_i - k.sqrt()))
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    pub fn at_t(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn vec3_add() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(-1.0, 5.0, 0.0);

        assert_eq!(v1 + v2, Vec3::new(0.0, 7.0, 3.0));
    }

    #[test]
    fn vec3_sub() {
        let v1 = Vec3::new(1.0, 2.0, 3.0);
        let v2 = Vec3::new(-1.0, 5.0, 0.0);

        assert_eq!(v1 - v2, Vec3::new(2.0, -3.0, 3.0));
    }

    #[test]
    fn vec3_len_sq() {
        assert_eq!(Vec3::new(0.0, 0.0, 0.0).len_sq(), 0.0);
        assert_eq!(Vec3::new(0.0, 1.0, 0.0).len_sq(), 1.0);
        assert_eq!(Vec3::new(0.0, 5.0, 0.0).len_sq(), 25.0);
        assert_eq!(Vec3::new(1.0, 1.0, 1.0).len_sq(), 3.0);
    }

    #[test]
    fn vec3_length_and_distance() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::new(1.0, 1.0, 1.0).distance(&Vec3::new(4.0, 5.0, 1.0)), 5.0);
    }

    #[test]
    fn vec3_mul() {
        let v1 = Vec3::new(1.0, 2.0, -3.0);

        assert_eq!(v1 * 3.0, Vec3::new(3.0, 6.0, -9.0));
        assert_eq!(0.5 * v1, Vec3::new(0.5, 1.0, -1.5));
    }

    #[test]
    fn vec3_normalise() {
        // Normalise an already normalised vector
        let up = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(up.normalise(), up);

        // Normalise a longer vector
        let up = Vec3::new(0.0, 3.0, 0.0);
        assert_eq!(up.normalise(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn reflect_off_floor() {
        let incoming = Vec3::zero() - Vec3::new(3.0, 4.0, 1.0);
        let out = reflect(incoming, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(out, Vec3::new(-3.0, 4.0, -1.0));
    }

    #[test]
    fn reflect_preserves_length() {
        let n = Vec3::new(0.3, -1.0, 0.7).normalise();
        for d in &[Vec3::new(1.0, 2.0, 3.0), Vec3::new(-7.5, 0.25, 4.0), Vec3::new(0.0, 0.0, -1.0)] {
            let r = reflect(*d, n);
            assert!(approx_eq!(f64, r.length(), d.length(), epsilon = 1e-12));
        }
    }

    #[test]
    fn refract_with_unit_index() {
        // Head-on rays clamp to a zero cosine, leaving k = 0 and no bending
        let d = Vec3::new(0.0, 0.0, -1.0);
        let n = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(refract(d, n, 1.0), Some(d));
    }

    #[test]
    fn refract_denser_medium() {
        let d = Vec3::new(0.0, 0.0, -1.0);
        let n = Vec3::new(0.0, 0.0, 1.0);
        let r = refract(d, n, 2.0).unwrap();
        // eta = 0.5, k = 0.75
        assert!(approx_eq!(f64, r.z, -0.5 - 0.75f64.sqrt(), ulps = 2));
        assert_eq!((r.x, r.y), (0.0, 0.0));
    }

    #[test]
    fn refract_total_internal_reflection() {
        // eta = 2 with a zero cosine gives k = 1 - 4 < 0
        let d = Vec3::new(0.0, 0.0, -1.0);
        let n = Vec3::new(0.0, 0.0, 1.0);
        assert!(refract(d, n, 0.5).is_none());
    }

    #[test]
    fn ray_at_t() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.at_t(2.5), Vec3::new(1.0, 0.0, -2.5));
    }
}
