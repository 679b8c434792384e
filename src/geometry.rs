
use std::rc::Rc;

use super::materials::Material;
use super::math::*;

/// Something a ray can hit.
///
/// `intersect` expects a normalised direction so that the returned distance is
/// Euclidean. A miss carries no side effects.
pub trait Surface {
    fn intersect(&self, ray: &Ray) -> Option<f64>;
    /// Surface normal at a point known to lie on the surface
    fn normal_at(&self, p: Vec3) -> Vec3;
    fn centre(&self) -> Vec3;
    fn material(&self) -> &Material;
}

/// The nearest surface along a ray, identified by its index in the scene
pub struct HitRecord<'a> {
    pub index: usize,
    pub t: f64,
    pub surface: &'a dyn Surface,
}

pub struct Sphere {
    pub centre: Vec3,
    pub radius: f64,
    pub material: Rc<Material>,
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        // Project the centre onto the ray, then measure how far it sits off the line
        let t = dot(self.centre - ray.origin, ray.direction);
        let closest = ray.at_t(t);
        let y = self.centre.distance(&closest);
        if y > self.radius {
            return None;
        }
        // Rays starting inside never see the sphere
        if ray.origin.distance(&self.centre) < self.radius {
            return None;
        }
        if t < 0.0 {
            return None;
        }
        Some(t - (self.radius * self.radius - y * y).sqrt())
    }

    fn normal_at(&self, p: Vec3) -> Vec3 {
        (p - self.centre).normalise()
    }

    fn centre(&self) -> Vec3 {
        self.centre
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// A flat disc; `normal` is unit length and never flipped towards the viewer
pub struct Disc {
    pub centre: Vec3,
    pub normal: Vec3,
    pub radius: f64,
    pub material: Rc<Material>,
}

impl Surface for Disc {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let denom = dot(ray.direction, self.normal);
        if denom == 0.0 {
            return None;
        }
        let t = dot(self.centre - ray.origin, self.normal) / denom;
        if t <= 0.0 {
            return None;
        }
        if ray.at_t(t).distance(&self.centre) > self.radius {
            return None;
        }
        Some(t)
    }

    fn normal_at(&self, _p: Vec3) -> Vec3 {
        self.normal
    }

    fn centre(&self) -> Vec3 {
        self.centre
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

/// Brute-force scan for the closest hit. Ties go to the earlier surface.
pub fn nearest_hit<'a>(ray: &Ray, surfaces: &'a [Box<dyn Surface>]) -> Option<HitRecord<'a>> {
    let mut result = None;
    let mut closest_so_far = f64::INFINITY;
    for (index, surface) in surfaces.iter().enumerate() {
        if let Some(t) = surface.intersect(ray) {
            if t >= 0.0 && t < closest_so_far {
                closest_so_far = t;
                result = Some(HitRecord { index, t, surface: &**surface });
            }
        }
    }

    result
}
