//! Recursive Whitted-style shading: local Phong lighting with hard shadows,
//! plus mirror reflection and refraction blended by the material albedo.

use super::geometry::nearest_hit;
use super::math::*;
use super::scene::Scene;

/// Deepest bounce that still does any work; one past this returns black
pub const MAX_DEPTH: u32 = 4;

/// Colour returned for rays that escape the scene
pub const BACKGROUND: Vec3 = Vec3::new(200.0, 200.0, 0.0);

/// Offset applied to refracted ray origins to avoid re-hitting the same surface
pub const SURFACE_EPSILON: f64 = 1e-3;

/// Trace `ray` into `scene` and return its colour on the 0-255 scale, unclamped.
pub fn cast_ray(ray: &Ray, scene: &Scene, depth: u32) -> Vec3 {
    if depth > MAX_DEPTH {
        return Vec3::zero();
    }
    let direction = ray.direction.normalise();
    let ray = Ray::new(ray.origin, direction);

    let hit = match nearest_hit(&ray, &scene.surfaces) {
        Some(hit) => hit,
        None => return BACKGROUND,
    };
    let hit_point = ray.at_t(hit.t);
    let normal = hit.surface.normal_at(hit_point);
    let material = hit.surface.material();

    let reflected = Ray::new(hit_point, reflect(direction, normal).normalise());
    let reflect_colour = cast_ray(&reflected, scene, depth + 1);

    let refract_colour = match refracted_ray(hit_point, direction, normal, material.refractive_index) {
        Some(refracted) => cast_ray(&refracted, scene, depth + 1),
        None => Vec3::zero(),
    };

    let mut diffuse = 0.0;
    let mut specular = 0.0;
    for light in &scene.lights {
        let light_dir = (hit_point - light.position).normalise();
        let v = dot(normal, light_dir);
        if v >= 0.0 {
            continue;
        }
        // Lit only if this surface is the first thing the light's ray reaches
        let shadow_ray = Ray::new(light.position, light_dir);
        let visible = match nearest_hit(&shadow_ray, &scene.surfaces) {
            Some(blocker) => blocker.index == hit.index,
            None => false,
        };
        if visible {
            diffuse += -v * light.intensity;
            specular += dot(reflect(light_dir, normal), -light_dir).max(0.0).powf(material.spec_exponent)
                * light.intensity;
        }
    }

    material.colour * (diffuse * material.albedo.x)
        + material.spec_colour * (specular * material.albedo.y)
        + reflect_colour * material.albedo.z
        + refract_colour * material.albedo.z
}

/// The continuation ray for refraction at `hit_point`, or `None` on total
/// internal reflection.
pub fn refracted_ray(hit_point: Vec3, direction: Vec3, normal: Vec3, refractive_index: f64) -> Option<Ray> {
    let refracted = refract(direction, normal, refractive_index)?.normalise();
    let origin = if dot(refracted, normal) < 0.0 {
        hit_point - normal * SURFACE_EPSILON
    }
    else {
        hit_point + normal * SURFACE_EPSILON
    };
    Some(Ray::new(origin, refracted))
}
