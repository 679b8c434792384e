use std::collections::BTreeMap;
use std::rc::Rc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::{RenderError, Result};
use super::geometry::*;
use super::materials::*;
use super::math::*;
use super::settings::RenderSettings;

/// The scene the binary renders, fixed at build time
const DEFAULT_SCENE: &str = include_str!("../scenes/default.json");

#[derive(Debug, Deserialize, Serialize)]
struct SphereDeclaration {
    centre: Vec3,
    radius: f64,
    material: String,
}

#[derive(Debug, Deserialize, Serialize)]
struct DiscDeclaration {
    centre: Vec3,
    normal: Vec3,
    radius: f64,
    material: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "lowercase", tag = "shape")]
enum SurfaceDeclaration {
    Sphere(SphereDeclaration),
    Disc(DiscDeclaration),
}

#[derive(Debug, Deserialize, Serialize)]
struct SceneDeclaration {
    #[serde(default)]
    settings: RenderSettings,
    materials: BTreeMap<String, Material>,
    surfaces: Vec<SurfaceDeclaration>,
    lights: Vec<Light>,
}

/// Everything a render reads. Built once, then only borrowed.
/// Surface order decides which of two equally near surfaces wins.
pub struct Scene {
    pub surfaces: Vec<Box<dyn Surface>>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(surfaces: Vec<Box<dyn Surface>>, lights: Vec<Light>) -> Scene {
        Scene { surfaces, lights }
    }
}

fn check_material(name: &str, material: &Material) -> Result<()> {
    if !(material.spec_exponent >= 1.0) {
        return Err(RenderError::InvalidScene(format!("material '{}' has specular exponent {} below 1", name, material.spec_exponent)));
    }
    if !(material.refractive_index >= 1.0) {
        return Err(RenderError::InvalidScene(format!("material '{}' has refractive index {} below 1", name, material.refractive_index)));
    }
    Ok(())
}

fn check_radius(radius: f64) -> Result<()> {
    if !(radius > 0.0) {
        return Err(RenderError::InvalidScene(format!("radius {} is not positive", radius)));
    }
    Ok(())
}

/// Parse and validate a JSON scene declaration
pub fn load_scene(text: &str) -> Result<(Scene, RenderSettings)> {
    let declaration: SceneDeclaration = serde_json::from_str(text)?;
    declaration.settings.validate()?;

    let mut materials = BTreeMap::new();
    for (name, material) in declaration.materials {
        check_material(&name, &material)?;
        materials.insert(name, Rc::new(material));
    }
    let m = |name: &str| {
        materials
            .get(name)
            .cloned()
            .ok_or_else(|| RenderError::UnknownMaterial(name.to_owned()))
    };

    let mut surfaces: Vec<Box<dyn Surface>> = Vec::new();
    for surface in &declaration.surfaces {
        match surface {
            SurfaceDeclaration::Sphere(sphere) => {
                check_radius(sphere.radius)?;
                surfaces.push(Box::new(Sphere { centre: sphere.centre, radius: sphere.radius, material: m(&sphere.material)? }));
            }
            SurfaceDeclaration::Disc(disc) => {
                check_radius(disc.radius)?;
                if !(disc.normal.len_sq() > 0.0) {
                    return Err(RenderError::InvalidScene("disc normal has zero length".to_owned()));
                }
                surfaces.push(Box::new(Disc { centre: disc.centre, normal: disc.normal.normalise(), radius: disc.radius, material: m(&disc.material)? }));
            }
        }
    }

    for light in &declaration.lights {
        if !(light.intensity >= 0.0) {
            return Err(RenderError::InvalidScene(format!("light at {:?} has negative intensity", light.position)));
        }
    }

    debug!("Loaded scene: {} materials, {} surfaces, {} lights", materials.len(), surfaces.len(), declaration.lights.len());
    Ok((Scene { surfaces, lights: declaration.lights }, declaration.settings))
}

/// The built-in scene: four spheres over a tilted disc, lit by seven lights
pub fn default_scene() -> Result<(Scene, RenderSettings)> {
    load_scene(DEFAULT_SCENE)
}
