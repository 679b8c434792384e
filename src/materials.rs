
use serde::{Deserialize, Serialize};

use super::math::Vec3;

fn unit_refractive_index() -> f64 {
    1.0
}

/// Local shading parameters for a surface.
///
/// Colours are on the 0-255 scale. `albedo` weights the diffuse, specular and
/// transmissive terms in that order; the transmissive weight scales both the
/// reflected and the refracted colour.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Material {
    pub colour: Vec3,
    pub spec_colour: Vec3,
    pub albedo: Vec3,
    pub spec_exponent: f64,
    #[serde(default = "unit_refractive_index")]
    pub refractive_index: f64,
}

/// A colourless point light
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f64,
}
