use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::error::{RenderError, Result};

/// Image and output parameters that travel with the scene
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    /// Field of view in radians
    pub fov: f64,
    pub output: PathBuf,
    /// How much background colour is mixed into every pixel; 0 disables it
    pub haze: f64,
}

impl Default for RenderSettings {
    fn default() -> RenderSettings {
        RenderSettings {
            width: 1024,
            height: 768,
            fov: FRAC_PI_2,
            output: PathBuf::from("out.ppm"),
            haze: 0.05,
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidScene(format!("image size {}x{} is empty", self.width, self.height)));
        }
        if !(self.fov > 0.0 && self.fov < std::f64::consts::PI) {
            return Err(RenderError::InvalidScene(format!("field of view {} is out of range", self.fov)));
        }
        if !(0.0..=1.0).contains(&self.haze) {
            return Err(RenderError::InvalidScene(format!("haze {} is outside [0, 1]", self.haze)));
        }
        Ok(())
    }
}
