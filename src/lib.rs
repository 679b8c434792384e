#![deny(bare_trait_objects)]

pub mod math;
pub mod ppm;
pub mod geometry;
pub mod materials;
pub mod camera;
pub mod shader;
pub mod scene;
pub mod settings;
pub mod render;
pub mod error;

pub use error::{RenderError, Result};
