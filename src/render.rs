use std::time::Instant;

use log::info;

use super::camera::Camera;
use super::ppm::PpmImage;
use super::scene::Scene;
use super::settings::RenderSettings;
use super::shader::{cast_ray, BACKGROUND};

/// Shade every pixel of the image described by `settings`, top row first.
pub fn render(scene: &Scene, settings: &RenderSettings) -> PpmImage {
    let camera = Camera::new(settings.width, settings.height, settings.fov);
    let mut image = PpmImage::create(settings.width, settings.height);

    info!("Rendering {}x{} ({} surfaces, {} lights)", settings.width, settings.height, scene.surfaces.len(), scene.lights.len());
    let started = Instant::now();
    for row in 0..settings.height {
        for col in 0..settings.width {
            let colour = cast_ray(&camera.pixel_ray(col, row), scene, 0);
            let colour = colour * (1.0 - settings.haze) + BACKGROUND * settings.haze;
            image.set_pixel(col, row, &colour);
        }
    }
    info!("Rendered in {:.2?}", started.elapsed());

    image
}
