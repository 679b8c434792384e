use std::process;

use log::{error, info};

use whitted::render::render;
use whitted::scene::default_scene;

fn run() -> whitted::Result<()> {
    let (scene, settings) = default_scene()?;
    let image = render(&scene, &settings);

    image.save(&settings.output)?;
    info!("Wrote to file {}", settings.output.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(why) = run() {
        error!("{}", why);
        process::exit(1);
    }
}
