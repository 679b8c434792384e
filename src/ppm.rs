use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::math::Vec3;

/// Binary (P6) framebuffer with three bytes per pixel, rows top to bottom
pub struct PpmImage {
    width: usize,
    height: usize,
    body: Vec<u8>,
}

impl PpmImage {
    pub fn create(width: usize, height: usize) -> PpmImage {
        PpmImage { width, height, body: vec![0; width * height * 3] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Store a 0-255 colour, clamping each channel and truncating towards zero
    pub fn set_pixel(&mut self, col: usize, row: usize, colour: &Vec3) {
        let offset = (row * self.width + col) * 3;
        let colour = colour.map(|c| c.max(0.0).min(255.0));
        self.body[offset] = colour.x as u8;
        self.body[offset + 1] = colour.y as u8;
        self.body[offset + 2] = colour.z as u8;
    }

    pub fn pixel(&self, col: usize, row: usize) -> [u8; 3] {
        let offset = (row * self.width + col) * 3;
        [self.body[offset], self.body[offset + 1], self.body[offset + 2]]
    }

    pub fn header(&self) -> String {
        format!("P6\n{} {}\n255\n", self.width, self.height)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(self.header().as_bytes())?;
        out.write_all(&self.body)?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        self.write_to(&mut file)?;
        file.flush()
    }
}
