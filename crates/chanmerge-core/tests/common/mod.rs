use std::path::Path;

use image::{ImageBuffer, Luma};

/// Write a synthetic 16-bit grayscale TIFF with every pixel set to `value`.
pub fn write_channel_tiff(dir: &Path, name: &str, width: u32, height: u32, value: u16) {
    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_pixel(width, height, Luma([value]));
    img.save(dir.join(name)).unwrap();
}

/// Build an in-memory 16-bit grayscale image with every pixel set to `value`.
pub fn uniform_channel(width: u32, height: u32, value: u16) -> ImageBuffer<Luma<u16>, Vec<u16>> {
    ImageBuffer::from_pixel(width, height, Luma([value]))
}
