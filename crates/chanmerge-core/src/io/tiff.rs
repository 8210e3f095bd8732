use std::path::Path;

use image::{ImageBuffer, Luma, Rgb};

use crate::compose::{Compositor, SlotAssignment};
use crate::error::{ChanmergeError, Result};

/// 16-bit grayscale channel image.
pub type ChannelImage = ImageBuffer<Luma<u16>, Vec<u16>>;

/// 16-bit RGB composite image.
pub type CompositeImage = ImageBuffer<Rgb<u16>, Vec<u16>>;

/// Compositor backed by the `image` crate.
///
/// Slots map onto RGB planes: green-or-yellow to green, blue-or-cyan to
/// blue, red to red. Brightfield is added to all three planes with
/// saturation. Output is written as 16-bit RGB TIFF.
#[derive(Clone, Copy, Debug, Default)]
pub struct TiffCompositor;

impl TiffCompositor {
    fn dimensions(slots: &SlotAssignment<'_, ChannelImage>) -> Result<(u32, u32)> {
        let assigned = [
            slots.green_or_yellow,
            slots.brightfield,
            slots.blue_or_cyan,
            slots.red,
        ];

        let mut dims = None;
        for img in assigned.into_iter().flatten() {
            match dims {
                None => dims = Some(img.dimensions()),
                Some((w, h)) if img.dimensions() != (w, h) => {
                    let (gw, gh) = img.dimensions();
                    return Err(ChanmergeError::DimensionMismatch {
                        expected_width: w,
                        expected_height: h,
                        got_width: gw,
                        got_height: gh,
                    });
                }
                Some(_) => {}
            }
        }

        dims.ok_or_else(|| {
            ChanmergeError::Config("composite called with no slot assigned".to_string())
        })
    }
}

impl Compositor for TiffCompositor {
    type Channel = ChannelImage;
    type Output = CompositeImage;

    fn open(&self, path: &Path) -> Result<Self::Channel> {
        Ok(image::open(path)?.to_luma16())
    }

    fn composite(&self, slots: &SlotAssignment<'_, Self::Channel>) -> Result<Self::Output> {
        let (width, height) = Self::dimensions(slots)?;
        let sample =
            |img: Option<&ChannelImage>, x: u32, y: u32| img.map_or(0, |i| i.get_pixel(x, y).0[0]);

        let mut out = CompositeImage::new(width, height);
        for (x, y, pixel) in out.enumerate_pixels_mut() {
            let bf = sample(slots.brightfield, x, y);
            let r = sample(slots.red, x, y).saturating_add(bf);
            let g = sample(slots.green_or_yellow, x, y).saturating_add(bf);
            let b = sample(slots.blue_or_cyan, x, y).saturating_add(bf);
            *pixel = Rgb([r, g, b]);
        }

        Ok(out)
    }

    fn save(&self, image: &Self::Output, path: &Path) -> Result<()> {
        image.save(path)?;
        Ok(())
    }
}
