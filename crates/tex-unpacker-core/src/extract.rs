//! Pixel-level region extraction: crop a packed rect out of a page image,
//! restoring packed rotation, and encode the result as lossless PNG.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::io::Cursor;

use crate::model::{Extent, Region};

/// Pixel remap applied when sampling the packed rect into the logical
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleTransform {
    /// Direct copy; packed orientation equals logical orientation.
    Identity,
    /// Packed content is stored rotated 90° clockwise; sampling rotates it
    /// back counter-clockwise.
    RestoreCcw,
}

impl SampleTransform {
    /// Maps a logical output pixel to its offset within the packed rect.
    pub fn source_offset(self, x: u32, y: u32, packed: Extent) -> (u32, u32) {
        match self {
            SampleTransform::Identity => (x, y),
            SampleTransform::RestoreCcw => (packed.w - 1 - y, x),
        }
    }
}

/// Pure geometry for one region: logical output size plus the sampling remap
/// that reorients the packed content. No rasterizer involved, so the
/// transform is testable on its own.
pub fn unpack_geometry(size: Extent, rotate: bool) -> (Extent, SampleTransform) {
    if rotate {
        (Extent::new(size.h, size.w), SampleTransform::RestoreCcw)
    } else {
        (size, SampleTransform::Identity)
    }
}

/// Copy the packed rect for `region` out of `page` into a fresh surface of
/// logical size. Samples outside the page bounds stay transparent; bounds
/// are not pre-validated.
pub fn crop_region(page: &RgbaImage, region: &Region) -> RgbaImage {
    let (size, transform) = unpack_geometry(region.size, region.rotate);
    let (pw, ph) = page.dimensions();
    let mut out = RgbaImage::new(size.w, size.h);
    for yy in 0..size.h {
        for xx in 0..size.w {
            let (ox, oy) = transform.source_offset(xx, yy, region.size);
            // widen: xy plus the packed size may exceed u32
            let sx = region.xy.x as u64 + ox as u64;
            let sy = region.xy.y as u64 + oy as u64;
            if sx < pw as u64 && sy < ph as u64 {
                out.put_pixel(xx, yy, *page.get_pixel(sx as u32, sy as u32));
            }
        }
    }
    out
}

/// Encode a surface as lossless PNG.
pub fn encode_png(surface: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut data = Vec::new();
    let encoder = PngEncoder::new(Cursor::new(&mut data));
    encoder.write_image(
        surface.as_raw(),
        surface.width(),
        surface.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(data)
}
