use serde::{Deserialize, Serialize};

/// Top-left offset of a packed sprite within its page image (pixels).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Sprite dimensions as stored in the page image (pre-unrotation).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Extent {
    pub w: u32,
    pub h: u32,
}

impl Extent {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
}

/// One parsed atlas entry: where a sprite sits in the page image and how it
/// is oriented there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Region {
    /// Atlas page this region belongs to.
    pub atlas: String,
    /// Sprite identifier. Unique per page by convention; on clashes the last
    /// entry in source order wins at bundling time.
    pub name: String,
    /// True if the sprite is stored rotated 90° clockwise in the page image.
    pub rotate: bool,
    /// Top-left offset of the packed sprite.
    pub xy: Point,
    /// Stored dimensions. Width/height are swapped relative to the logical
    /// sprite when `rotate` is set.
    pub size: Extent,
}

impl Region {
    /// Fresh region with default placement, as opened by a sprite-name line.
    pub fn new(atlas: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            atlas: atlas.into(),
            name: name.into(),
            rotate: false,
            xy: Point::default(),
            size: Extent::default(),
        }
    }

    /// Logical (post-unrotation) sprite dimensions.
    pub fn logical_size(&self) -> Extent {
        if self.rotate {
            Extent::new(self.size.h, self.size.w)
        } else {
            self.size
        }
    }
}

/// An extracted sprite: logical dimensions plus encoded image bytes.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub name: String,
    pub atlas: String,
    pub width: u32,
    pub height: u32,
    /// Encoded image bytes (lossless PNG).
    pub data: Vec<u8>,
}

/// Statistics about a parsed atlas index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UnpackStats {
    /// Total number of regions in the index.
    pub num_regions: usize,
    /// Number of regions stored rotated.
    pub num_rotated: usize,
    /// Total area of all sprites (sum of width * height, pixels).
    pub total_sprite_area: u64,
    /// Largest logical sprite dimensions.
    pub max_sprite_width: u32,
    pub max_sprite_height: u32,
}

impl UnpackStats {
    /// Computes statistics for a parsed region list.
    pub fn from_regions(regions: &[Region]) -> Self {
        let mut num_rotated = 0;
        let mut total_sprite_area = 0u64;
        let mut max_sprite_width = 0u32;
        let mut max_sprite_height = 0u32;

        for region in regions {
            if region.rotate {
                num_rotated += 1;
            }
            let logical = region.logical_size();
            total_sprite_area += logical.area();
            max_sprite_width = max_sprite_width.max(logical.w);
            max_sprite_height = max_sprite_height.max(logical.h);
        }

        Self {
            num_regions: regions.len(),
            num_rotated,
            total_sprite_area,
            max_sprite_width,
            max_sprite_height,
        }
    }

    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Regions: {}, Rotated: {}, Sprite Area: {} px², Max Sprite: {}x{}",
            self.num_regions,
            self.num_rotated,
            self.total_sprite_area,
            self.max_sprite_width,
            self.max_sprite_height,
        )
    }
}
