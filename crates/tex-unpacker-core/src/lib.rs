//! Core library for unpacking texture atlases.
//!
//! - Parser: line-oriented sprite-sheet index format (page-image header plus
//!   indented `key: value` attributes) into ordered `Region`s
//! - Extraction: crops each region out of the page image, restoring 90°
//!   packed rotation, and encodes lossless PNG
//! - Bundling: named sprites into a single ZIP (`images/<name>.png`),
//!   optionally with an embedded JSON manifest
//!
//! Quick example:
//! ```ignore
//! use image::ImageReader;
//! use tex_unpacker_core::{bundle_sprites, unpack_atlas, UnpackerConfig};
//! # fn main() -> anyhow::Result<()> {
//! let page = ImageReader::open("sheet.png")?.decode()?;
//! let text = std::fs::read_to_string("sheet.atlas")?;
//! let out = unpack_atlas(&text, "sheet", &page)?;
//! let bundle = bundle_sprites(&out.sprites, &UnpackerConfig::default())?;
//! std::fs::write("sheet.zip", bundle)?;
//! # Ok(()) }
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod worker;

pub use archive::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use extract::*;
pub use model::*;
pub use parser::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `tex_unpacker_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::archive::bundle_sprites;
    pub use crate::config::{ArchiveCompression, UnpackerConfig, UnpackerConfigBuilder};
    pub use crate::error::{Result, UnpackError};
    pub use crate::extract::{unpack_geometry, SampleTransform};
    pub use crate::model::{Extent, Point, Region, Sprite, UnpackStats};
    pub use crate::parser::{parse_atlas, parse_regions, ParsedAtlas};
    pub use crate::pipeline::{extract_regions, unpack_atlas, UnpackOutput};
}
