//! Bundle extracted sprites into a single in-memory ZIP archive.

use std::collections::HashMap;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::config::UnpackerConfig;
use crate::error::{Result, UnpackError};
use crate::export::to_json_array;
use crate::model::Sprite;

/// Bundles sprites into one ZIP, each under `<folder>/<name>.png`.
///
/// Duplicate sprite names collapse to the last sprite's bytes at the first
/// occurrence's entry position, so the entry order is deterministic and any
/// reader agrees on the bytes. With `cfg.manifest` set, a `manifest.json`
/// describing the bundled sprites is added at the archive root.
pub fn bundle_sprites(sprites: &[Sprite], cfg: &UnpackerConfig) -> Result<Vec<u8>> {
    let mut order: Vec<&str> = Vec::new();
    let mut latest: HashMap<&str, &Sprite> = HashMap::new();
    for sprite in sprites {
        if latest.insert(sprite.name.as_str(), sprite).is_none() {
            order.push(sprite.name.as_str());
        }
    }

    let mut buf = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buf));
        let options =
            SimpleFileOptions::default().compression_method(cfg.compression.method());

        for name in &order {
            let sprite = latest[name];
            zip.start_file(format!("{}/{}.png", cfg.folder, name), options)?;
            zip.write_all(&sprite.data)?;
        }

        if cfg.manifest {
            let bundled: Vec<Sprite> = order.iter().map(|n| latest[n].clone()).collect();
            let manifest = serde_json::to_vec_pretty(&to_json_array(&bundled))
                .map_err(|e| UnpackError::Encode(e.to_string()))?;
            zip.start_file("manifest.json", options)?;
            zip.write_all(&manifest)?;
        }

        zip.finish()?;
    }
    Ok(buf)
}
