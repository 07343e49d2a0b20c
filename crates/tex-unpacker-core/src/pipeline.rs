use crate::error::{Result, UnpackError};
use crate::extract::{crop_region, encode_png};
use crate::model::{Region, Sprite};
use crate::parser::parse_atlas;
use image::DynamicImage;
use tracing::{debug, instrument};

/// Output of one unpack run: the page-image filename recorded from the index
/// (if any) and the extracted sprites in region order.
pub struct UnpackOutput {
    pub image_file: Option<String>,
    pub sprites: Vec<Sprite>,
}

#[instrument(skip_all, fields(atlas = %atlas_name))]
/// Parses `atlas_text` and extracts every region from `page`, in source
/// order. One failing region fails the whole run; empty input yields an
/// empty sprite list.
pub fn unpack_atlas(
    atlas_text: &str,
    atlas_name: &str,
    page: &DynamicImage,
) -> Result<UnpackOutput> {
    let parsed = parse_atlas(atlas_text, atlas_name);
    debug!(
        regions = parsed.regions.len(),
        image_file = ?parsed.image_file,
        "parsed atlas index"
    );
    let sprites = extract_regions(&parsed.regions, page)?;
    Ok(UnpackOutput {
        image_file: parsed.image_file,
        sprites,
    })
}

#[instrument(skip_all)]
/// Extracts one sprite per region, strictly sequentially, preserving region
/// order. Each region gets its own scratch surface; the only shared input is
/// the read-only page image.
pub fn extract_regions(regions: &[Region], page: &DynamicImage) -> Result<Vec<Sprite>> {
    let page = page.to_rgba8();
    let mut sprites = Vec::with_capacity(regions.len());
    for region in regions {
        let surface = crop_region(&page, region);
        let data = encode_png(&surface).map_err(|source| UnpackError::Extract {
            name: region.name.clone(),
            source,
        })?;
        debug!(
            name = %region.name,
            w = surface.width(),
            h = surface.height(),
            rotate = region.rotate,
            "extracted sprite"
        );
        sprites.push(Sprite {
            name: region.name.clone(),
            atlas: region.atlas.clone(),
            width: surface.width(),
            height: surface.height(),
            data,
        });
    }
    Ok(sprites)
}
