use crate::model::Sprite;
use serde_json::{json, Value};

/// Serialize extracted sprites as a JSON object `{ sprites: [..], meta }`
/// (array style, source order preserved). Suitable for generic tooling.
pub fn to_json_array(sprites: &[Sprite]) -> Value {
    let entries: Vec<Value> = sprites.iter().map(sprite_value).collect();
    json!({ "sprites": entries, "meta": meta_value(sprites) })
}

/// Flatten sprites keyed by name. Duplicate names keep the last entry,
/// matching the archive's overwrite rule.
/// Shape: `{ sprites: { name: { atlas, width, height, file } }, meta }`.
pub fn to_json_hash(sprites: &[Sprite]) -> Value {
    let mut map = serde_json::Map::new();
    for sprite in sprites {
        map.insert(sprite.name.clone(), sprite_value(sprite));
    }
    json!({ "sprites": map, "meta": meta_value(sprites) })
}

fn sprite_value(sprite: &Sprite) -> Value {
    json!({
        "name": sprite.name,
        "atlas": sprite.atlas,
        "width": sprite.width,
        "height": sprite.height,
        "file": format!("{}.png", sprite.name),
    })
}

fn meta_value(sprites: &[Sprite]) -> Value {
    json!({
        "app": "tex-unpacker",
        "version": env!("CARGO_PKG_VERSION"),
        "format": "png",
        "count": sprites.len(),
    })
}
