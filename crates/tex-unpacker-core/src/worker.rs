//! Request/response contract for driving unpacking from an orchestration
//! layer (task queue, worker thread, RPC shim). Each request carries an
//! opaque id echoed on its response; failures come back as [`Response::Failed`]
//! with a message string and abort only their own request.

use image::DynamicImage;

use crate::archive::bundle_sprites;
use crate::config::UnpackerConfig;
use crate::model::Sprite;
use crate::pipeline::unpack_atlas;

/// Unit of work submitted to [`handle`].
pub enum Request {
    /// Parse `atlas_text` against `page` and extract every region.
    ProcessAtlas {
        request_id: u64,
        atlas_name: String,
        atlas_text: String,
        page: DynamicImage,
    },
    /// Bundle previously extracted sprites into one archive.
    Bundle {
        request_id: u64,
        sprites: Vec<Sprite>,
    },
}

impl Request {
    pub fn request_id(&self) -> u64 {
        match self {
            Request::ProcessAtlas { request_id, .. } => *request_id,
            Request::Bundle { request_id, .. } => *request_id,
        }
    }
}

/// Outcome of one request.
#[derive(Debug)]
pub enum Response {
    AtlasProcessed {
        request_id: u64,
        atlas_name: String,
        sprites: Vec<Sprite>,
    },
    BundleCreated {
        request_id: u64,
        archive: Vec<u8>,
    },
    /// The request failed; `error` describes the underlying cause. A failed
    /// atlas run yields no sprites.
    Failed {
        request_id: u64,
        error: String,
    },
}

impl Response {
    pub fn request_id(&self) -> u64 {
        match self {
            Response::AtlasProcessed { request_id, .. } => *request_id,
            Response::BundleCreated { request_id, .. } => *request_id,
            Response::Failed { request_id, .. } => *request_id,
        }
    }
}

/// Runs one request to completion, converting any raised error into
/// [`Response::Failed`].
pub fn handle(request: Request, cfg: &UnpackerConfig) -> Response {
    match request {
        Request::ProcessAtlas {
            request_id,
            atlas_name,
            atlas_text,
            page,
        } => match unpack_atlas(&atlas_text, &atlas_name, &page) {
            Ok(out) => Response::AtlasProcessed {
                request_id,
                atlas_name,
                sprites: out.sprites,
            },
            Err(e) => Response::Failed {
                request_id,
                error: e.to_string(),
            },
        },
        Request::Bundle {
            request_id,
            sprites,
        } => match bundle_sprites(&sprites, cfg) {
            Ok(archive) => Response::BundleCreated {
                request_id,
                archive,
            },
            Err(e) => Response::Failed {
                request_id,
                error: e.to_string(),
            },
        },
    }
}
