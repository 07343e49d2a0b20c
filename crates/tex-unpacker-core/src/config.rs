use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Archive entry compression.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveCompression {
    /// Deflate every entry. PNG payloads still shrink a little (headers,
    /// repeated chunks across sprites).
    #[default]
    Deflate,
    /// Store entries uncompressed.
    Stored,
}

impl ArchiveCompression {
    pub(crate) fn method(self) -> zip::CompressionMethod {
        match self {
            Self::Deflate => zip::CompressionMethod::Deflated,
            Self::Stored => zip::CompressionMethod::Stored,
        }
    }
}

impl FromStr for ArchiveCompression {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deflate" | "deflated" => Ok(Self::Deflate),
            "stored" | "store" | "none" => Ok(Self::Stored),
            _ => Err(()),
        }
    }
}

/// Bundling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnpackerConfig {
    /// Subdirectory inside the archive that receives sprite files.
    pub folder: String,
    /// Entry compression for the bundle.
    pub compression: ArchiveCompression,
    /// Embed a `manifest.json` describing the bundled sprites.
    pub manifest: bool,
}

impl Default for UnpackerConfig {
    fn default() -> Self {
        Self {
            folder: "images".into(),
            compression: ArchiveCompression::default(),
            manifest: false,
        }
    }
}

impl UnpackerConfig {
    /// Create a fluent builder for `UnpackerConfig`.
    pub fn builder() -> UnpackerConfigBuilder {
        UnpackerConfigBuilder::new()
    }
}

pub struct UnpackerConfigBuilder {
    cfg: UnpackerConfig,
}

impl UnpackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: UnpackerConfig::default(),
        }
    }
    pub fn folder(mut self, v: impl Into<String>) -> Self {
        self.cfg.folder = v.into();
        self
    }
    pub fn compression(mut self, v: ArchiveCompression) -> Self {
        self.cfg.compression = v;
        self
    }
    pub fn manifest(mut self, v: bool) -> Self {
        self.cfg.manifest = v;
        self
    }
    pub fn build(self) -> UnpackerConfig {
        self.cfg
    }
}

impl Default for UnpackerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
