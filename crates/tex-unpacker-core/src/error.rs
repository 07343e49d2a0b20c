use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnpackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to extract sprite `{name}`: {source}")]
    Extract {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Encoding error: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, UnpackError>;
