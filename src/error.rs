// error.rs - Failure taxonomy for the generation pipeline

use std::path::PathBuf;
use thiserror::Error;

/// A pixel grid could not be acquired from its source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("image unreadable: {0}")]
    Image(#[from] image::ImageError),
}

/// One region's pipeline failed. The driver logs these and moves on to
/// the next region; nothing already written is cleaned up.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("source unavailable: {0}")]
    Source(#[from] SourceError),

    #[error("cannot create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_wraps_decode_failures() {
        let err = image::load_from_memory(b"not an image").unwrap_err();
        let err = SourceError::from(err);
        assert!(matches!(err, SourceError::Image(_)));
        assert!(err.to_string().starts_with("image unreadable"));
    }

    #[test]
    fn region_error_display_names_the_path() {
        let err = RegionError::OutputDir {
            path: PathBuf::from("public/assets"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("public/assets"));
    }
}
