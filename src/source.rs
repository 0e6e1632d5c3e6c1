// source.rs - Acquire a grayscale pixel grid from disk or over HTTP

use crate::error::SourceError;
use image::DynamicImage;
use image::imageops::FilterType;
use ndarray::Array2;
use std::path::PathBuf;
use tracing::info;

/// Canonical resolution every source image is resampled to before
/// segmentation.
pub const CANONICAL_SIZE: u32 = 512;

// Wikimedia blocks requests without a browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Where a region's reference image comes from.
#[derive(Clone, Debug)]
pub enum ImageSource {
    Local(PathBuf),
    Remote(&'static str),
}

impl ImageSource {
    /// Load, grayscale and resize to the canonical resolution.
    pub fn acquire(&self) -> Result<Array2<u8>, SourceError> {
        let img = match self {
            ImageSource::Local(path) => image::open(path)?,
            ImageSource::Remote(url) => fetch(url)?,
        };
        Ok(to_grid(&img))
    }
}

fn fetch(url: &str) -> Result<DynamicImage, SourceError> {
    info!("downloading {url}");
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;
    let bytes = client.get(url).send()?.error_for_status()?.bytes()?;
    Ok(image::load_from_memory(&bytes)?)
}

/// Row-major (row, col) grid of 8-bit intensities.
fn to_grid(img: &DynamicImage) -> Array2<u8> {
    let gray = img
        .resize_exact(CANONICAL_SIZE, CANONICAL_SIZE, FilterType::Lanczos3)
        .to_luma8();
    Array2::from_shape_fn(
        (gray.height() as usize, gray.width() as usize),
        |(y, x)| gray.get_pixel(x as u32, y as u32)[0],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    #[test]
    fn local_source_resizes_to_canonical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uniform.png");
        GrayImage::from_pixel(64, 48, image::Luma([200]))
            .save(&path)
            .unwrap();

        let grid = ImageSource::Local(path).acquire().unwrap();
        assert_eq!(grid.dim(), (CANONICAL_SIZE as usize, CANONICAL_SIZE as usize));
        // A uniform image stays uniform under resampling.
        assert!(grid.iter().all(|&v| v == 200));
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let err = ImageSource::Local(PathBuf::from("no/such/file.png"))
            .acquire()
            .unwrap_err();
        assert!(matches!(err, SourceError::Image(_)));
    }
}
