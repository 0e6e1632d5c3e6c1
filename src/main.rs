// synthmri - Generate pseudo-MRI contrast assets
//
// Pipeline per region:
//   1. Acquire the reference image (local file or HTTP), grayscale, 512x512
//   2. Threshold into tissue categories with a region-specific band table
//   3. Re-color each category per sequence (T1, T2, FLAIR, PD)
//   4. Write {region}_{sequence}.png
//
// Regions run sequentially; a failure in one does not stop the rest.

use std::path::Path;
use synthmri::pipeline::Region;
use synthmri::segment;
use synthmri::source::ImageSource;
use tracing::{debug, error, info};

const OUTPUT_DIR: &str = "public/assets";

// Local brain scan; the brain region is skipped when the file is absent.
const BRAIN_FILE: &str = "MRI_Brain_T1_Axial_(2).jpg";

const SPINE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/c/c3/SAGITTAL-FSE_T1_MRI.jpg";
const KNEE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/e/e2/Knee_MRI_T1_TSE_Sagittal.jpg";
const ABDOMEN_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/f/f1/MRI_desmoid_T1_fl2d_FS.jpg";

fn regions() -> Vec<Region> {
    let mut list = Vec::new();
    if Path::new(BRAIN_FILE).exists() {
        list.push(Region {
            name: "brain",
            source: ImageSource::Local(BRAIN_FILE.into()),
            segmenter: segment::BRAIN,
        });
    } else {
        debug!("{BRAIN_FILE} not found, skipping brain");
    }
    list.push(Region {
        name: "spine",
        source: ImageSource::Remote(SPINE_URL),
        segmenter: segment::SPINE,
    });
    list.push(Region {
        name: "knee",
        source: ImageSource::Remote(KNEE_URL),
        segmenter: segment::KNEE,
    });
    list.push(Region {
        name: "abdomen",
        source: ImageSource::Remote(ABDOMEN_URL),
        segmenter: segment::ABDOMEN,
    });
    list
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let out_dir = Path::new(OUTPUT_DIR);
    for region in regions() {
        if let Err(e) = region.generate(out_dir) {
            error!("error processing {}: {:#}", region.name, anyhow::Error::from(e));
        }
    }
    info!("done");
}
