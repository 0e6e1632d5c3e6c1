// segment.rs - Threshold-band tissue classification
//
// Each region preset encodes an anatomy-specific prior about which
// intensity range corresponds to which tissue on that source image's
// acquisition protocol. Cells are classified independently; no spatial
// coherence or morphological cleanup.

use crate::tissue::Tissue;
use ndarray::Array2;

/// Ordered half-open intensity bands over [0, 256). The first band whose
/// exclusive upper bound exceeds the intensity wins; anything past the
/// last bound gets the named default.
#[derive(Clone, Copy, Debug)]
pub struct Segmenter {
    bands: &'static [(u16, Tissue)],
    default: Tissue,
}

impl Segmenter {
    pub const fn new(bands: &'static [(u16, Tissue)], default: Tissue) -> Self {
        Self { bands, default }
    }

    pub fn bands(&self) -> &'static [(u16, Tissue)] {
        self.bands
    }

    pub fn classify(&self, intensity: u8) -> Tissue {
        let v = intensity as u16;
        for &(upper, tissue) in self.bands {
            if v < upper {
                return tissue;
            }
        }
        self.default
    }

    /// Label every cell. Output shape always matches the input grid.
    pub fn label(&self, pixels: &Array2<u8>) -> Array2<Tissue> {
        pixels.mapv(|v| self.classify(v))
    }
}

/// Generic head, T1 axial: black background, dark CSF, mid GM, bright WM,
/// white fat/scalp.
pub const BRAIN: Segmenter = Segmenter::new(
    &[
        (25, Tissue::Bone),
        (60, Tissue::Csf),
        (110, Tissue::Gm),
        (190, Tissue::Wm),
        (256, Tissue::Fat),
    ],
    Tissue::Bone,
);

/// Spine, T1 sagittal. CSF and cortical bone are both dark; cord and
/// muscle are approximated as GM, marrow as WM.
pub const SPINE: Segmenter = Segmenter::new(
    &[
        (40, Tissue::Csf),
        (100, Tissue::Gm),
        (180, Tissue::Wm),
        (256, Tissue::Fat),
    ],
    Tissue::Bone,
);

/// Knee, T1 sagittal: cortical bone, menisci and ligaments dark, muscle
/// and cartilage gray, marrow and fat bright.
pub const KNEE: Segmenter = Segmenter::new(
    &[
        (40, Tissue::Bone),
        (100, Tissue::Muscle),
        (180, Tissue::Wm),
        (256, Tissue::Fat),
    ],
    Tissue::Bone,
);

/// Abdomen, T1 fat-sat: fat polarity is inverted. Suppressed fat appears
/// dark but is labeled FAT so it renders bright again; bright parenchyma
/// (liver, spleen) is approximated as GM.
pub const ABDOMEN: Segmenter = Segmenter::new(
    &[
        (15, Tissue::Bone),
        (50, Tissue::Fat),
        (120, Tissue::Muscle),
        (256, Tissue::Gm),
    ],
    Tissue::Bone,
);
