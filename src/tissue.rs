// tissue.rs - Tissue categories, reference parameters, brightness rules
//
// The brightness table is hand-tuned for visual plausibility, not a
// physics simulation. The few uncovered (tissue, sequence) pairs fall
// back to a formula over the reference relaxation parameters.

use ndarray::Array2;

/// Coarse anatomical class assigned per pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tissue {
    Csf,
    Wm,
    Gm,
    Fat,
    Bone,
    Muscle,
}

/// Reference relaxation times (ms) and proton density for one tissue.
/// Bone is a signal void, approximated as near zero.
#[derive(Clone, Copy, Debug)]
pub struct TissueParams {
    pub t1: f32,
    pub t2: f32,
    pub pd: f32,
}

impl Tissue {
    pub const ALL: [Tissue; 6] = [
        Tissue::Csf,
        Tissue::Wm,
        Tissue::Gm,
        Tissue::Fat,
        Tissue::Bone,
        Tissue::Muscle,
    ];

    pub const fn params(self) -> TissueParams {
        match self {
            Tissue::Csf => TissueParams { t1: 2400.0, t2: 160.0, pd: 1.0 },
            Tissue::Wm => TissueParams { t1: 600.0, t2: 80.0, pd: 0.7 },
            Tissue::Gm => TissueParams { t1: 950.0, t2: 100.0, pd: 0.8 },
            Tissue::Fat => TissueParams { t1: 250.0, t2: 60.0, pd: 0.9 },
            Tissue::Bone => TissueParams { t1: 1.0, t2: 1.0, pd: 0.05 },
            Tissue::Muscle => TissueParams { t1: 900.0, t2: 50.0, pd: 0.75 },
        }
    }
}

/// Synthetic contrast weighting to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sequence {
    T1,
    T2,
    Flair,
    Pd,
}

impl Sequence {
    pub const ALL: [Sequence; 4] = [Sequence::T1, Sequence::T2, Sequence::Flair, Sequence::Pd];

    /// Lowercase tag used in output filenames.
    pub fn file_tag(self) -> &'static str {
        match self {
            Sequence::T1 => "t1",
            Sequence::T2 => "t2",
            Sequence::Flair => "flair",
            Sequence::Pd => "pd",
        }
    }
}

/// Pixel intensity for a tissue under a given sequence, clamped to
/// [0, 255] and truncated.
pub fn brightness(tissue: Tissue, sequence: Sequence) -> u8 {
    let p = tissue.params();
    let val: f32 = match sequence {
        Sequence::T1 => match tissue {
            Tissue::Fat => 240.0,
            Tissue::Csf => 15.0,
            Tissue::Wm => 180.0,
            Tissue::Gm => 110.0,
            Tissue::Bone => 0.0,
            _ => (255.0 - p.t1 * 0.2).max(0.0),
        },
        Sequence::T2 => match tissue {
            Tissue::Csf => 255.0,
            Tissue::Fat => 100.0,
            Tissue::Wm => 80.0,
            Tissue::Gm => 120.0,
            Tissue::Bone => 0.0,
            _ => p.t2 * 2.5,
        },
        // T2 with CSF nulled. GM intentionally brighter than WM.
        Sequence::Flair => match tissue {
            Tissue::Csf => 0.0,
            Tissue::Wm => 70.0,
            Tissue::Gm => 100.0,
            Tissue::Fat => 90.0,
            Tissue::Bone => 0.0,
            _ => p.t2 * 2.5,
        },
        Sequence::Pd => match tissue {
            Tissue::Bone => 0.0,
            _ => p.pd * 240.0,
        },
    };
    val.clamp(0.0, 255.0) as u8
}

/// Substitute the per-tissue brightness for one sequence into every cell.
/// Output shape always matches the label grid.
pub fn render(labels: &Array2<Tissue>, sequence: Sequence) -> Array2<u8> {
    labels.mapv(|t| brightness(t, sequence))
}
