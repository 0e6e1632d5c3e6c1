// synthmri - Synthesize pseudo-MRI contrast images (T1/T2/FLAIR/PD) from
// reference photographs by bucketing pixels into tissue categories and
// re-coloring each category with a per-sequence brightness lookup.

pub mod error;
pub mod pipeline;
pub mod segment;
pub mod source;
pub mod tissue;
