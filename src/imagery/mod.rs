//! Post-processing of fetched pixel arrays
//!
//! Covers the brightness validity check and PNG artifact handling.

pub mod artifact;
pub mod stats;

pub use artifact::{encode_png, ArtifactStore};
pub use stats::{has_valid_data, mean_brightness, VALID_BRIGHTNESS_THRESHOLD};
