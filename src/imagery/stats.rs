use ndarray::Array3;

/// Mean brightness above which a composite counts as usable data
/// (0-255 scale). The threshold is exclusive: a mean of exactly this
/// value is still treated as dark/cloud-obscured.
pub const VALID_BRIGHTNESS_THRESHOLD: f64 = 10.0;

/// Arithmetic mean over every channel value in the array
pub fn mean_brightness(array: &Array3<u8>) -> f64 {
    if array.is_empty() {
        return 0.0;
    }
    let sum: f64 = array.iter().map(|&v| v as f64).sum();
    sum / array.len() as f64
}

/// Whether the array passes the brightness validity check
pub fn has_valid_data(array: &Array3<u8>) -> bool {
    mean_brightness(array) > VALID_BRIGHTNESS_THRESHOLD
}
