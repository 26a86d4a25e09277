//! Core data types for terrascope

/// Represents image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Creates new dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the total number of pixels
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Fixed output size for provider requests
pub const OUTPUT_SIZE: Dimensions = Dimensions {
    width: 512,
    height: 512,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let dims = Dimensions::new(100, 200);
        assert_eq!(dims.width, 100);
        assert_eq!(dims.height, 200);
        assert_eq!(dims.pixel_count(), 20000);
    }

    #[test]
    fn test_output_size() {
        assert_eq!(OUTPUT_SIZE.width, 512);
        assert_eq!(OUTPUT_SIZE.height, 512);
    }
}
