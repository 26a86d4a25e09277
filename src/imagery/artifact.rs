use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};
use ndarray::Array3;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Encodes an RGB pixel array of shape (height, width, 3) as PNG bytes
pub fn encode_png(array: &Array3<u8>) -> Result<Vec<u8>> {
    let shape = array.shape();
    let (height, width, channels) = (shape[0], shape[1], shape[2]);
    if channels != 3 {
        return Err(Error::Decode(format!(
            "expected 3 channels, got {}",
            channels
        )));
    }

    let raw = array
        .as_standard_layout()
        .iter()
        .copied()
        .collect::<Vec<u8>>();

    let img = RgbImage::from_raw(width as u32, height as u32, raw)
        .ok_or_else(|| Error::Decode("pixel buffer does not match dimensions".to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| Error::Decode(format!("PNG encoding failed: {}", e)))?;

    Ok(buf.into_inner())
}

/// Content-addressed store for rendered artifacts.
///
/// Files are named by the SHA-256 of their content, so identical requests
/// land on identical paths and concurrent writers never clobber each
/// other with different data.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Root directory of the store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persists encoded PNG bytes, returning the path written.
    ///
    /// Writing the same content twice is a no-op on the second call.
    pub fn write(&self, png: &[u8]) -> Result<PathBuf> {
        let digest = Sha256::digest(png);
        let name = format!("{}.png", hex::encode(&digest[..16]));
        let path = self.dir.join(name);

        if !path.exists() {
            std::fs::write(&path, png)?;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::client::decode_png_rgb;

    fn uniform(height: usize, width: usize, value: u8) -> Array3<u8> {
        Array3::from_elem((height, width, 3), value)
    }

    #[test]
    fn test_encode_roundtrip_dimensions() {
        let array = uniform(6, 9, 128);
        let png = encode_png(&array).unwrap();
        let decoded = decode_png_rgb(&png).unwrap();
        assert_eq!(decoded.shape(), &[6, 9, 3]);
        assert_eq!(decoded, array);
    }

    #[test]
    fn test_store_writes_nonempty_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path().join("images")).unwrap();

        let png = encode_png(&uniform(4, 4, 255)).unwrap();
        let path = store.write(&png).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_store_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path()).unwrap();

        let png = encode_png(&uniform(4, 4, 200)).unwrap();
        let first = store.write(&png).unwrap();
        let second = store.write(&png).unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_distinct_content_distinct_paths() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path()).unwrap();

        let a = store.write(&encode_png(&uniform(4, 4, 10)).unwrap()).unwrap();
        let b = store.write(&encode_png(&uniform(4, 4, 20)).unwrap()).unwrap();
        assert_ne!(a, b);
    }
}
