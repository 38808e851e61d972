//! Photo and overlay decoding for display.
//!
//! Kept free of texture handles so the decoding path stays unit-testable;
//! views turn the returned [`egui::ColorImage`] into a texture themselves.

use egui::ColorImage;

/// Decode JPEG/PNG bytes into an egui color image
pub fn decode_image(bytes: &[u8]) -> Result<ColorImage, String> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| format!("could not decode image: {}", e))?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Read and decode an image file chosen by the user
pub fn load_image_file(path: &str) -> Result<Vec<u8>, String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err("No file selected".to_string());
    }
    let bytes =
        std::fs::read(trimmed).map_err(|e| format!("could not read {}: {}", trimmed, e))?;
    // Reject files that are not decodable images before anything is uploaded
    image::load_from_memory(&bytes).map_err(|e| format!("not a usable image: {}", e))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest valid 1x1 PNG, shared with the integration suite
    const TINY_PNG: &[u8] = include_bytes!("../../tests/fixtures/tiny.png");

    #[test]
    fn test_decode_png() {
        let img = decode_image(TINY_PNG).unwrap();
        assert_eq!(img.size, [1, 1]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_image(b"not an image").is_err());
    }

    #[test]
    fn test_load_rejects_blank_path() {
        assert!(load_image_file("   ").is_err());
    }

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        std::fs::write(&path, TINY_PNG).unwrap();
        let bytes = load_image_file(path.to_str().unwrap()).unwrap();
        assert_eq!(bytes, TINY_PNG);
    }

    #[test]
    fn test_load_rejects_non_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").unwrap();
        assert!(load_image_file(path.to_str().unwrap()).is_err());
    }
}
