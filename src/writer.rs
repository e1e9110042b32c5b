use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Encode `img` as PNG at `path`, replacing whatever is there.
///
/// The whole file is encoded in memory before the destination is touched, so
/// a failed encode never truncates an existing icon. Compression and row
/// filter are pinned so the same raster always produces the same bytes.
/// The parent directory must already exist.
pub fn write_png(img: &DynamicImage, path: &Path) -> Result<()> {
    let bytes = encode_png(img)
        .with_context(|| format!("Failed to encode PNG {}", path.display()))?;

    fs::write(path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut bytes, CompressionType::Best, FilterType::Adaptive);
    png_compatible(img).write_with_encoder(encoder)?;

    Ok(bytes)
}

/// PNG has no float samples; HDR/EXR rasters are narrowed to 8 bits per channel
fn png_compatible(img: &DynamicImage) -> Cow<'_, DynamicImage> {
    match img {
        DynamicImage::ImageRgb32F(_) => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
        DynamicImage::ImageRgba32F(_) => Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8())),
        _ => Cow::Borrowed(img),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat, Rgb, Rgb32FImage, Rgba, Rgba32FImage, RgbaImage};

    fn sample() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(32, 32, |x, y| {
            Rgba([(x * 8) as u8, (y * 8) as u8, 0, 255])
        }))
    }

    #[test]
    fn test_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");

        write_png(&sample(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        assert_eq!(image::load_from_memory(&bytes).unwrap().dimensions(), (32, 32));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        fs::write(&path, vec![0u8; 100_000]).unwrap();

        write_png(&sample(), &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(bytes.len() < 100_000);
        assert!(image::load_from_memory(&bytes).is_ok());
    }

    #[test]
    fn test_same_bytes_every_time() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");

        write_png(&sample(), &a).unwrap();
        write_png(&sample(), &b).unwrap();

        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");

        assert!(write_png(&sample(), &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_float_rasters_encode() {
        let rgb = DynamicImage::ImageRgb32F(Rgb32FImage::from_pixel(20, 10, Rgb([1.0, 0.5, 0.0])));
        let decoded = image::load_from_memory(&encode_png(&rgb).unwrap()).unwrap();
        assert_eq!(decoded.dimensions(), (20, 10));
        assert_eq!(decoded.to_rgb8().get_pixel(0, 0)[0], 255);

        let rgba = DynamicImage::ImageRgba32F(Rgba32FImage::from_pixel(8, 8, Rgba([0.0, 0.0, 1.0, 1.0])));
        let decoded = image::load_from_memory(&encode_png(&rgba).unwrap()).unwrap();
        assert_eq!(decoded.dimensions(), (8, 8));
    }

    #[test]
    fn test_every_color_type_encodes() {
        let base = sample();
        let variants = [
            DynamicImage::ImageLuma8(base.to_luma8()),
            DynamicImage::ImageLumaA8(base.to_luma_alpha8()),
            DynamicImage::ImageRgb8(base.to_rgb8()),
            DynamicImage::ImageLuma16(base.to_luma16()),
            DynamicImage::ImageLumaA16(base.to_luma_alpha16()),
            DynamicImage::ImageRgb16(base.to_rgb16()),
            DynamicImage::ImageRgba16(base.to_rgba16()),
            DynamicImage::ImageRgb32F(base.to_rgb32f()),
            DynamicImage::ImageRgba32F(base.to_rgba32f()),
        ];

        for img in &variants {
            assert!(encode_png(img).is_ok(), "{:?}", img.color());
        }
    }

    #[test]
    fn test_float_raster_replaces_existing_icon() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pwa-192x192.png");
        fs::write(&path, b"old icon data").unwrap();

        let hdr = DynamicImage::ImageRgb32F(Rgb32FImage::from_pixel(16, 16, Rgb([0.2, 0.4, 0.6])));
        write_png(&hdr, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        assert_eq!(image::load_from_memory(&bytes).unwrap().dimensions(), (16, 16));
    }

    #[test]
    fn test_failed_write_keeps_existing_file() {
        // A directory in the icon's place makes the write fail after encoding
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favicon.png");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), b"untouched").unwrap();

        assert!(write_png(&sample(), &path).is_err());
        assert_eq!(fs::read(path.join("keep.txt")).unwrap(), b"untouched");
    }
}
