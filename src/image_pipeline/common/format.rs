//! Storage format dispatch
//!
//! The choice between the HDR pipeline and the SDR pass-through path is a
//! pure function of the path's extension. All extension handling lives here
//! so call sites dispatch on an enum instead of comparing strings.

use std::path::Path;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// On-disk image formats the pipeline knows how to load and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    /// OpenEXR, linear float HDR. Goes through the tone-mapping pipeline.
    Exr,
    /// 8-bit SDR formats, loaded and saved as-is with no transform.
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl StorageFormat {
    /// Resolves the format from a path's extension, case-insensitively.
    ///
    /// Fails with `UnsupportedFormat` when the extension is missing or not
    /// one of the known formats.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ConversionError::UnsupportedFormat(path.display().to_string()))?;

        match ext.to_ascii_lowercase().as_str() {
            "exr" => Ok(Self::Exr),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "bmp" => Ok(Self::Bmp),
            "tif" | "tiff" => Ok(Self::Tiff),
            other => Err(ConversionError::UnsupportedFormat(other.to_string())),
        }
    }

    /// True for formats that carry linear float data and need tone mapping.
    pub fn is_hdr(&self) -> bool {
        matches!(self, Self::Exr)
    }

    /// The `image` crate format for SDR variants. `None` for EXR, which is
    /// handled by the dedicated HDR reader/writer instead.
    pub fn raster_format(&self) -> Option<image::ImageFormat> {
        match self {
            Self::Exr => None,
            Self::Png => Some(image::ImageFormat::Png),
            Self::Jpeg => Some(image::ImageFormat::Jpeg),
            Self::Bmp => Some(image::ImageFormat::Bmp),
            Self::Tiff => Some(image::ImageFormat::Tiff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_dispatch() {
        assert_eq!(StorageFormat::from_path("scene.exr").unwrap(), StorageFormat::Exr);
        assert_eq!(StorageFormat::from_path("out.png").unwrap(), StorageFormat::Png);
        assert_eq!(StorageFormat::from_path("photo.jpeg").unwrap(), StorageFormat::Jpeg);
        assert_eq!(StorageFormat::from_path("scan.tif").unwrap(), StorageFormat::Tiff);
    }

    #[test]
    fn test_extension_case_insensitive() {
        assert_eq!(StorageFormat::from_path("SCENE.EXR").unwrap(), StorageFormat::Exr);
        assert_eq!(StorageFormat::from_path("out.PnG").unwrap(), StorageFormat::Png);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(matches!(
            StorageFormat::from_path("doc.webp"),
            Err(ConversionError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            StorageFormat::from_path("no_extension"),
            Err(ConversionError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_hdr_classification() {
        assert!(StorageFormat::Exr.is_hdr());
        assert!(!StorageFormat::Png.is_hdr());
        assert!(StorageFormat::Exr.raster_format().is_none());
        assert_eq!(StorageFormat::Bmp.raster_format(), Some(image::ImageFormat::Bmp));
    }
}
