//! Loading of the embedded raster icons.
//!
//! Assets are read from a directory, decoded once for their pixel size, and
//! embedded into the SVG as base64 data URIs. A missing file is an error:
//! the figure is wrong without its icons, so the run fails instead of
//! silently omitting a glyph.

use crate::{Error, Result};
use base64::Engine as _;
use image::GenericImageView;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub name: String,
    pub width: u32,
    pub height: u32,
    bytes: Vec<u8>,
}

impl ImageAsset {
    pub fn data_uri(&self) -> String {
        let mut out = String::from("data:image/png;base64,");
        base64::engine::general_purpose::STANDARD.encode_string(&self.bytes, &mut out);
        out
    }
}

#[derive(Debug, Clone)]
pub struct AssetStore {
    dir: PathBuf,
}

impl AssetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load(&self, name: &str) -> Result<ImageAsset> {
        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(Error::MissingAsset { path });
        }
        let bytes = std::fs::read(&path).map_err(|source| Error::AssetRead {
            path: path.clone(),
            source,
        })?;
        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
            .map_err(|err| Error::AssetDecode {
                path: path.clone(),
                message: err.to_string(),
            })?;
        let (width, height) = decoded.dimensions();
        log::debug!("loaded asset {name}: {width}x{height} px, {} bytes", bytes.len());
        Ok(ImageAsset {
            name: name.to_string(),
            width,
            height,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        std::fs::write(dir.join(name), bytes).unwrap();
    }

    #[test]
    fn loads_dimensions_and_data_uri() {
        let tmp = tempfile::tempdir().unwrap();
        write_png(tmp.path(), "robot.png", 8, 4);

        let store = AssetStore::new(tmp.path());
        let asset = store.load("robot.png").unwrap();
        assert_eq!((asset.width, asset.height), (8, 4));
        assert!(asset.data_uri().starts_with("data:image/png;base64,iVBOR"));
    }

    #[test]
    fn missing_asset_is_an_error_naming_the_path() {
        let tmp = tempfile::tempdir().unwrap();
        let store = AssetStore::new(tmp.path());
        let err = store.load("robot_student.png").unwrap_err();
        assert!(matches!(err, Error::MissingAsset { .. }));
        assert!(err.to_string().contains("robot_student.png"));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("bad.png"), b"not a png").unwrap();
        let store = AssetStore::new(tmp.path());
        assert!(matches!(
            store.load("bad.png"),
            Err(Error::AssetDecode { .. })
        ));
    }
}
