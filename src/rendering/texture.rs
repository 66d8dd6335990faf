//! Sphere textures loaded from disk at startup.

use std::path::{Path, PathBuf};

use crate::error::{Result, SketchError};
use crate::params::sketch_constants::TEXTURE_COUNT;

/// Decoded RGBA8 image ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Single opaque white texel, used for untextured drawing
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
        }
    }

    /// Decode `path`, rejecting images wider or taller than `max_dimension`
    pub fn load(path: &Path, max_dimension: u32) -> Result<Self> {
        let image = image::open(path)
            .map_err(|source| SketchError::Texture {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        let (width, height) = image.dimensions();
        if width > max_dimension || height > max_dimension {
            return Err(SketchError::TextureTooLarge {
                path: path.to_path_buf(),
                width,
                height,
                max: max_dimension,
            });
        }
        Ok(Self {
            width,
            height,
            rgba: image.into_raw(),
        })
    }
}

/// Path of texture `index` inside `dir`
fn texture_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("{}.png", index))
}

/// Load `0.png` … `5.png` from `dir`.
///
/// Missing or unreadable files are logged and replaced with white so the
/// texture index space stays intact, as are images beyond the default GPU
/// texture size. Without a directory every slot is white.
pub fn load_texture_set(dir: Option<&Path>) -> Vec<TextureImage> {
    load_texture_set_within(dir, wgpu::Limits::default().max_texture_dimension_2d)
}

fn load_texture_set_within(dir: Option<&Path>, max_dimension: u32) -> Vec<TextureImage> {
    (0..TEXTURE_COUNT)
        .map(|index| match dir {
            Some(dir) => {
                let path = texture_path(dir, index);
                match TextureImage::load(&path, max_dimension) {
                    Ok(image) => {
                        log::info!(
                            "Texture {}: {} ({}x{})",
                            index,
                            path.display(),
                            image.width,
                            image.height
                        );
                        image
                    }
                    Err(e) => {
                        log::warn!("{}; using flat white", e);
                        TextureImage::white()
                    }
                }
            }
            None => TextureImage::white(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_dir(name: &str) -> PathBuf {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("spectrosphere_{stamp}_{name}"));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_without_dir_all_white() {
        let set = load_texture_set(None);
        assert_eq!(set.len(), TEXTURE_COUNT);
        assert!(set.iter().all(|t| *t == TextureImage::white()));
    }

    #[test]
    fn test_loads_present_files_and_fills_gaps() {
        let dir = unique_dir("textures");
        let mut img = image::RgbaImage::new(2, 3);
        img.put_pixel(0, 0, image::Rgba([10, 20, 30, 255]));
        img.save(texture_path(&dir, 1)).unwrap();

        let set = load_texture_set(Some(&dir));
        assert_eq!(set.len(), TEXTURE_COUNT);
        assert_eq!(set[0], TextureImage::white());
        assert_eq!((set[1].width, set[1].height), (2, 3));
        assert_eq!(&set[1].rgba[..4], &[10, 20, 30, 255]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_oversized_texture_falls_back_to_white() {
        let dir = unique_dir("oversized");
        image::RgbaImage::new(5, 2)
            .save(texture_path(&dir, 0))
            .unwrap();
        image::RgbaImage::new(4, 4)
            .save(texture_path(&dir, 1))
            .unwrap();

        assert!(matches!(
            TextureImage::load(&texture_path(&dir, 0), 4),
            Err(SketchError::TextureTooLarge { width: 5, height: 2, max: 4, .. })
        ));

        let set = load_texture_set_within(Some(&dir), 4);
        assert_eq!(set[0], TextureImage::white());
        assert_eq!((set[1].width, set[1].height), (4, 4));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_is_texture_error() {
        let result = TextureImage::load(Path::new("/nonexistent/0.png"), 8192);
        assert!(matches!(result, Err(SketchError::Texture { .. })));
    }
}
