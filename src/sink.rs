//! Persistence boundary: where generated textures and descriptors go.
//!
//! Textures are regenerated on every run and always overwritten. Descriptors
//! are create-only, so a hand-edited descriptor is never replaced.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::warn;

use crate::composer::Texture;
use crate::descriptor::ItemDescriptor;
use crate::error::{Error, Result};

/// Accepts rendered textures.
pub trait TextureSink {
    /// Stores `texture`, replacing any previous version. Returns where it went.
    fn put_texture(&mut self, texture: &Texture) -> Result<PathBuf>;
}

/// Accepts descriptor documents.
pub trait DescriptorSink {
    /// Stores `descriptor` under `name` unless one already exists.
    fn create_descriptor(&mut self, name: &str, descriptor: &ItemDescriptor) -> Result<WriteOutcome>;
}

/// What a create-only write did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Created(PathBuf),
    /// A document already existed at the path and was left untouched.
    Skipped(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::Skipped(path) => path,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

// ============================================================================
// ResourcePackDir
// ============================================================================

/// A resource pack directory on disk.
///
/// ```text
/// <root>/assets/<namespace>/textures/{item,block,gui}/<name>.png
/// <root>/assets/<namespace>/items/<name>.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePackDir {
    root: PathBuf,
    namespace: String,
}

impl ResourcePackDir {
    pub fn new(root: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            namespace: namespace.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/assets/<namespace>`
    pub fn assets_dir(&self) -> PathBuf {
        self.root.join("assets").join(&self.namespace)
    }

    pub fn texture_path(&self, texture: &Texture) -> PathBuf {
        self.assets_dir()
            .join("textures")
            .join(texture.kind.as_str())
            .join(format!("{}.png", texture.name))
    }

    pub fn descriptor_path(&self, name: &str) -> PathBuf {
        self.assets_dir().join("items").join(format!("{name}.json"))
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) => fs::create_dir_all(dir).map_err(|e| Error::io(dir, e)),
        None => Ok(()),
    }
}

impl TextureSink for ResourcePackDir {
    fn put_texture(&mut self, texture: &Texture) -> Result<PathBuf> {
        let path = self.texture_path(texture);
        ensure_parent(&path)?;
        texture.image.save_with_format(&path, ImageFormat::Png)?;
        Ok(path)
    }
}

impl DescriptorSink for ResourcePackDir {
    fn create_descriptor(&mut self, name: &str, descriptor: &ItemDescriptor) -> Result<WriteOutcome> {
        let path = self.descriptor_path(name);
        let json = descriptor.to_json_pretty()?;
        ensure_parent(&path)?;

        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(WriteOutcome::Skipped(path)),
            Err(e) => return Err(Error::io(path, e)),
        };

        write_fresh(file, &path, json.as_bytes())?;
        Ok(WriteOutcome::Created(path))
    }
}

/// Writes `bytes` to a file this run just created at `path`.
///
/// On failure the partial file is removed, so the next run creates it again
/// instead of skipping it.
fn write_fresh(mut file: impl Write, path: &Path, bytes: &[u8]) -> Result<()> {
    let Err(e) = file.write_all(bytes).and_then(|()| file.flush()) else {
        return Ok(());
    };
    drop(file);
    if let Err(cleanup) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %cleanup, "could not remove partial descriptor");
    }
    Err(Error::io(path, e))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetKind;
    use crate::color::Color;
    use crate::descriptor::DescriptorEmitter;
    use image::RgbaImage;

    fn texture(name: &str, kind: AssetKind) -> Texture {
        Texture {
            name: name.to_string(),
            kind,
            image: RgbaImage::from_pixel(4, 4, Color::rgb(1, 2, 3).into()),
        }
    }

    #[test]
    fn textures_land_in_their_category_folder() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ResourcePackDir::new(dir.path(), "examplemod");

        let path = sink.put_texture(&texture("mob_spawner", AssetKind::Gui)).unwrap();

        assert_eq!(
            path,
            dir.path().join("assets/examplemod/textures/gui/mob_spawner.png")
        );
        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 4));
        assert_eq!(Color::from(*decoded.get_pixel(0, 0)), Color::rgb(1, 2, 3));
    }

    #[test]
    fn textures_are_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ResourcePackDir::new(dir.path(), "ns");

        sink.put_texture(&texture("gem", AssetKind::Item)).unwrap();
        let mut bigger = texture("gem", AssetKind::Item);
        bigger.image = RgbaImage::new(8, 8);
        let path = sink.put_texture(&bigger).unwrap();

        assert_eq!(image::open(&path).unwrap().to_rgba8().width(), 8);
    }

    #[test]
    fn descriptors_are_create_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ResourcePackDir::new(dir.path(), "examplemod");
        let descriptor = DescriptorEmitter::new("examplemod").describe("example_item");

        let first = sink.create_descriptor("example_item", &descriptor).unwrap();
        assert!(first.is_created());
        let written = fs::read_to_string(first.path()).unwrap();
        assert!(written.contains("examplemod:item/example_item"));

        fs::write(first.path(), "hand edited").unwrap();
        let second = sink.create_descriptor("example_item", &descriptor).unwrap();

        assert_eq!(second, WriteOutcome::Skipped(first.path().to_path_buf()));
        assert_eq!(fs::read_to_string(second.path()).unwrap(), "hand edited");
    }

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_descriptor_write_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ResourcePackDir::new(dir.path(), "examplemod");
        let path = sink.descriptor_path("example_item");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();

        let err = write_fresh(FullDisk, &path, b"{}").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!path.exists());

        // the next run creates it instead of skipping
        let descriptor = DescriptorEmitter::new("examplemod").describe("example_item");
        let outcome = sink.create_descriptor("example_item", &descriptor).unwrap();
        assert!(outcome.is_created());
    }

    #[test]
    fn descriptor_path_layout() {
        let sink = ResourcePackDir::new("/pack", "examplemod");
        assert_eq!(
            sink.descriptor_path("fluid_tank"),
            PathBuf::from("/pack/assets/examplemod/items/fluid_tank.json")
        );
    }
}
