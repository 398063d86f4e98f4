//! The boot image builders and the factories that
//! construct them.

use std::path::{Path, PathBuf};

use log::trace;

use crate::error::BootImageSetupError;

use self::{
    dracut_builder::DracutBootImage,
    kiwi_builder::KiwiBootImage,
    opts::{DracutOpts, KiwiOpts},
    types::InitrdSystem,
};

pub use traits::*;

pub mod dracut_builder;
pub mod kiwi_builder;
pub mod opts;
mod traits;
pub mod types;

/// A constructed boot image builder.
///
/// The variant matches the initrd system that was selected.
/// The caller owns the builder.
#[derive(Debug)]
pub enum BootImage<K = KiwiBootImage, D = DracutBootImage> {
    Kiwi(K),
    Dracut(D),
}

impl<K, D> BootImage<K, D> {
    #[must_use]
    pub const fn initrd_system(&self) -> InitrdSystem {
        match self {
            Self::Kiwi(_) => InitrdSystem::Kiwi,
            Self::Dracut(_) => InitrdSystem::Dracut,
        }
    }

    #[must_use]
    pub const fn as_kiwi(&self) -> Option<&K> {
        match self {
            Self::Kiwi(builder) => Some(builder),
            Self::Dracut(_) => None,
        }
    }

    #[must_use]
    pub const fn as_dracut(&self) -> Option<&D> {
        match self {
            Self::Dracut(builder) => Some(builder),
            Self::Kiwi(_) => None,
        }
    }

    #[must_use]
    pub fn into_kiwi(self) -> Option<K> {
        match self {
            Self::Kiwi(builder) => Some(builder),
            Self::Dracut(_) => None,
        }
    }

    #[must_use]
    pub fn into_dracut(self) -> Option<D> {
        match self {
            Self::Dracut(builder) => Some(builder),
            Self::Kiwi(_) => None,
        }
    }
}

impl<K, D> BootImageBuilder for BootImage<K, D>
where
    K: BootImageBuilder,
    D: BootImageBuilder,
{
    fn target_dir(&self) -> &Path {
        match self {
            Self::Kiwi(builder) => builder.target_dir(),
            Self::Dracut(builder) => builder.target_dir(),
        }
    }

    fn boot_root_directory(&self) -> &Path {
        match self {
            Self::Kiwi(builder) => builder.boot_root_directory(),
            Self::Dracut(builder) => builder.boot_root_directory(),
        }
    }
}

/// Constructs `KiwiBootImage` builders.
#[derive(Debug, Default, Clone, Copy)]
pub struct KiwiFactory;

impl<C> KiwiBuilderFactory<C> for KiwiFactory {
    type Builder = KiwiBootImage;

    fn construct(&self, opts: KiwiOpts<'_, C>) -> Result<Self::Builder, BootImageSetupError> {
        KiwiBootImage::new(&opts)
    }
}

/// Constructs `DracutBootImage` builders.
#[derive(Debug, Default, Clone, Copy)]
pub struct DracutFactory;

impl<C> DracutBuilderFactory<C> for DracutFactory {
    type Builder = DracutBootImage;

    fn construct(&self, opts: DracutOpts<'_, C>) -> Result<Self::Builder, BootImageSetupError> {
        DracutBootImage::new(&opts)
    }
}

/// Checks that the target directory is given and exists.
fn check_target_dir(target_dir: &Path) -> Result<PathBuf, BootImageSetupError> {
    trace!("check_target_dir({})", target_dir.display());

    if target_dir.as_os_str().is_empty() {
        return Err(BootImageSetupError::EmptyTargetDir);
    }

    if !target_dir.is_dir() {
        return Err(BootImageSetupError::TargetDirectoryNotFound(
            target_dir.to_path_buf(),
        ));
    }

    Ok(target_dir.to_path_buf())
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use crate::error::BootImageSetupError;

    use super::{check_target_dir, types::InitrdSystem, BootImage};

    #[test]
    fn empty_target_dir() {
        assert!(matches!(
            check_target_dir(Path::new("")),
            Err(BootImageSetupError::EmptyTargetDir)
        ));
    }

    #[test]
    fn missing_target_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");

        match check_target_dir(&missing) {
            Err(BootImageSetupError::TargetDirectoryNotFound(path)) => assert_eq!(path, missing),
            other => panic!("Expected TargetDirectoryNotFound, got {other:?}"),
        }
    }

    #[test]
    fn target_dir_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        assert!(matches!(
            check_target_dir(file.path()),
            Err(BootImageSetupError::TargetDirectoryNotFound(_))
        ));
    }

    #[test]
    fn boot_image_accessors() {
        let kiwi: BootImage<u8, char> = BootImage::Kiwi(1);
        let dracut: BootImage<u8, char> = BootImage::Dracut('d');

        assert_eq!(kiwi.initrd_system(), InitrdSystem::Kiwi);
        assert_eq!(kiwi.as_kiwi(), Some(&1));
        assert_eq!(kiwi.as_dracut(), None);
        assert_eq!(dracut.initrd_system(), InitrdSystem::Dracut);
        assert_eq!(dracut.into_dracut(), Some('d'));
        assert_eq!(kiwi.into_kiwi(), Some(1));
    }
}
