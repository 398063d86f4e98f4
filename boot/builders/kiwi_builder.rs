use std::path::{Path, PathBuf};

use kiwi_boot_utils::constants::BOOT_ROOT_PREFIX;
use log::{debug, trace};
use tempfile::TempDir;

use crate::error::BootImageSetupError;

use super::{opts::KiwiOpts, types::SigningKey, BootImageBuilder};

/// Builds the initrd with the appliance toolchain's own mechanism.
///
/// The builder prepares a private boot root directory inside the
/// target directory. It is removed again when the builder is dropped.
#[derive(Debug)]
pub struct KiwiBootImage {
    target_dir: PathBuf,
    boot_root: TempDir,
    signing_keys: Vec<SigningKey>,
}

impl KiwiBootImage {
    /// Creates a kiwi builder writing to `opts.target_dir`.
    ///
    /// # Errors
    /// Will error if the target directory is missing or the
    /// boot root directory can't be created in it.
    pub fn new<C>(opts: &KiwiOpts<'_, C>) -> Result<Self, BootImageSetupError> {
        trace!("KiwiBootImage::new({})", opts.target_dir.display());

        let target_dir = super::check_target_dir(opts.target_dir)?;

        let boot_root = tempfile::Builder::new()
            .prefix(BOOT_ROOT_PREFIX)
            .tempdir_in(&target_dir)
            .map_err(|source| BootImageSetupError::BootRootDirectory {
                path: target_dir.clone(),
                source,
            })?;
        debug!("Created boot root {}", boot_root.path().display());

        let signing_keys = opts.signing_keys.map_or_else(Vec::new, <[SigningKey]>::to_vec);
        if !signing_keys.is_empty() {
            debug!(
                "Using signing keys: {}",
                signing_keys
                    .iter()
                    .map(SigningKey::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        Ok(Self {
            target_dir,
            boot_root,
            signing_keys,
        })
    }

    /// The keys used to sign the boot image, in the order given.
    #[must_use]
    pub fn signing_keys(&self) -> &[SigningKey] {
        &self.signing_keys
    }
}

impl BootImageBuilder for KiwiBootImage {
    fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    fn boot_root_directory(&self) -> &Path {
        self.boot_root.path()
    }
}
