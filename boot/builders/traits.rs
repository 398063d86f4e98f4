use std::path::Path;

use kiwi_boot_description::BuildConfiguration;

use crate::error::BootImageSetupError;

use super::opts::{DracutOpts, KiwiOpts};

/// Gives access to the initrd system a build declares.
pub trait InitrdSystemQuery {
    /// The declared initrd system, `None` if the build
    /// doesn't declare one.
    fn initrd_system(&self) -> Option<&str>;
}

impl InitrdSystemQuery for BuildConfiguration<'_> {
    fn initrd_system(&self) -> Option<&str> {
        Self::initrd_system(self)
    }
}

/// Common access to a constructed boot image builder.
pub trait BootImageBuilder {
    /// The directory the boot image artifacts are written to.
    fn target_dir(&self) -> &Path;

    /// The root tree the initrd is created from.
    fn boot_root_directory(&self) -> &Path;
}

/// Constructs the builder for the kiwi initrd system.
pub trait KiwiBuilderFactory<C> {
    type Builder;

    /// Creates a new kiwi builder.
    ///
    /// # Errors
    /// Will error if the builder can't be set up with the given arguments.
    fn construct(&self, opts: KiwiOpts<'_, C>) -> Result<Self::Builder, BootImageSetupError>;
}

/// Constructs the builder for the dracut initrd system.
pub trait DracutBuilderFactory<C> {
    type Builder;

    /// Creates a new dracut builder.
    ///
    /// # Errors
    /// Will error if the builder can't be set up with the given arguments.
    fn construct(&self, opts: DracutOpts<'_, C>) -> Result<Self::Builder, BootImageSetupError>;
}
