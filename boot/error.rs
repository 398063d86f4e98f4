use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while setting up a boot image builder.
///
/// Only `UnsupportedInitrdSystem` comes from the selection
/// itself. The other variants are raised by the builders
/// when they are constructed.
#[derive(Error, Diagnostic, Debug)]
pub enum BootImageSetupError {
    #[error("Support for the '{0}' initrd system is not implemented")]
    #[diagnostic(
        code(kiwi_boot::unsupported_initrd_system),
        help("Set `initrd-system` to `kiwi` or `dracut`, or remove it to use `kiwi`")
    )]
    UnsupportedInitrdSystem(String),

    #[error("No target directory was given for the boot image")]
    #[diagnostic(code(kiwi_boot::empty_target_dir))]
    EmptyTargetDir,

    #[error("Target directory {} not found", .0.display())]
    #[diagnostic(code(kiwi_boot::target_dir_not_found))]
    TargetDirectoryNotFound(PathBuf),

    #[error("The dracut initrd system requires a root directory")]
    #[diagnostic(
        code(kiwi_boot::root_dir_required),
        help("Pass the unpacked root tree with `--root-dir`")
    )]
    RootDirectoryRequired,

    #[error("Root directory {} not found", .0.display())]
    #[diagnostic(code(kiwi_boot::root_dir_not_found))]
    RootDirectoryNotFound(PathBuf),

    #[error("Failed to create the boot root directory in {}", .path.display())]
    #[diagnostic(code(kiwi_boot::boot_root_dir))]
    BootRootDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
