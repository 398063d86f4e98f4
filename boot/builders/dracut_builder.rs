use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::BootImageSetupError;

use super::{opts::DracutOpts, BootImageBuilder};

/// Builds the initrd with dracut from an unpacked root tree.
#[derive(Debug, Clone)]
pub struct DracutBootImage {
    target_dir: PathBuf,
    root_dir: PathBuf,
    modules: Vec<String>,
    omit_modules: Vec<String>,
    files: Vec<PathBuf>,
}

impl DracutBootImage {
    /// Creates a dracut builder for the root tree at `opts.root_dir`.
    ///
    /// # Errors
    /// Will error if the target directory is missing, or if the
    /// root directory wasn't given or doesn't exist.
    pub fn new<C>(opts: &DracutOpts<'_, C>) -> Result<Self, BootImageSetupError> {
        trace!("DracutBootImage::new({})", opts.target_dir.display());

        let target_dir = super::check_target_dir(opts.target_dir)?;

        let root_dir = opts
            .root_dir
            .ok_or(BootImageSetupError::RootDirectoryRequired)?;
        if !root_dir.is_dir() {
            return Err(BootImageSetupError::RootDirectoryNotFound(
                root_dir.to_path_buf(),
            ));
        }
        debug!("Using root tree {} for dracut", root_dir.display());

        Ok(Self {
            target_dir,
            root_dir: root_dir.to_path_buf(),
            modules: Vec::new(),
            omit_modules: Vec::new(),
            files: Vec::new(),
        })
    }

    /// Adds a dracut module to the initrd.
    ///
    /// This takes the module off the omit list.
    pub fn include_module<S: Into<String>>(&mut self, module: S) -> &mut Self {
        let module = module.into();
        trace!("DracutBootImage::include_module({module})");

        self.omit_modules.retain(|omitted| *omitted != module);
        if !self.modules.contains(&module) {
            self.modules.push(module);
        }
        self
    }

    /// Leaves a dracut module out of the initrd.
    ///
    /// This takes the module off the include list.
    pub fn omit_module<S: Into<String>>(&mut self, module: S) -> &mut Self {
        let module = module.into();
        trace!("DracutBootImage::omit_module({module})");

        self.modules.retain(|included| *included != module);
        if !self.omit_modules.contains(&module) {
            self.omit_modules.push(module);
        }
        self
    }

    /// Adds a file from the root tree to the initrd.
    pub fn include_file<P: Into<PathBuf>>(&mut self, file: P) -> &mut Self {
        let file = file.into();
        trace!("DracutBootImage::include_file({})", file.display());

        if !self.files.contains(&file) {
            self.files.push(file);
        }
        self
    }

    #[must_use]
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    #[must_use]
    pub fn omit_modules(&self) -> &[String] {
        &self.omit_modules
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl BootImageBuilder for DracutBootImage {
    fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    fn boot_root_directory(&self) -> &Path {
        &self.root_dir
    }
}

#[cfg(test)]
mod test {
    use std::path::{Path, PathBuf};

    use kiwi_boot_utils::string_vec;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use crate::{
        builders::{opts::DracutOpts, BootImageBuilder},
        error::BootImageSetupError,
    };

    use super::DracutBootImage;

    fn builder(target: &TempDir, root: &TempDir) -> DracutBootImage {
        DracutBootImage::new(
            &DracutOpts::builder()
                .configuration(&())
                .target_dir(target.path())
                .root_dir(root.path())
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn uses_root_dir_as_boot_root() {
        let target = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();

        let builder = builder(&target, &root);

        assert_eq!(builder.target_dir(), target.path());
        assert_eq!(builder.boot_root_directory(), root.path());
        assert!(builder.modules().is_empty());
        assert!(builder.omit_modules().is_empty());
        assert!(builder.files().is_empty());
    }

    #[test]
    fn root_dir_required() {
        let target = tempfile::tempdir().unwrap();
        let opts = DracutOpts::builder()
            .configuration(&())
            .target_dir(target.path())
            .build();

        assert!(matches!(
            DracutBootImage::new(&opts),
            Err(BootImageSetupError::RootDirectoryRequired)
        ));
    }

    #[test]
    fn root_dir_not_found() {
        let target = tempfile::tempdir().unwrap();
        let missing = target.path().join("root");
        let opts = DracutOpts::builder()
            .configuration(&())
            .target_dir(target.path())
            .root_dir(&missing)
            .build();

        match DracutBootImage::new(&opts) {
            Err(BootImageSetupError::RootDirectoryNotFound(path)) => assert_eq!(path, missing),
            other => panic!("Expected RootDirectoryNotFound, got {other:?}"),
        }
    }

    #[test]
    fn target_dir_checked_before_root_dir() {
        let opts = DracutOpts::builder()
            .configuration(&())
            .target_dir(Path::new(""))
            .build();

        assert!(matches!(
            DracutBootImage::new(&opts),
            Err(BootImageSetupError::EmptyTargetDir)
        ));
    }

    #[test]
    fn module_lists() {
        let target = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();
        let mut builder = builder(&target, &root);

        builder
            .include_module("lvm")
            .include_module("crypt")
            .include_module("lvm")
            .omit_module("plymouth")
            .omit_module("crypt")
            .include_module("plymouth");

        assert_eq!(builder.modules(), string_vec!["lvm", "plymouth"].as_slice());
        assert_eq!(builder.omit_modules(), string_vec!["crypt"].as_slice());
    }

    #[test]
    fn included_files_are_unique() {
        let target = tempfile::tempdir().unwrap();
        let root = tempfile::tempdir().unwrap();
        let mut builder = builder(&target, &root);

        builder
            .include_file("/etc/crypttab")
            .include_file(PathBuf::from("/etc/fstab"))
            .include_file("/etc/crypttab");

        assert_eq!(
            builder.files(),
            [PathBuf::from("/etc/crypttab"), PathBuf::from("/etc/fstab")].as_slice()
        );
    }
}
