use std::path::Path;

use bon::Builder;

use super::types::SigningKey;

/// The arguments a kiwi initrd builder is constructed with.
///
/// There is no root directory here; the kiwi builder
/// prepares its own boot root.
#[derive(Debug, Builder)]
pub struct KiwiOpts<'scope, C> {
    pub configuration: &'scope C,
    pub target_dir: &'scope Path,
    pub signing_keys: Option<&'scope [SigningKey]>,
}

/// The arguments a dracut initrd builder is constructed with.
///
/// Signing keys are not part of the dracut builder's arguments.
#[derive(Debug, Builder)]
pub struct DracutOpts<'scope, C> {
    pub configuration: &'scope C,
    pub target_dir: &'scope Path,
    pub root_dir: Option<&'scope Path>,
}
