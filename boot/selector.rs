use std::path::Path;

use bon::bon;
use log::{debug, info, trace};

use crate::{
    builders::{
        opts::{DracutOpts, KiwiOpts},
        types::{InitrdSystem, SigningKey},
        BootImage, DracutBuilderFactory, DracutFactory, InitrdSystemQuery, KiwiBuilderFactory,
        KiwiFactory,
    },
    error::BootImageSetupError,
};

/// Picks and constructs the boot image builder for a build.
///
/// The selector holds one factory per initrd system and keeps
/// no state between selections.
#[derive(Debug, Default, Clone, Copy)]
pub struct BootImageSelector<K = KiwiFactory, D = DracutFactory> {
    kiwi: K,
    dracut: D,
}

impl BootImageSelector {
    /// Creates a selector that constructs the
    /// default kiwi and dracut builders.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            kiwi: KiwiFactory,
            dracut: DracutFactory,
        }
    }
}

#[bon]
impl<K, D> BootImageSelector<K, D> {
    #[must_use]
    pub const fn with_factories(kiwi: K, dracut: D) -> Self {
        Self { kiwi, dracut }
    }

    /// Constructs the builder for the initrd system declared
    /// by `configuration`.
    ///
    /// A build without a declared initrd system gets the kiwi
    /// builder. The kiwi builder gets the signing keys and never
    /// the root directory. The dracut builder gets the root
    /// directory and never the signing keys.
    ///
    /// # Errors
    /// Will error with `UnsupportedInitrdSystem` if the declared
    /// initrd system isn't supported, in which case no builder is
    /// constructed. Errors from the builder's construction are
    /// passed through.
    #[builder]
    pub fn select<C>(
        &self,
        configuration: &C,
        target_dir: &Path,
        root_dir: Option<&Path>,
        signing_keys: Option<&[SigningKey]>,
    ) -> Result<BootImage<K::Builder, D::Builder>, BootImageSetupError>
    where
        C: InitrdSystemQuery,
        K: KiwiBuilderFactory<C>,
        D: DracutBuilderFactory<C>,
    {
        trace!(
            "BootImageSelector::select({}, {root_dir:?}, {signing_keys:?})",
            target_dir.display()
        );

        let initrd_system = InitrdSystem::resolve(configuration.initrd_system())?;
        info!("Setting up {initrd_system} boot image");

        Ok(match initrd_system {
            InitrdSystem::Kiwi => {
                if let Some(root_dir) = root_dir {
                    debug!(
                        "Root directory {} is not used by the {initrd_system} initrd system",
                        root_dir.display()
                    );
                }

                BootImage::Kiwi(
                    self.kiwi.construct(
                        KiwiOpts::builder()
                            .configuration(configuration)
                            .target_dir(target_dir)
                            .maybe_signing_keys(signing_keys)
                            .build(),
                    )?,
                )
            }
            InitrdSystem::Dracut => {
                if signing_keys.is_some() {
                    debug!("Signing keys are not used by the {initrd_system} initrd system");
                }

                BootImage::Dracut(
                    self.dracut.construct(
                        DracutOpts::builder()
                            .configuration(configuration)
                            .target_dir(target_dir)
                            .maybe_root_dir(root_dir)
                            .build(),
                    )?,
                )
            }
        })
    }
}
