use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use bon::Builder;
use log::{debug, trace, warn};
use miette::{bail, miette, Context, IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};

use crate::{BuildConfiguration, BuildType};

/// The appliance description.
///
/// This is the top-level section of an `appliance.yml`.
/// Only the parts needed to pick a boot image builder
/// are modeled here.
#[derive(Default, Serialize, Clone, Deserialize, Debug, Builder)]
pub struct ApplianceDescription<'a> {
    /// The name of the appliance.
    #[builder(into)]
    pub name: Cow<'a, str>,

    /// The version of the appliance.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub version: Option<Cow<'a, str>>,

    /// The image types this appliance can be built as.
    #[serde(default)]
    #[builder(default, into)]
    pub types: Vec<BuildType<'a>>,
}

impl ApplianceDescription<'_> {
    /// Parse an appliance description file.
    ///
    /// # Errors
    /// Errors when the file can't be read or the yaml
    /// can't be deserialized.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<ApplianceDescription<'static>> {
        fn inner(path: &Path) -> Result<ApplianceDescription<'static>> {
            trace!("ApplianceDescription::parse({})", path.display());

            let file_path: PathBuf = if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir().into_diagnostic()?.join(path)
            };

            let file = fs::read_to_string(&file_path)
                .into_diagnostic()
                .with_context(|| format!("Failed to read {}", file_path.display()))?;

            debug!("Description contents: {file}");

            ApplianceDescription::from_yaml(&file)
                .with_context(|| format!("Failed to parse {}", file_path.display()))
        }
        inner(path.as_ref())
    }

    /// Deserialize an appliance description from a yaml string.
    ///
    /// # Errors
    /// Errors when the yaml can't be deserialized.
    pub fn from_yaml(contents: &str) -> Result<ApplianceDescription<'static>> {
        serde_yaml::from_str::<ApplianceDescription<'static>>(contents).into_diagnostic()
    }

    /// Picks the build type to use for this build.
    ///
    /// A requested image type must exist. Without a request
    /// the type marked `primary` is used, then the first one.
    ///
    /// # Errors
    /// Will error if the description has no build types or the
    /// requested type doesn't exist.
    pub fn build_type(&self, image: Option<&str>) -> Result<&BuildType<'_>> {
        trace!("ApplianceDescription::build_type({image:?})");

        if self.types.is_empty() {
            bail!("Appliance {} does not define any build types", self.name);
        }

        if let Some(image) = image {
            return self
                .types
                .iter()
                .find(|build_type| build_type.image == image)
                .ok_or_else(|| {
                    miette!(
                        "Build type {image} not found in appliance {}, available types: {}",
                        self.name,
                        self.types
                            .iter()
                            .map(|build_type| build_type.image.as_ref())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                });
        }

        let mut primaries = self.types.iter().filter(|build_type| build_type.primary);
        let build_type = match (primaries.next(), primaries.next()) {
            (Some(primary), None) => primary,
            (Some(primary), Some(_)) => {
                warn!(
                    "Multiple primary build types in appliance {}, using {}",
                    self.name, primary.image
                );
                primary
            }
            (None, _) => &self.types[0],
        };
        debug!("Using build type {}", build_type.image);

        Ok(build_type)
    }

    /// Creates the configuration for building one image type
    /// of this appliance.
    ///
    /// # Errors
    /// Will error if the build type can't be determined.
    pub fn build_configuration(&self, image: Option<&str>) -> Result<BuildConfiguration<'_>> {
        Ok(BuildConfiguration::builder()
            .description(self)
            .build_type(self.build_type(image)?)
            .build())
    }
}
