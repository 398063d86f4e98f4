use std::{env, path::PathBuf};

use bon::Builder;
use clap::Args;
use colored::Colorize;
use kiwi_boot_description::{ApplianceDescription, BuildConfiguration};
use kiwi_boot_image::{
    builders::{
        types::{InitrdSystem, SigningKey},
        BootImage,
    },
    BootImageBuilder, BootImageSelector,
};
use kiwi_boot_utils::constants::{
    DESCRIPTION_FILE, KB_BUILD_TYPE, KB_DESCRIPTION, KB_ROOT_DIR, KB_SIGNING_KEYS, KB_TARGET_DIR,
};
use log::{debug, info, trace};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use super::KiwiBootCommand;

#[derive(Debug, Clone, Args, Builder)]
pub struct SelectCommand {
    /// The appliance description to read the
    /// initrd system from.
    ///
    /// Defaults to `./appliance.yml`.
    #[arg(env = KB_DESCRIPTION)]
    #[builder(into)]
    description: Option<PathBuf>,

    /// The image type of the appliance to build.
    ///
    /// Defaults to the primary build type.
    #[arg(short = 't', long = "type", env = KB_BUILD_TYPE)]
    #[builder(into)]
    build_type: Option<String>,

    /// The directory the boot image artifacts
    /// are written to.
    #[arg(short = 'd', long, env = KB_TARGET_DIR)]
    #[builder(into)]
    target_dir: PathBuf,

    /// The unpacked root tree of the appliance.
    ///
    /// Required by the `dracut` initrd system.
    #[arg(short, long, env = KB_ROOT_DIR)]
    #[builder(into)]
    root_dir: Option<PathBuf>,

    /// A key used to sign the boot image.
    ///
    /// Can be given multiple times. Each value is used
    /// as is, commas included. Without it the comma separated
    /// `KB_SIGNING_KEYS` environment variable is read. Only
    /// used by the `kiwi` initrd system.
    #[arg(short = 'k', long = "signing-key")]
    #[builder(default, into)]
    signing_keys: Vec<String>,

    /// Print the selection as JSON.
    #[arg(long)]
    #[builder(default)]
    json: bool,
}

impl KiwiBootCommand for SelectCommand {
    fn try_run(&mut self) -> Result<()> {
        trace!("SelectCommand::try_run()");

        let description_path = self
            .description
            .clone()
            .unwrap_or_else(|| PathBuf::from(DESCRIPTION_FILE));

        info!(
            "Selecting boot image for description at {}",
            description_path.display()
        );
        let description = ApplianceDescription::parse(&description_path)?;
        let configuration = description.build_configuration(self.build_type.as_deref())?;

        let summary = self.select(&configuration)?;
        println!("{}", summary.render(self.json)?);

        Ok(())
    }
}

impl SelectCommand {
    fn select(&self, configuration: &BuildConfiguration<'_>) -> Result<SelectionSummary> {
        let signing_keys = signing_keys(
            &self.signing_keys,
            env::var(KB_SIGNING_KEYS).ok().as_deref(),
        );
        debug!("Signing keys: {signing_keys:?}");

        let boot_image = BootImageSelector::new()
            .select()
            .configuration(configuration)
            .target_dir(&self.target_dir)
            .maybe_root_dir(self.root_dir.as_deref())
            .maybe_signing_keys((!signing_keys.is_empty()).then_some(signing_keys.as_slice()))
            .call()?;

        Ok(SelectionSummary::new(configuration, &boot_image))
    }
}

/// What was selected for a build.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct SelectionSummary {
    appliance: String,
    image_type: String,
    initrd_system: InitrdSystem,
    target_dir: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    root_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    signing_keys: Vec<SigningKey>,
}

impl SelectionSummary {
    fn new(configuration: &BuildConfiguration<'_>, boot_image: &BootImage) -> Self {
        let (root_dir, signing_keys) = match boot_image {
            BootImage::Kiwi(kiwi) => (None, kiwi.signing_keys().to_vec()),
            BootImage::Dracut(dracut) => {
                (Some(dracut.boot_root_directory().to_path_buf()), Vec::new())
            }
        };

        Self {
            appliance: configuration.image_name().to_string(),
            image_type: configuration.image_type().to_string(),
            initrd_system: boot_image.initrd_system(),
            target_dir: boot_image.target_dir().to_path_buf(),
            root_dir,
            signing_keys,
        }
    }

    fn render(&self, json: bool) -> Result<String> {
        if json {
            return serde_json::to_string_pretty(self).into_diagnostic();
        }

        let mut fields = vec![
            field("appliance", &self.appliance),
            field("image type", &self.image_type),
            field("initrd system", self.initrd_system.as_str()),
            field("target dir", &self.target_dir.display().to_string()),
        ];

        if let Some(root_dir) = self.root_dir.as_deref() {
            fields.push(field("root dir", &root_dir.display().to_string()));
        }

        if !self.signing_keys.is_empty() {
            fields.push(field(
                "signing keys",
                &self
                    .signing_keys
                    .iter()
                    .map(SigningKey::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ));
        }

        Ok(fields.join("\n"))
    }
}

fn field(name: &str, value: &str) -> String {
    format!("{:>14}: {value}", name.bold())
}

/// Keys given on the command line win. Otherwise the
/// environment value is split on commas.
fn signing_keys(args: &[String], env: Option<&str>) -> Vec<SigningKey> {
    if !args.is_empty() {
        return args.iter().map(|key| SigningKey::from(key.as_str())).collect();
    }

    env.map(|keys| {
        keys.split(',')
            .filter(|key| !key.is_empty())
            .map(SigningKey::from)
            .collect()
    })
    .unwrap_or_default()
}
