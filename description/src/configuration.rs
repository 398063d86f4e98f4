use bon::Builder;

use crate::{ApplianceDescription, BuildType};

/// The configuration for building one image type of an appliance.
///
/// Pairs the appliance description with the build type
/// chosen for the current build.
#[derive(Debug, Clone, Copy, Builder)]
pub struct BuildConfiguration<'a> {
    pub description: &'a ApplianceDescription<'a>,
    pub build_type: &'a BuildType<'a>,
}

impl BuildConfiguration<'_> {
    /// The declared initrd system of the build type.
    ///
    /// Returns `None` when the build type doesn't declare one.
    #[must_use]
    pub fn initrd_system(&self) -> Option<&str> {
        self.build_type.initrd_system.as_deref()
    }

    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.description.name
    }

    #[must_use]
    pub fn image_type(&self) -> &str {
        &self.build_type.image
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{ApplianceDescription, BuildType};

    #[test]
    fn configuration_reads_build_type() {
        let description = ApplianceDescription::builder()
            .name("builder-appliance")
            .types(vec![
                BuildType::builder().image("iso").build(),
                BuildType::builder()
                    .image("oem")
                    .initrd_system("dracut")
                    .build(),
            ])
            .build();

        let configuration = description.build_configuration(Some("oem")).unwrap();
        assert_eq!(configuration.image_name(), "builder-appliance");
        assert_eq!(configuration.image_type(), "oem");
        assert_eq!(configuration.initrd_system(), Some("dracut"));

        let configuration = description.build_configuration(Some("iso")).unwrap();
        assert_eq!(configuration.initrd_system(), None);
    }
}
