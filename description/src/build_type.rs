use std::borrow::Cow;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// A single build type of an appliance.
///
/// An appliance can be built into several image types
/// (e.g. `oem`, `iso`). Each type carries its own choice
/// of initrd system.
#[derive(Default, Serialize, Clone, Deserialize, Debug, PartialEq, Eq, Builder)]
pub struct BuildType<'a> {
    /// The image type name.
    #[builder(into)]
    pub image: Cow<'a, str>,

    /// Marks the type that is built when none is requested.
    #[serde(default)]
    #[builder(default)]
    pub primary: bool,

    /// The mechanism used to create the initrd.
    ///
    /// When absent, the appliance toolchain's own
    /// mechanism (`kiwi`) is used.
    #[serde(
        rename = "initrd-system",
        alias = "initrd_system",
        skip_serializing_if = "Option::is_none"
    )]
    #[builder(into)]
    pub initrd_system: Option<Cow<'a, str>>,

    /// The filesystem of the root partition.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub filesystem: Option<Cow<'a, str>>,
}
