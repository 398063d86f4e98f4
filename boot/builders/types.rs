use std::{fmt, str::FromStr};

use kiwi_boot_utils::constants::{INITRD_SYSTEM_DRACUT, INITRD_SYSTEM_KIWI};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::BootImageSetupError;

/// The mechanism used to build the initrd.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitrdSystem {
    /// The appliance toolchain's own initrd builder.
    #[default]
    Kiwi,

    /// Delegates initrd creation to dracut.
    Dracut,
}

impl InitrdSystem {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kiwi => INITRD_SYSTEM_KIWI,
            Self::Dracut => INITRD_SYSTEM_DRACUT,
        }
    }

    /// Resolves the initrd system declared by a build.
    ///
    /// A missing or empty declaration resolves to the default
    /// initrd system. Any other value has to name a supported
    /// system exactly.
    ///
    /// # Errors
    /// Will error with `UnsupportedInitrdSystem` if the declared
    /// value doesn't name a supported initrd system.
    pub fn resolve(declared: Option<&str>) -> Result<Self, BootImageSetupError> {
        trace!("InitrdSystem::resolve({declared:?})");

        match declared {
            None | Some("") => Ok(Self::default()),
            Some(value) => value.parse(),
        }
    }
}

impl FromStr for InitrdSystem {
    type Err = BootImageSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            INITRD_SYSTEM_KIWI => Ok(Self::Kiwi),
            INITRD_SYSTEM_DRACUT => Ok(Self::Dracut),
            other => Err(BootImageSetupError::UnsupportedInitrdSystem(other.to_string())),
        }
    }
}

impl fmt::Display for InitrdSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies a key used to sign boot image artifacts.
///
/// This is either a key id or a path to the key file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SigningKey(String);

impl SigningKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SigningKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SigningKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for SigningKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::error::BootImageSetupError;

    use super::{InitrdSystem, SigningKey};

    #[test]
    fn default_is_kiwi() {
        assert_eq!(InitrdSystem::default(), InitrdSystem::Kiwi);
    }

    #[rstest]
    #[case::absent(None, InitrdSystem::Kiwi)]
    #[case::empty(Some(""), InitrdSystem::Kiwi)]
    #[case::kiwi(Some("kiwi"), InitrdSystem::Kiwi)]
    #[case::dracut(Some("dracut"), InitrdSystem::Dracut)]
    fn resolve_supported(#[case] declared: Option<&str>, #[case] expected: InitrdSystem) {
        assert_eq!(InitrdSystem::resolve(declared).unwrap(), expected);
    }

    #[rstest]
    #[case::unknown("foo")]
    #[case::capitalized("Dracut")]
    #[case::upper_case("KIWI")]
    #[case::padded(" kiwi")]
    #[case::whitespace(" ")]
    fn resolve_unsupported(#[case] declared: &str) {
        match InitrdSystem::resolve(Some(declared)) {
            Err(BootImageSetupError::UnsupportedInitrdSystem(value)) => {
                assert_eq!(value, declared);
            }
            other => panic!("Expected UnsupportedInitrdSystem, got {other:?}"),
        }
    }

    #[rstest]
    #[case(InitrdSystem::Kiwi, "kiwi")]
    #[case(InitrdSystem::Dracut, "dracut")]
    fn display_matches_declared_name(#[case] system: InitrdSystem, #[case] name: &str) {
        assert_eq!(system.to_string(), name);
        assert_eq!(name.parse::<InitrdSystem>().unwrap(), system);
    }

    #[test]
    fn unsupported_error_message() {
        let err = "foo".parse::<InitrdSystem>().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Support for the 'foo' initrd system is not implemented"
        );
    }

    #[test]
    fn signing_key_conversions() {
        let key = SigningKey::from("/etc/keys/boot.asc");

        assert_eq!(key.as_str(), "/etc/keys/boot.asc");
        assert_eq!(key, SigningKey::from(String::from("/etc/keys/boot.asc")));
        assert_eq!(key.to_string(), "/etc/keys/boot.asc");
    }
}
