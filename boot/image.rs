//! This module is responsible for choosing how the boot image
//! (initrd) of an appliance is built. It maps the initrd system
//! declared for a build onto a concrete builder and hides the
//! builders' construction details from the rest of the build.

pub mod builders;
pub mod error;
pub mod selector;

pub use builders::{types::InitrdSystem, BootImage, BootImageBuilder, InitrdSystemQuery};
pub use error::BootImageSetupError;
pub use selector::BootImageSelector;
