// Names
pub const APP_NAME: &str = "kiwi-boot";
pub const FALLBACK_LOG_DIR: &str = "./.kiwi-boot";

// Paths
pub const DESCRIPTION_FILE: &str = "appliance.yml";
pub const BOOT_ROOT_PREFIX: &str = "kiwi_boot_root.";

// Initrd systems
pub const INITRD_SYSTEM_KIWI: &str = "kiwi";
pub const INITRD_SYSTEM_DRACUT: &str = "dracut";

// kiwi-boot vars
pub const KB_DESCRIPTION: &str = "KB_DESCRIPTION";
pub const KB_ROOT_DIR: &str = "KB_ROOT_DIR";
pub const KB_SIGNING_KEYS: &str = "KB_SIGNING_KEYS";
pub const KB_TARGET_DIR: &str = "KB_TARGET_DIR";
pub const KB_BUILD_TYPE: &str = "KB_BUILD_TYPE";
