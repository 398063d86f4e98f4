pub mod build_type;
pub mod configuration;
pub mod description;

pub use build_type::*;
pub use configuration::*;
pub use description::*;
