//! The `kiwi-boot` command line tool.
//!
//! Reads an appliance description and reports which boot
//! image builder is used for the build.

pub mod commands;
