//! Configuration
//!
//! Priority: CLI flags > ENV (`SHORTLY__SECTION__KEY`) > TOML file > defaults.
//! CLI overrides are applied by the binary after [`StaticConfig::load`].

mod structs;

pub use structs::*;
