//! Filter option configuration.
//!
//! The option lists (categories, sizes, colors, price ceiling) come from
//! a TOML file rather than constants, so hosts can reuse the panel with
//! their own catalog. Missing file means stock defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ColorOption, Config, FilterOptions};
