//! Configuration resolution for topen.
//!
//! Settings come from four places, lowest to highest precedence: built-in
//! defaults, the taskrc file, environment variables and command-line
//! options. Each source contributes only the keys it explicitly sets, and
//! a later source overrides an earlier one key by key.
//!
//! The taskrc location is itself a setting, which makes reading the file
//! tier a two-step affair: the location is resolved from the other three
//! tiers first, then the file at that location is read and merged in at
//! its precedence slot. The file can never relocate itself.

mod builder;
mod constants;
mod defaults;
mod environment;
mod keys;
mod loader;
mod paths;
mod types;

pub use keys::SettingKey;
pub use paths::normalize;
pub use types::{Config, SettingsPatch};
