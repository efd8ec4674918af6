use anyhow::{Result, anyhow};
use std::env;

use super::keys::SettingKey;
use super::types::SettingsPatch;

/// Read the environment tier: one variable per setting key, keeping only
/// those that are set to something non-empty.
pub fn read_env() -> Result<SettingsPatch> {
    let mut patch = SettingsPatch::new();
    for key in SettingKey::ALL {
        let Some(var) = key.env_var() else { continue };
        if let Some(value) = env_string(var)? {
            patch.set(key, value);
        }
    }
    Ok(patch)
}

/// Fetch an environment variable, treating unset and empty as absent.
pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}
