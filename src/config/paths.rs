use std::env;
use std::path::PathBuf;

/// Expand `$VAR` references and a leading `~` in a path-valued setting.
///
/// Undefined variables are left in place, matching shell behavior, so an
/// already-expanded path comes back unchanged and normalizing twice is the
/// same as normalizing once. The path is not checked for existence.
pub fn normalize(raw: &str) -> PathBuf {
    let expanded = shellexpand::full_with_context_no_errors(
        raw,
        || dirs::home_dir().map(|home| home.to_string_lossy().into_owned()),
        |var| env::var(var).ok(),
    );
    PathBuf::from(expanded.as_ref())
}
