use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::constants::DEFAULT_TASKRC;
use super::defaults::defaults;
use super::environment::read_env;
use super::keys::SettingKey;
use super::paths::normalize;
use super::types::{Config, SettingsPatch};

impl Config {
    /// Resolve configuration from all four sources, lowest precedence
    /// first: defaults, taskrc, environment, command line.
    ///
    /// The taskrc location has to be known before the file tier can be
    /// read, so it is resolved first from the other three tiers alone.
    /// The file itself never gets a say in where it lives.
    pub fn resolve(cli: SettingsPatch) -> Result<Config> {
        let defaults = defaults();
        let env = read_env()?;

        let bootstrap = SettingsPatch::merge([defaults.clone(), env.clone(), cli.clone()]);
        let taskrc = normalize(bootstrap.get(SettingKey::TaskRc).unwrap_or(DEFAULT_TASKRC));

        let file = read_taskrc(&taskrc)?;
        Config::build(SettingsPatch::merge([defaults, file, env, cli]))
    }
}

/// Read the taskrc tier: the settings topen recognizes out of a taskrc
/// file.
///
/// The file is shared with taskwarrior, so most of its entries are not
/// ours; unrecognized keys are skipped without complaint. An unreadable
/// file is an error.
pub fn read_taskrc(path: &Path) -> Result<SettingsPatch> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed reading taskrc at {}", path.display()))?;
    Ok(parse_taskrc(&contents))
}

/// Parse taskrc-style `key=value` lines into the recognized subset.
///
/// Blank lines, `#` comments, section headers and directives such as
/// `include` carry no `=` pair and are ignored. A later entry for the same
/// key wins. Empty values count as "no opinion" so they cannot mask a
/// lower tier.
fn parse_taskrc(contents: &str) -> SettingsPatch {
    let mut entries: BTreeMap<&str, &str> = BTreeMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        entries.insert(key.trim(), value.trim());
    }

    let mut patch = SettingsPatch::new();
    for key in SettingKey::ALL {
        let Some(name) = key.taskrc_key() else {
            continue;
        };
        if let Some(value) = entries.get(name)
            && !value.is_empty()
        {
            patch.set(key, *value);
        }
    }
    patch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_recognized_keys() {
        let patch = parse_taskrc("notes.dir=/srv/notes\nnotes.ext=txt\n");
        assert_eq!(patch.get(SettingKey::NotesDir), Some("/srv/notes"));
        assert_eq!(patch.get(SettingKey::NotesExt), Some("txt"));
    }

    #[test]
    fn tolerates_taskwarrior_noise() {
        let contents = "\
# taskwarrior configuration
include /usr/share/task/dark-256.theme

data.location=~/.task
urgency.user.tag.next.coefficient=15.0
report.next.columns=id,description

notes.annot = Has note
";
        let patch = parse_taskrc(contents);
        assert_eq!(patch.get(SettingKey::TaskData), Some("~/.task"));
        assert_eq!(patch.get(SettingKey::NotesAnnot), Some("Has note"));
        assert_eq!(patch.get(SettingKey::NotesDir), None);
    }

    #[test]
    fn later_entry_wins() {
        let patch = parse_taskrc("notes.ext=md\nnotes.ext=org\n");
        assert_eq!(patch.get(SettingKey::NotesExt), Some("org"));
    }

    #[test]
    fn empty_value_expresses_no_opinion() {
        let patch = parse_taskrc("notes.editor=\n");
        assert_eq!(patch.get(SettingKey::NotesEditor), None);
    }

    #[test]
    fn taskrc_location_entries_are_never_extracted() {
        // The file tier must not be able to claim a different taskrc
        // location; no key maps to these entries.
        let patch = parse_taskrc("task.rc=/bogus/taskrc\ntaskrc=/bogus/too\n");
        assert!(patch.is_empty());
    }
}
