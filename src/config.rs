use eyre::{Result, WrapErr};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage: Storage,
    pub ranking: Ranking,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Storage {
    /// Where the roster is saved and reloaded from.
    pub roster: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ranking {
    /// How many students the ranking report shows.
    pub top: usize,
}

impl Default for Storage {
    fn default() -> Storage {
        Storage {
            roster: PathBuf::from("students.csv"),
        }
    }
}

impl Default for Ranking {
    fn default() -> Ranking {
        Ranking { top: 3 }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = fs::read_to_string(file_name).wrap_err_with(|| {
            format!("cannot load configuration file {}", file_name.display())
        })?;
        toml::from_str(&content).wrap_err("cannot parse configuration file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_sections() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.storage.roster, PathBuf::from("students.csv"));
        assert_eq!(config.ranking.top, 3);
    }

    #[test]
    fn sections_override_defaults() {
        let config: Config = toml::from_str(
            "[storage]\nroster = \"out/roster.csv\"\n\n[ranking]\ntop = 1\n",
        )
        .unwrap();
        assert_eq!(config.storage.roster, PathBuf::from("out/roster.csv"));
        assert_eq!(config.ranking.top, 1);
    }
}
