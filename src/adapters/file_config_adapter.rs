//! INI file configuration adapter.
//!
//! Sections: `[data]` (`prices_dir`, `accounts_csv`) and `[projection]`
//! (`default_target_age`).

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_ref()
            .and_then(|v| Self::parse_bool(v))
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
[data]
prices_dir = /var/lib/folioadvisor/prices
accounts_csv = /var/lib/folioadvisor/accounts.csv

[projection]
default_target_age = 67
"#;

    #[test]
    fn from_string_parses_sections() {
        let adapter = FileConfigAdapter::from_string(SAMPLE).unwrap();
        assert_eq!(
            adapter.get_string("data", "prices_dir"),
            Some("/var/lib/folioadvisor/prices".to_string())
        );
        assert_eq!(adapter.get_int("projection", "default_target_age", 65), 67);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let adapter = FileConfigAdapter::from_string("[data]\n").unwrap();
        assert_eq!(adapter.get_string("data", "prices_dir"), None);
        assert_eq!(adapter.get_int("projection", "default_target_age", 65), 65);
        assert_eq!(adapter.get_double("projection", "rate_override", 0.05), 0.05);
        assert!(adapter.get_bool("output", "json", true));
    }

    #[test]
    fn non_numeric_values_fall_back_to_defaults() {
        let adapter =
            FileConfigAdapter::from_string("[projection]\ndefault_target_age = soon\n").unwrap();
        assert_eq!(adapter.get_int("projection", "default_target_age", 65), 65);
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        let adapter =
            FileConfigAdapter::from_string("[output]\na = true\nb = yes\nc = 1\nd = no\n").unwrap();
        assert!(adapter.get_bool("output", "a", false));
        assert!(adapter.get_bool("output", "b", false));
        assert!(adapter.get_bool("output", "c", false));
        assert!(!adapter.get_bool("output", "d", true));
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("data", "accounts_csv"),
            Some("/var/lib/folioadvisor/accounts.csv".to_string())
        );
    }

    #[test]
    fn from_file_errors_on_missing_file() {
        assert!(FileConfigAdapter::from_file("/nonexistent/folioadvisor.ini").is_err());
    }
}
