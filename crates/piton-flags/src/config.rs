//! Project configuration (piton.toml format).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Root project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider settings.
    pub provider: ProviderSection,
}

/// The `[provider]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSection {
    /// Path to a compile_commands.json to consult before the static flags.
    pub database: Option<PathBuf>,

    /// Flags appended to every answer (e.g. cross-toolchain include paths).
    pub extra_flags: Vec<String>,
}

impl ProviderConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[provider]
database = "build/compile_commands.json"
extra_flags = ["-I/opt/cross/include"]
        "#;

        let config: ProviderConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.provider.database,
            Some(PathBuf::from("build/compile_commands.json"))
        );
        assert_eq!(config.provider.extra_flags, vec!["-I/opt/cross/include"]);
    }

    #[test]
    fn test_missing_keys_default() {
        let config: ProviderConfig = toml::from_str("").unwrap();
        assert_eq!(config, ProviderConfig::default());
        assert!(config.provider.database.is_none());
        assert!(config.provider.extra_flags.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[provider]\nextra_flags = [\"-Wpedantic\"]").unwrap();

        let config = ProviderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.provider.extra_flags, vec!["-Wpedantic"]);
    }
}
