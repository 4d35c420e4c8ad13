use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const SETTINGS_PATH: &str = "./sha2fips.config.toml";
const PREFIX: &str = "SHA2FIPS";

/// Presentation settings of the interactive tool. The hash itself has no knobs.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_prompt: bool,
    pub prompt: String,
    pub label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            show_prompt: true,
            prompt: "Text to hash: ".to_string(),
            label: "SHA-256: ".to_string(),
        }
    }
}

impl Settings {
    /// Loads `./sha2fips.config.toml` if present, then `SHA2FIPS_*` environment overrides.
    pub fn new() -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::with_name(SETTINGS_PATH).required(false))
            .add_source(Environment::with_prefix(PREFIX))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();

        assert!(settings.show_prompt);
        assert_eq!(settings.prompt, "Text to hash: ");
        assert_eq!(settings.label, "SHA-256: ");
    }
}
