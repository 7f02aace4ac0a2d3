use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_autosave_path")]
    pub autosave_path: String,
    #[serde(skip, default)]
    pub version: String,
}

fn default_theme() -> String {
    "Dark".to_string()
}

fn default_autosave_path() -> String {
    "./.vellum_autosave.html".to_string()
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            autosave_path: default_autosave_path(),
            version: String::new(),
        }
    }
}

// Reads config.json from the given path. Any failure (missing file, bad
// JSON) falls back to the defaults so the editor always starts; the
// version is embedded at compile time either way.
pub fn read_configuration(file_path: &str) -> Configuration {
    let version = env!("CARGO_PKG_VERSION").to_string();

    let mut configuration = match fs::read_to_string(file_path) {
        Ok(contents) => match serde_json::from_str::<Configuration>(&contents) {
            Ok(parsed) => parsed,
            Err(err) => {
                eprintln!(
                    "Warning: failed to parse {}: {}. Using default configuration.",
                    file_path, err
                );
                Configuration::default()
            }
        },
        Err(err) => {
            eprintln!(
                "Warning: could not read {}: {}. Using default configuration.",
                file_path, err
            );
            Configuration::default()
        }
    };

    configuration.version = version;
    configuration
}
