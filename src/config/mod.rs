//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Example configuration written by `vowelsynth init`
pub const EXAMPLE_CONFIG: &str = include_str!("../../vowelsynth.example.yaml");

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<SynthConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {:?}", path))?;
    let config: SynthConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

/// Load a config file if given, otherwise fall back to defaults
pub fn load_or_default(path: Option<&Path>) -> Result<SynthConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(SynthConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_minimal_config() {
        let yaml = r#"
audio:
  sample_rate: 22050

voice:
  pitch: 180
  volume: 0.5
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.audio.sample_rate, 22050);
        assert_eq!(config.voice.pitch, 180.0);
        assert_eq!(config.voice.volume, 0.5);
    }

    #[test]
    fn test_example_config_is_valid() {
        let config: SynthConfig = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.audio.attack, 0.02);
        assert_eq!(config.audio.release, 0.05);
    }

    #[test]
    fn test_missing_file_errors() {
        let err = load_config(Path::new("/nonexistent/vowelsynth.yaml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = load_or_default(None).unwrap();
        assert_eq!(config.audio.sample_rate, 44100);
    }
}
