//! Configuration loading for xml2class
//!
//! This module provides configuration loading from YAML files with
//! environment variable substitution support.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::inference::traits::{InferenceError, InferenceResult};
use crate::inference::types::InferenceConfig;
use crate::loader::LoaderConfig;

static ENV_VAR_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"\$\{([^}:]+)(?::(-)?([^}]*))?\}").ok());

/// Complete xml2class configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Xml2ClassConfig {
    /// Inference settings
    pub inference: InferenceConfig,
    /// Loader settings
    pub loader: LoaderConfig,
}

impl Xml2ClassConfig {
    /// Check every section for unusable values
    ///
    /// # Errors
    ///
    /// Returns `InferenceError::ConfigurationError` naming the invalid setting.
    pub fn validate(&self) -> InferenceResult<()> {
        self.inference.validate()
    }
}

/// Load configuration from `YAML` file with environment variable substitution
///
/// # Errors
///
/// Returns `InferenceError::Io` if the file cannot be read
/// Returns `InferenceError::ConfigurationError` if the YAML cannot be parsed
/// or holds invalid values
pub fn load_config(path: &Path) -> InferenceResult<Xml2ClassConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: Xml2ClassConfig = parse_config(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration text after environment variable substitution
///
/// # Errors
///
/// Returns `InferenceError::ConfigurationError` if the YAML cannot be parsed.
pub fn parse_config<T: for<'de> Deserialize<'de>>(contents: &str) -> InferenceResult<T> {
    let substituted = substitute_env_vars(contents);
    serde_yaml::from_str(&substituted).map_err(|e| {
        InferenceError::ConfigurationError(format!("Failed to parse YAML config: {e}"))
    })
}

/// Substitute environment variables in the format `${VAR}` or `${VAR:-default}`
fn substitute_env_vars(content: &str) -> String {
    let Some(re) = ENV_VAR_PATTERN.as_ref() else {
        return content.to_string();
    };

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default_value = caps.get(3).map_or("", |m| m.as_str());

        env::var(var_name).unwrap_or_else(|_| default_value.to_string())
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::types::ListXmlName;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_for_empty_document() {
        let config: Xml2ClassConfig = parse_config("{}").unwrap();
        assert_eq!(config, Xml2ClassConfig::default());
    }

    #[test]
    fn test_env_default_is_used_when_unset() {
        let yaml = "inference:\n  scalar_type: ${XML2CLASS_TEST_UNSET_SCALAR:-Text}\n";
        let config: Xml2ClassConfig = parse_config(yaml).unwrap();
        assert_eq!(config.inference.scalar_type, "Text");
    }

    #[test]
    fn test_sections_are_parsed() {
        let yaml = "\
inference:
  list_xml_name: tag_name
  strip_invalid_identifier_chars: false
loader:
  include_namespace_declarations: true
";
        let config: Xml2ClassConfig = parse_config(yaml).unwrap();
        assert_eq!(config.inference.list_xml_name, ListXmlName::TagName);
        assert!(!config.inference.strip_invalid_identifier_chars);
        assert!(config.loader.include_namespace_declarations);
        assert!(config.loader.trim_text);
    }

    #[test]
    fn test_invalid_yaml() {
        let result: InferenceResult<Xml2ClassConfig> = parse_config("inference: [unclosed");
        assert!(matches!(
            result,
            Err(InferenceError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_load_config_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "inference:\n  scalar_type: \"\"").unwrap();
        let result = load_config(file.path());
        assert!(matches!(
            result,
            Err(InferenceError::ConfigurationError(_))
        ));
    }
}
