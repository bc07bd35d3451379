use crate::utils::error::{Result, SetError};
use crate::utils::validation::{validate_positive_number, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level TOML document. Only the `[codec]` table is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub codec: CodecConfig,
}

/// Settings shared by the structured and text codecs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Pretty-print text output.
    #[serde(default)]
    pub pretty: bool,
    /// Reject decoded sets holding more elements than this.
    pub max_elements: Option<usize>,
}

impl CodecConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded codec config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        let config: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| SetError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.codec.validate()?;
        Ok(config.codec)
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = Some(max_elements);
        self
    }

    /// Fails with `ElementLimitExceeded` when `found` is above `max_elements`.
    pub fn check_element_count(&self, found: usize) -> Result<()> {
        match self.max_elements {
            Some(limit) if found > limit => {
                tracing::warn!("Rejected decoded set: {} elements, limit {}", found, limit);
                Err(SetError::ElementLimitExceeded { found, limit })
            }
            _ => Ok(()),
        }
    }
}

impl Validate for CodecConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_elements) = self.max_elements {
            validate_positive_number("codec.max_elements", max_elements, 1)?;
        }
        Ok(())
    }
}

/// Replaces `${VAR}` with the value of the environment variable `VAR`.
/// Unknown variables are left as written.
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SetError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_codec_config() {
        let toml_content = r#"
[codec]
pretty = true
max_elements = 100
"#;

        let config = CodecConfig::from_toml_str(toml_content).unwrap();
        assert!(config.pretty);
        assert_eq!(config.max_elements, Some(100));
    }

    #[test]
    fn test_missing_table_uses_defaults() {
        let config = CodecConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("UNIT_SET_TEST_MAX_ELEMENTS", "42");

        let toml_content = r#"
[codec]
max_elements = ${UNIT_SET_TEST_MAX_ELEMENTS}
"#;

        let config = CodecConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.max_elements, Some(42));

        std::env::remove_var("UNIT_SET_TEST_MAX_ELEMENTS");
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        let err = CodecConfig::from_toml_str("[codec]\nmax_elements = 0\n").unwrap_err();
        assert!(matches!(err, SetError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let err = CodecConfig::from_toml_str("[codec\npretty = ").unwrap_err();
        assert!(matches!(err, SetError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[codec]\npretty = false\n").unwrap();

        let config = CodecConfig::from_file(temp_file.path()).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.max_elements, None);
    }

    #[test]
    fn test_check_element_count() {
        let config = CodecConfig::default().with_max_elements(2);
        assert!(config.check_element_count(2).is_ok());
        assert!(config.check_element_count(3).is_err());
        assert!(CodecConfig::default().check_element_count(usize::MAX).is_ok());
    }
}
