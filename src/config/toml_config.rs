use crate::core::codec::SequenceFormat;
use crate::core::mover::Strategy;
use crate::core::ConfigProvider;
use crate::utils::error::{MoverError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const DEFAULT_OUTPUT_NAME: &str = "moved";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub values: Option<Vec<i64>>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformConfig {
    pub strategy: Option<Strategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_name: Option<String>,
    #[serde(default)]
    pub output_formats: Vec<SequenceFormat>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid regex"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MoverError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("job.name", &self.job.name)?;

        validation::validate_exclusive("source", &self.source.values, &self.source.path)?;
        match (&self.source.values, &self.source.path) {
            (None, None) => {
                return Err(MoverError::MissingConfigError {
                    field: "source.values or source.path".to_string(),
                })
            }
            (None, Some(path)) => validation::validate_path("source.path", path)?,
            _ => {}
        }

        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_file_stem("load.output_name", self.output_name())?;
        validation::validate_unique("load.output_formats", &self.load.output_formats)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn inline_values(&self) -> Option<&[i64]> {
        self.source.values.as_deref()
    }

    fn input_path(&self) -> Option<&str> {
        self.source.path.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_name(&self) -> &str {
        self.load.output_name.as_deref().unwrap_or(DEFAULT_OUTPUT_NAME)
    }

    fn output_formats(&self) -> &[SequenceFormat] {
        &self.load.output_formats
    }

    fn strategy(&self) -> Strategy {
        self.transform.strategy.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[job]
name = "demo"
description = "Move zeros of the sample array"

[source]
values = [0, 1, 0, 3, 12]

[transform]
strategy = "filter-pad"

[load]
output_path = "./test-output"
output_formats = ["text", "json"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.job.name, "demo");
        assert_eq!(config.inline_values(), Some(&[0, 1, 0, 3, 12][..]));
        assert_eq!(config.strategy(), Strategy::FilterPad);
        assert_eq!(config.output_name(), "moved");
        assert_eq!(
            config.output_formats(),
            &[SequenceFormat::Text, SequenceFormat::Json]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_transform_section_is_optional() {
        let toml_content = r#"
[job]
name = "defaults"

[source]
path = "input.csv"

[load]
output_path = "./output"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.strategy(), Strategy::Compact);
        assert!(config.output_formats().is_empty());
        assert_eq!(config.input_path(), Some("input.csv"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ZERO_MOVER_TEST_INPUT", "/data/seq.json");

        let toml_content = r#"
[job]
name = "env"

[source]
path = "${ZERO_MOVER_TEST_INPUT}"

[load]
output_path = "${ZERO_MOVER_TEST_UNSET_DIR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), Some("/data/seq.json"));
        assert_eq!(config.output_path(), "${ZERO_MOVER_TEST_UNSET_DIR}");

        std::env::remove_var("ZERO_MOVER_TEST_INPUT");
    }

    #[test]
    fn test_config_validation() {
        let both_sources = r#"
[job]
name = "bad"

[source]
values = [1]
path = "input.txt"

[load]
output_path = "./output"
"#;
        let config = TomlConfig::from_toml_str(both_sources).unwrap();
        assert!(config.validate().is_err());

        let no_source = r#"
[job]
name = "bad"

[source]

[load]
output_path = "./output"
"#;
        let config = TomlConfig::from_toml_str(no_source).unwrap();
        assert!(matches!(
            config.validate(),
            Err(MoverError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_unknown_strategy_is_a_parse_error() {
        let toml_content = r#"
[job]
name = "bad"

[source]
values = [1]

[transform]
strategy = "bubble"

[load]
output_path = "./output"
"#;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(MoverError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[job]
name = "file-test"

[source]
values = []

[load]
output_path = "./output"
output_formats = ["csv"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.job.name, "file-test");
        assert_eq!(config.inline_values(), Some(&[][..]));
    }
}
