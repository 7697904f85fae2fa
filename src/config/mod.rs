pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::codec::{parse_sequence, SequenceFormat};
#[cfg(feature = "cli")]
use crate::core::mover::Strategy;
#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, Sequence};
#[cfg(feature = "cli")]
use crate::utils::error::{MoverError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "zero-mover")]
#[command(about = "Move all zeros of an integer sequence to its end, keeping the order of the rest")]
pub struct CliConfig {
    /// Inline sequence, e.g. --values 0,1,0,3,12 (an empty string is an empty sequence)
    #[arg(long, value_parser = parse_inline_values, allow_hyphen_values = true)]
    pub values: Option<Sequence>,

    /// Sequence file (.txt, .json or .csv)
    #[arg(long)]
    pub input: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "moved")]
    pub output_name: String,

    /// Output formats to write; text when none is given
    #[arg(long = "format", value_enum, value_delimiter = ',')]
    pub formats: Vec<SequenceFormat>,

    #[arg(long, value_enum, default_value_t = Strategy::Compact)]
    pub strategy: Strategy,

    #[arg(long, help = "Print the result instead of writing files")]
    pub stdout: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// `--values` 與文字檔同一套解析規則，`""` 與 `[]` 都是空序列
#[cfg(feature = "cli")]
fn parse_inline_values(raw: &str) -> Result<Sequence> {
    parse_sequence(raw, SequenceFormat::Text).map(Sequence::from)
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn inline_values(&self) -> Option<&[i64]> {
        self.values.as_ref().map(|sequence| sequence.values.as_slice())
    }

    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_name(&self) -> &str {
        &self.output_name
    }

    fn output_formats(&self) -> &[SequenceFormat] {
        &self.formats
    }

    fn strategy(&self) -> Strategy {
        self.strategy
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_exclusive("values/input", &self.values, &self.input)?;
        if self.values.is_none() && self.input.is_none() {
            return Err(MoverError::MissingConfigError {
                field: "input".to_string(),
            });
        }

        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
        }

        if !self.stdout {
            validation::validate_path("output_path", &self.output_path)?;
            validation::validate_file_stem("output_name", &self.output_name)?;
            validation::validate_unique("format", &self.formats)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_values_with_negatives() {
        let config =
            CliConfig::try_parse_from(["zero-mover", "--values", "-3,0,7", "--strategy", "filter-pad"])
                .unwrap();

        assert_eq!(config.inline_values(), Some(&[-3, 0, 7][..]));
        assert_eq!(config.strategy, Strategy::FilterPad);
        assert_eq!(config.output_path, "./output");
        assert!(config.formats.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_inline_values() {
        for raw in ["", "[]", "  "] {
            let config =
                CliConfig::try_parse_from(["zero-mover", "--values", raw, "--stdout"]).unwrap();

            assert_eq!(config.inline_values(), Some(&[][..]), "raw {:?}", raw);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_parse_inline_values_in_text_forms() {
        let config =
            CliConfig::try_parse_from(["zero-mover", "--values", "[0, 1, 0, 3, 12]"]).unwrap();
        assert_eq!(config.inline_values(), Some(&[0, 1, 0, 3, 12][..]));

        let err = CliConfig::try_parse_from(["zero-mover", "--values", "1,two"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_formats() {
        let config = CliConfig::try_parse_from([
            "zero-mover",
            "--input",
            "in.csv",
            "--format",
            "json,csv",
        ])
        .unwrap();

        assert_eq!(config.formats, vec![SequenceFormat::Json, SequenceFormat::Csv]);
        assert_eq!(config.strategy, Strategy::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_a_source() {
        let config = CliConfig::try_parse_from(["zero-mover"]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(MoverError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_both_sources() {
        let config =
            CliConfig::try_parse_from(["zero-mover", "--values", "1", "--input", "in.txt"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_formats() {
        let config = CliConfig::try_parse_from([
            "zero-mover",
            "--values",
            "1,0",
            "--format",
            "json,json",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }
}
