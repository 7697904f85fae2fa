use crate::domain::model::Sequence;
use crate::utils::error::{MoverError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk / on-screen representation of an integer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SequenceFormat {
    /// `[1, 3, 12, 0, 0]`; on input any comma/whitespace separated integers.
    #[default]
    Text,
    /// `[1,3,12,0,0]`; on input also `{"values": [...]}`.
    Json,
    /// Integers across one or more records, no header.
    Csv,
}

impl SequenceFormat {
    /// `.json` and `.csv` are recognised; everything else is read as text.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => SequenceFormat::Json,
            Some("csv") => SequenceFormat::Csv,
            _ => SequenceFormat::Text,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SequenceFormat::Text => "txt",
            SequenceFormat::Json => "json",
            SequenceFormat::Csv => "csv",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonSequence {
    Bare(Vec<i64>),
    Wrapped(Sequence),
}

pub fn parse_sequence(input: &str, format: SequenceFormat) -> Result<Vec<i64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    match format {
        SequenceFormat::Text => parse_text(input),
        SequenceFormat::Json => match serde_json::from_str::<JsonSequence>(input)? {
            JsonSequence::Bare(values) => Ok(values),
            JsonSequence::Wrapped(sequence) => Ok(sequence.values),
        },
        SequenceFormat::Csv => parse_csv(input),
    }
}

fn parse_token(position: usize, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| MoverError::ParseError {
        position,
        token: token.to_string(),
    })
}

fn parse_text(input: &str) -> Result<Vec<i64>> {
    let trimmed = input.trim();
    // 接受 `[1, 2, 3]` 這種輸出格式回讀
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(trimmed);

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| parse_token(i + 1, token))
        .collect()
}

fn parse_csv(input: &str) -> Result<Vec<i64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut values = Vec::new();
    let mut position = 0;
    for record in reader.records() {
        let record = record?;
        for field in record.iter().filter(|field| !field.is_empty()) {
            position += 1;
            values.push(parse_token(position, field)?);
        }
    }

    Ok(values)
}

pub fn render_sequence(values: &[i64], format: SequenceFormat) -> Result<String> {
    match format {
        SequenceFormat::Text => {
            let joined = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            Ok(format!("[{}]", joined))
        }
        SequenceFormat::Json => Ok(serde_json::to_string(values)?),
        SequenceFormat::Csv => {
            if values.is_empty() {
                // csv 會把空紀錄寫成 `""`，這裡直接輸出空字串
                return Ok(String::new());
            }

            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(Vec::new());
            writer.write_record(values.iter().map(|v| v.to_string()))?;
            let bytes = writer
                .into_inner()
                .map_err(|e| MoverError::IoError(e.into_error()))?;

            String::from_utf8(bytes).map_err(|e| MoverError::ProcessingError {
                message: format!("CSV writer produced invalid UTF-8: {}", e),
            })
        }
    }
}
