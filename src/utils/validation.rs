use crate::utils::error::{MoverError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 輸出檔名只能是單一檔名，不可包含路徑分隔符
pub fn validate_file_stem(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if value.contains('/') || value.contains('\\') || value == "." || value == ".." {
        return Err(MoverError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Must be a bare file name without directories".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<T: std::hash::Hash + Eq + std::fmt::Debug>(
    field_name: &str,
    items: &[T],
) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return Err(MoverError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format!("{:?}", item),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

/// `--values` 與 `--input` 只能擇一
pub fn validate_exclusive<A, B>(
    field_name: &str,
    first: &Option<A>,
    second: &Option<B>,
) -> Result<()> {
    if first.is_some() && second.is_some() {
        return Err(MoverError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Inline values and an input path cannot both be set".to_string(),
        });
    }
    Ok(())
}
