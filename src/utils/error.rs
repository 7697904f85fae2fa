use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoverError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Input '{path}' is not valid UTF-8: {source}")]
    EncodingError {
        path: String,
        source: std::string::FromUtf8Error,
    },

    #[error("Cannot parse token #{position} ('{token}') as an integer")]
    ParseError { position: usize, token: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl MoverError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MoverError::IoError(_) => ErrorCategory::Io,
            MoverError::CsvError(_)
            | MoverError::SerializationError(_)
            | MoverError::EncodingError { .. }
            | MoverError::ParseError { .. } => ErrorCategory::Input,
            MoverError::ConfigValidationError { .. }
            | MoverError::InvalidConfigValueError { .. }
            | MoverError::MissingConfigError { .. } => ErrorCategory::Configuration,
            MoverError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLIs.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MoverError::IoError(_) => "Check that the input file exists and the output directory is writable",
            MoverError::CsvError(_) => "Make sure the CSV file contains only integers, without a header row",
            MoverError::SerializationError(_) => {
                "JSON input must be an array of integers or an object with a \"values\" array"
            }
            MoverError::EncodingError { .. } => "Save the input file as UTF-8 text",
            MoverError::ParseError { .. } => {
                "Separate integers with commas or whitespace, e.g. 0,1,0,3,12"
            }
            MoverError::ConfigValidationError { .. } | MoverError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            MoverError::MissingConfigError { .. } => {
                "Provide the sequence with --values or --input (or [source] in the TOML file)"
            }
            MoverError::ProcessingError { .. } => "This is a bug; please report it with the input sequence",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MoverError::IoError(e) => format!("File operation failed: {}", e),
            MoverError::ParseError { position, token } => {
                format!("Input value #{} ('{}') is not an integer", position, token)
            }
            MoverError::MissingConfigError { field } => {
                format!("No {} sequence was given", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MoverError>;
