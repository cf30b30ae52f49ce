#[cfg(feature = "neural_network")]
use std::fs::File;
#[cfg(feature = "neural_network")]
use std::io::BufReader;

/// Error types that can occur during layer construction and application
///
/// # Variants
///
/// - `InputValidationError` - indicates the input data provided does not meet the expected format, type, or validation rules
/// - `ProcessingError` - indicates that there is something wrong while processing
#[cfg(feature = "neural_network")]
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    InputValidationError(String),
    ProcessingError(String),
}

#[cfg(feature = "neural_network")]
impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::InputValidationError(msg) => write!(f, "Input validation error: {}", msg),
            ModelError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

#[cfg(feature = "neural_network")]
impl std::error::Error for ModelError {}

/// Input/Output error types that can occur during layer configuration serialization and file operations
///
/// # Variants
///
/// - `StdIoError` - Wraps standard I/O errors from file system operations (reading, writing, file access)
/// - `JsonError` - Wraps JSON serialization/deserialization errors when working with JSON data formats
/// - `ModelError` - The configuration was read successfully but does not describe a valid layer
#[cfg(feature = "neural_network")]
#[derive(Debug)]
pub enum IoError {
    StdIoError(std::io::Error),
    JsonError(serde_json::Error),
    ModelError(ModelError),
}

#[cfg(feature = "neural_network")]
impl IoError {
    pub fn load_in_buf_reader(path: &str) -> Result<BufReader<File>, IoError> {
        let file = File::open(path).map_err(IoError::StdIoError)?;
        Ok(BufReader::new(file))
    }
}

#[cfg(feature = "neural_network")]
impl From<ModelError> for IoError {
    fn from(e: ModelError) -> Self {
        IoError::ModelError(e)
    }
}

#[cfg(feature = "neural_network")]
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoError::StdIoError(e) => write!(f, "IO error: {}", e),
            IoError::JsonError(e) => write!(f, "JSON error: {}", e),
            IoError::ModelError(e) => write!(f, "Invalid layer configuration: {}", e),
        }
    }
}

#[cfg(feature = "neural_network")]
impl std::error::Error for IoError {}
