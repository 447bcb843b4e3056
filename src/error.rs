/// Error types that can occur during transform operations
///
/// # Variants
///
/// - `InputValidationError` - indicates the input data or transform configuration does not meet the expected format, shape, or validation rules
/// - `MissingKey` - indicates a transform was asked to augment a batch entry that does not exist
/// - `ProcessingError` - indicates that something went wrong while applying a transform or drawing samples
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    InputValidationError(String),
    MissingKey(String),
    ProcessingError(String),
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::InputValidationError(msg) => {
                write!(f, "Input validation error: {}", msg)
            }
            TransformError::MissingKey(key) => {
                write!(f, "Batch does not contain an entry with key \"{}\"", key)
            }
            TransformError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
        }
    }
}

impl std::error::Error for TransformError {}
