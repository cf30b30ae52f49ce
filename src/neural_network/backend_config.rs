use super::*;
use crate::neural_network::layer::padding_layer::DataFormat;
use std::env::VarError;

/// Environment variable read by [`BackendConfig::from_env`].
pub const IMAGE_DATA_FORMAT_ENV: &str = "RUSTYML_IMAGE_DATA_FORMAT";

/// Process-wide defaults a layer resolves once, at construction.
///
/// Layers never read this from global state: the caller hands a `BackendConfig` to the
/// constructor, and whatever it holds at that moment is baked into the layer.
///
/// # Fields
///
/// - `image_data_format` - Layout used by image layers constructed without an explicit layout
///
/// # Example
/// ```rust
/// use rustyml_padding::neural_network::*;
///
/// let backend = BackendConfig::new(DataFormat::ChannelsFirst);
/// let layer = ZeroPadding2D::with_backend(None, None, &backend);
/// assert_eq!(layer.data_format(), DataFormat::ChannelsFirst);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendConfig {
    pub image_data_format: DataFormat,
}

impl BackendConfig {
    /// Creates a backend configuration with the given default image layout.
    pub fn new(image_data_format: DataFormat) -> Self {
        BackendConfig { image_data_format }
    }

    /// Reads the default image layout from `RUSTYML_IMAGE_DATA_FORMAT`.
    ///
    /// An unset variable falls back to [`BackendConfig::default`].
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the variable is set to something other than a
    ///   layout tag, including a value that is not valid Unicode
    pub fn from_env() -> Result<Self, ModelError> {
        Self::from_env_value(std::env::var(IMAGE_DATA_FORMAT_ENV))
    }

    /// Resolves the result of looking up [`IMAGE_DATA_FORMAT_ENV`].
    pub(crate) fn from_env_value(value: Result<String, VarError>) -> Result<Self, ModelError> {
        match value {
            Ok(tag) => Self::from_tag(&tag),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(ModelError::InputValidationError(format!(
                "{} must be 'channelsFirst' or 'channelsLast', got non-Unicode value {:?}",
                IMAGE_DATA_FORMAT_ENV, raw
            ))),
        }
    }

    /// Builds a backend configuration from a layout tag such as `"channelsFirst"`.
    pub fn from_tag(tag: &str) -> Result<Self, ModelError> {
        Ok(BackendConfig::new(tag.trim().parse()?))
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            image_data_format: DataFormat::ChannelsLast,
        }
    }
}
