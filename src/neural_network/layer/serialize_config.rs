use super::*;
use serde::{Deserialize, Deserializer, Serialize};

/// Class name recorded for [`ZeroPadding2D`] layers.
pub const ZERO_PADDING_2D_CLASS_NAME: &str = "ZeroPadding2D";

/// Configuration record of a [`ZeroPadding2D`] layer.
///
/// Field names follow the camelCase convention (`padding`, `dataFormat`); `data_format` is
/// accepted when reading so records written with the snake_case convention load too.
///
/// # Fields
///
/// - `padding` - Padding specification, canonical `[[top, bottom], [left, right]]` when produced by `get_config`;
///   missing or `null` means [`DEFAULT_PADDING`] on every edge
/// - `data_format` - Layout tag; when absent the backend default is used at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZeroPadding2DConfig {
    #[serde(
        default = "default_padding_spec",
        deserialize_with = "padding_or_default"
    )]
    pub padding: PaddingSpec,
    #[serde(
        default,
        alias = "data_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub data_format: Option<DataFormat>,
}

fn default_padding_spec() -> PaddingSpec {
    PaddingSpec::Scalar(DEFAULT_PADDING)
}

/// `"padding": null` reads the same as a missing key.
fn padding_or_default<'de, D>(deserializer: D) -> Result<PaddingSpec, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<PaddingSpec>::deserialize(deserializer)?.unwrap_or_else(default_padding_spec))
}

impl Default for ZeroPadding2DConfig {
    fn default() -> Self {
        ZeroPadding2DConfig {
            padding: default_padding_spec(),
            data_format: None,
        }
    }
}

/// A layer configuration tagged with its class name, as written to disk.
///
/// # Fields
///
/// - `class_name` - Layer class, always `"ZeroPadding2D"` for records this crate writes
/// - `config` - The layer's configuration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedLayer {
    #[serde(alias = "class_name")]
    pub class_name: String,
    pub config: ZeroPadding2DConfig,
}

impl SerializedLayer {
    /// Wraps a configuration record in a `ZeroPadding2D` envelope.
    pub fn zero_padding_2d(config: ZeroPadding2DConfig) -> Self {
        SerializedLayer {
            class_name: ZERO_PADDING_2D_CLASS_NAME.to_string(),
            config,
        }
    }

    /// Returns the configuration record after checking the class name.
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the record describes a different layer class
    pub fn zero_padding_2d_config(&self) -> Result<&ZeroPadding2DConfig, ModelError> {
        if self.class_name != ZERO_PADDING_2D_CLASS_NAME {
            return Err(ModelError::InputValidationError(format!(
                "Expected a {} layer record, got '{}'",
                ZERO_PADDING_2D_CLASS_NAME, self.class_name
            )));
        }
        Ok(&self.config)
    }
}
