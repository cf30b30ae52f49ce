use super::*;
use serde_json::{Value, from_reader, to_writer_pretty};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Input handed to [`ZeroPadding2D::apply`] by the layer-graph engine.
///
/// # Variants
///
/// - `Symbolic` - Shape-only descriptor; only shape inference runs
/// - `Concrete` - Real data; the padded tensor is materialized
#[derive(Debug, Clone, Copy)]
pub enum LayerInput<'a> {
    Symbolic(&'a SymbolicTensor),
    Concrete(&'a Tensor),
}

/// Result of [`ZeroPadding2D::apply`], mirroring the kind of input it was given.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerOutput {
    Symbolic(SymbolicTensor),
    Concrete(Tensor),
}

impl LayerOutput {
    /// Shape descriptor of the output, whichever kind it is.
    pub fn shape(&self) -> Vec<Dim> {
        match self {
            LayerOutput::Symbolic(t) => t.shape.clone(),
            LayerOutput::Concrete(t) => dims_from_shape(t.shape()),
        }
    }

    pub fn into_concrete(self) -> Option<Tensor> {
        match self {
            LayerOutput::Concrete(t) => Some(t),
            LayerOutput::Symbolic(_) => None,
        }
    }

    pub fn into_symbolic(self) -> Option<SymbolicTensor> {
        match self {
            LayerOutput::Symbolic(t) => Some(t),
            LayerOutput::Concrete(_) => None,
        }
    }
}

/// Zero-padding layer for 2D spatial data (images).
///
/// Inserts rows of zeros above and below, and columns of zeros left and right of the spatial
/// extent of a rank-4 tensor. Batch and channel axes are left untouched. The padding
/// specification is normalized once, at construction, and never changes afterwards.
///
/// # Fields
///
/// - `padding` - Canonical `[[top, bottom], [left, right]]` padding
/// - `data_format` - Resolved layout (`channelsLast` or `channelsFirst`)
/// - `output_shape` - Output shape of the most recent call, used by `output_shape()`
///
/// # Shape Information
///
/// - `channelsLast`: \[batch, height, width, channels\] -> \[batch, height + top + bottom, width + left + right, channels\]
/// - `channelsFirst`: \[batch, channels, height, width\] -> \[batch, channels, height + top + bottom, width + left + right\]
///
/// # Example
/// ```rust
/// use rustyml_padding::neural_network::*;
/// use ndarray::Array4;
///
/// // Batch size=2, 2x2 pixels, 3 channels
/// let x = Array4::<f32>::ones((2, 2, 2, 3)).into_dyn();
///
/// // Two rows on top, one at the bottom, two columns left, one on the right
/// let mut layer = ZeroPadding2D::new(
///     Some(PaddingSpec::FullMatrix((2, 1), (2, 1))),
///     Some(DataFormat::ChannelsLast),
/// );
///
/// let y = layer.forward(&x).unwrap();
/// assert_eq!(y.shape(), &[2, 5, 5, 3]);
///
/// // Symbolic inputs only go through shape inference
/// let symbolic = SymbolicTensor::new(
///     vec![Dim::Unknown, Dim::Known(2), Dim::Known(2), Dim::Known(3)],
///     DType::Float32,
/// );
/// let out = layer.apply(LayerInput::Symbolic(&symbolic)).unwrap();
/// assert_eq!(out.shape(), vec![Dim::Unknown, Dim::Known(5), Dim::Known(5), Dim::Known(3)]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroPadding2D {
    padding: NormalizedPadding,
    data_format: DataFormat,
    output_shape: Option<Vec<Dim>>,
}

impl ZeroPadding2D {
    /// Creates a new zero-padding layer, taking the default layout from [`BackendConfig::default`].
    ///
    /// # Parameters
    ///
    /// - `padding` - Padding specification; `None` pads every edge by [`DEFAULT_PADDING`]
    /// - `data_format` - Layout of the inputs; `None` uses the backend default
    ///
    /// # Returns
    ///
    /// * `ZeroPadding2D` - A new layer instance
    pub fn new(padding: Option<PaddingSpec>, data_format: Option<DataFormat>) -> Self {
        Self::with_backend(padding, data_format, &BackendConfig::default())
    }

    /// Creates a new zero-padding layer, resolving a missing layout from `backend`.
    ///
    /// # Parameters
    ///
    /// - `padding` - Padding specification; `None` pads every edge by [`DEFAULT_PADDING`]
    /// - `data_format` - Layout of the inputs; `None` uses `backend.image_data_format`
    /// - `backend` - Backend defaults, read once here
    ///
    /// # Returns
    ///
    /// * `ZeroPadding2D` - A new layer instance
    pub fn with_backend(
        padding: Option<PaddingSpec>,
        data_format: Option<DataFormat>,
        backend: &BackendConfig,
    ) -> Self {
        let padding = normalize(padding.as_ref(), DEFAULT_PADDING);
        let data_format = data_format.unwrap_or(backend.image_data_format);

        log::debug!(
            "ZeroPadding2D: padding {:?}, data format {}",
            padding.as_matrix(),
            data_format
        );

        ZeroPadding2D {
            padding,
            data_format,
            output_shape: None,
        }
    }

    /// Builds a layer from its configuration record.
    pub fn from_config(config: &ZeroPadding2DConfig, backend: &BackendConfig) -> Self {
        Self::with_backend(Some(config.padding), config.data_format, backend)
    }

    /// Builds a layer from an untyped JSON configuration such as
    /// `{"padding": [[1, 2], [3, 4]], "dataFormat": "channelsFirst"}`.
    ///
    /// Both keys are optional; `data_format` is accepted in place of `dataFormat`.
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the value is not an object, the padding is
    ///   malformed, or the layout tag is unknown
    pub fn from_json(value: &Value, backend: &BackendConfig) -> Result<Self, ModelError> {
        let object = value.as_object().ok_or_else(|| {
            ModelError::InputValidationError(format!(
                "ZeroPadding2D configuration must be a JSON object, got {}",
                value
            ))
        })?;

        let padding = match object.get("padding") {
            None | Some(Value::Null) => None,
            Some(spec) => Some(PaddingSpec::from_value(spec)?),
        };

        let data_format = match object.get("dataFormat").or_else(|| object.get("data_format")) {
            None | Some(Value::Null) => None,
            Some(Value::String(tag)) => Some(tag.parse::<DataFormat>()?),
            Some(other) => {
                return Err(ModelError::InputValidationError(format!(
                    "ZeroPadding2D data format must be a string, got {}",
                    other
                )));
            }
        };

        Ok(Self::with_backend(padding, data_format, backend))
    }

    /// Records the expected input shape so `output_shape()` can report it before the first call.
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If `input_shape` is not rank 4
    pub fn with_input_shape(mut self, input_shape: &[Dim]) -> Result<Self, ModelError> {
        self.output_shape = Some(self.compute_output_shape(input_shape)?);
        Ok(self)
    }

    /// Returns the canonical padding of this layer.
    pub fn padding(&self) -> &NormalizedPadding {
        &self.padding
    }

    /// Returns the resolved layout of this layer.
    pub fn data_format(&self) -> DataFormat {
        self.data_format
    }

    /// Returns the configuration record of this layer, with the padding in canonical form
    /// and the layout resolved.
    pub fn get_config(&self) -> ZeroPadding2DConfig {
        ZeroPadding2DConfig {
            padding: PaddingSpec::from(self.padding),
            data_format: Some(self.data_format),
        }
    }

    /// Applies the layer to either a symbolic or a concrete input.
    ///
    /// # Parameters
    ///
    /// - `input` - Shape-only descriptor or real tensor
    ///
    /// # Returns
    ///
    /// - `Ok(LayerOutput::Symbolic)` - For symbolic inputs: the output descriptor, same element type
    /// - `Ok(LayerOutput::Concrete)` - For concrete inputs: the padded tensor
    /// - `Err(ModelError)` - If the input is not rank 4
    pub fn apply(&mut self, input: LayerInput<'_>) -> Result<LayerOutput, ModelError> {
        let output = match input {
            LayerInput::Symbolic(symbolic) => {
                LayerOutput::Symbolic(infer_symbolic(symbolic, &self.padding, self.data_format)?)
            }
            LayerInput::Concrete(tensor) => {
                LayerOutput::Concrete(pad(tensor, &self.padding, self.data_format)?)
            }
        };

        self.output_shape = Some(output.shape());
        Ok(output)
    }

    /// Serializes the layer's configuration record, tagged with its class name.
    pub fn to_json_string(&self) -> Result<String, IoError> {
        serde_json::to_string(&SerializedLayer::zero_padding_2d(self.get_config()))
            .map_err(IoError::JsonError)
    }

    /// Rebuilds a layer from a string produced by [`ZeroPadding2D::to_json_string`].
    ///
    /// # Errors
    ///
    /// - `IoError::JsonError` - If the string is not a valid layer record
    /// - `IoError::ModelError` - If the record describes a different layer class
    pub fn from_json_str(json: &str, backend: &BackendConfig) -> Result<Self, IoError> {
        let record: SerializedLayer = serde_json::from_str(json).map_err(IoError::JsonError)?;
        Ok(Self::from_config(record.zero_padding_2d_config()?, backend))
    }

    /// Saves the layer's configuration record to a JSON file.
    ///
    /// # Parameters
    ///
    /// - `path` - File path to write to; an existing file is overwritten
    ///
    /// # Errors
    ///
    /// - `IoError::StdIoError` - If the file cannot be created or written
    /// - `IoError::JsonError` - If serialization fails
    pub fn save_to_path(&self, path: &str) -> Result<(), IoError> {
        let file = File::create(path).map_err(IoError::StdIoError)?;
        let mut writer = BufWriter::new(file);

        to_writer_pretty(&mut writer, &SerializedLayer::zero_padding_2d(self.get_config()))
            .map_err(IoError::JsonError)?;

        writer.flush().map_err(IoError::StdIoError)?;
        Ok(())
    }

    /// Loads a layer from a JSON file written by [`ZeroPadding2D::save_to_path`].
    ///
    /// # Errors
    ///
    /// - `IoError::StdIoError` - If the file cannot be opened
    /// - `IoError::JsonError` - If the file is not a valid layer record
    /// - `IoError::ModelError` - If the record describes a different layer class
    pub fn load_from_path(path: &str, backend: &BackendConfig) -> Result<Self, IoError> {
        let reader = IoError::load_in_buf_reader(path)?;
        let record: SerializedLayer = from_reader(reader).map_err(IoError::JsonError)?;
        Ok(Self::from_config(record.zero_padding_2d_config()?, backend))
    }
}

impl Layer for ZeroPadding2D {
    fn forward(&mut self, input: &Tensor) -> Result<Tensor, ModelError> {
        let output = pad(input, &self.padding, self.data_format)?;
        self.output_shape = Some(dims_from_shape(output.shape()));
        Ok(output)
    }

    fn compute_output_shape(&self, input_shape: &[Dim]) -> Result<Vec<Dim>, ModelError> {
        infer_output_shape(input_shape, &self.padding, self.data_format)
    }

    fn layer_type(&self) -> &str {
        "ZeroPadding2D"
    }

    fn output_shape(&self) -> String {
        match &self.output_shape {
            Some(shape) => format_dims(shape),
            None => String::from("Unknown"),
        }
    }

    fn param_count(&self) -> TrainingParameters {
        TrainingParameters::NoTrainable
    }
}
