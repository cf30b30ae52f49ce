use crate::error::ModelError;
use crate::neural_network::Tensor;
use crate::neural_network::layer::TrainingParameters;
use crate::neural_network::layer::padding_layer::Dim;

/// Defines the interface through which the layer-graph engine drives a layer.
///
/// Gradient computation and graph wiring live outside this crate, so the trait only
/// covers the two call shapes a layer has to answer: concrete forward computation on
/// real data and shape-only inference on symbolic inputs.
pub trait Layer: std::any::Any + Send + Sync {
    /// Performs forward computation through the layer.
    ///
    /// # Parameters
    ///
    /// - `input` - The input tensor to the layer
    ///
    /// # Returns
    ///
    /// - `Ok(Tensor)` - The newly allocated output tensor
    /// - `Err(ModelError)` - If the input does not satisfy the layer's requirements
    fn forward(&mut self, input: &Tensor) -> Result<Tensor, ModelError>;

    /// Infers the output shape for an input shape without touching any data.
    ///
    /// # Parameters
    ///
    /// - `input_shape` - Input shape, where any axis may be `Dim::Unknown`
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Dim>)` - The output shape
    /// - `Err(ModelError)` - If the layer cannot handle an input of this shape
    fn compute_output_shape(&self, input_shape: &[Dim]) -> Result<Vec<Dim>, ModelError>;

    /// Returns the type name of the layer (e.g. "ZeroPadding2D").
    ///
    /// # Returns
    ///
    /// * `&str` - A string slice representing the layer type
    fn layer_type(&self) -> &str {
        "Unknown"
    }

    /// Returns a description of the output shape of the layer.
    ///
    /// # Returns
    ///
    /// - `String` - A string describing the output dimensions
    fn output_shape(&self) -> String {
        "Unknown".to_string()
    }

    /// Returns the total number of trainable parameters in the layer.
    ///
    /// # Returns
    ///
    /// * `TrainingParameters` - The count of parameters as an enum variant
    fn param_count(&self) -> TrainingParameters;
}
