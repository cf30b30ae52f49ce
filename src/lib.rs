/// Error types shared by every module of the crate.
///
/// - `ModelError` - Validation and processing failures raised while building or applying a layer
/// - `IoError` - Failures while reading or writing a serialized layer configuration
pub mod error;

pub use error::*;

/// A convenience module that re-exports the most commonly used types and traits from this crate.
///
/// # Available Components
///
/// - `ZeroPadding2D` layer together with its configuration record
/// - Padding specifications (`PaddingSpec`, `NormalizedPadding`)
/// - Layout tags and the backend default (`DataFormat`, `BackendConfig`)
/// - Shape descriptors for symbolic inference (`Dim`, `SymbolicTensor`, `DType`)
///
/// # Examples
/// ```rust
/// use rustyml_padding::prelude::*;
///
/// let layer = ZeroPadding2D::new(Some(PaddingSpec::AxisPair(1, 2)), Some(DataFormat::ChannelsLast));
/// assert_eq!(layer.padding().as_matrix(), [[1, 1], [2, 2]]);
/// ```
#[cfg(feature = "neural_network")]
pub mod prelude;

/// Components for spatial zero-padding of 4D tensors inside a neural network layer graph.
///
/// # Core Components
///
/// ## Padding Specification
/// - **PaddingSpec**: A single integer, a per-axis pair, or a full `[[top, bottom], [left, right]]` matrix
/// - **NormalizedPadding**: The canonical per-edge pad amounts every specification reduces to
///
/// ## Layout
/// - **DataFormat**: `channelsLast` (batch, height, width, channel) or `channelsFirst` (batch, channel, height, width)
/// - **BackendConfig**: Process-wide default layout, passed explicitly at construction
///
/// ## Shape Inference and Materialization
/// - **infer_output_shape**: Output shape for a possibly partially-unknown input shape
/// - **pad**: Allocates the padded tensor, copies the input into its interior and zero-fills the border
///
/// ## Layer
/// - **ZeroPadding2D**: Layer wrapping the pieces above, with a serializable configuration record
///
/// # Examples
/// ```rust
/// use rustyml_padding::neural_network::*;
/// use ndarray::Array4;
///
/// // Batch of 2 images, 2x2 pixels, 3 channels (channels-last)
/// let x = Array4::<f32>::ones((2, 2, 2, 3)).into_dyn();
///
/// let mut layer = ZeroPadding2D::new(None, Some(DataFormat::ChannelsLast));
/// let y = layer.forward(&x).unwrap();
///
/// assert_eq!(y.shape(), &[2, 4, 4, 3]);
/// ```
#[cfg(feature = "neural_network")]
pub mod neural_network;
