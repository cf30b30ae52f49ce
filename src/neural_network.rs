/// Process-wide defaults consulted once when a layer is constructed
pub mod backend_config;
/// Layer implementations and their shared building blocks
pub mod layer;
/// Traits implemented by layers
pub mod neural_network_trait;

pub use backend_config::*;
pub use layer::*;
pub use neural_network_trait::*;

use crate::{IoError, ModelError};
use ndarray::ArrayD;

/// Type alias for n-dimensional arrays used as tensors in the neural network
pub type Tensor = ArrayD<f32>;
