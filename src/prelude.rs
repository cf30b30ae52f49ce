pub use crate::error::{IoError, ModelError};
pub use crate::neural_network::Tensor;
pub use crate::neural_network::backend_config::BackendConfig;
pub use crate::neural_network::layer::TrainingParameters;
pub use crate::neural_network::layer::padding_layer::*;
pub use crate::neural_network::layer::serialize_config::*;
pub use crate::neural_network::neural_network_trait::Layer;
