use super::*;

/// Trainable-parameter count reported by a layer in a model summary.
///
/// # Variants
///
/// - `Trainable(usize)` - The layer owns this many trainable parameters
/// - `NoTrainable` - The layer has no trainable parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingParameters {
    Trainable(usize),
    NoTrainable,
}

/// Spatial padding layers and the shape/layout machinery they share
pub mod padding_layer;
/// Serializable configuration records for layers
pub mod serialize_config;

pub use padding_layer::*;
pub use serialize_config::*;
