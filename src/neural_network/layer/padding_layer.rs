use super::*;
use input_validation_function::*;

/// Layout tags and the axis-role table shared by shape inference and padding
pub mod data_format;
/// Argument checks shared by the padding layer modules
mod input_validation_function;
/// Shape-only inference for padded outputs
pub mod padded_shape;
/// Parsing and normalization of user-supplied padding specifications
pub mod padding_spec;
/// Materialization of zero-padded tensors
pub mod tensor_padder;
/// 2D Zero Padding Layer
pub mod zero_padding_2d;

pub use data_format::*;
pub use padded_shape::*;
pub use padding_spec::*;
pub use tensor_padder::*;
pub use zero_padding_2d::*;
