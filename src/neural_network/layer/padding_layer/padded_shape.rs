use super::*;
use std::fmt;

/// One axis of a shape descriptor.
///
/// # Variants
///
/// - `Known(n)` - Axis of concrete size `n`
/// - `Unknown` - Axis whose size is not known yet, typically the batch axis of a symbolic input
///
/// Growing an `Unknown` axis yields `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dim {
    Known(usize),
    Unknown,
}

impl Dim {
    /// Returns the concrete size, if known.
    pub fn known(self) -> Option<usize> {
        match self {
            Dim::Known(n) => Some(n),
            Dim::Unknown => None,
        }
    }

    /// Grows the axis by `rhs`, or returns `None` if a known size would overflow `usize`.
    pub fn checked_add(self, rhs: usize) -> Option<Dim> {
        match self {
            Dim::Known(n) => n.checked_add(rhs).map(Dim::Known),
            Dim::Unknown => Some(Dim::Unknown),
        }
    }
}

impl From<usize> for Dim {
    fn from(n: usize) -> Self {
        Dim::Known(n)
    }
}

impl From<Option<usize>> for Dim {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Dim::Unknown, Dim::Known)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Known(n) => write!(f, "{}", n),
            Dim::Unknown => f.write_str("None"),
        }
    }
}

/// Converts a concrete shape into a shape descriptor.
pub fn dims_from_shape(shape: &[usize]) -> Vec<Dim> {
    shape.iter().copied().map(Dim::Known).collect()
}

/// Converts a shape descriptor into a concrete shape, or `None` if any axis is unknown.
pub fn shape_from_dims(dims: &[Dim]) -> Option<Vec<usize>> {
    dims.iter().map(|d| d.known()).collect()
}

/// Formats a shape descriptor as `(None, 4, 5, 3)`.
pub fn format_dims(dims: &[Dim]) -> String {
    let parts: Vec<String> = dims.iter().map(Dim::to_string).collect();
    format!("({})", parts.join(", "))
}

/// Element-type tag carried by symbolic tensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Float32,
    Float64,
    Int32,
}

/// Shape-and-type descriptor of a tensor that has no materialized data.
///
/// # Fields
///
/// - `shape` - Shape descriptor; any axis may be `Dim::Unknown`
/// - `dtype` - Element type of the tensor this descriptor stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolicTensor {
    pub shape: Vec<Dim>,
    pub dtype: DType,
}

impl SymbolicTensor {
    pub fn new(shape: Vec<Dim>, dtype: DType) -> Self {
        SymbolicTensor { shape, dtype }
    }
}

/// Computes the shape of a padded output without touching any data.
///
/// Height grows by `top + bottom`, width by `left + right`; batch and channel axes are
/// copied. Unknown axes stay unknown.
///
/// # Parameters
///
/// - `input_shape` - Rank-4 input shape descriptor
/// - `padding` - Normalized spatial padding
/// - `data_format` - Layout deciding which axes are spatial
///
/// # Returns
///
/// - `Ok(Vec<Dim>)` - Output shape descriptor
/// - `Err(ModelError::InputValidationError)` - If `input_shape` is not rank 4, or if a padded
///   spatial size does not fit in `usize`
///
/// # Example
/// ```rust
/// use rustyml_padding::neural_network::*;
///
/// let padding = PaddingSpec::AxisPair(2, 3).normalize();
/// let input = dims_from_shape(&[1, 2, 3, 4]);
///
/// let output = infer_output_shape(&input, &padding, DataFormat::ChannelsFirst).unwrap();
/// assert_eq!(output, dims_from_shape(&[1, 2, 7, 10]));
/// ```
pub fn infer_output_shape(
    input_shape: &[Dim],
    padding: &NormalizedPadding,
    data_format: DataFormat,
) -> Result<Vec<Dim>, ModelError> {
    validate_rank_4(input_shape.len(), "ZeroPadding2D")?;

    let axes = data_format.axes();
    let mut output_shape = input_shape.to_vec();
    output_shape[axes.height] =
        grow_axis(input_shape[axes.height], padding.height_total(), "height")?;
    output_shape[axes.width] = grow_axis(input_shape[axes.width], padding.width_total(), "width")?;

    Ok(output_shape)
}

fn grow_axis(dim: Dim, total: Option<usize>, component: &str) -> Result<Dim, ModelError> {
    total.and_then(|t| dim.checked_add(t)).ok_or_else(|| {
        ModelError::InputValidationError(format!(
            "ZeroPadding2D {} padding overflows the {} axis of size {}",
            component, component, dim
        ))
    })
}

/// Symbolic counterpart of [`infer_output_shape`], preserving the element-type tag.
pub fn infer_symbolic(
    input: &SymbolicTensor,
    padding: &NormalizedPadding,
    data_format: DataFormat,
) -> Result<SymbolicTensor, ModelError> {
    let shape = infer_output_shape(&input.shape, padding, data_format)?;
    Ok(SymbolicTensor::new(shape, input.dtype))
}
