use super::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Padding applied on every spatial edge when a layer is built without a specification.
pub const DEFAULT_PADDING: usize = 1;

/// User-facing padding specification for 2D spatial padding.
///
/// # Variants
///
/// - `Scalar(p)` - Pad every spatial edge by `p`
/// - `AxisPair(h, w)` - Pad top and bottom by `h`, left and right by `w`
/// - `FullMatrix((top, bottom), (left, right))` - Pad each edge independently
///
/// In JSON a specification is written as `p`, `[h, w]` or `[[top, bottom], [left, right]]`.
/// Deserialization runs the same arity checks as [`PaddingSpec::from_value`].
///
/// # Example
/// ```rust
/// use rustyml_padding::neural_network::*;
///
/// let spec = PaddingSpec::from_value(&serde_json::json!([[2, 3], [4, 5]])).unwrap();
/// assert_eq!(spec, PaddingSpec::FullMatrix((2, 3), (4, 5)));
///
/// let err = PaddingSpec::from_flat(&[2, 3, 4]).unwrap_err();
/// assert!(err.to_string().contains("length-2 array"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum PaddingSpec {
    Scalar(usize),
    AxisPair(usize, usize),
    FullMatrix((usize, usize), (usize, usize)),
}

/// Canonical per-edge padding, always equivalent to `[[top, bottom], [left, right]]`.
///
/// # Fields
///
/// - `top` - Rows inserted before the height extent
/// - `bottom` - Rows inserted after the height extent
/// - `left` - Columns inserted before the width extent
/// - `right` - Columns inserted after the width extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NormalizedPadding {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl NormalizedPadding {
    pub fn new(top: usize, bottom: usize, left: usize, right: usize) -> Self {
        NormalizedPadding {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Returns the padding as `[[top, bottom], [left, right]]`.
    pub fn as_matrix(&self) -> [[usize; 2]; 2] {
        [[self.top, self.bottom], [self.left, self.right]]
    }

    /// Total rows added to the height axis, or `None` if the sum overflows `usize`.
    pub fn height_total(&self) -> Option<usize> {
        self.top.checked_add(self.bottom)
    }

    /// Total columns added to the width axis, or `None` if the sum overflows `usize`.
    pub fn width_total(&self) -> Option<usize> {
        self.left.checked_add(self.right)
    }

    pub fn is_zero(&self) -> bool {
        self.as_matrix() == [[0, 0], [0, 0]]
    }
}

impl PaddingSpec {
    /// Reduces the specification to its canonical per-edge form.
    ///
    /// # Returns
    ///
    /// - `NormalizedPadding` - `[[p, p], [p, p]]`, `[[h, h], [w, w]]` or the matrix itself
    pub fn normalize(&self) -> NormalizedPadding {
        match *self {
            PaddingSpec::Scalar(p) => NormalizedPadding::new(p, p, p, p),
            PaddingSpec::AxisPair(h, w) => NormalizedPadding::new(h, h, w, w),
            PaddingSpec::FullMatrix((top, bottom), (left, right)) => {
                NormalizedPadding::new(top, bottom, left, right)
            }
        }
    }

    /// Parses a flat `[h, w]` array.
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the array does not hold exactly two values
    pub fn from_flat(values: &[usize]) -> Result<Self, ModelError> {
        validate_padding_array_len(values.len())?;
        Ok(PaddingSpec::AxisPair(values[0], values[1]))
    }

    /// Parses a nested `[[top, bottom], [left, right]]` array.
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the outer array does not hold two pairs, or
    ///   if the height or width pair does not hold exactly two values (the message names
    ///   the offending axis)
    pub fn from_nested<P: AsRef<[usize]>>(pairs: &[P]) -> Result<Self, ModelError> {
        validate_padding_array_len(pairs.len())?;
        let height = pairs[0].as_ref();
        let width = pairs[1].as_ref();
        validate_padding_pair_len(height.len(), "height")?;
        validate_padding_pair_len(width.len(), "width")?;
        Ok(PaddingSpec::FullMatrix(
            (height[0], height[1]),
            (width[0], width[1]),
        ))
    }

    /// Parses an untyped JSON padding specification.
    ///
    /// Accepts an integer, an array of two integers, or an array of two arrays of two integers.
    ///
    /// # Errors
    ///
    /// - `ModelError::InputValidationError` - If the value has any other shape or holds
    ///   anything other than non-negative integers
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        match value {
            Value::Number(_) => Ok(PaddingSpec::Scalar(value_to_pad_amount(value, "spatial")?)),
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_array) => {
                validate_padding_array_len(items.len())?;
                let height = pair_from_value(&items[0], "height")?;
                let width = pair_from_value(&items[1], "width")?;
                Self::from_nested(&[height, width])
            }
            Value::Array(items) if items.iter().any(Value::is_array) => {
                Err(ModelError::InputValidationError(format!(
                    "ZeroPadding2D expects padding to be a length-2 array of integers or a \
                     length-2 array of length-2 arrays, got {}",
                    value
                )))
            }
            Value::Array(items) => {
                validate_padding_array_len(items.len())?;
                let flat = items
                    .iter()
                    .map(|v| value_to_pad_amount(v, "spatial"))
                    .collect::<Result<Vec<_>, _>>()?;
                Self::from_flat(&flat)
            }
            other => Err(ModelError::InputValidationError(format!(
                "ZeroPadding2D expects padding to be an integer, a length-2 array or a \
                 length-2 array of length-2 arrays, got {}",
                other
            ))),
        }
    }
}

/// Reads one `[before, after]` padding pair without checking its length.
fn pair_from_value(value: &Value, component: &str) -> Result<Vec<usize>, ModelError> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|v| value_to_pad_amount(v, component))
            .collect(),
        other => Err(ModelError::InputValidationError(format!(
            "ZeroPadding2D expects {} padding to be a length-2 array, got {}",
            component, other
        ))),
    }
}

/// Canonical padding for an optional specification.
///
/// # Parameters
///
/// - `spec` - User-supplied specification, if any
/// - `default_value` - Scalar padding used when `spec` is `None` (conventionally [`DEFAULT_PADDING`])
///
/// # Returns
///
/// - `NormalizedPadding` - The canonical `[[top, bottom], [left, right]]` padding
pub fn normalize(spec: Option<&PaddingSpec>, default_value: usize) -> NormalizedPadding {
    spec.copied()
        .unwrap_or(PaddingSpec::Scalar(default_value))
        .normalize()
}

impl From<usize> for PaddingSpec {
    fn from(p: usize) -> Self {
        PaddingSpec::Scalar(p)
    }
}

impl From<(usize, usize)> for PaddingSpec {
    fn from((h, w): (usize, usize)) -> Self {
        PaddingSpec::AxisPair(h, w)
    }
}

impl From<[[usize; 2]; 2]> for PaddingSpec {
    fn from([[top, bottom], [left, right]]: [[usize; 2]; 2]) -> Self {
        PaddingSpec::FullMatrix((top, bottom), (left, right))
    }
}

impl From<NormalizedPadding> for PaddingSpec {
    fn from(p: NormalizedPadding) -> Self {
        PaddingSpec::FullMatrix((p.top, p.bottom), (p.left, p.right))
    }
}

impl TryFrom<Vec<usize>> for PaddingSpec {
    type Error = ModelError;

    fn try_from(values: Vec<usize>) -> Result<Self, Self::Error> {
        PaddingSpec::from_flat(&values)
    }
}

impl TryFrom<Vec<Vec<usize>>> for PaddingSpec {
    type Error = ModelError;

    fn try_from(pairs: Vec<Vec<usize>>) -> Result<Self, Self::Error> {
        PaddingSpec::from_nested(&pairs)
    }
}

impl TryFrom<Value> for PaddingSpec {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        PaddingSpec::from_value(&value)
    }
}

impl From<PaddingSpec> for Value {
    fn from(spec: PaddingSpec) -> Self {
        match spec {
            PaddingSpec::Scalar(p) => Value::from(p),
            PaddingSpec::AxisPair(h, w) => Value::from(vec![h, w]),
            PaddingSpec::FullMatrix((top, bottom), (left, right)) => {
                Value::from(vec![vec![top, bottom], vec![left, right]])
            }
        }
    }
}
