use super::*;
use ndarray::{Axis, IxDyn, Slice, Zip};

/// Threshold for deciding when to copy the interior block in parallel.
/// If the input holds fewer elements than this, the copy runs sequentially.
const TENSOR_PADDER_PARALLEL_THRESHOLD: usize = 65536;

/// Materializes a zero-padded copy of a rank-4 tensor.
///
/// The output is allocated once with the shape given by [`infer_output_shape`] and starts out
/// as all zeros. The input is then copied into the interior block, offset by `top` rows on the
/// height axis and `left` columns on the width axis. Batch and channel indices map unchanged,
/// so every border position stays exactly `0.0`. The input is never mutated.
///
/// # Parameters
///
/// - `input` - Rank-4 input tensor laid out according to `data_format`
/// - `padding` - Normalized spatial padding
/// - `data_format` - Layout deciding which axes are spatial
///
/// # Returns
///
/// - `Ok(Tensor)` - Newly allocated padded tensor
/// - `Err(ModelError::InputValidationError)` - If `input` is not rank 4 or a padded axis overflows
/// - `Err(ModelError::ProcessingError)` - If the padded tensor holds more elements than can be allocated
///
/// # Example
/// ```rust
/// use rustyml_padding::neural_network::*;
/// use ndarray::{Array4, Ix4, s};
///
/// let x = Array4::<f32>::ones((2, 3, 2, 2));
/// let padding = PaddingSpec::Scalar(1).normalize();
///
/// let y = pad(&x.clone().into_dyn(), &padding, DataFormat::ChannelsFirst).unwrap();
/// let y = y.into_dimensionality::<Ix4>().unwrap();
///
/// assert_eq!(y.shape(), &[2, 3, 4, 4]);
/// assert_eq!(y.slice(s![.., .., 1..3, 1..3]), x);
/// assert!(y.slice(s![.., .., 0, ..]).iter().all(|&v| v == 0.0));
/// ```
pub fn pad(
    input: &Tensor,
    padding: &NormalizedPadding,
    data_format: DataFormat,
) -> Result<Tensor, ModelError> {
    validate_rank_4(input.ndim(), "ZeroPadding2D")?;

    let output_dims = infer_output_shape(&dims_from_shape(input.shape()), padding, data_format)?;
    let output_shape = shape_from_dims(&output_dims).ok_or_else(|| {
        ModelError::ProcessingError(format!(
            "Padded shape {} of a concrete tensor must be fully known",
            format_dims(&output_dims)
        ))
    })?;

    validate_element_count(&output_shape)?;

    let mut output = Tensor::zeros(IxDyn(&output_shape));
    let pad_widths = data_format.pad_widths(padding);

    {
        // Narrow the output down to the block that maps back onto the input
        let mut interior = output.view_mut();
        for (axis, &[before, _]) in pad_widths.iter().enumerate() {
            let len = input.len_of(Axis(axis));
            interior.slice_axis_inplace(Axis(axis), Slice::from(before..before + len));
        }

        if input.len() >= TENSOR_PADDER_PARALLEL_THRESHOLD {
            Zip::from(&mut interior)
                .and(input)
                .par_for_each(|dst, &src| *dst = src);
        } else {
            interior.assign(input);
        }
    }

    log::trace!(
        "ZeroPadding2D: padded {:?} to {:?} ({}, pad widths {:?})",
        input.shape(),
        output_shape,
        data_format,
        pad_widths
    );

    Ok(output)
}

/// Checks that an array of `shape` can be constructed.
///
/// ndarray requires the product of the non-zero axis lengths to fit in `isize`.
fn validate_element_count(shape: &[usize]) -> Result<(), ModelError> {
    let count = shape
        .iter()
        .filter(|&&n| n != 0)
        .try_fold(1usize, |acc, &n| acc.checked_mul(n));

    match count {
        Some(n) if n <= isize::MAX as usize => Ok(()),
        _ => Err(ModelError::ProcessingError(format!(
            "Padded shape {:?} holds too many elements to allocate",
            shape
        ))),
    }
}
