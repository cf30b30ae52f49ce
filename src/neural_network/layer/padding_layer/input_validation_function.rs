use super::*;

/// Validates that a shape has exactly four axes.
///
/// # Errors
///
/// Returns `ModelError::InputValidationError` if `rank` is not 4.
pub(super) fn validate_rank_4(rank: usize, layer_name: &str) -> Result<(), ModelError> {
    if rank != 4 {
        return Err(ModelError::InputValidationError(format!(
            "{} only supports rank-4 inputs: [batch_size, height, width, channels] or \
             [batch_size, channels, height, width], got rank {}",
            layer_name, rank
        )));
    }
    Ok(())
}

/// Validates the length of the top-level padding array.
///
/// # Errors
///
/// Returns `ModelError::InputValidationError` if `len` is not 2.
pub(super) fn validate_padding_array_len(len: usize) -> Result<(), ModelError> {
    if len != 2 {
        return Err(ModelError::InputValidationError(format!(
            "ZeroPadding2D expects padding to be a length-2 array, got an array of length {}",
            len
        )));
    }
    Ok(())
}

/// Validates the length of the per-axis `[before, after]` padding pair.
///
/// `component` names the offending axis (`"height"` or `"width"`).
///
/// # Errors
///
/// Returns `ModelError::InputValidationError` if `len` is not 2.
pub(super) fn validate_padding_pair_len(len: usize, component: &str) -> Result<(), ModelError> {
    if len != 2 {
        return Err(ModelError::InputValidationError(format!(
            "ZeroPadding2D expects {} padding to be a length-2 array, got an array of length {}",
            component, len
        )));
    }
    Ok(())
}

/// Converts a JSON value into a pad amount.
///
/// # Errors
///
/// Returns `ModelError::InputValidationError` if the value is not a non-negative integer.
pub(super) fn value_to_pad_amount(
    value: &serde_json::Value,
    component: &str,
) -> Result<usize, ModelError> {
    value
        .as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| {
            ModelError::InputValidationError(format!(
                "ZeroPadding2D expects {} padding to be a non-negative integer, got {}",
                component, value
            ))
        })
}
