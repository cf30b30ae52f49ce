use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis ordering convention for 4D image tensors.
///
/// # Variants
///
/// - `ChannelsLast` - \[batch_size, height, width, channels\]
/// - `ChannelsFirst` - \[batch_size, channels, height, width\]
///
/// Serialized as `"channelsLast"` / `"channelsFirst"`; the snake_case spellings used by
/// persisted Keras configurations are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataFormat {
    #[serde(rename = "channelsLast", alias = "channels_last")]
    ChannelsLast,
    #[serde(rename = "channelsFirst", alias = "channels_first")]
    ChannelsFirst,
}

/// Index of each axis role inside a rank-4 shape.
///
/// # Fields
///
/// - `batch` - Batch axis (always 0)
/// - `height` - First spatial axis
/// - `width` - Second spatial axis
/// - `channel` - Channel axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRoles {
    pub batch: usize,
    pub height: usize,
    pub width: usize,
    pub channel: usize,
}

const CHANNELS_LAST_AXES: AxisRoles = AxisRoles {
    batch: 0,
    height: 1,
    width: 2,
    channel: 3,
};

const CHANNELS_FIRST_AXES: AxisRoles = AxisRoles {
    batch: 0,
    channel: 1,
    height: 2,
    width: 3,
};

impl DataFormat {
    /// Returns the axis-role assignment for this layout.
    pub fn axes(self) -> AxisRoles {
        match self {
            DataFormat::ChannelsLast => CHANNELS_LAST_AXES,
            DataFormat::ChannelsFirst => CHANNELS_FIRST_AXES,
        }
    }

    /// Returns the `[before, after]` pad amounts for every axis of a rank-4 tensor.
    ///
    /// Batch and channel axes are never padded.
    ///
    /// # Parameters
    ///
    /// - `padding` - Normalized spatial padding
    ///
    /// # Returns
    ///
    /// - `[[usize; 2]; 4]` - Pad widths indexed by axis position
    pub fn pad_widths(self, padding: &NormalizedPadding) -> [[usize; 2]; 4] {
        let axes = self.axes();
        let mut widths = [[0, 0]; 4];
        widths[axes.height] = [padding.top, padding.bottom];
        widths[axes.width] = [padding.left, padding.right];
        widths
    }

    /// Returns the layout tag used in layer configurations.
    pub fn as_str(self) -> &'static str {
        match self {
            DataFormat::ChannelsLast => "channelsLast",
            DataFormat::ChannelsFirst => "channelsFirst",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "channelsLast" | "channels_last" => Ok(DataFormat::ChannelsLast),
            "channelsFirst" | "channels_first" => Ok(DataFormat::ChannelsFirst),
            other => Err(ModelError::InputValidationError(format!(
                "Unknown data format '{}': expected 'channelsFirst' or 'channelsLast'",
                other
            ))),
        }
    }
}
