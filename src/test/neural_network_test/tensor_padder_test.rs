use super::*;

fn pad_4d(input: &Array4<f32>, padding: PaddingSpec, data_format: DataFormat) -> Array4<f32> {
    pad(&input.clone().into_dyn(), &padding.normalize(), data_format)
        .unwrap()
        .into_dimensionality::<Ix4>()
        .unwrap()
}

fn all_zero<D: Dimension>(view: ArrayView<f32, D>) -> bool {
    view.iter().all(|&v| v == 0.0)
}

#[test]
fn test_channels_last_default_padding() {
    let x = Array4::<f32>::ones((2, 2, 2, 3));
    let y = pad_4d(&x, PaddingSpec::Scalar(DEFAULT_PADDING), DataFormat::ChannelsLast);

    assert_eq!(y.shape(), &[2, 4, 4, 3]);
    assert_eq!(y.slice(s![.., 1..3, 1..3, ..]), x);

    // Top and bottom rows, left and right columns
    assert!(all_zero(y.slice(s![.., 0..1, .., ..])));
    assert!(all_zero(y.slice(s![.., 3..4, .., ..])));
    assert!(all_zero(y.slice(s![.., .., 0..1, ..])));
    assert!(all_zero(y.slice(s![.., .., 3..4, ..])));
}

#[test]
fn test_channels_first_default_padding() {
    let x = Array4::<f32>::ones((2, 3, 2, 2));
    let y = pad_4d(&x, PaddingSpec::Scalar(DEFAULT_PADDING), DataFormat::ChannelsFirst);

    assert_eq!(y.shape(), &[2, 3, 4, 4]);
    assert_eq!(y.slice(s![.., .., 1..3, 1..3]), x);

    assert!(all_zero(y.slice(s![.., .., 0..1, ..])));
    assert!(all_zero(y.slice(s![.., .., 3..4, ..])));
    assert!(all_zero(y.slice(s![.., .., .., 0..1])));
    assert!(all_zero(y.slice(s![.., .., .., 3..4])));
}

#[test]
fn test_asymmetric_padding_channels_last() {
    let x = Array4::<f32>::ones((2, 2, 2, 3));
    let y = pad_4d(&x, PaddingSpec::FullMatrix((2, 1), (2, 1)), DataFormat::ChannelsLast);

    assert_eq!(y.shape(), &[2, 5, 5, 3]);
    assert_eq!(y.slice(s![.., 2..4, 2..4, ..]), x);

    assert!(all_zero(y.slice(s![.., 0..2, .., ..])));
    assert!(all_zero(y.slice(s![.., 4.., .., ..])));
    assert!(all_zero(y.slice(s![.., .., 0..2, ..])));
    assert!(all_zero(y.slice(s![.., .., 4.., ..])));

    // The interior holds exactly the input's elements and nothing else is non-zero
    assert_eq!(y.sum(), x.sum());
}

#[test]
fn test_every_position_maps_to_input_or_zero() {
    let x = generate_data((2, 3, 4, 5));
    let padding = PaddingSpec::FullMatrix((1, 2), (3, 0));
    let normalized = padding.normalize();

    for data_format in [DataFormat::ChannelsFirst, DataFormat::ChannelsLast] {
        let y = pad_4d(&x, padding, data_format);
        let axes = data_format.axes();
        let before = data_format.pad_widths(&normalized);

        for (index, &value) in y.indexed_iter() {
            let index = [index.0, index.1, index.2, index.3];
            let mut source = [0usize; 4];
            let mut inside = true;
            for axis in 0..4 {
                let shifted = index[axis] as isize - before[axis][0] as isize;
                if shifted < 0 || shifted as usize >= x.len_of(Axis(axis)) {
                    inside = false;
                    break;
                }
                source[axis] = shifted as usize;
            }

            if inside {
                assert_eq!(value, x[source], "{:?} at {:?}", data_format, index);
            } else {
                assert_eq!(value, 0.0, "{:?} at {:?}", data_format, index);
            }
        }

        // Batch and channel extents are untouched
        assert_eq!(y.len_of(Axis(axes.batch)), x.len_of(Axis(axes.batch)));
        assert_eq!(y.len_of(Axis(axes.channel)), x.len_of(Axis(axes.channel)));
    }
}

#[test]
fn test_zero_padding_is_identity() {
    let x = generate_data((2, 3, 4, 5));

    for data_format in [DataFormat::ChannelsFirst, DataFormat::ChannelsLast] {
        let y = pad_4d(&x, PaddingSpec::FullMatrix((0, 0), (0, 0)), data_format);
        assert_eq!(y, x);
    }
}

#[test]
fn test_negative_values_are_copied_verbatim() {
    let x = generate_data((1, 2, 2, 2)).mapv(|v| -v);
    let y = pad_4d(&x, PaddingSpec::AxisPair(1, 0), DataFormat::ChannelsLast);

    assert_eq!(y.shape(), &[1, 4, 2, 2]);
    assert_eq!(y.slice(s![.., 1..3, .., ..]), x);
    assert!(all_zero(y.slice(s![.., 0..1, .., ..])));
    assert!(all_zero(y.slice(s![.., 3..4, .., ..])));
}

#[test]
fn test_input_is_not_mutated() {
    let x = generate_data((2, 2, 3, 3)).into_dyn();
    let snapshot = x.clone();

    let padding = PaddingSpec::Scalar(2).normalize();
    let y = pad(&x, &padding, DataFormat::ChannelsFirst).unwrap();

    assert_eq!(x, snapshot);
    assert_eq!(y.shape(), &[2, 2, 7, 7]);
}

#[test]
fn test_large_input_matches_sequential_copy() {
    // 4 * 64 * 64 * 8 elements, above the parallel copy threshold
    let x = generate_data((4, 64, 64, 8));
    let y = pad_4d(&x, PaddingSpec::FullMatrix((3, 1), (0, 2)), DataFormat::ChannelsLast);

    assert_eq!(y.shape(), &[4, 68, 66, 8]);
    assert_eq!(y.slice(s![.., 3..67, 0..64, ..]), x);
    assert!(all_zero(y.slice(s![.., 0..3, .., ..])));
    assert!(all_zero(y.slice(s![.., 67.., .., ..])));
    assert!(all_zero(y.slice(s![.., .., 64.., ..])));
}

#[test]
fn test_empty_batch_is_padded() {
    let x = Array4::<f32>::zeros((0, 2, 2, 3));
    let y = pad_4d(&x, PaddingSpec::Scalar(1), DataFormat::ChannelsLast);
    assert_eq!(y.shape(), &[0, 4, 4, 3]);
}

#[test]
fn test_non_4d_input_is_rejected() {
    let padding = PaddingSpec::Scalar(1).normalize();

    let x3 = Array3::<f32>::ones((2, 3, 3)).into_dyn();
    let result = pad(&x3, &padding, DataFormat::ChannelsLast);
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));

    let x5 = Array5::<f32>::ones((1, 2, 3, 3, 1)).into_dyn();
    let result = pad(&x5, &padding, DataFormat::ChannelsFirst);
    assert!(matches!(result, Err(ModelError::InputValidationError(_))));
}

#[test]
fn test_unallocatable_output_is_an_error() {
    let x = Array4::<f32>::zeros((1, 1, 1, 1)).into_dyn();

    // Element count overflows usize
    let padding = PaddingSpec::Scalar(usize::MAX / 4).normalize();
    let result = pad(&x, &padding, DataFormat::ChannelsLast);
    assert!(matches!(result, Err(ModelError::ProcessingError(_))));

    // Element count fits in usize but not in isize
    let padding = PaddingSpec::FullMatrix((isize::MAX as usize, 1), (0, 0)).normalize();
    let result = pad(&x, &padding, DataFormat::ChannelsFirst);
    assert!(matches!(result, Err(ModelError::ProcessingError(_))));

    // The layer reports the failure and keeps its state
    let mut layer = ZeroPadding2D::new(Some(PaddingSpec::Scalar(usize::MAX / 4)), None);
    assert!(matches!(
        layer.forward(&x),
        Err(ModelError::ProcessingError(_))
    ));
    assert_eq!(layer.output_shape(), "Unknown");
}
