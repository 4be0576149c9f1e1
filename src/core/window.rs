pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Fits a padded `(x_span, y_span)` axis window around sampled trajectory
/// points, keeping the fixed distance-to-height ratio so arcs render with a
/// stable aspect regardless of launch parameters.
pub fn axis_window_for_points(points: &[(f64, f64)]) -> (f64, f64) {
    let (raw_max_x, raw_max_y) = points
        .iter()
        .fold((0.0f64, 0.0f64), |(mx, my), &(x, y)| (mx.max(x), my.max(y)));

    let x_pad = raw_max_x.max(1.0) * X_PADDING_RATIO;
    let y_pad = raw_max_y.max(1.0) * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

#[cfg(test)]
mod tests {
    use super::{DISTANCE_TO_HEIGHT_RATIO, axis_window_for_points};

    #[test]
    fn window_keeps_the_fixed_ratio() {
        let (x_span, y_span) = axis_window_for_points(&[(120.0, 35.0), (60.0, 48.0)]);
        assert!(x_span > 120.0);
        assert!(y_span > 48.0);
        assert!((x_span / y_span - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-9);
    }

    #[test]
    fn empty_or_tiny_inputs_fall_back_to_unit_window() {
        let (x_span, y_span) = axis_window_for_points(&[]);
        assert!(x_span >= 1.0);
        assert!(y_span >= 1.0);
        assert!((x_span / y_span - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-9);
    }
}
