//! Geometry linking the carousel scroll offset to markers.

use crate::animation::Interpolation;
use crate::core::constants::{MARKER_SCALE_ACTIVE, MARKER_SCALE_REST, SNAP_BIAS};

/// Index of the card considered centered at scroll offset `x`.
///
/// `floor(x / card_width + 0.3)` clamped to `[0, len - 1]`. An empty carousel,
/// a non-positive card width or a non-finite offset all resolve to 0.
pub fn index_for_offset(x: f64, card_width: f64, len: usize) -> usize {
    index_for_offset_biased(x, card_width, len, SNAP_BIAS)
}

/// [`index_for_offset`] with a custom snap bias.
pub fn index_for_offset_biased(x: f64, card_width: f64, len: usize, bias: f64) -> usize {
    if len == 0 || card_width.is_nan() || card_width <= 0.0 || !x.is_finite() {
        return 0;
    }
    let raw = (x / card_width + bias).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(len - 1)
    }
}

/// Scale of marker `index` at scroll offset `x`: 1.5 when its card is
/// centered, 1.0 one card away or further, linear in between. A non-finite
/// offset leaves every marker at rest.
pub fn marker_scale(index: usize, x: f64, card_width: f64) -> f64 {
    if !x.is_finite() || !card_width.is_finite() {
        return MARKER_SCALE_REST;
    }
    let center = index as f64 * card_width;
    Interpolation::clamped(
        &[center - card_width, center, center + card_width],
        &[MARKER_SCALE_REST, MARKER_SCALE_ACTIVE, MARKER_SCALE_REST],
        x,
    )
}

/// Scroll offset that centers card `index`.
pub fn offset_for_index(index: usize, card_width: f64) -> f64 {
    index as f64 * card_width
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 300.0;

    #[test]
    fn test_index_examples() {
        assert_eq!(index_for_offset(0.0, W, 5), 0);
        assert_eq!(index_for_offset(90.0, W, 5), 0);
        assert_eq!(index_for_offset(300.0, W, 5), 1);
        assert_eq!(index_for_offset(810.0, W, 5), 3);
        assert_eq!(index_for_offset(890.0, W, 5), 3);
    }

    #[test]
    fn test_index_snap_bias_boundary() {
        // 0.7 of a card is enough to snap forward
        assert_eq!(index_for_offset(209.0, W, 5), 0);
        assert_eq!(index_for_offset(210.0, W, 5), 1);
    }

    #[test]
    fn test_index_clamps_to_list_bounds() {
        assert_eq!(index_for_offset(-500.0, W, 5), 0);
        assert_eq!(index_for_offset(10_000.0, W, 5), 4);
        assert_eq!(index_for_offset(10_000.0, W, 1), 0);
    }

    #[test]
    fn test_index_degenerate_inputs() {
        assert_eq!(index_for_offset(900.0, W, 0), 0);
        assert_eq!(index_for_offset(900.0, 0.0, 5), 0);
        assert_eq!(index_for_offset(f64::NAN, W, 5), 0);
        assert_eq!(index_for_offset(f64::INFINITY, W, 5), 0);
    }

    #[test]
    fn test_marker_scale_control_points() {
        for i in 0..4 {
            let center = i as f64 * W;
            assert_eq!(marker_scale(i, center, W), 1.5);
            assert_eq!(marker_scale(i, center + W, W), 1.0);
            assert_eq!(marker_scale(i, center - W, W), 1.0);
        }
        assert_eq!(marker_scale(2, 450.0, W), 1.0 + 0.5 * 0.5);
    }

    #[test]
    fn test_marker_scale_never_extrapolates() {
        for step in -40..=40 {
            let x = step as f64 * 50.0;
            let scale = marker_scale(3, x, W);
            assert!((1.0..=1.5).contains(&scale), "scale {scale} at {x}");
        }
        assert_eq!(marker_scale(0, -10_000.0, W), 1.0);
        assert_eq!(marker_scale(0, 10_000.0, W), 1.0);
    }

    #[test]
    fn test_marker_scale_non_finite_offset_rests() {
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(marker_scale(0, x, W), 1.0);
            assert_eq!(marker_scale(2, x, W), 1.0);
        }
        assert_eq!(marker_scale(1, 300.0, f64::NAN), 1.0);
    }

    #[test]
    fn test_offset_for_index() {
        assert_eq!(offset_for_index(3, W), 900.0);
        assert_eq!(index_for_offset(offset_for_index(3, W), W, 5), 3);
    }
}
