/// Main interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two f64 values
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * t
    }

    /// Maps `x` through the piecewise-linear curve defined by `input` and
    /// `output` control points, holding the endpoint values outside the
    /// input range.
    ///
    /// `input` must be non-decreasing and the same length as `output`. An empty
    /// curve returns `x` unchanged; a single point is a constant.
    pub fn clamped(input: &[f64], output: &[f64], x: f64) -> f64 {
        let len = input.len().min(output.len());
        if len == 0 {
            return x;
        }
        if x <= input[0] {
            return output[0];
        }
        if x >= input[len - 1] {
            return output[len - 1];
        }

        // First segment whose right edge is at or past x
        let segment = (0..len - 1).find(|&i| x <= input[i + 1]).unwrap_or(len - 2);
        let (x0, x1) = (input[segment], input[segment + 1]);
        let (y0, y1) = (output[segment], output[segment + 1]);
        if x1 == x0 {
            return y1;
        }
        Self::linear(y0, y1, (x - x0) / (x1 - x0))
    }
}
