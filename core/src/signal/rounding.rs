/// Rounds `value` to `places` decimal places, ties to even.
///
/// The scaled integer is divided back out rather than multiplied by the
/// reciprocal, so the result is the closest `f64` to the decimal value.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / scale
}
