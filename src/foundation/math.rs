/// Intrinsic lengths below this are treated as "no size": the node fills its span.
pub const FILL_EPSILON: f64 = f64::EPSILON;

/// Multiplier spans at or below this are degenerate for required-size computation.
pub const SPAN_EPSILON: f64 = f64::EPSILON;

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn is_fill_length(length: f64) -> bool {
    length < FILL_EPSILON
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
