use super::*;

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    assert_eq!(lerp(10.0, 30.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 30.0, 1.0), 30.0);
    assert_eq!(lerp(10.0, 30.0, 0.5), 20.0);
}

#[test]
fn only_near_zero_lengths_fill() {
    assert!(is_fill_length(0.0));
    assert!(!is_fill_length(0.5));
    assert!(!is_fill_length(1.0));
}
