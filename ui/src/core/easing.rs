//! Easing curve and progress helpers for the smooth scroller.

/// Cubic ease-in-out over `t` in `[0, 1]`. Inputs outside the range (and NaN)
/// are clamped, so the curve starts at exactly 0 and ends at exactly 1.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if !(t > 0.0) {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Fraction of the animation completed after `elapsed_ms`.
///
/// A zero, negative or non-finite duration means "jump": progress is 1 on the
/// very first frame.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if !(duration_ms > 0.0) || !duration_ms.is_finite() {
        return 1.0;
    }
    let ratio = elapsed_ms / duration_ms;
    if ratio.is_nan() {
        return 1.0;
    }
    ratio.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_are_exact() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
    }

    #[test]
    fn matches_the_piecewise_product_form() {
        for step in 0..=100 {
            let t = step as f64 / 100.0;
            let product = if t < 0.5 {
                4.0 * t * t * t
            } else {
                (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
            };
            assert!((ease_in_out_cubic(t) - product).abs() < 1e-12, "t = {t}");
        }
    }

    #[test]
    fn never_overshoots_and_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=1000 {
            let value = ease_in_out_cubic(step as f64 / 1000.0);
            assert!((0.0..=1.0).contains(&value));
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn clamps_out_of_range_input() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
        assert_eq!(ease_in_out_cubic(f64::NAN), 0.0);
    }

    #[test]
    fn progress_handles_degenerate_durations() {
        assert_eq!(progress(0.0, 0.0), 1.0);
        assert_eq!(progress(0.0, -5.0), 1.0);
        assert_eq!(progress(0.0, f64::INFINITY), 1.0);
        assert_eq!(progress(600.0, 1200.0), 0.5);
        assert_eq!(progress(5000.0, 1200.0), 1.0);
        assert_eq!(progress(-16.0, 1200.0), 0.0);
    }
}
