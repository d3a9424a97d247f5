//! Revenue-to-target percentage

/// Percentage text for the total/target display.
///
/// A zero on either side shows `"0%"`, including zero revenue against a
/// real target.
pub fn percent_text(revenue: u64, target: u64) -> String {
    if revenue == 0 || target == 0 {
        return "0%".to_string();
    }
    let percent = revenue as f64 / target as f64 * 100.0;
    format!("{}%", one_decimal(percent))
}

/// `value` with one decimal, rounding exact halves away from zero like
/// JavaScript's `toFixed(1)`.
///
/// A double sits exactly halfway between two tenths only when it is an odd
/// multiple of 0.25. Those are rounded here; everything else already
/// formats correctly with `{:.1}`.
pub fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    let is_tie = value.is_finite() && quarters.fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if is_tie {
        let rounded = (value * 10.0).round() / 10.0;
        format!("{rounded:.1}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_of_target() {
        assert_eq!(percent_text(500, 1000), "50.0%");
    }

    #[test]
    fn zero_target_or_revenue() {
        assert_eq!(percent_text(500, 0), "0%");
        assert_eq!(percent_text(0, 1000), "0%");
        assert_eq!(percent_text(0, 0), "0%");
    }

    #[test]
    fn one_decimal_and_overshoot() {
        assert_eq!(percent_text(1, 3), "33.3%");
        assert_eq!(percent_text(2, 3), "66.7%");
        assert_eq!(percent_text(3_000_000, 2_000_000), "150.0%");
    }

    #[test]
    fn exact_halves_round_up() {
        assert_eq!(percent_text(1, 16), "6.3%");
        assert_eq!(percent_text(1_000_000, 16_000_000), "6.3%");
        assert_eq!(percent_text(3, 16), "18.8%");
        assert_eq!(one_decimal(0.25), "0.3");
        assert_eq!(one_decimal(-0.25), "-0.3");
    }

    #[test]
    fn near_halves_follow_the_stored_double() {
        // 1.15 is stored as 1.1499999...
        assert_eq!(one_decimal(1.15), "1.1");
        // 0.35 is stored just below the half; scaling by 10 first would hide that
        assert_eq!(one_decimal(0.35), "0.3");
        assert_eq!(one_decimal(80.0), "80.0");
    }
}
