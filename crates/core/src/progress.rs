//! Progress bar tones and width parsing

use crate::percent::one_decimal;

/// At or above this percentage a bar is green
pub const GREEN_THRESHOLD: f64 = 100.0;
/// At or above this percentage (and below green) a bar is orange
pub const ORANGE_THRESHOLD: f64 = 74.0;

/// Color class of a progress bar and its percent label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Orange,
    Green,
}

impl Tone {
    pub const ALL: [Self; 3] = [Self::Red, Self::Orange, Self::Green];

    pub fn for_percent(percent: f64) -> Self {
        if percent >= GREEN_THRESHOLD {
            Self::Green
        } else if percent >= ORANGE_THRESHOLD {
            Self::Orange
        } else {
            Self::Red
        }
    }

    pub const fn bar_class(self) -> &'static str {
        match self {
            Self::Red => "metric-progress-red",
            Self::Orange => "metric-progress-orange",
            Self::Green => "metric-progress-green",
        }
    }

    pub const fn label_class(self) -> &'static str {
        match self {
            Self::Red => "metric-percent-red",
            Self::Orange => "metric-percent-orange",
            Self::Green => "metric-percent-green",
        }
    }
}

/// Leading number of a CSS length such as `"82.5%"`.
///
/// Mirrors `parseFloat`: leading whitespace is skipped, trailing units are
/// ignored, and `None` means there was no number at all.
pub fn parse_css_number(style: &str) -> Option<f64> {
    let s = style.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        } else if has_digits {
            end = frac_start;
        }
    }
    if !has_digits {
        return None;
    }
    s[..end].parse().ok()
}

/// Width style for a percentage, one decimal
pub fn width_css(percent: f64) -> String {
    format!("{}%", one_decimal(percent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_thresholds() {
        assert_eq!(Tone::for_percent(50.0), Tone::Red);
        assert_eq!(Tone::for_percent(73.9), Tone::Red);
        assert_eq!(Tone::for_percent(74.0), Tone::Orange);
        assert_eq!(Tone::for_percent(99.0), Tone::Orange);
        assert_eq!(Tone::for_percent(100.0), Tone::Green);
        assert_eq!(Tone::for_percent(180.0), Tone::Green);
    }

    #[test]
    fn classes_per_tone() {
        assert_eq!(Tone::Orange.bar_class(), "metric-progress-orange");
        assert_eq!(Tone::Green.label_class(), "metric-percent-green");
    }

    #[test]
    fn parses_like_parse_float() {
        assert_eq!(parse_css_number("82.5%"), Some(82.5));
        assert_eq!(parse_css_number(" 40%"), Some(40.0));
        assert_eq!(parse_css_number("100"), Some(100.0));
        assert_eq!(parse_css_number(".5%"), Some(0.5));
        assert_eq!(parse_css_number("7.%"), Some(7.0));
        assert_eq!(parse_css_number("-3px"), Some(-3.0));
    }

    #[test]
    fn unparseable_widths() {
        assert_eq!(parse_css_number(""), None);
        assert_eq!(parse_css_number("auto"), None);
        assert_eq!(parse_css_number("%"), None);
        assert_eq!(parse_css_number("-."), None);
    }

    #[test]
    fn width_has_one_decimal() {
        assert_eq!(width_css(0.0), "0.0%");
        assert_eq!(width_css(33.333), "33.3%");
        assert_eq!(width_css(80.25), "80.3%");
        assert_eq!(width_css(12.75), "12.8%");
    }
}
