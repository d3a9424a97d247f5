//! Currency formatting
//!
//! Amounts are whole currency units. Input may contain any decoration
//! (labels, separators, spaces); only ASCII digits are kept.

/// Locale used for thousands grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// `id-ID`, groups with `.`
    #[default]
    Indonesian,
    /// `en-US`, groups with `,`
    English,
    /// `de-CH`, groups with `'`
    Swiss,
}

impl Locale {
    /// Resolve a BCP-47 tag. Unknown tags fall back to the default locale.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Self::English,
            "de" if tag.to_ascii_uppercase().ends_with("CH") => Self::Swiss,
            _ => Self::Indonesian,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Indonesian => "id-ID",
            Self::English => "en-US",
            Self::Swiss => "de-CH",
        }
    }

    pub const fn group_separator(self) -> char {
        match self {
            Self::Indonesian => '.',
            Self::English => ',',
            Self::Swiss => '\'',
        }
    }
}

/// Keep only the ASCII digits of `input`
pub fn strip_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Parse the digits of `input` as a whole amount.
///
/// No digits yields 0. Digit runs too large for `u64` saturate.
pub fn parse_amount(input: &str) -> u64 {
    let digits = strip_digits(input);
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Parse an amount written by [`currency_text`].
///
/// The `label` prefix is dropped first so digits inside it do not leak
/// into the value. Text without the prefix is parsed whole.
pub fn parse_displayed(text: &str, label: &str) -> u64 {
    let text = text.trim_start();
    parse_amount(text.strip_prefix(label).unwrap_or(text))
}

/// Group the digits of `input` in thousands.
///
/// Returns an empty string when `input` has no digits at all.
pub fn format_grouped(input: &str, locale: Locale) -> String {
    let digits = strip_digits(input);
    if digits.is_empty() {
        return String::new();
    }
    group_thousands(parse_amount(&digits), locale.group_separator())
}

/// `"{label} {grouped}"`, e.g. `Rp 1.250.000`
pub fn currency_text(label: &str, value: u64, locale: Locale) -> String {
    let grouped = group_thousands(value, locale.group_separator());
    if label.is_empty() {
        grouped
    } else {
        format!("{label} {grouped}")
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
