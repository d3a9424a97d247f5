//! Light/dark theme

/// Body class applied while the dark theme is active
pub const DARK_CLASS: &str = "theme-dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Interpret a stored value. Only `"dark"` selects the dark theme.
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Theme to use when nothing is stored
    pub const fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Label of the toggle control: it names the theme you would switch to
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Light mode",
            Self::Light => "Dark mode",
        }
    }
}
