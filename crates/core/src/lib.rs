//! Revenue dashboard core
//!
//! Everything the dashboard does that does not need a browser: currency
//! formatting, the revenue triple and its persistence, theme selection,
//! progress tones, tweens, and the `Dashboard` controller that drives an
//! abstract `Surface`.

pub mod animation;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod percent;
pub mod progress;
pub mod revenue;
pub mod store;
pub mod surface;
pub mod theme;

pub use animation::{AnimationTarget, Animations, Completion, Easing, Frame, Tween};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::{ConfigError, RevenueError, StoreError};
pub use format::{
    currency_text, format_grouped, parse_amount, parse_displayed, strip_digits, Locale,
};
pub use percent::{one_decimal, percent_text};
pub use progress::Tone;
pub use revenue::{Revenue, RevenueField};
pub use store::{KeyValueStore, MemoryStore};
pub use surface::{InputSlot, MemorySurface, Region, Surface, TextSlot};
pub use theme::Theme;
