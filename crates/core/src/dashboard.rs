//! Dashboard controller
//!
//! Owns the revenue triple, the theme and the running tweens, and drives
//! any [`Surface`] + [`KeyValueStore`] pair. The browser crate wraps one of
//! these in an `Rc<RefCell<_>>` and forwards page events and animation
//! frames to it.

use tracing::{debug, info};

use crate::animation::{AnimationTarget, Animations, Completion, Easing, Frame, Tween};
use crate::config::DashboardConfig;
use crate::format::{currency_text, parse_amount, parse_displayed, Locale};
use crate::percent::percent_text;
use crate::progress::{parse_css_number, width_css, Tone};
use crate::revenue::{Revenue, RevenueField};
use crate::store::{self, KeyValueStore};
use crate::surface::{InputSlot, Region, Surface, TextSlot};
use crate::theme::Theme;

pub struct Dashboard<S, K> {
    surface: S,
    store: K,
    config: DashboardConfig,
    locale: Locale,
    revenue: Revenue,
    theme: Theme,
    animations: Animations,
}

impl<S: Surface, K: KeyValueStore> Dashboard<S, K> {
    pub fn new(surface: S, store: K, config: DashboardConfig) -> Self {
        let locale = config.locale();
        Self {
            surface,
            store,
            config,
            locale,
            revenue: Revenue::default(),
            theme: Theme::default(),
            animations: Animations::new(),
        }
    }

    /// Page-load sequence: [`Dashboard::init_theme`] then [`Dashboard::start`].
    pub fn bootstrap(&mut self, now: f64, prefers_dark: bool) -> Option<u32> {
        self.init_theme(prefers_dark);
        self.start(now)
    }

    /// Everything the page load does after the theme: restore the triple,
    /// count the displays up from 0 and grow the progress bars.
    ///
    /// Returns the reveal delay in milliseconds when the page has both a
    /// skeleton and a dashboard container; the caller schedules
    /// [`Dashboard::reveal`] after it.
    pub fn start(&mut self, now: f64) -> Option<u32> {
        let revenue = self.restore_revenue();

        let duration = f64::from(self.config.intro_duration_ms);
        self.animate_amount(RevenueField::Total, 0, revenue.total, now, duration);
        self.animate_amount(RevenueField::Today, 0, revenue.today, now, duration);
        self.animate_amount(RevenueField::Target, 0, revenue.target, now, duration);

        let reveal = (self.surface.has_region(Region::Skeleton)
            && self.surface.has_region(Region::Dashboard))
        .then_some(self.config.reveal_delay_ms);

        self.animate_progress_bars(now);

        info!(
            today = revenue.today,
            total = revenue.total,
            target = revenue.target,
            theme = self.theme.as_str(),
            "dashboard started"
        );
        reveal
    }

    /// Apply the stored theme, or the OS preference when none is stored
    pub fn init_theme(&mut self, prefers_dark: bool) {
        let theme = store::load_theme(&self.store, &self.config.theme_key)
            .unwrap_or_else(|| Theme::from_preference(prefers_dark));
        self.apply_theme(theme);
    }

    /// Flip the theme and persist the new choice
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.apply_theme(next);
        store::save_theme(&mut self.store, &self.config.theme_key, next);
        next
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.surface.set_dark_theme(theme.is_dark());
        self.surface.set_toggle_label(theme.toggle_label());
    }

    /// Seed the triple from the page text, then let a valid stored triple
    /// override it. Nothing is written back.
    pub fn restore_revenue(&mut self) -> Revenue {
        let defaults = Revenue::new(
            self.displayed_amount(TextSlot::TodayRevenue),
            self.displayed_amount(TextSlot::TotalRevenue),
            self.displayed_amount(TextSlot::TargetRevenue),
        );
        self.revenue = store::load_revenue(&self.store, &self.config.revenue_key).unwrap_or(defaults);
        self.revenue
    }

    /// Swap the skeleton for the real dashboard
    pub fn reveal(&mut self) {
        if self.surface.has_region(Region::Skeleton) && self.surface.has_region(Region::Dashboard) {
            self.surface.set_region_hidden(Region::Skeleton, true);
            self.surface.set_region_hidden(Region::Dashboard, false);
        }
    }

    /// Color every bar by its inline width and grow it from zero.
    /// Bars whose width is not a number are left untouched.
    pub fn animate_progress_bars(&mut self, now: f64) {
        let duration = f64::from(self.config.bar_duration_ms);
        for bar in 0..self.surface.bar_count() {
            let Some(target) = self
                .surface
                .bar_width(bar)
                .as_deref()
                .and_then(parse_css_number)
            else {
                debug!(bar, "skipping progress bar without a numeric width");
                continue;
            };

            self.surface.set_bar_target(bar, target);
            self.surface.set_bar_width(bar, "0%");
            self.surface.set_bar_tone(bar, Tone::for_percent(target));

            let tween = Tween::new(0.0, target, now, duration).with_easing(Easing::EaseOutCubic);
            self.animations.start(AnimationTarget::Bar(bar), tween, None);
        }
    }

    /// Read a field's input, store and persist it, and count the display
    /// over to the new value. Returns the new value, or `None` when the
    /// page has no such input.
    pub fn update_field(&mut self, field: RevenueField, now: f64) -> Option<u64> {
        let raw = self.surface.input_value(InputSlot::for_field(field))?;
        let value = parse_amount(&raw);

        self.revenue.set(field, value);
        store::save_revenue(&mut self.store, &self.config.revenue_key, self.revenue);

        let from = self.displayed_amount(TextSlot::for_field(field));
        let duration = f64::from(self.config.update_duration_ms);
        self.animate_amount(field, from, value, now, duration);

        debug!(?field, from, to = value, "revenue updated");
        Some(value)
    }

    pub fn update_revenue(&mut self, now: f64) -> Option<u64> {
        self.update_field(RevenueField::Total, now)
    }

    pub fn update_today_revenue(&mut self, now: f64) -> Option<u64> {
        self.update_field(RevenueField::Today, now)
    }

    pub fn update_target_revenue(&mut self, now: f64) -> Option<u64> {
        self.update_field(RevenueField::Target, now)
    }

    /// Refresh the percent display from what the total and target
    /// displays currently show
    pub fn recompute_percent(&mut self) {
        let (Some(revenue), Some(target)) = (
            self.shown_amount(TextSlot::TotalRevenue),
            self.shown_amount(TextSlot::TargetRevenue),
        ) else {
            return;
        };
        if self.surface.text(TextSlot::Percent).is_none() {
            return;
        }
        let text = percent_text(revenue, target);
        self.surface.set_text(TextSlot::Percent, &text);
    }

    /// Advance every running tween to `now`.
    ///
    /// Returns `true` while another frame is needed.
    pub fn tick(&mut self, now: f64) -> bool {
        let frames = self.animations.tick(now);
        let mut recompute = false;
        for frame in &frames {
            self.apply_frame(frame);
            recompute |= frame.completion == Some(Completion::RecomputePercent);
        }
        if recompute {
            self.recompute_percent();
        }
        self.animations.is_active()
    }

    pub fn is_animating(&self) -> bool {
        self.animations.is_active()
    }

    fn apply_frame(&mut self, frame: &Frame) {
        match frame.target {
            AnimationTarget::Text(slot) => {
                let value = frame.value.round().max(0.0) as u64;
                let text = currency_text(&self.config.currency_label, value, self.locale);
                self.surface.set_text(slot, &text);
            }
            AnimationTarget::Bar(bar) => {
                self.surface.set_bar_width(bar, &width_css(frame.value));
            }
        }
    }

    fn animate_amount(&mut self, field: RevenueField, from: u64, to: u64, now: f64, duration: f64) {
        let slot = TextSlot::for_field(field);
        if self.surface.text(slot).is_none() {
            return;
        }
        let completion = match field {
            RevenueField::Today => None,
            RevenueField::Total | RevenueField::Target => Some(Completion::RecomputePercent),
        };
        let tween = Tween::new(from as f64, to as f64, now, duration);
        self.animations.start(AnimationTarget::Text(slot), tween, completion);
    }

    /// Amount a display shows, ignoring the configured currency label
    fn shown_amount(&self, slot: TextSlot) -> Option<u64> {
        let text = self.surface.text(slot)?;
        Some(parse_displayed(&text, &self.config.currency_label))
    }

    fn displayed_amount(&self, slot: TextSlot) -> u64 {
        self.shown_amount(slot).unwrap_or(0)
    }

    pub const fn revenue(&self) -> Revenue {
        self.revenue
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub const fn store(&self) -> &K {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut K {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::surface::MemorySurface;

    fn dashboard(surface: MemorySurface, store: MemoryStore) -> Dashboard<MemorySurface, MemoryStore> {
        Dashboard::new(surface, store, DashboardConfig::default())
    }

    fn settle<S: Surface, K: KeyValueStore>(dashboard: &mut Dashboard<S, K>, until: f64) {
        let mut now = 0.0;
        while dashboard.tick(now) && now < until {
            now += 16.0;
        }
        dashboard.tick(until);
    }

    #[test]
    fn percent_follows_displays() {
        let surface = MemorySurface::complete("Rp 0", "Rp 500", "Rp 1.000");
        let mut dashboard = dashboard(surface, MemoryStore::new());
        dashboard.recompute_percent();
        assert_eq!(dashboard.surface().text(TextSlot::Percent).as_deref(), Some("50.0%"));
    }

    #[test]
    fn percent_ignores_digits_in_the_label() {
        let config = DashboardConfig::from_json(r#"{"currency_label":"Rp2"}"#).unwrap();
        let surface = MemorySurface::complete("Rp2 0", "Rp2 500", "Rp2 1.000");
        let mut dashboard = Dashboard::new(surface, MemoryStore::new(), config);
        dashboard.recompute_percent();
        assert_eq!(dashboard.surface().text(TextSlot::Percent).as_deref(), Some("50.0%"));
    }

    #[test]
    fn start_after_theme_matches_bootstrap() {
        let page = || MemorySurface::complete("Rp 1", "Rp 500", "Rp 1.000").with_bar("80%", false);
        let store = MemoryStore::new().with_item("dashboard_theme", "dark");

        let mut split = dashboard(page(), store.clone());
        split.init_theme(false);
        assert!(split.surface().dark);
        let split_reveal = split.start(0.0);
        settle(&mut split, 800.0);

        let mut whole = dashboard(page(), store);
        let whole_reveal = whole.bootstrap(0.0, false);
        settle(&mut whole, 800.0);

        assert_eq!(split_reveal, whole_reveal);
        assert_eq!(split.theme(), whole.theme());
        assert_eq!(split.revenue(), whole.revenue());
        for slot in [TextSlot::TodayRevenue, TextSlot::TotalRevenue, TextSlot::Percent] {
            assert_eq!(split.surface().text(slot), whole.surface().text(slot));
        }
        assert_eq!(split.surface().bars[0].width, whole.surface().bars[0].width);
    }

    #[test]
    fn percent_without_displays_is_a_no_op() {
        let surface = MemorySurface::new().with_text(TextSlot::TotalRevenue, "Rp 5");
        let mut dashboard = dashboard(surface, MemoryStore::new());
        dashboard.recompute_percent();
        assert!(dashboard.surface().text_log.is_empty());
    }

    #[test]
    fn today_update_does_not_touch_percent() {
        let surface = MemorySurface::complete("Rp 0", "Rp 500", "Rp 1.000")
            .with_input(InputSlot::TodayRevenue, "Rp 75.000");
        let mut dashboard = dashboard(surface, MemoryStore::new());

        assert_eq!(dashboard.update_today_revenue(0.0), Some(75_000));
        settle(&mut dashboard, 1_000.0);

        assert_eq!(
            dashboard.surface().text(TextSlot::TodayRevenue).as_deref(),
            Some("Rp 75.000")
        );
        assert!(dashboard
            .surface()
            .text_log
            .iter()
            .all(|(slot, _)| *slot != TextSlot::Percent));
    }

    #[test]
    fn missing_input_changes_nothing() {
        let surface = MemorySurface::new().with_text(TextSlot::TotalRevenue, "Rp 5");
        let mut dashboard = dashboard(surface, MemoryStore::new());
        assert_eq!(dashboard.update_revenue(0.0), None);
        assert_eq!(dashboard.revenue(), Revenue::default());
        assert_eq!(dashboard.store().raw("revenues_array"), None);
    }

    #[test]
    fn unparseable_bars_are_skipped() {
        let surface = MemorySurface::new()
            .with_bar("auto", true)
            .with_bar("", false)
            .with_bar("99%", true);
        let mut dashboard = dashboard(surface, MemoryStore::new());
        dashboard.animate_progress_bars(0.0);

        let bars = &dashboard.surface().bars;
        assert_eq!(bars[0].width, "auto");
        assert_eq!(bars[0].tone, None);
        assert_eq!(bars[1].tone, None);
        assert_eq!(bars[2].width, "0%");
        assert_eq!(bars[2].target, Some(99.0));
        assert_eq!(bars[2].tone, Some(Tone::Orange));
        assert_eq!(bars[2].label_tone, Some(Tone::Orange));
    }

    #[test]
    fn bars_ease_out_to_their_target() {
        let surface = MemorySurface::new().with_bar("80%", false);
        let mut dashboard = dashboard(surface, MemoryStore::new());
        dashboard.animate_progress_bars(0.0);

        assert!(dashboard.tick(400.0));
        assert_eq!(dashboard.surface().bars[0].width, "70.0%");
        assert!(!dashboard.tick(800.0));
        assert_eq!(dashboard.surface().bars[0].width, "80.0%");
    }

    #[test]
    fn reveal_needs_both_regions() {
        let surface = MemorySurface::new().with_region(Region::Skeleton, false);
        let mut dashboard = dashboard(surface, MemoryStore::new());
        assert_eq!(dashboard.bootstrap(0.0, false), None);
        dashboard.reveal();
        assert_eq!(dashboard.surface().is_hidden(Region::Skeleton), Some(false));
    }
}
