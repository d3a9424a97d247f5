//! Abstract page the dashboard reads and writes
//!
//! The browser implementation lives in the wasm crate; [`MemorySurface`]
//! is a plain in-memory page for tests and headless runs.

use crate::progress::Tone;
use crate::revenue::RevenueField;

/// Text displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    TodayRevenue,
    TotalRevenue,
    TargetRevenue,
    Percent,
}

impl TextSlot {
    pub const ALL: [Self; 4] = [
        Self::TodayRevenue,
        Self::TotalRevenue,
        Self::TargetRevenue,
        Self::Percent,
    ];

    /// Display showing a revenue field
    pub const fn for_field(field: RevenueField) -> Self {
        match field {
            RevenueField::Today => Self::TodayRevenue,
            RevenueField::Total => Self::TotalRevenue,
            RevenueField::Target => Self::TargetRevenue,
        }
    }
}

/// Text inputs feeding the revenue fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSlot {
    TodayRevenue,
    TotalRevenue,
    TargetRevenue,
}

impl InputSlot {
    pub const ALL: [Self; 3] = [Self::TodayRevenue, Self::TotalRevenue, Self::TargetRevenue];

    pub const fn for_field(field: RevenueField) -> Self {
        match field {
            RevenueField::Today => Self::TodayRevenue,
            RevenueField::Total => Self::TotalRevenue,
            RevenueField::Target => Self::TargetRevenue,
        }
    }
}

/// Top-level containers swapped when the dashboard is revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Skeleton,
    Dashboard,
}

/// What the dashboard needs from a page.
///
/// Missing elements are not errors: getters return `None` and setters do
/// nothing.
pub trait Surface {
    fn text(&self, slot: TextSlot) -> Option<String>;
    fn set_text(&mut self, slot: TextSlot, text: &str);

    fn input_value(&self, input: InputSlot) -> Option<String>;

    fn set_dark_theme(&mut self, dark: bool);
    fn set_toggle_label(&mut self, label: &str);

    fn has_region(&self, region: Region) -> bool;
    fn set_region_hidden(&mut self, region: Region, hidden: bool);

    /// Number of progress bars on the page
    fn bar_count(&self) -> usize;
    /// Inline width style of a bar, e.g. `"82%"`
    fn bar_width(&self, bar: usize) -> Option<String>;
    fn set_bar_width(&mut self, bar: usize, width: &str);
    /// Remember the bar's target percentage on the element
    fn set_bar_target(&mut self, bar: usize, target: f64);
    /// Replace the tone classes on the bar and its percent label
    fn set_bar_tone(&mut self, bar: usize, tone: Tone);
}

/// In-memory progress bar
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryBar {
    pub width: String,
    pub target: Option<f64>,
    pub tone: Option<Tone>,
    /// Whether the bar's card carries a percent label
    pub has_label: bool,
    pub label_tone: Option<Tone>,
}

/// In-memory page
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    texts: Vec<(TextSlot, String)>,
    inputs: Vec<(InputSlot, String)>,
    pub dark: bool,
    pub toggle_label: Option<String>,
    pub has_toggle: bool,
    regions: Vec<(Region, bool)>,
    pub bars: Vec<MemoryBar>,
    /// Every write to a text slot, in order
    pub text_log: Vec<(TextSlot, String)>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page with all displays, inputs, the toggle and both regions present
    pub fn complete(today: &str, total: &str, target: &str) -> Self {
        let mut surface = Self::new()
            .with_text(TextSlot::TodayRevenue, today)
            .with_text(TextSlot::TotalRevenue, total)
            .with_text(TextSlot::TargetRevenue, target)
            .with_text(TextSlot::Percent, "0%")
            .with_region(Region::Skeleton, false)
            .with_region(Region::Dashboard, true);
        for input in InputSlot::ALL {
            surface = surface.with_input(input, "");
        }
        surface.has_toggle = true;
        surface
    }

    pub fn with_text(mut self, slot: TextSlot, text: &str) -> Self {
        self.put_text(slot, text);
        self
    }

    pub fn with_input(mut self, input: InputSlot, value: &str) -> Self {
        self.type_into(input, value);
        self
    }

    /// Add a region with its initial hidden state
    pub fn with_region(mut self, region: Region, hidden: bool) -> Self {
        self.regions.push((region, hidden));
        self
    }

    pub fn with_bar(mut self, width: &str, has_label: bool) -> Self {
        self.bars.push(MemoryBar {
            width: width.to_string(),
            has_label,
            ..MemoryBar::default()
        });
        self
    }

    /// Set an input's value, as a user typing would
    pub fn type_into(&mut self, input: InputSlot, value: &str) {
        match self.inputs.iter_mut().find(|(slot, _)| *slot == input) {
            Some((_, current)) => *current = value.to_string(),
            None => self.inputs.push((input, value.to_string())),
        }
    }

    pub fn is_hidden(&self, region: Region) -> Option<bool> {
        self.regions
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, hidden)| *hidden)
    }

    fn put_text(&mut self, slot: TextSlot, text: &str) {
        match self.texts.iter_mut().find(|(s, _)| *s == slot) {
            Some((_, current)) => *current = text.to_string(),
            None => self.texts.push((slot, text.to_string())),
        }
    }
}

impl Surface for MemorySurface {
    fn text(&self, slot: TextSlot) -> Option<String> {
        self.texts
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, text)| text.clone())
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        if self.texts.iter().any(|(s, _)| *s == slot) {
            self.put_text(slot, text);
            self.text_log.push((slot, text.to_string()));
        }
    }

    fn input_value(&self, input: InputSlot) -> Option<String> {
        self.inputs
            .iter()
            .find(|(s, _)| *s == input)
            .map(|(_, value)| value.clone())
    }

    fn set_dark_theme(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn set_toggle_label(&mut self, label: &str) {
        if self.has_toggle {
            self.toggle_label = Some(label.to_string());
        }
    }

    fn has_region(&self, region: Region) -> bool {
        self.regions.iter().any(|(r, _)| *r == region)
    }

    fn set_region_hidden(&mut self, region: Region, hidden: bool) {
        if let Some((_, current)) = self.regions.iter_mut().find(|(r, _)| *r == region) {
            *current = hidden;
        }
    }

    fn bar_count(&self) -> usize {
        self.bars.len()
    }

    fn bar_width(&self, bar: usize) -> Option<String> {
        self.bars.get(bar).map(|b| b.width.clone())
    }

    fn set_bar_width(&mut self, bar: usize, width: &str) {
        if let Some(b) = self.bars.get_mut(bar) {
            b.width = width.to_string();
        }
    }

    fn set_bar_target(&mut self, bar: usize, target: f64) {
        if let Some(b) = self.bars.get_mut(bar) {
            b.target = Some(target);
        }
    }

    fn set_bar_tone(&mut self, bar: usize, tone: Tone) {
        if let Some(b) = self.bars.get_mut(bar) {
            b.tone = Some(tone);
            if b.has_label {
                b.label_tone = Some(tone);
            }
        }
    }
}
