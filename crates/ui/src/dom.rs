//! `Surface` over the live document
//!
//! Element ids and classes here are the contract with `index.html`.

use revenue_dashboard_core::progress::Tone;
use revenue_dashboard_core::surface::{InputSlot, Region, Surface, TextSlot};
use revenue_dashboard_core::theme::DARK_CLASS;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, HtmlInputElement};

const BAR_SELECTOR: &str = ".metric-progress-bar";
const CARD_SELECTOR: &str = ".metric-card";
const LABEL_SELECTOR: &str = ".metric-percent";
const HIDDEN_CLASS: &str = "hidden";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const CONFIG_ID: &str = "dashboardConfig";

const fn text_id(slot: TextSlot) -> &'static str {
    match slot {
        TextSlot::TodayRevenue => "todayRevenueText",
        TextSlot::TotalRevenue => "revenueText",
        TextSlot::TargetRevenue => "targetRevenueText",
        TextSlot::Percent => "totalRevenuePercent",
    }
}

const fn input_id(input: InputSlot) -> &'static str {
    match input {
        InputSlot::TodayRevenue => "inputTodayRevenue",
        InputSlot::TotalRevenue => "inputRevenue",
        InputSlot::TargetRevenue => "inputTargetRevenue",
    }
}

const fn region_id(region: Region) -> &'static str {
    match region {
        Region::Skeleton => "skeletonRoot",
        Region::Dashboard => "dashboardRoot",
    }
}

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// The page as the dashboard sees it.
///
/// Progress bars are captured once, so bars added after load are not
/// animated.
pub struct WebSurface {
    document: Document,
    bars: Vec<HtmlElement>,
}

impl WebSurface {
    pub fn new(document: Document) -> Self {
        let mut bars = Vec::new();
        if let Ok(nodes) = document.query_selector_all(BAR_SELECTOR) {
            for i in 0..nodes.length() {
                if let Some(bar) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    bars.push(bar);
                }
            }
        }
        Self { document, bars }
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    /// Percent label in the same card as the bar
    fn bar_label(bar: &HtmlElement) -> Option<Element> {
        bar.closest(CARD_SELECTOR)
            .ok()
            .flatten()
            .and_then(|card| card.query_selector(LABEL_SELECTOR).ok().flatten())
    }
}

impl Surface for WebSurface {
    fn text(&self, slot: TextSlot) -> Option<String> {
        self.html_element(text_id(slot)).map(|el| el.inner_text())
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        if let Some(el) = self.html_element(text_id(slot)) {
            el.set_inner_text(text);
        }
    }

    fn input_value(&self, input: InputSlot) -> Option<String> {
        self.document
            .get_element_by_id(input_id(input))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|el| el.value())
    }

    fn set_dark_theme(&mut self, dark: bool) {
        if let Some(body) = self.document.body() {
            let _ = body.class_list().toggle_with_force(DARK_CLASS, dark);
        }
    }

    fn set_toggle_label(&mut self, label: &str) {
        if let Some(el) = self.document.get_element_by_id(THEME_TOGGLE_ID) {
            el.set_text_content(Some(label));
        }
    }

    fn has_region(&self, region: Region) -> bool {
        self.document.get_element_by_id(region_id(region)).is_some()
    }

    fn set_region_hidden(&mut self, region: Region, hidden: bool) {
        if let Some(el) = self.document.get_element_by_id(region_id(region)) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1(HIDDEN_CLASS)
            } else {
                classes.remove_1(HIDDEN_CLASS)
            };
        }
    }

    fn bar_count(&self) -> usize {
        self.bars.len()
    }

    fn bar_width(&self, bar: usize) -> Option<String> {
        self.bars
            .get(bar)
            .and_then(|el| el.style().get_property_value("width").ok())
    }

    fn set_bar_width(&mut self, bar: usize, width: &str) {
        if let Some(el) = self.bars.get(bar) {
            let _ = el.style().set_property("width", width);
        }
    }

    fn set_bar_target(&mut self, bar: usize, target: f64) {
        if let Some(el) = self.bars.get(bar) {
            let _ = el.dataset().set("targetWidth", &target.to_string());
        }
    }

    fn set_bar_tone(&mut self, bar: usize, tone: Tone) {
        let Some(el) = self.bars.get(bar) else {
            return;
        };
        let label = Self::bar_label(el);

        for old in Tone::ALL {
            let _ = el.class_list().remove_1(old.bar_class());
            if let Some(label) = &label {
                let _ = label.class_list().remove_1(old.label_class());
            }
        }
        let _ = el.class_list().add_1(tone.bar_class());
        if let Some(label) = &label {
            let _ = label.class_list().add_1(tone.label_class());
        }
    }
}
