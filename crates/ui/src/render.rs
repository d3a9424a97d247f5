//! Frame loop for RAF-driven tweens
//! Keeps a single requestAnimationFrame chain alive while anything animates

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::WebDashboard;

/// Ticks the dashboard once per display frame
pub struct FrameLoop {
    dashboard: Rc<RefCell<WebDashboard>>,
    raf_scheduled: Cell<bool>,
}

impl FrameLoop {
    pub fn new(dashboard: Rc<RefCell<WebDashboard>>) -> Rc<Self> {
        Rc::new(Self {
            dashboard,
            raf_scheduled: Cell::new(false),
        })
    }

    /// Schedule a frame if the dashboard has tweens and none is pending
    pub fn request_frame(self: &Rc<Self>) {
        if self.raf_scheduled.get() || !self.dashboard.borrow().is_animating() {
            return;
        }
        let Some(win) = window() else {
            return;
        };

        self.raf_scheduled.set(true);
        let frames = self.clone();
        let callback = Closure::once(Box::new(move |timestamp: f64| {
            frames.on_frame(timestamp);
        }) as Box<dyn FnOnce(f64)>);

        if win
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .is_err()
        {
            self.raf_scheduled.set(false);
            web_sys::console::warn_1(&"[Dashboard] requestAnimationFrame failed".into());
        }
        callback.forget();
    }

    /// Execute one frame (called from RAF)
    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.raf_scheduled.set(false);
        let more = self.dashboard.borrow_mut().tick(timestamp);
        if more {
            self.request_frame();
        }
    }
}
