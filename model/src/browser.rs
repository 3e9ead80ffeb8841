//! # Browser binding
//!
//! `BrowserHost` implements [`Host`] on top of `web_sys::Window`, and
//! `PortfolioApp` is the object JS holds for the lifetime of the page:
//!
//! ```js
//! const app = new PortfolioApp(JSON.stringify({ sections: "full" }));
//! app.mount();                       // starts listening to scroll events
//! navButton.onclick = () => app.activate_section("projects");
//! form.onsubmit = (e) => { e.preventDefault(); app.submit(); };
//! function animate() {
//!   const frame = app.frame();       // Float64Array, see frame.rs offsets
//!   render(frame);
//!   requestAnimationFrame(animate);
//! }
//! // on unmount:
//! app.teardown();                    // or app.free()
//! ```
//!
//! The scroll listener and the status timer are RAII handles from `gloo`.
//! Dropping them unregisters the listener and cancels the timeout, which is
//! what `teardown()` (and `free()`, through `Drop`) does.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use portfolio_shared::{HandoffError, PortfolioConfig};
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

use crate::host::Host;
use crate::logging::{init_logging, parse_level};
use crate::page_view::PageView;

// ── BrowserHost ────────────────────────────────────────────────────────────

pub struct BrowserHost {
    window: Window,
}

impl BrowserHost {
    pub fn new() -> Result<BrowserHost, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        Ok(BrowserHost { window })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl Host for BrowserHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn has_element(&self, id: &str) -> bool {
        self.window
            .document()
            .and_then(|doc| doc.get_element_by_id(id))
            .is_some()
    }

    fn scroll_into_view(&self, id: &str) {
        let Some(element) = self.window.document().and_then(|doc| doc.get_element_by_id(id)) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn request_open_uri(&self, uri: &str) -> Result<(), HandoffError> {
        self.window
            .location()
            .set_href(uri)
            .map_err(|err| HandoffError::Dispatch(format!("{err:?}")))
    }
}

// ── PortfolioApp ───────────────────────────────────────────────────────────

#[wasm_bindgen]
pub struct PortfolioApp {
    view: Rc<RefCell<PageView<BrowserHost>>>,
    scroll_listener: Option<EventListener>,
    status_timer: Option<Timeout>,
}

#[wasm_bindgen]
impl PortfolioApp {
    /// Build the app from a JSON config ("" for defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<PortfolioApp, JsValue> {
        let config = PortfolioConfig::from_json(config_json)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let host = BrowserHost::new()?;
        Ok(PortfolioApp {
            view: Rc::new(RefCell::new(PageView::new(config, host))),
            scroll_listener: None,
            status_timer: None,
        })
    }

    /// Install the console logger. `level` is a tracing level name.
    pub fn init_logging(level: &str) -> bool {
        init_logging(parse_level(level))
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Start tracking scroll events and read the initial offset.
    pub fn mount(&mut self) {
        if self.scroll_listener.is_some() {
            return;
        }
        let target = self.view.borrow().host().window().clone();
        let view = Rc::clone(&self.view);
        // gloo listeners are passive by default.
        let listener = EventListener::new(&target, "scroll", move |_| {
            match view.try_borrow_mut() {
                Ok(mut view) => {
                    view.sync_scroll();
                }
                Err(_) => warn!("scroll event while page view is busy"),
            }
        });
        self.scroll_listener = Some(listener);
        self.view.borrow_mut().sync_scroll();
        info!("portfolio page mounted");
    }

    /// Release the scroll listener and the status timer and stop the view.
    pub fn teardown(&mut self) {
        self.scroll_listener = None;
        self.status_timer = None;
        if let Ok(mut view) = self.view.try_borrow_mut() {
            view.teardown();
        }
    }

    // ── Navigation ─────────────────────────────────────────────────────

    pub fn activate_section(&mut self, id: &str) -> bool {
        self.view.borrow_mut().activate_section(id)
    }

    pub fn scroll_to_top(&mut self) {
        self.view.borrow_mut().scroll_to_top();
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.view.borrow_mut().toggle_menu()
    }

    pub fn close_menu(&mut self) {
        self.view.borrow_mut().close_menu();
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.view.borrow().is_active(id)
    }

    /// `[{"id":"home","label":"Home","active":true}, ...]`
    pub fn nav_items_json(&self) -> String {
        self.view.borrow().nav_items_json()
    }

    // ── Contact form ───────────────────────────────────────────────────

    pub fn update_field(&mut self, name: &str, value: &str) -> bool {
        self.view.borrow_mut().update_field(name, value)
    }

    pub fn touch_field(&mut self, name: &str) {
        self.view.borrow_mut().touch_field(name);
    }

    pub fn field_value(&self, name: &str) -> String {
        self.view.borrow().contact().field_value(name)
    }

    pub fn field_error(&self, name: &str) -> String {
        self.view.borrow().contact().field_error(name)
    }

    pub fn can_submit(&self) -> bool {
        self.view.borrow().contact().can_submit()
    }

    /// Hand the message to the mail client. Returns the status code
    /// (1 = success, 2 = error) and schedules the status auto-clear.
    pub fn submit(&mut self) -> u8 {
        let now = js_sys::Date::now();
        let (status, clear_in) = {
            let mut view = self.view.borrow_mut();
            let status = view.submit(now);
            (status, view.pending_status_clear_in_ms(now))
        };

        // Replacing the handle drops (and cancels) any earlier timeout.
        self.status_timer = clear_in.map(|delay| {
            let view = Rc::clone(&self.view);
            Timeout::new(delay.ceil() as u32, move || {
                if let Ok(mut view) = view.try_borrow_mut() {
                    view.expire_status();
                }
            })
        });
        status.code()
    }

    pub fn status_message(&self) -> String {
        self.view.borrow().contact().status_message()
    }

    // ── Rendering ──────────────────────────────────────────────────────

    /// Current frame as a Float64Array. See frame.rs for the offsets.
    pub fn frame(&mut self) -> Vec<f64> {
        self.view.borrow_mut().frame().to_vec()
    }

    pub fn data_version(&self) -> u32 {
        self.view.borrow().data_version()
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.teardown();
    }
}
