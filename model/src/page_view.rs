//! # Page view
//!
//! The page view owns all behavioral state of one mounted portfolio page and
//! wires it to a [`Host`]:
//!
//! ```text
//!            ┌──────────────── PageView<H> ────────────────┐
//! scroll ──▶ │ ScrollTracker ──┐                            │
//!            │                 ├─▶ NavigationState ──▶ frame│──▶ renderer
//! click  ──▶ │ SectionNavigator┘                            │
//!            │                                              │
//! input  ──▶ │ ContactFormEngine ──▶ host.request_open_uri  │
//!            └──────────────────────────────────────────────┘
//! ```
//!
//! `NavigationState` is lent by `&mut` to the tracker and the navigator,
//! which each write only their own fields. The contact form is independent.
//!
//! After [`PageView::teardown`] the view ignores every further event and the
//! pending status auto-clear is cancelled, so nothing writes to a dismantled
//! page.

use portfolio_shared::PortfolioConfig;
use tracing::{debug, info};

use crate::contact_form_engine::{ContactFormEngine, SubmitStatus};
use crate::frame::{
    flag, FRAME_SIZE, F_ACTIVE_INDEX, F_BACK_TO_TOP, F_MENU_OPEN, F_SCROLLED, F_SUBMITTING,
    F_SUBMIT_STATUS,
};
use crate::host::Host;
use crate::navigation::NavigationState;
use crate::scroll_engine::ScrollTracker;
use crate::section_nav_engine::{NavItem, SectionNavigator};

pub struct PageView<H: Host> {
    host: H,
    navigation: NavigationState,
    scroll: ScrollTracker,
    navigator: SectionNavigator,
    contact: ContactFormEngine,
    torn_down: bool,
    frame: Vec<f64>,
    data_version: u32,
}

impl<H: Host> PageView<H> {
    pub fn new(config: PortfolioConfig, host: H) -> PageView<H> {
        let navigation = NavigationState::new(&config.sections);
        PageView {
            host,
            navigation,
            scroll: ScrollTracker::new(config.scrolled_threshold, config.back_to_top_threshold),
            navigator: SectionNavigator::new(config.sections),
            contact: ContactFormEngine::with_settings(&config.recipient, config.status_clear_delay_ms),
            torn_down: false,
            frame: vec![0.0; FRAME_SIZE],
            data_version: 0,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn contact(&self) -> &ContactFormEngine {
        &self.contact
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn data_version(&self) -> u32 {
        self.data_version
    }

    fn bump_version(&mut self) {
        self.data_version = self.data_version.wrapping_add(1);
    }

    fn live(&self, event: &'static str) -> bool {
        if self.torn_down {
            debug!(event, "ignoring event after teardown");
        }
        !self.torn_down
    }

    // ── Scroll ─────────────────────────────────────────────────────────

    /// Feed one scroll event. Returns true if the nav flags changed.
    pub fn handle_scroll(&mut self, offset: f64) -> bool {
        if !self.live("scroll") {
            return false;
        }
        let changed = self.scroll.on_scroll(&mut self.navigation, offset);
        if changed {
            self.bump_version();
        }
        changed
    }

    /// Read the offset from the host and feed it as a scroll event. Used on
    /// mount and from the platform scroll listener.
    pub fn sync_scroll(&mut self) -> bool {
        let offset = self.host.scroll_y();
        self.handle_scroll(offset)
    }

    // ── Navigation ─────────────────────────────────────────────────────

    pub fn activate_section(&mut self, id: &str) -> bool {
        if !self.live("activate_section") {
            return false;
        }
        let before = (self.navigation.active_section().clone(), self.navigator.is_menu_open());
        let activated = self
            .navigator
            .activate_section(&mut self.navigation, &self.host, id);
        if before != (self.navigation.active_section().clone(), self.navigator.is_menu_open()) {
            self.bump_version();
        }
        activated
    }

    pub fn scroll_to_top(&mut self) {
        if !self.live("scroll_to_top") {
            return;
        }
        self.navigator.scroll_to_top(&mut self.navigation, &self.host);
        self.bump_version();
    }

    pub fn toggle_menu(&mut self) -> bool {
        if !self.live("toggle_menu") {
            return self.navigator.is_menu_open();
        }
        let open = self.navigator.toggle_menu();
        self.bump_version();
        open
    }

    pub fn close_menu(&mut self) {
        if self.live("close_menu") && self.navigator.close_menu() {
            self.bump_version();
        }
    }

    pub fn nav_items(&self) -> Vec<NavItem> {
        self.navigator.nav_items(&self.navigation)
    }

    pub fn nav_items_json(&self) -> String {
        self.navigator.nav_items_json(&self.navigation)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.navigator.is_active(&self.navigation, id)
    }

    pub fn is_menu_open(&self) -> bool {
        self.navigator.is_menu_open()
    }

    // ── Contact form ───────────────────────────────────────────────────

    pub fn update_field(&mut self, name: &str, value: &str) -> bool {
        if !self.live("update_field") {
            return false;
        }
        let changed = self.contact.update_field(name, value);
        if changed {
            self.bump_version();
        }
        changed
    }

    pub fn touch_field(&mut self, name: &str) {
        if !self.live("touch_field") {
            return;
        }
        let before = self.contact.data_version();
        self.contact.touch_field(name);
        if self.contact.data_version() != before {
            self.bump_version();
        }
    }

    /// Submit the contact form through the host's URI handoff.
    pub fn submit(&mut self, now_ms: f64) -> SubmitStatus {
        if !self.live("submit") {
            return self.contact.submit_status();
        }
        let host = &self.host;
        let status = self
            .contact
            .submit_with(now_ms, |uri| host.request_open_uri(uri));
        self.bump_version();
        status
    }

    /// Advance the status auto-clear clock. Returns true if the status
    /// reverted to none.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.live("tick") {
            return false;
        }
        let changed = self.contact.tick(now_ms);
        if changed {
            self.bump_version();
        }
        changed
    }

    /// Platform timer callback: clear the status if an auto-clear is armed.
    pub fn expire_status(&mut self) -> bool {
        if !self.live("expire_status") {
            return false;
        }
        let changed = self.contact.expire_status();
        if changed {
            self.bump_version();
        }
        changed
    }

    /// Milliseconds until the armed auto-clear fires, if any.
    pub fn pending_status_clear_in_ms(&self, now_ms: f64) -> Option<f64> {
        self.contact
            .status_clear_at_ms()
            .map(|deadline| (deadline - now_ms).max(0.0))
    }

    // ── Lifecycle ──────────────────────────────────────────────────────

    /// Dismantle the view: cancel the status timer and stop reacting to
    /// events. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.contact.cancel_status_timer();
        self.torn_down = true;
        info!("page view torn down");
    }

    // ── Frame buffer ───────────────────────────────────────────────────

    /// Fill the persistent frame buffer and return it.
    pub fn frame(&mut self) -> &[f64] {
        self.frame.fill(0.0);
        self.frame[F_SCROLLED] = flag(self.navigation.is_scrolled());
        self.frame[F_BACK_TO_TOP] = flag(self.navigation.is_back_to_top_visible());
        self.frame[F_ACTIVE_INDEX] = self.navigator.active_index(&self.navigation) as f64;
        self.frame[F_MENU_OPEN] = flag(self.navigator.is_menu_open());
        self.frame[F_SUBMITTING] = flag(self.contact.is_submitting());
        self.frame[F_SUBMIT_STATUS] = f64::from(self.contact.submit_status().code());
        &self.frame
    }
}
