//! # Host capabilities
//!
//! The engines never touch the DOM. Everything platform-specific goes
//! through [`Host`]: reading the scroll position, looking up a section
//! element, asking for a smooth scroll, and handing a URI to the platform.
//!
//! `request_open_uri` is a one-way command. Its `Result` only reports that
//! the platform refused the request synchronously; nothing is awaited and no
//! delivery confirmation exists.
//!
//! [`RecordingHost`] is an in-memory host that records every request. The
//! integration tests drive a `PageView` with it, and it is handy for
//! exercising the engines from native code.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use portfolio_shared::HandoffError;

/// Platform capabilities the page view depends on.
pub trait Host {
    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Whether an element with this id is currently rendered.
    fn has_element(&self, id: &str) -> bool;

    /// Smooth-scroll the element with this id into view. Returns immediately;
    /// the animation is driven by the platform.
    fn scroll_into_view(&self, id: &str);

    /// Smooth-scroll the viewport back to the top.
    fn scroll_to_top(&self);

    /// Hand a URI to the platform's default handler.
    fn request_open_uri(&self, uri: &str) -> Result<(), HandoffError>;
}

/// A scroll request observed by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollRequest {
    IntoView(String),
    Top,
}

/// Host double that keeps everything in memory.
#[derive(Debug, Default)]
pub struct RecordingHost {
    scroll_y: Cell<f64>,
    elements: RefCell<HashSet<String>>,
    scroll_requests: RefCell<Vec<ScrollRequest>>,
    opened_uris: RefCell<Vec<String>>,
    fail_handoff: Cell<bool>,
}

impl RecordingHost {
    pub fn new() -> RecordingHost {
        RecordingHost::default()
    }

    /// A host that renders one element per id.
    pub fn with_elements<S: AsRef<str>>(ids: &[S]) -> RecordingHost {
        let host = RecordingHost::new();
        for id in ids {
            host.add_element(id.as_ref());
        }
        host
    }

    pub fn add_element(&self, id: &str) {
        self.elements.borrow_mut().insert(id.to_string());
    }

    pub fn remove_element(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }

    pub fn set_scroll_y(&self, offset: f64) {
        self.scroll_y.set(offset);
    }

    /// Make every following handoff fail with `HandoffError::Dispatch`.
    pub fn fail_handoffs(&self, fail: bool) {
        self.fail_handoff.set(fail);
    }

    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.scroll_requests.borrow().clone()
    }

    pub fn opened_uris(&self) -> Vec<String> {
        self.opened_uris.borrow().clone()
    }

    pub fn last_opened_uri(&self) -> Option<String> {
        self.opened_uris.borrow().last().cloned()
    }
}

impl Host for RecordingHost {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains(id)
    }

    fn scroll_into_view(&self, id: &str) {
        self.scroll_requests
            .borrow_mut()
            .push(ScrollRequest::IntoView(id.to_string()));
    }

    fn scroll_to_top(&self) {
        self.scroll_requests.borrow_mut().push(ScrollRequest::Top);
    }

    fn request_open_uri(&self, uri: &str) -> Result<(), HandoffError> {
        if self.fail_handoff.get() {
            return Err(HandoffError::Dispatch("handler refused".to_string()));
        }
        self.opened_uris.borrow_mut().push(uri.to_string());
        Ok(())
    }
}
