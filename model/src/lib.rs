//! # Portfolio Model
//!
//! Engines that own every piece of behavioral state on the portfolio page.
//! JS stays a thin rendering layer: it forwards events in, reads a flat frame
//! buffer out, and polls `data_version()` to decide when to re-render.
//!
//! - [`scroll_engine`]: nav chrome flags from the scroll offset
//! - [`section_nav_engine`]: click-driven section navigation, nav items, menu
//! - [`contact_form_engine`]: contact fields, mailto handoff, submit status
//! - [`page_view`]: owns the shared [`NavigationState`] and drives a [`Host`]
//! - `browser` (wasm32 only): `BrowserHost` and the `PortfolioApp` binding

pub mod contact_form_engine;
pub mod frame;
pub mod host;
pub mod logging;
pub mod navigation;
pub mod page_view;
pub mod scroll_engine;
pub mod section_nav_engine;

#[cfg(target_arch = "wasm32")]
pub mod browser;

pub use contact_form_engine::{ContactFormEngine, SubmitStatus, CONTACT_FIELDS};
pub use host::{Host, RecordingHost, ScrollRequest};
pub use navigation::NavigationState;
pub use page_view::PageView;
pub use scroll_engine::ScrollTracker;
pub use section_nav_engine::{NavItem, SectionNavigator};

pub use portfolio_shared::{PortfolioConfig, SectionId, SectionSet};
