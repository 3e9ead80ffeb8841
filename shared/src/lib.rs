//! # Portfolio Shared Crate
//!
//! Domain types, constants, configuration and validation shared between the
//! engine crate (native Rust in tests, WASM in the browser) and anything else
//! that needs to agree on what a section is or what the contact handoff looks
//! like. This crate is the single source of truth for those rules.
//!
//! ## Architecture
//!
//! ```text
//! shared crate (this)
//!   |
//!   +-- model crate (depends on shared)
//!         - ScrollEngine / SectionNavEngine / ContactFormEngine
//!         - PageView<H: Host> wiring the engines to a host
//!         - wasm_bindgen browser binding (wasm32 only)
//! ```
//!
//! ## What belongs here
//!
//! - Section identifiers and the configured section set
//! - The `mailto:` codec (subject/body templates, percent-encoding)
//! - Page configuration and its defaults
//! - Error types
//! - Field validation used by the contact form's input gate
//!
//! ## What does NOT belong here
//!
//! - `#[wasm_bindgen]` attributes (those live in the model crate)
//! - DOM access, timers or any other platform code

pub mod config;
pub mod error;
pub mod mailto;
pub mod sections;
pub mod validation;

pub use config::PortfolioConfig;
pub use error::{ConfigError, HandoffError};
pub use mailto::MailDraft;
pub use sections::{SectionId, SectionSet};

// ============================================
// Constants
//
// Defaults for every tunable the page exposes.
// PortfolioConfig falls back to these when a
// field is omitted.
// ============================================

/// Scroll offset (px) past which the nav bar switches to its scrolled chrome.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Scroll offset (px) past which the floating back-to-top button shows.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// How long a submit status stays on screen before reverting to none.
pub const DEFAULT_STATUS_CLEAR_DELAY_MS: f64 = 3000.0;

/// Address every contact handoff is sent to.
pub const CONTACT_RECIPIENT: &str = "natenaelnebiyu@gmail.com";

/// Longest accepted section identifier.
pub const MAX_SECTION_ID_LEN: usize = 32;

/// Tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

// ============================================
// Validation Helpers
// ============================================

/// Validate a non-negative finite number.
pub fn validate_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validate a section identifier: non-empty, within length limit,
/// ASCII alphanumeric with `-` or `_`.
pub fn validate_identifier(s: &str, max_len: usize) -> bool {
    !s.is_empty()
        && s.len() <= max_len
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Clamp a raw scroll reading to something the trackers can compare.
/// Browsers report negative offsets during elastic overscroll.
pub fn sanitize_offset(value: f64) -> f64 {
    if validate_non_negative(value) {
        value
    } else {
        0.0
    }
}

// ============================================
// Tests
// ============================================
