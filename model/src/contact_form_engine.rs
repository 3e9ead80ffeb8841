// =============================================================================
// Contact Form Engine
// =============================================================================
//
// Owns the contact form record (name, email, message) and the submit
// lifecycle. It provides:
//
//   - Per-field value storage with merge semantics: update_field() replaces
//     exactly one field and leaves the others alone.
//   - The input-layer gate: per-field errors (all fields required, email
//     format), touch tracking and can_submit(). submit() does NOT consult the
//     gate; the form element refuses to submit before that.
//   - The mail handoff: submit_with() builds the mailto: URI and passes it to
//     a dispatch closure (the host's request_open_uri in practice).
//   - A transient submit status with an auto-clear deadline.
//   - A data_version counter bumped on every state mutation.
//
// SUBMIT STATUS STATE MACHINE:
//
//              submit ok                      deadline / next submit
//     None ─────────────────▶ Success ─────────────────────────────▶ None
//       │      submit failed                  deadline / next submit
//       └───────────────────▶ Error   ─────────────────────────────▶ None
//
//   Success clears the three fields. Error keeps them so the user can retry
//   without retyping.
//
// AUTO-CLEAR TIMER:
//
//   After a submit, if a delay is configured, `status_clear_at_ms` holds the
//   deadline. tick(now_ms) reverts the status once now_ms reaches it. The
//   deadline is cancelled by the next submit and by cancel_status_timer()
//   (page teardown), so a torn-down view never sees a late update.
//
// =============================================================================

use std::collections::HashSet;

use portfolio_shared::validation::validate_contact_field;
use portfolio_shared::{HandoffError, MailDraft, CONTACT_RECIPIENT, DEFAULT_STATUS_CLEAR_DELAY_MS};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;

/// Names accepted by update_field().
pub const CONTACT_FIELDS: [&str; 3] = ["name", "email", "message"];

/// Outcome of the most recent submit, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SubmitStatus {
    #[default]
    None = 0,
    Success = 1,
    Error = 2,
}

impl SubmitStatus {
    /// Numeric code used in the frame buffer.
    pub fn code(self) -> u8 {
        self as u8
    }
}

// -----------------------------------------------------------------------------
// ContactFormEngine struct
// -----------------------------------------------------------------------------

#[wasm_bindgen]
#[derive(Debug)]
pub struct ContactFormEngine {
    name: String,
    email: String,
    message: String,

    /// Fields that have been blurred at least once. Errors only show for
    /// touched fields so an untouched form is not covered in red.
    touched: HashSet<String>,

    /// True only inside submit_with().
    is_submitting: bool,
    submit_status: SubmitStatus,

    /// Pending auto-clear deadline in ms, if armed.
    status_clear_at_ms: Option<f64>,

    recipient: String,
    status_clear_delay_ms: Option<f64>,

    data_version: u32,
}

// =============================================================================
// WASM-exposed methods
// =============================================================================

#[wasm_bindgen]
impl ContactFormEngine {
    /// Empty form addressed to the default recipient with the default
    /// auto-clear delay.
    #[wasm_bindgen(constructor)]
    pub fn new() -> ContactFormEngine {
        ContactFormEngine::with_settings(CONTACT_RECIPIENT, Some(DEFAULT_STATUS_CLEAR_DELAY_MS))
    }

    // -------------------------------------------------------------------------
    // Field mutation
    // -------------------------------------------------------------------------

    /// Overwrite one field. Unknown names are ignored. Returns true if the
    /// stored value changed.
    pub fn update_field(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "message" => &mut self.message,
            other => {
                debug!(field = other, "ignoring update for unknown contact field");
                return false;
            }
        };
        if *slot == value {
            return false;
        }
        slot.clear();
        slot.push_str(value);
        self.bump_version();
        true
    }

    /// Called on blur so the field's error (if any) becomes visible.
    pub fn touch_field(&mut self, name: &str) {
        if CONTACT_FIELDS.contains(&name) && self.touched.insert(name.to_string()) {
            self.bump_version();
        }
    }

    // -------------------------------------------------------------------------
    // Field queries
    // -------------------------------------------------------------------------

    /// Current value of a field, or "" for unknown names.
    pub fn field_value(&self, name: &str) -> String {
        self.field(name).map(str::to_string).unwrap_or_default()
    }

    /// Validation error for a touched field, or "" if valid or untouched.
    pub fn field_error(&self, name: &str) -> String {
        if !self.touched.contains(name) {
            return String::new();
        }
        match self.field(name) {
            Some(value) => validate_contact_field(name, value).err().unwrap_or_default(),
            None => String::new(),
        }
    }

    pub fn field_touched(&self, name: &str) -> bool {
        self.touched.contains(name)
    }

    /// The input-layer gate: every field passes its rule chain.
    pub fn can_submit(&self) -> bool {
        CONTACT_FIELDS.iter().all(|&name| {
            self.field(name)
                .map_or(true, |value| validate_contact_field(name, value).is_ok())
        })
    }

    // -------------------------------------------------------------------------
    // Submit status
    // -------------------------------------------------------------------------

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Numeric status: 0 = none, 1 = success, 2 = error.
    pub fn submit_status_code(&self) -> u8 {
        self.submit_status.code()
    }

    /// User-facing text for the current status, "" when there is none.
    pub fn status_message(&self) -> String {
        match self.submit_status {
            SubmitStatus::None => String::new(),
            SubmitStatus::Success => {
                "Thank you! Your email client should open with your message ready to send."
                    .to_string()
            }
            SubmitStatus::Error => format!(
                "Something went wrong opening your email client. Please email me directly at {}.",
                self.recipient
            ),
        }
    }

    /// Revert the status to none once the auto-clear deadline is reached.
    /// Returns true if the status changed.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        match self.status_clear_at_ms {
            Some(deadline) if now_ms >= deadline => self.expire_status(),
            _ => false,
        }
    }

    /// Clear the status now if an auto-clear is armed, regardless of the
    /// clock. Used when the platform timer fires. Returns true if the
    /// status changed.
    pub fn expire_status(&mut self) -> bool {
        if self.status_clear_at_ms.take().is_none() {
            return false;
        }
        if self.submit_status == SubmitStatus::None {
            return false;
        }
        debug!("submit status cleared");
        self.submit_status = SubmitStatus::None;
        self.bump_version();
        true
    }

    /// Disarm the auto-clear without touching the status.
    pub fn cancel_status_timer(&mut self) {
        self.status_clear_at_ms = None;
    }

    pub fn has_pending_status_clear(&self) -> bool {
        self.status_clear_at_ms.is_some()
    }

    pub fn data_version(&self) -> u32 {
        self.data_version
    }
}

// =============================================================================
// Internal methods (not exposed to JS)
// =============================================================================

impl ContactFormEngine {
    pub fn with_settings(recipient: &str, status_clear_delay_ms: Option<f64>) -> ContactFormEngine {
        ContactFormEngine {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            touched: HashSet::new(),
            is_submitting: false,
            submit_status: SubmitStatus::None,
            status_clear_at_ms: None,
            recipient: recipient.to_string(),
            status_clear_delay_ms,
            data_version: 0,
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "email" => Some(&self.email),
            "message" => Some(&self.message),
            _ => None,
        }
    }

    fn bump_version(&mut self) {
        self.data_version = self.data_version.wrapping_add(1);
    }

    pub fn submit_status(&self) -> SubmitStatus {
        self.submit_status
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Deadline of the armed auto-clear, in ms.
    pub fn status_clear_at_ms(&self) -> Option<f64> {
        self.status_clear_at_ms
    }

    /// The draft built from the current field values.
    pub fn draft(&self) -> MailDraft<'_> {
        MailDraft {
            name: &self.name,
            email: &self.email,
            message: &self.message,
        }
    }

    /// The handoff target for the current field values.
    pub fn mailto_uri(&self) -> String {
        self.draft().mailto_uri(&self.recipient)
    }

    /// Run one submit: build the mailto: URI, hand it to `dispatch`, and
    /// record the outcome.
    ///
    /// `dispatch` is fire-and-forget; an `Err` means the platform refused
    /// the URI synchronously. On success the fields are cleared, on failure
    /// they are kept. Either way an auto-clear deadline is armed at
    /// `now_ms + delay` when a delay is configured.
    pub fn submit_with<F>(&mut self, now_ms: f64, dispatch: F) -> SubmitStatus
    where
        F: FnOnce(&str) -> Result<(), HandoffError>,
    {
        // A new attempt resets the previous outcome and its timer.
        self.status_clear_at_ms = None;
        self.submit_status = SubmitStatus::None;
        self.is_submitting = true;

        let uri = self.mailto_uri();
        let outcome = dispatch(&uri);
        self.is_submitting = false;

        match outcome {
            Ok(()) => {
                info!(recipient = %self.recipient, "handed contact message to mail client");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.touched.clear();
                self.submit_status = SubmitStatus::Success;
            }
            Err(err) => {
                warn!(error = %err, "mail handoff failed, keeping form contents");
                self.submit_status = SubmitStatus::Error;
            }
        }

        if let Some(delay) = self.status_clear_delay_ms {
            self.status_clear_at_ms = Some(now_ms + delay);
        }
        self.bump_version();
        self.submit_status
    }
}

impl Default for ContactFormEngine {
    fn default() -> Self {
        ContactFormEngine::new()
    }
}
