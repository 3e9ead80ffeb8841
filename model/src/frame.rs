// ============================================
// Frame buffer offsets
//
// These MUST match the JS F constants exactly.
// The renderer reads one flat Float64Array per
// animation frame instead of calling a getter
// per field. Booleans are 0.0/1.0.
// ============================================

pub const F_SCROLLED: usize = 0; // Nav bar scrolled chrome
pub const F_BACK_TO_TOP: usize = 1; // Back-to-top button visible
pub const F_ACTIVE_INDEX: usize = 2; // Index of the active section in the configured order
pub const F_MENU_OPEN: usize = 3; // Compact-screen menu open
pub const F_SUBMITTING: usize = 4; // Contact submit in progress
pub const F_SUBMIT_STATUS: usize = 5; // 0 = none, 1 = success, 2 = error
pub const FRAME_SIZE: usize = 6;

#[inline]
pub(crate) fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
