//! Logging setup.
//!
//! The engines log through `tracing` macros only. Whoever embeds them calls
//! [`init_logging`] once; in the browser the events go to the devtools
//! console, natively they go to stdout. Timestamps are left off because the
//! wasm32 target has no system clock.

use tracing::Level;

/// Install a global fmt subscriber at `level`. Returns false if a subscriber
/// was already installed; calling it twice is harmless.
pub fn init_logging(level: Level) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .without_time();

    #[cfg(target_arch = "wasm32")]
    let builder = builder.with_writer(tracing_web::MakeWebConsoleWriter::new());

    builder.try_init().is_ok()
}

/// Parse a level name such as "debug" or "WARN", falling back to INFO.
pub fn parse_level(raw: &str) -> Level {
    raw.trim().parse().unwrap_or(Level::INFO)
}
