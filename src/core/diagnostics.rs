//! Process-wide diagnostic hook.
//!
//! Installs a panic hook that writes the panic to the log file before
//! handing off to whatever hook was installed earlier (ratatui's terminal
//! restore hook, when running under the TUI). Installation happens at most
//! once per process; later calls are no-ops.

use std::fmt;
use std::panic;
use std::sync::Once;

use log::{error, info};

static INSTALL: Once = Once::new();

/// Installs the panic logging hook. Safe to call any number of times.
pub fn install_diagnostic_hook() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            error!("{}", describe(panic_info));
            previous(panic_info);
        }));
        info!("Diagnostic panic hook installed");
    });
}

/// Log line for a panic from anywhere in the process.
fn describe(panic_info: &dyn fmt::Display) -> String {
    format!("Fatal panic: {panic_info}")
}

/// Whether [`install_diagnostic_hook`] has completed in this process.
pub fn is_installed() -> bool {
    INSTALL.is_completed()
}
