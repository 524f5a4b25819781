//! Theme styling for the TUI.
//!
//! A Nord palette with a high-contrast variant. Prefer the role-based
//! helpers over hard-coded colors.

use std::env;

use tracing::debug;

pub mod helpers;
pub mod nord;
pub mod roles;

pub use nord::{NordTheme, NordThemeHighContrast};
pub use roles::Theme;

/// Environment variable selecting the palette.
pub const THEME_ENV: &str = "MOVIESEARCH_THEME";

/// Pick a theme from `MOVIESEARCH_THEME`, defaulting to Nord.
pub fn load() -> Box<dyn Theme> {
    let requested = env::var(THEME_ENV).unwrap_or_default();
    match requested.trim() {
        "nord-high-contrast" | "high-contrast" => {
            debug!("using high-contrast theme");
            Box::new(NordThemeHighContrast::new())
        }
        _ => Box::new(NordTheme::new()),
    }
}
