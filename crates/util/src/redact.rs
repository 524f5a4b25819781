//! Masking of credentials in free-form text before it is logged or shown.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(authorization:\s*bearer\s+)([\w\-\.=:/+]+)",
        r"(?i)(bearer\s+)([\w\-\.=/+]{8,})",
        r"(?i)([?&]api_key=)([^&\s]+)",
        r"(?i)([A-Z0-9_]*?(?:KEY|TOKEN|SECRET|PASSWORD)=)([^\s]+)",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Redacts values that look like secrets in a string.
pub fn redact_sensitive(input: &str) -> String {
    let mut redacted = input.to_string();
    for pattern in PATTERNS.iter() {
        redacted = pattern
            .replace_all(&redacted, |caps: &Captures| {
                let prefix = caps.get(1).map(|m| m.as_str()).unwrap_or("");
                format!("{prefix}<redacted>")
            })
            .into_owned();
    }
    redacted
}
