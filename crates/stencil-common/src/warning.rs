//! Degraded-value warnings, routed through the `log` facade.
//!
//! A malformed property never aborts a render: the value falls back to its
//! documented default and the fallback is reported here. Each distinct
//! message is logged once per process so a template rendered in a loop does
//! not flood the log.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Log target used for every degraded-value warning.
pub const TARGET: &str = "stencil";

/// Global set of warnings we've already logged (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a degraded value (logs once per unique message)
///
/// # Example
/// ```
/// stencil_common::warning::warn_once("units", "unparsable dimension \"banana\", using auto");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = key(component, message);
    let should_log = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_log {
        log::warn!(target: TARGET, "[{component}] {message}");
    }
}

/// Whether `warn_once` has already recorded this exact message.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_message_once() {
        warn_once("test", "records_each_message_once");
        warn_once("test", "records_each_message_once");
        assert!(was_warned("test", "records_each_message_once"));
        assert!(!was_warned("other", "records_each_message_once"));
    }

    #[test]
    fn unknown_message_is_not_recorded() {
        assert!(!was_warned("test", "never logged"));
    }
}
