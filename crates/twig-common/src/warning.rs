//! Parser warnings with deduplication.
//!
//! Recoverable oddities in the input (duplicate attribute keys and the like)
//! are reported once per unique message so that a large document does not
//! flood the log. Messages go out as `tracing` events at WARN level; the
//! binary decides where they end up.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a suspicious construct (emits once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Tokenizer", "duplicate attribute 'href' on <a>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_emit = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_emit {
        tracing::warn!(component = component, "{message}");
    }
}

/// Returns true if `warn_once` has already seen this component/message pair.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call before parsing an unrelated document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
