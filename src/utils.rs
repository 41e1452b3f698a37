//! Identifier helpers

use uuid7::uuid7;

// construct a unique id with a readable prefix, e.g. "leave-<uuid7>"
pub fn new_prefixed_id(prefix: &str) -> String {
    format!("{prefix}{}", uuid7())
}
