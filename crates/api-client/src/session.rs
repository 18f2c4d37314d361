//! Session identifier generation and persistence.
//!
//! The session identifier correlates a client's requests server-side for the
//! lifetime of the process. It carries no authentication semantics; a
//! time-based prefix plus a random suffix is unique enough for correlation.

use chrono::Utc;
use std::sync::OnceLock;
use uuid::Uuid;

static SESSION_ID: OnceLock<String> = OnceLock::new();

/// Returns the process-wide session identifier, generating it on first use.
///
/// Idempotent: every call in the same process returns the same value. The id
/// is not persisted across processes.
pub fn get_or_create() -> &'static str {
    SESSION_ID.get_or_init(new_session_id)
}

/// Generates a fresh session identifier: `session_<unix-millis>_<suffix>`.
pub fn new_session_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("session_{}_{}", Utc::now().timestamp_millis(), &suffix[..7])
}
