//! Transient user notices.
//!
//! Three kinds, each with a fixed auto-expiry window. The orchestrator queues
//! notices; the UI drains and renders them however it likes.

use std::time::Duration;

/// Toasts disappear after this long.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Error banners stay visible longer than toasts.
pub const ERROR_BANNER_TTL: Duration = Duration::from_secs(8);

/// The location retry prompt lingers longest.
pub const LOCATION_PROMPT_TTL: Duration = Duration::from_secs(10);

/// What kind of notice this is, which decides placement and expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Short confirmation of a user action
    Toast,
    /// Something failed; shown prominently
    ErrorBanner,
    /// Offer to retry geolocation after a fallback
    LocationPrompt,
}

/// A queued notice with its display window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text shown to the user
    pub message: String,
    /// Kind, deciding placement
    pub kind: NoticeKind,
    /// How long the notice stays visible
    pub ttl: Duration,
}

impl Notice {
    /// A short confirmation toast.
    pub fn toast(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Toast,
            ttl: TOAST_TTL,
        }
    }

    /// An error banner.
    pub fn error_banner(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::ErrorBanner,
            ttl: ERROR_BANNER_TTL,
        }
    }

    /// The prompt offering to retry geolocation.
    pub fn location_prompt() -> Self {
        Self {
            message: "Enable location for better restaurant recommendations".to_string(),
            kind: NoticeKind::LocationPrompt,
            ttl: LOCATION_PROMPT_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttls_per_kind() {
        assert_eq!(Notice::toast("hi").ttl, Duration::from_secs(3));
        assert_eq!(Notice::error_banner("bad").ttl, Duration::from_secs(8));
        assert_eq!(Notice::location_prompt().ttl, Duration::from_secs(10));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Notice::toast("hi").kind, NoticeKind::Toast);
        assert_eq!(Notice::error_banner("bad").kind, NoticeKind::ErrorBanner);
        assert_eq!(Notice::location_prompt().kind, NoticeKind::LocationPrompt);
    }
}
